mod about;
mod contact_section;
mod dom;
mod footer;
mod head;
mod header;
mod hero;
mod language_switcher;
mod project_gallery;
mod skill_grid;

use crate::i18n::{Catalog, Locale};
use about::About;
use contact_section::ContactSection;
use dom::{console_warn, SectionObserver};
use footer::Footer;
use head::Head;
use header::Header;
use hero::Hero;
use project_gallery::ProjectGallery;
use skill_grid::SkillGrid;
use std::rc::Rc;
use web_sys::{window, Element, Storage};
use yew::prelude::*;

const LOCALE_KEY: &str = "portfolio-locale";
const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";
const REVEAL_THRESHOLD: f64 = 0.1;

/// Shared translation context. Equality is catalog identity, so consumers
/// only re-render when the locale actually changes.
#[derive(Clone)]
pub struct I18n {
    catalog: Rc<Catalog>,
    on_change: Callback<Locale>,
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.catalog, &other.catalog)
    }
}

impl I18n {
    fn standalone() -> Self {
        Self {
            catalog: Rc::new(load_catalog(Locale::default())),
            on_change: Callback::noop(),
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.catalog.translate(key)
    }

    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.catalog.translate_with(key, params)
    }

    pub fn locale(&self) -> Locale {
        self.catalog.locale()
    }

    pub fn catalog(&self) -> Rc<Catalog> {
        self.catalog.clone()
    }

    pub fn set_locale(&self, locale: Locale) {
        self.on_change.emit(locale);
    }
}

#[hook]
pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or_else(I18n::standalone)
}

/// Sampled once per mount; a preference change applies on the next mount.
#[hook]
pub fn use_reduced_motion() -> bool {
    *use_memo((), |_| prefers_reduced_motion())
}

/// Flips to `true` the first time the referenced element scrolls into view,
/// then stops observing. Starts visible when motion is reduced.
#[hook]
pub fn use_reveal() -> (NodeRef, bool) {
    let node = use_node_ref();
    let reduced_motion = use_reduced_motion();
    let visible = use_state(move || reduced_motion);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with(*visible, move |already_visible| {
            let observer = if *already_visible {
                None
            } else {
                node.cast::<Element>().and_then(|element| {
                    let observer =
                        SectionObserver::new(REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, move |entries| {
                            if entries.iter().any(|entry| entry.is_intersecting()) {
                                visible.set(true);
                            }
                        })?;
                    observer.observe(&element);
                    Some(observer)
                })
            };
            move || drop(observer)
        });
    }

    (node, *visible)
}

pub fn reveal_classes(base: &'static str, visible: bool) -> Classes {
    classes!(base, "reveal", visible.then_some("is-visible"))
}

pub fn reveal_delay(index: usize) -> String {
    format!("--reveal-index: {index};")
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored_locale() -> Option<String> {
    local_storage()?.get_item(LOCALE_KEY).ok().flatten()
}

fn persist_locale(locale: Locale) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(LOCALE_KEY, locale.as_str());
    }
}

fn document_lang() -> Option<String> {
    window()?
        .document()?
        .document_element()?
        .get_attribute("lang")
}

fn navigator_language() -> Option<String> {
    window()?.navigator().language()
}

fn resolve_locale() -> Locale {
    Locale::detect([read_stored_locale(), document_lang(), navigator_language()])
}

fn load_catalog(locale: Locale) -> Catalog {
    Catalog::bundled(locale).unwrap_or_else(|error| {
        console_warn(&format!("translations unavailable: {error}"));
        Catalog::empty(locale)
    })
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub id: AttrValue,
    pub title: AttrValue,
    pub accent: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <h2 id={props.id.clone()}>
                {props.title.clone()}{" "}
                <span class="accent">{props.accent.clone()}</span>
            </h2>
            <span class="section-rule" aria-hidden="true"></span>
            if let Some(description) = props.description.clone() {
                <p class="section-description">{description}</p>
            }
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let catalog = use_state(|| Rc::new(load_catalog(resolve_locale())));

    let on_change = {
        let catalog = catalog.clone();
        Callback::from(move |locale: Locale| {
            if catalog.locale() == locale {
                return;
            }
            persist_locale(locale);
            catalog.set(Rc::new(load_catalog(locale)));
        })
    };

    let i18n = I18n {
        catalog: (*catalog).clone(),
        on_change,
    };
    let skip_label = i18n.t("nav.skipToContent");

    html! {
        <ContextProvider<I18n> context={i18n}>
            <Head />
            <a class="skip-link" href="#main-content">{skip_label}</a>
            <Header />
            <main id="main-content" tabindex="-1">
                <Hero />
                <About />
                <SkillGrid />
                <ProjectGallery />
                <ContactSection />
            </main>
            <Footer />
        </ContextProvider<I18n>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
