use super::dom::{document, focus, EventListener, SectionObserver};
use super::language_switcher::LanguageSwitcher;
use super::{use_i18n, I18n};
use crate::content::{BRAND, NAV_LINKS};
use crate::nav::{Disclosure, Dismissal, FocusTarget, ScrollSpy, ScrollTracker, SPY_ROOT_MARGIN};
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

fn nav_links(
    i18n: &I18n,
    active: Option<&str>,
    on_dismiss: &Callback<Dismissal>,
    first_link: Option<&NodeRef>,
) -> Html {
    NAV_LINKS
        .iter()
        .enumerate()
        .map(|(index, link)| {
            let is_active = active == Some(link.anchor);
            let onclick = {
                let on_dismiss = on_dismiss.clone();
                Callback::from(move |_: MouseEvent| on_dismiss.emit(Dismissal::Activated))
            };
            let link_ref = match first_link {
                Some(first) if index == 0 => first.clone(),
                _ => NodeRef::default(),
            };

            html! {
                <li key={link.anchor}>
                    <a
                        href={link.anchor}
                        ref={link_ref}
                        class={classes!("nav-link", is_active.then_some("is-active"))}
                        aria-current={is_active.then_some("location")}
                        onclick={onclick}
                    >
                        {i18n.t(link.label_key)}
                    </a>
                </li>
            }
        })
        .collect()
}

#[function_component(Header)]
pub fn header() -> Html {
    let i18n = use_i18n();
    let scrolled = use_state(|| false);
    let active = use_state(|| None::<String>);
    let menu = use_state(Disclosure::default);
    let toggle_ref = use_node_ref();
    let first_link_ref = use_node_ref();

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let mut tracker = ScrollTracker::default();
            let mut sync = move || {
                let offset = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                if let Some(next) = tracker.update(offset) {
                    scrolled.set(next);
                }
            };
            sync();

            let listener =
                window().and_then(|w| EventListener::new(&w, "scroll", move |_| sync()));
            move || drop(listener)
        });
    }

    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let mut spy = ScrollSpy::default();
            let observer = SectionObserver::new(SPY_ROOT_MARGIN, 0.0, move |entries| {
                let batch: Vec<(String, bool)> = entries
                    .iter()
                    .map(|entry| (entry.target().id(), entry.is_intersecting()))
                    .collect();
                let changed = spy.observe(batch.iter().map(|(id, hit)| (id.as_str(), *hit)));
                if let Some(anchor) = changed {
                    active.set(Some(anchor.to_string()));
                }
            });

            if let (Some(observer), Some(document)) = (observer.as_ref(), document()) {
                for link in &NAV_LINKS {
                    if let Some(section) = document.get_element_by_id(link.section_id()) {
                        observer.observe(&section);
                    }
                }
            }
            move || drop(observer)
        });
    }

    let dismiss_menu = {
        let menu = menu.clone();
        let toggle_ref = toggle_ref.clone();
        Callback::from(move |reason: Dismissal| {
            let mut next = *menu;
            if next.dismiss(reason) == Some(FocusTarget::Trigger) {
                focus(&toggle_ref);
            }
            menu.set(next);
        })
    };

    {
        let dismiss_menu = dismiss_menu.clone();
        let first_link_ref = first_link_ref.clone();
        use_effect_with(menu.is_open(), move |open| {
            let listener = if *open {
                focus(&first_link_ref);
                document().and_then(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        if event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|key| key.key() == "Escape")
                        {
                            dismiss_menu.emit(Dismissal::Escape);
                        }
                    })
                })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };

    let menu_label = if menu.is_open() {
        i18n.t("nav.closeMenu")
    } else {
        i18n.t("nav.openMenu")
    };

    html! {
        <header class={classes!("site-header", scrolled.then_some("is-scrolled"))}>
            <div class="header-inner">
                <a class="brand" href="#home">{BRAND}</a>

                <nav class="nav-desktop" aria-label={i18n.t("nav.primary")}>
                    <ul>{ nav_links(&i18n, active.as_deref(), &dismiss_menu, None) }</ul>
                </nav>

                <div class="header-actions">
                    <LanguageSwitcher />
                    <button
                        type="button"
                        class="menu-toggle"
                        ref={toggle_ref}
                        aria-expanded={menu.is_open().to_string()}
                        aria-controls="mobile-menu"
                        aria-label={menu_label}
                        onclick={on_toggle}
                    >
                        <span aria-hidden="true">{ if menu.is_open() { "✕" } else { "☰" } }</span>
                    </button>
                </div>
            </div>

            <nav
                id="mobile-menu"
                class={classes!("nav-mobile", menu.is_open().then_some("is-open"))}
                aria-label={i18n.t("nav.menuTitle")}
                hidden={!menu.is_open()}
            >
                <ul>{ nav_links(&i18n, active.as_deref(), &dismiss_menu, Some(&first_link_ref)) }</ul>
            </nav>
        </header>
    }
}
