use super::dom::document;
use super::{reveal_classes, reveal_delay, use_i18n, use_reveal, SectionHeading};
use crate::content::SKILLS;
use crate::skills::{filter_skills, style_for, tab_for_key, CategoryId, CATEGORY_STYLES};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

const PANEL_ID: &str = "skills-panel";

fn tab_id(category: CategoryId) -> String {
    format!("skills-tab-{}", category.as_str())
}

fn focus_tab(category: CategoryId) {
    if let Some(tab) = document()
        .and_then(|document| document.get_element_by_id(&tab_id(category)))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        let _ = tab.focus();
    }
}

#[function_component(SkillGrid)]
pub fn skill_grid() -> Html {
    let i18n = use_i18n();
    let (reveal_ref, visible) = use_reveal();
    let active = use_state(CategoryId::default);

    let tabs = CATEGORY_STYLES.iter().map(|style| {
        let selected = *active == style.id;
        let onclick = {
            let active = active.clone();
            let id = style.id;
            Callback::from(move |_: MouseEvent| active.set(id))
        };

        html! {
            <button
                key={style.id.as_str()}
                id={tab_id(style.id)}
                type="button"
                role="tab"
                class={classes!(
                    "skill-tab",
                    selected.then_some(style.fill_class),
                    selected.then_some("is-active"),
                )}
                aria-selected={selected.to_string()}
                aria-controls={PANEL_ID}
                tabindex={if selected { "0" } else { "-1" }}
                onclick={onclick}
            >
                {i18n.t(style.label_key)}
            </button>
        }
    });

    let on_tab_key = {
        let active = active.clone();
        Callback::from(move |event: KeyboardEvent| {
            if let Some(next) = tab_for_key(*active, &event.key()) {
                event.prevent_default();
                focus_tab(next);
                active.set(next);
            }
        })
    };

    // Cards are focusable for browsing only; Space must not scroll the page.
    let on_card_key = Callback::from(|event: KeyboardEvent| {
        if matches!(event.key().as_str(), "Enter" | " ") {
            event.prevent_default();
        }
    });

    let active_label = i18n.t(style_for(*active).label_key);
    let cards = filter_skills(&SKILLS, *active)
        .into_iter()
        .enumerate()
        .map(|(index, skill)| {
            let style = style_for(skill.category.into());
            html! {
                <li
                    key={skill.name}
                    class={classes!(reveal_classes("skill-card", visible), style.border_class)}
                    style={reveal_delay(index)}
                    tabindex="0"
                    onkeydown={on_card_key.clone()}
                    aria-label={i18n.t_with("skills.skillLabel", &[("name", skill.name)])}
                >
                    <span class={classes!("skill-icon", style.text_class)} aria-hidden="true">{skill.icon}</span>
                    <span class="skill-name">{skill.name}</span>
                </li>
            }
        });

    html! {
        <section id="skills" class="section skills" aria-labelledby="skills-title">
            <div class="section-inner" ref={reveal_ref}>
                <SectionHeading
                    id="skills-title"
                    title={i18n.t("skills.title")}
                    accent={i18n.t("skills.titleAccent")}
                    description={i18n.t("skills.description")}
                />

                <div class="skill-tabs" role="tablist" aria-label={i18n.t("skills.filterLabel")} onkeydown={on_tab_key}>
                    { for tabs }
                </div>

                <ul
                    id={PANEL_ID}
                    class="skill-grid"
                    role="tabpanel"
                    aria-labelledby={tab_id(*active)}
                >
                    { for cards }
                </ul>
                <p class="sr-only" aria-live="polite">
                    {i18n.t_with("skills.panelLabel", &[("category", active_label.as_str())])}
                </p>
            </div>
        </section>
    }
}
