use super::dom::{active_element, document, focus, focusable_within, EventListener, ScrollLock};
use super::{reveal_classes, reveal_delay, use_i18n, use_reveal, SectionHeading};
use crate::content::projects;
use crate::gallery::{tag_preview, trap_focus, Project, ProjectSelection, CARD_TAG_LIMIT};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    index: usize,
    visible: bool,
    on_select: Callback<u32>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let i18n = use_i18n();
    let project = &props.project;
    let preview = tag_preview(&project.technologies, CARD_TAG_LIMIT);

    let onclick = {
        let on_select = props.on_select.clone();
        let id = project.id;
        Callback::from(move |_: MouseEvent| on_select.emit(id))
    };

    let onkeydown = {
        let on_select = props.on_select.clone();
        let id = project.id;
        Callback::from(move |event: KeyboardEvent| {
            if matches!(event.key().as_str(), "Enter" | " ") {
                event.prevent_default();
                on_select.emit(id);
            }
        })
    };

    let title = project.title.as_str();
    html! {
        <li
            class={reveal_classes("project-card", props.visible)}
            style={reveal_delay(props.index)}
            itemscope="itemscope"
            itemtype="https://schema.org/CreativeWork"
        >
            <div
                class="project-card-body"
                role="button"
                tabindex="0"
                aria-label={i18n.t_with("projects.openLabel", &[("title", title)])}
                onclick={onclick}
                onkeydown={onkeydown}
            >
                <img
                    class="project-image"
                    src={project.image.clone()}
                    alt={i18n.t_with(
                        "projects.imageAlt",
                        &[("title", title), ("description", project.description.as_str())],
                    )}
                    loading="lazy"
                    itemprop="image"
                />
                <div class="project-copy">
                    <h3 itemprop="name">{project.title.clone()}</h3>
                    <p class="project-description" itemprop="description">{project.description.clone()}</p>
                    <ul class="tag-list" aria-label={i18n.t("projects.technologiesLabel")}>
                        { for preview.visible.iter().map(|tech| html! { <li key={tech.clone()} class="tag">{tech.clone()}</li> }) }
                        if let Some(overflow) = preview.overflow_label() {
                            <li class="tag tag-overflow">{overflow}</li>
                        }
                    </ul>
                    <span class="project-more" aria-hidden="true">{i18n.t("projects.viewDetails")}</span>
                </div>
                if let Some(date) = project.date_published.clone() {
                    <meta itemprop="datePublished" content={date} />
                }
                if let Some(client) = project.client.clone() {
                    <meta itemprop="creator" content={client} />
                }
            </div>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    project: Project,
    dialog_ref: NodeRef,
    close_ref: NodeRef,
    on_close: Callback<()>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let i18n = use_i18n();
    let project = &props.project;
    let title = project.title.as_str();

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="project-modal-title"
                ref={props.dialog_ref.clone()}
                onclick={keep_open}
            >
                <img
                    class="modal-image"
                    src={project.image.clone()}
                    alt={i18n.t_with("projects.screenshotAlt", &[("title", title)])}
                />
                <div class="modal-body">
                    <h3 id="project-modal-title">{project.title.clone()}</h3>
                    <p>{project.details.clone()}</p>

                    <h4>{i18n.t("projects.technologies")}</h4>
                    <ul class="tag-list" aria-label={i18n.t("projects.technologiesLabel")}>
                        { for project.technologies.iter().map(|tech| html! { <li key={tech.clone()} class="tag">{tech.clone()}</li> }) }
                    </ul>

                    <div class="modal-actions">
                        <button
                            type="button"
                            class="button button-secondary"
                            ref={props.close_ref.clone()}
                            aria-label={i18n.t("projects.closeLabel")}
                            onclick={on_close_click}
                        >
                            {i18n.t("projects.close")}
                        </button>
                        <a
                            class="button button-primary"
                            href={project.link.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={i18n.t_with("projects.visitLabel", &[("title", title)])}
                        >
                            {i18n.t("projects.visit")}
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn handle_modal_key(event: &KeyboardEvent, dialog_ref: &NodeRef, on_close: &Callback<()>) {
    match event.key().as_str() {
        "Escape" => on_close.emit(()),
        "Tab" => {
            let Some(dialog) = dialog_ref.cast::<Element>() else {
                return;
            };
            let focusable = focusable_within(&dialog);
            let current = active_element().and_then(|active| {
                focusable
                    .iter()
                    .position(|element| element.is_same_node(Some(active.as_ref())))
            });

            if let Some(target) = trap_focus(current, focusable.len(), event.shift_key()) {
                event.prevent_default();
                let _ = focusable[target].focus();
            }
        }
        _ => {}
    }
}

#[function_component(ProjectGallery)]
pub fn project_gallery() -> Html {
    let i18n = use_i18n();
    let (reveal_ref, visible) = use_reveal();
    let selection = use_state(ProjectSelection::default);
    let trigger = use_mut_ref(|| None::<HtmlElement>);
    let dialog_ref = use_node_ref();
    let close_ref = use_node_ref();

    let catalog = i18n.catalog();
    let items: Rc<Vec<Project>> = use_memo(i18n.locale(), move |_| projects(&catalog));

    let on_select = {
        let selection = selection.clone();
        let trigger = trigger.clone();
        Callback::from(move |id: u32| {
            let mut next = *selection;
            next.select(id);
            *trigger.borrow_mut() = active_element();
            selection.set(next);
        })
    };

    let on_close = {
        let selection = selection.clone();
        let trigger = trigger.clone();
        Callback::from(move |_: ()| {
            let mut next = *selection;
            if !next.close() {
                return;
            }
            selection.set(next);
            if let Some(element) = trigger.borrow_mut().take() {
                let _ = element.focus();
            }
        })
    };

    {
        let dialog_ref = dialog_ref.clone();
        let close_ref = close_ref.clone();
        let on_close = on_close.clone();
        use_effect_with(selection.active(), move |active| {
            let resources = active.map(|_| {
                focus(&close_ref);
                let lock = ScrollLock::engage();
                let keys = document().and_then(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                            handle_modal_key(key, &dialog_ref, &on_close);
                        }
                    })
                });
                (lock, keys)
            });
            move || drop(resources)
        });
    }

    let active_project = selection.resolve(&items).cloned();

    html! {
        <section id="projects" class="section projects" aria-labelledby="projects-title">
            <div class="section-inner" ref={reveal_ref}>
                <SectionHeading
                    id="projects-title"
                    title={i18n.t("projects.title")}
                    accent={i18n.t("projects.titleAccent")}
                    description={i18n.t("projects.description")}
                />

                <ul class="project-grid" aria-label={i18n.t("projects.gridLabel")}>
                    { for items.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard
                            key={project.id}
                            project={project.clone()}
                            index={index}
                            visible={visible}
                            on_select={on_select.clone()}
                        />
                    }) }
                </ul>
            </div>

            if let Some(project) = active_project {
                <ProjectModal
                    project={project}
                    dialog_ref={dialog_ref.clone()}
                    close_ref={close_ref.clone()}
                    on_close={on_close.clone()}
                />
            }
        </section>
    }
}
