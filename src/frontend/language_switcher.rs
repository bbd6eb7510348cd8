use super::dom::{document, event_is_inside, focus, EventListener};
use super::use_i18n;
use crate::i18n::{Locale, SUPPORTED_LOCALES};
use crate::nav::{Disclosure, Dismissal, FocusTarget};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let i18n = use_i18n();
    let dropdown = use_state(Disclosure::default);
    let container_ref = use_node_ref();
    let trigger_ref = use_node_ref();

    let dismiss = {
        let dropdown = dropdown.clone();
        let trigger_ref = trigger_ref.clone();
        Callback::from(move |reason: Dismissal| {
            let mut next = *dropdown;
            if next.dismiss(reason) == Some(FocusTarget::Trigger) {
                focus(&trigger_ref);
            }
            dropdown.set(next);
        })
    };

    {
        let dismiss = dismiss.clone();
        let container_ref = container_ref.clone();
        use_effect_with(dropdown.is_open(), move |open| {
            let listeners = if *open {
                document().map(|document| {
                    let on_escape = dismiss.clone();
                    let on_outside = dismiss;
                    (
                        EventListener::new(&document, "keydown", move |event| {
                            if event
                                .dyn_ref::<KeyboardEvent>()
                                .is_some_and(|key| key.key() == "Escape")
                            {
                                on_escape.emit(Dismissal::Escape);
                            }
                        }),
                        EventListener::new(&document, "mousedown", move |event| {
                            if !event_is_inside(&event, &container_ref) {
                                on_outside.emit(Dismissal::OutsideClick);
                            }
                        }),
                    )
                })
            } else {
                None
            };
            move || drop(listeners)
        });
    }

    let on_toggle = {
        let dropdown = dropdown.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *dropdown;
            next.toggle();
            dropdown.set(next);
        })
    };

    let current = i18n.locale();
    let options = SUPPORTED_LOCALES.into_iter().map(|locale: Locale| {
        let selected = locale == current;
        let onclick = {
            let i18n = i18n.clone();
            let dismiss = dismiss.clone();
            Callback::from(move |_: MouseEvent| {
                i18n.set_locale(locale);
                dismiss.emit(Dismissal::Activated);
            })
        };

        html! {
            <li role="none" key={locale.as_str()}>
                <button
                    type="button"
                    role="menuitemradio"
                    class={classes!("language-option", selected.then_some("is-active"))}
                    aria-checked={selected.to_string()}
                    lang={locale.as_str()}
                    onclick={onclick}
                >
                    <span aria-hidden="true">{locale.flag()}</span>
                    <span>{locale.label()}</span>
                </button>
            </li>
        }
    });

    html! {
        <div class="language-switcher" ref={container_ref}>
            <button
                type="button"
                class="language-trigger"
                ref={trigger_ref}
                aria-haspopup="menu"
                aria-expanded={dropdown.is_open().to_string()}
                aria-controls="language-menu"
                aria-label={i18n.t("language.select")}
                onclick={on_toggle}
            >
                <span aria-hidden="true">{current.flag()}</span>
                <span class="language-code">{current.as_str().to_ascii_uppercase()}</span>
            </button>
            if dropdown.is_open() {
                <ul id="language-menu" class="language-menu" role="menu" aria-label={i18n.t("language.select")}>
                    { for options }
                </ul>
            }
        </div>
    }
}
