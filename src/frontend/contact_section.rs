use super::dom::Timeout;
use super::{reveal_classes, use_i18n, use_reveal, SectionHeading};
use crate::contact::{ContactForm, Field, Phase};
use crate::content::{CONTACT_EMAIL, GITHUB_PROFILE_URL, LINKEDIN_PROFILE_URL};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub enum FormAction {
    Edit(Field, String),
    Submit,
    Advance,
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            FormAction::Edit(field, value) => next.edit(field, value),
            FormAction::Submit => next.submit(),
            FormAction::Advance => next.advance() != self.phase(),
        };

        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let i18n = use_i18n();
    let (reveal_ref, visible) = use_reveal();
    let form = use_reducer_eq(ContactForm::default);

    {
        let dispatcher = form.dispatcher();
        use_effect_with(form.phase(), move |phase| {
            let timer = phase
                .dwell_ms()
                .and_then(|millis| Timeout::new(millis, move || dispatcher.dispatch(FormAction::Advance)));
            move || drop(timer)
        });
    }

    let on_input = |field: Field| {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            dispatcher.dispatch(FormAction::Edit(field, value));
        })
    };

    let on_message = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlTextAreaElement>().value();
            dispatcher.dispatch(FormAction::Edit(Field::Message, value));
        })
    };

    let on_submit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(FormAction::Submit);
        })
    };

    let phase = form.phase();
    let submitting = phase == Phase::Submitting;
    let fields = form.fields();

    html! {
        <section id="contact" class="section contact" aria-labelledby="contact-title">
            <div class="section-inner" ref={reveal_ref}>
                <SectionHeading
                    id="contact-title"
                    title={i18n.t("contact.title")}
                    accent={i18n.t("contact.titleAccent")}
                    description={i18n.t("contact.description")}
                />

                <div class="contact-grid">
                    <aside class={reveal_classes("contact-info", visible)}>
                        <h3>{i18n.t("contact.infoTitle")}</h3>
                        <dl>
                            <dt>{i18n.t("contact.emailTitle")}</dt>
                            <dd><a href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a></dd>
                            <dt>{i18n.t("contact.locationTitle")}</dt>
                            <dd>{i18n.t("contact.locationValue")}</dd>
                        </dl>
                        <h3>{i18n.t("contact.followTitle")}</h3>
                        <ul class="social-links">
                            <li>
                                <a href={GITHUB_PROFILE_URL} target="_blank" rel="noopener noreferrer" aria-label={i18n.t("hero.githubLabel")}>
                                    {"GitHub"}
                                </a>
                            </li>
                            <li>
                                <a href={LINKEDIN_PROFILE_URL} target="_blank" rel="noopener noreferrer" aria-label={i18n.t("hero.linkedinLabel")}>
                                    {"LinkedIn"}
                                </a>
                            </li>
                        </ul>
                    </aside>

                    <div class={reveal_classes("contact-form-card", visible)}>
                        <h3>{i18n.t("contact.formTitle")}</h3>
                        if phase == Phase::Submitted {
                            <div class="form-success" role="status">
                                <span class="success-mark" aria-hidden="true">{"✓"}</span>
                                <h4>{i18n.t("contact.successTitle")}</h4>
                                <p>{i18n.t("contact.successBody")}</p>
                            </div>
                        } else {
                            <form class="contact-form" onsubmit={on_submit} aria-busy={submitting.to_string()}>
                                <div class="form-row">
                                    <label for="contact-name">{i18n.t("contact.nameLabel")}</label>
                                    <input
                                        id="contact-name"
                                        name="name"
                                        type="text"
                                        autocomplete="name"
                                        required={true}
                                        disabled={submitting}
                                        placeholder={i18n.t("contact.namePlaceholder")}
                                        value={fields.name.clone()}
                                        oninput={on_input(Field::Name)}
                                    />
                                </div>
                                <div class="form-row">
                                    <label for="contact-email">{i18n.t("contact.emailLabel")}</label>
                                    <input
                                        id="contact-email"
                                        name="email"
                                        type="email"
                                        autocomplete="email"
                                        required={true}
                                        disabled={submitting}
                                        placeholder={i18n.t("contact.emailPlaceholder")}
                                        value={fields.email.clone()}
                                        oninput={on_input(Field::Email)}
                                    />
                                </div>
                                <div class="form-row">
                                    <label for="contact-subject">{i18n.t("contact.subjectLabel")}</label>
                                    <input
                                        id="contact-subject"
                                        name="subject"
                                        type="text"
                                        required={true}
                                        disabled={submitting}
                                        placeholder={i18n.t("contact.subjectPlaceholder")}
                                        value={fields.subject.clone()}
                                        oninput={on_input(Field::Subject)}
                                    />
                                </div>
                                <div class="form-row">
                                    <label for="contact-message">{i18n.t("contact.messageLabel")}</label>
                                    <textarea
                                        id="contact-message"
                                        name="message"
                                        rows="5"
                                        required={true}
                                        disabled={submitting}
                                        placeholder={i18n.t("contact.messagePlaceholder")}
                                        value={fields.message.clone()}
                                        oninput={on_message}
                                    />
                                </div>
                                <button type="submit" class="button button-primary" disabled={submitting}>
                                    if submitting {
                                        <span class="spinner" aria-hidden="true"></span>
                                        {i18n.t("contact.sending")}
                                    } else {
                                        {i18n.t("contact.send")}
                                    }
                                </button>
                            </form>
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
