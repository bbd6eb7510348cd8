use super::{reveal_classes, reveal_delay, use_i18n, use_reveal, SectionHeading};
use yew::prelude::*;

const FOCUS_AREAS: [(&str, &str, &str); 4] = [
    ("▣", "about.frontendTitle", "about.frontendBody"),
    ("⛁", "about.backendTitle", "about.backendBody"),
    ("☁", "about.devopsTitle", "about.devopsBody"),
    ("✦", "about.leadershipTitle", "about.leadershipBody"),
];

#[function_component(About)]
pub fn about() -> Html {
    let i18n = use_i18n();
    let (reveal_ref, visible) = use_reveal();

    html! {
        <section id="about" class="section about" aria-labelledby="about-title">
            <div class="section-inner" ref={reveal_ref}>
                <SectionHeading
                    id="about-title"
                    title={i18n.t("about.title")}
                    accent={i18n.t("about.titleAccent")}
                />

                <div class="about-grid">
                    <div class={reveal_classes("about-story", visible)}>
                        <p class="lead">{i18n.t("about.intro")}</p>
                        <h3>{i18n.t("about.journeyTitle")}</h3>
                        <p>{i18n.t("about.journeyOne")}</p>
                        <p>{i18n.t("about.journeyTwo")}</p>
                    </div>

                    <div class="about-focus">
                        <h3>{i18n.t("about.whatIDo")}</h3>
                        <ul class="focus-grid">
                            { for FOCUS_AREAS.iter().enumerate().map(|(index, (icon, title, body))| html! {
                                <li
                                    key={*title}
                                    class={reveal_classes("focus-card", visible)}
                                    style={reveal_delay(index + 1)}
                                >
                                    <span class="focus-icon" aria-hidden="true">{*icon}</span>
                                    <h4>{i18n.t(title)}</h4>
                                    <p>{i18n.t(body)}</p>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
