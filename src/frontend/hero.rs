use super::dom::Interval;
use super::{reveal_classes, use_i18n, use_reduced_motion, use_reveal};
use crate::content::{GITHUB_PROFILE_URL, HERO_STACKS, LINKEDIN_PROFILE_URL, OWNER_NAME};
use crate::typing::{Typewriter, HOLD_TICKS, TICK_MS};
use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    let i18n = use_i18n();
    let reduced_motion = use_reduced_motion();
    let (reveal_ref, visible) = use_reveal();
    let typed = use_state(move || {
        if reduced_motion {
            HERO_STACKS[0].to_string()
        } else {
            String::new()
        }
    });

    {
        let typed = typed.clone();
        use_effect_with(reduced_motion, move |reduced_motion| {
            let ticker = if *reduced_motion {
                None
            } else {
                let mut typewriter = Typewriter::new(HERO_STACKS, HOLD_TICKS);
                Interval::new(TICK_MS, move || {
                    if typewriter.tick() {
                        typed.set(typewriter.text().to_string());
                    }
                })
            };
            move || drop(ticker)
        });
    }

    html! {
        <section id="home" class="hero" aria-labelledby="hero-title">
            <div class={reveal_classes("hero-inner", visible)} ref={reveal_ref}>
                <p class="hero-badge">
                    <span class="pulse" aria-hidden="true"></span>
                    {i18n.t("hero.badge")}
                </p>

                <h1 id="hero-title" class="hero-title">
                    <span class="hero-name">{OWNER_NAME}</span>
                    <span class="hero-tagline">
                        {i18n.t("hero.titleStart")}{" "}
                        <span class="accent">{i18n.t("hero.titleAccent")}</span>{" "}
                        {i18n.t("hero.titleEnd")}
                    </span>
                </h1>

                <p class="hero-stack">
                    <span class="sr-only">{format!("{}: {}", i18n.t("hero.stackLabel"), HERO_STACKS.join(", "))}</span>
                    <span aria-hidden="true">
                        {(*typed).clone()}
                        if !reduced_motion {
                            <span class="caret">{"|"}</span>
                        }
                    </span>
                </p>

                <p class="hero-experience">{i18n.t("hero.experience")}</p>

                <div class="hero-actions">
                    <a class="button button-primary" href="#projects" aria-label={i18n.t("hero.viewProjectsLabel")}>
                        {i18n.t("hero.viewProjects")}
                    </a>
                    <a class="button button-secondary" href="#contact" aria-label={i18n.t("hero.contactMeLabel")}>
                        {i18n.t("hero.contactMe")}
                    </a>
                </div>

                <ul class="social-links" aria-label={i18n.t("hero.socialLabel")}>
                    <li>
                        <a href={GITHUB_PROFILE_URL} target="_blank" rel="noopener noreferrer" aria-label={i18n.t("hero.githubLabel")}>
                            <span aria-hidden="true">{"GH"}</span>
                        </a>
                    </li>
                    <li>
                        <a href={LINKEDIN_PROFILE_URL} target="_blank" rel="noopener noreferrer" aria-label={i18n.t("hero.linkedinLabel")}>
                            <span aria-hidden="true">{"in"}</span>
                        </a>
                    </li>
                </ul>
            </div>
        </section>
    }
}
