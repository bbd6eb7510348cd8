use super::use_i18n;
use crate::content::{BRAND, CONTACT_EMAIL, GITHUB_PROFILE_URL, LINKEDIN_PROFILE_URL};
use yew::prelude::*;

const FOOTER_LINKS: [(&str, &str); 5] = [
    ("footer.home", "#home"),
    ("footer.about", "#about"),
    ("footer.skills", "#skills"),
    ("footer.projects", "#projects"),
    ("footer.contact", "#contact"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let i18n = use_i18n();
    let year = js_sys::Date::new_0().get_full_year().to_string();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <a class="brand" href="#home">{BRAND}</a>
                    <p>{i18n.t("footer.description")}</p>
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

                <nav class="footer-nav" aria-labelledby="footer-nav-title">
                    <h3 id="footer-nav-title">{i18n.t("footer.navigation")}</h3>
                    <ul>
                        { for FOOTER_LINKS.iter().map(|(key, anchor)| html! {
                            <li key={*anchor}><a href={*anchor}>{i18n.t(key)}</a></li>
                        }) }
                    </ul>
                </nav>

                <div class="footer-contact">
                    <h3>{i18n.t("footer.contactTitle")}</h3>
                    <a href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a>
                    <p>{i18n.t("contact.locationValue")}</p>
                </div>
            </div>

            <p class="footer-rights">{i18n.t_with("footer.rights", &[("year", year.as_str())])}</p>
        </footer>
    }
}
