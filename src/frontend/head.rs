use super::dom::document;
use super::use_i18n;
use crate::content::{SITE_URL, SOCIAL_IMAGE};
use crate::seo::{head_tags, HeadTag, SeoInput};
use web_sys::{Document, HtmlHeadElement};
use yew::prelude::*;

fn upsert_tag(document: &Document, head: &HtmlHeadElement, tag: &HeadTag) {
    let existing = document.query_selector(&tag.selector()).ok().flatten();
    let element = match existing {
        Some(element) => element,
        None => {
            let Ok(created) = document.create_element(tag.element_name()) else {
                return;
            };
            let _ = head.append_child(&created);
            created
        }
    };

    for (name, value) in tag.attributes() {
        let _ = element.set_attribute(name, value);
    }
}

fn apply_head(input: &SeoInput) {
    let Some(document) = document() else {
        return;
    };

    document.set_title(&input.title);
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", input.locale.as_str());
    }

    let Some(head) = document.head() else {
        return;
    };
    for tag in head_tags(input) {
        upsert_tag(&document, &head, &tag);
    }
}

/// Keeps `<head>` in sync with the active locale. Renders nothing.
#[function_component(Head)]
pub fn head() -> Html {
    let i18n = use_i18n();

    {
        let catalog = i18n.catalog();
        use_effect_with(i18n.locale(), move |_| {
            apply_head(&SeoInput::from_catalog(&catalog, SITE_URL, SOCIAL_IMAGE));

            let default_title = catalog.translate("seo.title");
            move || {
                if let Some(document) = document() {
                    document.set_title(&default_title);
                }
            }
        });
    }

    Html::default()
}
