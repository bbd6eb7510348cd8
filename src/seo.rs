//! Document head metadata. The same tag list is upserted into the live DOM
//! by the frontend and rendered into `index.html` by the server, so crawlers
//! that never run wasm still see it.

use crate::i18n::{Catalog, Locale, SUPPORTED_LOCALES};

/// Open Graph object type of the single page.
pub const PAGE_TYPE: &str = "website";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeoInput {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub image: String,
    pub url: String,
    pub page_type: &'static str,
    pub locale: Locale,
}

impl SeoInput {
    pub fn from_catalog(catalog: &Catalog, url: &str, image: &str) -> Self {
        Self {
            title: catalog.translate("seo.title"),
            description: catalog.translate("seo.description"),
            keywords: catalog.translate("seo.keywords"),
            image: image.to_string(),
            url: url.to_string(),
            page_type: PAGE_TYPE,
            locale: catalog.locale(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadTag {
    Meta {
        name: &'static str,
        content: String,
    },
    Property {
        property: &'static str,
        content: String,
    },
    Canonical {
        href: String,
    },
    Alternate {
        hreflang: &'static str,
        href: String,
    },
}

impl HeadTag {
    /// CSS selector matching the single element this tag owns in `<head>`.
    pub fn selector(&self) -> String {
        match self {
            Self::Meta { name, .. } => format!(r#"meta[name="{name}"]"#),
            Self::Property { property, .. } => format!(r#"meta[property="{property}"]"#),
            Self::Canonical { .. } => r#"link[rel="canonical"]"#.to_string(),
            Self::Alternate { hreflang, .. } => {
                format!(r#"link[rel="alternate"][hreflang="{hreflang}"]"#)
            }
        }
    }

    pub fn element_name(&self) -> &'static str {
        match self {
            Self::Meta { .. } | Self::Property { .. } => "meta",
            Self::Canonical { .. } | Self::Alternate { .. } => "link",
        }
    }

    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Meta { name, content } => vec![("name", *name), ("content", content.as_str())],
            Self::Property { property, content } => {
                vec![("property", *property), ("content", content.as_str())]
            }
            Self::Canonical { href } => vec![("rel", "canonical"), ("href", href.as_str())],
            Self::Alternate { hreflang, href } => vec![
                ("rel", "alternate"),
                ("hreflang", *hreflang),
                ("href", href.as_str()),
            ],
        }
    }

    pub fn to_markup(&self) -> String {
        let attributes: String = self
            .attributes()
            .into_iter()
            .map(|(name, value)| format!(r#" {name}="{}""#, escape_attr(value)))
            .collect();
        format!("<{}{attributes}>", self.element_name())
    }
}

pub fn head_tags(input: &SeoInput) -> Vec<HeadTag> {
    let meta = |name, content: &str| HeadTag::Meta {
        name,
        content: content.to_string(),
    };
    let property = |property, content: &str| HeadTag::Property {
        property,
        content: content.to_string(),
    };

    let mut tags = vec![
        meta("description", &input.description),
        meta("keywords", &input.keywords),
        property("og:title", &input.title),
        property("og:description", &input.description),
        property("og:image", &input.image),
        property("og:url", &input.url),
        property("og:type", input.page_type),
        property("og:locale", input.locale.og_locale()),
        property("twitter:title", &input.title),
        property("twitter:description", &input.description),
        property("twitter:image", &input.image),
        property("twitter:url", &input.url),
        HeadTag::Canonical {
            href: input.url.clone(),
        },
    ];

    // Both locales live at the same address; the language is negotiated.
    tags.extend(SUPPORTED_LOCALES.into_iter().map(|locale| HeadTag::Alternate {
        hreflang: locale.as_str(),
        href: input.url.clone(),
    }));
    tags.push(HeadTag::Alternate {
        hreflang: "x-default",
        href: input.url.clone(),
    });
    tags
}

/// Stamps `lang`, `<title>` and the head tags into an HTML shell. Any title
/// already present in the template is replaced.
pub fn render_document(template: &str, input: &SeoInput) -> String {
    let mut document = set_html_lang(template, input.locale.as_str());
    strip_title(&mut document);

    let mut block = format!("<title>{}</title>\n", escape_text(&input.title));
    for tag in head_tags(input) {
        block.push_str("    ");
        block.push_str(&tag.to_markup());
        block.push('\n');
    }

    match document.find("</head>") {
        Some(index) => document.insert_str(index, &block),
        None => document.insert_str(0, &block),
    }
    document
}

fn set_html_lang(template: &str, lang: &str) -> String {
    let Some(start) = template.find("<html") else {
        return template.to_string();
    };
    let Some(tag_len) = template[start..].find('>') else {
        return template.to_string();
    };
    let end = start + tag_len;
    let tag = &template[start..end];

    let rewritten = match tag.find(" lang=\"") {
        Some(attr) => {
            let value_start = attr + " lang=\"".len();
            let value_len = tag[value_start..].find('"').unwrap_or(0);
            format!(
                "{}{lang}{}",
                &tag[..value_start],
                &tag[value_start + value_len..]
            )
        }
        None => format!("<html lang=\"{lang}\"{}", &tag["<html".len()..]),
    };

    format!("{}{rewritten}{}", &template[..start], &template[end..])
}

fn strip_title(document: &mut String) {
    while let Some(start) = document.find("<title>") {
        let Some(len) = document[start..].find("</title>") else {
            return;
        };
        document.replace_range(start..start + len + "</title>".len(), "");
    }
}

pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;").replace('\'', "&#39;")
}

pub fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL: &str = "<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"utf-8\">\n    <title>placeholder</title>\n  </head>\n  <body><div id=\"app\"></div></body>\n</html>\n";

    fn sample_input(locale: Locale) -> SeoInput {
        let catalog = Catalog::bundled(locale).expect("catalog parses");
        SeoInput::from_catalog(&catalog, "https://camille.test/", "https://camille.test/card.jpg")
    }

    fn content_of<'a>(tags: &'a [HeadTag], selector: &str) -> Option<&'a str> {
        tags.iter()
            .find(|tag| tag.selector() == selector)
            .and_then(|tag| {
                tag.attributes()
                    .into_iter()
                    .find(|(name, _)| *name == "content" || *name == "href")
                    .map(|(_, value)| value)
            })
    }

    #[test]
    fn produces_every_head_tag_once() {
        let tags = head_tags(&sample_input(Locale::En));
        assert_eq!(tags.len(), 16);

        let mut selectors: Vec<String> = tags.iter().map(HeadTag::selector).collect();
        selectors.sort();
        selectors.dedup();
        assert_eq!(selectors.len(), tags.len());
    }

    #[test]
    fn open_graph_tags_follow_the_locale() {
        let english = head_tags(&sample_input(Locale::En));
        let french = head_tags(&sample_input(Locale::Fr));

        assert_eq!(content_of(&english, r#"meta[property="og:locale"]"#), Some("en_US"));
        assert_eq!(content_of(&french, r#"meta[property="og:locale"]"#), Some("fr_FR"));
        assert_ne!(
            content_of(&english, r#"meta[name="description"]"#),
            content_of(&french, r#"meta[name="description"]"#)
        );
        assert_eq!(content_of(&french, r#"meta[property="og:type"]"#), Some("website"));
    }

    #[test]
    fn alternates_cover_each_locale_and_default() {
        let tags = head_tags(&sample_input(Locale::En));
        for hreflang in ["en", "fr", "x-default"] {
            let selector = format!(r#"link[rel="alternate"][hreflang="{hreflang}"]"#);
            assert_eq!(content_of(&tags, &selector), Some("https://camille.test/"));
        }
        assert_eq!(
            content_of(&tags, r#"link[rel="canonical"]"#),
            Some("https://camille.test/")
        );
    }

    #[test]
    fn markup_escapes_attribute_values() {
        let tag = HeadTag::Meta {
            name: "description",
            content: r#"Rust & "Yew" <3"#.to_string(),
        };
        assert_eq!(
            tag.to_markup(),
            r#"<meta name="description" content="Rust &amp; &quot;Yew&quot; &lt;3">"#
        );
    }

    #[test]
    fn rendered_document_carries_lang_title_and_tags() {
        let input = sample_input(Locale::Fr);
        let html = render_document(SHELL, &input);

        assert!(html.contains("<html lang=\"fr\">"));
        assert!(!html.contains("placeholder"));
        assert_eq!(html.matches("<title>").count(), 1);
        assert!(html.contains(&format!("<title>{}</title>", escape_text(&input.title))));
        assert!(html.contains(r#"<meta property="og:locale" content="fr_FR">"#));

        let head_end = html.find("</head>").expect("head is closed");
        let canonical = html.find(r#"rel="canonical""#).expect("canonical is present");
        assert!(canonical < head_end);
    }

    #[test]
    fn existing_lang_attribute_is_replaced() {
        let html = render_document(
            r#"<html lang="en" class="dark"><head></head></html>"#,
            &sample_input(Locale::Fr),
        );
        assert!(html.starts_with(r#"<html lang="fr" class="dark">"#));
    }

    #[test]
    fn headless_template_gets_tags_prepended() {
        let html = render_document("<p>bare</p>", &sample_input(Locale::En));
        assert!(html.starts_with("<title>"));
        assert!(html.ends_with("<p>bare</p>"));
    }
}
