//! Locale handling and the bundled translation catalogs.
//!
//! Catalogs are nested JSON documents in the i18next layout
//! (`{"skills": {"title": "..."}}`) flattened to dotted keys
//! (`skills.title`). Lookups fall back from the active locale to English and
//! finally to the key itself, so a missing entry never breaks rendering.

use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

const EN_CATALOG: &str = include_str!("../locales/en.json");
const FR_CATALOG: &str = include_str!("../locales/fr.json");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

pub const SUPPORTED_LOCALES: [Locale; 2] = [Locale::En, Locale::Fr];

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Accepts bare codes and region-tagged ones (`fr-CA`, `en_GB`), case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::En => "🇺🇸",
            Self::Fr => "🇫🇷",
        }
    }

    pub fn og_locale(self) -> &'static str {
        match self {
            Self::En => "en_US",
            Self::Fr => "fr_FR",
        }
    }

    /// First candidate that names a supported locale wins.
    pub fn detect<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .flatten()
            .find_map(|candidate| Self::parse(candidate.as_ref()))
            .unwrap_or_default()
    }

    /// Picks the best supported locale from an `Accept-Language` header value.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut ranked: Vec<(f32, &str)> = header
            .split(',')
            .filter_map(|part| {
                let mut pieces = part.split(';');
                let tag = pieces.next()?.trim();
                if tag.is_empty() {
                    return None;
                }
                let quality = pieces
                    .filter_map(|param| param.trim().strip_prefix("q="))
                    .find_map(|value| value.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                Some((quality, tag))
            })
            .filter(|(quality, _)| *quality > 0.0)
            .collect();

        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        ranked.into_iter().find_map(|(_, tag)| Self::parse(tag))
    }
}

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("catalog for `{locale}` is not valid JSON: {source}")]
    Parse {
        locale: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog for `{locale}` must be a JSON object at the top level")]
    NotAnObject { locale: &'static str },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    locale: Locale,
    entries: HashMap<String, String>,
    fallback: Option<Box<Catalog>>,
}

impl Catalog {
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            entries: HashMap::new(),
            fallback: None,
        }
    }

    pub fn from_json(locale: Locale, source: &str) -> Result<Self, I18nError> {
        let value: Value = serde_json::from_str(source).map_err(|source| I18nError::Parse {
            locale: locale.as_str(),
            source,
        })?;

        if !value.is_object() {
            return Err(I18nError::NotAnObject {
                locale: locale.as_str(),
            });
        }

        let mut entries = HashMap::new();
        flatten_into(&mut entries, String::new(), value);

        Ok(Self {
            locale,
            entries,
            fallback: None,
        })
    }

    /// Loads the catalog compiled into the binary; non-English catalogs carry
    /// the English one as fallback.
    pub fn bundled(locale: Locale) -> Result<Self, I18nError> {
        let english = Self::from_json(Locale::En, EN_CATALOG)?;
        match locale {
            Locale::En => Ok(english),
            Locale::Fr => Ok(Self::from_json(Locale::Fr, FR_CATALOG)?.with_fallback(english)),
        }
    }

    pub fn with_fallback(mut self, fallback: Catalog) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .or_else(|| self.fallback.as_deref().and_then(|fallback| fallback.lookup(key)))
    }

    pub fn translate(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }

    pub fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        interpolate(self.lookup(key).unwrap_or(key), params)
    }
}

fn flatten_into(entries: &mut HashMap<String, String>, prefix: String, value: Value) {
    let join = |segment: &str| {
        if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{prefix}.{segment}")
        }
    };

    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(entries, join(&key), nested);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.into_iter().enumerate() {
                flatten_into(entries, join(&index.to_string()), nested);
            }
        }
        Value::String(text) => {
            entries.insert(prefix, text);
        }
        Value::Number(number) => {
            entries.insert(prefix, number.to_string());
        }
        Value::Bool(flag) => {
            entries.insert(prefix, flag.to_string());
        }
        Value::Null => {}
    }
}

/// Replaces `{{name}}` placeholders (inner whitespace allowed).
fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            output.push_str(&rest[open..]);
            return output;
        };

        let name = after_open[..close].trim();
        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => output.push_str(value),
            None => output.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_keys_are_flattened_with_dots() {
        let catalog = Catalog::from_json(
            Locale::En,
            r#"{"skills": {"categories": {"all": "All"}}, "hero": {"stacks": ["a", "b"]}}"#,
        )
        .expect("valid catalog");

        assert_eq!(catalog.translate("skills.categories.all"), "All");
        assert_eq!(catalog.translate("hero.stacks.1"), "b");
    }

    #[test]
    fn missing_key_falls_back_to_english_then_to_key() {
        let english = Catalog::from_json(Locale::En, r#"{"only": {"english": "Hello"}}"#)
            .expect("valid catalog");
        let french = Catalog::from_json(Locale::Fr, r#"{"greeting": "Bonjour"}"#)
            .expect("valid catalog")
            .with_fallback(english);

        assert_eq!(french.translate("greeting"), "Bonjour");
        assert_eq!(french.translate("only.english"), "Hello");
        assert_eq!(french.translate("nowhere.at.all"), "nowhere.at.all");
    }

    #[test]
    fn placeholders_are_interpolated() {
        let catalog = Catalog::from_json(
            Locale::En,
            r#"{"footer": {"rights": "© {{year}} Camille. {{ unknown }} kept."}}"#,
        )
        .expect("valid catalog");

        assert_eq!(
            catalog.translate_with("footer.rights", &[("year", "2026")]),
            "© 2026 Camille. {{ unknown }} kept."
        );
    }

    #[test]
    fn unterminated_placeholder_is_left_verbatim() {
        assert_eq!(interpolate("hello {{name", &[("name", "x")]), "hello {{name");
    }

    #[test]
    fn rejects_non_object_catalogs() {
        let result = Catalog::from_json(Locale::En, r#"["not", "an", "object"]"#);
        assert!(matches!(result, Err(I18nError::NotAnObject { locale: "en" })));

        let result = Catalog::from_json(Locale::Fr, "{");
        assert!(matches!(result, Err(I18nError::Parse { locale: "fr", .. })));
    }

    #[test]
    fn locale_parsing_tolerates_region_tags() {
        assert_eq!(Locale::parse("fr-CA"), Some(Locale::Fr));
        assert_eq!(Locale::parse(" EN_gb "), Some(Locale::En));
        assert_eq!(Locale::parse("de"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn detection_uses_first_supported_candidate() {
        let detected = Locale::detect([None, Some("de-DE"), Some("fr-FR"), Some("en")]);
        assert_eq!(detected, Locale::Fr);

        let detected = Locale::detect([None::<&str>, None]);
        assert_eq!(detected, Locale::En);
    }

    #[test]
    fn accept_language_honors_quality_values() {
        assert_eq!(
            Locale::from_accept_language("de-DE, en;q=0.5, fr;q=0.8"),
            Some(Locale::Fr)
        );
        assert_eq!(Locale::from_accept_language("fr;q=0, en-US"), Some(Locale::En));
        assert_eq!(Locale::from_accept_language("de, it"), None);
        assert_eq!(Locale::from_accept_language(""), None);
    }

    #[test]
    fn bundled_catalogs_share_the_same_keys() {
        let english = Catalog::bundled(Locale::En).expect("english catalog parses");
        let french = Catalog::from_json(Locale::Fr, FR_CATALOG).expect("french catalog parses");

        let mut missing_in_french: Vec<&str> =
            english.keys().filter(|key| !french.contains(key)).collect();
        missing_in_french.sort_unstable();
        let mut missing_in_english: Vec<&str> =
            french.keys().filter(|key| !english.contains(key)).collect();
        missing_in_english.sort_unstable();

        assert!(missing_in_french.is_empty(), "untranslated: {missing_in_french:?}");
        assert!(missing_in_english.is_empty(), "orphaned: {missing_in_english:?}");
    }

    #[test]
    fn switching_locale_changes_translated_copy() {
        let english = Catalog::bundled(Locale::En).expect("english catalog parses");
        let french = Catalog::bundled(Locale::Fr).expect("french catalog parses");

        assert_eq!(french.locale(), Locale::Fr);
        assert_ne!(english.translate("nav.about"), french.translate("nav.about"));
    }
}
