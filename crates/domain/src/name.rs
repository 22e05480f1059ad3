use std::collections::BTreeMap;

#[derive(
    serde::Serialize,
    serde::Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    He,
    En,
    Ru,
}

/// Display text per language.
///
/// Lookups fall back to English and then to any available text, as catalog entries are often only
/// translated partially.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LocalizedName(BTreeMap<Language, String>);

impl LocalizedName {
    #[must_use]
    pub fn new(language: Language, text: &str) -> Self {
        Self::default().with(language, text)
    }

    #[must_use]
    pub fn with(mut self, language: Language, text: &str) -> Self {
        self.insert(language, text);
        self
    }

    pub fn insert(&mut self, language: Language, text: &str) {
        let trimmed_text = text.trim();

        if trimmed_text.is_empty() {
            self.0.remove(&language);
        } else {
            self.0.insert(language, trimmed_text.to_string());
        }
    }

    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        self.0
            .get(&language)
            .or_else(|| self.0.get(&Language::En))
            .or_else(|| self.0.values().next())
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> {
        self.0.iter().map(|(l, t)| (*l, t.as_str()))
    }
}
