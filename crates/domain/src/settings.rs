use chrono::TimeDelta;

use crate::{CachePolicy, Language};

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    pub cache: CacheSettings,
    pub finder: FinderSettings,
}

impl Settings {
    #[must_use]
    pub fn cache_policy(&self) -> CachePolicy {
        self.cache.policy()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct CacheSettings {
    /// Maximum age of cached reference data, unlimited if unset.
    pub ttl_seconds: Option<u64>,
}

impl CacheSettings {
    #[must_use]
    pub fn policy(&self) -> CachePolicy {
        self.ttl_seconds
            .and_then(|s| i64::try_from(s).ok())
            .and_then(TimeDelta::try_seconds)
            .map_or(CachePolicy::Forever, CachePolicy::Ttl)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct FinderSettings {
    /// Maximum level difference between an exercise and its substitutes.
    pub level_window: u32,
}

impl Default for FinderSettings {
    fn default() -> Self {
        Self { level_window: 1 }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();

        assert_eq!(settings.language, Language::He);
        assert_eq!(settings.cache_policy(), CachePolicy::Forever);
        assert_eq!(settings.finder.level_window, 1);
    }

    #[test]
    fn test_settings_deserialize() {
        assert_eq!(
            serde_json::from_str::<Settings>(
                r#"{ "language": "en", "cache": { "ttl_seconds": 300 } }"#
            )
            .unwrap(),
            Settings {
                language: Language::En,
                cache: CacheSettings {
                    ttl_seconds: Some(300)
                },
                finder: FinderSettings { level_window: 1 },
            }
        );
        assert_eq!(
            serde_json::from_str::<Settings>("{}").unwrap(),
            Settings::default()
        );
    }

    #[rstest]
    #[case::unset(None, CachePolicy::Forever)]
    #[case::minutes(Some(600), CachePolicy::Ttl(TimeDelta::minutes(10)))]
    #[case::zero(Some(0), CachePolicy::Ttl(TimeDelta::zero()))]
    #[case::out_of_range(Some(u64::MAX), CachePolicy::Forever)]
    fn test_cache_settings_policy(#[case] ttl_seconds: Option<u64>, #[case] expected: CachePolicy) {
        assert_eq!(CacheSettings { ttl_seconds }.policy(), expected);
    }
}
