//! Hot reload configuration.

/// Environment variable that opens the development gate.
pub const DEV_ENV_VAR: &str = "STAGEHAND_DEV";

/// Hot reload settings.
///
/// # Example
///
/// ```rust,ignore
/// let config = HotReloadConfig::from_env("http://localhost:8080/scene.json");
/// if config.enabled { /* install the reload trigger */ }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotReloadConfig {
    /// Development gate. Triggers are ignored while `false`.
    ///
    /// Default: `true` in debug builds.
    pub enabled: bool,

    /// Where the latest serialized scene is fetched from: an `http(s)://` URL
    /// or a local file path.
    pub url: String,

    /// Query parameter carrying the cache-busting timestamp on HTTP sources.
    /// `None` disables cache busting.
    ///
    /// Default: `Some("t")`
    pub cache_bust_param: Option<String>,
}

impl Default for HotReloadConfig {
    fn default() -> Self {
        Self {
            enabled: cfg!(debug_assertions),
            url: String::new(),
            cache_bust_param: Some("t".to_owned()),
        }
    }
}

impl HotReloadConfig {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Reads the development gate from [`DEV_ENV_VAR`].
    #[must_use]
    pub fn from_env(url: impl Into<String>) -> Self {
        Self::from_lookup(url, |key| std::env::var(key).ok())
    }

    /// Like [`Self::from_env`] with the variable lookup supplied by the caller.
    ///
    /// Accepts `1`/`true`/`yes`/`on` and `0`/`false`/`no`/`off`, case
    /// insensitive. A missing or unrecognised value keeps the build default.
    #[must_use]
    pub fn from_lookup(url: impl Into<String>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new(url);
        if let Some(value) = lookup(DEV_ENV_VAR) {
            match parse_flag(&value) {
                Some(enabled) => config.enabled = enabled,
                None => log::warn!("Ignoring {DEV_ENV_VAR}='{value}'"),
            }
        }
        config
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_cache_bust_param(mut self, param: Option<String>) -> Self {
        self.cache_bust_param = param;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_opens_and_closes_the_gate() {
        let on = HotReloadConfig::from_lookup("scene.json", |_| Some("YES".to_owned()));
        assert!(on.enabled);

        let off = HotReloadConfig::from_lookup("scene.json", |_| Some("0".to_owned()));
        assert!(!off.enabled);
    }

    #[test]
    fn missing_or_garbage_keeps_build_default() {
        let missing = HotReloadConfig::from_lookup("scene.json", |_| None);
        assert_eq!(missing.enabled, cfg!(debug_assertions));

        let garbage = HotReloadConfig::from_lookup("scene.json", |_| Some("maybe".to_owned()));
        assert_eq!(garbage.enabled, cfg!(debug_assertions));
        assert_eq!(garbage.url, "scene.json");
    }
}
