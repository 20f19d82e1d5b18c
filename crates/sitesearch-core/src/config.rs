//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Nested keys in env vars are separated by `__` (`APP_CONTENT__DIR`).
//! Provides helpers to expand `~` and `${VAR}` and to resolve relative paths
//! against a known base directory.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

impl Config {
    /// Load from the current directory, picking the env from `RUST_ENV`.
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_in(Path::new("."), &env_name)
    }

    /// Load `config.toml` and `config.<env>.toml` from `base_dir`.
    /// Missing files are skipped; defaults fill in absent keys.
    pub fn load_in(base_dir: &Path, env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(base_dir.join("config.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(base_dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base_dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base_dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment, base_dir: base_dir.to_path_buf() };
        config.validate_for_env(env_name)?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// The full typed view of the configuration.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let settings: Settings = self
            .figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to read settings: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }

    /// `content.dir` expanded and resolved against the directory the config was loaded from.
    pub fn content_dir(&self) -> anyhow::Result<PathBuf> {
        let dir: String = self.get("content.dir")?;
        Ok(resolve_with_base(&self.base_dir, dir))
    }

    fn validate_for_env(&self, env: &str) -> anyhow::Result<()> {
        let settings = self.settings()?;
        if matches!(env, "prod" | "production") && !settings.content.validate {
            return Err(Error::InvalidConfig(
                "content.validate must stay enabled in production".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub content: ContentSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub log: LogSettings,
}

impl Settings {
    pub fn validate(&self) -> crate::Result<()> {
        if self.search.display_tags == 0 {
            return Err(Error::InvalidConfig("search.display_tags must be at least 1".to_string()));
        }
        if self.log.level.trim().is_empty() {
            return Err(Error::InvalidConfig("log.level must not be empty".to_string()));
        }
        if self.content.dir.trim().is_empty() {
            return Err(Error::InvalidConfig("content.dir must not be empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentSettings {
    pub dir: String,
    /// Run the upstream validator before handing content to the engine.
    pub validate: bool,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self { dir: "content".to_string(), validate: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchSettings {
    pub display_tags: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { display_tags: 3 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.search.display_tags, 3);
        assert!(settings.content.validate);
    }

    #[test]
    fn zero_display_tags_rejected() {
        let mut settings = Settings::default();
        settings.search.display_tags = 0;
        assert!(matches!(settings.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn absolute_paths_ignore_base() {
        let base = Path::new("/srv/site");
        assert_eq!(resolve_with_base(base, "/data/content"), PathBuf::from("/data/content"));
        assert_eq!(resolve_with_base(base, "content"), PathBuf::from("/srv/site/content"));
    }
}
