use log::warn;
use serde::Deserialize;
use std::collections::HashMap;

use crate::codec::{DEFAULT_ALPHABET, DEFAULT_SEPARATORS, Hashids};
use crate::encoders::HashidsError;

/// Codec settings for a single named profile loaded from TOML.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    /// Salt seeding every permutation
    #[serde(default)]
    pub salt: Option<String>,
    /// Minimum hash length
    #[serde(default)]
    pub min_length: Option<usize>,
    /// Candidate digit characters
    #[serde(default)]
    pub alphabet: Option<String>,
    /// Separator candidates
    #[serde(default)]
    pub separators: Option<String>,
}

impl ProfileConfig {
    /// Returns the effective alphabet, falling back to the default.
    pub fn effective_alphabet(&self) -> &str {
        self.alphabet.as_deref().unwrap_or(DEFAULT_ALPHABET)
    }

    /// Returns the effective separators, falling back to the defaults.
    pub fn effective_separators(&self) -> &str {
        self.separators.as_deref().unwrap_or(DEFAULT_SEPARATORS)
    }

    /// Fields set in `other` replace the ones in `self`.
    pub fn overlay(&mut self, other: &ProfileConfig) {
        if other.salt.is_some() {
            self.salt.clone_from(&other.salt);
        }
        if other.min_length.is_some() {
            self.min_length = other.min_length;
        }
        if other.alphabet.is_some() {
            self.alphabet.clone_from(&other.alphabet);
        }
        if other.separators.is_some() {
            self.separators.clone_from(&other.separators);
        }
    }

    /// Builds the codec described by this profile.
    pub fn build(&self) -> Result<Hashids, HashidsError> {
        Hashids::builder()
            .salt(self.salt.clone().unwrap_or_default())
            .min_length(self.min_length.unwrap_or(0))
            .alphabet(self.effective_alphabet())
            .separators(self.effective_separators())
            .build()
    }
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Profile used when none is named
    #[serde(default)]
    pub default_profile: Option<String>,
}

/// Collection of profiles loaded from TOML files.
#[derive(Debug, Deserialize, Default)]
pub struct ProfileRegistry {
    /// Map of profile names to their configurations
    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl ProfileRegistry {
    /// Parses profile configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in profiles bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../profiles.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in profiles (from library)
    /// 2. `~/.config/hashids/profiles.toml` (user overrides)
    /// 3. `./profiles.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching profile names.
    /// Files that fail to load are skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("hashids").join("profiles.toml");
            config.merge_file(&user_config_path);
        }

        config.merge_file(std::path::Path::new("profiles.toml"));

        Ok(config)
    }

    fn merge_file(&mut self, path: &std::path::Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => self.merge(other),
            Err(e) => warn!("Failed to load profiles from {:?}: {}", path, e),
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Profiles from `other` replace profiles with the same name in `self`;
    /// a default profile set in `other` replaces the current one.
    pub fn merge(&mut self, other: ProfileRegistry) {
        self.profiles.extend(other.profiles);
        if other.settings.default_profile.is_some() {
            self.settings.default_profile = other.settings.default_profile;
        }
    }

    /// Retrieves a profile configuration by name.
    pub fn get_profile(&self, name: &str) -> Option<&ProfileConfig> {
        self.profiles.get(name)
    }

    /// Name of the profile used when none is requested.
    pub fn default_profile_name(&self) -> &str {
        self.settings.default_profile.as_deref().unwrap_or("default")
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.profiles.keys().cloned().collect();
        names.sort();
        names
    }
}
