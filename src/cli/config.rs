use hashids::{Hashids, ProfileNotFoundError, ProfileRegistry, find_closest_profile};
use log::debug;
use std::fs;
use std::path::PathBuf;

use crate::cli::global::GlobalArgs;

/// Expands `~` and resolves a user-supplied profiles path.
fn resolve_config_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let expanded = shellexpand::tilde(path);
    let canonical = fs::canonicalize(expanded.as_ref())
        .map_err(|e| format!("Cannot access path '{}': {}", path, e))?;
    Ok(canonical)
}

/// Loads built-in, user and local profiles, then the `--config` file if given.
pub fn load_registry(global: &GlobalArgs) -> Result<ProfileRegistry, Box<dyn std::error::Error>> {
    let mut registry = ProfileRegistry::load_with_overrides()?;

    if let Some(path) = &global.config {
        let resolved = resolve_config_path(path)?;
        debug!("loading profiles from {}", resolved.display());
        let extra = ProfileRegistry::load_from_file(&resolved)
            .map_err(|e| format!("Invalid profiles file '{}': {}", path, e))?;
        registry.merge(extra);
    }

    Ok(registry)
}

/// Builds the codec for the selected profile with command-line overrides applied.
pub fn create_codec(
    registry: &ProfileRegistry,
    global: &GlobalArgs,
) -> Result<Hashids, Box<dyn std::error::Error>> {
    let name = global
        .profile
        .as_deref()
        .unwrap_or_else(|| registry.default_profile_name());

    let mut profile = registry
        .get_profile(name)
        .ok_or_else(|| {
            let suggestion = find_closest_profile(name, &registry.names());
            ProfileNotFoundError::new(name, suggestion)
        })?
        .clone();
    profile.overlay(&global.overrides());

    debug!("using profile '{}'", name);
    let hashids = profile
        .build()
        .map_err(|e| format!("Invalid configuration for profile '{}': {}", name, e))?;
    Ok(hashids)
}
