//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{DiffConfig, PolicykitConfigV1, SelectionConfig};
pub use presets::{DEFAULT_PROFILE, PROFILES, preset};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `policykit.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PolicykitConfigV1> {
    let cfg: PolicykitConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the selection context and diff options (preset + config + overrides).
pub fn resolve_config(
    cfg: PolicykitConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
