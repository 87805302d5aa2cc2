use anyhow::Context;
use policykit_corpus::Corpus;
use policykit_settings::{Overrides, PolicykitConfigV1, ResolvedConfig};
use policykit_types::ToolMeta;
use policykit_types::ids::TOOL_NAME;

/// Parse and resolve config text (empty means defaults) and surface degraded values.
pub fn resolve_settings(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        PolicykitConfigV1::default()
    } else {
        policykit_settings::parse_config_toml(config_text).context("parse config")?
    };
    let resolved =
        policykit_settings::resolve_config(cfg, overrides).context("resolve config")?;
    for warning in &resolved.warnings {
        tracing::warn!("{warning}");
    }
    Ok(resolved)
}

/// The shipped catalog, or a custom corpus from JSON text.
pub fn load_corpus(json: Option<&str>) -> anyhow::Result<Corpus> {
    match json {
        None => Ok(Corpus::builtin()),
        Some(text) => {
            let corpus = Corpus::from_json(text).context("load corpus")?;
            tracing::debug!(
                version = corpus.version(),
                clauses = corpus.clauses().len(),
                "custom corpus loaded"
            );
            Ok(corpus)
        }
    }
}

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: TOOL_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}
