use crate::model::PolicykitConfigV1;
use crate::presets;
use anyhow::bail;
use policykit_types::ids::SCHEMA_CONFIG_V1;
use policykit_types::{
    Audience, ClauseSelectionInput, DependencyMode, DiffOptions, Granularity, RiskLevel,
    ToolUseMode,
};

/// Values supplied on the command line. Each set field wins over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub audience: Option<String>,
    pub risk_profile: Option<String>,
    pub tool_use_mode: Option<String>,
    pub jurisdiction: Option<String>,
    pub state: Option<String>,
    /// Replaces the configured tags when non-empty.
    pub custom_tags: Vec<String>,
    /// Appended after the configured includes.
    pub include: Vec<String>,
    /// Appended after the configured excludes.
    pub exclude: Vec<String>,
    pub transitive: Option<bool>,
    pub granularity: Option<String>,
    pub ignore_case: Option<bool>,
    pub pair_modifications: Option<bool>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    /// The preset actually applied (after fallback).
    pub profile: String,
    pub selection: ClauseSelectionInput,
    pub diff: DiffOptions,
    /// Degraded inputs that were accepted anyway.
    pub warnings: Vec<String>,
}

pub fn resolve_config(
    cfg: PolicykitConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        bail!("unsupported config schema '{schema}' (expected '{SCHEMA_CONFIG_V1}')");
    }

    let mut warnings = Vec::new();

    let requested = overrides
        .profile
        .or(cfg.profile)
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());
    let (profile, mut selection) = presets::preset(&requested);
    if profile != requested {
        warnings.push(format!(
            "unknown profile '{requested}', using '{profile}'"
        ));
    }

    let sel = cfg.selection;

    if let Some(v) = overrides.audience.or(sel.audience) {
        selection.audience = Audience::parse(&v);
        if !selection.audience.is_recognized() {
            warnings.push(format!("unknown audience '{v}'; no clause will match it"));
        }
    }
    if let Some(v) = overrides.risk_profile.or(sel.risk_profile) {
        selection.risk_profile = RiskLevel::parse(&v);
        if selection.risk_profile.rank().is_none() {
            warnings.push(format!("unknown risk profile '{v}'; risk factor will be zero"));
        }
    }
    if let Some(v) = overrides.tool_use_mode.or(sel.tool_use_mode) {
        selection.tool_use_mode = ToolUseMode::parse(&v);
        if selection.tool_use_mode.rank().is_none() {
            warnings.push(format!(
                "unknown tool-use mode '{v}'; clauses that list tool-use modes will not match"
            ));
        }
    }

    selection.jurisdiction = non_blank(overrides.jurisdiction.or(sel.jurisdiction));
    selection.state = non_blank(overrides.state.or(sel.state));

    selection.custom_tags = if overrides.custom_tags.is_empty() {
        sel.custom_tags
    } else {
        overrides.custom_tags
    };
    selection.include_clauses = merged(sel.include, overrides.include);
    selection.exclude_clauses = merged(sel.exclude, overrides.exclude);

    selection.dependency_mode = match overrides.transitive {
        Some(true) => DependencyMode::Transitive,
        Some(false) => DependencyMode::Shallow,
        None => match sel.dependency_mode.as_deref().map(str::trim) {
            None | Some("shallow") => DependencyMode::Shallow,
            Some("transitive") => DependencyMode::Transitive,
            Some(other) => {
                warnings.push(format!(
                    "unknown dependency mode '{other}', using 'shallow'"
                ));
                DependencyMode::Shallow
            }
        },
    };

    let mut diff = DiffOptions::default();
    if let Some(v) = overrides.granularity.or(cfg.diff.granularity) {
        diff.granularity = Granularity::parse(&v);
        if diff.granularity == Granularity::Unrecognized {
            warnings.push(format!("unknown granularity '{v}', comparing by sentence"));
        }
    }
    diff.ignore_case = overrides
        .ignore_case
        .or(cfg.diff.ignore_case)
        .unwrap_or(false);
    diff.pair_modifications = overrides
        .pair_modifications
        .or(cfg.diff.pair_modifications)
        .unwrap_or(false);

    Ok(ResolvedConfig {
        profile: profile.to_string(),
        selection,
        diff,
        warnings,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Config entries first, then CLI entries; first occurrence wins.
fn merged(config: Vec<String>, cli: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(config.len() + cli.len());
    for id in config.into_iter().chain(cli) {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}
