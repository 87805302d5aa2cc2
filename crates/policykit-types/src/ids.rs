//! Stable identifiers and fixed reason strings.
//!
//! Reason strings are part of the emitted selection contract: persistence layers and
//! renderers match on them, so treat any change here as a breaking change.

pub const TOOL_NAME: &str = "policykit";

// Config
pub const SCHEMA_CONFIG_V1: &str = "policykit.config.v1";

// Fixed selection reasons
pub const REASON_MANUALLY_INCLUDED: &str = "Manually included";
pub const REASON_STANDARD_COMPONENT: &str = "Standard policy component";
pub const REASON_HIGH_RELEVANCE: &str = "High relevance score";

// Prefixes for generated ids
pub const DIFF_ID_PREFIX: &str = "diff-";
pub const CHANGE_ID_PREFIX: &str = "change-";

/// Separator between individual rationale strings in `SelectedClause::reason`.
pub const REASON_SEPARATOR: &str = "; ";
