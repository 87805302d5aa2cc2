use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Unit of comparison for the LCS differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Word,
    #[default]
    Sentence,
    Paragraph,
    /// Unknown granularity strings land here and segment like `Sentence`.
    #[serde(other)]
    Unrecognized,
}

impl Granularity {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "word" => Granularity::Word,
            "sentence" => Granularity::Sentence,
            "paragraph" => Granularity::Paragraph,
            _ => Granularity::Unrecognized,
        }
    }

    /// The granularity actually used for segmentation.
    pub fn effective(&self) -> Granularity {
        match self {
            Granularity::Unrecognized => Granularity::Sentence,
            other => *other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Word => "word",
            Granularity::Sentence => "sentence",
            Granularity::Paragraph => "paragraph",
            Granularity::Unrecognized => "unrecognized",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiffOptions {
    #[serde(default)]
    pub granularity: Granularity,
    /// Compare case-insensitively; reported text keeps its original case.
    #[serde(default)]
    pub ignore_case: bool,
    /// Merge each deletion immediately followed by an addition into a modification.
    #[serde(default)]
    pub pair_modifications: bool,
}

impl DiffOptions {
    pub fn with_granularity(granularity: Granularity) -> Self {
        Self {
            granularity,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Addition,
    Deletion,
    Modification,
}

/// One detected change between two texts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDiff {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DiffKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_text: Option<String>,
    /// Segment index at which the change starts.
    pub position: usize,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    pub additions: u32,
    pub deletions: u32,
    pub modifications: u32,
    pub segments_base: u32,
    pub segments_new: u32,
    pub unchanged: u32,
    pub similarity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RedlineKind {
    Insert,
    Delete,
    Format,
}

/// Structural address of a word inside a document.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
pub struct RedlinePosition {
    pub paragraph: u32,
    pub sentence: u32,
    pub word: u32,
}

/// Author-attributed tracked change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedlineChange {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RedlineKind,
    pub text: String,
    pub position: RedlinePosition,
    pub author: String,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
