use anyhow::Context;
use policykit_types::{
    DiffReport, RedlineReport, SCHEMA_DIFF_V1, SCHEMA_REDLINE_V1, SCHEMA_SELECTION_V1,
    SelectionReport,
};
use serde::Serialize;

/// Any report policykit writes, dispatched on its `schema` field.
#[derive(Clone, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum ReportVariant {
    Selection(SelectionReport),
    Diff(DiffReport),
    Redline(RedlineReport),
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ReportVariant> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    match schema.as_str() {
        SCHEMA_SELECTION_V1 => Ok(ReportVariant::Selection(
            serde_json::from_value(value).context("parse selection report")?,
        )),
        SCHEMA_DIFF_V1 => Ok(ReportVariant::Diff(
            serde_json::from_value(value).context("parse diff report")?,
        )),
        SCHEMA_REDLINE_V1 => Ok(ReportVariant::Redline(
            serde_json::from_value(value).context("parse redline report")?,
        )),
        "" => anyhow::bail!("report has no schema field"),
        other => anyhow::bail!("unknown report schema: {other}"),
    }
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report<T: Serialize>(report: &T) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(report).context("serialize report")?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiffInput, RedlineInput, SelectInput, run_diff, run_redline, run_select};
    use policykit_corpus::Corpus;
    use policykit_settings::Overrides;

    #[test]
    fn written_reports_parse_back_to_the_same_variant() {
        let corpus = Corpus::builtin();
        let selection = run_select(SelectInput {
            corpus: &corpus,
            config_text: "",
            overrides: Overrides::default(),
        })
        .expect("select")
        .report;
        let text = serialize_report(&selection).expect("serialize");
        assert!(text.ends_with("}\n"));
        match parse_report_json(&text).expect("parse") {
            ReportVariant::Selection(r) => {
                assert_eq!(r.clause_ids(), selection.clause_ids());
                assert_eq!(r.data, selection.data);
                assert_eq!(r.generated_at, selection.generated_at);
            }
            other => panic!("expected selection, got {other:?}"),
        }

        let diff = run_diff(DiffInput {
            base: "One. Two.",
            new: "One. Three.",
            config_text: "",
            overrides: Overrides::default(),
        })
        .expect("diff")
        .report;
        let text = serialize_report(&diff).expect("serialize");
        assert!(matches!(parse_report_json(&text), Ok(ReportVariant::Diff(_))));

        let redline = run_redline(RedlineInput {
            base: "a b",
            new: "a c",
            author: "r",
            title: None,
            config_text: "",
            overrides: Overrides::default(),
        })
        .expect("redline")
        .report;
        let text = serialize_report(&redline).expect("serialize");
        assert!(matches!(parse_report_json(&text), Ok(ReportVariant::Redline(_))));
    }

    #[test]
    fn unknown_or_missing_schema_is_an_error() {
        let err = parse_report_json(r#"{"schema":"other.v1"}"#).expect_err("schema");
        assert!(err.to_string().contains("other.v1"));
        assert!(parse_report_json("{}").is_err());
        assert!(parse_report_json("not json").is_err());
    }
}
