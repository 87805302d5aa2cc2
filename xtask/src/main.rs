//! Developer tasks (schema generation and report conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use policykit_test_util::normalize_nondeterministic;
use policykit_types::ids::SCHEMA_CONFIG_V1;
use policykit_types::{SCHEMA_DIFF_V1, SCHEMA_REDLINE_V1, SCHEMA_SELECTION_V1};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Project root (parent of the xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("determine current directory")?,
    };
    if manifest_dir.ends_with("xtask") {
        Ok(manifest_dir
            .parent()
            .context("xtask has no parent")?
            .to_path_buf())
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

struct SchemaSpec {
    id: &'static str,
    generate: fn() -> schemars::Schema,
}

impl SchemaSpec {
    fn filename(&self) -> String {
        format!("{}.json", self.id)
    }
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            id: SCHEMA_SELECTION_V1,
            generate: || schema_for!(policykit_types::SelectionReport),
        },
        SchemaSpec {
            id: SCHEMA_DIFF_V1,
            generate: || schema_for!(policykit_types::DiffReport),
        },
        SchemaSpec {
            id: SCHEMA_REDLINE_V1,
            generate: || schema_for!(policykit_types::RedlineReport),
        },
        SchemaSpec {
            id: SCHEMA_CONFIG_V1,
            generate: || schema_for!(policykit_settings::PolicykitConfigV1),
        },
    ]
}

/// Pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename());
        fs::write(&path, &json).with_context(|| format!("write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Fails when `schemas/` is missing a file or differs from generated output.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename());
        if !path.exists() {
            missing.push(spec.filename());
            continue;
        }
        let expected = serialize_schema(&(spec.generate)())?;
        let actual =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename());
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    for name in &missing {
        eprintln!("missing: {name}");
    }
    for name in &mismatched {
        eprintln!("out of date: {name}");
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("schema validation failed")
}

/// Run the built binary over the policy fixtures twice, validate each report against its
/// generated schema, and require normalized runs to match.
fn conform() -> anyhow::Result<()> {
    let root = project_root()?;
    let mut bin = root.join("target").join("debug").join("policykit");
    if cfg!(windows) {
        bin.set_extension("exe");
    }
    if !bin.exists() {
        bail!(
            "policykit binary not found at {}. Run `cargo build -p policykit-cli` first.",
            bin.display()
        );
    }

    let policies = root.join("tests").join("fixtures").join("policies");
    let base = policies.join("base.md").to_string_lossy().into_owned();
    let revised = policies.join("revised.md").to_string_lossy().into_owned();

    let runs: [(&str, Vec<&str>); 3] = [
        (SCHEMA_SELECTION_V1, vec!["select", "--tag", "privacy"]),
        (SCHEMA_DIFF_V1, vec!["diff", base.as_str(), revised.as_str()]),
        (
            SCHEMA_REDLINE_V1,
            vec!["redline", "--author", "xtask", base.as_str(), revised.as_str()],
        ),
    ];

    let specs = schema_specs();
    let mut errors = Vec::new();
    for (schema_id, args) in &runs {
        let spec = specs
            .iter()
            .find(|s| s.id == *schema_id)
            .context("schema spec")?;
        let schema_value = serde_json::to_value((spec.generate)())?;
        let validator = jsonschema::validator_for(&schema_value)
            .map_err(|e| anyhow::anyhow!("compile {schema_id}: {e}"))?;

        let first = run_report(&bin, args)?;
        let second = run_report(&bin, args)?;

        for err in validator.iter_errors(&first) {
            errors.push(format!("{schema_id}: {err}"));
        }
        if normalize_nondeterministic(first) != normalize_nondeterministic(second) {
            errors.push(format!("{schema_id}: repeated runs differ after normalization"));
        }
        println!("checked {schema_id}");
    }

    if errors.is_empty() {
        println!("All reports conform.");
        Ok(())
    } else {
        for e in &errors {
            eprintln!("  {e}");
        }
        bail!("{} conformance error(s)", errors.len())
    }
}

fn run_report(bin: &Path, args: &[&str]) -> anyhow::Result<serde_json::Value> {
    let tmp = tempfile::tempdir().context("create temp dir")?;
    let out = tmp.path().join("report.json");
    let status = Command::new(bin)
        .args(args)
        .arg("--out")
        .arg(&out)
        .current_dir(tmp.path())
        .status()
        .with_context(|| format!("spawn {}", bin.display()))?;
    if !status.success() {
        bail!("policykit {} exited with {status}", args.join(" "));
    }
    let text = fs::read_to_string(&out).context("read report")?;
    serde_json::from_str(&text).context("parse report")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate policykit binary output against the schemas");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cmd = args.first().map(String::as_str).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.id);
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
}
