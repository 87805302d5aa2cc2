//! CLI entry point for policykit.
//!
//! Argument parsing, file I/O, and exit codes only. Everything else lives in
//! `policykit-app`.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use policykit_app::{
    DiffInput, ExplainOutput, RedlineInput, RenderInput, SelectInput, format_clause,
    format_lint, format_not_found, format_template, lint_exit_code, load_corpus,
    parse_report_json, render_report_markdown, run_diff, run_explain, run_lint, run_redline,
    run_render, run_select, serialize_report,
};
use policykit_settings::Overrides;
use std::io::IsTerminal;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "policykit",
    version,
    about = "Education AI-policy clause selection, policy diffs, and redlines"
)]
struct Cli {
    /// Path to policykit config TOML (missing file means defaults).
    #[arg(long, global = true, default_value = "policykit.toml")]
    config: Utf8PathBuf,

    /// Override profile (k12-standard|k12-strict|highered-standard|highered-open).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Clause corpus JSON to use instead of the built-in catalog.
    #[arg(long, global = true)]
    corpus: Option<Utf8PathBuf>,

    /// Debug logging for all policykit crates.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

/// Selection context overrides shared by `select` and `render`.
#[derive(Args, Debug, Default)]
struct SelectionArgs {
    /// Audience (k12|highered).
    #[arg(long)]
    audience: Option<String>,

    /// Risk profile (low|medium|high|critical).
    #[arg(long)]
    risk: Option<String>,

    /// AI tool-use posture (prohibited|restricted|permitted|encouraged).
    #[arg(long)]
    tool_use: Option<String>,

    /// Jurisdiction code, e.g. US or EU.
    #[arg(long)]
    jurisdiction: Option<String>,

    /// State code, e.g. CA.
    #[arg(long)]
    state: Option<String>,

    /// Custom tag to boost (repeatable; replaces configured tags).
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Clause id to always include (repeatable).
    #[arg(long)]
    include: Vec<String>,

    /// Clause id to always exclude (repeatable).
    #[arg(long)]
    exclude: Vec<String>,

    /// Follow dependencies of dependencies.
    #[arg(long)]
    transitive: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Select, rank, and justify clauses for a context.
    Select {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Where to write the JSON report (stdout if omitted).
        #[arg(long)]
        out: Option<Utf8PathBuf>,

        /// Also write a Markdown summary here.
        #[arg(long)]
        markdown_out: Option<Utf8PathBuf>,
    },

    /// Segment-level diff of two policy documents.
    Diff {
        base: Utf8PathBuf,
        new: Utf8PathBuf,

        /// Comparison unit (word|sentence|paragraph).
        #[arg(long)]
        granularity: Option<String>,

        #[arg(long)]
        ignore_case: bool,

        /// Merge adjacent deletion/addition pairs into modifications.
        #[arg(long)]
        pair_modifications: bool,

        /// Where to write the JSON report.
        #[arg(long)]
        out: Option<Utf8PathBuf>,

        /// Print a Markdown summary instead of JSON on stdout.
        #[arg(long)]
        markdown: bool,
    },

    /// Author-attributed tracked changes between two policy documents.
    Redline {
        base: Utf8PathBuf,
        new: Utf8PathBuf,

        #[arg(long)]
        author: String,

        #[arg(long)]
        ignore_case: bool,

        /// Where to write the JSON report (stdout if omitted).
        #[arg(long)]
        out: Option<Utf8PathBuf>,

        /// Write a standalone HTML redline here.
        #[arg(long)]
        html_out: Option<Utf8PathBuf>,

        /// Heading for the HTML redline.
        #[arg(long)]
        title: Option<String>,
    },

    /// Render a Markdown policy document from a template and a selection.
    Render {
        #[arg(long)]
        template: String,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Where to write the document (stdout if omitted).
        #[arg(long)]
        out: Option<Utf8PathBuf>,
    },

    /// Render Markdown from an existing JSON report.
    Md {
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown (stdout if omitted).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Describe a clause or template.
    Explain { identifier: String },

    /// Validate dependency and conflict edges in the corpus.
    Lint,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("policykit error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("policykit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("policykit=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config_text = read_config(&cli.config)?;
    let corpus_text = match &cli.corpus {
        Some(path) => Some(read_text(path)?),
        None => None,
    };
    let corpus = load_corpus(corpus_text.as_deref())?;
    let base_overrides = Overrides {
        profile: cli.profile.clone(),
        ..Overrides::default()
    };

    match cli.cmd {
        Commands::Select {
            selection,
            out,
            markdown_out,
        } => {
            let output = run_select(SelectInput {
                corpus: &corpus,
                config_text: &config_text,
                overrides: selection.into_overrides(base_overrides),
            })?;
            emit(out.as_deref(), &serialize_report(&output.report)?)?;
            if let Some(path) = markdown_out {
                let md = render_report_markdown(&policykit_app::ReportVariant::Selection(
                    output.report,
                ));
                write_text_file(&path, &md).context("write markdown")?;
            }
            Ok(0)
        }
        Commands::Diff {
            base,
            new,
            granularity,
            ignore_case,
            pair_modifications,
            out,
            markdown,
        } => {
            let base_text = read_text(&base)?;
            let new_text = read_text(&new)?;
            let output = run_diff(DiffInput {
                base: &base_text,
                new: &new_text,
                config_text: &config_text,
                overrides: Overrides {
                    granularity,
                    ignore_case: ignore_case.then_some(true),
                    pair_modifications: pair_modifications.then_some(true),
                    ..base_overrides
                },
            })?;
            let json = serialize_report(&output.report)?;
            if markdown {
                if let Some(path) = &out {
                    write_text_file(path, &json).context("write report json")?;
                }
                let md =
                    render_report_markdown(&policykit_app::ReportVariant::Diff(output.report));
                print!("{md}");
            } else {
                emit(out.as_deref(), &json)?;
            }
            Ok(0)
        }
        Commands::Redline {
            base,
            new,
            author,
            ignore_case,
            out,
            html_out,
            title,
        } => {
            let base_text = read_text(&base)?;
            let new_text = read_text(&new)?;
            let output = run_redline(RedlineInput {
                base: &base_text,
                new: &new_text,
                author: &author,
                title: title.as_deref(),
                config_text: &config_text,
                overrides: Overrides {
                    ignore_case: ignore_case.then_some(true),
                    ..base_overrides
                },
            })?;
            emit(out.as_deref(), &serialize_report(&output.report)?)?;
            if let Some(path) = html_out {
                write_text_file(&path, &output.html).context("write html redline")?;
            }
            Ok(0)
        }
        Commands::Render {
            template,
            selection,
            out,
        } => {
            let output = run_render(RenderInput {
                corpus: &corpus,
                template_id: &template,
                config_text: &config_text,
                overrides: selection.into_overrides(base_overrides),
            })?;
            emit(out.as_deref(), &output.document)?;
            Ok(0)
        }
        Commands::Md { report, output } => {
            let parsed = parse_report_json(&read_text(&report)?)?;
            emit(output.as_deref(), &render_report_markdown(&parsed))?;
            Ok(0)
        }
        Commands::Explain { identifier } => match run_explain(&corpus, &identifier) {
            ExplainOutput::Clause(clause) => {
                print!("{}", format_clause(&clause));
                Ok(0)
            }
            ExplainOutput::Template(template) => {
                print!("{}", format_template(&corpus, &template));
                Ok(0)
            }
            ExplainOutput::NotFound {
                identifier,
                clause_ids,
                template_ids,
            } => {
                eprint!("{}", format_not_found(&identifier, &clause_ids, &template_ids));
                Ok(1)
            }
        },
        Commands::Lint => {
            let output = run_lint(&corpus);
            print!("{}", format_lint(&output));
            Ok(lint_exit_code(&output))
        }
    }
}

impl SelectionArgs {
    fn into_overrides(self, base: Overrides) -> Overrides {
        Overrides {
            audience: self.audience,
            risk_profile: self.risk,
            tool_use_mode: self.tool_use,
            jurisdiction: self.jurisdiction,
            state: self.state,
            custom_tags: self.tags,
            include: self.include,
            exclude: self.exclude,
            transitive: self.transitive.then_some(true),
            ..base
        }
    }
}

/// Missing config is allowed (defaults apply); unreadable config is not.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(%path, "no config file, using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

fn read_text(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {path}"))
}

fn emit(out: Option<&Utf8Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => write_text_file(path, text),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write {path}"))?;
    Ok(())
}
