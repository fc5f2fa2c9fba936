use std::str::FromStr;

use anyhow::bail;
use clap::Parser;
use colored::Colorize;
use substring_dfa_lib::{
    config::RunConfig,
    language::{LanguageSpec, LanguageSpecFile, build::build_dfa, matcher::MatchPolicy},
    validation,
    views::{
        graph::GraphView,
        json::AutomatonExport,
        table::TransitionTable,
        trace::{TraceExport, render_run},
    },
};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "Substring DFA Tool")]
#[command(version = "0.1")]
#[command(
    about = "Build a DFA for a required-substring plus length-modulus language and classify strings",
    long_about = None
)]
struct Args {
    /// Strings to classify against the language.
    inputs: Vec<String>,

    /// JSON language spec file with alphabet, substring, and modulus.
    #[arg(short, long)]
    spec: Option<String>,

    /// Alphabet as comma separated single symbols, e.g. "a,b".
    #[arg(short, long)]
    alphabet: Option<String>,

    /// Required substring over the alphabet.
    #[arg(short, long)]
    pattern: Option<String>,

    /// Required divisor of the string length.
    #[arg(short, long)]
    modulus: Option<String>,

    /// Print the transition table.
    #[arg(short, long)]
    table: bool,

    /// Write the automaton exchange format to this file.
    #[arg(short, long)]
    export: Option<String>,

    /// Print the transition graph as Graphviz dot.
    #[arg(short, long)]
    dot: bool,

    /// Print each trace as JSON instead of human readable lines.
    #[arg(short, long)]
    json: bool,

    /// TOML run configuration file.
    #[arg(short, long)]
    config: Option<String>,

    /// Match policy override: "restart" (default) or "failure-function".
    #[arg(long)]
    policy: Option<MatchPolicy>,
}

impl Args {
    fn language_spec(&self) -> anyhow::Result<LanguageSpec> {
        let result = match (&self.spec, &self.alphabet, &self.pattern, &self.modulus) {
            (Some(path), None, None, None) => LanguageSpecFile::from_file(path)?.validate(),
            (None, Some(alphabet), Some(pattern), Some(modulus)) => {
                validation::parse_spec(alphabet, pattern, modulus)
            }
            (Some(_), _, _, _) => {
                bail!("--spec cannot be combined with --alphabet/--pattern/--modulus")
            }
            _ => bail!("Provide either --spec or all of --alphabet, --pattern, and --modulus"),
        };

        result.map_err(|violations| {
            anyhow::anyhow!(
                "Invalid language specification:\n{}",
                violations
                    .iter()
                    .map(|v| format!("  {}", v))
                    .collect::<Vec<_>>()
                    .join("\n")
            )
        })
    }
}

fn init_tracing(config: &RunConfig) -> anyhow::Result<()> {
    let level = match &config.log_level {
        Some(level) => Level::from_str(level)?,
        None => Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = RunConfig::from_optional_file(args.config.as_deref())?;
    init_tracing(&config)?;

    let spec = args.language_spec()?;
    let policy = args.policy.unwrap_or(config.policy);

    let dfa = build_dfa(&spec, policy);

    if args.table {
        print!("{}", TransitionTable::new(&dfa).render());
    }

    if let Some(path) = &args.export {
        AutomatonExport::new(&dfa).save_to_file(path)?;
    }

    if args.dot {
        print!("{}", GraphView::new(&dfa).to_graphviz());
    }

    for input in &args.inputs {
        let chars = input.chars().collect::<Vec<_>>();
        let run = dfa.run(&chars);

        if args.json {
            println!("{}", serde_json::to_string_pretty(&TraceExport::new(&run))?);
            continue;
        }

        println!("Input: {:?}", input);
        for line in render_run(&run) {
            println!("{}", line);
        }

        let verdict = if run.accepted() {
            "belongs to the language".green()
        } else {
            "does not belong to the language".red()
        };
        println!("Verdict: {}", verdict);
        println!();
    }

    Ok(())
}
