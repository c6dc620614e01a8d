//! `lingo`: generate language lookup tables from `languages.yml`
//!
//! With no arguments it reads `languages.yml` and writes `languages.rs` in
//! the current directory.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use lingo_codegen::generators::GeneratorConfig;
use lingo_codegen::LOG_TARGET;
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[clap(name = "lingo", version, about = "Generate language lookup tables")]
struct Args {
    /// Language definition file
    #[clap(long, default_value = "languages.yml")]
    input: PathBuf,

    /// Generated Rust file, overwritten on every run
    #[clap(long, default_value = "languages.rs")]
    output: PathBuf,

    /// Module wrapping the generated items
    #[clap(long, default_value = "lingo")]
    module: String,

    /// Emit the items at file level instead of inside a module
    #[clap(long, conflicts_with = "module")]
    no_module: bool,

    /// Include filenames in the generated `Language` values
    #[clap(long)]
    render_filenames: bool,
}

impl Args {
    fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            module_name: (!self.no_module).then(|| self.module.clone()),
            render_filenames: self.render_filenames,
            ..GeneratorConfig::default()
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(target: LOG_TARGET, "{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let summary =
        lingo_codegen::generate_rust_from_file(&args.input, &args.output, args.generator_config())?;

    debug!(
        target: LOG_TARGET,
        "{} languages, {} extensions, {} filenames (formatted: {})",
        summary.languages,
        summary.extensions,
        summary.filenames,
        summary.formatted
    );

    Ok(())
}

/// Plain `lingo: message` lines on stderr, filtered by `RUST_LOG` (default `warn`)
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_level(false)
        .with_target(true)
        .with_ansi(false)
        .init();
}
