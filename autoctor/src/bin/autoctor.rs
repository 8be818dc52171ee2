//! Command line front end.
//!
//! Reads a declaration file and writes one `.g.cs` unit per marked type,
//! either into a directory or to stdout.
//!
//! Usage:
//!   autoctor declarations.xml --out generated/ [--indent 2] [--no-header] [-v]

use anyhow::{Context, Result};
use autoctor::{GeneratedUnit, Generator, GeneratorConfig, parse_declarations_file, write_units};
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(name = "autoctor")]
#[clap(about = "Generate constructors for [AutoConstruct] types")]
struct Args {
    /// Declaration XML file
    input: PathBuf,

    /// Output directory (prints to stdout when omitted)
    #[clap(short, long)]
    out: Option<PathBuf>,

    /// Omit the auto-generated header line
    #[clap(long)]
    no_header: bool,

    /// Spaces per indentation level
    #[clap(long, default_value_t = 4)]
    indent: usize,

    /// Skip declaration validation
    #[clap(long)]
    skip_validation: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::new()
            .with_indent_width(self.indent)
            .with_validation(!self.skip_validation);
        if self.no_header {
            config.with_header(None)
        } else {
            config
        }
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn print_units(units: &[GeneratedUnit]) {
    for (i, unit) in units.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("// {}", unit.file_name());
        print!("{}", unit.source);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let set = parse_declarations_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    info!("loaded {} declarations from {}", set.len(), args.input.display());

    let generator = Generator::new(args.config());
    let units = generator
        .generate(&set, &CancellationToken::new())
        .context("generation failed")?;

    match &args.out {
        Some(dir) => {
            let paths = write_units(dir, &units)
                .with_context(|| format!("failed to write units to {}", dir.display()))?;
            info!("wrote {} files to {}", paths.len(), dir.display());
        }
        None => print_units(&units),
    }

    Ok(())
}
