use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use ktsurface::{OutputFormat, Summarizer, SurfaceConfig, SurfaceError};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let matches = Command::new("ktsurface")
        .about("Summarize the public API surface of Kotlin sources")
        .arg(
            Arg::new("path")
                .help("Kotlin file or directory to summarize")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(".")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(clap::value_parser!(OutputFormat))
                .default_value("text"),
        )
        .arg(
            Arg::new("ext")
                .long("ext")
                .value_name("EXT")
                .help("Recognized source extension when walking directories (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase diagnostic output")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_tracing(matches.get_count("verbose"));

    let path = matches
        .get_one::<PathBuf>("path")
        .cloned()
        .unwrap_or_default();
    let format = matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or_default();
    let extensions: Vec<String> = matches
        .get_many::<String>("ext")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let config = SurfaceConfig::default()
        .with_format(format)
        .with_extensions(extensions);

    let mut summarizer = Summarizer::new(config)?;
    let summary = match summarizer.run(&path) {
        Ok(summary) => summary,
        Err(err @ (SurfaceError::PathNotFound(_) | SurfaceError::NoSourceFiles(_))) => {
            error!("Error: {}", err);
            process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(summary.output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
