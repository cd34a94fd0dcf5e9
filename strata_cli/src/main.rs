//! CLI entrypoint for `strata`.

mod cli;
mod error;
mod output;
mod schema_registry;

use std::io::Write;

use clap::Parser;
use strata_config::{FilterRegistry, Resolver, TestRegistry, ValidationOutcome};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::Args;
use crate::error::CliError;
use crate::schema_registry::SchemaRegistry;

fn main() -> Result<(), CliError> {
    let args = Args::parse();
    init_tracing(args.verbose);
    run(&args)
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut builder = Resolver::builder()
        .paths(args.variables.iter().cloned())
        .max_iterations(args.max_iterations);
    if let Some(dir) = args.filters_dir.as_deref() {
        builder = builder.filters_dir(dir.as_std_path());
    }
    if let Some(dir) = args.tests_dir.as_deref() {
        builder = builder.tests_dir(dir.as_std_path());
    }
    let resolved = builder.build().resolve()?;

    if let Some(name) = args.schema.as_deref() {
        validate_against(name, &resolved)?;
    }

    match args.input_file.as_deref() {
        Some(input) => {
            let out_path = args.output.as_deref().ok_or_else(|| CliError::Io {
                path: input.to_owned(),
                source: std::io::Error::other("--output is required with an input template"),
            })?;
            let filters = registry_from(args.filters_dir.as_deref(), FilterRegistry::from_manifest_dir);
            let tests = registry_from(args.tests_dir.as_deref(), TestRegistry::from_manifest_dir);
            output::render_to_file(input, out_path, &resolved, &filters, &tests)
        }
        None => {
            let json = serde_json::to_string_pretty(&resolved)?;
            writeln!(std::io::stdout(), "{json}").map_err(CliError::Stdout)
        }
    }
}

fn validate_against(name: &str, resolved: &strata_config::ConfigMap) -> Result<(), CliError> {
    let registry = SchemaRegistry::with_defaults();
    let validator = registry.get(name).ok_or_else(|| CliError::UnknownSchema {
        name: name.to_owned(),
        available: registry.available(),
    })?;
    match validator(resolved) {
        ValidationOutcome::Success { message } => {
            tracing::info!("{message}");
            Ok(())
        }
        ValidationOutcome::Failure { violations } => {
            for violation in &violations {
                tracing::error!(field = %violation.field, "{}", violation.message);
            }
            Err(CliError::Validation)
        }
    }
}

fn registry_from<R: Default>(
    dir: Option<&camino::Utf8Path>,
    build: impl Fn(&std::path::Path) -> R,
) -> R {
    dir.map(|d| build(d.as_std_path())).unwrap_or_default()
}

fn init_tracing(verbose: bool) {
    // RUST_LOG in the environment always takes precedence; --verbose falls
    // back to DEBUG.
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
