//! Command-line interface definitions for `strata`.

use camino::Utf8PathBuf;
use clap::Parser;
use strata_config::template::DEFAULT_MAX_ITERATIONS;

/// Parsed CLI arguments for `strata`.
#[derive(Debug, Parser)]
#[command(name = "strata")]
#[command(about = "Resolve layered configuration files and render templates from them")]
#[command(version)]
pub struct Args {
    /// Configuration file to load; repeat to layer, later files win.
    #[arg(
        short = 'v',
        long = "variables",
        value_name = "path",
        required = true,
        action = clap::ArgAction::Append
    )]
    pub variables: Vec<Utf8PathBuf>,

    /// Directory of filter manifests exposed to templates.
    #[arg(short = 'f', long = "filters-dir", value_name = "dir")]
    pub filters_dir: Option<Utf8PathBuf>,

    /// Directory of test manifests exposed to templates.
    #[arg(short = 't', long = "tests-dir", value_name = "dir")]
    pub tests_dir: Option<Utf8PathBuf>,

    /// Named schema to validate the resolved configuration against.
    #[arg(short = 's', long = "schema", value_name = "name")]
    pub schema: Option<String>,

    /// Path the rendered template is written to.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "path",
        requires = "input_file"
    )]
    pub output: Option<Utf8PathBuf>,

    /// Cap on template expansion passes.
    #[arg(long = "max-iterations", value_name = "n", default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: usize,

    /// Enable verbose logging (sets log level to DEBUG).
    #[arg(long)]
    pub verbose: bool,

    /// Template file rendered with the resolved configuration; when absent
    /// the resolved mapping is printed as JSON instead.
    #[arg(value_name = "input_file", requires = "output")]
    pub input_file: Option<Utf8PathBuf>,
}
