use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Utilities to compare kmp.json with keyboards.csv",
    long_about = None
)]
pub struct CheckArgs {
    /// Path to keyboards.csv text file
    #[arg(short = 'c', long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,
    /// Path to kmp.json file
    #[arg(short = 'j', long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,
    /// Do not echo the input parameters before checking
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
    /// Render mismatches as an aligned table instead of tab-separated rows
    #[arg(long = "table")]
    pub table: bool,
    /// Exit with status 1 when any mismatch or missing keyboard is reported
    #[arg(long = "strict")]
    pub strict: bool,
}

/// Run options resolved from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckConfig {
    pub verbose: bool,
    pub table: bool,
    pub strict: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            verbose: true,
            table: false,
            strict: false,
        }
    }
}

impl From<&CheckArgs> for CheckConfig {
    fn from(args: &CheckArgs) -> Self {
        CheckConfig {
            verbose: !args.quiet,
            table: args.table,
            strict: args.strict,
        }
    }
}
