use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use ember_file_info_core::OutputFormat;

#[derive(Parser)]
#[command(name = "ember-file-info")]
#[command(about = "Classify Ember project paths into file categories")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Base directory (default: ~/.ember-file-info)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify project-relative paths (reads stdin when no path is given)
    Classify {
        /// Paths to classify (e.g., app/routes/index.js)
        paths: Vec<String>,

        /// Output format (default: config output.format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Group files by container name (e.g., route:foo.bar)
        #[arg(short, long)]
        group: bool,

        /// Project root to strip from absolute paths
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Also list paths that could not be classified
        #[arg(short, long)]
        all: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., output.format)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., singularize.irregular)
        key: String,

        /// Value to set (e.g., "json", "cacti=cactus,data=data" or "[pods, data]")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}
