use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use ember_file_info_core::{
    ClassifiedPaths, Config, FileInfo, FileInfoError, OutputFormat, PathClassifier, Result,
};

mod args;
use args::{Cli, Commands, ConfigAction, Shell};

/// JSON key / text heading for files that carry no container name
const UNGROUPED: &str = "ungrouped";

struct ClassifyOptions {
    paths: Vec<String>,
    format: Option<OutputFormat>,
    group: bool,
    root: Option<PathBuf>,
    all: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);
    tracing::debug!("Starting ember-file-info v{}", env!("CARGO_PKG_VERSION"));

    let base_dir = resolve_base_dir(cli.base_dir);

    let result = match cli.command {
        Some(Commands::Classify {
            paths,
            format,
            group,
            root,
            all,
        }) => handle_classify(
            &base_dir,
            ClassifyOptions {
                paths,
                format: format.map(OutputFormat::from),
                group,
                root,
                all,
            },
        ),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => Cli::command().print_help().map_err(FileInfoError::from),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_directive = if verbose {
        "ember_file_info=debug,ember_file_info_core=debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "ember-file-info", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("EMBER_FILE_INFO_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".ember-file-info"))
        .unwrap_or_else(|| PathBuf::from(".ember-file-info"))
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(FileInfoError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}

fn handle_classify(base_dir: &Path, options: ClassifyOptions) -> Result<()> {
    let config = Config::load(base_dir)?;
    let classifier = PathClassifier::from_config(&config);

    let inputs = if options.paths.is_empty() {
        tracing::debug!("No paths given, reading from stdin");
        read_paths(io::stdin().lock())?
    } else {
        options.paths
    };

    let relative: Vec<String> = inputs
        .iter()
        .map(|p| to_relative(p, options.root.as_deref()))
        .collect();

    let classified = classifier.classify_all(&relative);
    tracing::debug!(
        classified = classified.files.len(),
        skipped = classified.unclassified.len(),
        "classification finished"
    );

    let format = options.format.unwrap_or(config.output.format);
    let group = options.group || config.output.group;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => write_text(&mut out, &classified, group, options.all)?,
        OutputFormat::Json => write_json(&mut out, &classified, group, options.all)?,
    }
    out.flush()?;

    Ok(())
}

/// Read one path per non-empty line
fn read_paths<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(trimmed.to_string());
        }
    }
    Ok(paths)
}

/// Normalize an input path to the project-relative, forward-slash form
fn to_relative(input: &str, root: Option<&Path>) -> String {
    let mut path = input.replace('\\', "/");

    if let Some(root) = root {
        let root = root.to_string_lossy().replace('\\', "/");
        let root = root.trim_end_matches('/');
        if !root.is_empty() {
            if let Some(rest) = path.strip_prefix(root) {
                if let Some(rest) = rest.strip_prefix('/') {
                    path = rest.to_string();
                }
            }
        }
    }

    let mut rest = path.as_str();
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    rest.to_string()
}

fn write_text<W: Write>(
    out: &mut W,
    classified: &ClassifiedPaths,
    group: bool,
    all: bool,
) -> Result<()> {
    if group {
        for (container, files) in classified.containers() {
            writeln!(out, "{}", container.cyan().bold())?;
            for file in files {
                write_text_line(out, file)?;
            }
        }

        let ungrouped: Vec<&FileInfo> = classified
            .files
            .iter()
            .filter(|f| f.container_name().is_none())
            .collect();
        if !ungrouped.is_empty() {
            writeln!(out, "{}", UNGROUPED.dimmed())?;
            for file in ungrouped {
                write_text_line(out, file)?;
            }
        }
    } else {
        for file in &classified.files {
            write_text_line(out, file)?;
        }
    }

    if all {
        for path in &classified.unclassified {
            writeln!(out, "  {}  {}", "-".dimmed(), path.dimmed())?;
        }
    }

    Ok(())
}

fn write_text_line<W: Write>(out: &mut W, file: &FileInfo) -> Result<()> {
    writeln!(
        out,
        "  {}  {}  {}",
        file.display_label().cyan(),
        format!("[{}]", file.category()).dimmed(),
        file.relative_path()
    )?;
    Ok(())
}

fn write_json<W: Write>(
    out: &mut W,
    classified: &ClassifiedPaths,
    group: bool,
    all: bool,
) -> Result<()> {
    let mut value = if group {
        let mut groups = serde_json::Map::new();
        for (container, files) in classified.containers() {
            groups.insert(container, serde_json::to_value(files)?);
        }

        let ungrouped: Vec<&FileInfo> = classified
            .files
            .iter()
            .filter(|f| f.container_name().is_none())
            .collect();
        if !ungrouped.is_empty() {
            groups.insert(UNGROUPED.to_string(), serde_json::to_value(ungrouped)?);
        }
        serde_json::Value::Object(groups)
    } else {
        serde_json::to_value(&classified.files)?
    };

    if all {
        value = serde_json::json!({
            "files": value,
            "unclassified": classified.unclassified,
        });
    }

    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)?;
    Ok(())
}
