// Testmode - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. Settings loading (platform paths + settings file)
// 3. Logging initialisation (debug mode support)
// 4. Label filtering and report output

use clap::Parser;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use testmode::core::filter::{self, PatternSet};
use testmode::core::lines;
use testmode::core::model::{EntityKind, Settings};
use testmode::core::report;
use testmode::core::settings;
use testmode::platform::config::{self as platform_config, PlatformPaths};
use testmode::util::constants;
use testmode::util::error::{Result, TestmodeError};
use testmode::util::logging;

/// Testmode - mark content as test data and filter it out of listings.
///
/// Reads entity labels one per line, matches them against the LIKE
/// patterns configured for the chosen entity kind, and prints the listing
/// that survives. Without --test-mode the listing passes through
/// unchanged.
#[derive(Parser, Debug)]
#[command(name = "testmode", version, about)]
struct Cli {
    /// File with labels, one per line (reads stdin if omitted).
    labels: Option<PathBuf>,

    /// Entity kind whose configured patterns apply.
    #[arg(short = 'k', long = "kind", value_enum, default_value = "node")]
    kind: KindArg,

    /// Enable test mode: retain only labels matching at least one pattern.
    #[arg(short = 't', long = "test-mode")]
    test_mode: bool,

    /// Identifier of the view the listing comes from. Filtering applies
    /// only when the view is configured for the kind; omit to filter
    /// unconditionally.
    #[arg(long = "view")]
    view: Option<String>,

    /// Additional LIKE pattern, appended to the configured list (repeatable).
    #[arg(short = 'p', long = "pattern")]
    pattern: Vec<String>,

    /// File with additional patterns, one per line.
    #[arg(long = "patterns-file")]
    patterns_file: Option<PathBuf>,

    /// Settings file path (default: testmode.toml in the platform config dir).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Emit the full decision list as JSON instead of the plain listing.
    #[arg(long = "json")]
    json: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// CLI-side mirror of [`EntityKind`], keeping clap out of the core layer.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Node,
    Term,
    User,
}

impl From<KindArg> for EntityKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Node => EntityKind::Node,
            KindArg::Term => EntityKind::Term,
            KindArg::User => EntityKind::User,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Settings are loaded before logging comes up because the settings
    // file carries the log level; warnings accumulate and are logged
    // right after initialisation.
    let (paths, mut warnings) = PlatformPaths::resolve();
    let settings_path = cli.config.clone().unwrap_or_else(|| paths.settings_path());
    let (settings, settings_warnings) = load_settings(&settings_path, cli.config.is_some());
    warnings.extend(settings_warnings);

    logging::init(cli.debug, settings.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        settings = %settings_path.display(),
        "Testmode starting"
    );
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    if let Err(e) = run(&cli, &settings) {
        tracing::error!(error = %e, "Run failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    let kind = EntityKind::from(cli.kind);
    let patterns = effective_patterns(cli, settings, kind)?;
    let labels = read_labels(cli.labels.as_deref())?;

    let view_applies = cli
        .view
        .as_deref()
        .map_or(true, |view| settings.filters_view(kind, view));

    let decisions = if cli.test_mode && view_applies {
        let set = PatternSet::new(&patterns);
        tracing::debug!(
            kind = %kind,
            patterns = set.len(),
            labels = labels.len(),
            "Filtering listing"
        );
        filter::evaluate(&labels, &set)
    } else {
        if cli.test_mode {
            tracing::debug!(
                kind = %kind,
                view = cli.view.as_deref(),
                "View not configured for filtering; listing passes through"
            );
        } else {
            tracing::debug!(
                labels = labels.len(),
                "Test mode disabled; listing passes through"
            );
        }
        filter::pass_all(&labels)
    };

    let stdout = std::io::stdout();
    let retained = if cli.json {
        report::write_json(&decisions, stdout.lock())?
    } else {
        report::write_text(&decisions, stdout.lock())?
    };

    tracing::info!(total = decisions.len(), retained, "Listing complete");
    Ok(())
}

/// Assemble the effective pattern list: the configured patterns for the
/// kind, then entries from --patterns-file, then each --pattern, in order.
fn effective_patterns(cli: &Cli, settings: &Settings, kind: EntityKind) -> Result<Vec<String>> {
    let mut patterns: Vec<String> = settings.patterns(kind).to_vec();

    if let Some(ref path) = cli.patterns_file {
        let content = std::fs::read_to_string(path).map_err(|e| TestmodeError::Io {
            path: path.clone(),
            operation: "reading patterns file",
            source: e,
        })?;
        patterns.extend(lines::to_list(content));
    }

    patterns.extend(cli.pattern.iter().cloned());
    Ok(patterns)
}

/// Read labels from the given file, or stdin when absent.
///
/// Labels are subjects: lines are kept verbatim apart from the line
/// terminator, including leading/trailing whitespace and empty lines.
/// Ingestion stops with a warning at `MAX_INPUT_LABELS`.
fn read_labels(path: Option<&Path>) -> Result<Vec<String>> {
    let display_path = path.unwrap_or(Path::new("<stdin>"));
    let reader: Box<dyn BufRead> = match path {
        Some(p) => {
            let file = std::fs::File::open(p).map_err(|e| TestmodeError::Io {
                path: p.to_path_buf(),
                operation: "opening labels file",
                source: e,
            })?;
            Box::new(std::io::BufReader::new(file))
        }
        None => Box::new(std::io::stdin().lock()),
    };

    let mut labels = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| TestmodeError::Io {
            path: display_path.to_path_buf(),
            operation: "reading labels",
            source: e,
        })?;
        if labels.len() >= constants::MAX_INPUT_LABELS {
            tracing::warn!(
                max = constants::MAX_INPUT_LABELS,
                "Label cap reached; remaining input ignored"
            );
            break;
        }
        labels.push(line);
    }
    Ok(labels)
}

/// Load settings from `path`, degrading to defaults with warnings on any
/// problem. A missing file at the default location is a normal first-run
/// state; a missing file the user asked for explicitly gets a warning.
fn load_settings(path: &Path, explicit: bool) -> (Settings, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    let content = match platform_config::read_settings_file(path) {
        Ok(Some(content)) => content,
        Ok(None) => {
            if explicit {
                warnings.push(format!(
                    "Settings file '{}' does not exist. Using defaults.",
                    path.display()
                ));
            }
            return (Settings::default(), warnings);
        }
        Err(e) => {
            warnings.push(format!("{e}. Using defaults."));
            return (Settings::default(), warnings);
        }
    };

    match settings::parse_settings_toml(&content, path) {
        Ok(raw) => {
            let (settings, mut validation_warnings) = settings::validate_settings(raw);
            warnings.append(&mut validation_warnings);
            (settings, warnings)
        }
        Err(e) => {
            warnings.push(format!("{e}. Using defaults."));
            (Settings::default(), warnings)
        }
    }
}
