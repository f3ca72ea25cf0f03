// Testmode - core/settings.rs
//
// Settings file parsing and validation.
// Core layer: accepts TOML strings, never touches the filesystem.
// I/O is handled by platform::config which feeds content here.

use crate::core::lines::{self, LinesValue};
use crate::core::model::Settings;
use crate::util::constants;
use crate::util::error::SettingsError;
use std::path::Path;

// =============================================================================
// TOML deserialization structures (raw input)
// =============================================================================

/// Raw deserialisable shape of the settings file.
///
/// Every key is optional; missing keys take shipped defaults during
/// validation. Unknown keys are silently ignored for forward
/// compatibility. List-valued keys accept either a TOML array of strings
/// or a multiline string block, one entry per line.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// `[views]` section.
    pub views: ViewsSection,
    /// `[patterns]` section.
    pub patterns: PatternsSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[views]` settings section: which listings are filtered per kind.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ViewsSection {
    /// View identifiers for node listings.
    pub node: Option<LinesValue>,
    /// View identifiers for term listings.
    pub term: Option<LinesValue>,
    /// View identifiers for user listings.
    pub user: Option<LinesValue>,
    /// Whether term listings include the overview page.
    pub list_term: Option<bool>,
}

/// `[patterns]` settings section: LIKE patterns marking test content.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PatternsSection {
    /// Patterns matched against node titles.
    pub node: Option<LinesValue>,
    /// Patterns matched against term names.
    pub term: Option<LinesValue>,
    /// Patterns matched against user mail addresses.
    pub user: Option<LinesValue>,
}

/// `[logging]` settings section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

// =============================================================================
// Parsing and validation
// =============================================================================

/// Parse a TOML string into `RawSettings`.
///
/// `source_path` is used for error messages only (not for I/O).
pub fn parse_settings_toml(
    toml_content: &str,
    source_path: &Path,
) -> Result<RawSettings, SettingsError> {
    toml::from_str(toml_content).map_err(|e| SettingsError::TomlParse {
        path: source_path.to_path_buf(),
        source: e,
    })
}

/// Validate `RawSettings` into runtime [`Settings`].
///
/// Never fails; invalid values produce actionable warnings and fall back
/// to defaults. Lists are normalised through [`lines::to_list`], so both
/// TOML shapes end up as trimmed, non-empty entries in order. A key that
/// is present but empty genuinely means "no entries" and is not replaced
/// by the default.
pub fn validate_settings(raw: RawSettings) -> (Settings, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let defaults = Settings::default();

    let log_level = match raw.logging.level {
        Some(level) => {
            let valid = ["error", "warn", "info", "debug", "trace"];
            if valid.contains(&level.to_lowercase().as_str()) {
                Some(level)
            } else {
                warnings.push(format!(
                    "[logging] level = \"{level}\" is not recognised. \
                     Valid values: error, warn, info, debug, trace. Using default ({}).",
                    constants::DEFAULT_LOG_LEVEL,
                ));
                None
            }
        }
        None => None,
    };

    let settings = Settings {
        node_views: normalise_views(raw.views.node, defaults.node_views, "node", &mut warnings),
        term_views: normalise_views(raw.views.term, defaults.term_views, "term", &mut warnings),
        user_views: normalise_views(raw.views.user, defaults.user_views, "user", &mut warnings),
        node_patterns: normalise_patterns(
            raw.patterns.node,
            defaults.node_patterns,
            "node",
            &mut warnings,
        ),
        term_patterns: normalise_patterns(
            raw.patterns.term,
            defaults.term_patterns,
            "term",
            &mut warnings,
        ),
        user_patterns: normalise_patterns(
            raw.patterns.user,
            defaults.user_patterns,
            "user",
            &mut warnings,
        ),
        list_term: raw.views.list_term.unwrap_or(defaults.list_term),
        log_level,
    };

    (settings, warnings)
}

/// Normalise one `[views]` list, falling back to `default` when absent.
fn normalise_views(
    value: Option<LinesValue>,
    default: Vec<String>,
    kind_key: &str,
    warnings: &mut Vec<String>,
) -> Vec<String> {
    let Some(value) = value else {
        return default;
    };
    let mut entries = lines::to_list(value);
    if entries.len() > constants::MAX_VIEWS_PER_KIND {
        warnings.push(format!(
            "[views] {kind_key} has {} entries, exceeds maximum of {}. Keeping the first {}.",
            entries.len(),
            constants::MAX_VIEWS_PER_KIND,
            constants::MAX_VIEWS_PER_KIND,
        ));
        entries.truncate(constants::MAX_VIEWS_PER_KIND);
    }
    entries
}

/// Normalise one `[patterns]` list, falling back to `default` when absent.
///
/// Entries longer than `MAX_PATTERN_LENGTH` characters are dropped rather
/// than truncated; cutting a pattern mid-way would silently change what it
/// matches.
fn normalise_patterns(
    value: Option<LinesValue>,
    default: Vec<String>,
    kind_key: &str,
    warnings: &mut Vec<String>,
) -> Vec<String> {
    let Some(value) = value else {
        return default;
    };
    let mut entries = lines::to_list(value);

    let before = entries.len();
    entries.retain(|p| p.chars().count() <= constants::MAX_PATTERN_LENGTH);
    if entries.len() < before {
        warnings.push(format!(
            "[patterns] {kind_key}: dropped {} entry(ies) longer than {} characters.",
            before - entries.len(),
            constants::MAX_PATTERN_LENGTH,
        ));
    }

    if entries.len() > constants::MAX_PATTERNS_PER_KIND {
        warnings.push(format!(
            "[patterns] {kind_key} has {} entries, exceeds maximum of {}. Keeping the first {}.",
            entries.len(),
            constants::MAX_PATTERNS_PER_KIND,
            constants::MAX_PATTERNS_PER_KIND,
        ));
        entries.truncate(constants::MAX_PATTERNS_PER_KIND);
    }
    entries
}

// =============================================================================
// Tests
// =============================================================================
