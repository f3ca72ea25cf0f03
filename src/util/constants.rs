// Testmode - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Testmode";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Testmode";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Shipped defaults
// =============================================================================

/// Default view identifiers filtered for node listings.
pub const DEFAULT_NODE_VIEWS: &[&str] = &["content"];

/// Default view identifiers filtered for taxonomy term listings.
pub const DEFAULT_TERM_VIEWS: &[&str] = &[];

/// Default view identifiers filtered for user listings.
pub const DEFAULT_USER_VIEWS: &[&str] = &["user_admin_people"];

/// Default LIKE patterns marking node titles as test content.
pub const DEFAULT_NODE_PATTERNS: &[&str] = &["[TEST%"];

/// Default LIKE patterns marking term names as test content.
pub const DEFAULT_TERM_PATTERNS: &[&str] = &["[TEST%"];

/// Default LIKE patterns marking user mail addresses as test content.
pub const DEFAULT_USER_PATTERNS: &[&str] = &["%example%"];

/// Whether term listings include the overview page by default.
pub const DEFAULT_LIST_TERM: bool = true;

/// View identifier of the taxonomy term overview listing, which is
/// controlled by `list_term` rather than the term view list.
pub const TERM_OVERVIEW_VIEW: &str = "overview";

// =============================================================================
// Settings limits
// =============================================================================

/// Maximum size of the settings TOML file in bytes.
pub const MAX_SETTINGS_FILE_SIZE: u64 = 64 * 1024; // 64 KB

/// Maximum number of patterns accepted per entity kind.
/// Longer lists are truncated with a warning during validation.
pub const MAX_PATTERNS_PER_KIND: usize = 100;

/// Maximum number of view identifiers accepted per entity kind.
pub const MAX_VIEWS_PER_KIND: usize = 100;

/// Maximum length of a single pattern in characters.
/// The translated regex grows linearly with the pattern, so this also
/// bounds compiled pattern size. Longer entries are dropped with a warning
/// during validation.
pub const MAX_PATTERN_LENGTH: usize = 4_096;

// =============================================================================
// Input limits
// =============================================================================

/// Hard upper bound on the number of labels ingested in a single run.
/// When the cap is reached ingestion stops and a warning is emitted so the
/// user knows the listing was truncated.
pub const MAX_INPUT_LABELS: usize = 1_000_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Settings file name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "testmode.toml";
