// Testmode - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use serde::Serialize;

// =============================================================================
// Entity kind
// =============================================================================

/// The kinds of content an administrator can mark as test data.
///
/// Each kind carries its own view list and pattern list in [`Settings`];
/// the label matched against the patterns differs per kind (node title,
/// term name, user mail address).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Node,
    Term,
    User,
}

impl EntityKind {
    /// Returns all variants in display order.
    pub fn all() -> &'static [EntityKind] {
        &[EntityKind::Node, EntityKind::Term, EntityKind::User]
    }

    /// Stable lowercase label, matching the settings file keys.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Node => "node",
            EntityKind::Term => "term",
            EntityKind::User => "user",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Settings (runtime representation)
// =============================================================================

/// Validated runtime settings: per-kind view identifiers and LIKE pattern
/// lists, plus the term-overview flag.
///
/// Built from `settings::RawSettings` (the raw TOML structure) via
/// validation. Lists are already normalised: entries trimmed, empty
/// entries dropped, order preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// View identifiers whose node listings are filtered.
    pub node_views: Vec<String>,

    /// View identifiers whose term listings are filtered.
    pub term_views: Vec<String>,

    /// View identifiers whose user listings are filtered.
    pub user_views: Vec<String>,

    /// LIKE patterns marking node titles as test content.
    pub node_patterns: Vec<String>,

    /// LIKE patterns marking term names as test content.
    pub term_patterns: Vec<String>,

    /// LIKE patterns marking user mail addresses as test content.
    pub user_patterns: Vec<String>,

    /// Whether term listings include the overview page.
    pub list_term: bool,

    /// Log level from the settings file, if present and valid.
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let owned = |defaults: &[&str]| -> Vec<String> {
            defaults.iter().map(|s| (*s).to_string()).collect()
        };
        Self {
            node_views: owned(constants::DEFAULT_NODE_VIEWS),
            term_views: owned(constants::DEFAULT_TERM_VIEWS),
            user_views: owned(constants::DEFAULT_USER_VIEWS),
            node_patterns: owned(constants::DEFAULT_NODE_PATTERNS),
            term_patterns: owned(constants::DEFAULT_TERM_PATTERNS),
            user_patterns: owned(constants::DEFAULT_USER_PATTERNS),
            list_term: constants::DEFAULT_LIST_TERM,
            log_level: None,
        }
    }
}

impl Settings {
    /// View identifiers configured for the given entity kind.
    pub fn views(&self, kind: EntityKind) -> &[String] {
        match kind {
            EntityKind::Node => &self.node_views,
            EntityKind::Term => &self.term_views,
            EntityKind::User => &self.user_views,
        }
    }

    /// LIKE patterns configured for the given entity kind.
    pub fn patterns(&self, kind: EntityKind) -> &[String] {
        match kind {
            EntityKind::Node => &self.node_patterns,
            EntityKind::Term => &self.term_patterns,
            EntityKind::User => &self.user_patterns,
        }
    }

    /// Whether a listing drawn from the named view is subject to
    /// filtering.
    ///
    /// The term overview listing is controlled by `list_term`; every
    /// other view is filtered when it appears in the kind's view list.
    pub fn filters_view(&self, kind: EntityKind, view: &str) -> bool {
        if kind == EntityKind::Term && view == constants::TERM_OVERVIEW_VIEW {
            return self.list_term;
        }
        self.views(kind).iter().any(|v| v == view)
    }
}

// =============================================================================
// Label decision (output of filtering)
// =============================================================================

/// The outcome of evaluating one label against a pattern set.
///
/// This is the unit that flows from filtering into the text and JSON
/// reports. Decisions preserve input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelDecision {
    /// The label exactly as it was read, no normalisation.
    pub label: String,

    /// Whether the label survives filtering.
    pub retained: bool,

    /// The first configured pattern that matched, when one did.
    /// `None` for labels retained without consulting any pattern.
    pub pattern: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_shipped_config() {
        let s = Settings::default();
        assert_eq!(s.node_views, vec!["content"]);
        assert!(s.term_views.is_empty());
        assert_eq!(s.user_views, vec!["user_admin_people"]);
        assert_eq!(s.node_patterns, vec!["[TEST%"]);
        assert_eq!(s.term_patterns, vec!["[TEST%"]);
        assert_eq!(s.user_patterns, vec!["%example%"]);
        assert!(s.list_term);
        assert!(s.log_level.is_none());
    }

    #[test]
    fn per_kind_accessors_select_matching_lists() {
        let s = Settings::default();
        assert_eq!(s.views(EntityKind::Node), &["content".to_string()][..]);
        assert_eq!(s.patterns(EntityKind::User), &["%example%".to_string()][..]);
        assert!(s.views(EntityKind::Term).is_empty());
    }

    #[test]
    fn kind_labels_are_lowercase_and_stable() {
        for kind in EntityKind::all() {
            assert_eq!(kind.label(), kind.to_string());
            assert_eq!(kind.label(), kind.label().to_lowercase());
        }
    }

    #[test]
    fn configured_views_are_filtered() {
        let s = Settings::default();
        assert!(s.filters_view(EntityKind::Node, "content"));
        assert!(!s.filters_view(EntityKind::Node, "frontpage"));
        assert!(s.filters_view(EntityKind::User, "user_admin_people"));
        assert!(!s.filters_view(EntityKind::Term, "content"));
    }

    #[test]
    fn term_overview_follows_list_term_flag() {
        let mut s = Settings::default();
        assert!(s.filters_view(EntityKind::Term, "overview"));

        s.list_term = false;
        assert!(!s.filters_view(EntityKind::Term, "overview"));

        // The flag only governs terms; for other kinds "overview" is an
        // ordinary view name.
        assert!(!s.filters_view(EntityKind::Node, "overview"));
        s.node_views.push("overview".to_string());
        assert!(s.filters_view(EntityKind::Node, "overview"));
    }
}
