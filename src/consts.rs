//! Default page markers and storage names used by [`crate::config::Config`].

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme preference.
pub const STORAGE_KEY: &str = "pg-theme";

/// Attribute set on `<html>` and `<body>` to the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Id of the optional theme toggle control.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Class carried by the toggle control while the dark theme is active.
pub const TOGGLE_DARK_CLASS: &str = "is-dark";

// ── Card swatches ───────────────────────────────────────────────

/// Marker attribute on swatch buttons; its value is the card theme to apply.
pub const SWATCH_TRIGGER_ATTRIBUTE: &str = "data-card-theme-trigger";

/// Attribute on swatch buttons naming the id of the card they restyle.
pub const SWATCH_TARGET_ATTRIBUTE: &str = "data-target";

/// Attribute written onto the target card.
pub const CARD_THEME_ATTRIBUTE: &str = "data-theme";

/// Class of the container grouping one card's swatch buttons.
pub const SWATCH_ROW_CLASS: &str = "swatch-row";

/// Tag of the elements whose active state a swatch row manages.
pub const SWATCH_BUTTON_TAG: &str = "button";

// ── Shared ──────────────────────────────────────────────────────

/// Class marking the selected swatch or role link.
pub const ACTIVE_CLASS: &str = "active";

// ── Role links ──────────────────────────────────────────────────

/// Marker attribute on role links.
pub const ROLE_LINK_ATTRIBUTE: &str = "data-role-link";

/// Optional attribute naming the group a role link is exclusive within.
pub const ROLE_GROUP_ATTRIBUTE: &str = "data-role-group";
