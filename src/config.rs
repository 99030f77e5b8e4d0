//! Page marker names and the storage key.
//!
//! Defaults come from [`crate::consts`]. A page can override any subset by
//! passing a JSON object to `boot_with_config`; omitted fields keep their
//! defaults and unknown fields are rejected.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::Error;
use crate::selector::Selector;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub storage_key: String,
    pub theme_attribute: String,
    pub default_theme: Theme,
    pub toggle_id: String,
    pub toggle_dark_class: String,
    pub swatch_trigger_attribute: String,
    pub swatch_target_attribute: String,
    pub card_theme_attribute: String,
    pub swatch_row_class: String,
    pub swatch_button_tag: String,
    pub active_class: String,
    pub role_link_attribute: String,
    pub role_group_attribute: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: consts::STORAGE_KEY.into(),
            theme_attribute: consts::THEME_ATTRIBUTE.into(),
            default_theme: Theme::Light,
            toggle_id: consts::TOGGLE_ID.into(),
            toggle_dark_class: consts::TOGGLE_DARK_CLASS.into(),
            swatch_trigger_attribute: consts::SWATCH_TRIGGER_ATTRIBUTE.into(),
            swatch_target_attribute: consts::SWATCH_TARGET_ATTRIBUTE.into(),
            card_theme_attribute: consts::CARD_THEME_ATTRIBUTE.into(),
            swatch_row_class: consts::SWATCH_ROW_CLASS.into(),
            swatch_button_tag: consts::SWATCH_BUTTON_TAG.into(),
            active_class: consts::ACTIVE_CLASS.into(),
            role_link_attribute: consts::ROLE_LINK_ATTRIBUTE.into(),
            role_group_attribute: consts::ROLE_GROUP_ATTRIBUTE.into(),
        }
    }
}

impl Config {
    /// Parse a JSON override object and validate the result.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every name can be used as-is in a CSS selector or
    /// attribute call.
    pub fn validate(&self) -> Result<(), Error> {
        if self.storage_key.is_empty() {
            return Err(Error::Config("storage_key is empty".into()));
        }
        if self.toggle_id.is_empty() {
            return Err(Error::Config("toggle_id is empty".into()));
        }
        let names = [
            ("theme_attribute", &self.theme_attribute),
            ("toggle_dark_class", &self.toggle_dark_class),
            ("swatch_trigger_attribute", &self.swatch_trigger_attribute),
            ("swatch_target_attribute", &self.swatch_target_attribute),
            ("card_theme_attribute", &self.card_theme_attribute),
            ("swatch_row_class", &self.swatch_row_class),
            ("swatch_button_tag", &self.swatch_button_tag),
            ("active_class", &self.active_class),
            ("role_link_attribute", &self.role_link_attribute),
            ("role_group_attribute", &self.role_group_attribute),
        ];
        for (field, value) in names {
            if !is_css_ident(value) {
                return Err(Error::Config(format!("{field} is not a plain identifier: {value:?}")));
            }
        }
        Ok(())
    }

    // --- Selectors ---

    #[must_use]
    pub fn swatch_trigger(&self) -> Selector {
        Selector::attr(&self.swatch_trigger_attribute)
    }

    #[must_use]
    pub fn swatch_row(&self) -> Selector {
        Selector::class(&self.swatch_row_class)
    }

    #[must_use]
    pub fn swatch_button(&self) -> Selector {
        Selector::tag(&self.swatch_button_tag)
    }

    #[must_use]
    pub fn role_link(&self) -> Selector {
        Selector::attr(&self.role_link_attribute)
    }

    /// Role links sharing `group`.
    #[must_use]
    pub fn role_link_in_group(&self, group: &str) -> Selector {
        Selector::All(vec![self.role_link(), Selector::attr_eq(&self.role_group_attribute, group)])
    }
}

/// Letters, digits, `-` and `_`, not starting with a digit.
fn is_css_ident(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '-')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
