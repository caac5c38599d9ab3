// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::ConfigError;

/// The name of the termcal application.
pub const APP_NAME: &str = "termcal";

/// Timezone used when none has been resolved.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Product identifier written to `PRODID` by default.
pub const DEFAULT_PRODUCT_ID: &str = "-//termcal//Course Schedule//EN";

/// Configuration for compiling a schedule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// IANA timezone identifier every emitted time is tagged with.
    ///
    /// When unset the compiler uses [`DEFAULT_TIMEZONE`]; callers are
    /// expected to fill it from the user's environment first.
    pub timezone: Option<String>,

    /// Value of the calendar's `PRODID` property.
    pub product_id: String,

    /// Fold content lines longer than 75 octets.
    pub fold_lines: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: None,
            product_id: DEFAULT_PRODUCT_ID.to_owned(),
            fold_lines: true,
        }
    }
}

impl Config {
    /// Normalize and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the timezone cannot be used as a `TZID` parameter
    /// value, or if the product identifier is blank.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        if let Some(tz) = &mut self.timezone {
            let trimmed = tz.trim();
            if !is_valid_tz_id(trimmed) {
                return Err(ConfigError::InvalidTimezone(tz.clone()));
            }
            *tz = trimmed.to_owned();
        }

        let product_id = self.product_id.trim();
        if product_id.is_empty() {
            return Err(ConfigError::EmptyProductId);
        }
        self.product_id = product_id.to_owned();

        Ok(())
    }

    /// The timezone identifier in effect.
    #[must_use]
    pub fn timezone(&self) -> &str {
        self.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE)
    }
}

/// A `TZID` parameter value must not need quoting or escaping.
fn is_valid_tz_id(tz: &str) -> bool {
    !tz.is_empty()
        && !tz
            .chars()
            .any(|c| c.is_control() || matches!(c, ';' | ':' | ',' | '"'))
}
