//! Grammar symbol configuration
//!
//! All symbols are strings, not characters. The lazy opener is ordinarily a
//! prefix of the strict opener (`:` and `:[`); on a tie at the same offset the
//! strict opener wins. Configurations in which symbols collide so that
//! scanning becomes ambiguous (for example a lazy opener equal to the listing
//! delimiter) are rejected by [`GrammarConfig::validate`] where they can be
//! detected and are otherwise undefined behavior for the caller to avoid.

use super::constants::{markers, syntax};
use super::error::{ConfigError, ConfigResult};
use crate::logging::codes;
use crate::{log_debug, log_error, log_success};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Every symbol of the grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrammarConfig {
    pub listing_delimiter: String,
    pub range_delimiter: String,
    pub level_opener: String,
    pub level_closer: String,
    pub lazy_opener: String,
    pub level_delimiter: String,
    pub index_marker: String,
    pub random_marker: String,
    pub all_marker: String,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            listing_delimiter: syntax::LISTING_DELIMITER.to_string(),
            range_delimiter: syntax::RANGE_DELIMITER.to_string(),
            level_opener: syntax::LEVEL_OPENER.to_string(),
            level_closer: syntax::LEVEL_CLOSER.to_string(),
            lazy_opener: syntax::LAZY_OPENER.to_string(),
            level_delimiter: syntax::LEVEL_DELIMITER.to_string(),
            index_marker: markers::INDEX_MARKER.to_string(),
            random_marker: markers::RANDOM_MARKER.to_string(),
            all_marker: markers::ALL_MARKER.to_string(),
        }
    }
}

impl GrammarConfig {
    /// Parse and validate a TOML document; absent keys keep their defaults
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        log_debug!("Loading grammar configuration", "path" => path.display());

        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match Self::from_toml_str(&source) {
            Ok(config) => {
                log_success!(codes::success::CONFIG_LOADED, "Grammar configuration loaded",
                    "path" => path.display()
                );
                Ok(config)
            }
            Err(error) => {
                log_error!(error.error_code(), "Grammar configuration rejected",
                    "path" => path.display(),
                    "error" => &error
                );
                Err(error)
            }
        }
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Reject empty symbols and collisions that break scanning
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, symbol) in self.symbols() {
            if symbol.is_empty() {
                return Err(ConfigError::invalid_symbol(name, "must not be empty"));
            }
        }

        if self.lazy_opener == self.listing_delimiter {
            return Err(ConfigError::invalid_symbol(
                "lazy_opener",
                "must differ from the listing delimiter",
            ));
        }

        if self.level_closer == self.level_opener || self.level_closer == self.lazy_opener {
            return Err(ConfigError::invalid_symbol(
                "level_closer",
                "must differ from both level openers",
            ));
        }

        let markers = [
            ("index_marker", &self.index_marker),
            ("random_marker", &self.random_marker),
            ("all_marker", &self.all_marker),
        ];
        for (i, (name, marker)) in markers.iter().enumerate() {
            if markers[..i].iter().any(|(_, other)| other == marker) {
                return Err(ConfigError::invalid_symbol(
                    *name,
                    "must differ from the other markers",
                ));
            }
        }

        Ok(())
    }

    fn symbols(&self) -> [(&'static str, &str); 9] {
        [
            ("listing_delimiter", self.listing_delimiter.as_str()),
            ("range_delimiter", self.range_delimiter.as_str()),
            ("level_opener", self.level_opener.as_str()),
            ("level_closer", self.level_closer.as_str()),
            ("lazy_opener", self.lazy_opener.as_str()),
            ("level_delimiter", self.level_delimiter.as_str()),
            ("index_marker", self.index_marker.as_str()),
            ("random_marker", self.random_marker.as_str()),
            ("all_marker", self.all_marker.as_str()),
        ]
    }
}
