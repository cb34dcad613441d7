//! Locale and presentation configuration
//!
//! Language and technical level are a plain config value threaded through
//! the builder, never ambient mutable state, so the pipeline stays pure and
//! testable in isolation.

use serde::{Deserialize, Serialize};

/// Supported output locales
///
/// Spanish is the product default; unsupported tags fall back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    /// Negotiate a locale from a language tag ("en", "en-US", "es-AR", ...)
    ///
    /// Prefix match on the primary subtag; anything unsupported falls back
    /// to Spanish.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_lowercase();
        match primary.as_str() {
            "en" => Locale::En,
            "es" => Locale::Es,
            _ => Locale::Es,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }
}

/// How much technical detail the reader wants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnicalLevel {
    Basic,
    #[default]
    Intermediate,
    Advanced,
}

impl TechnicalLevel {
    /// Whether problem descriptions should carry the raw technical detail
    /// line from the health-check source
    pub fn wants_technical_detail(&self) -> bool {
        !matches!(self, TechnicalLevel::Basic)
    }
}

/// Configuration for one transformation pass
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TriageConfig {
    pub locale: Locale,
    pub technical_level: TechnicalLevel,
}
