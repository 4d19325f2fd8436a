// SPDX-License-Identifier: MPL-2.0
//! The closed set of languages the page is translated into.

use std::fmt;
use std::str::FromStr;
use unic_langid::{langid, LanguageIdentifier};

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    /// Supported languages in toggle order.
    pub const ALL: [Language; 2] = [Language::Ru, Language::En];

    /// Short code used for resource file names and configuration values.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    /// Locale handed to Fluent for plural and number rules.
    #[must_use]
    pub fn langid(self) -> LanguageIdentifier {
        match self {
            Language::Ru => langid!("ru"),
            Language::En => langid!("en"),
        }
    }

    /// The language following this one in [`Language::ALL`], wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let position = Self::ALL
            .iter()
            .position(|language| *language == self)
            .unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a code does not name a supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLanguage(pub String);

impl fmt::Display for UnsupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language: {}", self.0)
    }
}

impl std::error::Error for UnsupportedLanguage {}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    /// Accepts any BCP-47 tag whose primary subtag is supported, so `"EN"`
    /// and `"en-US"` both resolve to English.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let tag = code
            .trim()
            .parse::<LanguageIdentifier>()
            .map_err(|_| UnsupportedLanguage(code.to_string()))?;
        Self::ALL
            .into_iter()
            .find(|language| language.code() == tag.language.as_str())
            .ok_or_else(|| UnsupportedLanguage(code.to_string()))
    }
}
