use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};

/// Locale-aware case mapping over whole text spans
///
/// Implementations may change the length of the text ("ß" uppercases to
/// "SS"). Every transform in this crate drives code-point boundaries itself
/// and hands only the spans to the mapper.
pub trait CaseMapper {
    /// Uppercase `text`
    fn uppercase(&self, text: &str) -> String;

    /// Lowercase `text`
    fn lowercase(&self, text: &str) -> String;
}

impl<M: CaseMapper + ?Sized> CaseMapper for &M {
    fn uppercase(&self, text: &str) -> String {
        (**self).uppercase(text)
    }

    fn lowercase(&self, text: &str) -> String {
        (**self).lowercase(text)
    }
}

/// A language tag such as `en`, `tr`, `pt-BR` or `sr-Latn-RS`
///
/// Case mapping follows the Unicode default algorithm with the Turkic
/// dotted and dotless i tailoring for Turkish and Azerbaijani.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl Locale {
    /// Locale-neutral mapping
    pub fn root() -> Self {
        Self {
            language: String::new(),
            script: None,
            region: None,
        }
    }

    /// English
    pub fn english() -> Self {
        Self {
            language: "en".to_string(),
            script: None,
            region: None,
        }
    }

    /// Parse a tag; `_` is accepted in place of `-`
    ///
    /// The empty tag and `und` both mean [`Locale::root`].
    pub fn parse(tag: &str) -> Result<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Ok(Self::root());
        }

        let invalid = || CoreError::InvalidLocale(tag.to_string());
        let mut subtags = tag.split(['-', '_']);
        let language = subtags.next().ok_or_else(invalid)?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }
        let language = language.to_ascii_lowercase();

        let mut script = None;
        let mut region = None;
        for subtag in subtags {
            let is_alpha = subtag.chars().all(|c| c.is_ascii_alphabetic());
            let is_digit = subtag.chars().all(|c| c.is_ascii_digit());
            match subtag.len() {
                4 if is_alpha && script.is_none() && region.is_none() => {
                    let mut normalized = subtag.to_ascii_lowercase();
                    normalized[..1].make_ascii_uppercase();
                    script = Some(normalized);
                }
                2 if is_alpha && region.is_none() => {
                    region = Some(subtag.to_ascii_uppercase());
                }
                3 if is_digit && region.is_none() => {
                    region = Some(subtag.to_string());
                }
                // Variants and extensions do not affect case mapping
                5..=8 if region.is_some() || script.is_some() => {}
                _ => return Err(invalid()),
            }
        }

        if language == "und" {
            return Ok(Self {
                language: String::new(),
                script,
                region,
            });
        }
        Ok(Self {
            language,
            script,
            region,
        })
    }

    /// Primary language subtag, lowercase; empty for the root locale
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Script subtag in title case, if any
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Region subtag, if any
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Whether this is the locale-neutral root
    pub fn is_root(&self) -> bool {
        self.language.is_empty()
    }

    fn is_turkic(&self) -> bool {
        matches!(self.language.as_str(), "tr" | "az")
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::root()
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(tag: &str) -> Result<Self> {
        Self::parse(tag)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("und")?;
        } else {
            f.write_str(&self.language)?;
        }
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}

impl CaseMapper for Locale {
    fn uppercase(&self, text: &str) -> String {
        if !self.is_turkic() || !text.contains('i') {
            return text.to_uppercase();
        }
        let mut upper = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                'i' => upper.push('\u{0130}'),
                _ => upper.extend(ch.to_uppercase()),
            }
        }
        upper
    }

    fn lowercase(&self, text: &str) -> String {
        if !self.is_turkic() || !text.contains(['I', '\u{0130}']) {
            return text.to_lowercase();
        }
        let mut lower = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\u{0130}' => lower.push('i'),
                // I followed by a combining dot above is a decomposed dotted I
                'I' if chars.peek() == Some(&'\u{0307}') => {
                    chars.next();
                    lower.push('i');
                }
                'I' => lower.push('\u{0131}'),
                _ => lower.extend(ch.to_lowercase()),
            }
        }
        lower
    }
}
