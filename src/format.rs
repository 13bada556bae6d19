//! Value-to-text formatting for the stepper label.
//!
//! A custom formatter may return plain or styled text; without one the
//! locale-aware [`DecimalFormatter`] is used.

use crate::ui::core::text::StyledText;
use std::fmt;
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

/// The label reserves room for however wide this value renders.
pub const RESERVED_WIDTH_SAMPLE: i64 = 99;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueText {
    Plain(String),
    Styled(StyledText),
}

impl ValueText {
    pub fn width(&self) -> usize {
        match self {
            ValueText::Plain(s) => s.width(),
            ValueText::Styled(t) => t.width(),
        }
    }

    pub fn plain(&self) -> String {
        match self {
            ValueText::Plain(s) => s.clone(),
            ValueText::Styled(t) => t.plain(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0
    }
}

impl Default for ValueText {
    fn default() -> Self {
        ValueText::Plain(String::new())
    }
}

impl From<String> for ValueText {
    fn from(s: String) -> Self {
        ValueText::Plain(s)
    }
}

impl From<&str> for ValueText {
    fn from(s: &str) -> Self {
        ValueText::Plain(s.to_string())
    }
}

impl From<StyledText> for ValueText {
    fn from(t: StyledText) -> Self {
        ValueText::Styled(t)
    }
}

/// User-supplied formatter; `None` renders an empty label.
#[derive(Clone)]
pub struct ValueFormatter(Arc<dyn Fn(i64) -> Option<ValueText> + Send + Sync>);

impl ValueFormatter {
    pub fn new(f: impl Fn(i64) -> Option<ValueText> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn format(&self, value: i64) -> Option<ValueText> {
        (self.0)(value)
    }
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFormatter(..)")
    }
}

/// Formats with `custom` if given, else with the default decimal formatter.
pub fn format_value(custom: Option<&ValueFormatter>, value: i64) -> ValueText {
    match custom {
        Some(f) => f.format(value).unwrap_or_default(),
        None => ValueText::Plain(DecimalFormatter::shared().format(value)),
    }
}

/// Cells the label must reserve, measured on [`RESERVED_WIDTH_SAMPLE`].
pub fn reserved_width(custom: Option<&ValueFormatter>) -> usize {
    format_value(custom, RESERVED_WIDTH_SAMPLE).width()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalFormatter {
    pub grouping_separator: Option<char>,
    pub group_size: usize,
}

impl DecimalFormatter {
    pub const fn with_separator(sep: char) -> Self {
        Self {
            grouping_separator: Some(sep),
            group_size: 3,
        }
    }

    pub const fn ungrouped() -> Self {
        Self {
            grouping_separator: None,
            group_size: 3,
        }
    }

    /// Resolves the numeric locale from `LC_ALL`, `LC_NUMERIC`, then `LANG`.
    pub fn from_env() -> Self {
        let locale = ["LC_ALL", "LC_NUMERIC", "LANG"]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|v| !v.trim().is_empty())
            .unwrap_or_default();
        Self::for_locale(&locale)
    }

    /// `locale` is a POSIX-style tag such as `de_DE.UTF-8` or `fr-CA`.
    pub fn for_locale(locale: &str) -> Self {
        let tag = locale.split(['.', '@']).next().unwrap_or_default();
        let mut parts = tag.split(['_', '-']);
        let lang = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().unwrap_or_default().to_ascii_uppercase();

        if region == "CH" {
            return Self::with_separator('\'');
        }
        match lang.as_str() {
            "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "da" => Self::with_separator('.'),
            "fr" | "ru" | "pl" | "cs" | "sv" | "nb" | "fi" | "uk" => {
                Self::with_separator('\u{202f}')
            }
            _ => Self::with_separator(','),
        }
    }

    pub fn shared() -> &'static DecimalFormatter {
        static SHARED: std::sync::OnceLock<DecimalFormatter> = std::sync::OnceLock::new();
        SHARED.get_or_init(DecimalFormatter::from_env)
    }

    pub fn format(&self, value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if value < 0 {
            out.push('-');
        }

        let Some(sep) = self.grouping_separator.filter(|_| self.group_size > 0) else {
            out.push_str(&digits);
            return out;
        };

        let lead = digits.len() % self.group_size;
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (idx + self.group_size - lead) % self.group_size == 0 {
                out.push(sep);
            }
            out.push(ch);
        }
        out
    }
}

impl Default for DecimalFormatter {
    fn default() -> Self {
        Self::with_separator(',')
    }
}

#[cfg(test)]
#[path = "../tests/unit/format.rs"]
mod tests;
