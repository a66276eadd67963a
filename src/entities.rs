//! HTML character reference decoding.
//!
//! Two interchangeable strategies resolve `&name;` and `&#digits;` tokens:
//!
//! - [`EntityDecoder::ReferenceTable`]: the full HTML5 named reference table
//!   from the `html-escape` crate (requires the `entity-table` feature).
//! - [`EntityDecoder::BuiltIn`]: a compact table of common references plus
//!   code point decoding for numeric references.
//!
//! Unresolvable references become [`PLACEHOLDER`]; decoding never fails.

use std::borrow::Cow;

use crate::patterns::ENTITY;

/// Replacement emitted for references neither strategy can resolve.
pub const PLACEHOLDER: char = '*';

/// Common references understood without the full table.
///
/// Numeric keys are stored without zero padding.
const BUILT_IN: &[(&str, &str)] = &[
    ("amp", "&"),
    ("lt", "<"),
    ("gt", ">"),
    ("quot", "\""),
    ("apos", "'"),
    ("nbsp", " "),
    ("hellip", "\u{2026}"),
    ("mdash", "\u{2014}"),
    ("ndash", "\u{2013}"),
    ("lsquo", "\u{2018}"),
    ("rsquo", "\u{2019}"),
    ("ldquo", "\u{201C}"),
    ("rdquo", "\u{201D}"),
    ("laquo", "\u{00AB}"),
    ("raquo", "\u{00BB}"),
    ("middot", "\u{00B7}"),
    ("bull", "\u{2022}"),
    ("copy", "\u{00A9}"),
    ("reg", "\u{00AE}"),
    ("trade", "\u{2122}"),
    ("deg", "\u{00B0}"),
    ("#34", "\""),
    ("#39", "'"),
];

/// Strategy used to resolve character references.
///
/// Pick one at startup (usually [`EntityDecoder::default`]) and pass it to
/// whatever renders text; there is no process-wide switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityDecoder {
    /// Full HTML5 reference table. Falls back to [`EntityDecoder::BuiltIn`]
    /// when the `entity-table` feature is disabled.
    ReferenceTable,
    /// Compact built-in table plus numeric code point decoding.
    BuiltIn,
}

impl Default for EntityDecoder {
    fn default() -> Self {
        Self::preferred()
    }
}

impl EntityDecoder {
    /// The reference table when compiled in, the built-in table otherwise.
    #[must_use]
    pub const fn preferred() -> Self {
        if cfg!(feature = "entity-table") {
            Self::ReferenceTable
        } else {
            Self::BuiltIn
        }
    }

    /// Replaces every character reference in `text`.
    ///
    /// Text without references is returned borrowed and unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_lede::EntityDecoder;
    ///
    /// let decoder = EntityDecoder::BuiltIn;
    /// assert_eq!(decoder.decode("Fish &amp; Chips&hellip;"), "Fish & Chips\u{2026}");
    /// assert_eq!(decoder.decode("&#0065;&bogus;"), "A*");
    /// ```
    #[must_use]
    pub fn decode<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if !text.contains('&') {
            return Cow::Borrowed(text);
        }

        ENTITY.replace_all(text, |caps: &regex::Captures<'_>| {
            let name = &caps["name"];
            self.resolve(name)
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        })
    }

    /// Resolves a single reference name (without `&` and `;`).
    fn resolve(self, name: &str) -> Option<String> {
        match self {
            Self::ReferenceTable => resolve_reference_table(name),
            Self::BuiltIn => resolve_built_in(name),
        }
    }
}

/// Decodes character references with the default strategy.
///
/// ```
/// use rs_lede::decode_entities;
///
/// assert_eq!(decode_entities("&amp;"), "&");
/// assert_eq!(decode_entities("&#65;"), "A");
/// assert_eq!(decode_entities("&unknownxyz;"), "*");
/// ```
#[must_use]
pub fn decode_entities(text: &str) -> String {
    EntityDecoder::default().decode(text).into_owned()
}

#[cfg(feature = "entity-table")]
fn resolve_reference_table(name: &str) -> Option<String> {
    let token = format!("&{name};");
    let decoded = html_escape::decode_html_entities(&token);

    // Every HTML5 reference expands to at most two code points. Longer output
    // means only a legacy prefix such as `&amp` was consumed.
    if decoded == token || decoded.chars().count() > 2 {
        return resolve_code_point(name);
    }
    Some(decoded.into_owned())
}

#[cfg(not(feature = "entity-table"))]
fn resolve_reference_table(name: &str) -> Option<String> {
    resolve_built_in(name)
}

fn resolve_built_in(name: &str) -> Option<String> {
    let normalized = normalize_numeric(name);
    BUILT_IN
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, value)| (*value).to_string())
        .or_else(|| resolve_code_point(&normalized))
}

/// Strips zero padding from decimal references: `#039` becomes `#39`.
fn normalize_numeric(name: &str) -> Cow<'_, str> {
    match name.strip_prefix('#') {
        Some(digits) if digits.starts_with('0') && digits.bytes().all(|b| b.is_ascii_digit()) => {
            let trimmed = digits.trim_start_matches('0');
            if trimmed.is_empty() {
                Cow::Borrowed("#0")
            } else {
                Cow::Owned(format!("#{trimmed}"))
            }
        }
        _ => Cow::Borrowed(name),
    }
}

/// Interprets `#digits` or `#xhex` as a Unicode scalar value.
fn resolve_code_point(name: &str) -> Option<String> {
    let number = name.strip_prefix('#')?;
    let code = match number.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => number.parse::<u32>().ok()?,
    };
    if code == 0 {
        return None;
    }
    char::from_u32(code).map(String::from)
}
