//! Entity-aware text expansion.
//!
//! The underlying XML reader hands us character data and attribute values
//! with entity references still in raw form (`&n;`, `&amp;`, `&#x65E5;`).
//! This module substitutes them in one pass: JMdict entities through the
//! table in [`super::entities`], the five XML predefined entities, and
//! numeric character references. An entity name not covered by any of
//! those is a fatal decode error in either mode.

use std::borrow::Cow;

use super::entities;
use super::error::{JmdictError, Result};

/// How tolerant the decode should be of well-formedness deviations.
///
/// Distributed JMdict files occasionally contain stray unescaped `&`
/// characters and mismatched end tags; lenient mode absorbs those instead
/// of failing. Undefined entity references are fatal in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Leniency {
    Strict,
    Lenient,
}

enum Resolved {
    Text(&'static str),
    Char(char),
    Undefined,
    /// Syntactically a reference but not decodable, e.g. `&#xZZ;`.
    Malformed,
}

/// Expand every entity reference in `raw`.
///
/// `position` is the byte offset of the surrounding event, used only for
/// error reporting. Borrows the input unchanged when it contains no `&`.
pub(crate) fn expand(raw: &str, leniency: Leniency, position: u64) -> Result<Cow<'_, str>> {
    let Some(first) = raw.find('&') else {
        return Ok(Cow::Borrowed(raw));
    };

    let mut out = String::with_capacity(raw.len() + 16);
    out.push_str(&raw[..first]);
    let mut rest = &raw[first..];

    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];

        let Some(end) = reference_end(rest) else {
            // A bare '&' that does not open a reference at all.
            match leniency {
                Leniency::Lenient => {
                    out.push('&');
                    rest = &rest[1..];
                    continue;
                }
                Leniency::Strict => {
                    return Err(JmdictError::InvalidFormat(format!(
                        "unescaped '&' near byte {position}"
                    )));
                }
            }
        };

        let name = &rest[1..end];
        match resolve_reference(name) {
            Resolved::Text(expansion) => out.push_str(expansion),
            Resolved::Char(c) => out.push(c),
            Resolved::Undefined => {
                return Err(JmdictError::UndefinedEntity {
                    name: name.to_string(),
                    position,
                });
            }
            Resolved::Malformed => match leniency {
                Leniency::Lenient => {
                    out.push('&');
                    rest = &rest[1..];
                    continue;
                }
                Leniency::Strict => {
                    return Err(JmdictError::InvalidFormat(format!(
                        "malformed character reference &{name}; near byte {position}"
                    )));
                }
            },
        }
        rest = &rest[end + 1..];
    }

    out.push_str(rest);
    Ok(Cow::Owned(out))
}

/// If `rest` (which starts with `&`) opens a syntactically plausible
/// reference, return the index of its terminating `;`.
fn reference_end(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    for (i, &b) in bytes.iter().enumerate().skip(1) {
        match b {
            b';' => return if i > 1 { Some(i) } else { None },
            b'#' if i == 1 => {}
            b if b.is_ascii_alphanumeric() => {}
            b'-' | b'.' | b'_' | b':' => {}
            _ => return None,
        }
    }
    None
}

fn resolve_reference(name: &str) -> Resolved {
    if let Some(digits) = name.strip_prefix('#') {
        return resolve_char_reference(digits);
    }
    // XML predefined entities take priority; note "quot" here is distinct
    // from the JMdict "quote" entity in the table.
    match name {
        "amp" => Resolved::Char('&'),
        "lt" => Resolved::Char('<'),
        "gt" => Resolved::Char('>'),
        "apos" => Resolved::Char('\''),
        "quot" => Resolved::Char('"'),
        _ => match entities::resolve(name) {
            Some(expansion) => Resolved::Text(expansion),
            None => Resolved::Undefined,
        },
    }
}

fn resolve_char_reference(digits: &str) -> Resolved {
    let parsed = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => digits.parse::<u32>(),
    };
    match parsed.ok().and_then(char::from_u32) {
        Some(c) => Resolved::Char(c),
        None => Resolved::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        let expanded = expand("hello world", Leniency::Strict, 0).unwrap();
        assert!(matches!(expanded, Cow::Borrowed(_)));
        assert_eq!(expanded, "hello world");
    }

    #[test]
    fn table_entities_expand() {
        assert_eq!(
            expand("&n;", Leniency::Strict, 0).unwrap(),
            "noun common"
        );
        assert_eq!(
            expand("a &comp; b", Leniency::Strict, 0).unwrap(),
            "a computer terminology b"
        );
        assert_eq!(expand("&quote;", Leniency::Strict, 0).unwrap(), "\"");
    }

    #[test]
    fn predefined_and_char_references_expand() {
        assert_eq!(
            expand("fish &amp; chips &lt;raw&gt;", Leniency::Strict, 0).unwrap(),
            "fish & chips <raw>"
        );
        assert_eq!(
            expand("&#x65E5;&#26412;", Leniency::Strict, 0).unwrap(),
            "\u{65E5}\u{672C}"
        );
    }

    #[test]
    fn undefined_entity_is_fatal_in_both_modes() {
        for leniency in [Leniency::Strict, Leniency::Lenient] {
            let err = expand("&bogus;", leniency, 42).unwrap_err();
            match err {
                JmdictError::UndefinedEntity { name, position } => {
                    assert_eq!(name, "bogus");
                    assert_eq!(position, 42);
                }
                other => panic!("expected UndefinedEntity, got {other:?}"),
            }
        }
    }

    #[test]
    fn stray_ampersand_depends_on_leniency() {
        assert_eq!(
            expand("fish & chips", Leniency::Lenient, 0).unwrap(),
            "fish & chips"
        );
        assert!(expand("fish & chips", Leniency::Strict, 0).is_err());

        // Trailing '&' with no terminator at all.
        assert_eq!(expand("a &", Leniency::Lenient, 0).unwrap(), "a &");
        assert!(expand("a &", Leniency::Strict, 0).is_err());
    }

    #[test]
    fn malformed_char_reference_depends_on_leniency() {
        assert_eq!(
            expand("&#xZZ;", Leniency::Lenient, 0).unwrap(),
            "&#xZZ;"
        );
        assert!(expand("&#xZZ;", Leniency::Strict, 0).is_err());
        // Surrogate code point is not a valid char.
        assert!(expand("&#xD800;", Leniency::Strict, 0).is_err());
    }

    #[test]
    fn empty_reference_is_treated_as_stray_ampersand() {
        assert_eq!(expand("&;", Leniency::Lenient, 0).unwrap(), "&;");
        assert!(expand("&;", Leniency::Strict, 0).is_err());
    }
}
