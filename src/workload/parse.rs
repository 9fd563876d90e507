//! Reference-string parsing.

use std::fs;
use std::path::Path;

use crate::common::{Error, PageId, ParseError, Result};

/// Parse page numbers separated by commas and/or whitespace.
///
/// Empty tokens (`"1,,2"`, trailing commas) are skipped. An empty input
/// yields an empty sequence; the driver is what rejects that.
///
/// # Errors
/// - `Error::Parse` on the first token that isn't plain ASCII digits
///   (no sign) or doesn't fit in a `u32`
///
/// # Example
/// ```
/// use pagesim::{parse_references, PageId};
///
/// let refs = parse_references("1, 2 3,").unwrap();
/// assert_eq!(refs, PageId::sequence(&[1, 2, 3]));
/// ```
pub fn parse_references(text: &str) -> Result<Vec<PageId>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            let invalid = || {
                Error::from(ParseError::InvalidToken {
                    position: i + 1,
                    token: token.to_string(),
                })
            };
            // `u32::from_str` also takes a leading '+'
            if !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            token.parse::<u32>().map(PageId::new).map_err(|_| invalid())
        })
        .collect()
}

/// Read a file and parse its contents with [`parse_references`].
///
/// # Errors
/// - `Error::Io` if the file can't be read
/// - `Error::Parse` if its contents are malformed
pub fn read_references(path: impl AsRef<Path>) -> Result<Vec<PageId>> {
    let text = fs::read_to_string(path)?;
    parse_references(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_string() {
        let refs = parse_references(crate::common::config::DEFAULT_REFERENCE_STRING).unwrap();
        assert_eq!(refs.len(), 12);
        assert_eq!(refs[6], PageId::new(5));
    }

    #[test]
    fn test_parse_mixed_separators() {
        let refs = parse_references(" 7,0 ,1\n2\t0, ").unwrap();
        assert_eq!(refs, PageId::sequence(&[7, 0, 1, 2, 0]));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_references("").unwrap().is_empty());
        assert!(parse_references(" , ,").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_negative() {
        let err = parse_references("1,-2,3").unwrap_err();
        match err {
            Error::Parse(ParseError::InvalidToken { position, token }) => {
                assert_eq!(position, 2);
                assert_eq!(token, "-2");
            }
            other => panic!("Expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_references("1,two"),
            Err(Error::Parse(ParseError::InvalidToken { position: 2, .. }))
        ));
    }

    #[test]
    fn test_parse_rejects_plus_sign() {
        match parse_references("1,+3").unwrap_err() {
            Error::Parse(ParseError::InvalidToken { position, token }) => {
                assert_eq!(position, 2);
                assert_eq!(token, "+3");
            }
            other => panic!("Expected parse error, got {other:?}"),
        }
        assert!(parse_references("+").is_err());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(matches!(
            parse_references("4294967296"),
            Err(Error::Parse(ParseError::InvalidToken { position: 1, .. }))
        ));
        assert_eq!(
            parse_references("4294967295").unwrap(),
            PageId::sequence(&[u32::MAX])
        );
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_references("/nonexistent/refs.txt"),
            Err(Error::Io(_))
        ));
    }
}
