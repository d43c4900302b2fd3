use thiserror::Error;

use crate::domain::model::Uuid;

/// Byte offsets of the group separators in the hyphenated form.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];
const HYPHENATED_LEN: usize = 36;
const SIMPLE_LEN: usize = 32;
const URN_PREFIX: &str = "urn:uuid:";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid length {len}: expected 32 hex digits, optionally hyphenated as 8-4-4-4-12")]
    InvalidLength { len: usize },

    #[error("invalid character {found:?} at position {index}: expected a hex digit")]
    InvalidCharacter { found: char, index: usize },

    #[error("invalid group separator at position {index}: expected 8-4-4-4-12 layout")]
    InvalidGroup { index: usize },

    #[error("not valid UTF-8")]
    InvalidUtf8,
}

/// Parses a UUID from text.
///
/// Accepted forms, hex digits in either case:
/// - hyphenated `6ba7b810-9dad-11d1-80b4-00c04fd430c8`
/// - simple `6ba7b8109dad11d180b400c04fd430c8`
/// - braced `{6ba7b810-9dad-11d1-80b4-00c04fd430c8}`
/// - URN `urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8`
///
/// Whitespace is not trimmed. Error positions are byte offsets into `input`.
pub fn parse_uuid(input: &str) -> Result<Uuid, ParseError> {
    let (body, offset, wrapped) = strip_wrapper(input);
    let bytes = body.as_bytes();

    let mut digits = [0u8; SIMPLE_LEN];
    match bytes.len() {
        SIMPLE_LEN if !wrapped => {
            for (i, &b) in bytes.iter().enumerate() {
                if b == b'-' {
                    return Err(ParseError::InvalidGroup { index: offset + i });
                }
                if !b.is_ascii_hexdigit() {
                    return Err(invalid_character(input, offset + i));
                }
            }
            digits.copy_from_slice(bytes);
        }
        HYPHENATED_LEN => {
            let mut n = 0;
            for (i, &b) in bytes.iter().enumerate() {
                let separator = HYPHEN_POSITIONS.contains(&i);
                if separator != (b == b'-') {
                    return Err(ParseError::InvalidGroup { index: offset + i });
                }
                if separator {
                    continue;
                }
                if !b.is_ascii_hexdigit() {
                    return Err(invalid_character(input, offset + i));
                }
                digits[n] = b;
                n += 1;
            }
        }
        _ => return Err(ParseError::InvalidLength { len: input.len() }),
    }

    let mut out = [0u8; 16];
    hex::decode_to_slice(digits, &mut out).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            ParseError::InvalidCharacter { found: c, index }
        }
        _ => ParseError::InvalidLength { len: input.len() },
    })?;
    Ok(Uuid::from_bytes(out))
}

/// Returns the body, its byte offset in `input`, and whether a wrapper was removed.
fn strip_wrapper(input: &str) -> (&str, usize, bool) {
    if let Some(inner) = input
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    {
        return (inner, 1, true);
    }
    match input.get(..URN_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(URN_PREFIX) => {
            (&input[URN_PREFIX.len()..], URN_PREFIX.len(), true)
        }
        _ => (input, 0, false),
    }
}

// Every byte before `index` is ASCII, so `index` is always a char boundary.
fn invalid_character(input: &str, index: usize) -> ParseError {
    let found = input
        .get(index..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    ParseError::InvalidCharacter { found, index }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::namespace;

    #[test]
    fn test_parse_hyphenated_any_case() {
        let lower = parse_uuid("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap();
        let upper = parse_uuid("6BA7B810-9DAD-11D1-80B4-00C04FD430C8").unwrap();
        assert_eq!(lower, namespace::DNS);
        assert_eq!(upper, namespace::DNS);
    }

    #[test]
    fn test_parse_alternate_forms() {
        assert_eq!(parse_uuid("6ba7b8109dad11d180b400c04fd430c8").unwrap(), namespace::DNS);
        assert_eq!(parse_uuid("{6ba7b810-9dad-11d1-80b4-00c04fd430c8}").unwrap(), namespace::DNS);
        assert_eq!(
            parse_uuid("urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap(),
            namespace::DNS
        );
        assert_eq!(
            parse_uuid("URN:UUID:6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap(),
            namespace::DNS
        );
    }

    #[test]
    fn test_parse_keeps_field_byte_order() {
        let uuid = parse_uuid("00112233-4455-6677-8899-aabbccddeeff").unwrap();
        assert_eq!(
            uuid.as_bytes(),
            &[
                0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
                0xee, 0xff
            ]
        );
    }

    #[test]
    fn test_reject_wrong_length() {
        assert_eq!(parse_uuid("not-a-uuid"), Err(ParseError::InvalidLength { len: 10 }));
        assert_eq!(parse_uuid(""), Err(ParseError::InvalidLength { len: 0 }));
        assert!(matches!(
            parse_uuid(" 6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            Err(ParseError::InvalidLength { len: 37 })
        ));
        assert!(matches!(
            parse_uuid("{6ba7b8109dad11d180b400c04fd430c8}"),
            Err(ParseError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_reject_misplaced_hyphens() {
        assert_eq!(
            parse_uuid("6ba7b81-09dad-11d1-80b4-00c04fd430c8"),
            Err(ParseError::InvalidGroup { index: 7 })
        );
        assert_eq!(
            parse_uuid("6ba7b810-9dad-11d1-80b400c04fd430c8-"),
            Err(ParseError::InvalidGroup { index: 23 })
        );
        assert_eq!(
            parse_uuid("6ba7b810-9dad11d180b400c04fd430c"),
            Err(ParseError::InvalidGroup { index: 8 })
        );
    }

    #[test]
    fn test_reject_invalid_hex_digit() {
        assert_eq!(
            parse_uuid("6ba7b810-9dad-11d1-80b4-00c04fd430cg"),
            Err(ParseError::InvalidCharacter { found: 'g', index: 35 })
        );
        assert_eq!(
            parse_uuid("{6ba7b810-9dad-11d1-80b4-00c04fd430cz}"),
            Err(ParseError::InvalidCharacter { found: 'z', index: 36 })
        );
        // 'é' is two bytes, so the total is still 36
        assert_eq!(
            parse_uuid("é6a7b81-9dad-11d1-80b4-00c04fd430c8"),
            Err(ParseError::InvalidCharacter { found: 'é', index: 0 })
        );
    }
}
