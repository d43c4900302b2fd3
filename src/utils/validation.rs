use std::ffi::OsStr;

use crate::core::parser::{parse_uuid, ParseError};
use crate::domain::model::Uuid;
use crate::utils::error::{Result, Uuid5Error};

/// Parses `value` as a namespace UUID, reporting failures as a validation error.
pub fn validate_namespace(value: &str) -> Result<Uuid> {
    parse_uuid(value).map_err(|source| Uuid5Error::ValidationError {
        value: value.to_string(),
        source,
    })
}

/// Rejects a raw namespace argument that is not valid UTF-8.
pub fn validate_namespace_encoding(value: &OsStr) -> Result<&str> {
    value.to_str().ok_or_else(|| Uuid5Error::ValidationError {
        value: value.to_string_lossy().into_owned(),
        source: ParseError::InvalidUtf8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_namespace() {
        assert!(validate_namespace("6ba7b810-9dad-11d1-80b4-00c04fd430c8").is_ok());

        match validate_namespace("not-a-uuid") {
            Err(Uuid5Error::ValidationError { value, source }) => {
                assert_eq!(value, "not-a-uuid");
                assert_eq!(source, ParseError::InvalidLength { len: 10 });
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_namespace_encoding() {
        let ns = OsStr::new("6ba7b810-9dad-11d1-80b4-00c04fd430c8");
        assert_eq!(
            validate_namespace_encoding(ns).unwrap(),
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_namespace_encoding_rejects_invalid_utf8() {
        use std::os::unix::ffi::OsStrExt;

        let err = validate_namespace_encoding(OsStr::from_bytes(&[0x66, 0x80, 0x6f])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.user_friendly_message(),
            "Invalid namespace UUID: 'f\u{fffd}o': not valid UTF-8"
        );
    }
}
