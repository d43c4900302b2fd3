//! Well-known namespace UUIDs.
//!
//! The four RFC 4122 Appendix C namespaces, plus the namespace used by the
//! Peppol ViDA pilot to derive transaction identifiers.

use super::model::Uuid;

/// `6ba7b810-9dad-11d1-80b4-00c04fd430c8`: names are fully-qualified domain names.
pub const DNS: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// `6ba7b811-9dad-11d1-80b4-00c04fd430c8`: names are URLs.
pub const URL: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// `6ba7b812-9dad-11d1-80b4-00c04fd430c8`: names are ISO OIDs.
pub const OID: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// `6ba7b814-9dad-11d1-80b4-00c04fd430c8`: names are X.500 DNs (DER or text).
pub const X500: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// `e0bc4ac8-b025-46e5-a76d-0c893fc3027e`, a v4 UUID from the Peppol ViDA pilot architecture.
pub const PEPPOL_VIDA: Uuid = Uuid::from_bytes([
    0xe0, 0xbc, 0x4a, 0xc8, 0xb0, 0x25, 0x46, 0xe5, 0xa7, 0x6d, 0x0c, 0x89, 0x3f, 0xc3, 0x02, 0x7e,
]);
