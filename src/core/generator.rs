use sha1::{Digest, Sha1};

use crate::domain::model::Uuid;

const VERSION_5: u8 = 0x50;
const VARIANT_RFC4122: u8 = 0x80;

/// Derives a name-based (version 5, SHA-1) UUID per RFC 4122 §4.3.
///
/// The SHA-1 digest of `namespace || name` is truncated to 16 bytes, then the
/// version nibble of byte 6 and the variant bits of byte 8 are overwritten.
/// A namespace is always hashed; pass [`Uuid::NIL`] for the all-zero one.
pub fn generate(namespace: &Uuid, name: &[u8]) -> Uuid {
    let mut hasher = Sha1::new();
    hasher.update(namespace.as_bytes());
    hasher.update(name);
    let digest = hasher.finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    bytes[6] = (bytes[6] & 0x0f) | VERSION_5;
    bytes[8] = (bytes[8] & 0x3f) | VARIANT_RFC4122;

    Uuid::from_bytes(bytes)
}

/// Same as [`generate`], hashing the UTF-8 encoding of `name`.
pub fn generate_from_str(namespace: &Uuid, name: &str) -> Uuid {
    generate(namespace, name.as_bytes())
}
