//! Cipher constants for both container formats
//!
//! These keys are reverse-engineered interoperability constants embedded in
//! the respective applications, not runtime secrets. They are collected here
//! as named constants so the cryptographic contract stays auditable and easy
//! to swap in tests.

/// Block size shared by both container formats (AES)
pub const CIPHER_BLOCK_SIZE: usize = 16;

/// ForeFlight key material extracted from the application binary
pub const FOREFLIGHT_KEY_MATERIAL: [u8; 8] = [0x81, 0xe0, 0x6e, 0x41, 0xa9, 0x3f, 0x38, 0x48];

/// Garmin Pilot package key: 32 zero bytes (AES-256)
pub const GARMIN_KEY: [u8; 32] = [0u8; 32];

/// Garmin Pilot package IV: 16 zero bytes, fixed for every package
pub const GARMIN_IV: [u8; 16] = [0u8; 16];

/// The AES-128 key for `.fmd` files
///
/// ForeFlight imports the lowercase hex spelling of the 8-byte key material
/// as the raw key, so the effective key is 16 ASCII bytes.
pub fn foreflight_key() -> [u8; 16] {
    let spelled = hex::encode(FOREFLIGHT_KEY_MATERIAL);
    let mut key = [0u8; 16];
    key.copy_from_slice(spelled.as_bytes());
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreflight_key_is_hex_spelling() {
        assert_eq!(&foreflight_key(), b"81e06e41a93f3848");
    }

    #[test]
    fn test_garmin_constants_are_zero() {
        assert!(GARMIN_KEY.iter().all(|&b| b == 0));
        assert!(GARMIN_IV.iter().all(|&b| b == 0));
    }
}
