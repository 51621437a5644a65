//! Garmin Pilot `.gplts` payload encryption
//!
//! The payload is AES-256-CBC with a fixed all-zero key and IV. Before
//! encryption the format XORs the first 16 plaintext bytes with the IV; with
//! a zero IV this is the identity, but it is part of the reverse-engineered
//! contract and is reproduced exactly.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::crypto::keys::{CIPHER_BLOCK_SIZE, GARMIN_IV, GARMIN_KEY};
use crate::error::{ConvertError, ConvertResult};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// XOR the first min(16, len) bytes with the package IV
fn mix_with_iv(data: &mut [u8]) {
    for (byte, iv_byte) in data.iter_mut().zip(GARMIN_IV).take(CIPHER_BLOCK_SIZE) {
        *byte ^= iv_byte;
    }
}

/// Encrypt a serialized container into the `.gplts` payload
pub fn encrypt(plaintext: &[u8]) -> ConvertResult<Vec<u8>> {
    let mut mixed = plaintext.to_vec();
    mix_with_iv(&mut mixed);

    let cipher = Aes256CbcEnc::new_from_slices(&GARMIN_KEY, &GARMIN_IV)
        .map_err(|e| ConvertError::Encryption(format!("Failed to create cipher: {}", e)))?;

    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(&mixed))
}

/// Decrypt a `.gplts` payload back to the serialized container
///
/// The inverse of [`encrypt`], used to verify converter output.
pub fn decrypt(ciphertext: &[u8]) -> ConvertResult<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % CIPHER_BLOCK_SIZE != 0 {
        return Err(ConvertError::Decryption(format!(
            "Payload length {} is not a multiple of the block size",
            ciphertext.len()
        )));
    }

    let cipher = Aes256CbcDec::new_from_slices(&GARMIN_KEY, &GARMIN_IV)
        .map_err(|e| ConvertError::Decryption(format!("Failed to create cipher: {}", e)))?;

    let mut plaintext = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| {
            ConvertError::Decryption("Decryption failed: invalid padding or corrupted data".into())
        })?;

    // The XOR mix is its own inverse
    mix_with_iv(&mut plaintext);
    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let plaintext = br#"{"dataModelVersion": 1}"#;
        let ciphertext = encrypt(plaintext).unwrap();
        assert_eq!(ciphertext.len() % 16, 0);
        assert_eq!(decrypt(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        // Fixed key and IV: same plaintext, same ciphertext, every time.
        let plaintext = b"determinism check";
        assert_eq!(encrypt(plaintext).unwrap(), encrypt(plaintext).unwrap());
    }

    #[test]
    fn test_mix_with_iv_only_touches_leading_block() {
        let original: Vec<u8> = (0u8..40).collect();
        let mut mixed = original.clone();
        mix_with_iv(&mut mixed);
        // Zero IV: identity, but the contract is first-16-bytes only either way
        assert_eq!(mixed, original);
    }

    #[test]
    fn test_mix_short_input() {
        let mut data = vec![1u8, 2, 3];
        mix_with_iv(&mut data);
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_decrypt_rejects_misaligned_payload() {
        assert!(decrypt(&[0u8; 17]).is_err());
        assert!(decrypt(&[]).is_err());
    }
}
