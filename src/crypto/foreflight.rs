//! ForeFlight `.fmd` container encryption
//!
//! A `.fmd` file is a 16-byte IV followed by AES-128-CBC ciphertext with
//! PKCS#7 padding. The plaintext is a UTF-8 JSON checklist document.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::crypto::keys::{foreflight_key, CIPHER_BLOCK_SIZE};
use crate::error::{ConvertError, ConvertResult};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Decrypt the raw bytes of a `.fmd` file, returning the plaintext
///
/// The first 16 bytes are the IV; the remainder is the ciphertext and must be
/// a nonzero multiple of the block size.
pub fn decrypt(data: &[u8]) -> ConvertResult<Vec<u8>> {
    if data.len() < CIPHER_BLOCK_SIZE + CIPHER_BLOCK_SIZE {
        return Err(ConvertError::Decryption(format!(
            "Input too short: {} bytes, need at least {}",
            data.len(),
            CIPHER_BLOCK_SIZE * 2
        )));
    }

    let (iv, ciphertext) = data.split_at(CIPHER_BLOCK_SIZE);

    if ciphertext.len() % CIPHER_BLOCK_SIZE != 0 {
        return Err(ConvertError::Decryption(format!(
            "Ciphertext length {} is not a multiple of the block size",
            ciphertext.len()
        )));
    }

    let cipher = Aes128CbcDec::new_from_slices(&foreflight_key(), iv)
        .map_err(|e| ConvertError::Decryption(format!("Failed to create cipher: {}", e)))?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| {
            ConvertError::Decryption("Decryption failed: invalid padding or corrupted data".into())
        })
}

/// Encrypt plaintext into the `.fmd` layout under a caller-supplied IV
///
/// Inverse of [`decrypt`]; the output is `iv || ciphertext`.
pub fn encrypt(plaintext: &[u8], iv: &[u8; 16]) -> ConvertResult<Vec<u8>> {
    let cipher = Aes128CbcEnc::new_from_slices(&foreflight_key(), iv)
        .map_err(|e| ConvertError::Encryption(format!("Failed to create cipher: {}", e)))?;

    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut out = Vec::with_capacity(iv.len() + ciphertext.len());
    out.extend_from_slice(iv);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}
