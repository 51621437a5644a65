//! Source decoder: `.fmd` bytes to a checklist document
//!
//! Splits off the IV, decrypts, and parses the plaintext JSON. Framing and
//! cipher failures surface as `Decryption` errors; UTF-8 and schema failures
//! as `Parse` errors. No partial document is ever returned.

use crate::crypto;
use crate::error::{ConvertError, ConvertResult};
use crate::models::ChecklistDocument;

/// Decode the raw bytes of a `.fmd` file into a [`ChecklistDocument`]
pub fn decode(data: &[u8]) -> ConvertResult<ChecklistDocument> {
    let plaintext = crypto::foreflight::decrypt(data)?;

    let text = String::from_utf8(plaintext)
        .map_err(|e| ConvertError::Parse(format!("Decrypted data is not valid UTF-8: {}", e)))?;

    serde_json::from_str(&text)
        .map_err(|e| ConvertError::Parse(format!("Not a valid checklist document: {}", e)))
}
