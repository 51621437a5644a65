//! Encryptor: container to encrypted package payload
//!
//! Serializes the container to its canonical JSON form (pretty-printed,
//! 2-space indent, field order fixed by the schema structs) and encrypts it
//! under the Garmin package scheme.

use crate::crypto;
use crate::error::{ConvertError, ConvertResult};
use crate::models::ChecklistContainer;

/// Serialize a container to its canonical JSON text
pub fn serialize_container(container: &ChecklistContainer) -> ConvertResult<String> {
    serde_json::to_string_pretty(container)
        .map_err(|e| ConvertError::Encryption(format!("Failed to serialize container: {}", e)))
}

/// Serialize and encrypt a container into the package payload
pub fn encrypt_container(container: &ChecklistContainer) -> ConvertResult<Vec<u8>> {
    let json = serialize_container(container)?;
    crypto::garmin::encrypt(json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::builder::build_container;
    use crate::convert::ids::SequentialIds;
    use crate::convert::mapper::map_document;
    use crate::models::{
        Checklist, ChecklistDocument, ChecklistGroup, ChecklistItem, DocumentMetadata, ItemType,
    };

    fn sample_container(seed: u128) -> ChecklistContainer {
        let doc = ChecklistDocument {
            metadata: DocumentMetadata {
                name: "Determinism".to_string(),
                make_and_model: String::new(),
                aircraft_info: String::new(),
            },
            groups: vec![ChecklistGroup {
                title: "G".to_string(),
                checklists: vec![Checklist {
                    title: "C".to_string(),
                    items: vec![ChecklistItem {
                        item_type: ItemType::Note,
                        prompt: "p".to_string(),
                        expectation: None,
                    }],
                }],
            }],
        };
        let mut ids = SequentialIds::new(seed);
        let (checklists, items) = map_document(&doc, &mut ids);
        build_container("Determinism", checklists, items, &mut ids)
    }

    #[test]
    fn test_serialization_field_order() {
        let json = serialize_container(&sample_container(1)).unwrap();
        // Envelope fields appear in schema order
        let positions: Vec<_> = [
            "\"dataModelVersion\"",
            "\"packageTypeVersion\"",
            "\"name\"",
            "\"type\"",
            "\"objects\"",
        ]
        .iter()
        .map(|field| json.find(field).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_encryption_is_deterministic_given_fixed_ids() {
        let first = encrypt_container(&sample_container(9)).unwrap();
        let second = encrypt_container(&sample_container(9)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_payload_decrypts_back_to_container() {
        let container = sample_container(3);
        let payload = encrypt_container(&container).unwrap();

        let plaintext = crate::crypto::garmin::decrypt(&payload).unwrap();
        let parsed: ChecklistContainer =
            serde_json::from_slice(&plaintext).unwrap();
        assert_eq!(parsed.name, "Determinism");
        assert!(parsed.validate().is_ok());
    }
}
