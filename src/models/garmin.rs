//! Garmin Pilot checklist binder model
//!
//! Object graph of the decrypted `.gplts` payload, reverse-engineered from
//! sample files. Field names and declaration order pin the wire format:
//! the container serializes to JSON with exactly these names, and the
//! consumer application is sensitive to them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Schema version stamped into `dataModelVersion`
pub const DATA_MODEL_VERSION: u32 = 1;

/// Schema version stamped into `packageTypeVersion`
pub const PACKAGE_TYPE_VERSION: u32 = 1;

/// Container type discriminator for checklist binder packages
pub const CONTAINER_TYPE: &str = "checklistBinder";

/// Checklist category; this pipeline only emits normal checklists
pub const CHECKLIST_TYPE_NORMAL: &str = "NORMAL";

/// Checklist subtype emitted for converted checklists
pub const CHECKLIST_SUBTYPE_OTHER: &str = "SUBTYPE_OTHER";

/// Completion action emitted for converted checklists
pub const COMPLETION_GO_TO_NEXT: &str = "ACTION_GO_TO_NEXT_CHECKLIST";

/// Item type in the Garmin schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GarminItemType {
    /// Informational note line
    #[serde(rename = "TYPE_NOTE")]
    Note,
    /// Checkable plain-text line
    #[serde(rename = "TYPE_PLAIN_TEXT")]
    PlainText,
}

/// A single checklist item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarminChecklistItem {
    /// Unique identifier, referenced from the owning checklist
    pub uuid: Uuid,

    /// Item text (the source prompt)
    pub title: String,

    /// Item type
    #[serde(rename = "itemType")]
    pub item_type: GarminItemType,

    /// Expected action/response (the source expectation, empty if absent)
    pub action: String,

    /// Completion state; always false for freshly converted items
    pub checked: bool,
}

/// A checklist referencing its items by identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarminChecklist {
    /// Unique identifier, referenced from the binder
    pub uuid: Uuid,

    /// Checklist name
    pub name: String,

    /// Checklist category (always `NORMAL` here)
    #[serde(rename = "type")]
    pub checklist_type: String,

    /// Checklist subtype
    pub subtype: String,

    /// Action taken when the checklist is completed
    #[serde(rename = "completionItem")]
    pub completion_item: String,

    /// Item identifiers in display order (references, not embedded items)
    #[serde(rename = "checklistItems")]
    pub checklist_items: Vec<Uuid>,
}

/// Grouping record referencing an ordered set of checklists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarminBinder {
    /// Unique identifier
    pub uuid: Uuid,

    /// Identifier of the template this binder was created from
    #[serde(rename = "sourceTemplateUUID")]
    pub source_template_uuid: Uuid,

    /// Position among the user's binders
    #[serde(rename = "sortOrder")]
    pub sort_order: u32,

    /// Binder name
    pub name: String,

    /// Checklist identifiers in display order
    pub checklists: Vec<Uuid>,
}

/// The single object bundle inside the container envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerObjects {
    /// All checklists
    pub checklists: Vec<GarminChecklist>,

    /// All binders (exactly one per conversion)
    pub binders: Vec<GarminBinder>,

    /// All checklist items
    #[serde(rename = "checklistItems")]
    pub checklist_items: Vec<GarminChecklistItem>,

    /// Unused by the consumer; serialized as null in sample files
    pub version: Option<u32>,
}

/// Top-level envelope of a checklist binder package
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistContainer {
    /// Data model schema version
    #[serde(rename = "dataModelVersion")]
    pub data_model_version: u32,

    /// Package type schema version
    #[serde(rename = "packageTypeVersion")]
    pub package_type_version: u32,

    /// Package name
    pub name: String,

    /// Container type discriminator
    #[serde(rename = "type")]
    pub container_type: String,

    /// Exactly one object bundle
    pub objects: Vec<ContainerObjects>,
}

impl ChecklistContainer {
    /// Validate referential integrity of the object graph
    ///
    /// Every identifier in a checklist's item list or a binder's checklist
    /// list must resolve to exactly one object in the corresponding sequence.
    pub fn validate(&self) -> Result<(), String> {
        for objects in &self.objects {
            let item_ids: HashSet<_> =
                objects.checklist_items.iter().map(|i| i.uuid).collect();
            let checklist_ids: HashSet<_> =
                objects.checklists.iter().map(|c| c.uuid).collect();

            if item_ids.len() != objects.checklist_items.len() {
                return Err("duplicate checklist item identifier".to_string());
            }
            if checklist_ids.len() != objects.checklists.len() {
                return Err("duplicate checklist identifier".to_string());
            }

            for checklist in &objects.checklists {
                for item_id in &checklist.checklist_items {
                    if !item_ids.contains(item_id) {
                        return Err(format!(
                            "Checklist {} references unknown item {}",
                            checklist.uuid, item_id
                        ));
                    }
                }
            }

            for binder in &objects.binders {
                for checklist_id in &binder.checklists {
                    if !checklist_ids.contains(checklist_id) {
                        return Err(format!(
                            "Binder {} references unknown checklist {}",
                            binder.uuid, checklist_id
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}
