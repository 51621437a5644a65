//! Model mapper: ForeFlight document to Garmin checklists and items
//!
//! Flattens every group's checklists into one sequence, preserving group and
//! checklist order, and rewrites each item into the Garmin schema. Pure
//! except for identifier generation, which is injected. Never fails: unknown
//! item types fall through to the default mapping.

use crate::convert::ids::IdGenerator;
use crate::models::garmin::{
    CHECKLIST_SUBTYPE_OTHER, CHECKLIST_TYPE_NORMAL, COMPLETION_GO_TO_NEXT,
};
use crate::models::{
    ChecklistDocument, GarminChecklist, GarminChecklistItem, GarminItemType, ItemType,
};

/// Map a source item type onto the Garmin item type
///
/// Total: challenge-style items become checkable plain text, everything
/// descriptive becomes a note, and unrecognized tags default to plain text.
pub fn map_item_type(item_type: &ItemType) -> GarminItemType {
    match item_type {
        ItemType::Title => GarminItemType::Note,
        ItemType::ChallengeResponse => GarminItemType::PlainText,
        ItemType::Challenge => GarminItemType::PlainText,
        ItemType::Plaintext => GarminItemType::Note,
        ItemType::Note => GarminItemType::Note,
        ItemType::Caution => GarminItemType::Note,
        ItemType::Warning => GarminItemType::Note,
        ItemType::Space => GarminItemType::Note,
        ItemType::Unknown(_) => GarminItemType::PlainText,
    }
}

/// Map a whole document into the destination checklist and item sequences
///
/// Checklists appear in group order, then checklist order within the group.
/// Each checklist's `checklist_items` lists its item identifiers in source
/// display order.
pub fn map_document(
    doc: &ChecklistDocument,
    ids: &mut dyn IdGenerator,
) -> (Vec<GarminChecklist>, Vec<GarminChecklistItem>) {
    let mut checklists = Vec::with_capacity(doc.checklist_count());
    let mut items = Vec::with_capacity(doc.item_count());

    for group in &doc.groups {
        for checklist in &group.checklists {
            let mut item_ids = Vec::with_capacity(checklist.items.len());

            for item in &checklist.items {
                let mapped = GarminChecklistItem {
                    uuid: ids.next_id(),
                    title: item.prompt.clone(),
                    item_type: map_item_type(&item.item_type),
                    action: item.expectation.clone().unwrap_or_default(),
                    checked: false,
                };
                item_ids.push(mapped.uuid);
                items.push(mapped);
            }

            checklists.push(GarminChecklist {
                uuid: ids.next_id(),
                name: checklist.title.clone(),
                checklist_type: CHECKLIST_TYPE_NORMAL.to_string(),
                subtype: CHECKLIST_SUBTYPE_OTHER.to_string(),
                completion_item: COMPLETION_GO_TO_NEXT.to_string(),
                checklist_items: item_ids,
            });
        }
    }

    (checklists, items)
}
