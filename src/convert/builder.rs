//! Container builder: mapped sequences to the package envelope
//!
//! Assembles the top-level envelope with fixed version constants and a single
//! binder referencing every checklist in mapper order. Assembly is total.

use crate::convert::ids::IdGenerator;
use crate::models::garmin::{CONTAINER_TYPE, DATA_MODEL_VERSION, PACKAGE_TYPE_VERSION};
use crate::models::{
    ChecklistContainer, ContainerObjects, GarminBinder, GarminChecklist, GarminChecklistItem,
};

/// Package name used when the source document has none
pub const DEFAULT_PACKAGE_NAME: &str = "Converted Checklist";

/// Resolve the package/binder name from the source metadata name
pub fn package_name(source_name: &str) -> String {
    let trimmed = source_name.trim();
    if trimmed.is_empty() {
        DEFAULT_PACKAGE_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Build the destination container around the mapped sequences
///
/// One binder per conversion: sort order 0, fresh binder and source-template
/// identifiers, referencing all checklists in the order given.
pub fn build_container(
    name: &str,
    checklists: Vec<GarminChecklist>,
    items: Vec<GarminChecklistItem>,
    ids: &mut dyn IdGenerator,
) -> ChecklistContainer {
    let binder = GarminBinder {
        uuid: ids.next_id(),
        source_template_uuid: ids.next_id(),
        sort_order: 0,
        name: name.to_string(),
        checklists: checklists.iter().map(|c| c.uuid).collect(),
    };

    ChecklistContainer {
        data_model_version: DATA_MODEL_VERSION,
        package_type_version: PACKAGE_TYPE_VERSION,
        name: name.to_string(),
        container_type: CONTAINER_TYPE.to_string(),
        objects: vec![ContainerObjects {
            checklists,
            binders: vec![binder],
            checklist_items: items,
            version: None,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ids::RandomIds;
    use crate::convert::mapper::map_document;
    use crate::models::{
        Checklist, ChecklistDocument, ChecklistGroup, ChecklistItem, DocumentMetadata, ItemType,
    };

    fn sample_document() -> ChecklistDocument {
        ChecklistDocument {
            metadata: DocumentMetadata {
                name: "M20J".to_string(),
                make_and_model: "Mooney M20J".to_string(),
                aircraft_info: String::new(),
            },
            groups: vec![ChecklistGroup {
                title: "Normal".to_string(),
                checklists: vec![
                    Checklist {
                        title: "Before Start".to_string(),
                        items: vec![ChecklistItem {
                            item_type: ItemType::ChallengeResponse,
                            prompt: "Brakes".to_string(),
                            expectation: Some("SET".to_string()),
                        }],
                    },
                    Checklist {
                        title: "After Start".to_string(),
                        items: vec![],
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_envelope_constants() {
        let container = build_container("Test", vec![], vec![], &mut RandomIds);
        assert_eq!(container.data_model_version, 1);
        assert_eq!(container.package_type_version, 1);
        assert_eq!(container.container_type, "checklistBinder");
        assert_eq!(container.objects.len(), 1);
        assert!(container.objects[0].version.is_none());
    }

    #[test]
    fn test_single_binder_references_all_checklists_in_order() {
        let mut ids = RandomIds;
        let (checklists, items) = map_document(&sample_document(), &mut ids);
        let expected_refs: Vec<_> = checklists.iter().map(|c| c.uuid).collect();

        let container = build_container("M20J", checklists, items, &mut ids);

        let objects = &container.objects[0];
        assert_eq!(objects.binders.len(), 1);

        let binder = &objects.binders[0];
        assert_eq!(binder.sort_order, 0);
        assert_eq!(binder.name, "M20J");
        assert_eq!(binder.checklists, expected_refs);
        assert_ne!(binder.uuid, binder.source_template_uuid);
    }

    #[test]
    fn test_built_container_passes_validation() {
        let mut ids = RandomIds;
        let (checklists, items) = map_document(&sample_document(), &mut ids);
        let container = build_container("M20J", checklists, items, &mut ids);
        assert!(container.validate().is_ok());
    }

    #[test]
    fn test_package_name_fallback() {
        assert_eq!(package_name("M20J Checklists"), "M20J Checklists");
        assert_eq!(package_name("  spaced  "), "spaced");
        assert_eq!(package_name(""), DEFAULT_PACKAGE_NAME);
        assert_eq!(package_name("   "), DEFAULT_PACKAGE_NAME);
    }
}
