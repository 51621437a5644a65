//! Core data models
//!
//! `foreflight` holds the source document parsed out of a `.fmd` file;
//! `garmin` holds the destination object graph serialized into a `.gplts`
//! payload. Both are plain serde models with no behavior beyond validation.

pub mod foreflight;
pub mod garmin;

pub use foreflight::{
    Checklist, ChecklistDocument, ChecklistGroup, ChecklistItem, DocumentMetadata, ItemType,
};
pub use garmin::{
    ChecklistContainer, ContainerObjects, GarminBinder, GarminChecklist, GarminChecklistItem,
    GarminItemType,
};
