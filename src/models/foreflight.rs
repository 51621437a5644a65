//! ForeFlight checklist document model
//!
//! The decrypted payload of a `.fmd` file is a JSON document with metadata,
//! groups, checklists and items. The document is parsed once and treated as
//! immutable for the rest of the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag of a single checklist item
///
/// The wire format carries an open-ended string; it is modeled here as a
/// closed enumeration with an explicit `Unknown` variant so that every
/// conversion is total. Tags that ForeFlight may add in the future land in
/// `Unknown` rather than failing the parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    /// Section heading within a checklist
    Title,
    /// Challenge/response pair (e.g. "Fuel Selector" / "BOTH")
    ChallengeResponse,
    /// Challenge without a response
    Challenge,
    /// Free-standing text line
    Plaintext,
    /// Informational note
    Note,
    /// Caution callout
    Caution,
    /// Warning callout
    Warning,
    /// Vertical spacer
    Space,
    /// Any tag not recognized above; the original string is kept
    Unknown(String),
}

impl ItemType {
    /// Parse an item type from its wire tag. Total: unrecognized tags map to
    /// `Unknown` rather than an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "title" => Self::Title,
            "challenge_response" => Self::ChallengeResponse,
            "challenge" => Self::Challenge,
            "plaintext" => Self::Plaintext,
            "note" => Self::Note,
            "caution" => Self::Caution,
            "warning" => Self::Warning,
            "space" => Self::Space,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The wire tag for this item type
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Title => "title",
            Self::ChallengeResponse => "challenge_response",
            Self::Challenge => "challenge",
            Self::Plaintext => "plaintext",
            Self::Note => "note",
            Self::Caution => "caution",
            Self::Warning => "warning",
            Self::Space => "space",
            Self::Unknown(tag) => tag,
        }
    }
}

impl From<String> for ItemType {
    fn from(s: String) -> Self {
        Self::from_tag(&s)
    }
}

impl From<ItemType> for String {
    fn from(t: ItemType) -> Self {
        t.as_tag().to_string()
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Document-level metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Checklist collection name (e.g. "Mooney M20J Checklists")
    #[serde(default)]
    pub name: String,

    /// Aircraft make and model
    #[serde(rename = "makeAndModel", default)]
    pub make_and_model: String,

    /// Free-text aircraft information
    #[serde(rename = "aircraftInfo", default)]
    pub aircraft_info: String,
}

/// A single line of a checklist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Item type tag
    #[serde(rename = "type")]
    pub item_type: ItemType,

    /// Challenge/prompt text shown to the pilot
    #[serde(default)]
    pub prompt: String,

    /// Expected response, when the item has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expectation: Option<String>,
}

/// An ordered checklist (e.g. "Before Takeoff")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checklist {
    /// Checklist title
    pub title: String,

    /// Items in display order
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

/// A named group of checklists (e.g. "Normal Procedures")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistGroup {
    /// Group title
    #[serde(default)]
    pub title: String,

    /// Checklists in display order
    #[serde(default)]
    pub checklists: Vec<Checklist>,
}

/// A complete decrypted ForeFlight checklist document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistDocument {
    /// Document metadata
    pub metadata: DocumentMetadata,

    /// Groups in display order
    #[serde(default)]
    pub groups: Vec<ChecklistGroup>,
}

impl ChecklistDocument {
    /// Total number of items across all groups and checklists
    pub fn item_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| &g.checklists)
            .map(|c| c.items.len())
            .sum()
    }

    /// Total number of checklists across all groups
    pub fn checklist_count(&self) -> usize {
        self.groups.iter().map(|g| g.checklists.len()).sum()
    }
}
