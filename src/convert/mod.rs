//! The conversion pipeline
//!
//! Strictly sequential stages, each receiving and returning plain data:
//!
//! decoder → mapper → builder → encryptor → packager
//!
//! [`convert`] runs the whole pipeline with random identifiers;
//! [`convert_with_ids`] takes an injected generator for deterministic output.

pub mod builder;
pub mod decoder;
pub mod encryptor;
pub mod ids;
pub mod mapper;
pub mod packager;

pub use builder::build_container;
pub use decoder::decode;
pub use encryptor::encrypt_container;
pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use mapper::{map_document, map_item_type};
pub use packager::{output_path, package};

use crate::error::ConvertResult;

/// Convert `.fmd` bytes into `.gplts` bytes
pub fn convert(input: &[u8]) -> ConvertResult<Vec<u8>> {
    convert_with_ids(input, &mut RandomIds)
}

/// Convert with an injected identifier generator
pub fn convert_with_ids(input: &[u8], ids: &mut dyn IdGenerator) -> ConvertResult<Vec<u8>> {
    let doc = decoder::decode(input)?;
    let (checklists, items) = mapper::map_document(&doc, ids);
    let name = builder::package_name(&doc.metadata.name);
    let container = builder::build_container(&name, checklists, items, ids);
    let payload = encryptor::encrypt_container(&container)?;
    packager::package(payload)
}
