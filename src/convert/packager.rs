//! Packager: encrypted payload to the output byte stream
//!
//! The consumer application expects the encrypted payload wrapped in a
//! gzip-compressed tar archive. The exact archive parameters have not been
//! confirmed against a reference sample, so this stage currently passes the
//! encrypted bytes through unwrapped and only applies the file-name
//! convention. It is kept as a separate stage so the wrapping can land here
//! without touching the rest of the pipeline.
//!
//! TODO: add the tar+gzip wrapping once the archive parameters are validated
//! against a consumer-readable reference file.

use std::path::{Path, PathBuf};

use crate::error::ConvertResult;

/// File extension of source containers
pub const SOURCE_EXTENSION: &str = "fmd";

/// File extension of destination packages
pub const PACKAGE_EXTENSION: &str = "gplts";

/// Wrap the encrypted payload into the final output byte stream
pub fn package(encrypted: Vec<u8>) -> ConvertResult<Vec<u8>> {
    // Archive wrapping outstanding; see module docs.
    Ok(encrypted)
}

/// Destination path for a given source path, per the naming convention
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(PACKAGE_EXTENSION)
}

/// Check whether a path carries the source extension
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(SOURCE_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_passes_payload_through() {
        let payload = vec![1u8, 2, 3, 4];
        assert_eq!(package(payload.clone()).unwrap(), payload);
    }

    #[test]
    fn test_output_path_swaps_extension() {
        let out = output_path(Path::new("M20f checklist.fmd"));
        assert_eq!(out, PathBuf::from("M20f checklist.gplts"));
    }

    #[test]
    fn test_is_source_file() {
        assert!(is_source_file(Path::new("a.fmd")));
        assert!(is_source_file(Path::new("a.FMD")));
        assert!(!is_source_file(Path::new("a.gplts")));
        assert!(!is_source_file(Path::new("fmd")));
    }
}
