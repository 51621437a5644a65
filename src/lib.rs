//! ffgp-convert - ForeFlight to Garmin Pilot checklist converter
//!
//! This library converts encrypted ForeFlight checklist documents (`.fmd`)
//! into encrypted Garmin Pilot checklist binder packages (`.gplts`). The
//! formats were reverse-engineered; the cipher keys embedded here are
//! interoperability constants, not secrets.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Source and destination data models
//! - `crypto`: AES-CBC primitives and fixed cipher constants
//! - `convert`: The sequential conversion pipeline
//!
//! # Example
//!
//! ```rust,ignore
//! let input = std::fs::read("M20f checklist.fmd")?;
//! let output = ffgp_convert::convert(&input)?;
//! std::fs::write("M20f checklist.gplts", output)?;
//! ```

pub mod convert;
pub mod crypto;
pub mod error;
pub mod models;

pub use convert::{convert, convert_with_ids};
pub use error::{ConvertError, ConvertResult};
