//! Cryptographic functions for ffgp-convert
//!
//! AES-CBC primitives for both container formats, with the fixed
//! interoperability keys collected in `keys`.

pub mod foreflight;
pub mod garmin;
pub mod keys;
