// Copyright 2025 Irreducible Inc.

//! Pure-Rust SHA-2 message digests.
//!
//! This crate implements the full SHA-2 family of FIPS 180-4: SHA-224,
//! SHA-256, SHA-384, SHA-512, SHA-512/224, SHA-512/256, and the generalized
//! truncated form SHA-512/t for any truncation length `1 <= t <= 511`,
//! `t != 384`. The SHA-512/t initial value is derived on the fly by a nested
//! SHA-512 computation, per the standard's IV-generation procedure.
//!
//! The primary entry point is the single-shot [`digest`]; [`digest_named`]
//! resolves the variant from a spelling-insensitive name. A streaming
//! [`Sha2`] hasher is also exposed for callers that feed data in chunks.
//!
//! ```
//! use sha2_kit::{digest, digest_named, Variant};
//!
//! let d = digest(Variant::Sha256, "Green chá");
//! assert_eq!(d, digest_named("SHA-256", "Green chá").unwrap());
//! assert_eq!(d.len(), 32);
//! ```

mod compress;
mod consts;
mod hasher;
mod variant;

#[cfg(test)]
mod tests;

pub use hasher::{digest, digest_named, Sha2};
pub use variant::{Error, Truncation, Variant};
