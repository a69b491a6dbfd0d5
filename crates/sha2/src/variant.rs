// Copyright 2025 Irreducible Inc.

//! Variant selection and per-variant parameters.
//!
//! The six named members of the SHA-2 family carry fixed, published initial
//! values. SHA-512/t is different: its initial value is a function of the
//! truncation length `t` and is computed here by `derive_iv`, which runs a
//! complete SHA-512 computation nested inside variant resolution.

use std::str::FromStr;

use crate::consts::{IV512, IV_GENERATION_MASK};
use crate::hasher::Sha2;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid SHA-512/t truncation length {t}: t must be in 1..=511 and not 384")]
	InvalidTruncation { t: u16 },
	#[error("unrecognized variant name {0:?}")]
	UnknownVariant(String),
}

/// A validated SHA-512/t truncation length in bits.
///
/// Construction enforces `1 <= t <= 511` and `t != 384` (t = 384 is excluded
/// by FIPS 180-4 because it would shadow SHA-384). No minimum beyond that is
/// imposed; degenerate lengths such as t = 8 are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Truncation(u16);

impl Truncation {
	pub fn new(t: u16) -> Result<Self, Error> {
		if t == 0 || t > 511 || t == 384 {
			return Err(Error::InvalidTruncation { t });
		}
		Ok(Self(t))
	}

	pub fn bits(self) -> u16 {
		self.0
	}
}

/// A member of the SHA-2 family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum Variant {
	Sha224,
	Sha256,
	Sha384,
	Sha512,
	Sha512_224,
	Sha512_256,
	Sha512T(Truncation),
}

impl Variant {
	/// Returns the SHA-512/t variant for the given truncation length.
	pub fn sha512_t(t: u16) -> Result<Self, Error> {
		Ok(Self::Sha512T(Truncation::new(t)?))
	}

	/// Resolves a variant from any accepted spelling of its name.
	///
	/// Matching is case-insensitive and ignores `-`, `_`, and `/`, so
	/// "SHA-512/256", "sha_512_256", and "SHA512256" all resolve to
	/// [`Variant::Sha512_256`]. The SHA-512/t family cannot be resolved here
	/// since it needs a truncation length; use [`Variant::from_name_t`].
	pub fn from_name(name: &str) -> Result<Self, Error> {
		match normalize(name).as_str() {
			"sha224" => Ok(Self::Sha224),
			"sha256" => Ok(Self::Sha256),
			"sha384" => Ok(Self::Sha384),
			"sha512" => Ok(Self::Sha512),
			"sha512224" => Ok(Self::Sha512_224),
			"sha512256" => Ok(Self::Sha512_256),
			_ => Err(Error::UnknownVariant(name.to_string())),
		}
	}

	/// Resolves a SHA-512/t spelling ("SHA-512/t", "sha512_t", ...) together
	/// with an explicit truncation length.
	pub fn from_name_t(name: &str, t: u16) -> Result<Self, Error> {
		match normalize(name).as_str() {
			"sha512t" => Self::sha512_t(t),
			_ => Err(Error::UnknownVariant(name.to_string())),
		}
	}

	/// Digest length in bits.
	pub fn output_bits(self) -> u32 {
		match self {
			Self::Sha224 | Self::Sha512_224 => 224,
			Self::Sha256 | Self::Sha512_256 => 256,
			Self::Sha384 => 384,
			Self::Sha512 => 512,
			Self::Sha512T(t) => u32::from(t.bits()),
		}
	}

	/// Digest length in bytes, rounding a sub-byte `t` up.
	pub fn output_bytes(self) -> usize {
		(self.output_bits() as usize + 7) / 8
	}

	/// Message block size in bytes: 64 for the 32-bit word class, 128 for the
	/// 64-bit class.
	pub fn block_bytes(self) -> usize {
		match self {
			Self::Sha224 | Self::Sha256 => 64,
			_ => 128,
		}
	}
}

impl FromStr for Variant {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		Self::from_name(s)
	}
}

fn normalize(name: &str) -> String {
	name.chars()
		.filter(|c| !matches!(c, '-' | '_' | '/'))
		.map(|c| c.to_ascii_lowercase())
		.collect()
}

/// Derives the initial value for SHA-512/t (FIPS 180-4 §5.3.6).
///
/// The SHA-512 initial value is XOR-masked word-wise, and the ASCII string
/// `SHA-512/<t>` (t in decimal) is hashed through the ordinary SHA-512
/// pipeline seeded with that masked state. The resulting state is the initial
/// value. This is a full nested hash computation; it reuses [`Sha2`] with an
/// overridden seed rather than duplicating any of the round logic.
pub(crate) fn derive_iv(t: Truncation) -> [u64; 8] {
	let mut seed = IV512;
	for word in &mut seed {
		*word ^= IV_GENERATION_MASK;
	}
	let tag = format!("SHA-512/{}", t.bits());
	let digest = Sha2::with_iv512(Variant::Sha512, seed)
		.chain_update(tag.as_bytes())
		.finalize();
	let mut iv = [0u64; 8];
	for (word, chunk) in iv.iter_mut().zip(digest.chunks_exact(8)) {
		*word = u64::from_be_bytes(chunk.try_into().unwrap());
	}
	iv
}
