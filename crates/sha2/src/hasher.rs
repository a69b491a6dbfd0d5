// Copyright 2025 Irreducible Inc.

//! Streaming SHA-2 core and the single-shot digest entry points.

use crate::compress::{compress256, compress512};
use crate::consts::{IV224, IV256, IV384, IV512, IV512_224, IV512_256};
use crate::variant::{derive_iv, Error, Variant};

/// The running 8-word hash state, at the word width of the active variant.
#[derive(Debug, Clone)]
enum State {
	W32([u32; 8]),
	W64([u64; 8]),
}

/// A streaming SHA-2 hasher.
///
/// Owns all scratch state for one computation, so independent instances may
/// run on separate threads without coordination. The single-shot [`digest`]
/// is a thin wrapper over `new`/`update`/`finalize`.
///
/// ```
/// use sha2_kit::{Sha2, Variant};
///
/// let digest = Sha2::new(Variant::Sha256)
/// 	.chain_update(b"hello, ")
/// 	.chain_update(b"world")
/// 	.finalize();
/// assert_eq!(digest.len(), 32);
/// ```
#[derive(Debug, Clone)]
pub struct Sha2 {
	variant: Variant,
	state: State,
	buf: [u8; 128],
	buf_len: usize,
	msg_len: u64,
}

impl Sha2 {
	/// Creates a hasher for `variant`.
	///
	/// For [`Variant::Sha512T`] this derives the initial value, which is
	/// itself a full SHA-512 computation over a short tag string.
	pub fn new(variant: Variant) -> Self {
		let state = match variant {
			Variant::Sha224 => State::W32(IV224),
			Variant::Sha256 => State::W32(IV256),
			Variant::Sha384 => State::W64(IV384),
			Variant::Sha512 => State::W64(IV512),
			Variant::Sha512_224 => State::W64(IV512_224),
			Variant::Sha512_256 => State::W64(IV512_256),
			Variant::Sha512T(t) => State::W64(derive_iv(t)),
		};
		Self {
			variant,
			state,
			buf: [0u8; 128],
			buf_len: 0,
			msg_len: 0,
		}
	}

	/// A 64-bit-class hasher seeded with an explicit initial value. Used by
	/// the SHA-512/t IV derivation, which hashes under a masked seed.
	pub(crate) fn with_iv512(variant: Variant, iv: [u64; 8]) -> Self {
		Self {
			variant,
			state: State::W64(iv),
			buf: [0u8; 128],
			buf_len: 0,
			msg_len: 0,
		}
	}

	pub fn update(&mut self, data: impl AsRef<[u8]>) {
		let mut data = data.as_ref();
		let block_len = self.variant.block_bytes();
		self.msg_len += data.len() as u64;

		if self.buf_len > 0 {
			let take = usize::min(block_len - self.buf_len, data.len());
			self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
			self.buf_len += take;
			data = &data[take..];
			if self.buf_len < block_len {
				return;
			}
			let full = self.buf;
			self.compress_block(&full[..block_len]);
			self.buf_len = 0;
		}

		let tail_len = data.len() % block_len;
		let (blocks, tail) = data.split_at(data.len() - tail_len);
		for block in blocks.chunks_exact(block_len) {
			self.compress_block(block);
		}
		self.buf[..tail.len()].copy_from_slice(tail);
		self.buf_len = tail.len();
	}

	pub fn chain_update(mut self, data: impl AsRef<[u8]>) -> Self {
		self.update(data);
		self
	}

	/// Pads the buffered tail, compresses the final block(s), and returns the
	/// digest truncated to the variant's output length.
	///
	/// Padding appends `0x80`, zero-fills until the length field lines up
	/// with a block boundary, and writes the original message length in bits
	/// as a big-endian integer (8 bytes for the 32-bit class, 16 for the
	/// 64-bit class; the upper 64 bits are always zero). The tail therefore
	/// spans one block, or two when fewer than `field + 1` bytes were free.
	pub fn finalize(mut self) -> Vec<u8> {
		let (block_len, field_len) = match self.state {
			State::W32(_) => (64usize, 8usize),
			State::W64(_) => (128, 16),
		};
		let bit_len = u128::from(self.msg_len) * 8;

		// At most two blocks of padding, zero-initialized.
		let mut pad = [0u8; 256];
		pad[..self.buf_len].copy_from_slice(&self.buf[..self.buf_len]);
		pad[self.buf_len] = 0x80;
		let mut total = if self.buf_len + 1 + field_len > block_len {
			2 * block_len - field_len
		} else {
			block_len - field_len
		};
		let len_be = bit_len.to_be_bytes();
		pad[total..total + field_len].copy_from_slice(&len_be[16 - field_len..]);
		total += field_len;

		for block in pad[..total].chunks_exact(block_len) {
			self.compress_block(block);
		}

		// Big-endian serialization, truncated to the leading output bytes.
		// For a sub-byte t the final byte is a raw slice of the state: the
		// bits past t are carried as-is, not zero-masked.
		let mut serialized = [0u8; 64];
		match &self.state {
			State::W32(state) => {
				for (chunk, word) in serialized.chunks_exact_mut(4).zip(state) {
					chunk.copy_from_slice(&word.to_be_bytes());
				}
			}
			State::W64(state) => {
				for (chunk, word) in serialized.chunks_exact_mut(8).zip(state) {
					chunk.copy_from_slice(&word.to_be_bytes());
				}
			}
		}
		serialized[..self.variant.output_bytes()].to_vec()
	}

	fn compress_block(&mut self, block: &[u8]) {
		match &mut self.state {
			State::W32(state) => compress256(state, block.try_into().unwrap()),
			State::W64(state) => compress512(state, block.try_into().unwrap()),
		}
	}
}

/// Computes the digest of `msg` under `variant` in a single call.
pub fn digest(variant: Variant, msg: impl AsRef<[u8]>) -> Vec<u8> {
	Sha2::new(variant).chain_update(msg).finalize()
}

/// Computes a digest with the variant resolved from `name` (any accepted
/// spelling; see [`Variant::from_name`]).
pub fn digest_named(name: &str, msg: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
	Ok(digest(Variant::from_name(name)?, msg))
}
