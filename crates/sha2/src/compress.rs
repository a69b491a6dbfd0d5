// Copyright 2025 Irreducible Inc.

//! SHA-2 compression functions for the 32-bit and 64-bit word classes.
//!
//! Each function consumes exactly one message block: the block is read as 16
//! big-endian words, expanded into the full message schedule, and run through
//! the canonical round update. The schedule expansion and round recurrences
//! are identical between the two classes up to word width, round count, and
//! rotation amounts, so the two functions are written out separately rather
//! than behind a width abstraction. All arithmetic is wrapping; the round
//! loops contain no data-dependent branches.

use crate::consts::{K256, K512};

pub(crate) fn compress256(state: &mut [u32; 8], block: &[u8; 64]) {
	let mut w = [0u32; 64];
	for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_be_bytes(chunk.try_into().unwrap());
	}
	for i in 16..64 {
		let s0 = w[i - 15].rotate_right(7) ^ w[i - 15].rotate_right(18) ^ (w[i - 15] >> 3);
		let s1 = w[i - 2].rotate_right(17) ^ w[i - 2].rotate_right(19) ^ (w[i - 2] >> 10);
		w[i] = w[i - 16]
			.wrapping_add(s0)
			.wrapping_add(w[i - 7])
			.wrapping_add(s1);
	}

	let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
	for i in 0..64 {
		let sigma1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
		let ch = (e & f) ^ (!e & g);
		let t1 = h
			.wrapping_add(sigma1)
			.wrapping_add(ch)
			.wrapping_add(K256[i])
			.wrapping_add(w[i]);
		let sigma0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
		let maj = (a & b) ^ (a & c) ^ (b & c);
		let t2 = sigma0.wrapping_add(maj);
		h = g;
		g = f;
		f = e;
		e = d.wrapping_add(t1);
		d = c;
		c = b;
		b = a;
		a = t1.wrapping_add(t2);
	}

	for (word, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
		*word = word.wrapping_add(v);
	}
}

pub(crate) fn compress512(state: &mut [u64; 8], block: &[u8; 128]) {
	let mut w = [0u64; 80];
	for (word, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
		*word = u64::from_be_bytes(chunk.try_into().unwrap());
	}
	for i in 16..80 {
		let s0 = w[i - 15].rotate_right(1) ^ w[i - 15].rotate_right(8) ^ (w[i - 15] >> 7);
		let s1 = w[i - 2].rotate_right(19) ^ w[i - 2].rotate_right(61) ^ (w[i - 2] >> 6);
		w[i] = w[i - 16]
			.wrapping_add(s0)
			.wrapping_add(w[i - 7])
			.wrapping_add(s1);
	}

	let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
	for i in 0..80 {
		let sigma1 = e.rotate_right(14) ^ e.rotate_right(18) ^ e.rotate_right(41);
		let ch = (e & f) ^ (!e & g);
		let t1 = h
			.wrapping_add(sigma1)
			.wrapping_add(ch)
			.wrapping_add(K512[i])
			.wrapping_add(w[i]);
		let sigma0 = a.rotate_right(28) ^ a.rotate_right(34) ^ a.rotate_right(39);
		let maj = (a & b) ^ (a & c) ^ (b & c);
		let t2 = sigma0.wrapping_add(maj);
		h = g;
		g = f;
		f = e;
		e = d.wrapping_add(t1);
		d = c;
		c = b;
		b = a;
		a = t1.wrapping_add(t2);
	}

	for (word, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
		*word = word.wrapping_add(v);
	}
}
