// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Null bitmap at the start of a value record. Bit `index % 8` of byte
//! `index / 8` is set when value column `index` is null.

#[inline]
pub(crate) fn is_null(bitvec: &[u8], index: usize) -> bool {
	let byte = index / 8;
	let bit = index % 8;
	(bitvec[byte] & (1 << bit)) != 0
}

#[inline]
pub(crate) fn set_null(bitvec: &mut [u8], index: usize, null: bool) {
	let byte = index / 8;
	let bit = index % 8;
	if null {
		bitvec[byte] |= 1 << bit;
	} else {
		bitvec[byte] &= !(1 << bit);
	}
}
