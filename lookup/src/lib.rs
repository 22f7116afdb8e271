// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Associative and ordered lookup utilities.
//!
//! This crate carries two small, self-contained primitives:
//!
//! - [`ChainMap`], a key/value map resolving collisions by separate chaining
//!   over a fixed number of buckets
//! - [`upper_bound`], a binary search over an ascending-sorted slice that
//!   reports its iteration count alongside the located element

mod chain_map;
mod upper_bound;

pub use chain_map::ChainMap;
pub use upper_bound::upper_bound;
