// This file is part of Substrate.

// Copyright (C) Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Metadata of storage entries.
//!
//! The layout of an entry depends on a type tag read from the stream: `0` is a plain value,
//! `1` a map and every other value a double map, including tags this crate does not know of.

use codec::{Decode, Input};

const PLAIN_TAG: u8 = 0;
const MAP_TAG: u8 = 1;

/// A storage value or map exposed by a module.
#[derive(Clone, Debug, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StorageEntryMetadata {
	/// Entry name.
	pub name: String,
	/// Opaque modifier byte (optional or default value).
	pub modifier: u8,
	/// Shape of the entry.
	pub ty: StorageEntryType,
	/// SCALE encoded value returned when the entry is not set.
	pub fallback: Vec<u8>,
	/// Documentation lines.
	pub documentation: Vec<String>,
}

/// Shape of a storage entry. Exactly one payload exists per tag.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StorageEntryType {
	/// A single value of the given type.
	Plain(String),
	/// A map with a single key.
	Map(MapType),
	/// A map with two keys. `tag` is the raw type tag, which is any value but 0 or 1.
	DoubleMap {
		/// The tag that selected this variant.
		tag: u8,
		/// The double map description.
		double_map: DoubleMapType,
	},
}

impl StorageEntryType {
	/// The type tag this entry was decoded from.
	pub fn tag(&self) -> u8 {
		match self {
			StorageEntryType::Plain(_) => PLAIN_TAG,
			StorageEntryType::Map(_) => MAP_TAG,
			StorageEntryType::DoubleMap { tag, .. } => *tag,
		}
	}

	/// Name of the stored value type.
	pub fn value_type(&self) -> &str {
		match self {
			StorageEntryType::Plain(ty) => ty,
			StorageEntryType::Map(map) => &map.value,
			StorageEntryType::DoubleMap { double_map, .. } => &double_map.value,
		}
	}
}

impl Decode for StorageEntryType {
	fn decode<I: Input>(input: &mut I) -> Result<Self, codec::Error> {
		Ok(match input.read_byte()? {
			PLAIN_TAG => StorageEntryType::Plain(String::decode(input)?),
			MAP_TAG => StorageEntryType::Map(MapType::decode(input)?),
			tag => StorageEntryType::DoubleMap { tag, double_map: DoubleMapType::decode(input)? },
		})
	}
}

/// Single key map description.
#[derive(Clone, Debug, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MapType {
	/// Opaque hasher byte used for the key.
	pub hasher: u8,
	/// Key type name.
	pub key: String,
	/// Value type name.
	pub value: String,
	/// Whether the map is a linked map.
	pub is_linked: bool,
}

/// Double key map description.
///
/// The hasher of the first key is an opaque byte while the hasher of the second key is a type
/// name string, as found in the format.
#[derive(Clone, Debug, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DoubleMapType {
	/// Opaque hasher byte used for the first key.
	pub hasher: u8,
	/// First key type name.
	pub key1: String,
	/// Second key type name.
	pub key2: String,
	/// Value type name.
	pub value: String,
	/// Hasher of the second key.
	pub key2_hasher: String,
}
