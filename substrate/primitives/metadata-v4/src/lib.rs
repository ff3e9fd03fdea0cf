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

//! Decoder for version 4 of the Substrate runtime metadata.
//!
//! A metadata blob, as returned by the `state_getMetadata` RPC, starts with the
//! [`META_RESERVED`] magic number and a version byte. Only [`SUPPORTED_VERSION`] is understood;
//! anything else is rejected before a single module is read.
//!
//! The body is a list of [`ModuleMetadata`], each of which may expose storage entries, calls and
//! events. Calls are addressed on the wire by a [`MethodIndex`], which is resolved from a
//! `"<Module>.<Call>"` name by [`RuntimeMetadataV4::method_index`].
//!
//! ```ignore
//! let metadata = sp_metadata_v4::decode_metadata(&bytes)?;
//! let index = metadata.v4().method_index("balances.transfer")?;
//! ```

#![warn(missing_docs)]

mod call_index;
mod error;
mod function;
mod module;
mod storage;


pub use call_index::MethodIndex;
pub use error::{FormatError, LookupError};
pub use function::{EventMetadata, FunctionArgumentMetadata, FunctionMetadata};
pub use module::ModuleMetadata;
pub use storage::{DoubleMapType, MapType, StorageEntryMetadata, StorageEntryType};

use codec::{Decode, Input};

const LOG_TARGET: &str = "metadata-v4";

/// Magic number every metadata blob starts with: `b"meta"` read as a little-endian `u32`.
pub const META_RESERVED: u32 = 0x6174_656d;

/// The only metadata version understood by this crate.
pub const SUPPORTED_VERSION: u8 = 4;

/// Runtime metadata prefixed by the magic number.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RuntimeMetadataPrefixed {
	/// Equal to [`META_RESERVED`] for every successfully decoded blob.
	pub magic_number: u32,
	/// The versioned metadata body.
	pub metadata: RuntimeMetadata,
}

/// Runtime metadata, tagged by its format version.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RuntimeMetadata {
	/// Version 4 of the metadata.
	V4(RuntimeMetadataV4),
}

impl RuntimeMetadata {
	/// The version byte this metadata was encoded with.
	pub fn version(&self) -> u8 {
		match self {
			RuntimeMetadata::V4(_) => 4,
		}
	}
}

/// Version 4 of the runtime metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RuntimeMetadataV4 {
	/// Runtime modules, in declaration order.
	pub modules: Vec<ModuleMetadata>,
}

impl RuntimeMetadataPrefixed {
	/// Decode the envelope and its body from `input`.
	///
	/// The magic number and the version are checked before the body is touched. Bytes left in
	/// `input` after the body are not inspected; use [`decode_metadata`] to require that the
	/// whole buffer is consumed.
	pub fn decode_prefixed<I: Input>(input: &mut I) -> Result<Self, FormatError> {
		let magic_number = u32::decode(input)?;
		if magic_number != META_RESERVED {
			return Err(FormatError::BadMagic { expected: META_RESERVED, got: magic_number })
		}

		let metadata = match input.read_byte()? {
			SUPPORTED_VERSION => RuntimeMetadata::V4(RuntimeMetadataV4::decode(input)?),
			version => return Err(FormatError::UnsupportedVersion(version)),
		};

		Ok(RuntimeMetadataPrefixed { magic_number, metadata })
	}

	/// The version 4 body.
	pub fn v4(&self) -> &RuntimeMetadataV4 {
		match &self.metadata {
			RuntimeMetadata::V4(metadata) => metadata,
		}
	}

	/// Runtime modules, in declaration order.
	pub fn modules(&self) -> &[ModuleMetadata] {
		&self.v4().modules
	}
}

/// Decode a complete metadata blob.
///
/// Fails on the first malformed field, and if any byte is left once the envelope is decoded.
/// No partially decoded tree is ever returned.
pub fn decode_metadata(bytes: &[u8]) -> Result<RuntimeMetadataPrefixed, FormatError> {
	let mut input = bytes;
	let metadata = RuntimeMetadataPrefixed::decode_prefixed(&mut input)?;
	if !input.is_empty() {
		return Err(FormatError::TrailingBytes(input.len()))
	}

	log::debug!(
		target: LOG_TARGET,
		"Decoded metadata v{} with {} modules from {} bytes",
		metadata.metadata.version(),
		metadata.modules().len(),
		bytes.len(),
	);

	Ok(metadata)
}
