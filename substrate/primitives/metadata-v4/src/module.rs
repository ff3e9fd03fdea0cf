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

//! Metadata of a single runtime module.

use crate::{EventMetadata, FunctionMetadata, StorageEntryMetadata, LOG_TARGET};
use codec::{Decode, Input};

const SECTION_PRESENT: u8 = 1;
const SECTION_ABSENT: u8 = 0;

/// A runtime module and the sections it exposes.
///
/// Each section is preceded by a presence byte in the encoding. A section is `Some` only when
/// that byte is 1; a module without calls is therefore different from a module with an empty
/// list of calls.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModuleMetadata {
	/// Module name, used to address calls.
	pub name: String,
	/// Storage prefix, used to address storage entries.
	pub prefix: String,
	/// Storage entries, if the module declares storage.
	pub storage: Option<Vec<StorageEntryMetadata>>,
	/// Dispatchable calls, if the module declares calls.
	pub calls: Option<Vec<FunctionMetadata>>,
	/// Events, if the module declares events.
	pub events: Option<Vec<EventMetadata>>,
}

impl ModuleMetadata {
	/// Whether the module has a calls section and thus occupies a call section index.
	pub fn has_calls(&self) -> bool {
		self.calls.is_some()
	}

	/// Look up a storage entry by name.
	pub fn storage_entry(&self, name: &str) -> Option<&StorageEntryMetadata> {
		self.storage.as_ref()?.iter().find(|entry| entry.name == name)
	}

	/// Look up a call by name, along with its position in the calls section.
	pub fn call(&self, name: &str) -> Option<(usize, &FunctionMetadata)> {
		self.calls.as_ref()?.iter().enumerate().find(|(_, call)| call.name == name)
	}

	/// Look up an event by name, along with its position in the events section.
	pub fn event(&self, name: &str) -> Option<(usize, &EventMetadata)> {
		self.events.as_ref()?.iter().enumerate().find(|(_, event)| event.name == name)
	}
}

impl Decode for ModuleMetadata {
	fn decode<I: Input>(input: &mut I) -> Result<Self, codec::Error> {
		let name = String::decode(input)?;
		let prefix = String::decode(input)?;
		let storage = decode_section(input, &name, "storage")?;
		let calls = decode_section(input, &name, "calls")?;
		let events = decode_section(input, &name, "events")?;

		Ok(ModuleMetadata { name, prefix, storage, calls, events })
	}
}

/// Read a presence byte, then the section it announces.
fn decode_section<T: Decode, I: Input>(
	input: &mut I,
	module: &str,
	section: &str,
) -> Result<Option<Vec<T>>, codec::Error> {
	match input.read_byte()? {
		SECTION_PRESENT => Vec::<T>::decode(input).map(Some),
		SECTION_ABSENT => Ok(None),
		flag => {
			log::warn!(
				target: LOG_TARGET,
				"Module `{module}` has presence byte {flag} for its {section}, ignoring it",
			);
			Ok(None)
		},
	}
}
