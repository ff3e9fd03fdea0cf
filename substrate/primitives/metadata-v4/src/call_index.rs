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

//! Resolution of call names into wire call indices, and lookups over the module list.
//!
//! Calls are addressed by the position of their module among the modules that have a calls
//! section, and by their position within that section. Modules without calls do not take a
//! section index. Events are numbered the same way among modules that have an events section.

use crate::{
	EventMetadata, FunctionMetadata, LookupError, ModuleMetadata, RuntimeMetadataV4,
	StorageEntryMetadata,
};
use codec::{Decode, Encode, MaxEncodedLen};

/// The `(section, method)` pair addressing a call on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Encode, Decode, MaxEncodedLen)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MethodIndex {
	/// Position of the module among the modules that have calls.
	pub section_index: u8,
	/// Position of the call within the module's calls.
	pub method_index: u8,
}

impl RuntimeMetadataV4 {
	/// Modules that have a calls section, paired with their section index.
	pub fn call_sections<'a>(
		&'a self,
	) -> impl Iterator<Item = (usize, &'a ModuleMetadata, &'a [FunctionMetadata])> + 'a {
		self.modules
			.iter()
			.filter_map(|module| module.calls.as_deref().map(|calls| (module, calls)))
			.enumerate()
			.map(|(section, (module, calls))| (section, module, calls))
	}

	/// Modules that have an events section, paired with their section index.
	pub fn event_sections<'a>(
		&'a self,
	) -> impl Iterator<Item = (usize, &'a ModuleMetadata, &'a [EventMetadata])> + 'a {
		self.modules
			.iter()
			.filter_map(|module| module.events.as_deref().map(|events| (module, events)))
			.enumerate()
			.map(|(section, (module, events))| (section, module, events))
	}

	/// Section index of the call bearing module `module`.
	pub fn section_index(&self, module: &str) -> Result<u8, LookupError> {
		self.call_sections()
			.find(|(_, candidate, _)| candidate.name == module)
			.ok_or_else(|| LookupError::ModuleNotFound(module.into()))
			.and_then(|(section, _, _)| to_index(section))
	}

	/// Resolve a `"<Module>.<Call>"` name into its wire index.
	///
	/// `name` holds exactly one `.`. The first module and the first call with a matching name
	/// win.
	pub fn method_index(&self, name: &str) -> Result<MethodIndex, LookupError> {
		let (module, call) = name
			.split_once('.')
			.filter(|(_, call)| !call.contains('.'))
			.ok_or_else(|| LookupError::MalformedCallName(name.into()))?;

		let (section, _, calls) = self
			.call_sections()
			.find(|(_, candidate, _)| candidate.name == module)
			.ok_or_else(|| LookupError::ModuleNotFound(module.into()))?;
		let method = calls.iter().position(|function| function.name == call).ok_or_else(|| {
			LookupError::CallNotFound { module: module.into(), call: call.into() }
		})?;

		Ok(MethodIndex { section_index: to_index(section)?, method_index: to_index(method)? })
	}

	/// The module and call addressed by `index`.
	pub fn call_by_index(
		&self,
		index: MethodIndex,
	) -> Option<(&ModuleMetadata, &FunctionMetadata)> {
		let (_, module, calls) = self.call_sections().nth(index.section_index as usize)?;
		calls.get(index.method_index as usize).map(|call| (module, call))
	}

	/// The module and event addressed by an event section index and an event index.
	pub fn event_by_index(
		&self,
		section: u8,
		event: u8,
	) -> Option<(&ModuleMetadata, &EventMetadata)> {
		let (_, module, events) = self.event_sections().nth(section as usize)?;
		events.get(event as usize).map(|event| (module, event))
	}

	/// Look up a module by name.
	pub fn module(&self, name: &str) -> Option<&ModuleMetadata> {
		self.modules.iter().find(|module| module.name == name)
	}

	/// Look up a storage entry by module storage prefix and entry name.
	pub fn storage_entry(&self, prefix: &str, name: &str) -> Option<&StorageEntryMetadata> {
		self.modules
			.iter()
			.filter(|module| module.prefix == prefix)
			.find_map(|module| module.storage_entry(name))
	}
}

fn to_index(position: usize) -> Result<u8, LookupError> {
	u8::try_from(position).map_err(|_| LookupError::IndexOverflow(position))
}
