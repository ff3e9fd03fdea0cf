// This file is part of Substrate.

// Copyright (C) Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Human readable rendering of decoded metadata.

use anyhow::{anyhow, bail};
use codec::Encode;
use sp_metadata_v4::{LookupError, RuntimeMetadataV4, StorageEntryMetadata, StorageEntryType};

fn section_len<T>(section: &Option<Vec<T>>) -> String {
	section.as_ref().map_or_else(|| "-".into(), |items| items.len().to_string())
}

fn documentation(lines: &[String]) -> impl Iterator<Item = String> + '_ {
	lines.iter().map(|line| format!("\t{}", line.trim_end()))
}

/// One line per module with the size of each section, `-` for absent sections.
pub fn modules(metadata: &RuntimeMetadataV4) -> String {
	metadata
		.modules
		.iter()
		.enumerate()
		.map(|(position, module)| {
			format!(
				"{position:>3} {} (prefix `{}`): storage {}, calls {}, events {}",
				module.name,
				module.prefix,
				section_len(&module.storage),
				section_len(&module.calls),
				section_len(&module.events),
			)
		})
		.collect::<Vec<_>>()
		.join("\n")
}

fn describe_entry(entry: &StorageEntryMetadata) -> String {
	let shape = match &entry.ty {
		StorageEntryType::Plain(ty) => ty.clone(),
		StorageEntryType::Map(map) => format!(
			"map {} => {} (hasher {}{})",
			map.key,
			map.value,
			map.hasher,
			if map.is_linked { ", linked" } else { "" },
		),
		StorageEntryType::DoubleMap { tag, double_map } => format!(
			"double map ({}, {}) => {} (hasher {}, second key hasher {}, tag {tag})",
			double_map.key1,
			double_map.key2,
			double_map.value,
			double_map.hasher,
			double_map.key2_hasher,
		),
	};
	format!(
		"{}: {shape} [modifier {}, fallback {}]",
		entry.name,
		entry.modifier,
		array_bytes::bytes2hex("0x", &entry.fallback),
	)
}

/// Storage entries of the modules with storage prefix `prefix`, or only the entry `item`.
pub fn storage(
	metadata: &RuntimeMetadataV4,
	prefix: &str,
	item: Option<&str>,
) -> anyhow::Result<String> {
	let modules =
		metadata.modules.iter().filter(|module| module.prefix == prefix).collect::<Vec<_>>();
	if modules.is_empty() {
		bail!("No module has the storage prefix `{prefix}`");
	}

	let mut lines = Vec::new();
	for entry in modules.iter().filter_map(|module| module.storage.as_ref()).flatten() {
		if item.map_or(true, |item| item == entry.name) {
			lines.push(describe_entry(entry));
			lines.extend(documentation(&entry.documentation));
		}
	}

	match (item, lines.is_empty()) {
		(Some(item), true) => Err(anyhow!("`{prefix}` has no storage entry `{item}`")),
		_ => Ok(lines.join("\n")),
	}
}

/// Calls with their `section.method` index, optionally restricted to one module.
pub fn calls(metadata: &RuntimeMetadataV4, module: Option<&str>) -> Result<String, LookupError> {
	let mut lines = Vec::new();
	let mut found = false;
	for (section, candidate, calls) in metadata.call_sections() {
		if module.map_or(false, |module| module != candidate.name) {
			continue
		}
		found = true;
		for (method, call) in calls.iter().enumerate() {
			lines.push(format!("[{section}.{method}] {}.{}", candidate.name, call.signature()));
		}
	}

	match module {
		Some(module) if !found => Err(LookupError::ModuleNotFound(module.into())),
		_ => Ok(lines.join("\n")),
	}
}

/// Call index of `name` and its wire encoding.
pub fn call_index(metadata: &RuntimeMetadataV4, name: &str) -> Result<String, LookupError> {
	let index = metadata.method_index(name)?;
	Ok(format!(
		"{name}: section {}, method {} ({})",
		index.section_index,
		index.method_index,
		array_bytes::bytes2hex("0x", index.encode()),
	))
}

/// Events with their `section.event` index, optionally restricted to one module.
pub fn events(metadata: &RuntimeMetadataV4, module: Option<&str>) -> anyhow::Result<String> {
	if let Some(module) = module {
		if metadata.module(module).map_or(true, |candidate| candidate.events.is_none()) {
			bail!("No module named `{module}` has events");
		}
	}

	let lines = metadata
		.event_sections()
		.filter(|(_, candidate, _)| module.map_or(true, |module| module == candidate.name))
		.flat_map(|(section, candidate, events)| {
			events.iter().enumerate().map(move |(position, event)| {
				format!(
					"[{section}.{position}] {}.{}({})",
					candidate.name,
					event.name,
					event.arguments.join(", "),
				)
			})
		})
		.collect::<Vec<_>>();

	Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;
	use sp_metadata_v4::{decode_metadata, RuntimeMetadataPrefixed};

	fn fixture() -> RuntimeMetadataPrefixed {
		let hex = include_str!("../../../../primitives/metadata-v4/res/metadata-v4.hex");
		decode_metadata(&array_bytes::hex2bytes(hex.trim()).unwrap()).unwrap()
	}

	#[test]
	fn lists_modules() {
		let metadata = fixture();
		let output = modules(metadata.v4());
		let lines = output.lines().collect::<Vec<_>>();

		assert_eq!(lines.len(), 8);
		assert_eq!(lines[0], "  0 system (prefix `System`): storage 11, calls -, events 2");
		assert_eq!(lines[3], "  3 aura (prefix ``): storage -, calls -, events -");
		assert_eq!(lines[4], "  4 indices (prefix `Indices`): storage 2, calls 0, events 1");
	}

	#[test]
	fn shows_storage_entries() {
		let metadata = fixture();

		let output = storage(metadata.v4(), "System", Some("AccountNonce")).unwrap();
		assert_eq!(
			output,
			"AccountNonce: map T::AccountId => T::Index (hasher 1) \
			 [modifier 1, fallback 0x0000000000000000]\n\t Extrinsics nonce for accounts.",
		);

		let output = storage(metadata.v4(), "Timestamp", None).unwrap();
		assert!(output.starts_with("Now: T::Moment [modifier 1, fallback 0x0000000000000000]"));

		assert!(storage(metadata.v4(), "Treasury", None).is_err());
		assert!(storage(metadata.v4(), "System", Some("Missing")).is_err());
	}

	#[test]
	fn lists_calls_with_indices() {
		let metadata = fixture();

		let output = calls(metadata.v4(), Some("sudo")).unwrap();
		assert_eq!(
			output,
			"[4.0] sudo.sudo(proposal: Box<T::Proposal>)\n\
			 [4.1] sudo.set_key(new: <T::Lookup as StaticLookup>::Source)",
		);
		assert_eq!(calls(metadata.v4(), None).unwrap().lines().count(), 13);
		assert_eq!(calls(metadata.v4(), Some("indices")).unwrap(), "");
		assert_matches!(calls(metadata.v4(), Some("system")), Err(LookupError::ModuleNotFound(_)));
	}

	#[test]
	fn resolves_call_index() {
		let metadata = fixture();

		assert_eq!(
			call_index(metadata.v4(), "consensus.remark").unwrap(),
			"consensus.remark: section 1, method 2 (0x0102)",
		);
		assert_matches!(
			call_index(metadata.v4(), "consensus.missing"),
			Err(LookupError::CallNotFound { .. })
		);
	}

	#[test]
	fn lists_events_with_indices() {
		let metadata = fixture();

		assert_eq!(
			events(metadata.v4(), Some("sudo")).unwrap(),
			"[3.0] sudo.Sudid(bool)\n[3.1] sudo.KeyChanged(AccountId)",
		);
		assert!(events(metadata.v4(), Some("timestamp")).is_err());
	}
}
