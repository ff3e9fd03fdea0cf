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

//! Errors of metadata decoding and call resolution.

/// The metadata blob is not a well-formed version 4 metadata.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
	/// The blob does not start with [`META_RESERVED`](crate::META_RESERVED).
	#[error("Invalid metadata magic number {got:#010x}, expected {expected:#010x}")]
	BadMagic {
		/// The magic number every metadata blob starts with.
		expected: u32,
		/// The number found at the start of the blob.
		got: u32,
	},
	/// The version byte is not [`SUPPORTED_VERSION`](crate::SUPPORTED_VERSION).
	#[error("Unsupported metadata version {0}, only version 4 can be decoded")]
	UnsupportedVersion(u8),
	/// A field could not be decoded: the buffer ended early, a string is not valid UTF-8, a
	/// boolean is neither 0 nor 1, or a length prefix cannot be satisfied.
	#[error("Malformed metadata: {0}")]
	Codec(#[from] codec::Error),
	/// The envelope was decoded but bytes remain in the buffer.
	#[error("{0} unexpected trailing bytes after the metadata")]
	TrailingBytes(usize),
}

/// A call name could not be resolved against the metadata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
	/// The name is not of the `<Module>.<Call>` form.
	#[error("Call name `{0}` is not of the form `<Module>.<Call>`")]
	MalformedCallName(String),
	/// No module with this name exposes calls.
	#[error("No module named `{0}` exposes calls")]
	ModuleNotFound(String),
	/// The module exists but has no call with this name.
	#[error("Module `{module}` has no call named `{call}`")]
	CallNotFound {
		/// Module the call was looked up in.
		module: String,
		/// Name of the missing call.
		call: String,
	},
	/// The position of a module or call does not fit into a single byte.
	#[error("Position {0} does not fit into a call index byte")]
	IndexOverflow(usize),
}
