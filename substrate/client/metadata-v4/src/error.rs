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

//! Error types of the metadata client.

use crate::TransportError;
use sp_metadata_v4::{FormatError, LookupError};

/// Result type of the metadata client.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type of the metadata client.
///
/// Transport failures and malformed metadata are kept apart: the former come from the node or
/// the connection to it, the latter from the bytes the node returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The transport failed to perform the call.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The call succeeded but its result has an unexpected shape.
	#[error("Unexpected response to `{method}`: {reason}")]
	InvalidResponse {
		/// RPC method that was called.
		method: &'static str,
		/// What was wrong with the response.
		reason: String,
	},
	/// The call returned a string that is not valid hex.
	#[error("Invalid hex in response to `{method}`: {reason}")]
	InvalidHex {
		/// RPC method that was called.
		method: &'static str,
		/// Hex decoder error.
		reason: String,
	},
	/// The returned metadata could not be decoded.
	#[error(transparent)]
	Format(#[from] FormatError),
	/// A call name could not be resolved against the metadata.
	#[error(transparent)]
	Lookup(#[from] LookupError),
}
