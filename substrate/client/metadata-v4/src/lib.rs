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

//! Access to the version 4 runtime metadata of a chain over its state RPC.
//!
//! The node is reached through an [`RpcTransport`], which this crate never implements for a
//! network itself. [`State`] turns transport responses into decoded metadata and call indices:
//!
//! ```ignore
//! let state = State::new(transport);
//! let metadata = state.metadata(Some(block_hash))?;
//! let index = state.method_index("balances.transfer", Some(block_hash))?;
//! ```

#![warn(missing_docs)]

mod error;
mod state;
mod transport;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use primitive_types::H256;
pub use state::{methods, State, StateConfig, DEFAULT_METADATA_CACHE_SIZE};
pub use transport::{RpcTransport, TransportError};

const LOG_TARGET: &str = "metadata-v4";
