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

//! The JSON-RPC capability the client is built on.

use serde_json::Value;
use std::sync::Arc;

/// Failure reported by an [`RpcTransport`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
	/// The node could not be reached.
	#[error("Failed to reach the node: {0}")]
	Connection(String),
	/// The node answered the call with an error, e.g. for a block whose state was discarded.
	#[error("RPC call `{method}` failed: {reason}")]
	Call {
		/// RPC method that was called.
		method: String,
		/// Error reported by the node.
		reason: String,
	},
}

/// Performs blocking JSON-RPC calls against a node.
///
/// Implementations own their timeout and retry policy; the client never retries.
pub trait RpcTransport: Send + Sync {
	/// Call `method` with positional `params` and return the JSON `result` field.
	fn invoke(&self, method: &str, params: Vec<Value>) -> Result<Value, TransportError>;
}

impl<T: RpcTransport + ?Sized> RpcTransport for Arc<T> {
	fn invoke(&self, method: &str, params: Vec<Value>) -> Result<Value, TransportError> {
		(**self).invoke(method, params)
	}
}

impl<T: RpcTransport + ?Sized> RpcTransport for Box<T> {
	fn invoke(&self, method: &str, params: Vec<Value>) -> Result<Value, TransportError> {
		(**self).invoke(method, params)
	}
}
