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

//! Blocking JSON-RPC transport over HTTP.

use jsonrpsee::{
	core::{
		client::{ClientT, Error as ClientError},
		params::ArrayParams,
	},
	http_client::{HttpClient, HttpClientBuilder},
};
use sc_metadata_v4::{RpcTransport, TransportError};
use serde_json::Value;
use std::time::Duration;
use tokio::runtime::Runtime;

/// [`RpcTransport`] driving a `jsonrpsee` HTTP client on its own current-thread runtime.
pub struct HttpTransport {
	client: HttpClient,
	runtime: Runtime,
}

impl HttpTransport {
	/// Connect to the node at `url`.
	pub fn new(url: &str, request_timeout: Duration) -> anyhow::Result<Self> {
		let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
		let client = {
			let _guard = runtime.enter();
			HttpClientBuilder::default().request_timeout(request_timeout).build(url)?
		};
		Ok(HttpTransport { client, runtime })
	}
}

impl RpcTransport for HttpTransport {
	fn invoke(&self, method: &str, params: Vec<Value>) -> Result<Value, TransportError> {
		let mut rpc_params = ArrayParams::new();
		for param in params {
			rpc_params.insert(param).map_err(|e| TransportError::Call {
				method: method.into(),
				reason: format!("Failed to serialize parameter: {e}"),
			})?;
		}

		self.runtime
			.block_on(self.client.request::<Value, _>(method, rpc_params))
			.map_err(|e| match e {
				ClientError::Call(error) =>
					TransportError::Call { method: method.into(), reason: error.message().into() },
				e @ (ClientError::Transport(_) | ClientError::RequestTimeout) =>
					TransportError::Connection(e.to_string()),
				other => TransportError::Call { method: method.into(), reason: other.to_string() },
			})
	}
}
