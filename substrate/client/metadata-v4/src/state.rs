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

//! Metadata, storage and keys of a chain state.

use crate::{Error, Result, RpcTransport, LOG_TARGET};
use primitive_types::H256;
use quick_cache::sync::Cache;
use serde_json::Value;
use sp_metadata_v4::{decode_metadata, MethodIndex, RuntimeMetadataPrefixed};
use std::sync::Arc;

/// Names of the RPC methods used by [`State`].
pub mod methods {
	/// Returns the hex encoded runtime metadata at a block.
	pub const STATE_GET_METADATA: &str = "state_getMetadata";
	/// Returns the hex encoded storage value under a key at a block.
	pub const STATE_GET_STORAGE: &str = "state_getStorage";
	/// Returns the storage keys starting with a prefix at a block.
	pub const STATE_GET_KEYS: &str = "state_getKeys";
}

/// Number of decoded metadata kept by default, one per block hash.
pub const DEFAULT_METADATA_CACHE_SIZE: usize = 16;

/// Configuration of a [`State`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateConfig {
	/// Number of block hashes whose decoded metadata is kept. `0` disables the cache.
	pub metadata_cache_size: usize,
}

impl Default for StateConfig {
	fn default() -> Self {
		StateConfig { metadata_cache_size: DEFAULT_METADATA_CACHE_SIZE }
	}
}

/// Chain state accessed through an [`RpcTransport`].
///
/// Decoded metadata is immutable and shared: every caller asking for the metadata of the same
/// block gets the same [`Arc`]. Metadata of the best block (`at == None`) is never cached.
pub struct State<T> {
	transport: T,
	metadata_cache: Option<Cache<H256, Arc<RuntimeMetadataPrefixed>>>,
}

impl<T: RpcTransport> State<T> {
	/// Create a new state client with the default configuration.
	pub fn new(transport: T) -> Self {
		Self::with_config(transport, StateConfig::default())
	}

	/// Create a new state client.
	pub fn with_config(transport: T, config: StateConfig) -> Self {
		let metadata_cache =
			(config.metadata_cache_size > 0).then(|| Cache::new(config.metadata_cache_size));
		State { transport, metadata_cache }
	}

	/// The underlying transport.
	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// Decoded runtime metadata at block `at`, or at the best block.
	pub fn metadata(&self, at: Option<H256>) -> Result<Arc<RuntimeMetadataPrefixed>> {
		let cache = at.and_then(|hash| self.metadata_cache.as_ref().map(|cache| (hash, cache)));
		if let Some((hash, cache)) = cache {
			if let Some(metadata) = cache.get(&hash) {
				log::trace!(target: LOG_TARGET, "Metadata of {hash:?} served from cache");
				return Ok(metadata)
			}
		}

		let response = self.invoke(methods::STATE_GET_METADATA, block_params(at))?;
		let bytes = hex_value(methods::STATE_GET_METADATA, &response)?;
		let metadata = Arc::new(decode_metadata(&bytes)?);
		log::debug!(
			target: LOG_TARGET,
			"Fetched metadata at {:?}: {} modules",
			at,
			metadata.modules().len(),
		);

		if let Some((hash, cache)) = cache {
			cache.insert(hash, metadata.clone());
		}

		Ok(metadata)
	}

	/// Resolve a `"<Module>.<Call>"` name against the metadata at block `at`.
	pub fn method_index(&self, call: &str, at: Option<H256>) -> Result<MethodIndex> {
		Ok(self.metadata(at)?.v4().method_index(call)?)
	}

	/// Raw storage value under `key` at block `at`. `None` if nothing is stored.
	pub fn storage(&self, key: &[u8], at: Option<H256>) -> Result<Option<Vec<u8>>> {
		let mut params = vec![Value::String(array_bytes::bytes2hex("0x", key))];
		params.extend(block_params(at));

		match self.invoke(methods::STATE_GET_STORAGE, params)? {
			Value::Null => Ok(None),
			value => hex_value(methods::STATE_GET_STORAGE, &value).map(Some),
		}
	}

	/// Storage keys starting with `prefix` at block `at`.
	pub fn keys(&self, prefix: &[u8], at: Option<H256>) -> Result<Vec<Vec<u8>>> {
		let mut params = vec![Value::String(array_bytes::bytes2hex("0x", prefix))];
		params.extend(block_params(at));

		match self.invoke(methods::STATE_GET_KEYS, params)? {
			Value::Array(keys) =>
				keys.iter().map(|key| hex_value(methods::STATE_GET_KEYS, key)).collect(),
			other => Err(Error::InvalidResponse {
				method: methods::STATE_GET_KEYS,
				reason: format!("expected a list of keys, got {other}"),
			}),
		}
	}

	fn invoke(&self, method: &'static str, params: Vec<Value>) -> Result<Value> {
		log::trace!(target: LOG_TARGET, "Calling `{method}` with {params:?}");
		Ok(self.transport.invoke(method, params)?)
	}
}

fn block_params(at: Option<H256>) -> Vec<Value> {
	at.into_iter()
		.map(|hash| Value::String(array_bytes::bytes2hex("0x", hash.as_bytes())))
		.collect()
}

fn hex_value(method: &'static str, value: &Value) -> Result<Vec<u8>> {
	let hex = value.as_str().ok_or_else(|| Error::InvalidResponse {
		method,
		reason: format!("expected a hex string, got {value}"),
	})?;
	array_bytes::hex2bytes(hex).map_err(|e| Error::InvalidHex { method, reason: format!("{e:?}") })
}
