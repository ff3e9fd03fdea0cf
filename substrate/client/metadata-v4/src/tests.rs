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

use super::*;
use assert_matches::assert_matches;
use parking_lot::Mutex;
use serde_json::{json, Value};
use sp_metadata_v4::{FormatError, LookupError, MethodIndex};
use std::{collections::HashMap, sync::Arc};

const METADATA_V4: &str = include_str!("../../../primitives/metadata-v4/res/metadata-v4.hex");

/// Transport answering from canned responses and recording every call.
#[derive(Default)]
struct TestTransport {
	responses: HashMap<&'static str, std::result::Result<Value, TransportError>>,
	calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl TestTransport {
	fn answering(method: &'static str, response: Value) -> Self {
		let mut transport = TestTransport::default();
		transport.responses.insert(method, Ok(response));
		transport
	}

	fn failing(method: &'static str, error: TransportError) -> Self {
		let mut transport = TestTransport::default();
		transport.responses.insert(method, Err(error));
		transport
	}

	fn calls(&self) -> Vec<(String, Vec<Value>)> {
		self.calls.lock().clone()
	}
}

impl RpcTransport for TestTransport {
	fn invoke(
		&self,
		method: &str,
		params: Vec<Value>,
	) -> std::result::Result<Value, TransportError> {
		self.calls.lock().push((method.to_owned(), params));
		self.responses.get(method).cloned().unwrap_or_else(|| {
			Err(TransportError::Call { method: method.into(), reason: "Method not found".into() })
		})
	}
}

fn metadata_state() -> State<TestTransport> {
	State::new(TestTransport::answering(methods::STATE_GET_METADATA, json!(METADATA_V4.trim())))
}

fn block(byte: u8) -> H256 {
	H256::repeat_byte(byte)
}

#[test]
fn fetches_and_decodes_metadata() {
	let state = metadata_state();

	let metadata = state.metadata(None).unwrap();
	assert_eq!(metadata.modules().len(), 8);
	assert_eq!(metadata.modules()[0].name, "system");
	assert_eq!(state.transport().calls(), vec![("state_getMetadata".to_string(), vec![])]);
}

#[test]
fn passes_block_hash_as_hex() {
	let state = metadata_state();

	state.metadata(Some(block(0xab))).unwrap();
	assert_eq!(
		state.transport().calls(),
		vec![("state_getMetadata".to_string(), vec![json!(format!("0x{}", "ab".repeat(32)))])],
	);
}

#[test]
fn caches_metadata_per_block_hash() {
	let state = metadata_state();

	let first = state.metadata(Some(block(1))).unwrap();
	let second = state.metadata(Some(block(1))).unwrap();
	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(state.transport().calls().len(), 1);

	state.metadata(Some(block(2))).unwrap();
	assert_eq!(state.transport().calls().len(), 2);

	// The best block moves, so its metadata is always fetched.
	state.metadata(None).unwrap();
	state.metadata(None).unwrap();
	assert_eq!(state.transport().calls().len(), 4);
}

#[test]
fn cache_can_be_disabled() {
	let transport =
		TestTransport::answering(methods::STATE_GET_METADATA, json!(METADATA_V4.trim()));
	let state = State::with_config(transport, StateConfig { metadata_cache_size: 0 });

	state.metadata(Some(block(1))).unwrap();
	state.metadata(Some(block(1))).unwrap();
	assert_eq!(state.transport().calls().len(), 2);
}

#[test]
fn transport_errors_are_returned_unchanged() {
	let error = TransportError::Call {
		method: methods::STATE_GET_METADATA.into(),
		reason: "UnknownBlock: State already discarded".into(),
	};
	let state = State::new(TestTransport::failing(methods::STATE_GET_METADATA, error.clone()));

	assert_matches!(state.metadata(Some(block(3))), Err(Error::Transport(e)) if e == error);
	// Not retried.
	assert_eq!(state.transport().calls().len(), 1);

	let state = State::new(TestTransport::failing(
		methods::STATE_GET_METADATA,
		TransportError::Connection("connection refused".into()),
	));
	assert_matches!(state.metadata(None), Err(Error::Transport(TransportError::Connection(_))));
}

#[test]
fn malformed_metadata_is_a_format_error() {
	let state =
		State::new(TestTransport::answering(methods::STATE_GET_METADATA, json!("0x00000000")));
	assert_matches!(state.metadata(None), Err(Error::Format(FormatError::BadMagic { got: 0, .. })));

	let state =
		State::new(TestTransport::answering(methods::STATE_GET_METADATA, json!("0x6d65746103")));
	assert_matches!(state.metadata(None), Err(Error::Format(FormatError::UnsupportedVersion(3))));
}

#[test]
fn failed_decoding_is_not_cached() {
	let state =
		State::new(TestTransport::answering(methods::STATE_GET_METADATA, json!("0x6d657461")));

	assert_matches!(state.metadata(Some(block(4))), Err(Error::Format(FormatError::Codec(_))));
	assert_matches!(state.metadata(Some(block(4))), Err(Error::Format(_)));
	assert_eq!(state.transport().calls().len(), 2);
}

#[test]
fn unexpected_responses() {
	let state = State::new(TestTransport::answering(methods::STATE_GET_METADATA, json!("0xzz")));
	assert_matches!(
		state.metadata(None),
		Err(Error::InvalidHex { method: methods::STATE_GET_METADATA, .. })
	);

	let state = State::new(TestTransport::answering(methods::STATE_GET_METADATA, Value::Null));
	assert_matches!(
		state.metadata(None),
		Err(Error::InvalidResponse { method: methods::STATE_GET_METADATA, .. })
	);
}

#[test]
fn resolves_method_index_at_block() {
	let state = metadata_state();

	assert_eq!(
		state.method_index("balances.transfer", Some(block(5))).unwrap(),
		MethodIndex { section_index: 3, method_index: 0 },
	);
	assert_matches!(
		state.method_index("treasury.spend", Some(block(5))),
		Err(Error::Lookup(LookupError::ModuleNotFound(module))) if module == "treasury"
	);
	assert_eq!(state.transport().calls().len(), 1);
}

#[test]
fn reads_storage_values() {
	let state = State::new(TestTransport::answering(
		methods::STATE_GET_STORAGE,
		json!("0x2a00000000000000"),
	));

	let value = state.storage(&[0x26, 0xaa], Some(block(6))).unwrap();
	assert_eq!(value, Some(vec![0x2a, 0, 0, 0, 0, 0, 0, 0]));
	assert_eq!(
		state.transport().calls(),
		vec![(
			"state_getStorage".to_string(),
			vec![json!("0x26aa"), json!(format!("0x{}", "06".repeat(32)))],
		)],
	);

	let state = State::new(TestTransport::answering(methods::STATE_GET_STORAGE, Value::Null));
	assert_eq!(state.storage(&[0x26, 0xaa], None).unwrap(), None);
}

#[test]
fn lists_storage_keys() {
	let state = State::new(TestTransport::answering(
		methods::STATE_GET_KEYS,
		json!(["0x26aa01", "0x26aa02"]),
	));
	assert_eq!(
		state.keys(&[0x26, 0xaa], None).unwrap(),
		vec![vec![0x26, 0xaa, 1], vec![0x26, 0xaa, 2]],
	);

	let state = State::new(TestTransport::answering(methods::STATE_GET_KEYS, json!("0x26aa")));
	assert_matches!(
		state.keys(&[0x26, 0xaa], None),
		Err(Error::InvalidResponse { method: methods::STATE_GET_KEYS, .. })
	);
}

#[test]
fn shared_transport() {
	let transport =
		Arc::new(TestTransport::answering(methods::STATE_GET_METADATA, json!(METADATA_V4.trim())));
	let state = State::new(transport.clone());

	state.metadata(None).unwrap();
	assert_eq!(transport.calls().len(), 1);
}
