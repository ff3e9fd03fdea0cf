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

//! Command line parameters of `metadata-inspect`.

use clap::{Args, Parser, Subcommand};
use primitive_types::H256;
use std::path::PathBuf;

/// Default JSON-RPC endpoint of a local node.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9944";

#[derive(Debug, Parser)]
#[command(name = "metadata-inspect")]
#[command(
	about = "Inspect version 4 runtime metadata from a file or a running node",
	long_about = None
)]
pub struct Cli {
	#[command(flatten)]
	pub source: SourceParams,

	#[command(subcommand)]
	pub command: Command,
}

/// Where the metadata is read from.
#[derive(Debug, Clone, Args)]
pub struct SourceParams {
	/// File holding the hex encoded metadata, as returned by `state_getMetadata`
	#[arg(long, conflicts_with_all = ["url", "at"])]
	pub file: Option<PathBuf>,

	/// HTTP JSON-RPC endpoint of the node
	#[arg(long, default_value = DEFAULT_RPC_URL)]
	pub url: String,

	/// Hash of the block to read the metadata at. Defaults to the best block
	#[arg(long, value_parser = parse_block_hash)]
	pub at: Option<H256>,

	/// Timeout of a single RPC request, in seconds
	#[arg(long, default_value = "30")]
	pub request_timeout: u64,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
	/// List the runtime modules and the sections they expose
	Modules {
		/// Print the whole decoded metadata as JSON instead
		#[arg(long)]
		json: bool,
	},
	/// Show the storage entries of the module with the given storage prefix
	Storage {
		/// Storage prefix of the module, e.g. `System`
		prefix: String,
		/// Only show this entry
		item: Option<String>,
	},
	/// List the calls with their call indices
	Calls {
		/// Only list the calls of this module
		module: Option<String>,
	},
	/// Resolve `<Module>.<Call>` into its call index
	CallIndex {
		/// Call name, e.g. `balances.transfer`
		name: String,
	},
	/// List the events with their event indices
	Events {
		/// Only list the events of this module
		module: Option<String>,
	},
}

/// Parse a `0x` prefixed 32 byte block hash.
pub fn parse_block_hash(hash: &str) -> Result<H256, String> {
	let bytes = array_bytes::hex2bytes(hash).map_err(|e| format!("Invalid block hash: {e:?}"))?;
	<[u8; 32]>::try_from(bytes.as_slice())
		.map(H256::from)
		.map_err(|_| format!("Block hash must be 32 bytes long, got {}", bytes.len()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;

	#[test]
	fn parses_block_hash() {
		let hash = format!("0x{}", "0f".repeat(32));
		assert_eq!(parse_block_hash(&hash), Ok(H256::repeat_byte(0x0f)));
		assert!(parse_block_hash("0x0f0f").is_err());
		assert!(parse_block_hash("0xnothex").is_err());
	}

	#[test]
	fn parses_commands() {
		let cli =
			Cli::try_parse_from(["metadata-inspect", "call-index", "balances.transfer"]).unwrap();
		assert_eq!(cli.source.url, DEFAULT_RPC_URL);
		assert_eq!(cli.source.request_timeout, 30);
		assert_matches!(cli.command, Command::CallIndex { name } if name == "balances.transfer");

		let cli = Cli::try_parse_from([
			"metadata-inspect",
			"--file",
			"meta.hex",
			"storage",
			"System",
		])
		.unwrap();
		assert_eq!(cli.source.file, Some(PathBuf::from("meta.hex")));
		assert_matches!(cli.command, Command::Storage { prefix, item: None } if prefix == "System");
	}

	#[test]
	fn file_conflicts_with_node_options() {
		assert!(Cli::try_parse_from([
			"metadata-inspect",
			"--file",
			"meta.hex",
			"--url",
			"http://localhost:9944",
			"modules",
		])
		.is_err());
	}
}
