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

//! `metadata-inspect`: print version 4 runtime metadata read from a file or a node.

mod cli;
mod http;
mod render;

use anyhow::{anyhow, Context};
use clap::Parser;
use cli::{Cli, Command, SourceParams};
use sc_metadata_v4::State;
use sp_metadata_v4::{decode_metadata, RuntimeMetadataPrefixed};
use std::{sync::Arc, time::Duration};

fn main() -> anyhow::Result<()> {
	let _ = env_logger::try_init_from_env(
		env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
	);

	let cli = Cli::parse();
	let metadata = load(&cli.source)?;
	let v4 = metadata.v4();

	let output = match &cli.command {
		Command::Modules { json: true } => serde_json::to_string_pretty(&*metadata)?,
		Command::Modules { json: false } => render::modules(v4),
		Command::Storage { prefix, item } => render::storage(v4, prefix, item.as_deref())?,
		Command::Calls { module } => render::calls(v4, module.as_deref())?,
		Command::CallIndex { name } => render::call_index(v4, name)?,
		Command::Events { module } => render::events(v4, module.as_deref())?,
	};
	println!("{output}");

	Ok(())
}

fn load(source: &SourceParams) -> anyhow::Result<Arc<RuntimeMetadataPrefixed>> {
	if let Some(path) = &source.file {
		log::info!("Reading metadata from {}", path.display());
		let hex = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read {}", path.display()))?;
		let bytes = array_bytes::hex2bytes(hex.trim())
			.map_err(|e| anyhow!("{} does not hold hex encoded metadata: {e:?}", path.display()))?;
		let metadata = decode_metadata(&bytes)
			.with_context(|| format!("Failed to decode metadata from {}", path.display()))?;
		return Ok(Arc::new(metadata))
	}

	match source.at {
		Some(hash) => log::info!("Fetching metadata from {} at {hash:?}", source.url),
		None => log::info!("Fetching metadata from {} at the best block", source.url),
	}
	let transport =
		http::HttpTransport::new(&source.url, Duration::from_secs(source.request_timeout))?;
	State::new(transport)
		.metadata(source.at)
		.with_context(|| format!("Failed to fetch metadata from {}", source.url))
}
