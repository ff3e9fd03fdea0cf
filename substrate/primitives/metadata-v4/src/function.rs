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

//! Metadata of dispatchable calls and events.

use codec::Decode;

/// A single argument of a dispatchable call.
#[derive(Clone, Debug, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FunctionArgumentMetadata {
	/// Argument name.
	pub name: String,
	/// Name of the argument type, as written in the runtime sources.
	pub ty: String,
}

/// A dispatchable call of a module.
#[derive(Clone, Debug, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FunctionMetadata {
	/// Call name.
	pub name: String,
	/// Call arguments, in order.
	pub arguments: Vec<FunctionArgumentMetadata>,
	/// Documentation lines.
	pub documentation: Vec<String>,
}

impl FunctionMetadata {
	/// Render the call as `name(arg: Type, ...)`.
	pub fn signature(&self) -> String {
		let arguments = self
			.arguments
			.iter()
			.map(|arg| format!("{}: {}", arg.name, arg.ty))
			.collect::<Vec<_>>()
			.join(", ");
		format!("{}({})", self.name, arguments)
	}
}

/// An event a module may deposit.
#[derive(Clone, Debug, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EventMetadata {
	/// Event name.
	pub name: String,
	/// Type names of the event fields.
	pub arguments: Vec<String>,
	/// Documentation lines.
	pub documentation: Vec<String>,
}
