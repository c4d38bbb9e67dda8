// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod constants;
pub mod error;
pub mod events;
pub mod key_table;
pub mod msg;
pub mod params;
pub mod types;
pub mod validation;

pub use error::CronosParamsContractError;
pub use key_table::{KeyTable, ParamSetPair};
pub use msg::*;
pub use params::{ParamField, Params};
pub use types::*;
