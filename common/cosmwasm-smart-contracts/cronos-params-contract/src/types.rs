// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::constants::storage_keys;
use crate::error::CronosParamsContractError;
use cosmwasm_schema::cw_serde;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Identifier of a single parameter of the [`Params`](crate::Params) set.
#[cw_serde]
#[derive(Copy, Eq, Hash, PartialOrd, Ord)]
pub enum ParamKey {
    IbcCroDenom,
    IbcTimeout,
    CronosAdmin,
    EnableAutoDeployment,
    MaxCallbackGas,
}

impl ParamKey {
    pub const ALL: [ParamKey; 5] = [
        ParamKey::IbcCroDenom,
        ParamKey::IbcTimeout,
        ParamKey::CronosAdmin,
        ParamKey::EnableAutoDeployment,
        ParamKey::MaxCallbackGas,
    ];

    /// Key of the storage slot holding the value of this parameter.
    pub const fn store_key(&self) -> &'static str {
        match self {
            ParamKey::IbcCroDenom => storage_keys::IBC_CRO_DENOM,
            ParamKey::IbcTimeout => storage_keys::IBC_TIMEOUT,
            ParamKey::CronosAdmin => storage_keys::CRONOS_ADMIN,
            ParamKey::EnableAutoDeployment => storage_keys::ENABLE_AUTO_DEPLOYMENT,
            ParamKey::MaxCallbackGas => storage_keys::MAX_CALLBACK_GAS,
        }
    }

    pub const fn as_bytes(&self) -> &'static [u8] {
        self.store_key().as_bytes()
    }

    pub const fn kind(&self) -> ParamKind {
        match self {
            ParamKey::IbcCroDenom | ParamKey::CronosAdmin => ParamKind::String,
            ParamKey::IbcTimeout | ParamKey::MaxCallbackGas => ParamKind::Uint64,
            ParamKey::EnableAutoDeployment => ParamKind::Bool,
        }
    }

    pub fn from_store_key(raw: &[u8]) -> Result<Self, CronosParamsContractError> {
        ParamKey::ALL
            .into_iter()
            .find(|key| key.as_bytes() == raw)
            .ok_or_else(|| CronosParamsContractError::UnknownParameterKey {
                key: String::from_utf8_lossy(raw).into_owned(),
            })
    }
}

impl FromStr for ParamKey {
    type Err = CronosParamsContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamKey::from_store_key(s.as_bytes())
    }
}

impl Display for ParamKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.store_key())
    }
}

#[cw_serde]
#[derive(Copy, Eq)]
pub enum ParamKind {
    String,
    Uint64,
    Bool,
}

impl Display for ParamKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamKind::String => write!(f, "string"),
            ParamKind::Uint64 => write!(f, "uint64"),
            ParamKind::Bool => write!(f, "bool"),
        }
    }
}

/// Untyped parameter value as received from outside the contract, e.g. from a governance proposal.
#[cw_serde]
#[derive(Eq)]
pub enum ParamValue {
    String(String),
    Uint64(u64),
    Bool(bool),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::String(_) => ParamKind::String,
            ParamValue::Uint64(_) => ParamKind::Uint64,
            ParamValue::Bool(_) => ParamKind::Bool,
        }
    }

    fn type_mismatch(&self, expected: ParamKind) -> CronosParamsContractError {
        CronosParamsContractError::InvalidParameterType {
            expected,
            received: self.kind(),
        }
    }

    pub fn as_string(&self) -> Result<&str, CronosParamsContractError> {
        match self {
            ParamValue::String(value) => Ok(value.as_str()),
            _ => Err(self.type_mismatch(ParamKind::String)),
        }
    }

    pub fn as_uint64(&self) -> Result<u64, CronosParamsContractError> {
        match self {
            ParamValue::Uint64(value) => Ok(*value),
            _ => Err(self.type_mismatch(ParamKind::Uint64)),
        }
    }

    pub fn as_bool(&self) -> Result<bool, CronosParamsContractError> {
        match self {
            ParamValue::Bool(value) => Ok(*value),
            _ => Err(self.type_mismatch(ParamKind::Bool)),
        }
    }
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::String(value) => write!(f, "{value}"),
            ParamValue::Uint64(value) => write!(f, "{value}"),
            ParamValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Uint64(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// A single entry of a governance update.
#[cw_serde]
pub struct ParamChange {
    pub key: ParamKey,
    pub value: ParamValue,
}

impl ParamChange {
    pub fn new(key: ParamKey, value: impl Into<ParamValue>) -> Self {
        ParamChange {
            key,
            value: value.into(),
        }
    }
}

#[cw_serde]
pub struct ParamResponse {
    pub key: ParamKey,
    pub value: ParamValue,
}

#[cw_serde]
pub struct RenderedParamsResponse {
    pub rendered: String,
}

#[cw_serde]
pub struct KeyTableEntry {
    pub key: ParamKey,
    pub store_key: String,
    pub kind: ParamKind,
}

#[cw_serde]
pub struct KeyTableResponse {
    pub entries: Vec<KeyTableEntry>,
}
