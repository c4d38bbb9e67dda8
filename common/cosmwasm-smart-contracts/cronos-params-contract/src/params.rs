// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::constants::{
    IBC_CRO_DENOM_DEFAULT_VALUE, IBC_TIMEOUT_DEFAULT_VALUE, MAX_CALLBACK_GAS_DEFAULT_VALUE,
};
use crate::error::CronosParamsContractError;
use crate::key_table::KeyTable;
use crate::types::{ParamKey, ParamKind, ParamValue};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Api;
use std::fmt::{Display, Formatter};

/// Parameters of the cronos module.
///
/// Construction never validates the values: call [`Params::validate`] before putting the set
/// to use.
#[cw_serde]
#[derive(Eq)]
pub struct Params {
    pub ibc_cro_denom: String,

    /// Timeout of outgoing ibc transfers, in nanoseconds.
    pub ibc_timeout: u64,

    /// Optional address of the module administrator. Empty string means it's unset.
    pub cronos_admin: String,

    pub enable_auto_deployment: bool,

    pub max_callback_gas: u64,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            ibc_cro_denom: IBC_CRO_DENOM_DEFAULT_VALUE.to_string(),
            ibc_timeout: IBC_TIMEOUT_DEFAULT_VALUE,
            cronos_admin: String::new(),
            enable_auto_deployment: false,
            max_callback_gas: MAX_CALLBACK_GAS_DEFAULT_VALUE,
        }
    }
}

impl Params {
    pub fn new(
        ibc_cro_denom: impl Into<String>,
        ibc_timeout: u64,
        cronos_admin: impl Into<String>,
        enable_auto_deployment: bool,
        max_callback_gas: u64,
    ) -> Self {
        Params {
            ibc_cro_denom: ibc_cro_denom.into(),
            ibc_timeout,
            cronos_admin: cronos_admin.into(),
            enable_auto_deployment,
            max_callback_gas,
        }
    }

    /// Validates every parameter and returns the first encountered failure.
    pub fn validate(&self, api: &dyn Api) -> Result<(), CronosParamsContractError> {
        KeyTable::new().validate_params(api, self)
    }

    pub fn get(&self, key: ParamKey) -> ParamValue {
        match key {
            ParamKey::IbcCroDenom => ParamValue::String(self.ibc_cro_denom.clone()),
            ParamKey::IbcTimeout => ParamValue::Uint64(self.ibc_timeout),
            ParamKey::CronosAdmin => ParamValue::String(self.cronos_admin.clone()),
            ParamKey::EnableAutoDeployment => ParamValue::Bool(self.enable_auto_deployment),
            ParamKey::MaxCallbackGas => ParamValue::Uint64(self.max_callback_gas),
        }
    }

    /// Human-readable yaml representation of the parameters.
    /// It is only meant for display purposes and is never parsed back.
    pub fn render(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl Display for Params {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rendered = self.render().map_err(|_| std::fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// Mutable handle to a single field of [`Params`].
#[derive(Debug)]
pub enum ParamField<'a> {
    String(&'a mut String),
    Uint64(&'a mut u64),
    Bool(&'a mut bool),
}

impl ParamField<'_> {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamField::String(_) => ParamKind::String,
            ParamField::Uint64(_) => ParamKind::Uint64,
            ParamField::Bool(_) => ParamKind::Bool,
        }
    }

    /// Overwrites the field if the kind of the value matches, otherwise leaves it untouched.
    pub fn assign(self, value: ParamValue) -> Result<(), CronosParamsContractError> {
        match (self, value) {
            (ParamField::String(field), ParamValue::String(value)) => *field = value,
            (ParamField::Uint64(field), ParamValue::Uint64(value)) => *field = value,
            (ParamField::Bool(field), ParamValue::Bool(value)) => *field = value,
            (field, value) => {
                return Err(CronosParamsContractError::InvalidParameterType {
                    expected: field.kind(),
                    received: value.kind(),
                })
            }
        }
        Ok(())
    }
}
