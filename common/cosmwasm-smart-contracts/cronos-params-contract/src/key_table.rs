// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::CronosParamsContractError;
use crate::params::{ParamField, Params};
use crate::types::{KeyTableEntry, ParamChange, ParamKey, ParamKind, ParamValue};
use crate::validation::{
    validate_is_address, validate_is_bool, validate_is_ibc_denom, validate_is_uint64, Validator,
};
use cosmwasm_std::Api;
use std::collections::BTreeSet;

const KEY_TABLE_SIZE: usize = ParamKey::ALL.len();

// order in which `Params::validate` checks individual parameters.
// it determines which error is reported when multiple parameters are invalid
const VALIDATION_ORDER: [ParamKey; KEY_TABLE_SIZE] = [
    ParamKey::IbcTimeout,
    ParamKey::IbcCroDenom,
    ParamKey::CronosAdmin,
    ParamKey::EnableAutoDeployment,
    ParamKey::MaxCallbackGas,
];

type FieldAccessor = for<'a> fn(&'a mut Params) -> ParamField<'a>;

fn ibc_cro_denom_field(params: &mut Params) -> ParamField<'_> {
    ParamField::String(&mut params.ibc_cro_denom)
}

fn ibc_timeout_field(params: &mut Params) -> ParamField<'_> {
    ParamField::Uint64(&mut params.ibc_timeout)
}

fn cronos_admin_field(params: &mut Params) -> ParamField<'_> {
    ParamField::String(&mut params.cronos_admin)
}

fn enable_auto_deployment_field(params: &mut Params) -> ParamField<'_> {
    ParamField::Bool(&mut params.enable_auto_deployment)
}

fn max_callback_gas_field(params: &mut Params) -> ParamField<'_> {
    ParamField::Uint64(&mut params.max_callback_gas)
}

/// Binds a parameter key to the location of its value within [`Params`] and to its validator.
#[derive(Clone, Copy)]
pub struct ParamSetPair {
    pub key: ParamKey,
    pub validator: Validator,
    location: FieldAccessor,
}

impl ParamSetPair {
    pub const fn new(key: ParamKey, location: FieldAccessor, validator: Validator) -> Self {
        ParamSetPair {
            key,
            validator,
            location,
        }
    }

    pub const fn kind(&self) -> ParamKind {
        self.key.kind()
    }

    pub fn validate(
        &self,
        api: &dyn Api,
        value: &ParamValue,
    ) -> Result<(), CronosParamsContractError> {
        (self.validator)(api, value)
    }

    /// Writes the value into the bound field of the params without running the validator.
    /// Meant for values that have already been validated, e.g. the ones read back from the storage.
    pub fn set(
        &self,
        params: &mut Params,
        value: ParamValue,
    ) -> Result<(), CronosParamsContractError> {
        (self.location)(params).assign(value)
    }

    /// Validates the value and only if it's correct, writes it into the bound field of the params.
    pub fn apply(
        &self,
        api: &dyn Api,
        params: &mut Params,
        value: ParamValue,
    ) -> Result<(), CronosParamsContractError> {
        self.validate(api, &value)?;
        self.set(params, value)
    }
}

impl std::fmt::Debug for ParamSetPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamSetPair")
            .field("key", &self.key)
            .field("kind", &self.kind())
            .finish_non_exhaustive()
    }
}

/// Immutable registry of all parameters of the module.
#[derive(Debug, Clone, Copy)]
pub struct KeyTable {
    pairs: [ParamSetPair; KEY_TABLE_SIZE],
}

impl Default for KeyTable {
    fn default() -> Self {
        KeyTable::new()
    }
}

impl KeyTable {
    pub const fn new() -> Self {
        KeyTable {
            pairs: [
                ParamSetPair::new(
                    ParamKey::IbcCroDenom,
                    ibc_cro_denom_field,
                    validate_is_ibc_denom,
                ),
                ParamSetPair::new(ParamKey::IbcTimeout, ibc_timeout_field, validate_is_uint64),
                ParamSetPair::new(
                    ParamKey::CronosAdmin,
                    cronos_admin_field,
                    validate_is_address,
                ),
                ParamSetPair::new(
                    ParamKey::EnableAutoDeployment,
                    enable_auto_deployment_field,
                    validate_is_bool,
                ),
                ParamSetPair::new(
                    ParamKey::MaxCallbackGas,
                    max_callback_gas_field,
                    validate_is_uint64,
                ),
            ],
        }
    }

    pub fn pairs(&self) -> &[ParamSetPair] {
        &self.pairs
    }

    pub fn keys(&self) -> impl Iterator<Item = ParamKey> + '_ {
        self.pairs.iter().map(|pair| pair.key)
    }

    pub fn entries(&self) -> Vec<KeyTableEntry> {
        self.pairs
            .iter()
            .map(|pair| KeyTableEntry {
                key: pair.key,
                store_key: pair.key.store_key().to_string(),
                kind: pair.kind(),
            })
            .collect()
    }

    pub fn pair(&self, key: ParamKey) -> Result<&ParamSetPair, CronosParamsContractError> {
        self.pairs
            .iter()
            .find(|pair| pair.key == key)
            .ok_or_else(|| CronosParamsContractError::UnknownParameterKey {
                key: key.to_string(),
            })
    }

    pub fn pair_by_store_key(
        &self,
        raw: &[u8],
    ) -> Result<&ParamSetPair, CronosParamsContractError> {
        self.pair(ParamKey::from_store_key(raw)?)
    }

    pub fn validate_change(
        &self,
        api: &dyn Api,
        key: ParamKey,
        value: &ParamValue,
    ) -> Result<(), CronosParamsContractError> {
        self.pair(key)?.validate(api, value)
    }

    pub fn validate_params(
        &self,
        api: &dyn Api,
        params: &Params,
    ) -> Result<(), CronosParamsContractError> {
        for key in VALIDATION_ORDER {
            self.validate_change(api, key, &params.get(key))?;
        }
        Ok(())
    }

    /// Applies a single change to the params. On failure the params are left untouched.
    pub fn apply_change(
        &self,
        api: &dyn Api,
        params: &mut Params,
        change: ParamChange,
    ) -> Result<(), CronosParamsContractError> {
        self.pair(change.key)?.apply(api, params, change.value)
    }

    /// Applies all the changes on a copy of the provided params and returns the result
    /// only if every single one of them has been accepted.
    pub fn apply_changes(
        &self,
        api: &dyn Api,
        params: &Params,
        changes: &[ParamChange],
    ) -> Result<Params, CronosParamsContractError> {
        if changes.is_empty() {
            return Err(CronosParamsContractError::EmptyParamChanges);
        }

        let mut seen = BTreeSet::new();
        let mut updated = params.clone();
        for change in changes {
            if !seen.insert(change.key) {
                return Err(CronosParamsContractError::DuplicateParamChange {
                    key: change.key,
                });
            }
            self.apply_change(api, &mut updated, change.clone())?;
        }

        Ok(updated)
    }
}
