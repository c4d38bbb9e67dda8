// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use cosmwasm_std::{Addr, Deps, DepsMut, StdResult, Storage};
use cronos_params_contract_common::constants::storage_keys;
use cronos_params_contract_common::{
    CronosParamsContractError, KeyTable, ParamChange, ParamKey, ParamKind, ParamValue, Params,
};
use cw_controllers::Admin;
use cw_storage_plus::Item;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const CRONOS_PARAMS_CONTRACT_STORAGE: CronosParamsStorage = CronosParamsStorage::new();

pub struct CronosParamsStorage {
    /// Account allowed to apply governance updates of the parameters.
    pub(crate) contract_admin: Admin,

    pub(crate) key_table: KeyTable,
}

// each parameter lives in its own slot, keyed by its store key
fn param_slot<T>(key: ParamKey) -> Item<T>
where
    T: Serialize + DeserializeOwned,
{
    Item::new(key.store_key())
}

impl CronosParamsStorage {
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        CronosParamsStorage {
            contract_admin: Admin::new(storage_keys::CONTRACT_ADMIN),
            key_table: KeyTable::new(),
        }
    }

    pub fn initialise(
        &self,
        mut deps: DepsMut,
        admin: Addr,
        params: &Params,
    ) -> Result<(), CronosParamsContractError> {
        params.validate(deps.api)?;

        self.contract_admin.set(deps.branch(), Some(admin))?;
        self.save_params(deps.storage, params)
    }

    pub fn ensure_is_admin(
        &self,
        deps: Deps,
        addr: &Addr,
    ) -> Result<(), CronosParamsContractError> {
        self.contract_admin
            .assert_admin(deps, addr)
            .map_err(Into::into)
    }

    // callers must ensure the value has passed the validator of the key
    fn save_value(
        &self,
        storage: &mut dyn Storage,
        key: ParamKey,
        value: &ParamValue,
    ) -> StdResult<()> {
        match value {
            ParamValue::String(value) => param_slot(key).save(storage, value),
            ParamValue::Uint64(value) => param_slot(key).save(storage, value),
            ParamValue::Bool(value) => param_slot(key).save(storage, value),
        }
    }

    fn save_params(
        &self,
        storage: &mut dyn Storage,
        params: &Params,
    ) -> Result<(), CronosParamsContractError> {
        for key in self.key_table.keys() {
            self.save_value(storage, key, &params.get(key))?;
        }
        Ok(())
    }

    pub fn load_param(
        &self,
        storage: &dyn Storage,
        key: ParamKey,
    ) -> Result<ParamValue, CronosParamsContractError> {
        let value = match key.kind() {
            ParamKind::String => ParamValue::String(param_slot(key).load(storage)?),
            ParamKind::Uint64 => ParamValue::Uint64(param_slot(key).load(storage)?),
            ParamKind::Bool => ParamValue::Bool(param_slot(key).load(storage)?),
        };
        Ok(value)
    }

    /// Reads the full parameter set. The values are not validated as they had to pass validation
    /// before they were ever written.
    pub fn load_params(&self, storage: &dyn Storage) -> Result<Params, CronosParamsContractError> {
        // every single field is overwritten with the stored value
        let mut params = Params::default();
        for pair in self.key_table.pairs() {
            pair.set(&mut params, self.load_param(storage, pair.key)?)?;
        }
        Ok(params)
    }

    /// Validates and writes a single parameter, returning its previous value.
    pub fn update_param(
        &self,
        deps: DepsMut,
        key: ParamKey,
        value: ParamValue,
    ) -> Result<ParamValue, CronosParamsContractError> {
        self.key_table.validate_change(deps.api, key, &value)?;

        let previous = self.load_param(deps.storage, key)?;
        self.save_value(deps.storage, key, &value)?;
        Ok(previous)
    }

    /// Validates all the changes and only if every single one of them is accepted,
    /// writes them to the storage. Returns the parameters from before the update.
    pub fn update_params_batch(
        &self,
        deps: DepsMut,
        changes: &[ParamChange],
    ) -> Result<Params, CronosParamsContractError> {
        let previous = self.load_params(deps.storage)?;
        let updated = self.key_table.apply_changes(deps.api, &previous, changes)?;

        for change in changes {
            self.save_value(deps.storage, change.key, &updated.get(change.key))?;
        }
        Ok(previous)
    }

    /// Validates the whole new set and only if it's valid, replaces the current one.
    pub fn replace_params(
        &self,
        deps: DepsMut,
        params: &Params,
    ) -> Result<(), CronosParamsContractError> {
        params.validate(deps.api)?;
        self.save_params(deps.storage, params)
    }
}
