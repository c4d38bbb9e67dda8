// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::storage::CRONOS_PARAMS_CONTRACT_STORAGE;
use cosmwasm_std::{Deps, StdError};
use cronos_params_contract_common::{
    CronosParamsContractError, KeyTableResponse, ParamKey, ParamResponse, Params,
    RenderedParamsResponse,
};
use cw_controllers::AdminResponse;

pub fn query_admin(deps: Deps) -> Result<AdminResponse, CronosParamsContractError> {
    CRONOS_PARAMS_CONTRACT_STORAGE
        .contract_admin
        .query_admin(deps)
        .map_err(Into::into)
}

pub fn query_params(deps: Deps) -> Result<Params, CronosParamsContractError> {
    CRONOS_PARAMS_CONTRACT_STORAGE.load_params(deps.storage)
}

pub fn query_param(deps: Deps, key: ParamKey) -> Result<ParamResponse, CronosParamsContractError> {
    let value = CRONOS_PARAMS_CONTRACT_STORAGE.load_param(deps.storage, key)?;
    Ok(ParamResponse { key, value })
}

pub fn query_rendered_params(
    deps: Deps,
) -> Result<RenderedParamsResponse, CronosParamsContractError> {
    let params = CRONOS_PARAMS_CONTRACT_STORAGE.load_params(deps.storage)?;
    let rendered = params.render().map_err(|err| {
        StdError::generic_err(format!("failed to render the parameters: {err}"))
    })?;

    Ok(RenderedParamsResponse { rendered })
}

pub fn query_key_table() -> KeyTableResponse {
    KeyTableResponse {
        entries: CRONOS_PARAMS_CONTRACT_STORAGE.key_table.entries(),
    }
}
