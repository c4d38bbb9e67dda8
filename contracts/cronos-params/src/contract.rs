// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::queries::{
    query_admin, query_key_table, query_param, query_params, query_rendered_params,
};
use crate::storage::CRONOS_PARAMS_CONTRACT_STORAGE;
use crate::transactions::{
    try_replace_params, try_update_contract_admin, try_update_param, try_update_params,
};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
};
use cronos_params_contract_common::events::new_instantiation_event;
use cronos_params_contract_common::{
    CronosParamsContractError, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg,
};

const CONTRACT_NAME: &str = "crate:cronos-params-contract";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut<'_>,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, CronosParamsContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let params = msg.params.unwrap_or_default();
    CRONOS_PARAMS_CONTRACT_STORAGE.initialise(deps, info.sender.clone(), &params)?;

    Ok(Response::new().add_event(new_instantiation_event(&info.sender, &params)))
}

#[entry_point]
pub fn execute(
    deps: DepsMut<'_>,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, CronosParamsContractError> {
    match msg {
        ExecuteMsg::UpdateAdmin { admin } => try_update_contract_admin(deps, info, admin),
        ExecuteMsg::UpdateParam { key, value } => try_update_param(deps, info, key, value),
        ExecuteMsg::UpdateParams { changes } => try_update_params(deps, info, changes),
        ExecuteMsg::ReplaceParams { params } => try_replace_params(deps, info, params),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, CronosParamsContractError> {
    match msg {
        QueryMsg::Admin {} => Ok(to_json_binary(&query_admin(deps)?)?),
        QueryMsg::Params {} => Ok(to_json_binary(&query_params(deps)?)?),
        QueryMsg::Param { key } => Ok(to_json_binary(&query_param(deps, key)?)?),
        QueryMsg::RenderedParams {} => Ok(to_json_binary(&query_rendered_params(deps)?)?),
        QueryMsg::KeyTable {} => Ok(to_json_binary(&query_key_table())?),
    }
}

#[entry_point]
pub fn migrate(
    deps: DepsMut<'_>,
    _env: Env,
    _msg: MigrateMsg,
) -> Result<Response, CronosParamsContractError> {
    cw2::ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new())
}
