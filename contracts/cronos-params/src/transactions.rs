// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::storage::CRONOS_PARAMS_CONTRACT_STORAGE;
use cosmwasm_std::{DepsMut, MessageInfo, Response};
use cronos_params_contract_common::events::{
    new_param_update_event, new_params_batch_update_event, new_params_replacement_event,
};
use cronos_params_contract_common::{
    CronosParamsContractError, ParamChange, ParamKey, ParamValue, Params,
};

pub fn try_update_contract_admin(
    deps: DepsMut<'_>,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, CronosParamsContractError> {
    let new_admin = deps.api.addr_validate(&new_admin)?;

    let res = CRONOS_PARAMS_CONTRACT_STORAGE
        .contract_admin
        .execute_update_admin(deps, info, Some(new_admin))?;

    Ok(res)
}

pub fn try_update_param(
    deps: DepsMut<'_>,
    info: MessageInfo,
    key: ParamKey,
    value: ParamValue,
) -> Result<Response, CronosParamsContractError> {
    CRONOS_PARAMS_CONTRACT_STORAGE.ensure_is_admin(deps.as_ref(), &info.sender)?;

    let previous = CRONOS_PARAMS_CONTRACT_STORAGE.update_param(deps, key, value.clone())?;

    Ok(Response::new().add_event(new_param_update_event(
        &info.sender,
        key,
        &previous,
        &value,
    )))
}

pub fn try_update_params(
    deps: DepsMut<'_>,
    info: MessageInfo,
    changes: Vec<ParamChange>,
) -> Result<Response, CronosParamsContractError> {
    CRONOS_PARAMS_CONTRACT_STORAGE.ensure_is_admin(deps.as_ref(), &info.sender)?;

    let previous = CRONOS_PARAMS_CONTRACT_STORAGE.update_params_batch(deps, &changes)?;

    let mut response =
        Response::new().add_event(new_params_batch_update_event(&info.sender, &changes));
    for change in changes {
        response = response.add_event(new_param_update_event(
            &info.sender,
            change.key,
            &previous.get(change.key),
            &change.value,
        ))
    }

    Ok(response)
}

pub fn try_replace_params(
    deps: DepsMut<'_>,
    info: MessageInfo,
    params: Params,
) -> Result<Response, CronosParamsContractError> {
    CRONOS_PARAMS_CONTRACT_STORAGE.ensure_is_admin(deps.as_ref(), &info.sender)?;

    CRONOS_PARAMS_CONTRACT_STORAGE.replace_params(deps, &params)?;

    Ok(Response::new().add_event(new_params_replacement_event(&info.sender, &params)))
}
