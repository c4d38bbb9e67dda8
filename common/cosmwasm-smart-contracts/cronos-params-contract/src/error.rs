// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::types::{ParamKey, ParamKind};
use cosmwasm_std::StdError;
use cw_controllers::AdminError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CronosParamsContractError {
    #[error(transparent)]
    Admin(#[from] AdminError),

    #[error(transparent)]
    StdErr(#[from] StdError),

    #[error("invalid parameter type: expected {expected}, received {received}")]
    InvalidParameterType {
        expected: ParamKind,
        received: ParamKind,
    },

    #[error("invalid ibc denom: {denom}")]
    InvalidIbcDenom { denom: String },

    // the codec error is surfaced as is
    #[error("{source}")]
    MalformedAddress { address: String, source: StdError },

    #[error("'{key}' is not a registered parameter key")]
    UnknownParameterKey { key: String },

    #[error("submitted parameter changes are empty")]
    EmptyParamChanges,

    #[error("parameter {key} has been changed more than once within the same update")]
    DuplicateParamChange { key: ParamKey },
}
