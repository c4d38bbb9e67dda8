// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::params::Params;
use crate::types::{ParamChange, ParamKey, ParamValue};
use cosmwasm_schema::cw_serde;

#[cfg(feature = "schema")]
use crate::types::{KeyTableResponse, ParamResponse, RenderedParamsResponse};

#[cw_serde]
pub struct InstantiateMsg {
    /// Initial (genesis) parameters. If not provided, the defaults are going to be used.
    pub params: Option<Params>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Change the admin, i.e. the governance account allowed to update the parameters
    UpdateAdmin { admin: String },

    /// Attempt to update value of a single parameter
    UpdateParam { key: ParamKey, value: ParamValue },

    /// Attempt to apply a batch of parameter changes. Either all or none of them are applied
    UpdateParams { changes: Vec<ParamChange> },

    /// Attempt to replace the whole parameter set
    ReplaceParams { params: Params },
}

#[cw_serde]
#[cfg_attr(feature = "schema", derive(cosmwasm_schema::QueryResponses))]
pub enum QueryMsg {
    #[cfg_attr(feature = "schema", returns(cw_controllers::AdminResponse))]
    Admin {},

    /// Returns the current parameter set
    #[cfg_attr(feature = "schema", returns(Params))]
    Params {},

    /// Returns the current value of particular parameter
    #[cfg_attr(feature = "schema", returns(ParamResponse))]
    Param { key: ParamKey },

    /// Returns human-readable representation of the current parameter set
    #[cfg_attr(feature = "schema", returns(RenderedParamsResponse))]
    RenderedParams {},

    /// Returns information about all registered parameters
    #[cfg_attr(feature = "schema", returns(KeyTableResponse))]
    KeyTable {},
}

#[cw_serde]
pub struct MigrateMsg {
    //
}
