// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

//! Validators of individual parameters.
//!
//! Every registered parameter is bound to one of the `validate_is_*` functions. They operate on
//! the untyped [`ParamValue`] so that values arriving through the message boundary are checked
//! for their kind as well as their content. The typed predicates underneath are used directly
//! whenever the type of the value is already known at compile time.

use crate::constants::{
    IBC_DENOM_HASH_LENGTH, IBC_DENOM_PREFIX, NATIVE_DENOM_MAX_LENGTH, NATIVE_DENOM_MIN_LENGTH,
};
use crate::error::CronosParamsContractError;
use crate::types::ParamValue;
use cosmwasm_std::Api;

pub type Validator = fn(&dyn Api, &ParamValue) -> Result<(), CronosParamsContractError>;

/// Checks whether the provided string is a valid ibc voucher denomination, i.e. `ibc/{hash}`
/// where the hash is an uppercase hex-encoded sha256 digest.
pub fn is_valid_ibc_denom(denom: &str) -> bool {
    let Some(hash) = denom.strip_prefix(IBC_DENOM_PREFIX) else {
        return false;
    };

    hash.len() == IBC_DENOM_HASH_LENGTH
        && hash
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
}

fn is_native_denom_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'/' | b':' | b'.' | b'_' | b'-')
}

/// Checks whether the provided string is a valid native (i.e. non-ibc) denomination,
/// `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`
pub fn is_valid_native_denom(denom: &str) -> bool {
    if denom.starts_with(IBC_DENOM_PREFIX) {
        return false;
    }
    if denom.len() < NATIVE_DENOM_MIN_LENGTH || denom.len() > NATIVE_DENOM_MAX_LENGTH {
        return false;
    }

    let mut bytes = denom.bytes();
    let starts_with_letter = bytes.next().is_some_and(|b| b.is_ascii_alphabetic());

    starts_with_letter && bytes.all(is_native_denom_char)
}

pub fn validate_ibc_denom(denom: &str) -> Result<(), CronosParamsContractError> {
    if is_valid_ibc_denom(denom) || is_valid_native_denom(denom) {
        Ok(())
    } else {
        Err(CronosParamsContractError::InvalidIbcDenom {
            denom: denom.to_string(),
        })
    }
}

/// Empty address means the value is unset and is always accepted.
///
/// Only the bech32 decoding and the prefix are checked, so an all-uppercase encoding is accepted
/// just like its lowercase form.
pub fn validate_address(api: &dyn Api, address: &str) -> Result<(), CronosParamsContractError> {
    if address.is_empty() {
        return Ok(());
    }

    api.addr_canonicalize(address)
        .map(|_| ())
        .map_err(|source| CronosParamsContractError::MalformedAddress {
            address: address.to_string(),
            source,
        })
}

pub fn validate_is_ibc_denom(
    _: &dyn Api,
    value: &ParamValue,
) -> Result<(), CronosParamsContractError> {
    validate_ibc_denom(value.as_string()?)
}

// note: there's no upper bound imposed on either the timeout or the callback gas
pub fn validate_is_uint64(
    _: &dyn Api,
    value: &ParamValue,
) -> Result<(), CronosParamsContractError> {
    value.as_uint64().map(|_| ())
}

pub fn validate_is_address(
    api: &dyn Api,
    value: &ParamValue,
) -> Result<(), CronosParamsContractError> {
    validate_address(api, value.as_string()?)
}

pub fn validate_is_bool(_: &dyn Api, value: &ParamValue) -> Result<(), CronosParamsContractError> {
    value.as_bool().map(|_| ())
}
