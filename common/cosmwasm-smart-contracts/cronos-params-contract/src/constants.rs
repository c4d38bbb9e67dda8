// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod storage_keys {
    pub const CONTRACT_ADMIN: &str = "contract-admin";

    // those are part of the chain state: changing any of them requires a state migration
    pub const IBC_CRO_DENOM: &str = "IbcCroDenom";
    pub const IBC_TIMEOUT: &str = "IbcTimeout";
    pub const CRONOS_ADMIN: &str = "CronosAdmin";
    pub const ENABLE_AUTO_DEPLOYMENT: &str = "EnableAutoDeployment";
    pub const MAX_CALLBACK_GAS: &str = "MaxCallbackGas";
}

// 'ibc/' + hex(sha256(trace path + '/' + base denom))
pub const IBC_CRO_DENOM_DEFAULT_VALUE: &str =
    "ibc/7C17F42EA0A975EA77611A8084EA11B1DF651E67C16C4AE6F99340566B04FDD1";

/// One day expressed in nanoseconds.
pub const IBC_TIMEOUT_DEFAULT_VALUE: u64 = 86_400_000_000_000;

pub const MAX_CALLBACK_GAS_DEFAULT_VALUE: u64 = 50_000;

pub const IBC_DENOM_PREFIX: &str = "ibc/";
pub const IBC_DENOM_HASH_LENGTH: usize = 64;

pub const NATIVE_DENOM_MIN_LENGTH: usize = 3;
pub const NATIVE_DENOM_MAX_LENGTH: usize = 128;
