// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::params::Params;
use crate::types::{ParamChange, ParamKey, ParamValue};
use cosmwasm_std::{Addr, Event};

pub enum CronosParamsEventType {
    Instantiation,
    ParamUpdate,
    ParamsBatchUpdate,
    ParamsReplacement,
}

impl From<CronosParamsEventType> for String {
    fn from(typ: CronosParamsEventType) -> Self {
        typ.to_string()
    }
}

impl std::fmt::Display for CronosParamsEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let typ = match self {
            CronosParamsEventType::Instantiation => "cronos_params_instantiation",
            CronosParamsEventType::ParamUpdate => "param_update",
            CronosParamsEventType::ParamsBatchUpdate => "params_batch_update",
            CronosParamsEventType::ParamsReplacement => "params_replacement",
        };
        f.write_str(typ)
    }
}

pub const SENDER_KEY: &str = "sender";
pub const PARAM_KEY: &str = "key";
pub const OLD_VALUE_KEY: &str = "old_value";
pub const NEW_VALUE_KEY: &str = "value";
pub const CHANGES_KEY: &str = "changes";
pub const PARAMS_KEY: &str = "params";

pub trait OptionallyAddAttribute {
    fn add_optional_attribute(
        self,
        key: impl Into<String>,
        value: Option<impl Into<String>>,
    ) -> Self;
}

impl OptionallyAddAttribute for Event {
    fn add_optional_attribute(
        self,
        key: impl Into<String>,
        value: Option<impl Into<String>>,
    ) -> Self {
        if let Some(value) = value {
            self.add_attribute(key, value)
        } else {
            self
        }
    }
}

// attribute values must not be empty, so unset parameters are simply omitted
fn attribute_value(value: &ParamValue) -> Option<String> {
    match value {
        ParamValue::String(value) if value.is_empty() => None,
        value => Some(value.to_string()),
    }
}

pub fn new_instantiation_event(admin: &Addr, params: &Params) -> Event {
    ParamKey::ALL.into_iter().fold(
        Event::new(CronosParamsEventType::Instantiation).add_attribute(SENDER_KEY, admin),
        |event, key| {
            event.add_optional_attribute(key.store_key(), attribute_value(&params.get(key)))
        },
    )
}

pub fn new_param_update_event(
    sender: &Addr,
    key: ParamKey,
    old_value: &ParamValue,
    new_value: &ParamValue,
) -> Event {
    Event::new(CronosParamsEventType::ParamUpdate)
        .add_attribute(SENDER_KEY, sender)
        .add_attribute(PARAM_KEY, key.store_key())
        .add_optional_attribute(OLD_VALUE_KEY, attribute_value(old_value))
        .add_optional_attribute(NEW_VALUE_KEY, attribute_value(new_value))
}

pub fn new_params_batch_update_event(sender: &Addr, changes: &[ParamChange]) -> Event {
    let changed_keys = changes
        .iter()
        .map(|change| change.key.store_key())
        .collect::<Vec<_>>()
        .join(",");

    Event::new(CronosParamsEventType::ParamsBatchUpdate)
        .add_attribute(SENDER_KEY, sender)
        .add_attribute(CHANGES_KEY, changed_keys)
}

pub fn new_params_replacement_event(sender: &Addr, params: &Params) -> Event {
    Event::new(CronosParamsEventType::ParamsReplacement)
        .add_attribute(SENDER_KEY, sender)
        .add_attribute(PARAMS_KEY, params.to_string())
}

pub fn may_find_attribute(event: &Event, key: &str) -> Option<String> {
    event
        .attributes
        .iter()
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockApi;

    #[test]
    fn param_update_event_attributes() {
        let sender = MockApi::default().addr_make("governance");
        let event = new_param_update_event(
            &sender,
            ParamKey::MaxCallbackGas,
            &ParamValue::Uint64(50000),
            &ParamValue::Uint64(60000),
        );

        assert_eq!(event.ty, "param_update");
        assert_eq!(
            may_find_attribute(&event, SENDER_KEY),
            Some(sender.to_string())
        );
        assert_eq!(
            may_find_attribute(&event, PARAM_KEY).as_deref(),
            Some("MaxCallbackGas")
        );
        assert_eq!(
            may_find_attribute(&event, OLD_VALUE_KEY).as_deref(),
            Some("50000")
        );
        assert_eq!(
            may_find_attribute(&event, NEW_VALUE_KEY).as_deref(),
            Some("60000")
        );
        assert!(may_find_attribute(&event, "foo").is_none());
    }

    #[test]
    fn instantiation_event_includes_every_set_parameter() {
        let sender = MockApi::default().addr_make("governance");
        let event = new_instantiation_event(&sender, &Params::default());

        // admin is unset by default
        assert!(may_find_attribute(&event, "CronosAdmin").is_none());
        for key in ParamKey::ALL {
            if key != ParamKey::CronosAdmin {
                assert!(may_find_attribute(&event, key.store_key()).is_some());
            }
        }
        assert_eq!(
            may_find_attribute(&event, "IbcTimeout").as_deref(),
            Some("86400000000000")
        );
    }

    #[test]
    fn unset_values_are_omitted() {
        let sender = MockApi::default().addr_make("governance");
        let event = new_param_update_event(
            &sender,
            ParamKey::CronosAdmin,
            &ParamValue::String(String::new()),
            &ParamValue::String(sender.to_string()),
        );
        assert!(may_find_attribute(&event, OLD_VALUE_KEY).is_none());
        assert_eq!(
            may_find_attribute(&event, NEW_VALUE_KEY),
            Some(sender.to_string())
        );
        assert!(event.attributes.iter().all(|attr| !attr.value.is_empty()));
    }

    #[test]
    fn batch_event_lists_changed_keys() {
        let sender = MockApi::default().addr_make("governance");
        let changes = vec![
            ParamChange::new(ParamKey::IbcTimeout, 1u64),
            ParamChange::new(ParamKey::EnableAutoDeployment, true),
        ];
        let event = new_params_batch_update_event(&sender, &changes);
        assert_eq!(
            may_find_attribute(&event, CHANGES_KEY).as_deref(),
            Some("IbcTimeout,EnableAutoDeployment")
        );
    }
}
