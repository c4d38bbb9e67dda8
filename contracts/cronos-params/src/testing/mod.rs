// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::contract::{execute, instantiate, migrate, query};
use cosmwasm_std::testing::{
    message_info, mock_dependencies, mock_env, MockApi, MockQuerier, MockStorage,
};
use cosmwasm_std::{Addr, OwnedDeps};
use cronos_params_contract_common::{
    CronosParamsContractError, ExecuteMsg, InstantiateMsg, Params, QueryMsg,
};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use serde::de::DeserializeOwned;

pub(crate) fn governance(api: &MockApi) -> Addr {
    api.addr_make("governance")
}

pub(crate) fn valid_ibc_denom() -> String {
    format!("ibc/{}", "AB".repeat(32))
}

pub(crate) fn init_contract() -> OwnedDeps<MockStorage, MockApi, MockQuerier> {
    let mut deps = mock_dependencies();
    let sender = governance(&deps.api);

    #[allow(clippy::unwrap_used)]
    instantiate(
        deps.as_mut(),
        mock_env(),
        message_info(&sender, &[]),
        InstantiateMsg { params: None },
    )
    .unwrap();

    deps
}

/// Deployed instance of the contract inside a multi-test chain.
pub struct TestSetup {
    app: App,
    contract: Addr,
    governance: Addr,
}

impl TestSetup {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_params(None)
    }

    pub fn with_params(params: Option<Params>) -> anyhow::Result<Self> {
        let mut app = App::default();
        let code = ContractWrapper::new(execute, instantiate, query).with_migrate(migrate);
        let code_id = app.store_code(Box::new(code));

        let governance = app.api().addr_make("governance");
        let contract = app.instantiate_contract(
            code_id,
            governance.clone(),
            &InstantiateMsg { params },
            &[],
            "cronos-params",
            Some(governance.to_string()),
        )?;

        Ok(TestSetup {
            app,
            contract,
            governance,
        })
    }

    pub fn addr_make(&self, input: &str) -> Addr {
        self.app.api().addr_make(input)
    }

    pub fn governance(&self) -> &Addr {
        &self.governance
    }

    pub fn execute(&mut self, sender: &Addr, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.contract.clone(), msg, &[])
    }

    pub fn execute_as_governance(&mut self, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
        let governance = self.governance.clone();
        self.execute(&governance, msg)
    }

    pub fn query<T: DeserializeOwned>(&self, msg: &QueryMsg) -> anyhow::Result<T> {
        Ok(self.app.wrap().query_wasm_smart(&self.contract, msg)?)
    }

    pub fn params(&self) -> anyhow::Result<Params> {
        self.query(&QueryMsg::Params {})
    }
}

pub(crate) fn contract_error(err: anyhow::Error) -> CronosParamsContractError {
    #[allow(clippy::unwrap_used)]
    err.downcast::<CronosParamsContractError>().unwrap()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod multi_test {
    use super::*;
    use cronos_params_contract_common::{
        KeyTableResponse, ParamChange, ParamKey, ParamResponse, ParamValue,
        RenderedParamsResponse,
    };
    use cw_controllers::{AdminError, AdminResponse};

    #[test]
    fn exposes_genesis_params_after_instantiation() -> anyhow::Result<()> {
        let setup = TestSetup::new()?;

        assert_eq!(setup.params()?, Params::default());

        let admin: AdminResponse = setup.query(&QueryMsg::Admin {})?;
        assert_eq!(admin.admin, Some(setup.governance().to_string()));
        Ok(())
    }

    #[test]
    fn single_update_leaves_other_parameters_untouched() -> anyhow::Result<()> {
        let mut setup = TestSetup::new()?;

        setup.execute_as_governance(&ExecuteMsg::UpdateParam {
            key: ParamKey::IbcTimeout,
            value: ParamValue::Uint64(1),
        })?;

        let params = setup.params()?;
        assert_eq!(
            params,
            Params {
                ibc_timeout: 1,
                ..Params::default()
            }
        );

        let res: ParamResponse = setup.query(&QueryMsg::Param {
            key: ParamKey::IbcTimeout,
        })?;
        assert_eq!(res.value, ParamValue::Uint64(1));
        Ok(())
    }

    #[test]
    fn batch_update_is_all_or_nothing() -> anyhow::Result<()> {
        let mut setup = TestSetup::new()?;

        let err = setup
            .execute_as_governance(&ExecuteMsg::UpdateParams {
                changes: vec![
                    ParamChange::new(ParamKey::MaxCallbackGas, 100_000u64),
                    ParamChange::new(ParamKey::IbcCroDenom, "ibc/short"),
                ],
            })
            .unwrap_err();
        assert_eq!(
            contract_error(err),
            CronosParamsContractError::InvalidIbcDenom {
                denom: "ibc/short".to_string()
            }
        );
        assert_eq!(setup.params()?, Params::default());

        setup.execute_as_governance(&ExecuteMsg::UpdateParams {
            changes: vec![
                ParamChange::new(ParamKey::MaxCallbackGas, 100_000u64),
                ParamChange::new(ParamKey::IbcCroDenom, valid_ibc_denom()),
            ],
        })?;
        let params = setup.params()?;
        assert_eq!(params.max_callback_gas, 100_000);
        assert_eq!(params.ibc_cro_denom, valid_ibc_denom());
        Ok(())
    }

    #[test]
    fn mismatched_value_type_is_rejected() -> anyhow::Result<()> {
        let mut setup = TestSetup::new()?;

        let err = setup
            .execute_as_governance(&ExecuteMsg::UpdateParam {
                key: ParamKey::EnableAutoDeployment,
                value: ParamValue::String("true".to_string()),
            })
            .unwrap_err();
        assert!(matches!(
            contract_error(err),
            CronosParamsContractError::InvalidParameterType { .. }
        ));
        Ok(())
    }

    #[test]
    fn only_governance_can_change_parameters() -> anyhow::Result<()> {
        let mut setup = TestSetup::new()?;
        let random = setup.addr_make("random");

        let err = setup
            .execute(
                &random,
                &ExecuteMsg::ReplaceParams {
                    params: Params::default(),
                },
            )
            .unwrap_err();
        assert_eq!(
            contract_error(err),
            CronosParamsContractError::Admin(AdminError::NotAdmin {})
        );

        let new_governance = setup.addr_make("new-governance");
        setup.execute_as_governance(&ExecuteMsg::UpdateAdmin {
            admin: new_governance.to_string(),
        })?;

        let new_params = Params::new("basetcro", 42, setup.addr_make("cronos"), true, 7);
        setup.execute(
            &new_governance,
            &ExecuteMsg::ReplaceParams {
                params: new_params.clone(),
            },
        )?;
        assert_eq!(setup.params()?, new_params);
        Ok(())
    }

    #[test]
    fn invalid_genesis_params_prevent_instantiation() {
        let res = TestSetup::with_params(Some(Params {
            cronos_admin: "notanaddress".to_string(),
            ..Params::default()
        }));
        assert!(res.is_err());
    }

    #[test]
    fn rendered_params_and_key_table_are_queryable() -> anyhow::Result<()> {
        let setup = TestSetup::new()?;

        let rendered: RenderedParamsResponse = setup.query(&QueryMsg::RenderedParams {})?;
        assert!(rendered.rendered.starts_with("ibc_cro_denom: "));

        let table: KeyTableResponse = setup.query(&QueryMsg::KeyTable {})?;
        assert_eq!(table.entries.len(), ParamKey::ALL.len());
        Ok(())
    }
}
