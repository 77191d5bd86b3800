//! Query client for other contracts.
//!
//! Wraps the registry address so collaborating contracts can resolve roles
//! and perform allow-list checks without hand-rolling query plumbing.

use common::Role;
use cosmwasm_std::{Addr, QuerierWrapper, StdError, StdResult};

use crate::msg::{AssetAddressResponse, AuthorizedResponse, OperatorResponse, QueryMsg};

/// Registry query client. Construct with the registry's address.
#[derive(Clone, Debug)]
pub struct Registry(pub Addr);

impl Registry {
    pub fn addr(&self) -> &Addr {
        &self.0
    }

    /// The account bound to a role, if any.
    pub fn operator(&self, querier: &QuerierWrapper, role: Role) -> StdResult<Option<Addr>> {
        let res: OperatorResponse =
            querier.query_wasm_smart(&self.0, &QueryMsg::Operator { role })?;
        Ok(res.account)
    }

    /// The account bound to a role; errors if the role is unbound.
    pub fn require_operator(&self, querier: &QuerierWrapper, role: Role) -> StdResult<Addr> {
        self.operator(querier, role)?.ok_or_else(|| {
            StdError::generic_err(format!("no account bound to role {}", role.as_str()))
        })
    }

    /// Whether `account` holds `role`.
    pub fn has_role(&self, querier: &QuerierWrapper, role: Role, account: &Addr) -> StdResult<bool> {
        Ok(self.operator(querier, role)?.as_ref() == Some(account))
    }

    pub fn is_chain_authorized(&self, querier: &QuerierWrapper, chain_id: u64) -> StdResult<bool> {
        let res: AuthorizedResponse =
            querier.query_wasm_smart(&self.0, &QueryMsg::IsChainAuthorized { chain_id })?;
        Ok(res.authorized)
    }

    pub fn is_asset_authorized(&self, querier: &QuerierWrapper, asset: &str) -> StdResult<bool> {
        let res: AuthorizedResponse = querier.query_wasm_smart(
            &self.0,
            &QueryMsg::IsAssetAuthorized {
                asset: asset.to_string(),
            },
        )?;
        Ok(res.authorized)
    }

    /// The asset's identifier on `chain_id`, or `""` when unregistered.
    pub fn asset_address(
        &self,
        querier: &QuerierWrapper,
        asset: &str,
        chain_id: u64,
    ) -> StdResult<String> {
        let res: AssetAddressResponse = querier.query_wasm_smart(
            &self.0,
            &QueryMsg::AssetAddress {
                asset: asset.to_string(),
                chain_id,
            },
        )?;
        Ok(res.address)
    }
}
