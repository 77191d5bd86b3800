//! Admin configuration handlers.

use common::Role;
use cosmwasm_std::{DepsMut, MessageInfo, Response};
use registry::Registry;

use crate::error::ContractError;
use crate::state::{CONFIG, REQUIRED_CONFIRMATIONS};

pub fn set_required_confirmations(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    blocks: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry = Registry(config.registry);
    if !registry.has_role(&deps.querier, Role::Admin, &info.sender)? {
        return Err(ContractError::lacks_role(Role::Admin.as_str()));
    }

    REQUIRED_CONFIRMATIONS.save(deps.storage, chain_id, &blocks)?;

    Ok(Response::new()
        .add_attribute("method", "set_required_confirmations")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("blocks", blocks.to_string()))
}
