//! Operator roles.
//!
//! The registry maps each role to exactly one account. A closed enumeration is
//! used instead of free-form role strings so a mistyped role name is a compile
//! error rather than a silent authorization failure. The operator table also
//! serves as the component locator: contract addresses are written under their
//! role after deployment, which is how the gateway and relay find each other
//! without a constructor-time cycle.

use cosmwasm_schema::cw_serde;

/// The closed set of operator roles known to the protocol.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Role {
    /// The administrative account gating all registry writes.
    Admin,
    /// The transfer entry point contract (gateway).
    Bridge,
    /// The custody ledger contract.
    Vault,
    /// The operation relay contract.
    Relay,
    /// The external oracle/relay process account.
    Oracle,
    /// The asset factory contract.
    Factory,
}

impl Role {
    /// Storage key / display name for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Bridge => "bridge",
            Role::Vault => "vault",
            Role::Relay => "relay",
            Role::Oracle => "oracle",
            Role::Factory => "factory",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
