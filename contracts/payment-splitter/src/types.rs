use shared::types::Amount;
use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,                // administrator allowed to register contributors
    Token,                // asset split by this contract
    Pool,                 // PoolState totals
    Contributors,         // insertion-ordered Vec<Address>
    Contributor(Address), // identity -> Contributor
    Locked,               // reentrancy flag
}

/// Per-contributor bookkeeping. `share` never changes after registration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contributor {
    pub share: u32,
    pub released: Amount,
}

/// Aggregate totals of the pool.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    /// Sum of all registered shares, never above 100
    pub total_shares: u32,
    /// Lifetime deposits
    pub total_received: Amount,
    /// Lifetime withdrawals, equal to the sum of every contributor's `released`
    pub total_released: Amount,
}

/// Read model returned to callers inspecting a single contributor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributorInfo {
    pub identity: Address,
    pub share: u32,
    pub released: Amount,
    pub entitlement: Amount,
    pub pending: Amount,
}
