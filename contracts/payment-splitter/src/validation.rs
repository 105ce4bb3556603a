use shared::constants::{MAX_TOTAL_SHARES, MIN_SHARE};
use shared::errors::Error;
use shared::types::Amount;
use soroban_sdk::{Address, Env};

use crate::storage;

/// Administrator capability check: `caller` must be the stored admin and
/// must have authorized the invocation.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    let admin = storage::get_admin(env)?;
    if admin != *caller {
        return Err(Error::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

/// The splitter itself can never be a payee; it plays the role of the null
/// account since funds sent to it would never leave.
pub fn validate_identity(env: &Env, identity: &Address) -> Result<(), Error> {
    if *identity == env.current_contract_address() {
        return Err(Error::InvalidIdentity);
    }
    Ok(())
}

pub fn validate_share(share: u32) -> Result<(), Error> {
    if !(MIN_SHARE..=MAX_TOTAL_SHARES).contains(&share) {
        return Err(Error::InvalidShareRange);
    }
    Ok(())
}

pub fn validate_amount(amount: Amount) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::ZeroAmount);
    }
    Ok(())
}
