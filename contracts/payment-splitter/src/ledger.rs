use shared::constants::{MAX_TOTAL_RECEIVED, SHARE_DENOMINATOR};
use shared::errors::Error;
use shared::events::{PAYMENT_RECEIVED, PAYMENT_WITHDRAWN};
use shared::types::Amount;
use soroban_sdk::{log, token::TokenClient, Address, Env};

use crate::{
    guard::ReentrancyGuard,
    storage,
    types::{Contributor, ContributorInfo, PoolState},
    validation,
};

/// Lifetime claim of a contributor: `floor(total_received * share / 100)`.
pub fn entitlement(total_received: Amount, share: u32) -> Amount {
    // Deposits are capped at MAX_TOTAL_RECEIVED, so the product fits in i128.
    total_received * share as Amount / SHARE_DENOMINATOR
}

/// Amount a contributor can withdraw right now. Never negative: `withdraw`
/// only ever raises `released` up to the current entitlement.
pub fn payment_due(pool: &PoolState, contributor: &Contributor) -> Amount {
    entitlement(pool.total_received, contributor.share) - contributor.released
}

/// Accept `amount` of the configured token from `from` into the pool.
pub fn deposit(env: &Env, from: &Address, amount: Amount) -> Result<(), Error> {
    validation::validate_amount(amount)?;

    let _guard = ReentrancyGuard::acquire(env)?;
    let mut pool = storage::get_pool(env).ok_or(Error::NotInitialized)?;

    let total_received = pool
        .total_received
        .checked_add(amount)
        .filter(|total| *total <= MAX_TOTAL_RECEIVED)
        .ok_or(Error::Overflow)?;

    let token = TokenClient::new(env, &storage::get_token(env)?);
    let transfer = token.try_transfer(from, &env.current_contract_address(), &amount);
    if !matches!(transfer, Ok(Ok(()))) {
        log!(env, "deposit transfer failed", from.clone(), amount);
        return Err(Error::TransferFailed);
    }

    // Credited only once the funds are actually held by the pool.
    pool.total_received = total_received;
    storage::set_pool(env, &pool);

    log!(env, "payment received", from.clone(), amount);
    env.events()
        .publish((PAYMENT_RECEIVED,), (from.clone(), amount));

    Ok(())
}

/// Pay `identity` everything it is owed and return the amount paid.
///
/// The released counters are written before the outbound transfer. If the
/// transfer does not complete they are put back to their previous values
/// before returning `TransferFailed`, so a failed withdrawal leaves no trace
/// in the bookkeeping.
pub fn withdraw(env: &Env, identity: &Address) -> Result<Amount, Error> {
    let _guard = ReentrancyGuard::acquire(env)?;

    let mut pool = storage::get_pool(env).ok_or(Error::NotInitialized)?;
    let mut contributor = storage::get_contributor(env, identity).ok_or(Error::NotAContributor)?;

    let due = payment_due(&pool, &contributor);
    if due <= 0 {
        return Err(Error::NothingDue);
    }

    let token = TokenClient::new(env, &storage::get_token(env)?);
    let prior_pool = pool.clone();
    let prior_contributor = contributor.clone();

    contributor.released = contributor
        .released
        .checked_add(due)
        .ok_or(Error::Overflow)?;
    pool.total_released = pool
        .total_released
        .checked_add(due)
        .ok_or(Error::Overflow)?;

    storage::set_contributor(env, identity, &contributor);
    storage::set_pool(env, &pool);

    let transfer = token.try_transfer(&env.current_contract_address(), identity, &due);
    if !matches!(transfer, Ok(Ok(()))) {
        storage::set_contributor(env, identity, &prior_contributor);
        storage::set_pool(env, &prior_pool);
        log!(env, "withdrawal transfer failed, bookkeeping restored", identity.clone(), due);
        return Err(Error::TransferFailed);
    }

    log!(env, "payment withdrawn", identity.clone(), due);
    env.events()
        .publish((PAYMENT_WITHDRAWN,), (identity.clone(), due));

    Ok(due)
}

/// Amount `identity` could withdraw now; 0 for unknown identities.
pub fn pending_payment(env: &Env, identity: &Address) -> Amount {
    match storage::get_contributor(env, identity) {
        Some(contributor) => {
            let pool = storage::get_pool(env).unwrap_or_default();
            payment_due(&pool, &contributor)
        }
        None => 0,
    }
}

pub fn released(env: &Env, identity: &Address) -> Amount {
    storage::get_contributor(env, identity)
        .map(|contributor| contributor.released)
        .unwrap_or(0)
}

pub fn pool_state(env: &Env) -> PoolState {
    storage::get_pool(env).unwrap_or_default()
}

pub fn contributor_info(env: &Env, identity: &Address) -> Option<ContributorInfo> {
    let contributor = storage::get_contributor(env, identity)?;
    let pool = pool_state(env);
    let entitlement = entitlement(pool.total_received, contributor.share);

    Some(ContributorInfo {
        identity: identity.clone(),
        share: contributor.share,
        released: contributor.released,
        entitlement,
        pending: entitlement - contributor.released,
    })
}

/// Part of lifetime deposits no contributor will ever be able to claim:
/// rounding dust plus whatever is left of the 100% ceiling unassigned.
pub fn undistributed(env: &Env) -> Amount {
    let pool = pool_state(env);
    let mut claimable: Amount = 0;

    for identity in storage::get_contributors(env).iter() {
        if let Some(contributor) = storage::get_contributor(env, &identity) {
            claimable += entitlement(pool.total_received, contributor.share);
        }
    }

    pool.total_received - claimable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entitlement_floors() {
        assert_eq!(entitlement(10, 33), 3);
        assert_eq!(entitlement(10, 34), 3);
        assert_eq!(entitlement(1000, 60), 600);
        assert_eq!(entitlement(1500, 60), 900);
        assert_eq!(entitlement(0, 100), 0);
        assert_eq!(entitlement(99, 1), 0);
    }

    #[test]
    fn test_entitlement_at_deposit_cap() {
        assert_eq!(entitlement(MAX_TOTAL_RECEIVED, 100), MAX_TOTAL_RECEIVED);
        assert!(entitlement(MAX_TOTAL_RECEIVED, 1) <= MAX_TOTAL_RECEIVED / 100);
    }

    #[test]
    fn test_payment_due_nets_out_released() {
        let pool = PoolState {
            total_shares: 100,
            total_received: 1500,
            total_released: 1000,
        };
        let contributor = Contributor {
            share: 60,
            released: 600,
        };
        assert_eq!(payment_due(&pool, &contributor), 300);

        let settled = Contributor {
            share: 60,
            released: 900,
        };
        assert_eq!(payment_due(&pool, &settled), 0);
    }
}
