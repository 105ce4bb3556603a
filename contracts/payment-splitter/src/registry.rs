use shared::constants::{MAX_BATCH_SIZE, MAX_TOTAL_SHARES};
use shared::errors::Error;
use shared::events::CONTRIBUTOR_REGISTERED;
use soroban_sdk::{log, Address, Env, Vec};

use crate::{guard::ReentrancyGuard, storage, types::Contributor, validation};

/// Check one admission against the running share total and return the new
/// total. Nothing is written.
fn admit(env: &Env, total_shares: u32, identity: &Address, share: u32) -> Result<u32, Error> {
    validation::validate_identity(env, identity)?;
    validation::validate_share(share)?;

    if storage::has_contributor(env, identity) {
        return Err(Error::AlreadyRegistered);
    }

    // Both operands are bounded by MAX_TOTAL_SHARES.
    let new_total = total_shares + share;
    if new_total > MAX_TOTAL_SHARES {
        return Err(Error::ShareCeilingExceeded);
    }

    Ok(new_total)
}

fn record(env: &Env, contributors: &mut Vec<Address>, identity: &Address, share: u32) {
    storage::set_contributor(env, identity, &Contributor { share, released: 0 });
    contributors.push_back(identity.clone());

    log!(env, "contributor registered", identity.clone(), share);
    env.events()
        .publish((CONTRIBUTOR_REGISTERED,), (identity.clone(), share));
}

/// Register a single contributor. Caller authorization is checked by the
/// contract entry point.
pub fn register(env: &Env, identity: &Address, share: u32) -> Result<(), Error> {
    let _guard = ReentrancyGuard::acquire(env)?;
    let mut pool = storage::get_pool(env).ok_or(Error::NotInitialized)?;

    let total_shares = admit(env, pool.total_shares, identity, share)?;

    let mut contributors = storage::get_contributors(env);
    record(env, &mut contributors, identity, share);
    storage::set_contributors(env, &contributors);

    pool.total_shares = total_shares;
    storage::set_pool(env, &pool);

    Ok(())
}

/// Register several contributors at once. Every entry is checked before the
/// first one is written, so the batch is accepted or rejected as a whole.
pub fn register_batch(env: &Env, entries: &Vec<(Address, u32)>) -> Result<u32, Error> {
    let count = entries.len();
    if count == 0 {
        return Err(Error::BatchEmpty);
    }
    if count > MAX_BATCH_SIZE {
        return Err(Error::BatchLimitExceeded);
    }

    let _guard = ReentrancyGuard::acquire(env)?;
    let mut pool = storage::get_pool(env).ok_or(Error::NotInitialized)?;

    let mut total_shares = pool.total_shares;
    for i in 0..count {
        let (identity, share) = entries.get_unchecked(i);
        for j in 0..i {
            if entries.get_unchecked(j).0 == identity {
                return Err(Error::AlreadyRegistered);
            }
        }
        total_shares = admit(env, total_shares, &identity, share)?;
    }

    let mut contributors = storage::get_contributors(env);
    for (identity, share) in entries.iter() {
        record(env, &mut contributors, &identity, share);
    }
    storage::set_contributors(env, &contributors);

    pool.total_shares = total_shares;
    storage::set_pool(env, &pool);

    Ok(count)
}

pub fn list(env: &Env) -> Vec<Address> {
    storage::get_contributors(env)
}

/// Registered share of `identity`, 0 when unknown
pub fn share_of(env: &Env, identity: &Address) -> u32 {
    storage::get_contributor(env, identity)
        .map(|contributor| contributor.share)
        .unwrap_or(0)
}
