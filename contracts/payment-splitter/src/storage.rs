use shared::errors::Error;
use soroban_sdk::{Address, Env, Vec};

use crate::types::{Contributor, DataKey, PoolState};

/// Store the administrator
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

/// Retrieve the administrator
pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

/// Check if the splitter has been initialized
pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn set_pool(env: &Env, pool: &PoolState) {
    env.storage().instance().set(&DataKey::Pool, pool);
}

/// Pool totals; `None` until the splitter is initialized
pub fn get_pool(env: &Env) -> Option<PoolState> {
    env.storage().instance().get(&DataKey::Pool)
}

pub fn set_contributor(env: &Env, identity: &Address, contributor: &Contributor) {
    env.storage()
        .persistent()
        .set(&DataKey::Contributor(identity.clone()), contributor);
}

pub fn get_contributor(env: &Env, identity: &Address) -> Option<Contributor> {
    env.storage()
        .persistent()
        .get(&DataKey::Contributor(identity.clone()))
}

pub fn has_contributor(env: &Env, identity: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Contributor(identity.clone()))
}

/// Store the ordered contributor list
pub fn set_contributors(env: &Env, contributors: &Vec<Address>) {
    env.storage()
        .persistent()
        .set(&DataKey::Contributors, contributors);
}

/// Retrieve the ordered contributor list (empty if nobody registered yet)
pub fn get_contributors(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Contributors)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env) {
    env.storage().instance().set(&DataKey::Locked, &true);
}

pub fn clear_locked(env: &Env) {
    env.storage().instance().remove(&DataKey::Locked);
}
