use shared::errors::Error;
use soroban_sdk::{log, Env};

use crate::storage;

/// Scoped non-reentrant lock.
///
/// The flag lives in instance storage and is cleared when the guard is
/// dropped, so every exit from the guarded scope releases it, including
/// early returns through `?`.
pub struct ReentrancyGuard {
    env: Env,
}

impl ReentrancyGuard {
    pub fn acquire(env: &Env) -> Result<Self, Error> {
        if storage::is_locked(env) {
            log!(env, "nested call rejected by reentrancy guard");
            return Err(Error::Reentrancy);
        }
        storage::set_locked(env);
        Ok(Self { env: env.clone() })
    }
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        storage::clear_locked(&self.env);
    }
}
