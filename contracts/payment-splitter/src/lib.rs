#![no_std]

//! Payment splitter: an administrator registers contributors with integer
//! percentage shares (at most 100 in total), anybody deposits the configured
//! token into the pool, and each contributor withdraws its share of lifetime
//! deposits minus what it already took out. Remainders lost to integer
//! division stay in the pool.

use shared::{errors::Error, events::SPLITTER_INITIALIZED, types::Amount};
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env, Vec};

mod guard;
mod ledger;
mod registry;
mod storage;
mod types;
mod validation;


pub use types::{ContributorInfo, PoolState};

contractmeta!(key = "name", val = "Payment Splitter Contract");

#[contract]
pub struct PaymentSplitter;

#[contractimpl]
impl PaymentSplitter {
    /// Initialize the splitter
    ///
    /// # Arguments
    /// * `admin` - Address allowed to register contributors
    /// * `token` - Token contract whose balance is split
    ///
    /// # Errors
    /// * `AlreadyInitialized` - Splitter was already initialized
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_token(&env, &token);
        storage::set_pool(&env, &PoolState::default());
        storage::set_contributors(&env, &Vec::new(&env));

        log!(&env, "splitter initialized", admin, token);
        env.events()
            .publish((SPLITTER_INITIALIZED,), (admin, token));

        Ok(())
    }

    // ==================== Registry ====================

    /// Register a contributor with a percentage share (admin only)
    ///
    /// # Arguments
    /// * `caller` - Must be the admin
    /// * `identity` - Contributor address
    /// * `share` - Percentage share, 1 to 100
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the admin
    /// * `InvalidIdentity` - Identity is the splitter itself
    /// * `InvalidShareRange` - Share outside 1..=100
    /// * `AlreadyRegistered` - Identity already holds a share
    /// * `ShareCeilingExceeded` - Total shares would exceed 100
    pub fn register(env: Env, caller: Address, identity: Address, share: u32) -> Result<(), Error> {
        validation::require_admin(&env, &caller)?;
        registry::register(&env, &identity, share)
    }

    /// Register several contributors in one all-or-nothing call (admin only)
    ///
    /// # Arguments
    /// * `caller` - Must be the admin
    /// * `entries` - Vec of (identity, share) tuples
    pub fn register_batch(
        env: Env,
        caller: Address,
        entries: Vec<(Address, u32)>,
    ) -> Result<u32, Error> {
        validation::require_admin(&env, &caller)?;
        registry::register_batch(&env, &entries)
    }

    /// Registered contributors in registration order
    pub fn list_contributors(env: Env) -> Vec<Address> {
        registry::list(&env)
    }

    pub fn contributor_count(env: Env) -> u32 {
        registry::list(&env).len()
    }

    pub fn contributor_at(env: Env, index: u32) -> Option<Address> {
        registry::list(&env).get(index)
    }

    /// Share of `identity`, 0 if it is not registered
    pub fn shares(env: Env, identity: Address) -> u32 {
        registry::share_of(&env, &identity)
    }

    pub fn total_shares(env: Env) -> u32 {
        ledger::pool_state(&env).total_shares
    }

    // ==================== Ledger ====================

    /// Deposit funds into the pool
    ///
    /// # Arguments
    /// * `from` - Depositor, must authorize the call
    /// * `amount` - Amount of the configured token, must be positive
    pub fn deposit(env: Env, from: Address, amount: Amount) -> Result<(), Error> {
        from.require_auth();
        ledger::deposit(&env, &from, amount)
    }

    /// Withdraw everything currently owed to `contributor`
    ///
    /// # Returns
    /// * The amount transferred out
    ///
    /// # Errors
    /// * `NotAContributor` - Caller holds no share
    /// * `NothingDue` - Entitlement already fully withdrawn
    /// * `TransferFailed` - Token transfer did not complete; nothing recorded
    /// * `Reentrancy` - Called from within another splitter operation
    pub fn withdraw(env: Env, contributor: Address) -> Result<Amount, Error> {
        contributor.require_auth();
        ledger::withdraw(&env, &contributor)
    }

    /// Amount `identity` could withdraw now (0 if unregistered)
    pub fn pending_payment(env: Env, identity: Address) -> Amount {
        ledger::pending_payment(&env, &identity)
    }

    pub fn released(env: Env, identity: Address) -> Amount {
        ledger::released(&env, &identity)
    }

    pub fn contributor(env: Env, identity: Address) -> Option<ContributorInfo> {
        ledger::contributor_info(&env, &identity)
    }

    pub fn total_received(env: Env) -> Amount {
        ledger::pool_state(&env).total_received
    }

    pub fn total_released(env: Env) -> Amount {
        ledger::pool_state(&env).total_released
    }

    pub fn pool_state(env: Env) -> PoolState {
        ledger::pool_state(&env)
    }

    /// Lifetime deposits that no contributor can claim (rounding dust and
    /// unassigned share)
    pub fn undistributed(env: Env) -> Amount {
        ledger::undistributed(&env)
    }

    // ==================== Config ====================

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        storage::get_token(&env)
    }
}
