#![no_std]

pub mod accounts;
pub mod auth;
pub mod config;
pub mod events;
pub mod lock;
pub mod staking;
pub mod supply;
pub mod timelock;
pub mod types;
pub mod validation;

use common::scheduler::{
    ReleaseKey, ReleaseScheduler, ScheduleError, ScheduledRelease, StorageScheduler,
};
use common::ttl;
use soroban_sdk::{contract, contractimpl, Address, Env, String};

use auth::AuthContext;

pub use timelock::PendingRelease;
pub use types::{
    AccountBalance, Asset, ConfigKey, CurrencyStats, StakeEntry, StakeStats, TokenSymbol,
};

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum LedgerError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidSymbol = 4,
    InvalidQuantity = 5,
    MemoTooLong = 6,
    PrecisionMismatch = 7,
    SelfTransfer = 8,
    SymbolExists = 9,
    SymbolNotFound = 10,
    AccountNotFound = 11,
    InsufficientAvailable = 12,
    InsufficientLocked = 13,
    InsufficientStake = 14,
    SupplyExceeded = 15,
    CapBelowSupply = 16,
    CapIncrease = 17,
    FeatureDisabled = 18,
    ConfigMissing = 19,
    NoPendingRelease = 20,
    ReleaseNotDue = 21,
    Overflow = 22,
}

impl From<ScheduleError> for LedgerError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::NotScheduled => LedgerError::NoPendingRelease,
            ScheduleError::NotDue => LedgerError::ReleaseNotDue,
        }
    }
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct TokenLedgerContract;

#[contractimpl]
impl TokenLedgerContract {
    // ── Initialisation & config ─────────────────────────────────────────────

    /// Record `owner` and seed the feature flags and the unstake delay.
    pub fn init(env: Env, owner: Address) -> Result<(), LedgerError> {
        AuthContext::new(&env).acting_as(&owner);
        config::initialize(&env, &owner)?;
        ttl::extend_instance(&env);
        Ok(())
    }

    pub fn is_initialized(env: Env) -> bool {
        config::is_initialized(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, LedgerError> {
        config::owner(&env)
    }

    pub fn get_config(env: Env, key: ConfigKey) -> Option<u64> {
        config::get(&env, key)
    }

    pub fn set_stake_status(env: Env, enabled: bool) -> Result<(), LedgerError> {
        Self::set_config(&env, ConfigKey::StakeEnabled, u64::from(enabled))
    }

    pub fn set_issue_status(env: Env, enabled: bool) -> Result<(), LedgerError> {
        Self::set_config(&env, ConfigKey::IssueEnabled, u64::from(enabled))
    }

    pub fn set_transfer_status(env: Env, enabled: bool) -> Result<(), LedgerError> {
        Self::set_config(&env, ConfigKey::TransferEnabled, u64::from(enabled))
    }

    /// Applies to releases scheduled after the change only.
    pub fn set_unstake_delay(env: Env, seconds: u64) -> Result<(), LedgerError> {
        Self::set_config(&env, ConfigKey::UnstakeDelaySeconds, seconds)
    }

    // ── Supply ──────────────────────────────────────────────────────────────

    /// Register a new asset owned by `issuer` with the given cap.
    pub fn create(env: Env, issuer: Address, max_supply: Asset) -> Result<(), LedgerError> {
        config::require_initialized(&env)?;
        AuthContext::new(&env).acting_as_owner()?;
        supply::create(&env, &issuer, &max_supply)?;
        ttl::extend_instance(&env);
        Ok(())
    }

    /// Mint `quantity` under the issuer's authority and deliver it to `to`.
    pub fn issue(env: Env, to: Address, quantity: Asset, memo: String) -> Result<(), LedgerError> {
        config::require_initialized(&env)?;
        let mut auth = AuthContext::new(&env);
        supply::issue(&env, &mut auth, &to, &quantity, &memo)?;
        ttl::extend_instance(&env);
        Ok(())
    }

    /// Lower the cap of an asset; only its issuer may do so.
    pub fn reduce_to(env: Env, issuer: Address, new_max_supply: Asset) -> Result<(), LedgerError> {
        config::require_initialized(&env)?;
        let mut auth = AuthContext::new(&env);
        supply::reduce_cap(&env, &mut auth, &issuer, &new_max_supply)?;
        ttl::extend_instance(&env);
        Ok(())
    }

    pub fn get_stats(env: Env, code: String) -> Result<CurrencyStats, LedgerError> {
        supply::get(&env, &code).ok_or(LedgerError::SymbolNotFound)
    }

    // ── Transfers ───────────────────────────────────────────────────────────

    /// Move `quantity` from `from` to `to`. `from` pays for a new destination row.
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        quantity: Asset,
        memo: String,
    ) -> Result<(), LedgerError> {
        config::require_initialized(&env)?;
        let mut auth = AuthContext::new(&env);
        auth.acting_as(&from);
        accounts::transfer(&env, &mut auth, &from, &to, &quantity, &memo)?;
        ttl::extend_instance(&env);
        Ok(())
    }

    /// Same as `transfer`, but co-signed by `to`, which then pays for its own row.
    pub fn transfer_cosigned(
        env: Env,
        from: Address,
        to: Address,
        quantity: Asset,
        memo: String,
    ) -> Result<(), LedgerError> {
        config::require_initialized(&env)?;
        let mut auth = AuthContext::new(&env);
        auth.acting_as(&from).acting_as(&to);
        accounts::transfer(&env, &mut auth, &from, &to, &quantity, &memo)?;
        ttl::extend_instance(&env);
        Ok(())
    }

    pub fn get_balance(
        env: Env,
        owner: Address,
        code: String,
    ) -> Result<AccountBalance, LedgerError> {
        accounts::load(&env, &owner, &code)
    }

    /// Balance usable for transfers and staking; zero for unknown accounts.
    pub fn get_available(env: Env, owner: Address, code: String) -> i128 {
        accounts::get(&env, &owner, &code).map_or(0, |balance| balance.available())
    }

    // ── Locks ───────────────────────────────────────────────────────────────

    pub fn lock(env: Env, account: Address, quantity: Asset) -> Result<(), LedgerError> {
        config::require_initialized(&env)?;
        AuthContext::new(&env).acting_as_owner()?;
        lock::lock(&env, &account, &quantity)?;
        ttl::extend_instance(&env);
        Ok(())
    }

    pub fn unlock(env: Env, account: Address, quantity: Asset) -> Result<(), LedgerError> {
        config::require_initialized(&env)?;
        AuthContext::new(&env).acting_as_owner()?;
        lock::unlock(&env, &account, &quantity)?;
        ttl::extend_instance(&env);
        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    pub fn stake(env: Env, from: Address, quantity: Asset) -> Result<(), LedgerError> {
        config::require_initialized(&env)?;
        let mut auth = AuthContext::new(&env);
        auth.acting_as(&from);
        staking::stake(&env, &auth, &from, &quantity)?;
        ttl::extend_instance(&env);
        Ok(())
    }

    /// Unstake on behalf of `from`. `caller` must be `from` or the owner, and
    /// only the owner may skip the release delay with `immediate`.
    pub fn unstake(
        env: Env,
        caller: Address,
        from: Address,
        quantity: Asset,
        immediate: bool,
    ) -> Result<(), LedgerError> {
        config::require_initialized(&env)?;
        let mut auth = AuthContext::new(&env);
        auth.acting_as(&caller);
        let scheduler = StorageScheduler::new(&env);
        staking::unstake(&env, &auth, &scheduler, &from, &quantity, immediate)?;
        ttl::extend_instance(&env);
        Ok(())
    }

    /// Release callback run by the owner's keeper once the unstake delay of
    /// `account` has elapsed. Returns the released amount.
    pub fn defer_release(
        env: Env,
        account: Address,
        symbol: TokenSymbol,
    ) -> Result<i128, LedgerError> {
        config::require_initialized(&env)?;
        AuthContext::new(&env).acting_as_owner()?;
        let scheduler = StorageScheduler::new(&env);
        let released = staking::release(&env, &scheduler, &account, &symbol)?;
        ttl::extend_instance(&env);
        Ok(released)
    }

    pub fn get_stake_stats(env: Env, code: String) -> Option<StakeStats> {
        staking::get_stats(&env, &code)
    }

    pub fn get_stake(env: Env, owner: Address, code: String) -> Option<StakeEntry> {
        staking::get_stake(&env, &owner, &code)
    }

    pub fn get_pending_release(
        env: Env,
        owner: Address,
        code: String,
    ) -> Option<PendingRelease> {
        timelock::get_pending(&env, &owner, &code)
    }

    pub fn get_scheduled_release(
        env: Env,
        owner: Address,
        code: String,
    ) -> Option<ScheduledRelease> {
        StorageScheduler::new(&env).scheduled(&ReleaseKey { owner, code })
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn set_config(env: &Env, key: ConfigKey, value: u64) -> Result<(), LedgerError> {
        config::require_initialized(env)?;
        AuthContext::new(env).acting_as_owner()?;
        config::set(env, key, value);
        ttl::extend_instance(env);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
