//! Staking state machine.
//!
//! Per (owner, code) an account is Unstaked (no stake or pending row),
//! Staked (stake entry > 0) or Releasing (pending release > 0, possibly next
//! to a smaller remaining stake). Funds leave Releasing only through
//! [`release`], or skip it entirely through an immediate unstake by the owner.
//!
//! Throughout, `AccountBalance::staked == stake entry + pending release`.

use soroban_sdk::{log, symbol_short, Address, Env, String, Symbol};

use common::scheduler::{ReleaseKey, ReleaseScheduler};
use common::ttl;

use crate::auth::AuthContext;
use crate::timelock::{self, PendingRelease};
use crate::types::{AccountBalance, Asset, ConfigKey, StakeEntry, StakeStats, TokenSymbol};
use crate::validation::validate_symbol;
use crate::{accounts, config, events, supply, LedgerError};

// ── Storage helpers ───────────────────────────────────────────

const STAKE_STATS: Symbol = symbol_short!("STK_STAT");
const STAKE: Symbol = symbol_short!("STAKE");

fn stats_key(code: &String) -> (Symbol, String) {
    (STAKE_STATS, code.clone())
}

fn stake_key(owner: &Address, code: &String) -> (Symbol, Address, String) {
    (STAKE, owner.clone(), code.clone())
}

pub fn get_stats(env: &Env, code: &String) -> Option<StakeStats> {
    env.storage().persistent().get(&stats_key(code))
}

fn put_stats(env: &Env, stats: &StakeStats) {
    let key = stats_key(&stats.code);
    env.storage().persistent().set(&key, stats);
    ttl::extend_persistent(env, &key);
}

pub fn get_stake(env: &Env, owner: &Address, code: &String) -> Option<StakeEntry> {
    env.storage().persistent().get(&stake_key(owner, code))
}

fn put_stake(env: &Env, code: &String, entry: &StakeEntry) {
    let key = stake_key(&entry.owner, code);
    env.storage().persistent().set(&key, entry);
    ttl::extend_persistent(env, &key);
}

fn remove_stake(env: &Env, owner: &Address, code: &String) {
    env.storage().persistent().remove(&stake_key(owner, code));
}

fn release_key(owner: &Address, code: &String) -> ReleaseKey {
    ReleaseKey {
        owner: owner.clone(),
        code: code.clone(),
    }
}

// ── Operations ────────────────────────────────────────────────

/// Moves `quantity` from `from`'s available balance into stake.
pub fn stake(
    env: &Env,
    auth: &AuthContext,
    from: &Address,
    quantity: &Asset,
) -> Result<AccountBalance, LedgerError> {
    auth.require(from)?;
    config::assert_enabled(env, ConfigKey::StakeEnabled)?;
    supply::load_for(env, quantity)?;

    let code = &quantity.symbol.code;
    let mut balance = accounts::load(env, from, code)?;
    if balance.available() < quantity.amount {
        return Err(LedgerError::InsufficientAvailable);
    }

    let entry = match get_stake(env, from, code) {
        Some(mut entry) => {
            entry.amount = entry
                .amount
                .checked_add(quantity.amount)
                .ok_or(LedgerError::Overflow)?;
            entry
        }
        None => StakeEntry {
            owner: from.clone(),
            amount: quantity.amount,
        },
    };

    let mut stats = get_stats(env, code).unwrap_or(StakeStats {
        code: code.clone(),
        total_staking: 0,
        total_unstaking: 0,
    });
    stats.total_staking = stats
        .total_staking
        .checked_add(quantity.amount)
        .ok_or(LedgerError::Overflow)?;

    balance.staked += quantity.amount;

    put_stake(env, code, &entry);
    put_stats(env, &stats);
    accounts::put(env, code, &balance);

    events::publish_staked(env, from.clone(), quantity.clone(), stats.total_staking);

    Ok(balance)
}

/// Takes `quantity` out of `from`'s stake.
///
/// With `immediate` the owner hands the funds straight back to the available
/// balance. Otherwise they join the pending release and the release is
/// (re)scheduled at `now + unstake delay`, replacing any earlier schedule.
pub fn unstake<S: ReleaseScheduler>(
    env: &Env,
    auth: &AuthContext,
    scheduler: &S,
    from: &Address,
    quantity: &Asset,
    immediate: bool,
) -> Result<(), LedgerError> {
    supply::load_for(env, quantity)?;
    config::assert_enabled(env, ConfigKey::StakeEnabled)?;

    let by_owner = auth.is_owner();
    if !(by_owner || auth.is_authorized_as(from)) {
        return Err(LedgerError::Unauthorized);
    }
    if immediate && !by_owner {
        return Err(LedgerError::Unauthorized);
    }

    let code = &quantity.symbol.code;
    let staked = get_stake(env, from, code).map_or(0, |entry| entry.amount);
    if staked < quantity.amount {
        return Err(LedgerError::InsufficientStake);
    }

    let remaining = staked - quantity.amount;
    if remaining == 0 {
        remove_stake(env, from, code);
    } else {
        put_stake(
            env,
            code,
            &StakeEntry {
                owner: from.clone(),
                amount: remaining,
            },
        );
    }

    let mut stats = get_stats(env, code).ok_or(LedgerError::InsufficientStake)?;
    stats.total_staking -= quantity.amount;

    if immediate {
        let mut balance = accounts::load(env, from, code)?;
        balance.staked -= quantity.amount;

        put_stats(env, &stats);
        accounts::put(env, code, &balance);

        events::publish_unstaked(env, from.clone(), quantity.clone(), true, stats.total_staking);
        return Ok(());
    }

    let now = env.ledger().timestamp();
    let execute_at = now
        .checked_add(config::unstake_delay(env)?)
        .ok_or(LedgerError::Overflow)?;

    stats.total_unstaking = stats
        .total_unstaking
        .checked_add(quantity.amount)
        .ok_or(LedgerError::Overflow)?;
    put_stats(env, &stats);

    let pending = match timelock::get_pending(env, from, code) {
        Some(mut pending) => {
            pending.amount = pending
                .amount
                .checked_add(quantity.amount)
                .ok_or(LedgerError::Overflow)?;
            pending.request_time = now;
            pending
        }
        None => PendingRelease {
            owner: from.clone(),
            amount: quantity.amount,
            request_time: now,
        },
    };
    timelock::store_pending(env, code, &pending);

    let key = release_key(from, code);
    scheduler.cancel(&key);
    scheduler.schedule_at(&key, execute_at);

    events::publish_unstaked(env, from.clone(), quantity.clone(), false, stats.total_staking);
    events::publish_release_scheduled(env, from.clone(), code.clone(), pending.amount, execute_at);

    Ok(())
}

/// Scheduler callback completing a deferred unstake.
///
/// Returns the whole pending amount to `owner`'s available balance.
pub fn release<S: ReleaseScheduler>(
    env: &Env,
    scheduler: &S,
    owner: &Address,
    symbol: &TokenSymbol,
) -> Result<i128, LedgerError> {
    validate_symbol(symbol)?;
    let registered = supply::get(env, &symbol.code).ok_or(LedgerError::SymbolNotFound)?;
    if registered.symbol != *symbol {
        return Err(LedgerError::PrecisionMismatch);
    }

    let code = &symbol.code;
    let pending = timelock::get_pending(env, owner, code).ok_or(LedgerError::NoPendingRelease)?;

    let fired = scheduler.take_due(&release_key(owner, code), env.ledger().timestamp())?;
    log!(env, "deferrelease", owner.clone(), fired.execute_at);

    timelock::remove_pending(env, owner, code);

    let mut stats = get_stats(env, code).ok_or(LedgerError::NoPendingRelease)?;
    stats.total_unstaking -= pending.amount;
    put_stats(env, &stats);

    let mut balance = accounts::load(env, owner, code)?;
    balance.staked -= pending.amount;
    accounts::put(env, code, &balance);

    events::publish_released(
        env,
        owner.clone(),
        Asset {
            amount: pending.amount,
            symbol: symbol.clone(),
        },
        stats.total_unstaking,
    );

    Ok(pending.amount)
}
