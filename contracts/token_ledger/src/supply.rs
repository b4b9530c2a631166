use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use common::ttl;

use crate::auth::AuthContext;
use crate::types::{Asset, ConfigKey, CurrencyStats};
use crate::validation::{validate_memo, validate_quantity, validate_symbol};
use crate::{accounts, config, events, LedgerError};

// ── Storage helpers ───────────────────────────────────────────

const STAT: Symbol = symbol_short!("STAT");

fn stats_key(code: &String) -> (Symbol, String) {
    (STAT, code.clone())
}

pub fn get(env: &Env, code: &String) -> Option<CurrencyStats> {
    env.storage().persistent().get(&stats_key(code))
}

fn put(env: &Env, stats: &CurrencyStats) {
    let key = stats_key(&stats.symbol.code);
    env.storage().persistent().set(&key, stats);
    ttl::extend_persistent(env, &key);
}

/// Shared quantity check: a valid positive amount whose symbol matches the
/// registered asset exactly, precision included.
pub fn load_for(env: &Env, quantity: &Asset) -> Result<CurrencyStats, LedgerError> {
    validate_quantity(quantity)?;
    let stats = get(env, &quantity.symbol.code).ok_or(LedgerError::SymbolNotFound)?;
    if quantity.symbol != stats.symbol {
        return Err(LedgerError::PrecisionMismatch);
    }
    Ok(stats)
}

// ── Operations ────────────────────────────────────────────────

/// Registers a new asset with zero supply. Caller must be the owner.
pub fn create(env: &Env, issuer: &Address, max_supply: &Asset) -> Result<(), LedgerError> {
    validate_quantity(max_supply)?;

    if get(env, &max_supply.symbol.code).is_some() {
        return Err(LedgerError::SymbolExists);
    }

    put(
        env,
        &CurrencyStats {
            symbol: max_supply.symbol.clone(),
            issuer: issuer.clone(),
            supply: 0,
            max_supply: max_supply.amount,
        },
    );

    events::publish_token_created(env, issuer.clone(), max_supply.clone());

    Ok(())
}

/// Mints `quantity` to the issuer and, when `to` differs, forwards it with
/// the issuer's authority.
pub fn issue(
    env: &Env,
    auth: &mut AuthContext,
    to: &Address,
    quantity: &Asset,
    memo: &String,
) -> Result<CurrencyStats, LedgerError> {
    config::assert_enabled(env, ConfigKey::IssueEnabled)?;

    validate_symbol(&quantity.symbol)?;
    validate_memo(memo)?;

    let mut stats = get(env, &quantity.symbol.code).ok_or(LedgerError::SymbolNotFound)?;
    auth.acting_as(&stats.issuer);

    load_for(env, quantity)?;

    let headroom = stats.max_supply - stats.supply;
    if quantity.amount > headroom {
        return Err(LedgerError::SupplyExceeded);
    }

    stats.supply += quantity.amount;
    put(env, &stats);

    let issuer = stats.issuer.clone();
    accounts::credit(env, &issuer, quantity, &issuer)?;

    events::publish_issued(
        env,
        issuer.clone(),
        to.clone(),
        quantity.clone(),
        stats.supply,
        memo.clone(),
    );

    if *to != issuer {
        accounts::move_funds(env, auth, &issuer, to, quantity, memo)?;
    }

    Ok(stats)
}

/// Lowers the cap of an asset. Supply is left untouched.
pub fn reduce_cap(
    env: &Env,
    auth: &mut AuthContext,
    issuer: &Address,
    new_max_supply: &Asset,
) -> Result<CurrencyStats, LedgerError> {
    auth.acting_as(issuer);

    let mut stats = load_for(env, new_max_supply)?;
    if stats.issuer != *issuer {
        return Err(LedgerError::Unauthorized);
    }
    if new_max_supply.amount < stats.supply {
        return Err(LedgerError::CapBelowSupply);
    }
    if new_max_supply.amount > stats.max_supply {
        return Err(LedgerError::CapIncrease);
    }

    stats.max_supply = new_max_supply.amount;
    put(env, &stats);

    events::publish_cap_reduced(env, issuer.clone(), new_max_supply.clone(), stats.supply);

    Ok(stats)
}
