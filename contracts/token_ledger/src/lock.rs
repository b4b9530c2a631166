use soroban_sdk::{Address, Env};

use crate::types::{AccountBalance, Asset};
use crate::{accounts, events, supply, LedgerError};

/// Places an administrative hold on part of the available balance.
pub fn lock(env: &Env, account: &Address, quantity: &Asset) -> Result<AccountBalance, LedgerError> {
    supply::load_for(env, quantity)?;

    let code = &quantity.symbol.code;
    let mut balance = accounts::load(env, account, code)?;
    if balance.available() < quantity.amount {
        return Err(LedgerError::InsufficientAvailable);
    }

    balance.locked += quantity.amount;
    accounts::put(env, code, &balance);

    events::publish_locked(env, account.clone(), quantity.clone(), balance.locked);

    Ok(balance)
}

/// Releases part of an administrative hold.
pub fn unlock(
    env: &Env,
    account: &Address,
    quantity: &Asset,
) -> Result<AccountBalance, LedgerError> {
    supply::load_for(env, quantity)?;

    let code = &quantity.symbol.code;
    let mut balance = accounts::load(env, account, code)?;
    if balance.locked < quantity.amount {
        return Err(LedgerError::InsufficientLocked);
    }

    balance.locked -= quantity.amount;
    accounts::put(env, code, &balance);

    events::publish_unlocked(env, account.clone(), quantity.clone(), balance.locked);

    Ok(balance)
}
