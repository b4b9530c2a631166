use soroban_sdk::{log, symbol_short, Address, Env, String, Symbol};

use common::ttl;

use crate::auth::AuthContext;
use crate::types::{AccountBalance, Asset, ConfigKey};
use crate::validation::validate_memo;
use crate::{config, events, supply, LedgerError};

// ── Storage helpers ───────────────────────────────────────────

const ACCOUNT: Symbol = symbol_short!("ACCOUNT");

fn balance_key(owner: &Address, code: &String) -> (Symbol, Address, String) {
    (ACCOUNT, owner.clone(), code.clone())
}

pub fn get(env: &Env, owner: &Address, code: &String) -> Option<AccountBalance> {
    env.storage().persistent().get(&balance_key(owner, code))
}

pub fn load(env: &Env, owner: &Address, code: &String) -> Result<AccountBalance, LedgerError> {
    get(env, owner, code).ok_or(LedgerError::AccountNotFound)
}

pub fn put(env: &Env, code: &String, balance: &AccountBalance) {
    let key = balance_key(&balance.owner, code);
    env.storage().persistent().set(&key, balance);
    ttl::extend_persistent(env, &key);
}

// ── Balance movements ─────────────────────────────────────────

/// Adds `quantity` to `owner`, creating the row on first credit with
/// `payer` recorded as its funder. Only trusted internal flows call this.
pub fn credit(
    env: &Env,
    owner: &Address,
    quantity: &Asset,
    payer: &Address,
) -> Result<AccountBalance, LedgerError> {
    let code = &quantity.symbol.code;
    let balance = match get(env, owner, code) {
        Some(mut balance) => {
            balance.total = balance
                .total
                .checked_add(quantity.amount)
                .ok_or(LedgerError::Overflow)?;
            balance
        }
        None => AccountBalance {
            owner: owner.clone(),
            total: quantity.amount,
            locked: 0,
            staked: 0,
            payer: payer.clone(),
        },
    };
    put(env, code, &balance);
    Ok(balance)
}

/// Removes `quantity` from the available part of `owner`'s balance.
pub fn debit(env: &Env, owner: &Address, quantity: &Asset) -> Result<AccountBalance, LedgerError> {
    let code = &quantity.symbol.code;
    let mut balance = load(env, owner, code)?;
    if balance.available() < quantity.amount {
        log!(env, "overdrawn balance", owner.clone(), balance.available(), quantity.amount);
        return Err(LedgerError::InsufficientAvailable);
    }
    balance.total -= quantity.amount;
    put(env, code, &balance);
    Ok(balance)
}

/// Transfer entry logic, gated by the transfer flag.
pub fn transfer(
    env: &Env,
    auth: &mut AuthContext,
    from: &Address,
    to: &Address,
    quantity: &Asset,
    memo: &String,
) -> Result<(), LedgerError> {
    config::assert_enabled(env, ConfigKey::TransferEnabled)?;
    move_funds(env, auth, from, to, quantity, memo)
}

/// Moves funds between two accounts under an already established context.
///
/// The storage payer for a newly created destination row is `to` when it
/// co-signed, otherwise `from`.
pub(crate) fn move_funds(
    env: &Env,
    auth: &mut AuthContext,
    from: &Address,
    to: &Address,
    quantity: &Asset,
    memo: &String,
) -> Result<(), LedgerError> {
    if from == to {
        return Err(LedgerError::SelfTransfer);
    }
    auth.require(from)?;

    supply::load_for(env, quantity)?;
    validate_memo(memo)?;

    let payer = if auth.is_authorized_as(to) {
        to.clone()
    } else {
        from.clone()
    };

    debit(env, from, quantity)?;
    credit(env, to, quantity, &payer)?;

    events::publish_transfer(
        env,
        from.clone(),
        to.clone(),
        quantity.clone(),
        payer,
        memo.clone(),
    );

    Ok(())
}
