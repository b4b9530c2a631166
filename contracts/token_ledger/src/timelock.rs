use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

use common::ttl;

// ── Storage key constants ───────────────────────────────────────────────────

const UNSTAKE: Symbol = symbol_short!("UNSTAKE");

// ── Types ───────────────────────────────────────────────────────────────────

/// Funds that left the stake ledger and are waiting out the unstake delay.
///
/// There is at most one entry per (owner, code). A further deferred unstake
/// before release adds to `amount` and moves `request_time` forward; the
/// entry is removed when the scheduled release fires.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingRelease {
    pub owner: Address,
    /// Tokens to be returned to the owner's available balance.
    pub amount: i128,
    /// Ledger timestamp of the most recent unstake request.
    pub request_time: u64,
}

// ── Storage helpers ─────────────────────────────────────────────────────────

fn pending_key(owner: &Address, code: &String) -> (Symbol, Address, String) {
    (UNSTAKE, owner.clone(), code.clone())
}

/// Persist a `PendingRelease` under the asset `code`.
pub fn store_pending(env: &Env, code: &String, pending: &PendingRelease) {
    let key = pending_key(&pending.owner, code);
    env.storage().persistent().set(&key, pending);
    ttl::extend_persistent(env, &key);
}

/// Retrieve the `PendingRelease` for an owner, returning `None` when not found.
pub fn get_pending(env: &Env, owner: &Address, code: &String) -> Option<PendingRelease> {
    env.storage().persistent().get(&pending_key(owner, code))
}

pub fn remove_pending(env: &Env, owner: &Address, code: &String) {
    env.storage().persistent().remove(&pending_key(owner, code));
}
