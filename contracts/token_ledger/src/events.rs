use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

use crate::types::{Asset, ConfigKey};

// ── Event payloads ────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub unstake_delay: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigUpdatedEvent {
    pub key: ConfigKey,
    pub value: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenCreatedEvent {
    pub issuer: Address,
    pub max_supply: Asset,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IssuedEvent {
    pub issuer: Address,
    pub to: Address,
    pub quantity: Asset,
    pub supply: i128,
    pub memo: String,
}

/// Delivered to both parties through the event topics.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub quantity: Asset,
    pub payer: Address,
    pub memo: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapReducedEvent {
    pub issuer: Address,
    pub max_supply: Asset,
    pub supply: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockChangedEvent {
    pub account: Address,
    pub quantity: Asset,
    pub locked: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub owner: Address,
    pub quantity: Asset,
    pub total_staking: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub owner: Address,
    pub quantity: Asset,
    pub immediate: bool,
    pub total_staking: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReleaseScheduledEvent {
    pub owner: Address,
    pub code: String,
    pub pending: i128,
    pub execute_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReleasedEvent {
    pub owner: Address,
    pub quantity: Asset,
    pub total_unstaking: i128,
}

// ── Publishers ────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address, unstake_delay: u64) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            unstake_delay,
        },
    );
}

pub fn publish_config_updated(env: &Env, key: ConfigKey, value: u64) {
    env.events().publish(
        (symbol_short!("CONFIG"),),
        ConfigUpdatedEvent { key, value },
    );
}

pub fn publish_token_created(env: &Env, issuer: Address, max_supply: Asset) {
    env.events().publish(
        (symbol_short!("CREATE"), issuer.clone()),
        TokenCreatedEvent { issuer, max_supply },
    );
}

pub fn publish_issued(
    env: &Env,
    issuer: Address,
    to: Address,
    quantity: Asset,
    supply: i128,
    memo: String,
) {
    env.events().publish(
        (symbol_short!("ISSUE"), issuer.clone(), to.clone()),
        IssuedEvent {
            issuer,
            to,
            quantity,
            supply,
            memo,
        },
    );
}

pub fn publish_transfer(
    env: &Env,
    from: Address,
    to: Address,
    quantity: Asset,
    payer: Address,
    memo: String,
) {
    env.events().publish(
        (symbol_short!("TRANSFER"), from.clone(), to.clone()),
        TransferEvent {
            from,
            to,
            quantity,
            payer,
            memo,
        },
    );
}

pub fn publish_cap_reduced(env: &Env, issuer: Address, max_supply: Asset, supply: i128) {
    env.events().publish(
        (symbol_short!("REDUCE"), issuer.clone()),
        CapReducedEvent {
            issuer,
            max_supply,
            supply,
        },
    );
}

pub fn publish_locked(env: &Env, account: Address, quantity: Asset, locked: i128) {
    env.events().publish(
        (symbol_short!("LOCK"), account.clone()),
        LockChangedEvent {
            account,
            quantity,
            locked,
        },
    );
}

pub fn publish_unlocked(env: &Env, account: Address, quantity: Asset, locked: i128) {
    env.events().publish(
        (symbol_short!("UNLOCK"), account.clone()),
        LockChangedEvent {
            account,
            quantity,
            locked,
        },
    );
}

pub fn publish_staked(env: &Env, owner: Address, quantity: Asset, total_staking: i128) {
    env.events().publish(
        (symbol_short!("STAKE"), owner.clone()),
        StakedEvent {
            owner,
            quantity,
            total_staking,
        },
    );
}

pub fn publish_unstaked(
    env: &Env,
    owner: Address,
    quantity: Asset,
    immediate: bool,
    total_staking: i128,
) {
    env.events().publish(
        (symbol_short!("UNSTAKE"), owner.clone()),
        UnstakedEvent {
            owner,
            quantity,
            immediate,
            total_staking,
        },
    );
}

pub fn publish_release_scheduled(
    env: &Env,
    owner: Address,
    code: String,
    pending: i128,
    execute_at: u64,
) {
    env.events().publish(
        (symbol_short!("SCHED"), owner.clone()),
        ReleaseScheduledEvent {
            owner,
            code,
            pending,
            execute_at,
        },
    );
}

pub fn publish_released(env: &Env, owner: Address, quantity: Asset, total_unstaking: i128) {
    env.events().publish(
        (symbol_short!("RELEASE"), owner.clone()),
        ReleasedEvent {
            owner,
            quantity,
            total_unstaking,
        },
    );
}
