use soroban_sdk::{log, symbol_short, Address, Env, Symbol};

use crate::types::ConfigKey;
use crate::{events, LedgerError};

// ── Storage keys ──────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const CONFIG: Symbol = symbol_short!("CONFIG");

pub const DEFAULT_UNSTAKE_DELAY_SECONDS: u64 = 86_400;

fn config_key(key: ConfigKey) -> (Symbol, ConfigKey) {
    (CONFIG, key)
}

pub fn get(env: &Env, key: ConfigKey) -> Option<u64> {
    env.storage().instance().get(&config_key(key))
}

/// Upserts a config row. No transition rules beyond the caller's checks.
pub fn set(env: &Env, key: ConfigKey, value: u64) {
    env.storage().instance().set(&config_key(key.clone()), &value);
    events::publish_config_updated(env, key, value);
}

pub fn is_initialized(env: &Env) -> bool {
    get(env, ConfigKey::Init).unwrap_or(0) > 0
}

pub fn require_initialized(env: &Env) -> Result<(), LedgerError> {
    if !is_initialized(env) {
        return Err(LedgerError::NotInitialized);
    }
    Ok(())
}

pub fn owner(env: &Env) -> Result<Address, LedgerError> {
    env.storage()
        .instance()
        .get(&OWNER)
        .ok_or(LedgerError::NotInitialized)
}

/// Seeds the feature flags and records the owner. The INIT row may only go
/// from unset/0 to 1.
pub fn initialize(env: &Env, owner: &Address) -> Result<(), LedgerError> {
    if is_initialized(env) {
        return Err(LedgerError::AlreadyInitialized);
    }

    env.storage().instance().set(&OWNER, owner);

    set(env, ConfigKey::StakeEnabled, 1);
    set(env, ConfigKey::IssueEnabled, 1);
    set(env, ConfigKey::TransferEnabled, 1);
    set(
        env,
        ConfigKey::UnstakeDelaySeconds,
        DEFAULT_UNSTAKE_DELAY_SECONDS,
    );

    set(env, ConfigKey::Init, 1);

    events::publish_initialized(env, owner.clone(), DEFAULT_UNSTAKE_DELAY_SECONDS);

    Ok(())
}

pub fn assert_enabled(env: &Env, key: ConfigKey) -> Result<(), LedgerError> {
    match get(env, key.clone()) {
        Some(value) if value > 0 => Ok(()),
        _ => {
            log!(env, "feature disabled", key);
            Err(LedgerError::FeatureDisabled)
        }
    }
}

pub fn unstake_delay(env: &Env) -> Result<u64, LedgerError> {
    get(env, ConfigKey::UnstakeDelaySeconds).ok_or(LedgerError::ConfigMissing)
}
