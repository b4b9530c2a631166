//! Deferred-release scheduling.
//!
//! A contract hands a [`ReleaseKey`] and a deadline to a [`ReleaseScheduler`]
//! and later consumes the schedule from its release callback. There is at most
//! one schedule per key: scheduling again replaces the previous deadline.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

use crate::ttl;

// ── Storage keys ──────────────────────────────────────────────

const SCHEDULE: Symbol = symbol_short!("SCHED");

// ── Types ─────────────────────────────────────────────────────

/// Identifies one schedulable release: an owner within one asset namespace.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReleaseKey {
    pub owner: Address,
    /// Asset code the release belongs to.
    pub code: String,
}

/// A pending callback registered for a [`ReleaseKey`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScheduledRelease {
    pub key: ReleaseKey,
    /// Ledger timestamp at or after which the callback may run.
    pub execute_at: u64,
    /// Ledger timestamp at which this schedule was registered.
    pub scheduled_at: u64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    /// Nothing is scheduled for the key.
    NotScheduled,
    /// The deadline has not been reached yet.
    NotDue,
}

/// The scheduler contract a ledger depends on.
pub trait ReleaseScheduler {
    /// Registers a callback for `key` at `execute_at`, replacing any prior one.
    fn schedule_at(&self, key: &ReleaseKey, execute_at: u64) -> ScheduledRelease;

    /// Drops the schedule for `key`. Returns whether one existed.
    fn cancel(&self, key: &ReleaseKey) -> bool;

    /// Looks up the schedule for `key` without consuming it.
    fn scheduled(&self, key: &ReleaseKey) -> Option<ScheduledRelease>;

    /// Consumes the schedule for `key` if its deadline has passed at `now`.
    fn take_due(&self, key: &ReleaseKey, now: u64) -> Result<ScheduledRelease, ScheduleError>;
}

/// Scheduler backed by the calling contract's persistent storage.
///
/// Entries are driven by an off-chain keeper that invokes the contract's
/// release callback once `execute_at` has passed.
pub struct StorageScheduler<'a> {
    env: &'a Env,
}

impl<'a> StorageScheduler<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    fn storage_key(key: &ReleaseKey) -> (Symbol, ReleaseKey) {
        (SCHEDULE, key.clone())
    }
}

impl ReleaseScheduler for StorageScheduler<'_> {
    fn schedule_at(&self, key: &ReleaseKey, execute_at: u64) -> ScheduledRelease {
        let entry = ScheduledRelease {
            key: key.clone(),
            execute_at,
            scheduled_at: self.env.ledger().timestamp(),
        };
        let storage_key = Self::storage_key(key);
        self.env.storage().persistent().set(&storage_key, &entry);
        ttl::extend_persistent(self.env, &storage_key);
        entry
    }

    fn cancel(&self, key: &ReleaseKey) -> bool {
        let storage_key = Self::storage_key(key);
        let existed = self.env.storage().persistent().has(&storage_key);
        if existed {
            self.env.storage().persistent().remove(&storage_key);
        }
        existed
    }

    fn scheduled(&self, key: &ReleaseKey) -> Option<ScheduledRelease> {
        self.env
            .storage()
            .persistent()
            .get(&Self::storage_key(key))
    }

    fn take_due(&self, key: &ReleaseKey, now: u64) -> Result<ScheduledRelease, ScheduleError> {
        let entry = self.scheduled(key).ok_or(ScheduleError::NotScheduled)?;
        if now < entry.execute_at {
            return Err(ScheduleError::NotDue);
        }
        self.env
            .storage()
            .persistent()
            .remove(&Self::storage_key(key));
        Ok(entry)
    }
}
