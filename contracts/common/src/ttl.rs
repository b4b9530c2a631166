use soroban_sdk::{Env, IntoVal, Val};

/// Ledgers per day at a ~5s close time.
const DAY_IN_LEDGERS: u32 = 17_280;

pub const PERSISTENT_TTL_THRESHOLD: u32 = 5_184_000; // ~60 days
pub const PERSISTENT_TTL_EXTEND_TO: u32 = 10_368_000; // ~120 days

pub const INSTANCE_TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;

/// Bumps a persistent entry once its remaining TTL drops below the threshold.
///
/// The entry must exist.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

/// Bumps the contract instance (and all instance-storage entries with it).
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::storage::Persistent as _;
    use soroban_sdk::{contract, contractimpl, symbol_short};

    #[contract]
    struct TtlHost;

    #[contractimpl]
    impl TtlHost {
        pub fn ping() -> u32 {
            1
        }
    }

    #[test]
    fn extend_persistent_lifts_entry_past_threshold() {
        let env = Env::default();
        let host = env.register(TtlHost, ());
        let key = symbol_short!("ROW");

        env.as_contract(&host, || {
            env.storage().persistent().set(&key, &7u32);
            assert!(env.storage().persistent().get_ttl(&key) < PERSISTENT_TTL_THRESHOLD);

            // Capped at the network's max entry TTL in the default test ledger
            extend_persistent(&env, &key);
            assert!(env.storage().persistent().get_ttl(&key) > PERSISTENT_TTL_THRESHOLD);
        });
    }
}
