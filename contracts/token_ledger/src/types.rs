use soroban_sdk::{contracttype, Address, String};

/// Identifies one fungible asset: an uppercase code plus its decimal precision.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenSymbol {
    pub code: String,
    pub precision: u32,
}

/// An amount denominated in a [`TokenSymbol`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Asset {
    pub amount: i128,
    pub symbol: TokenSymbol,
}

/// Named feature flags and scalars held by the config store.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigKey {
    Init,
    StakeEnabled,
    IssueEnabled,
    TransferEnabled,
    UnstakeDelaySeconds,
}

/// Supply ledger row, one per asset code.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurrencyStats {
    pub symbol: TokenSymbol,
    pub issuer: Address,
    pub supply: i128,
    pub max_supply: i128,
}

/// Per-(owner, code) balance triple.
///
/// `payer` is the address that funded creation of the row and never changes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountBalance {
    pub owner: Address,
    pub total: i128,
    pub locked: i128,
    pub staked: i128,
    pub payer: Address,
}

impl AccountBalance {
    /// Balance that is neither locked nor staked.
    pub fn available(&self) -> i128 {
        self.total - self.locked - self.staked
    }
}

/// Aggregate staking figures for one asset code.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeStats {
    pub code: String,
    /// Sum of all outstanding stake entries.
    pub total_staking: i128,
    /// Sum of all outstanding pending releases.
    pub total_unstaking: i128,
}

/// Funds an owner currently has staked.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeEntry {
    pub owner: Address,
    pub amount: i128,
}
