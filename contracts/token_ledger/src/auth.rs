use soroban_sdk::{Address, Env, Vec};

use crate::{config, LedgerError};

/// Signers established for the current invocation.
///
/// `acting_as` asks the host for an address's signature and records it;
/// everything downstream asks `is_authorized_as` instead of touching the host
/// again, so nested flows (issue -> transfer) share one set of signers.
pub struct AuthContext<'a> {
    env: &'a Env,
    signers: Vec<Address>,
}

impl<'a> AuthContext<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self {
            env,
            signers: Vec::new(env),
        }
    }

    /// Requires `account` to have signed the invocation.
    pub fn acting_as(&mut self, account: &Address) -> &mut Self {
        if !self.is_authorized_as(account) {
            account.require_auth();
            self.signers.push_back(account.clone());
        }
        self
    }

    /// Requires the contract owner to have signed and returns its address.
    pub fn acting_as_owner(&mut self) -> Result<Address, LedgerError> {
        let owner = config::owner(self.env)?;
        self.acting_as(&owner);
        Ok(owner)
    }

    pub fn is_authorized_as(&self, account: &Address) -> bool {
        self.signers.iter().any(|signer| signer == *account)
    }

    pub fn is_owner(&self) -> bool {
        config::owner(self.env)
            .map(|owner| self.is_authorized_as(&owner))
            .unwrap_or(false)
    }

    pub fn require(&self, account: &Address) -> Result<(), LedgerError> {
        if !self.is_authorized_as(account) {
            return Err(LedgerError::Unauthorized);
        }
        Ok(())
    }
}
