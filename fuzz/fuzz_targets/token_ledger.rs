#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, Env, String};

use token_ledger::{Asset, TokenLedgerContract, TokenLedgerContractClient, TokenSymbol};

const MAX_OPS: usize = 64;
const SUPPLY: i128 = 10_000;

#[derive(Arbitrary, Debug)]
enum Op {
    Transfer { from: u8, to: u8, amount: u16 },
    Stake { who: u8, amount: u16 },
    Unstake { who: u8, amount: u16, immediate: bool },
    Lock { who: u8, amount: u16 },
    Unlock { who: u8, amount: u16 },
    Advance { seconds: u32 },
    Release { who: u8 },
    SetDelay { seconds: u16 },
}

fuzz_target!(|ops: Vec<Op>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_000);

    let contract_id = env.register(TokenLedgerContract, ());
    let client = TokenLedgerContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let accounts = [
        Address::generate(&env),
        Address::generate(&env),
        Address::generate(&env),
        Address::generate(&env),
    ];
    let tok = TokenSymbol {
        code: String::from_str(&env, "FUZZ"),
        precision: 0,
    };
    let asset = |amount: i128| Asset {
        amount,
        symbol: tok.clone(),
    };
    let memo = String::from_str(&env, "");
    let pick = |index: u8| &accounts[usize::from(index) % accounts.len()];

    client.init(&owner);
    client.create(&accounts[0], &asset(SUPPLY));
    client.issue(&accounts[0], &asset(SUPPLY), &memo);

    for op in ops.iter().take(MAX_OPS) {
        match *op {
            Op::Transfer { from, to, amount } => {
                let _ = client.try_transfer(pick(from), pick(to), &asset(amount.into()), &memo);
            }
            Op::Stake { who, amount } => {
                let _ = client.try_stake(pick(who), &asset(amount.into()));
            }
            Op::Unstake {
                who,
                amount,
                immediate,
            } => {
                let caller = if immediate { &owner } else { pick(who) };
                let _ = client.try_unstake(caller, pick(who), &asset(amount.into()), &immediate);
            }
            Op::Lock { who, amount } => {
                let _ = client.try_lock(pick(who), &asset(amount.into()));
            }
            Op::Unlock { who, amount } => {
                let _ = client.try_unlock(pick(who), &asset(amount.into()));
            }
            Op::Advance { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now + u64::from(seconds));
            }
            Op::Release { who } => {
                let _ = client.try_defer_release(pick(who), &tok);
            }
            Op::SetDelay { seconds } => {
                client.set_unstake_delay(&u64::from(seconds));
            }
        }

        let mut total = 0i128;
        for account in &accounts {
            let Some(balance) = client.try_get_balance(account, &tok.code).ok().and_then(Result::ok)
            else {
                continue;
            };
            assert!(balance.total - balance.locked - balance.staked >= 0);
            assert!(balance.locked >= 0 && balance.staked >= 0);

            let staked = client.get_stake(account, &tok.code).map_or(0, |e| e.amount);
            let pending = client
                .get_pending_release(account, &tok.code)
                .map_or(0, |p| p.amount);
            assert_eq!(balance.staked, staked + pending);

            total += balance.total;
        }
        assert_eq!(total, client.get_stats(&tok.code).supply);
    }
});
