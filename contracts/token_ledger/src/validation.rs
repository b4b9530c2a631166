use soroban_sdk::String;

use crate::types::{Asset, TokenSymbol};
use crate::LedgerError;

const MIN_CODE_LEN: u32 = 1;
const MAX_CODE_LEN: u32 = 7;

const MAX_PRECISION: u32 = 18;

/// Largest representable amount, 2^62 - 1.
pub const MAX_AMOUNT: i128 = (1 << 62) - 1;

pub const MAX_MEMO_LEN: u32 = 256;

/// Validate an asset symbol.
/// Codes are 1 to 7 uppercase ASCII letters; precision is at most 18 decimals.
pub fn validate_symbol(symbol: &TokenSymbol) -> Result<(), LedgerError> {
    let len = symbol.code.len();
    if !(MIN_CODE_LEN..=MAX_CODE_LEN).contains(&len) || symbol.precision > MAX_PRECISION {
        return Err(LedgerError::InvalidSymbol);
    }

    let mut buf = [0u8; MAX_CODE_LEN as usize];
    symbol.code.copy_into_slice(&mut buf[..len as usize]);

    if !buf[..len as usize].iter().all(u8::is_ascii_uppercase) {
        return Err(LedgerError::InvalidSymbol);
    }

    Ok(())
}

/// Validate a quantity carried by an action.
/// The symbol must be well formed and the amount strictly positive and in range.
pub fn validate_quantity(quantity: &Asset) -> Result<(), LedgerError> {
    validate_symbol(&quantity.symbol)?;
    if quantity.amount <= 0 || quantity.amount > MAX_AMOUNT {
        return Err(LedgerError::InvalidQuantity);
    }
    Ok(())
}

pub fn validate_memo(memo: &String) -> Result<(), LedgerError> {
    if memo.len() > MAX_MEMO_LEN {
        return Err(LedgerError::MemoTooLong);
    }
    Ok(())
}
