//! Balance and allowance bookkeeping.
//!
//! Zero balances and allowances are removed rather than stored. The sum of
//! all balances equals the total supply after every operation.

use cosmwasm_std::{Addr, Event, StdError, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{ALLOWANCES, BALANCES, TOKEN_INFO};

pub fn balance_of(storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
    Ok(BALANCES.may_load(storage, account)?.unwrap_or_default())
}

fn set_balance(storage: &mut dyn Storage, account: &Addr, amount: Uint128) -> StdResult<()> {
    if amount.is_zero() {
        BALANCES.remove(storage, account);
        Ok(())
    } else {
        BALANCES.save(storage, account, &amount)
    }
}

fn debit(storage: &mut dyn Storage, account: &Addr, amount: Uint128) -> Result<(), ContractError> {
    let available = balance_of(storage, account)?;
    if available < amount {
        return Err(ContractError::InsufficientBalance {
            available,
            required: amount,
        });
    }
    set_balance(storage, account, available - amount)?;
    Ok(())
}

fn credit(storage: &mut dyn Storage, account: &Addr, amount: Uint128) -> StdResult<()> {
    let balance = balance_of(storage, account)?
        .checked_add(amount)
        .map_err(StdError::from)?;
    set_balance(storage, account, balance)
}

fn require_positive(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    Ok(())
}

// ============================================================================
// Value Movements
// ============================================================================

pub fn transfer(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<Event, ContractError> {
    require_positive(amount)?;
    debit(storage, from, amount)?;
    credit(storage, to, amount)?;
    Ok(Event::new("transfer")
        .add_attribute("from", from)
        .add_attribute("to", to)
        .add_attribute("amount", amount))
}

pub fn mint(storage: &mut dyn Storage, to: &Addr, amount: Uint128) -> Result<Event, ContractError> {
    require_positive(amount)?;
    let mut info = TOKEN_INFO.load(storage)?;
    info.total_supply = info
        .total_supply
        .checked_add(amount)
        .map_err(StdError::from)?;
    TOKEN_INFO.save(storage, &info)?;
    credit(storage, to, amount)?;
    Ok(Event::new("mint")
        .add_attribute("to", to)
        .add_attribute("amount", amount))
}

pub fn burn(storage: &mut dyn Storage, from: &Addr, amount: Uint128) -> Result<Event, ContractError> {
    require_positive(amount)?;
    debit(storage, from, amount)?;
    let mut info = TOKEN_INFO.load(storage)?;
    info.total_supply = info
        .total_supply
        .checked_sub(amount)
        .map_err(StdError::from)?;
    TOKEN_INFO.save(storage, &info)?;
    Ok(Event::new("burn")
        .add_attribute("from", from)
        .add_attribute("amount", amount))
}

// ============================================================================
// Allowances
// ============================================================================

pub fn allowance(storage: &dyn Storage, owner: &Addr, spender: &Addr) -> StdResult<Uint128> {
    Ok(ALLOWANCES
        .may_load(storage, (owner, spender))?
        .unwrap_or_default())
}

fn set_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<Event, ContractError> {
    if amount.is_zero() {
        ALLOWANCES.remove(storage, (owner, spender));
    } else {
        ALLOWANCES.save(storage, (owner, spender), &amount)?;
    }
    Ok(Event::new("approval")
        .add_attribute("owner", owner)
        .add_attribute("spender", spender)
        .add_attribute("amount", amount))
}

pub fn approve(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<Event, ContractError> {
    require_positive(amount)?;
    set_allowance(storage, owner, spender, amount)
}

pub fn increase_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<Event, ContractError> {
    require_positive(amount)?;
    let current = allowance(storage, owner, spender)?;
    let next = current.checked_add(amount).map_err(StdError::from)?;
    set_allowance(storage, owner, spender, next)
}

pub fn decrease_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<Event, ContractError> {
    require_positive(amount)?;
    let available = allowance(storage, owner, spender)?;
    if available < amount {
        return Err(ContractError::InsufficientAllowance {
            available,
            required: amount,
        });
    }
    set_allowance(storage, owner, spender, available - amount)
}

/// Moves `amount` from `owner` to `to` on behalf of `spender`.
pub fn transfer_from(
    storage: &mut dyn Storage,
    spender: &Addr,
    owner: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<Vec<Event>, ContractError> {
    require_positive(amount)?;
    let available = allowance(storage, owner, spender)?;
    if available < amount {
        return Err(ContractError::InsufficientAllowance {
            available,
            required: amount,
        });
    }
    let approval = set_allowance(storage, owner, spender, available - amount)?;
    let transfer = transfer(storage, owner, to, amount)?;
    Ok(vec![transfer, approval])
}
