#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, String};

mod events;
mod storage;

#[cfg(test)]
mod test;

pub use events::{AdminChangedEvent, MintEvent, MinterUpdatedEvent};

// ── Errors ──────────────────────────────────────────────────────────────────

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller is not the admin, or not in the minter set.
    Unauthorized = 3,
    /// Mint amount must be strictly positive.
    InvalidAmount = 4,
    Overflow = 5,
}

/// Coarse failure class of a token error.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Validation,
    State,
    Authorization,
    AlreadyDone,
}

impl ContractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContractError::AlreadyInitialized => ErrorKind::AlreadyDone,
            ContractError::NotInitialized => ErrorKind::State,
            ContractError::Unauthorized => ErrorKind::Authorization,
            ContractError::InvalidAmount | ContractError::Overflow => ErrorKind::Validation,
        }
    }
}

// ── Contract ────────────────────────────────────────────────────────────────

#[contract]
pub struct RewardTokenContract;

#[contractimpl]
impl RewardTokenContract {
    /// Sets the admin and token metadata. Callable once.
    ///
    /// `admin` must authorize the call. It manages the minter set; a deployer
    /// key initializes the token and then hands the role to the campaign
    /// factory with `set_admin`.
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        decimals: u32,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();

        storage::write_admin(&env, &admin);
        storage::write_metadata(&env, &name, &symbol, decimals);
        storage::write_total_supply(&env, 0);
        storage::extend_instance(&env);
        Ok(())
    }

    /// Adds `minter` to (or removes it from) the authorized-minter set.
    pub fn set_minter(env: Env, minter: Address, authorized: bool) -> Result<(), ContractError> {
        let admin = storage::read_admin(&env)?;
        admin.require_auth();

        storage::write_minter(&env, &minter, authorized);
        storage::extend_instance(&env);

        log!(&env, "minter updated", minter, authorized);
        events::emit_minter_updated(&env, MinterUpdatedEvent { minter, authorized });
        Ok(())
    }

    /// Hands the admin role to `new_admin`.
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        let admin = storage::read_admin(&env)?;
        admin.require_auth();

        storage::write_admin(&env, &new_admin);
        storage::extend_instance(&env);

        events::emit_admin_changed(
            &env,
            AdminChangedEvent {
                previous: admin,
                admin: new_admin,
            },
        );
        Ok(())
    }

    /// Mints `amount` to `to`. `minter` must authorize the call and be in the
    /// minter set.
    pub fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), ContractError> {
        if !storage::is_initialized(&env) {
            return Err(ContractError::NotInitialized);
        }
        minter.require_auth();

        if !storage::is_minter(&env, &minter) {
            return Err(ContractError::Unauthorized);
        }
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let balance = storage::read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        let supply = storage::read_total_supply(&env)
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;

        storage::write_balance(&env, &to, balance);
        storage::write_total_supply(&env, supply);
        storage::extend_instance(&env);

        events::emit_mint(&env, MintEvent { minter, to, amount });
        Ok(())
    }

    // ── View helpers ────────────────────────────────────────────────────

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::read_total_supply(&env)
    }

    pub fn is_minter(env: Env, id: Address) -> bool {
        storage::is_minter(&env, &id)
    }

    pub fn admin(env: Env) -> Result<Address, ContractError> {
        storage::read_admin(&env)
    }

    pub fn name(env: Env) -> Result<String, ContractError> {
        storage::read_name(&env)
    }

    pub fn symbol(env: Env) -> Result<String, ContractError> {
        storage::read_symbol(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, ContractError> {
        storage::read_decimals(&env)
    }
}
