use soroban_sdk::{contracttype, Address, Env, String};

use crate::ContractError;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Address allowed to manage the minter set.
    Admin,
    Name,
    Symbol,
    Decimals,
    TotalSupply,
    /// Balance of a holder.
    Balance(Address),
    /// Present and `true` for identities allowed to mint.
    Minter(Address),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn read_admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn write_metadata(env: &Env, name: &String, symbol: &String, decimals: u32) {
    env.storage().instance().set(&DataKey::Name, name);
    env.storage().instance().set(&DataKey::Symbol, symbol);
    env.storage().instance().set(&DataKey::Decimals, &decimals);
}

pub fn read_name(env: &Env) -> Result<String, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Name)
        .ok_or(ContractError::NotInitialized)
}

pub fn read_symbol(env: &Env) -> Result<String, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Symbol)
        .ok_or(ContractError::NotInitialized)
}

pub fn read_decimals(env: &Env) -> Result<u32, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Decimals)
        .ok_or(ContractError::NotInitialized)
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            env.storage().persistent().extend_ttl(
                &key,
                BALANCE_LIFETIME_THRESHOLD,
                BALANCE_BUMP_AMOUNT,
            );
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn is_minter(env: &Env, id: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Minter(id.clone()))
        .unwrap_or(false)
}

pub fn write_minter(env: &Env, id: &Address, authorized: bool) {
    let key = DataKey::Minter(id.clone());
    if authorized {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    } else {
        env.storage().persistent().remove(&key);
    }
}
