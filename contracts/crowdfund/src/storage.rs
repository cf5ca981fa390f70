use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::{CampaignInfo, CampaignState, ContractError, ContributionRecord};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const LEDGER_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const LEDGER_LIFETIME_THRESHOLD: u32 = LEDGER_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Immutable campaign parameters, written once by `initialize`.
    Info,
    /// Total amount raised so far.
    TotalRaised,
    /// Lifecycle state.
    State,
    /// Set once the creator has taken the escrow.
    Withdrawn,
    /// Number of distinct contributors.
    ContributorsCount,
    /// Fixed-capacity feed of recent contributions, oldest first.
    RecentContributions,
    /// Cumulative contribution by address.
    Contribution(Address),
    /// Present once the address has been refunded.
    Refunded(Address),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, LEDGER_LIFETIME_THRESHOLD, LEDGER_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Info)
}

pub fn read_info(env: &Env) -> Result<CampaignInfo, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Info)
        .ok_or(ContractError::NotInitialized)
}

pub fn write_info(env: &Env, info: &CampaignInfo) {
    env.storage().instance().set(&DataKey::Info, info);
}

pub fn read_state(env: &Env) -> Result<CampaignState, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(ContractError::NotInitialized)
}

pub fn write_state(env: &Env, state: CampaignState) {
    env.storage().instance().set(&DataKey::State, &state);
}

pub fn read_total_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn write_total_raised(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalRaised, &total);
}

pub fn read_withdrawn(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Withdrawn)
        .unwrap_or(false)
}

pub fn write_withdrawn(env: &Env, withdrawn: bool) {
    env.storage().instance().set(&DataKey::Withdrawn, &withdrawn);
}

pub fn read_contributors_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ContributorsCount)
        .unwrap_or(0)
}

pub fn write_contributors_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::ContributorsCount, &count);
}

pub fn read_recent(env: &Env) -> Vec<ContributionRecord> {
    env.storage()
        .instance()
        .get(&DataKey::RecentContributions)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn write_recent(env: &Env, recent: &Vec<ContributionRecord>) {
    env.storage()
        .instance()
        .set(&DataKey::RecentContributions, recent);
}

pub fn read_contribution(env: &Env, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(contributor.clone()))
        .unwrap_or(0)
}

pub fn write_contribution(env: &Env, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(contributor.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

pub fn is_refunded(env: &Env, contributor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Refunded(contributor.clone()))
}

pub fn mark_refunded(env: &Env, contributor: &Address) {
    let key = DataKey::Refunded(contributor.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
}
