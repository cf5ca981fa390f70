//! Append-only campaign index.
//!
//! Campaigns live in a persistent arena keyed by creation index; each creator
//! keeps the list of indices they own, so lookups by creator never scan the
//! global list.

use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

use crate::ContractError;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const INDEX_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const INDEX_LIFETIME_THRESHOLD: u32 = INDEX_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Largest slice `get_campaigns_page` hands out.
pub const MAX_PAGE_SIZE: u32 = 50;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Hash of the uploaded campaign WASM every clone runs.
    Implementation,
    RewardToken,
    PaymentToken,
    /// Number of campaigns created so far.
    CampaignCount,
    /// Campaign address at a creation index.
    Campaign(u32),
    /// Creation indices of a creator's campaigns, oldest first.
    CreatorCampaigns(Address),
}

/// Settings every clone is created with.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryConfig {
    pub implementation: BytesN<32>,
    pub reward_token: Address,
    pub payment_token: Address,
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, INDEX_LIFETIME_THRESHOLD, INDEX_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Implementation)
}

pub fn write_config(env: &Env, config: &FactoryConfig) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Implementation, &config.implementation);
    instance.set(&DataKey::RewardToken, &config.reward_token);
    instance.set(&DataKey::PaymentToken, &config.payment_token);
    instance.set(&DataKey::CampaignCount, &0u32);
}

pub fn read_config(env: &Env) -> Result<FactoryConfig, ContractError> {
    let instance = env.storage().instance();
    let implementation = instance
        .get(&DataKey::Implementation)
        .ok_or(ContractError::NotInitialized)?;
    let reward_token = instance
        .get(&DataKey::RewardToken)
        .ok_or(ContractError::NotInitialized)?;
    let payment_token = instance
        .get(&DataKey::PaymentToken)
        .ok_or(ContractError::NotInitialized)?;
    Ok(FactoryConfig {
        implementation,
        reward_token,
        payment_token,
    })
}

pub fn campaign_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Salt for the next clone; unique per creation index.
pub fn next_salt(env: &Env) -> BytesN<32> {
    let mut salt = [0u8; 32];
    salt[28..].copy_from_slice(&campaign_count(env).to_be_bytes());
    BytesN::from_array(env, &salt)
}

/// Appends `campaign` to the global index and to `creator`'s list.
/// Returns its creation index.
pub fn push_campaign(
    env: &Env,
    creator: &Address,
    campaign: &Address,
) -> Result<u32, ContractError> {
    let index = campaign_count(env);
    let next = index.checked_add(1).ok_or(ContractError::Overflow)?;

    let campaign_key = DataKey::Campaign(index);
    env.storage().persistent().set(&campaign_key, campaign);
    extend_persistent(env, &campaign_key);

    let creator_key = DataKey::CreatorCampaigns(creator.clone());
    let mut owned: Vec<u32> = env
        .storage()
        .persistent()
        .get(&creator_key)
        .unwrap_or_else(|| Vec::new(env));
    owned.push_back(index);
    env.storage().persistent().set(&creator_key, &owned);
    extend_persistent(env, &creator_key);

    env.storage().instance().set(&DataKey::CampaignCount, &next);
    extend_instance(env);
    Ok(index)
}

pub fn campaign_at(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Campaign(index))
}

/// Up to `limit` campaigns starting at `start`, in creation order.
pub fn campaigns_page(env: &Env, start: u32, limit: u32) -> Vec<Address> {
    let end = start
        .saturating_add(limit.min(MAX_PAGE_SIZE))
        .min(campaign_count(env));
    let mut page = Vec::new(env);
    for index in start..end {
        if let Some(campaign) = campaign_at(env, index) {
            page.push_back(campaign);
        }
    }
    page
}

pub fn all_campaigns(env: &Env) -> Vec<Address> {
    let mut campaigns = Vec::new(env);
    for index in 0..campaign_count(env) {
        if let Some(campaign) = campaign_at(env, index) {
            campaigns.push_back(campaign);
        }
    }
    campaigns
}

pub fn campaigns_of(env: &Env, creator: &Address) -> Vec<Address> {
    let owned: Vec<u32> = env
        .storage()
        .persistent()
        .get(&DataKey::CreatorCampaigns(creator.clone()))
        .unwrap_or_else(|| Vec::new(env));
    let mut campaigns = Vec::new(env);
    for index in owned.iter() {
        if let Some(campaign) = campaign_at(env, index) {
            campaigns.push_back(campaign);
        }
    }
    campaigns
}
