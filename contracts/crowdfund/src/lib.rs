#![no_std]

use soroban_sdk::{
    contract, contractimpl, contracttype, log, token, Address, Env, IntoVal, String, Symbol, Vec,
};

mod errors;
mod events;
mod storage;


pub use errors::{ContractError, ErrorKind};
pub use events::{ContributedEvent, FinalizedEvent, InitializedEvent, RefundedEvent, WithdrawnEvent};

/// Number of entries kept in the recent-contributions feed.
pub const RECENT_CONTRIBUTIONS_CAPACITY: u32 = 10;

// ── Data Types ──────────────────────────────────────────────────────────────

/// Lifecycle of a campaign. Transitions only move forward:
/// `Funding -> Successful | Failed`, `Successful -> Withdrawn`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum CampaignState {
    Funding = 0,
    Successful = 1,
    Failed = 2,
    Withdrawn = 3,
}

/// Parameters fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignInfo {
    pub creator: Address,
    pub title: String,
    pub description: String,
    /// Funding goal in the payment asset's smallest unit.
    pub goal: i128,
    /// Ledger timestamp at which contributions close.
    pub deadline: u64,
    /// Reward-token base units minted per whole unit of the payment asset.
    pub reward_rate: i128,
    /// One whole unit of the payment asset, `10^decimals`.
    pub unit_scale: i128,
    pub reward_token: Address,
    pub payment_token: Address,
}

/// Snapshot returned to pollers.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignDetails {
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub goal: i128,
    pub deadline: u64,
    pub total_raised: i128,
    pub state: CampaignState,
    pub withdrawn: bool,
    pub reward_rate: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionRecord {
    pub contributor: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ── Contract ────────────────────────────────────────────────────────────────

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Initializes a freshly deployed campaign. Callable exactly once.
    ///
    /// # Arguments
    /// * `creator`       – The campaign creator's address.
    /// * `title`         – Display title.
    /// * `description`   – Display description.
    /// * `goal`          – The funding goal (in the payment asset's smallest unit).
    /// * `deadline`      – The campaign deadline as a ledger timestamp.
    /// * `reward_rate`   – Reward tokens minted per whole unit contributed.
    /// * `reward_token`  – The reward token contract; this campaign must be one of its minters.
    /// * `payment_token` – The asset contributions are made in.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        goal: i128,
        deadline: u64,
        reward_rate: i128,
        reward_token: Address,
        payment_token: Address,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        creator.require_auth();

        if goal <= 0 {
            return Err(ContractError::InvalidGoal);
        }
        if deadline <= env.ledger().timestamp() {
            return Err(ContractError::InvalidDeadline);
        }
        if reward_rate <= 0 {
            return Err(ContractError::InvalidRewardRate);
        }

        let decimals = token::Client::new(&env, &payment_token).decimals();
        let unit_scale = 10i128
            .checked_pow(decimals)
            .ok_or(ContractError::Overflow)?;

        let info = CampaignInfo {
            creator: creator.clone(),
            title,
            description,
            goal,
            deadline,
            reward_rate,
            unit_scale,
            reward_token,
            payment_token,
        };

        storage::write_info(&env, &info);
        storage::write_state(&env, CampaignState::Funding);
        storage::write_total_raised(&env, 0);
        storage::write_withdrawn(&env, false);
        storage::write_contributors_count(&env, 0);
        storage::write_recent(&env, &Vec::new(&env));
        storage::extend_instance(&env);

        events::emit_initialized(
            &env,
            InitializedEvent {
                creator,
                goal,
                deadline,
                reward_rate,
            },
        );
        Ok(())
    }

    /// Contribute `amount` of the payment asset to the campaign and receive
    /// reward tokens in proportion.
    ///
    /// Rejected once the campaign has left Funding or the deadline has been
    /// reached, even if nobody has finalized yet.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<(), ContractError> {
        contributor.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let info = storage::read_info(&env)?;
        if storage::read_state(&env)? != CampaignState::Funding {
            return Err(ContractError::CampaignNotFunding);
        }
        let now = env.ledger().timestamp();
        if now >= info.deadline {
            return Err(ContractError::CampaignEnded);
        }

        let reward = reward_for(amount, info.reward_rate, info.unit_scale)?;
        let previous = storage::read_contribution(&env, &contributor);
        let contributed = previous
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        let total_raised = storage::read_total_raised(&env)
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;

        // Move the funds into escrow.
        token::Client::new(&env, &info.payment_token).transfer(
            &contributor,
            &env.current_contract_address(),
            &amount,
        );

        storage::write_contribution(&env, &contributor, contributed);
        storage::write_total_raised(&env, total_raised);

        if previous == 0 {
            let count = storage::read_contributors_count(&env)
                .checked_add(1)
                .ok_or(ContractError::Overflow)?;
            storage::write_contributors_count(&env, count);
            push_recent(
                &env,
                ContributionRecord {
                    contributor: contributor.clone(),
                    amount,
                    timestamp: now,
                },
            );
        }
        storage::extend_instance(&env);

        if reward > 0 {
            mint_reward(&env, &info.reward_token, &contributor, reward)?;
        }

        events::emit_contributed(
            &env,
            ContributedEvent {
                contributor,
                amount,
                reward,
                total_raised,
            },
        );
        Ok(())
    }

    /// Settles the campaign once the deadline has been reached. Anyone may
    /// call it so a passive creator cannot hold contributors' funds hostage.
    pub fn finalize(env: Env) -> Result<CampaignState, ContractError> {
        let info = storage::read_info(&env)?;
        if storage::read_state(&env)? != CampaignState::Funding {
            return Err(ContractError::AlreadyFinalized);
        }
        if env.ledger().timestamp() < info.deadline {
            return Err(ContractError::DeadlineNotReached);
        }

        let total_raised = storage::read_total_raised(&env);
        let state = if total_raised >= info.goal {
            CampaignState::Successful
        } else {
            CampaignState::Failed
        };

        storage::write_state(&env, state);
        storage::extend_instance(&env);

        log!(&env, "campaign finalized", total_raised, info.goal);
        events::emit_finalized(&env, FinalizedEvent { state, total_raised });
        Ok(state)
    }

    /// Releases the whole escrow to the creator. Only possible once, and only
    /// after a successful finalization.
    pub fn withdraw(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();

        let info = storage::read_info(&env)?;
        if storage::read_withdrawn(&env) {
            return Err(ContractError::AlreadyWithdrawn);
        }
        if storage::read_state(&env)? != CampaignState::Successful {
            return Err(ContractError::NotSuccessful);
        }
        if caller != info.creator {
            return Err(ContractError::Unauthorized);
        }

        // Flip the flags before any value leaves the contract.
        storage::write_withdrawn(&env, true);
        storage::write_state(&env, CampaignState::Withdrawn);
        storage::extend_instance(&env);

        let token_client = token::Client::new(&env, &info.payment_token);
        let contract = env.current_contract_address();
        let amount = token_client.balance(&contract);
        if amount > 0 {
            token_client.transfer(&contract, &info.creator, &amount);
        }

        events::emit_withdrawn(
            &env,
            WithdrawnEvent {
                creator: info.creator,
                amount,
            },
        );
        Ok(())
    }

    /// Returns the caller's recorded contribution after a failed campaign.
    ///
    /// The ledger entry is kept as history; a separate refunded flag blocks a
    /// second claim.
    pub fn refund(env: Env, contributor: Address) -> Result<(), ContractError> {
        contributor.require_auth();

        let info = storage::read_info(&env)?;
        if storage::read_state(&env)? != CampaignState::Failed {
            return Err(ContractError::NotFailed);
        }
        if storage::is_refunded(&env, &contributor) {
            return Err(ContractError::AlreadyRefunded);
        }
        let amount = storage::read_contribution(&env, &contributor);
        if amount <= 0 {
            return Err(ContractError::NothingToRefund);
        }

        storage::mark_refunded(&env, &contributor);
        storage::extend_instance(&env);

        token::Client::new(&env, &info.payment_token).transfer(
            &env.current_contract_address(),
            &contributor,
            &amount,
        );

        events::emit_refunded(&env, RefundedEvent { contributor, amount });
        Ok(())
    }

    // ── View helpers ────────────────────────────────────────────────────

    /// Returns the full campaign snapshot.
    pub fn get_campaign_details(env: Env) -> Result<CampaignDetails, ContractError> {
        let info = storage::read_info(&env)?;
        Ok(CampaignDetails {
            creator: info.creator,
            title: info.title,
            description: info.description,
            goal: info.goal,
            deadline: info.deadline,
            total_raised: storage::read_total_raised(&env),
            state: storage::read_state(&env)?,
            withdrawn: storage::read_withdrawn(&env),
            reward_rate: info.reward_rate,
        })
    }

    /// Returns the contribution of a specific address.
    pub fn get_contribution_of(env: Env, contributor: Address) -> i128 {
        storage::read_contribution(&env, &contributor)
    }

    pub fn get_contributors_count(env: Env) -> u32 {
        storage::read_contributors_count(&env)
    }

    /// Returns the recent-contributions feed, oldest first.
    pub fn get_recent_contributions(env: Env) -> Vec<ContributionRecord> {
        storage::read_recent(&env)
    }

    pub fn is_refunded(env: Env, contributor: Address) -> bool {
        storage::is_refunded(&env, &contributor)
    }

    /// Percentage of the goal raised so far; exceeds 100 when overfunded.
    pub fn get_progress_percentage(env: Env) -> Result<u32, ContractError> {
        let info = storage::read_info(&env)?;
        let total_raised = storage::read_total_raised(&env);
        let percentage = total_raised
            .checked_mul(100)
            .map(|scaled| scaled / info.goal)
            .unwrap_or(i128::MAX);
        Ok(percentage.clamp(0, u32::MAX as i128) as u32)
    }

    /// Seconds until the deadline, 0 once it has passed.
    pub fn get_time_left(env: Env) -> Result<u64, ContractError> {
        let info = storage::read_info(&env)?;
        Ok(info.deadline.saturating_sub(env.ledger().timestamp()))
    }

    pub fn get_reward_token(env: Env) -> Result<Address, ContractError> {
        Ok(storage::read_info(&env)?.reward_token)
    }

    pub fn get_payment_token(env: Env) -> Result<Address, ContractError> {
        Ok(storage::read_info(&env)?.payment_token)
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// `amount * reward_rate / unit_scale`, rounded down.
fn reward_for(amount: i128, reward_rate: i128, unit_scale: i128) -> Result<i128, ContractError> {
    amount
        .checked_mul(reward_rate)
        .map(|scaled| scaled / unit_scale)
        .ok_or(ContractError::Overflow)
}

/// Appends to the recent feed, evicting the oldest record at capacity.
fn push_recent(env: &Env, record: ContributionRecord) {
    let mut recent = storage::read_recent(env);
    while recent.len() >= RECENT_CONTRIBUTIONS_CAPACITY {
        recent.pop_front();
    }
    recent.push_back(record);
    storage::write_recent(env, &recent);
}

// Reward token error codes the campaign translates.
const TOKEN_UNAUTHORIZED: u32 = 3;
const TOKEN_OVERFLOW: u32 = 5;

/// Mints `amount` reward tokens to `to`, translating the token's error codes
/// into campaign errors.
fn mint_reward(
    env: &Env,
    reward_token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let args = soroban_sdk::vec![
        env,
        env.current_contract_address().into_val(env),
        to.into_val(env),
        amount.into_val(env),
    ];
    match env.try_invoke_contract::<(), soroban_sdk::Error>(
        reward_token,
        &Symbol::new(env, "mint"),
        args,
    ) {
        Ok(Ok(())) => Ok(()),
        Err(Ok(err)) if err == soroban_sdk::Error::from_contract_error(TOKEN_UNAUTHORIZED) => {
            Err(ContractError::RewardMintFailed)
        }
        Err(Ok(err)) if err == soroban_sdk::Error::from_contract_error(TOKEN_OVERFLOW) => {
            Err(ContractError::Overflow)
        }
        _ => Err(ContractError::RewardTokenUnavailable),
    }
}
