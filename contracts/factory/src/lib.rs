#![no_std]

use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, IntoVal, String, Symbol, Vec};

mod errors;
mod events;
mod registry;

#[cfg(all(test, feature = "wasm-tests"))]
mod test_deploy;

pub use errors::{ContractError, ErrorKind};
pub use events::CampaignCreatedEvent;
pub use registry::{FactoryConfig, MAX_PAGE_SIZE};

#[contract]
pub struct FactoryContract;

#[contractimpl]
impl FactoryContract {
    /// Configures the factory. Callable once.
    ///
    /// # Arguments
    /// * `admin`          – The deployer; must authorize. Not stored.
    /// * `implementation` – Hash of the uploaded campaign WASM shared by every clone.
    /// * `reward_token`   – Reward token whose admin must be this factory.
    /// * `payment_token`  – Asset contributions are made in.
    pub fn initialize(
        env: Env,
        admin: Address,
        implementation: BytesN<32>,
        reward_token: Address,
        payment_token: Address,
    ) -> Result<(), ContractError> {
        if registry::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();

        registry::write_config(
            &env,
            &FactoryConfig {
                implementation,
                reward_token,
                payment_token,
            },
        );
        registry::extend_instance(&env);
        Ok(())
    }

    /// Deploy and initialize a new campaign from the shared implementation.
    ///
    /// # Arguments
    /// * `creator`          – The campaign creator's address.
    /// * `goal`             – The funding goal (in the payment asset's smallest unit).
    /// * `duration_seconds` – Time from now until contributions close.
    /// * `reward_rate`      – Reward tokens minted per whole unit contributed.
    /// * `title`            – Display title.
    /// * `description`      – Display description.
    ///
    /// # Returns
    /// The address of the newly deployed campaign contract.
    pub fn create_clone(
        env: Env,
        creator: Address,
        goal: i128,
        duration_seconds: u64,
        reward_rate: i128,
        title: String,
        description: String,
    ) -> Result<Address, ContractError> {
        creator.require_auth();

        let config = registry::read_config(&env)?;
        if goal <= 0 {
            return Err(ContractError::InvalidGoal);
        }
        if duration_seconds == 0 {
            return Err(ContractError::InvalidDuration);
        }
        if reward_rate <= 0 {
            return Err(ContractError::InvalidRewardRate);
        }
        let deadline = env
            .ledger()
            .timestamp()
            .checked_add(duration_seconds)
            .ok_or(ContractError::Overflow)?;

        // Deploy a fresh instance of the shared campaign WASM.
        let salt = registry::next_salt(&env);
        let campaign = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(config.implementation, ());

        // Initialize the deployed contract.
        let _: () = env.invoke_contract(
            &campaign,
            &Symbol::new(&env, "initialize"),
            soroban_sdk::vec![
                &env,
                creator.into_val(&env),
                title.into_val(&env),
                description.into_val(&env),
                goal.into_val(&env),
                deadline.into_val(&env),
                reward_rate.into_val(&env),
                config.reward_token.into_val(&env),
                config.payment_token.into_val(&env),
            ],
        );

        // Let the campaign mint rewards; the factory is the token admin.
        let _: () = env.invoke_contract(
            &config.reward_token,
            &Symbol::new(&env, "set_minter"),
            soroban_sdk::vec![&env, campaign.into_val(&env), true.into_val(&env)],
        );

        let index = registry::push_campaign(&env, &creator, &campaign)?;

        log!(&env, "campaign created", campaign, index);
        events::emit_campaign_created(
            &env,
            CampaignCreatedEvent {
                campaign: campaign.clone(),
                creator,
                index,
                deadline,
            },
        );

        Ok(campaign)
    }

    /// Returns every campaign ever created, oldest first.
    pub fn get_all_campaigns(env: Env) -> Vec<Address> {
        registry::all_campaigns(&env)
    }

    /// Returns the campaigns created by `creator`, oldest first.
    pub fn get_campaigns_of(env: Env, creator: Address) -> Vec<Address> {
        registry::campaigns_of(&env, &creator)
    }

    /// Returns at most `limit` campaigns (capped at `MAX_PAGE_SIZE`) starting
    /// at creation index `start`.
    pub fn get_campaigns_page(env: Env, start: u32, limit: u32) -> Vec<Address> {
        registry::campaigns_page(&env, start, limit)
    }

    /// Returns the total number of deployed campaigns.
    pub fn campaign_count(env: Env) -> u32 {
        registry::campaign_count(&env)
    }

    pub fn implementation(env: Env) -> Result<BytesN<32>, ContractError> {
        Ok(registry::read_config(&env)?.implementation)
    }

    pub fn reward_token(env: Env) -> Result<Address, ContractError> {
        Ok(registry::read_config(&env)?.reward_token)
    }

    pub fn payment_token(env: Env) -> Result<Address, ContractError> {
        Ok(registry::read_config(&env)?.payment_token)
    }
}
