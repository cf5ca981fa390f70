//! End-to-end tests against the real campaign WASM. Build it first
//! (`make build`), then run with `--features wasm-tests`.

use reward_token::{RewardTokenContract, RewardTokenContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

use crate::{FactoryContract, FactoryContractClient};

extern crate std;

// Import the crowdfund contract WASM.
mod crowdfund_wasm {
    soroban_sdk::contractimport!(file = "../../target/wasm32v1-none/release/crowdfund.wasm");
}

const UNIT: i128 = 10_000_000;
const DAY: u64 = 86_400;

struct Deployment {
    env: Env,
    factory: FactoryContractClient<'static>,
    payment: token::StellarAssetClient<'static>,
    reward: RewardTokenContractClient<'static>,
}

fn deploy() -> Deployment {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_700_000_000);

    let factory_id = env.register(FactoryContract, ());
    let factory = FactoryContractClient::new(&env, &factory_id);

    let token_admin = Address::generate(&env);
    let payment_address = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();
    let payment = token::StellarAssetClient::new(&env, &payment_address);

    // The deployer initializes the reward token, then hands it to the
    // factory so it can authorize clones.
    let deployer = Address::generate(&env);
    let reward_id = env.register(RewardTokenContract, ());
    let reward = RewardTokenContractClient::new(&env, &reward_id);
    reward.initialize(
        &deployer,
        &String::from_str(&env, "Karma"),
        &String::from_str(&env, "KRM"),
        &7,
    );
    reward.set_admin(&factory_id);

    // Upload the crowdfund WASM.
    let wasm_hash = env.deployer().upload_contract_wasm(crowdfund_wasm::WASM);
    factory.initialize(
        &deployer,
        &wasm_hash,
        &reward_id,
        &payment_address,
    );

    Deployment {
        env,
        factory,
        payment,
        reward,
    }
}

fn create(d: &Deployment, creator: &Address, goal: i128) -> Address {
    d.factory.create_clone(
        creator,
        &goal,
        &DAY,
        &1_000,
        &String::from_str(&d.env, "Library books"),
        &String::from_str(&d.env, "Restock the children's section"),
    )
}

#[test]
fn test_create_single_campaign() {
    let d = deploy();
    let creator = Address::generate(&d.env);

    let campaign_addr = create(&d, &creator, UNIT);

    // Verify campaign was added to registry.
    let campaigns = d.factory.get_all_campaigns();
    assert_eq!(campaigns.len(), 1);
    assert_eq!(campaigns.get(0).unwrap(), campaign_addr);
    assert_eq!(d.factory.get_campaigns_of(&creator).get(0).unwrap(), campaign_addr);
    assert_eq!(d.factory.campaign_count(), 1);

    // The clone is initialized and allowed to mint.
    let campaign = crowdfund_wasm::Client::new(&d.env, &campaign_addr);
    let details = campaign.get_campaign_details();
    assert_eq!(details.creator, creator);
    assert_eq!(details.goal, UNIT);
    assert_eq!(details.deadline, 1_700_000_000 + DAY);
    assert_eq!(details.state, crowdfund_wasm::CampaignState::Funding);
    assert!(d.reward.is_minter(&campaign_addr));
    assert_eq!(d.reward.admin(), d.factory.address);
}

#[test]
fn test_create_multiple_campaigns() {
    let d = deploy();
    let creator1 = Address::generate(&d.env);
    let creator2 = Address::generate(&d.env);

    let campaign1 = create(&d, &creator1, 1_000);
    let campaign2 = create(&d, &creator2, 2_000);
    let campaign3 = create(&d, &creator1, 3_000);

    assert_ne!(campaign1, campaign2);
    assert_ne!(campaign2, campaign3);

    let campaigns = d.factory.get_all_campaigns();
    assert_eq!(campaigns.len(), 3);
    assert_eq!(campaigns.get(0).unwrap(), campaign1);
    assert_eq!(campaigns.get(1).unwrap(), campaign2);
    assert_eq!(campaigns.get(2).unwrap(), campaign3);

    let of_creator1 = d.factory.get_campaigns_of(&creator1);
    assert_eq!(of_creator1.len(), 2);
    assert_eq!(of_creator1.get(0).unwrap(), campaign1);
    assert_eq!(of_creator1.get(1).unwrap(), campaign3);
    assert_eq!(d.factory.get_campaigns_of(&creator2).len(), 1);
}

#[test]
fn test_cloned_campaign_runs_full_lifecycle() {
    let d = deploy();
    let creator = Address::generate(&d.env);
    let campaign_addr = create(&d, &creator, UNIT);
    let campaign = crowdfund_wasm::Client::new(&d.env, &campaign_addr);

    let alice = Address::generate(&d.env);
    d.payment.mint(&alice, &(2 * UNIT));
    campaign.contribute(&alice, &(2 * UNIT));
    assert_eq!(d.reward.balance(&alice), 2_000);

    d.env.ledger().set_timestamp(1_700_000_000 + DAY);
    assert_eq!(campaign.finalize(), crowdfund_wasm::CampaignState::Successful);
    campaign.withdraw(&creator);

    let payment = token::Client::new(&d.env, &d.payment.address);
    assert_eq!(payment.balance(&creator), 2 * UNIT);
    assert!(campaign.try_withdraw(&creator).is_err());
}
