#![cfg(test)]

extern crate std;

use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::{ContractError, ErrorKind, RewardTokenContract, RewardTokenContractClient};

fn setup_token() -> (Env, RewardTokenContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let token_id = env.register(RewardTokenContract, ());
    let client = RewardTokenContractClient::new(&env, &token_id);

    let admin = Address::generate(&env);
    client.initialize(
        &admin,
        &String::from_str(&env, "Karma"),
        &String::from_str(&env, "KRM"),
        &7,
    );

    (env, client, admin)
}

#[test]
fn test_initialize_sets_metadata() {
    let (env, client, admin) = setup_token();

    assert_eq!(client.admin(), admin);
    assert_eq!(client.name(), String::from_str(&env, "Karma"));
    assert_eq!(client.symbol(), String::from_str(&env, "KRM"));
    assert_eq!(client.decimals(), 7);
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_double_initialize_returns_error() {
    let (env, client, admin) = setup_token();

    let result = client.try_initialize(
        &admin,
        &String::from_str(&env, "Karma"),
        &String::from_str(&env, "KRM"),
        &7,
    );

    let err = result.unwrap_err().unwrap();
    assert_eq!(err, ContractError::AlreadyInitialized);
    assert_eq!(err.kind(), ErrorKind::AlreadyDone);
}

#[test]
fn test_initialize_requires_admin_auth() {
    let env = Env::default();
    let client = RewardTokenContractClient::new(&env, &env.register(RewardTokenContract, ()));
    let stranger = Address::generate(&env);

    let result = client.try_initialize(
        &stranger,
        &String::from_str(&env, "Karma"),
        &String::from_str(&env, "KRM"),
        &7,
    );

    assert!(result.is_err());
    assert_eq!(client.try_admin().unwrap_err().unwrap(), ContractError::NotInitialized);
    assert!(!client.is_minter(&stranger));
}

#[test]
fn test_initialize_records_admin_auth() {
    let env = Env::default();
    env.mock_all_auths();
    let client = RewardTokenContractClient::new(&env, &env.register(RewardTokenContract, ()));
    let admin = Address::generate(&env);

    client.initialize(
        &admin,
        &String::from_str(&env, "Karma"),
        &String::from_str(&env, "KRM"),
        &7,
    );

    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, admin);
}

#[test]
fn test_set_minter_requires_admin_auth() {
    let (env, client, admin) = setup_token();
    let minter = Address::generate(&env);

    client.set_minter(&minter, &true);

    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, admin);
    assert!(client.is_minter(&minter));
}

#[test]
fn test_authorized_minter_can_mint() {
    let (env, client, _admin) = setup_token();
    let minter = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.set_minter(&minter, &true);
    client.mint(&minter, &alice, &600);
    client.mint(&minter, &bob, &500);
    client.mint(&minter, &alice, &100);

    assert_eq!(client.balance(&alice), 700);
    assert_eq!(client.balance(&bob), 500);
    assert_eq!(client.total_supply(), 1_200);
}

#[test]
fn test_unauthorized_mint_returns_error() {
    let (env, client, _admin) = setup_token();
    let stranger = Address::generate(&env);
    let alice = Address::generate(&env);

    let result = client.try_mint(&stranger, &alice, &1_000);

    let err = result.unwrap_err().unwrap();
    assert_eq!(err, ContractError::Unauthorized);
    assert_eq!(err.kind(), ErrorKind::Authorization);
    assert_eq!(client.balance(&alice), 0);
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_revoked_minter_cannot_mint() {
    let (env, client, _admin) = setup_token();
    let minter = Address::generate(&env);
    let alice = Address::generate(&env);

    client.set_minter(&minter, &true);
    client.mint(&minter, &alice, &10);
    client.set_minter(&minter, &false);

    assert!(!client.is_minter(&minter));
    let result = client.try_mint(&minter, &alice, &10);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::Unauthorized);
    assert_eq!(client.balance(&alice), 10);
}

#[test]
fn test_zero_mint_returns_error() {
    let (env, client, _admin) = setup_token();
    let minter = Address::generate(&env);
    let alice = Address::generate(&env);
    client.set_minter(&minter, &true);

    let result = client.try_mint(&minter, &alice, &0);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::InvalidAmount);

    let result = client.try_mint(&minter, &alice, &-5);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::InvalidAmount);
}

#[test]
fn test_mint_overflow_returns_error() {
    let (env, client, _admin) = setup_token();
    let minter = Address::generate(&env);
    let alice = Address::generate(&env);
    client.set_minter(&minter, &true);

    client.mint(&minter, &alice, &i128::MAX);
    let result = client.try_mint(&minter, &alice, &1);

    assert_eq!(result.unwrap_err().unwrap(), ContractError::Overflow);
    assert_eq!(client.balance(&alice), i128::MAX);
}

#[test]
fn test_set_admin_moves_minter_management() {
    let (env, client, _admin) = setup_token();
    let new_admin = Address::generate(&env);

    client.set_admin(&new_admin);
    assert_eq!(client.admin(), new_admin);

    let minter = Address::generate(&env);
    client.set_minter(&minter, &true);

    let auths = env.auths();
    assert_eq!(auths[0].0, new_admin);
}

#[test]
fn test_uninitialized_token_rejects_mint() {
    let env = Env::default();
    env.mock_all_auths();
    let token_id = env.register(RewardTokenContract, ());
    let client = RewardTokenContractClient::new(&env, &token_id);

    let minter = Address::generate(&env);
    let result = client.try_mint(&minter, &minter, &1);

    assert_eq!(result.unwrap_err().unwrap(), ContractError::NotInitialized);
    assert_eq!(client.total_supply(), 0);
}

use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_total_supply_is_sum_of_balances(
        a in 1i128..1_000_000_000i128,
        b in 1i128..1_000_000_000i128,
        c in 1i128..1_000_000_000i128,
    ) {
        let (env, client, _admin) = setup_token();
        let minter = Address::generate(&env);
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);
        client.set_minter(&minter, &true);

        client.mint(&minter, &alice, &a);
        client.mint(&minter, &bob, &b);
        client.mint(&minter, &alice, &c);

        prop_assert_eq!(client.balance(&alice), a + c);
        prop_assert_eq!(client.balance(&bob), b);
        prop_assert_eq!(client.total_supply(), a + b + c);
    }
}
