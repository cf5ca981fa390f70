use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::CampaignState;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub creator: Address,
    pub goal: i128,
    pub deadline: u64,
    pub reward_rate: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributedEvent {
    pub contributor: Address,
    pub amount: i128,
    pub reward: i128,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FinalizedEvent {
    pub state: CampaignState,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub creator: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundedEvent {
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_initialized(env: &Env, event: InitializedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign"), Symbol::new(env, "initialized")),
        event,
    );
}

pub fn emit_contributed(env: &Env, event: ContributedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign"), Symbol::new(env, "contributed")),
        event,
    );
}

pub fn emit_finalized(env: &Env, event: FinalizedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign"), Symbol::new(env, "finalized")),
        event,
    );
}

pub fn emit_withdrawn(env: &Env, event: WithdrawnEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign"), Symbol::new(env, "withdrawn")),
        event,
    );
}

pub fn emit_refunded(env: &Env, event: RefundedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign"), Symbol::new(env, "refunded")),
        event,
    );
}
