use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintEvent {
    pub minter: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinterUpdatedEvent {
    pub minter: Address,
    pub authorized: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChangedEvent {
    pub previous: Address,
    pub admin: Address,
}

pub fn emit_mint(env: &Env, event: MintEvent) {
    env.events()
        .publish((Symbol::new(env, "mint"), event.to.clone()), event);
}

pub fn emit_minter_updated(env: &Env, event: MinterUpdatedEvent) {
    env.events()
        .publish((Symbol::new(env, "minter_updated"),), event);
}

pub fn emit_admin_changed(env: &Env, event: AdminChangedEvent) {
    env.events()
        .publish((Symbol::new(env, "admin_changed"),), event);
}
