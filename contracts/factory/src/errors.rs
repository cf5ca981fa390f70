use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Goal must be strictly positive.
    InvalidGoal = 3,
    /// Duration must be strictly positive.
    InvalidDuration = 4,
    /// Reward rate must be strictly positive.
    InvalidRewardRate = 5,
    /// `now + duration` does not fit in a ledger timestamp.
    Overflow = 6,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Validation,
    State,
    AlreadyDone,
}

impl ContractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContractError::AlreadyInitialized => ErrorKind::AlreadyDone,
            ContractError::NotInitialized => ErrorKind::State,
            ContractError::InvalidGoal
            | ContractError::InvalidDuration
            | ContractError::InvalidRewardRate
            | ContractError::Overflow => ErrorKind::Validation,
        }
    }
}
