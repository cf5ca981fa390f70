use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Goal must be strictly positive.
    InvalidGoal = 3,
    /// Deadline must be strictly after the current ledger timestamp.
    InvalidDeadline = 4,
    /// Reward rate must be strictly positive.
    InvalidRewardRate = 5,
    /// Contribution amount must be strictly positive.
    InvalidAmount = 6,
    /// The campaign has left the Funding state.
    CampaignNotFunding = 7,
    /// The deadline has passed; only `finalize` is possible now.
    CampaignEnded = 8,
    /// `finalize` called before the deadline.
    DeadlineNotReached = 9,
    AlreadyFinalized = 10,
    Unauthorized = 11,
    NotSuccessful = 12,
    AlreadyWithdrawn = 13,
    NotFailed = 14,
    NothingToRefund = 15,
    AlreadyRefunded = 16,
    Overflow = 17,
    /// The reward token does not list this campaign as a minter.
    RewardMintFailed = 18,
    /// The reward token is uninitialized or failed outside its own checks.
    RewardTokenUnavailable = 19,
}

/// Coarse failure classes callers can branch on without matching every
/// variant.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Validation,
    State,
    Authorization,
    AlreadyDone,
    NotYetEligible,
}

impl ContractError {
    pub fn kind(&self) -> ErrorKind {
        use ContractError::*;
        match self {
            InvalidGoal | InvalidDeadline | InvalidRewardRate | InvalidAmount
            | NothingToRefund | Overflow => ErrorKind::Validation,
            NotInitialized | CampaignNotFunding | CampaignEnded | NotSuccessful | NotFailed
            | RewardTokenUnavailable => ErrorKind::State,
            Unauthorized | RewardMintFailed => ErrorKind::Authorization,
            AlreadyInitialized | AlreadyFinalized | AlreadyWithdrawn | AlreadyRefunded => {
                ErrorKind::AlreadyDone
            }
            DeadlineNotReached => ErrorKind::NotYetEligible,
        }
    }
}
