use cosmwasm_std::{OverflowError, StdError, Uint256};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized: only the minter can perform this action")]
    Unauthorized,

    #[error("Invalid sender: {sender} is not a VM address")]
    InvalidSender { sender: String },

    #[error("Insufficient balance: have {balance}, need {required}")]
    InsufficientBalance { balance: Uint256, required: Uint256 },

    #[error("Invalid token info: {reason}")]
    InvalidTokenInfo { reason: String },
}
