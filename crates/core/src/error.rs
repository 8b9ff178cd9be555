#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Insufficient {currency}: need {needed}, have {balance}")]
    InsufficientFunds {
        currency: crate::types::Currency,
        needed: i64,
        balance: i64,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
