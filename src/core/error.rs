//! SDK error types

use solana_sdk::signature::Signature;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// No valid program-derived address exists for the seed set, or a seed
    /// exceeds the platform limit
    #[error("Derivation failed: {0}")]
    DerivationFailed(String),

    /// RPC error (submission rejected or timed out)
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    /// Serialization error
    #[error("Failed to serialize instruction data: {0}")]
    Serialization(String),

    /// Invalid parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The mint account batch confirmed but the metadata call did not.
    /// The mint exists without metadata; retrying is a caller decision.
    #[error("mint accounts created in {setup_signature} but metadata call failed: {reason}")]
    PartialMint {
        setup_signature: Signature,
        reason: String,
    },
}

pub type SdkResult<T> = Result<T, SdkError>;
