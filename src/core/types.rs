use crate::prelude::*;
use solana_sdk::signature::Signature;

/// Result of a completed two-step mint flow
#[derive(Clone, Debug)]
pub struct MintedNft {
    /// The new mint
    pub mint: Pubkey,
    /// Associated token account holding the single minted unit
    pub token_account: Pubkey,
    /// Derived metadata account
    pub metadata: Pubkey,
    /// Derived master-edition account
    pub master_edition: Pubkey,
    /// Confirmation of the mint account batch
    pub setup_signature: Signature,
    /// Confirmation of the mint-and-attach-metadata call
    pub mint_signature: Signature,
}
