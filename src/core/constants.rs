use crate::prelude::*;

/// Program ID for the Wallet NFT Minting program
pub const PROGRAM_ID: &str = "4qLzEGU2KaBggBkVgELQAU8wayPMTGa9EwxGWwzKRmKT";

/// Get the minting program ID as a Pubkey
pub fn program_id() -> Pubkey {
    PROGRAM_ID.parse().unwrap()
}

/// Get the Metaplex Token Metadata program ID as a Pubkey
pub fn token_metadata_program_id() -> Pubkey {
    mpl_token_metadata::ID
}

/// Seeds for the PDAs this SDK derives
pub mod seeds {
    /// Minting-configuration account, under the minting program
    pub const MINTING_CONFIG: &[u8] = b"wallet_nft_minting";
    /// Metadata and master-edition accounts, under the metadata program
    pub const METADATA: &[u8] = b"metadata";
    pub const EDITION: &[u8] = b"edition";
}
