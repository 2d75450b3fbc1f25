//! Address derivation example for the Wallet NFT SDK
//!
//! This example demonstrates the deterministic PDA derivations

use solana_sdk::pubkey::Pubkey;
use wallet_nft_sdk::core::constants::program_id;
use wallet_nft_sdk::protocol::{
    find_master_edition_address, find_metadata_address, find_minting_config_address,
};

fn main() -> anyhow::Result<()> {
    println!("=== Wallet NFT SDK Address Derivation ===\n");

    println!("Program ID: {}", program_id());

    // Minting configuration, fixed seed under the minting program
    let (minting_config, bump) = find_minting_config_address()?;
    println!("Minting config PDA: {} (bump {})", minting_config, bump);

    // Metadata and master edition for a fresh mint, both under the
    // Token Metadata program and independent of each other
    let mint = Pubkey::new_unique();
    let (metadata, _) = find_metadata_address(&mint)?;
    let (master_edition, _) = find_master_edition_address(&mint)?;

    println!("\nMint: {}", mint);
    println!("Metadata PDA: {}", metadata);
    println!("Master edition PDA: {}", master_edition);

    Ok(())
}
