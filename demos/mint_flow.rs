//! End-to-end mint flow against a local validator
//!
//! Expects a running localnet with the minting program deployed and the
//! payer keypair funded.

use solana_sdk::signature::{Keypair, Signer};
use wallet_nft_sdk::instructions::InitializeParams;
use wallet_nft_sdk::WalletNftClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = WalletNftClient::new("http://localhost:8899").await?;
    println!("Connected to {}", client.rpc_url());
    println!("Program ID: {}", client.program_id());

    let wallet = Keypair::new();
    println!("Wallet: {}", wallet.pubkey());

    // One-time configuration setup. Re-running this against the same
    // derived config address fails with a duplicate-account error.
    let params = InitializeParams {
        config_id: 487,
        authorized_creator: wallet.pubkey(),
        max_supply: 9999,
        og_limit: 20,
        whitelist_limit: 20,
        public_limit: 20,
        og_price: 1_500_000_000,
        whitelist_price: 2_000_000_000,
        public_price: 2_000_000_000,
    };
    match client.minting.initialize(&wallet, params).await {
        Ok(signature) => println!("Initialized: {}", signature),
        Err(e) => println!("Initialize failed (already configured?): {}", e),
    }

    // Two-step mint: account batch first, metadata call after confirmation
    let mint = Keypair::new();
    match client.minting.mint_nft(&wallet, &mint, "NFT Title").await {
        Ok(nft) => {
            println!("Mint: {}", nft.mint);
            println!("Token account: {}", nft.token_account);
            println!("Metadata: {}", nft.metadata);
            println!("Master edition: {}", nft.master_edition);
            println!("Setup tx: {}", nft.setup_signature);
            println!("Mint tx: {}", nft.mint_signature);
        }
        Err(e) => println!("Mint failed: {}", e),
    }

    Ok(())
}
