pub mod base;
pub mod minting;

use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;

use crate::prelude::*;
use crate::{
    core::{program_id, SdkResult},
    protocol::PdaBuilder,
};

pub use base::BaseClient;
pub use minting::MintingService;

/// Main Wallet NFT client with service-based architecture
pub struct WalletNftClient {
    /// Base RPC client
    pub base: Arc<BaseClient>,
    /// Minting flow service
    pub minting: MintingService,
    /// PDA builder
    pub pda: Arc<PdaBuilder>,
}

impl WalletNftClient {
    /// Create a new client with the default program ID
    pub async fn new(rpc_url: &str) -> SdkResult<Self> {
        Self::with_program_id(rpc_url, program_id()).await
    }

    /// Create a new client with a custom program ID
    pub async fn with_program_id(rpc_url: &str, program_id: Pubkey) -> SdkResult<Self> {
        let rpc = Arc::new(RpcClient::new(rpc_url.to_string()));
        let base = Arc::new(BaseClient::with_program_id(rpc, program_id));
        let pda = Arc::new(PdaBuilder::new(program_id));

        Ok(Self {
            minting: MintingService::new(base.clone(), pda.clone(), program_id),
            base,
            pda,
        })
    }

    /// Get the program ID
    pub fn program_id(&self) -> Pubkey {
        self.base.program_id()
    }

    /// Get the RPC endpoint
    pub fn rpc_url(&self) -> String {
        self.base.rpc_url()
    }
}
