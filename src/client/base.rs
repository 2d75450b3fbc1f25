use std::sync::Arc;

use log::debug;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};

use crate::core::{program_id, SdkResult};
use crate::prelude::*;

/// Base RPC client wrapper for common operations
pub struct BaseClient {
    rpc: Arc<RpcClient>,
    program_id: Pubkey,
}

impl BaseClient {
    pub fn new(rpc: Arc<RpcClient>) -> Self {
        Self {
            rpc,
            program_id: program_id(),
        }
    }

    pub fn with_program_id(rpc: Arc<RpcClient>, program_id: Pubkey) -> Self {
        Self { rpc, program_id }
    }

    /// Get the RPC client
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Get the program ID
    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    /// Get the RPC endpoint URL
    pub fn rpc_url(&self) -> String {
        self.rpc.url()
    }

    /// Fetch an account
    pub async fn get_account(&self, address: &Pubkey) -> SdkResult<Account> {
        Ok(self.rpc.get_account(address).await?)
    }

    /// Get account balance
    pub async fn get_balance(&self, pubkey: &Pubkey) -> SdkResult<u64> {
        Ok(self.rpc.get_balance(pubkey).await?)
    }

    /// Minimum lamports for an account of `size` bytes to persist rent-free
    pub async fn minimum_balance_for_rent_exemption(&self, size: usize) -> SdkResult<u64> {
        Ok(self
            .rpc
            .get_minimum_balance_for_rent_exemption(size)
            .await?)
    }

    /// Send a transaction and wait for confirmation.
    ///
    /// The first signer pays the fee. Suspends until the network confirms
    /// inclusion; callers apply their own timeout.
    pub async fn send_transaction(
        &self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> SdkResult<Signature> {
        let recent_blockhash = self.rpc.get_latest_blockhash().await?;

        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&signers[0].pubkey()),
            signers,
            recent_blockhash,
        );

        debug!(
            "submitting transaction with {} instruction(s)",
            instructions.len()
        );
        Ok(self.rpc.send_and_confirm_transaction(&tx).await?)
    }

    /// Send a transaction with a custom commitment level
    pub async fn send_transaction_with_config(
        &self,
        instructions: &[Instruction],
        signers: &[&Keypair],
        commitment: CommitmentConfig,
    ) -> SdkResult<Signature> {
        let recent_blockhash = self.rpc.get_latest_blockhash().await?;

        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&signers[0].pubkey()),
            signers,
            recent_blockhash,
        );

        debug!(
            "submitting transaction with {} instruction(s) at {:?}",
            instructions.len(),
            commitment.commitment
        );
        Ok(self
            .rpc
            .send_and_confirm_transaction_with_spinner_and_commitment(&tx, commitment)
            .await?)
    }
}
