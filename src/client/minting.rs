use std::sync::Arc;

use log::{debug, info};
use solana_sdk::instruction::Instruction;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use spl_associated_token_account::get_associated_token_address;

use crate::prelude::*;
use crate::{
    core::{MintedNft, SdkError, SdkResult},
    instructions::{
        create_mint_batch, InitializeInstructionBuilder, InitializeParams, MintInstructionBuilder,
        MintNftParams, MINT_ACCOUNT_SIZE,
    },
    protocol::PdaBuilder,
};

use super::BaseClient;

/// Minting flow service
pub struct MintingService {
    base: Arc<BaseClient>,
    pda: Arc<PdaBuilder>,
    init_builder: InitializeInstructionBuilder,
    mint_builder: MintInstructionBuilder,
}

impl MintingService {
    pub fn new(base: Arc<BaseClient>, pda: Arc<PdaBuilder>, program_id: Pubkey) -> Self {
        Self {
            base,
            pda,
            init_builder: InitializeInstructionBuilder::new(program_id),
            mint_builder: MintInstructionBuilder::new(program_id),
        }
    }

    /// Build the configuration initialization instruction
    pub fn initialize_ix(
        &self,
        initializer: Pubkey,
        params: InitializeParams,
    ) -> SdkResult<Instruction> {
        self.init_builder.initialize(initializer, params)
    }

    /// Submit the one-time configuration initialization.
    ///
    /// Not idempotent: a second submission against the same derived
    /// configuration address fails with a duplicate-account error, which
    /// surfaces as [`SdkError::Rpc`].
    pub async fn initialize(
        &self,
        initializer: &Keypair,
        params: InitializeParams,
    ) -> SdkResult<Signature> {
        let ix = self.initialize_ix(initializer.pubkey(), params)?;
        let signature = self.base.send_transaction(&[ix], &[initializer]).await?;
        info!("minting configuration initialized: {signature}");
        Ok(signature)
    }

    /// Build the three-instruction mint account batch
    pub fn create_mint_batch_ixs(
        &self,
        payer: &Pubkey,
        mint: &Pubkey,
        owner: &Pubkey,
        rent_lamports: u64,
    ) -> SdkResult<Vec<Instruction>> {
        create_mint_batch(payer, mint, owner, rent_lamports)
    }

    /// Create and initialize the mint plus its associated token account.
    ///
    /// All three instructions land in one transaction: either the whole
    /// batch takes effect or none of it does.
    pub async fn create_mint_accounts(
        &self,
        payer: &Keypair,
        mint: &Keypair,
        owner: &Pubkey,
    ) -> SdkResult<Signature> {
        let rent_lamports = self
            .base
            .minimum_balance_for_rent_exemption(MINT_ACCOUNT_SIZE)
            .await?;
        let batch = create_mint_batch(&payer.pubkey(), &mint.pubkey(), owner, rent_lamports)?;
        self.base.send_transaction(&batch, &[payer, mint]).await
    }

    /// Build the mint-and-attach-metadata instruction
    pub fn mint_nft_ix(
        &self,
        owner: Pubkey,
        payer: Pubkey,
        mint: Pubkey,
        creator: Pubkey,
        title: String,
    ) -> SdkResult<Instruction> {
        self.mint_builder
            .mint_nft(owner, payer, mint, MintNftParams { creator, title })
    }

    /// Run the full two-step mint flow.
    ///
    /// Step one creates and funds the mint and its associated token account
    /// as one atomic batch. Step two, submitted only after the batch
    /// confirms, mints a single unit and registers the metadata and
    /// master-edition accounts. A step-two failure leaves a valid empty mint
    /// behind and surfaces as [`SdkError::PartialMint`] carrying the batch
    /// signature; retrying is a caller decision and is not idempotent.
    pub async fn mint_nft(
        &self,
        owner: &Keypair,
        mint: &Keypair,
        title: &str,
    ) -> SdkResult<MintedNft> {
        let owner_pubkey = owner.pubkey();
        let mint_pubkey = mint.pubkey();

        let setup_signature = self.create_mint_accounts(owner, mint, &owner_pubkey).await?;
        debug!("mint accounts confirmed: {setup_signature}");

        let metadata_call = async {
            let ix = self.mint_nft_ix(
                owner_pubkey,
                owner_pubkey,
                mint_pubkey,
                mint_pubkey,
                title.to_string(),
            )?;
            self.base.send_transaction(&[ix], &[owner]).await
        };

        let mint_signature = metadata_call.await.map_err(|e| SdkError::PartialMint {
            setup_signature,
            reason: e.to_string(),
        })?;
        info!("nft minted: {mint_signature}");

        let (metadata, _) = self.pda.metadata(&mint_pubkey)?;
        let (master_edition, _) = self.pda.master_edition(&mint_pubkey)?;

        Ok(MintedNft {
            mint: mint_pubkey,
            token_account: get_associated_token_address(&owner_pubkey, &mint_pubkey),
            metadata,
            master_edition,
            setup_signature,
            mint_signature,
        })
    }

    /// Associated token account holding the NFT for `owner`
    pub fn get_token_account(&self, owner: &Pubkey, mint: &Pubkey) -> Pubkey {
        get_associated_token_address(owner, mint)
    }
}
