use solana_sdk::instruction::Instruction;
use solana_sdk::program_pack::Pack;
use solana_sdk::{system_instruction, system_program};
use spl_associated_token_account::get_associated_token_address;
use spl_associated_token_account::instruction::create_associated_token_account;

use crate::prelude::*;
use crate::{
    core::constants::token_metadata_program_id,
    core::{SdkError, SdkResult},
    impl_instruction,
    instructions::{InstructionBuilder, WalletNftInstructionBuilder},
    protocol::PdaBuilder,
};

const MINT_NFT_DISCRIMINATOR: [u8; 8] = [211, 57, 6, 167, 15, 219, 35, 251];

/// Size of an SPL token mint account
pub const MINT_ACCOUNT_SIZE: usize = spl_token::state::Mint::LEN;

/// Parameters for the mint-and-attach-metadata call
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct MintNftParams {
    pub creator: Pubkey,
    pub title: String,
}

impl_instruction!(MintNftParams, MINT_NFT_DISCRIMINATOR);

/// Build the three-instruction mint account batch.
///
/// Order is a correctness invariant: the initialize-mint instruction acts on
/// the account created by the first instruction, and the associated token
/// account references the mint initialized by the second. The batch must be
/// submitted as a single transaction so it lands atomically.
pub fn create_mint_batch(
    payer: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    rent_lamports: u64,
) -> SdkResult<Vec<Instruction>> {
    let create_account = system_instruction::create_account(
        payer,
        mint,
        rent_lamports,
        MINT_ACCOUNT_SIZE as u64,
        &spl_token::id(),
    );

    // Decimals fixed at 0: NFT supply is counted in whole units.
    let initialize_mint =
        spl_token::instruction::initialize_mint(&spl_token::id(), mint, owner, Some(owner), 0)
            .map_err(|e| SdkError::InvalidParameters(e.to_string()))?;

    let create_token_account =
        create_associated_token_account(payer, owner, mint, &spl_token::id());

    Ok(vec![create_account, initialize_mint, create_token_account])
}

/// Mint instruction builder
pub struct MintInstructionBuilder {
    pda: PdaBuilder,
    program_id: Pubkey,
}

impl MintInstructionBuilder {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            pda: PdaBuilder::new(program_id),
            program_id,
        }
    }

    /// Build the mint-and-attach-metadata instruction.
    ///
    /// Mints exactly one unit into the owner's associated token account and
    /// registers the metadata and master-edition accounts. Must only be
    /// submitted after the mint account batch has confirmed.
    pub fn mint_nft(
        &self,
        owner: Pubkey,
        payer: Pubkey,
        mint: Pubkey,
        params: MintNftParams,
    ) -> SdkResult<Instruction> {
        // Independent derivations, no ordering between them.
        let (metadata, _) = self.pda.metadata(&mint)?;
        let (master_edition, _) = self.pda.master_edition(&mint)?;
        let token_account = get_associated_token_address(&owner, &mint);

        Ok(WalletNftInstructionBuilder::new(self.program_id)
            .add_signer(owner)
            .add_writable(mint)
            .add_readonly(spl_token::id())
            .add_writable(metadata)
            .add_writable(token_account)
            .add_readonly(token_metadata_program_id())
            .add_signer(payer)
            .add_readonly(system_program::id())
            .add_readonly(sysvar::rent::id())
            .add_writable(master_edition)
            .with_data(params.build_data()?)
            .build())
    }
}
