use solana_sdk::instruction::Instruction;
use solana_sdk::system_program;

use crate::prelude::*;
use crate::{
    core::SdkResult,
    impl_instruction,
    instructions::{InstructionBuilder, WalletNftInstructionBuilder},
    protocol::PdaBuilder,
};

// Instruction discriminators
const INITIALIZE_DISCRIMINATOR: [u8; 8] = [175, 175, 109, 31, 13, 152, 155, 237];

/// Parameters for initializing the minting configuration.
///
/// The bounds and prices are opaque to the SDK; their semantics live in the
/// on-chain program.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeParams {
    pub config_id: u16,
    pub authorized_creator: Pubkey,
    pub max_supply: u64,
    pub og_limit: u64,
    pub whitelist_limit: u64,
    pub public_limit: u64,
    pub og_price: u64,
    pub whitelist_price: u64,
    pub public_price: u64,
}

impl_instruction!(InitializeParams, INITIALIZE_DISCRIMINATOR);

/// Initialize instruction builder
pub struct InitializeInstructionBuilder {
    pda: PdaBuilder,
    program_id: Pubkey,
}

impl InitializeInstructionBuilder {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            pda: PdaBuilder::new(program_id),
            program_id,
        }
    }

    /// Build the one-time configuration initialization instruction.
    ///
    /// Submitting it creates and funds the configuration account. Submitting
    /// it a second time fails on-chain with a duplicate-account error; the
    /// SDK does not retry.
    pub fn initialize(
        &self,
        initializer: Pubkey,
        params: InitializeParams,
    ) -> SdkResult<Instruction> {
        let (minting_config, _) = self.pda.minting_config()?;

        Ok(WalletNftInstructionBuilder::new(self.program_id)
            .add_writable(minting_config)
            .add_signer(initializer)
            .add_readonly(system_program::id())
            .add_readonly(spl_token::id())
            .add_readonly(sysvar::rent::id())
            .with_data(params.build_data()?)
            .build())
    }
}
