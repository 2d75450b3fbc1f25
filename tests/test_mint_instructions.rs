//! Structural tests for the instruction builders

#[cfg(test)]
mod tests {
    use solana_program::program_option::COption;
    use solana_sdk::{pubkey::Pubkey, system_program, sysvar};
    use spl_token::instruction::TokenInstruction;
    use wallet_nft_sdk::core::constants::{program_id, token_metadata_program_id};
    use wallet_nft_sdk::instructions::{
        create_mint_batch, InitializeInstructionBuilder, InitializeParams, MintInstructionBuilder,
        MintNftParams, MINT_ACCOUNT_SIZE,
    };
    use wallet_nft_sdk::protocol::PdaBuilder;

    fn initialize_params(authorized_creator: Pubkey) -> InitializeParams {
        InitializeParams {
            config_id: 487,
            authorized_creator,
            max_supply: 9999,
            og_limit: 20,
            whitelist_limit: 20,
            public_limit: 20,
            og_price: 1_500_000_000,
            whitelist_price: 2_000_000_000,
            public_price: 2_000_000_000,
        }
    }

    #[test]
    fn test_mint_batch_ordering() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();

        let batch = create_mint_batch(&payer, &mint, &owner, 1_461_600).unwrap();
        assert_eq!(batch.len(), 3, "batch must hold exactly 3 instructions");

        // 1. Account creation, owned by the token program
        assert_eq!(batch[0].program_id, system_program::id());
        assert_eq!(batch[0].accounts[0].pubkey, payer);
        assert!(batch[0].accounts[0].is_signer);
        assert_eq!(batch[0].accounts[1].pubkey, mint);
        assert!(batch[0].accounts[1].is_signer);

        // 2. Mint initialization
        assert_eq!(batch[1].program_id, spl_token::id());

        // 3. Associated token account creation
        assert_eq!(batch[2].program_id, spl_associated_token_account::id());
        assert_eq!(batch[2].accounts[0].pubkey, payer, "payer funds the ATA");
    }

    #[test]
    fn test_mint_batch_decimals_and_authorities() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();

        let batch = create_mint_batch(&payer, &mint, &owner, 1_461_600).unwrap();

        match TokenInstruction::unpack(&batch[1].data).unwrap() {
            TokenInstruction::InitializeMint {
                decimals,
                mint_authority,
                freeze_authority,
            } => {
                assert_eq!(decimals, 0, "NFT supply is counted in whole units");
                assert_eq!(mint_authority, owner);
                assert_eq!(freeze_authority, COption::Some(owner));
            }
            other => panic!("expected InitializeMint, got {:?}", other),
        }
    }

    #[test]
    fn test_mint_account_size_matches_spl_layout() {
        assert_eq!(MINT_ACCOUNT_SIZE, 82);
    }

    #[test]
    fn test_initialize_instruction_accounts() {
        let initializer = Pubkey::new_unique();
        let builder = InitializeInstructionBuilder::new(program_id());
        let pda = PdaBuilder::new(program_id());
        let (minting_config, _) = pda.minting_config().unwrap();

        let ix = builder
            .initialize(initializer, initialize_params(initializer))
            .unwrap();

        assert_eq!(ix.program_id, program_id());
        assert_eq!(ix.accounts.len(), 5);
        assert_eq!(ix.accounts[0].pubkey, minting_config);
        assert!(ix.accounts[0].is_writable && !ix.accounts[0].is_signer);
        assert_eq!(ix.accounts[1].pubkey, initializer);
        assert!(ix.accounts[1].is_signer);
        assert_eq!(ix.accounts[2].pubkey, system_program::id());
        assert_eq!(ix.accounts[3].pubkey, spl_token::id());
        assert_eq!(ix.accounts[4].pubkey, sysvar::rent::id());
    }

    #[test]
    fn test_initialize_instruction_data() {
        let initializer = Pubkey::new_unique();
        let builder = InitializeInstructionBuilder::new(program_id());

        let ix = builder
            .initialize(initializer, initialize_params(initializer))
            .unwrap();

        assert_eq!(&ix.data[..8], &[175, 175, 109, 31, 13, 152, 155, 237]);
        // discriminator + u16 + pubkey + 7 x u64
        assert_eq!(ix.data.len(), 8 + 2 + 32 + 7 * 8);
        assert_eq!(&ix.data[8..10], &487u16.to_le_bytes());
    }

    #[test]
    fn test_mint_nft_instruction_accounts() {
        let owner = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let builder = MintInstructionBuilder::new(program_id());
        let pda = PdaBuilder::new(program_id());

        let (metadata, _) = pda.metadata(&mint).unwrap();
        let (master_edition, _) = pda.master_edition(&mint).unwrap();
        let token_account =
            spl_associated_token_account::get_associated_token_address(&owner, &mint);

        let params = MintNftParams {
            creator: mint,
            title: "NFT Title".to_string(),
        };
        let ix = builder.mint_nft(owner, payer, mint, params).unwrap();

        assert_eq!(ix.program_id, program_id());
        assert_eq!(ix.accounts.len(), 10);
        assert_eq!(ix.accounts[0].pubkey, owner);
        assert!(ix.accounts[0].is_signer, "owner signs as mint authority");
        assert_eq!(ix.accounts[1].pubkey, mint);
        assert!(ix.accounts[1].is_writable);
        assert_eq!(ix.accounts[2].pubkey, spl_token::id());
        assert_eq!(ix.accounts[3].pubkey, metadata);
        assert!(ix.accounts[3].is_writable);
        assert_eq!(ix.accounts[4].pubkey, token_account);
        assert_eq!(ix.accounts[5].pubkey, token_metadata_program_id());
        assert_eq!(ix.accounts[6].pubkey, payer);
        assert!(ix.accounts[6].is_signer);
        assert_eq!(ix.accounts[7].pubkey, system_program::id());
        assert_eq!(ix.accounts[8].pubkey, sysvar::rent::id());
        assert_eq!(ix.accounts[9].pubkey, master_edition);
        assert!(ix.accounts[9].is_writable);
    }

    #[test]
    fn test_mint_nft_instruction_data() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let builder = MintInstructionBuilder::new(program_id());

        let title = "NFT Title";
        let params = MintNftParams {
            creator: mint,
            title: title.to_string(),
        };
        let ix = builder.mint_nft(owner, owner, mint, params).unwrap();

        assert_eq!(&ix.data[..8], &[211, 57, 6, 167, 15, 219, 35, 251]);
        assert_eq!(&ix.data[8..40], mint.as_ref());
        // borsh string: u32 length prefix + bytes
        assert_eq!(
            &ix.data[40..44],
            &(title.len() as u32).to_le_bytes(),
        );
        assert_eq!(&ix.data[44..], title.as_bytes());
    }
}
