use std::collections::HashMap;
use std::sync::RwLock;

use crate::core::constants::{seeds, token_metadata_program_id};
use crate::core::{SdkError, SdkResult};
use crate::prelude::*;

/// Derive a program address from an ordered seed set.
///
/// Pure and deterministic: identical seeds under the same owner always yield
/// the same (address, bump) pair. Fails when a seed exceeds the platform
/// limit or no valid bump exists; never truncates, never retries.
pub fn derive_address(seed_set: &[&[u8]], owner: &Pubkey) -> SdkResult<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seed_set, owner)
        .ok_or_else(|| SdkError::DerivationFailed(format!("no valid address under {owner}")))
}

/// PDA cache to avoid recomputing addresses
pub struct PdaCache {
    cache: RwLock<HashMap<String, (Pubkey, u8)>>,
}

impl PdaCache {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn get_or_compute<F>(&self, key: &str, compute: F) -> SdkResult<(Pubkey, u8)>
    where
        F: FnOnce() -> SdkResult<(Pubkey, u8)>,
    {
        if let Some(cached) = self.cache.read().unwrap().get(key) {
            return Ok(*cached);
        }

        let result = compute()?;
        self.cache.write().unwrap().insert(key.to_string(), result);
        Ok(result)
    }
}

impl Default for PdaCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified PDA builder for the minting flow addresses
pub struct PdaBuilder {
    cache: PdaCache,
    pub program_id: Pubkey,
}

impl PdaBuilder {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            cache: PdaCache::new(),
            program_id,
        }
    }

    /// Minting-configuration account, seed `"wallet_nft_minting"` under the
    /// minting program
    pub fn minting_config(&self) -> SdkResult<(Pubkey, u8)> {
        let key = "minting_config";
        self.cache.get_or_compute(key, || {
            derive_address(&[seeds::MINTING_CONFIG], &self.program_id)
        })
    }

    /// Metadata account for a mint, under the Token Metadata program
    pub fn metadata(&self, mint: &Pubkey) -> SdkResult<(Pubkey, u8)> {
        let key = format!("metadata:{}", mint);
        let metadata_program = token_metadata_program_id();
        self.cache.get_or_compute(&key, || {
            derive_address(
                &[seeds::METADATA, metadata_program.as_ref(), mint.as_ref()],
                &metadata_program,
            )
        })
    }

    /// Master-edition account for a mint, under the Token Metadata program.
    /// Same seed set as [`Self::metadata`] plus the trailing `"edition"` seed.
    pub fn master_edition(&self, mint: &Pubkey) -> SdkResult<(Pubkey, u8)> {
        let key = format!("master_edition:{}", mint);
        let metadata_program = token_metadata_program_id();
        self.cache.get_or_compute(&key, || {
            derive_address(
                &[
                    seeds::METADATA,
                    metadata_program.as_ref(),
                    mint.as_ref(),
                    seeds::EDITION,
                ],
                &metadata_program,
            )
        })
    }
}

/// Convenience functions for one-off PDA derivations
pub fn find_minting_config_address() -> SdkResult<(Pubkey, u8)> {
    PdaBuilder::new(crate::core::program_id()).minting_config()
}

pub fn find_metadata_address(mint: &Pubkey) -> SdkResult<(Pubkey, u8)> {
    PdaBuilder::new(crate::core::program_id()).metadata(mint)
}

pub fn find_master_edition_address(mint: &Pubkey) -> SdkResult<(Pubkey, u8)> {
    PdaBuilder::new(crate::core::program_id()).master_edition(mint)
}
