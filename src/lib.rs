/// Wallet NFT Minting SDK
///
/// A client SDK for the Wallet NFT Minting program on Solana.
/// Provides high-level abstractions for:
/// - Deterministic program-derived address computation
/// - One-time minting configuration initialization
/// - The two-step NFT mint flow (mint account batch, then metadata call)
pub mod client;
pub mod core;
pub mod instructions;
pub mod prelude;
pub mod protocol;

pub use crate::core::*;
pub use client::*;
pub use protocol::*;
