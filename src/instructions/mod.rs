pub mod builder;
pub mod initialize;
/// Instruction builders for the Wallet NFT Minting program
pub mod mint;

pub use builder::*;
pub use initialize::*;
pub use mint::*;
