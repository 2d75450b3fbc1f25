pub mod pda;

pub use pda::*;
