pub mod crypto;
pub mod hash;
pub mod public_key;
pub mod selector;
pub mod transaction;
pub mod utxo_pool;
pub mod validation;

pub use self::{
    crypto::*, hash::*, public_key::*, selector::*, transaction::*, utxo_pool::*, validation::*,
};
