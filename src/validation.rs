use crate::{PayloadError, SignatureOracle, Transaction, UtxoId, UtxoPool};
use std::collections::HashSet;
use thiserror::Error;

/// Why a transaction failed validation.
///
/// The first five variants are ordinary validity verdicts: the transaction
/// was evaluated and found invalid, and the caller simply moves on.
/// `Payload` wraps a contract violation from the canonical encoder — such a
/// transaction could not even be evaluated.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("input references unknown UTXO {0}")]
    UnknownUtxo(UtxoId),
    #[error("signature on input {slot} does not verify")]
    SignatureInvalid { slot: u32 },
    #[error("UTXO {0} is claimed more than once")]
    DoubleClaim(UtxoId),
    #[error("output {index} has negative amount {amount}")]
    NegativeOutput { index: usize, amount: i64 },
    #[error("outputs total {total_output} exceeds inputs total {total_input}")]
    ValueImbalance {
        total_input: i64,
        total_output: i64,
    },
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

impl ValidationError {
    /// True for ordinary validity verdicts, false for contract violations.
    pub fn is_validity(&self) -> bool {
        !matches!(self, ValidationError::Payload(_))
    }
}

/// Summary of a successfully validated transaction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ValidatedTransaction {
    pub total_input: i64,
    pub total_output: i64,
    pub fee: i64,
}

/// Decides single-transaction validity against a snapshot of the UTXO pool.
///
/// A transaction is valid when all of the following hold:
/// 1. every claimed UTXO is unspent from the pool's point of view,
/// 2. every input's signature verifies against the claimed output's owner,
/// 3. no UTXO is claimed twice within the transaction,
/// 4. no output amount is negative,
/// 5. the claimed inputs cover the outputs (the fee is non-negative).
///
/// The checks run in that order and stop at the first failure. Validation
/// never mutates the pool.
pub struct TransactionValidator;

impl TransactionValidator {
    pub fn validate(
        transaction: &Transaction,
        pool: &UtxoPool,
        oracle: &dyn SignatureOracle,
    ) -> Result<ValidatedTransaction, ValidationError> {
        let mut total_input: i64 = 0;
        for input in transaction.inputs() {
            match pool.get(input.utxo_id()) {
                Some(output) => total_input += output.amount(),
                None => return Err(ValidationError::UnknownUtxo(*input.utxo_id())),
            }
        }

        for (slot, input) in transaction.inputs().iter().enumerate() {
            let slot = slot as u32;
            // The lookup cannot fail: every claimed UTXO was found above.
            let owner = pool
                .get(input.utxo_id())
                .ok_or(ValidationError::UnknownUtxo(*input.utxo_id()))?
                .owner();
            let payload = transaction.signing_payload(slot)?;
            if !oracle.verify(owner, &payload, input.signature()) {
                return Err(ValidationError::SignatureInvalid { slot });
            }
        }

        let mut claimed = HashSet::with_capacity(transaction.inputs().len());
        for input in transaction.inputs() {
            if !claimed.insert(input.utxo_id()) {
                return Err(ValidationError::DoubleClaim(*input.utxo_id()));
            }
        }

        let mut total_output: i64 = 0;
        for (index, output) in transaction.outputs().iter().enumerate() {
            if output.amount() < 0 {
                return Err(ValidationError::NegativeOutput {
                    index,
                    amount: output.amount(),
                });
            }
            total_output += output.amount();
        }

        if total_input < total_output {
            return Err(ValidationError::ValueImbalance {
                total_input,
                total_output,
            });
        }

        Ok(ValidatedTransaction {
            total_input,
            total_output,
            fee: total_input - total_output,
        })
    }

    pub fn is_valid(
        transaction: &Transaction,
        pool: &UtxoPool,
        oracle: &dyn SignatureOracle,
    ) -> bool {
        Self::validate(transaction, pool, oracle).is_ok()
    }
}
