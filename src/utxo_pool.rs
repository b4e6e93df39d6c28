use crate::{Transaction, TransactionOutput, UtxoId};
use std::collections::HashMap;

/// The set of unspent transaction outputs, indexed by their id.
///
/// The pool is a plain value: callers clone it to take a working snapshot,
/// so a prior ledger state is never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct UtxoPool {
    utxos: HashMap<UtxoId, TransactionOutput>,
}

impl UtxoPool {
    pub fn new() -> Self {
        Self {
            utxos: HashMap::new(),
        }
    }

    pub fn contains(&self, utxo_id: &UtxoId) -> bool {
        self.utxos.contains_key(utxo_id)
    }

    pub fn get(&self, utxo_id: &UtxoId) -> Option<&TransactionOutput> {
        self.utxos.get(utxo_id)
    }

    /// Ensures that the output is spendable under the given id.
    pub fn add(&mut self, utxo_id: UtxoId, output: TransactionOutput) {
        self.utxos.insert(utxo_id, output);
    }

    pub fn remove(&mut self, utxo_id: &UtxoId) -> Option<TransactionOutput> {
        self.utxos.remove(utxo_id)
    }

    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UtxoId, &TransactionOutput)> {
        self.utxos.iter()
    }

    /// Applies an accepted transaction: its claimed UTXOs leave the pool and
    /// its outputs become spendable.
    ///
    /// The caller must have validated the transaction first; applying an
    /// invalid transaction would corrupt the pool.
    pub fn apply(&mut self, transaction: &Transaction) {
        for input in transaction.inputs() {
            self.utxos.remove(input.utxo_id());
        }
        for (index, output) in transaction.outputs().iter().enumerate() {
            self.utxos
                .insert(transaction.output_utxo_id(index as u32), *output);
        }
    }
}
