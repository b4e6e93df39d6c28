use crate::{PublicKey, Sha256};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// The transaction data cannot be serialized into its canonical byte form.
///
/// This is a contract violation by the caller (a malformed transaction
/// shape), not a validity verdict: a transaction that triggers it could not
/// even be evaluated.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("cannot encode transaction data: {0}")]
    Encoding(#[from] bincode::Error),
    #[error("input slot {slot} is out of range for {input_count} inputs")]
    SlotOutOfRange { slot: u32, input_count: usize },
}

/// Identifies one spendable transaction output: the digest of the
/// transaction that produced it plus the output's position within it.
#[derive(Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Serialize, Deserialize)]
pub struct UtxoId {
    tx_digest: Sha256,
    output_index: u32,
}

impl UtxoId {
    pub fn new(tx_digest: Sha256, output_index: u32) -> Self {
        Self {
            tx_digest,
            output_index,
        }
    }

    pub fn tx_digest(&self) -> &Sha256 {
        &self.tx_digest
    }

    pub fn output_index(&self) -> u32 {
        self.output_index
    }
}

impl Display for UtxoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.tx_digest, self.output_index)
    }
}

/// A spendable amount locked to the owner's public key.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct TransactionOutput {
    amount: i64,
    owner: PublicKey,
}

impl TransactionOutput {
    pub fn new(amount: i64, owner: PublicKey) -> Self {
        Self { amount, owner }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn owner(&self) -> &PublicKey {
        &self.owner
    }
}

impl Display for TransactionOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.amount, self.owner)
    }
}

/// A reference to the UTXO being spent, plus the spender's signature over
/// the transaction's signing payload for this input's slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionInput {
    utxo_id: UtxoId,
    signature: Vec<u8>,
}

impl TransactionInput {
    pub fn new(utxo_id: UtxoId, signature: Vec<u8>) -> Self {
        Self { utxo_id, signature }
    }

    pub fn utxo_id(&self) -> &UtxoId {
        &self.utxo_id
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }
}

/// The canonical bytes an input's signature must cover.
///
/// The payload commits to the slot being signed, the full spend set and all
/// outputs, and contains no signature bytes, so inputs can be signed in any
/// order and the bytes for a given slot never change.
#[derive(Serialize)]
struct SigningPayload<'a> {
    slot: u32,
    spends: &'a [UtxoId],
    outputs: &'a [TransactionOutput],
}

/// Computes the canonical signing payload for one input slot of a
/// transaction spending `spends` and producing `outputs`.
///
/// Exposed as a free function because the spender needs these bytes before
/// the signed transaction exists.
pub fn signing_payload(
    slot: u32,
    spends: &[UtxoId],
    outputs: &[TransactionOutput],
) -> Result<Vec<u8>, PayloadError> {
    let payload = SigningPayload {
        slot,
        spends,
        outputs,
    };
    Ok(bincode::serialize(&payload)?)
}

/// A transfer of value: inputs claim unspent outputs, outputs create new
/// ones. The id is the double SHA-256 of the canonical encoding of the
/// finalized inputs and outputs and is frozen from construction on.
#[derive(Debug, Clone)]
pub struct Transaction {
    id: Sha256,
    inputs: Vec<TransactionInput>,
    outputs: Vec<TransactionOutput>,
}

impl Transaction {
    pub fn new(
        inputs: Vec<TransactionInput>,
        outputs: Vec<TransactionOutput>,
    ) -> Result<Self, PayloadError> {
        let id = Self::hash_transaction_data(&inputs, &outputs)?;
        Ok(Self {
            id,
            inputs,
            outputs,
        })
    }

    pub fn id(&self) -> &Sha256 {
        &self.id
    }

    pub fn inputs(&self) -> &[TransactionInput] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[TransactionOutput] {
        &self.outputs
    }

    /// The id of the UTXO created by the output at `output_index`.
    pub fn output_utxo_id(&self, output_index: u32) -> UtxoId {
        UtxoId::new(self.id, output_index)
    }

    /// The ids of every UTXO this transaction creates, in output order.
    pub fn produced_utxo_ids(&self) -> impl Iterator<Item = UtxoId> + '_ {
        (0..self.outputs.len()).map(move |index| UtxoId::new(self.id, index as u32))
    }

    /// The canonical bytes that the signature on input `slot` must cover.
    pub fn signing_payload(&self, slot: u32) -> Result<Vec<u8>, PayloadError> {
        if slot as usize >= self.inputs.len() {
            return Err(PayloadError::SlotOutOfRange {
                slot,
                input_count: self.inputs.len(),
            });
        }
        let spends = self
            .inputs
            .iter()
            .map(|input| *input.utxo_id())
            .collect::<Vec<UtxoId>>();
        signing_payload(slot, &spends, &self.outputs)
    }

    fn hash_transaction_data(
        inputs: &[TransactionInput],
        outputs: &[TransactionOutput],
    ) -> Result<Sha256, PayloadError> {
        let data = bincode::serialize(&(inputs, outputs))?;
        Ok(Sha256::double_digest(&data))
    }
}

impl Display for Transaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
