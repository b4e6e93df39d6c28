use crate::PublicKey;
use ed25519_dalek::{Signer, SigningKey, VerifyingKey};

/// Decides whether a signature over a message was produced by the owner of
/// a public key.
///
/// The ledger core treats signatures as opaque: it calls the oracle once per
/// transaction input and never inspects the bytes itself. Implementations
/// must be pure functions of their arguments.
pub trait SignatureOracle: Sync {
    fn verify(&self, owner: &PublicKey, message: &[u8], signature: &[u8]) -> bool;
}

/// Ed25519 signature verification.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ed25519Oracle;

impl SignatureOracle for Ed25519Oracle {
    fn verify(&self, owner: &PublicKey, message: &[u8], signature: &[u8]) -> bool {
        let verifying_key = match VerifyingKey::from_bytes(owner.as_bytes()) {
            Ok(key) => key,
            // Garbage key bytes never verify; they are not an error.
            Err(_) => return false,
        };
        let signature = match ed25519_dalek::Signature::from_slice(signature) {
            Ok(signature) => signature,
            Err(_) => return false,
        };
        verifying_key.verify_strict(message, &signature).is_ok()
    }
}

/// An Ed25519 keypair derived from a fixed seed.
///
/// Deterministic seeds keep tests and the demo binary reproducible without
/// pulling in an OS randomness source.
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey::new(self.signing_key.verifying_key().to_bytes())
    }

    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        self.signing_key.sign(message).to_bytes().to_vec()
    }
}
