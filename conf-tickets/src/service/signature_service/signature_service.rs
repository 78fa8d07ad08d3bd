use super::Error;
use ed25519_dalek::{
    Signature, Signer, SigningKey, VerifyingKey, SECRET_KEY_LENGTH, SIGNATURE_LENGTH,
};

///
/// Ed25519 keypair held for the lifetime of the process.
/// Signatures are deterministic, signing the same message twice
/// yields the same bytes
///
#[derive(Clone)]
pub struct SignatureService {
    signing_key: SigningKey,
}

impl SignatureService {
    pub fn new(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    ///
    /// Creates service from hex encoded 32 byte seed
    ///
    pub fn from_hex_seed(seed: &str) -> Result<Self, Error> {
        let seed = hex::decode(seed.trim()).map_err(|_| Error::InvalidPrivateKeyEncoding)?;
        let seed: [u8; SECRET_KEY_LENGTH] = seed
            .try_into()
            .map_err(|seed: Vec<u8>| Error::InvalidPrivateKeyLength(seed.len()))?;

        Ok(Self::new(SigningKey::from_bytes(&seed)))
    }

    pub fn public_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.signing_key.sign(message).to_bytes()
    }

    ///
    /// Strict verification. Signature of invalid length is rejected
    /// the same way as a forged one
    ///
    pub fn verify(&self, message: &[u8], signature: &[u8], public_key: &VerifyingKey) -> bool {
        let Ok(signature) = Signature::from_slice(signature) else {
            return false;
        };

        public_key.verify_strict(message, &signature).is_ok()
    }
}
