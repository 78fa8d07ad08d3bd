#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("private key is not valid hex")]
    InvalidPrivateKeyEncoding,

    #[error("private key must be 32 bytes long, got {0}")]
    InvalidPrivateKeyLength(usize),
}
