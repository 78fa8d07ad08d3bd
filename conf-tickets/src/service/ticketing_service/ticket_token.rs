//!
//! Text token embedded in the QR code:
//! ```text
//! hex(signature) ";" decimal(ticket_id) ":" base64(sha384(email))
//! ```
//! The signature covers everything after `;` exactly as it appears in the token
//!

use base64::{prelude::BASE64_STANDARD, Engine};
use sha2::{Digest, Sha384};

const SIGNATURE_DELIMITER: char = ';';
const TICKET_ID_DELIMITER: char = ':';

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("missing signature delimiter")]
    MissingSignatureDelimiter,

    #[error("missing ticket id delimiter")]
    MissingTicketIdDelimiter,

    #[error("ticket id is not an integer")]
    InvalidTicketId,

    #[error("signature is not valid hex")]
    InvalidSignatureEncoding,

    #[error("hashed email is not valid base64")]
    InvalidHashedEmailEncoding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketPayload {
    pub ticket_id: i64,
    pub hashed_email: Vec<u8>,
}

impl TicketPayload {
    pub fn new(ticket_id: i64, email: &str) -> Self {
        Self {
            ticket_id,
            hashed_email: hash_email(email),
        }
    }

    pub fn encode(&self) -> String {
        format!(
            "{}{TICKET_ID_DELIMITER}{}",
            self.ticket_id,
            BASE64_STANDARD.encode(&self.hashed_email)
        )
    }

    pub fn matches_email(&self, email: &str) -> bool {
        self.hashed_email == hash_email(email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketToken {
    pub signature: Vec<u8>,
    pub payload: TicketPayload,
    signed_segment: String,
}

impl TicketToken {
    pub fn encode(signature: &[u8], payload: &TicketPayload) -> String {
        format!(
            "{}{SIGNATURE_DELIMITER}{}",
            hex::encode(signature),
            payload.encode()
        )
    }

    pub fn decode(raw: &str) -> Result<Self, Error> {
        let (signature, signed_segment) = raw
            .split_once(SIGNATURE_DELIMITER)
            .ok_or(Error::MissingSignatureDelimiter)?;
        let (ticket_id, hashed_email) = signed_segment
            .split_once(TICKET_ID_DELIMITER)
            .ok_or(Error::MissingTicketIdDelimiter)?;

        let ticket_id = ticket_id
            .parse::<i64>()
            .map_err(|_| Error::InvalidTicketId)?;
        // encode writes lower case only, any other spelling is a different token
        if signature.bytes().any(|byte| byte.is_ascii_uppercase()) {
            return Err(Error::InvalidSignatureEncoding);
        }
        let signature = hex::decode(signature).map_err(|_| Error::InvalidSignatureEncoding)?;
        let hashed_email = BASE64_STANDARD
            .decode(hashed_email)
            .map_err(|_| Error::InvalidHashedEmailEncoding)?;

        Ok(Self {
            signature,
            payload: TicketPayload {
                ticket_id,
                hashed_email,
            },
            signed_segment: signed_segment.to_string(),
        })
    }

    ///
    /// Part of the token covered by the signature, as received
    ///
    pub fn signed_segment(&self) -> &str {
        &self.signed_segment
    }
}

pub fn hash_email(email: &str) -> Vec<u8> {
    Sha384::digest(email.as_bytes()).to_vec()
}
