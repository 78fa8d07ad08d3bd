use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TicketIssued {
    /// Hex encoded SHA-256 of the QR code image sent to the participant
    pub sha256sum: String,
}
