use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TicketScan {
    /// Raw content of the scanned QR code
    pub code: String,
}
