use crate::{
    dto::{input, output},
    error::Error,
    repository::Ticketing,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketingService: Send + Sync {
    async fn store_payment_receipt(&self, receipt: input::PaymentReceipt) -> Result<(), Error>;

    async fn validate_payment_receipt(
        &self,
        participant: input::ParticipantEmail,
    ) -> Result<output::TicketIssued, Error>;

    async fn resend_ticket(&self, participant: input::ParticipantEmail) -> Result<(), Error>;

    async fn verify_ticket(&self, scan: input::TicketScan) -> Result<Ticketing, Error>;

    async fn verify_is_student(&self, participant: input::ParticipantEmail) -> Result<(), Error>;
}
