use crate::{
    repository,
    service::{blob_storage_service, mail_service, qr_code_service, ticketing_service::ticket_token},
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    #[error("malformed ticket: {0}")]
    MalformedTicket(#[from] ticket_token::Error),

    ///
    /// Signature mismatch, ticket not found, already used or issued
    /// for a different email. Callers cannot tell these apart
    ///
    #[error("invalid ticket: {0}")]
    InvalidTicket(&'static str),

    ///
    /// Ticket is persisted as paid but the mail was not accepted.
    /// It can be sent again with the resend operation
    ///
    #[error("ticket {ticket_id} issued but not delivered: {source}")]
    TicketNotDelivered {
        ticket_id: i64,
        source: mail_service::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    #[error("blob storage error: {0}")]
    BlobStorage(#[from] blob_storage_service::Error),

    #[error("qr code error: {0}")]
    QrCode(#[from] qr_code_service::Error),

    ///
    /// This error should be returned only in situations
    /// that should never occur when system is setup correctly.
    ///
    #[error("unexpected error: {0}")]
    UnexpectedError(#[from] anyhow::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::MalformedTicket(_) => StatusCode::BAD_REQUEST,
            Error::InvalidTicket(_) => StatusCode::NOT_ACCEPTABLE,
            Error::TicketNotDelivered { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::BlobStorage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::QrCode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}
