use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    dto::{input, output},
    error::Error,
    service::ticketing_service::TicketingService,
};
use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use std::sync::Arc;

const EMAIL_FIELD: &str = "email";
const PHOTO_FIELD: &str = "photo";

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/payment-receipt", post(store_payment_receipt))
        .route(
            "/api/v1/payment-receipt/validation",
            post(validate_payment_receipt),
        )
        .route("/api/v1/ticket/resend", post(resend_ticket))
        .route("/api/v1/ticket/scan", post(verify_ticket))
        .route("/api/v1/student/verification", post(verify_is_student))
        .layer(DefaultBodyLimit::disable())
        .layer(application_middleware.body_limit.clone())
}

async fn store_payment_receipt(
    State(ticketing_service): State<Arc<dyn TicketingService>>,
    multipart: Multipart,
) -> Result<StatusCode, Error> {
    let receipt = read_payment_receipt(multipart)
        .await
        .map_err(|err| {
            tracing::debug!(err = %err, "invalid multipart form");
            Error::Validation(vec!["invalid multipart form"])
        })?;

    ticketing_service.store_payment_receipt(receipt).await?;

    Ok(StatusCode::CREATED)
}

///
/// Missing fields are left empty and reported by the service validation
///
async fn read_payment_receipt(
    mut multipart: Multipart,
) -> Result<input::PaymentReceipt, MultipartError> {
    let mut receipt = input::PaymentReceipt {
        email: String::new(),
        photo: Vec::new(),
        content_type: String::new(),
    };

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            EMAIL_FIELD => {
                receipt.email = field.text().await?;
            }
            PHOTO_FIELD => {
                receipt.content_type = field.content_type().unwrap_or_default().to_string();
                receipt.photo = field.bytes().await?.to_vec();
            }
            _ => {}
        }
    }

    Ok(receipt)
}

async fn validate_payment_receipt(
    State(ticketing_service): State<Arc<dyn TicketingService>>,
    Json(participant): Json<input::ParticipantEmail>,
) -> Result<(StatusCode, Json<output::TicketIssued>), Error> {
    let ticket_issued = ticketing_service
        .validate_payment_receipt(participant)
        .await?;

    Ok((StatusCode::OK, Json(ticket_issued)))
}

async fn resend_ticket(
    State(ticketing_service): State<Arc<dyn TicketingService>>,
    Json(participant): Json<input::ParticipantEmail>,
) -> Result<StatusCode, Error> {
    ticketing_service.resend_ticket(participant).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn verify_ticket(
    State(ticketing_service): State<Arc<dyn TicketingService>>,
    Json(scan): Json<input::TicketScan>,
) -> Result<(StatusCode, Json<output::VerifiedTicket>), Error> {
    let ticketing = ticketing_service.verify_ticket(scan).await?;

    Ok((StatusCode::OK, Json(ticketing.into())))
}

async fn verify_is_student(
    State(ticketing_service): State<Arc<dyn TicketingService>>,
    Json(participant): Json<input::ParticipantEmail>,
) -> Result<StatusCode, Error> {
    ticketing_service.verify_is_student(participant).await?;

    Ok(StatusCode::NO_CONTENT)
}
