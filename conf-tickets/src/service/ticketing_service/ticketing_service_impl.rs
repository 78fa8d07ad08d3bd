use super::{
    ticket_mail,
    ticket_token::{TicketPayload, TicketToken},
    TicketingService, TicketingServiceConfig,
};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, Ticketing, TicketingRepository, TicketingUpdate},
    service::{
        blob_storage_service::BlobStorageService, mail_service::MailService,
        qr_code_service::QrCodeService, signature_service::SignatureService,
    },
};
use anyhow::anyhow;
use axum::async_trait;
use ed25519_dalek::VerifyingKey;
use sha2::{Digest, Sha256};
use std::{collections::HashMap, sync::Arc};
use time::{macros::format_description, OffsetDateTime};

struct IssuedTicket {
    qr_code_png: Vec<u8>,
    sha256_sum: String,
}

pub struct TicketingServiceImpl {
    config: TicketingServiceConfig,
    repository: Arc<dyn TicketingRepository>,
    blob_storage_service: Arc<dyn BlobStorageService>,
    mail_service: Arc<dyn MailService>,
    qr_code_service: Arc<dyn QrCodeService>,
    signature_service: SignatureService,
    public_key: VerifyingKey,
}

impl TicketingServiceImpl {
    pub fn new(
        config: TicketingServiceConfig,
        repository: Arc<dyn TicketingRepository>,
        blob_storage_service: Arc<dyn BlobStorageService>,
        mail_service: Arc<dyn MailService>,
        qr_code_service: Arc<dyn QrCodeService>,
        signature_service: SignatureService,
    ) -> Self {
        let public_key = signature_service.public_key();

        Self {
            config,
            repository,
            blob_storage_service,
            mail_service,
            qr_code_service,
            signature_service,
            public_key,
        }
    }

    fn email_error(email: &str) -> Option<&'static str> {
        if email.is_empty() {
            return Some("email is empty");
        }
        if !email.contains('@') {
            return Some("email is invalid");
        }

        None
    }

    fn validate_email(email: &str) -> Result<&str, Error> {
        let email = email.trim();
        match Self::email_error(email) {
            Some(err) => Err(Error::Validation(vec![err])),
            None => Ok(email),
        }
    }

    ///
    /// Extension inferred from the content type. MIME subtype is preferred
    /// when it is one of the known extensions, e.g. `image/jpeg` gives `jpeg`
    ///
    fn file_extension(content_type: &str) -> Option<&'static str> {
        let mime = content_type.parse::<mime_guess::Mime>().ok()?;
        let extensions = mime_guess::get_mime_extensions(&mime)?;
        let subtype = mime.subtype().as_str();

        extensions
            .iter()
            .find(|extension| **extension == subtype)
            .or_else(|| extensions.first())
            .copied()
    }

    fn receipt_blob_key(
        uploaded_at: OffsetDateTime,
        email: &str,
        content_type: &str,
    ) -> Result<String, Error> {
        let timestamp = uploaded_at
            .format(format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second]Z"
            ))
            .map_err(anyhow::Error::from)?;

        let key = match Self::file_extension(content_type) {
            Some(extension) => format!("{timestamp}_{email}.{extension}"),
            None => format!("{timestamp}_{email}"),
        };

        Ok(key)
    }

    async fn find_latest_by_email(&self, email: &str) -> Result<Ticketing, Error> {
        self.repository
            .find_latest_by_email(email)
            .await?
            .ok_or(Error::InvalidTicket("payment receipt not exist"))
    }

    ///
    /// Signs the ticket and renders it as QR code.
    /// Ed25519 signatures and QR rendering are deterministic so issuing
    /// the same ticket twice gives the same image
    ///
    async fn issue_ticket(&self, ticketing: &Ticketing) -> Result<IssuedTicket, Error> {
        let payload = TicketPayload::new(ticketing.id, &ticketing.email);
        let signature = self.signature_service.sign(payload.encode().as_bytes());
        let token = TicketToken::encode(&signature, &payload);

        let qr_code_service = self.qr_code_service.clone();
        let qr_code_png = tokio::task::spawn_blocking(move || qr_code_service.render_png(&token))
            .await
            .map_err(anyhow::Error::from)??;

        let sha256_sum = hex::encode(Sha256::digest(&qr_code_png));

        Ok(IssuedTicket {
            qr_code_png,
            sha256_sum,
        })
    }

    async fn send_ticket(&self, ticketing: &Ticketing, ticket: IssuedTicket) -> Result<(), Error> {
        let mail = ticket_mail::create_ticket_mail(
            &self.config,
            ticketing,
            ticket.qr_code_png,
            &ticket.sha256_sum,
        );

        match self.mail_service.send(mail).await {
            Ok(()) => {
                tracing::info!(id = ticketing.id, "sent ticket");
                Ok(())
            }
            Err(source) => {
                tracing::error!(
                    id = ticketing.id,
                    err = %source,
                    "ticket is paid but mail was not delivered"
                );
                Err(Error::TicketNotDelivered {
                    ticket_id: ticketing.id,
                    source,
                })
            }
        }
    }
}

#[async_trait]
impl TicketingService for TicketingServiceImpl {
    ///
    /// Uploads receipt photo and creates or updates the ticketing record
    ///
    /// ### Errors
    /// - [Error::Validation] when email, photo or content type is missing
    ///
    async fn store_payment_receipt(
        &self,
        input::PaymentReceipt {
            email,
            photo,
            content_type,
        }: input::PaymentReceipt,
    ) -> Result<(), Error> {
        tracing::info!("storing payment receipt");

        let email = email.trim();
        let content_type = content_type.trim();

        let mut errors = Vec::new();
        if let Some(err) = Self::email_error(email) {
            errors.push(err);
        }
        if photo.is_empty() {
            errors.push("photo is empty");
        }
        if content_type.is_empty() {
            errors.push("content_type is empty");
        }
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        let blob_key = Self::receipt_blob_key(OffsetDateTime::now_utc(), email, content_type)?;
        let metadata = HashMap::from([("email".to_string(), email.to_string())]);
        self.blob_storage_service
            .upload(&blob_key, photo, content_type, metadata)
            .await?;
        tracing::debug!(key = %blob_key, "uploaded payment receipt");

        let id = self.repository.insert_receipt(email, &blob_key).await?;
        tracing::info!(id, "stored payment receipt");

        Ok(())
    }

    ///
    /// Issues ticket for the latest payment receipt of the participant.
    /// Record is marked as paid before the mail is sent
    ///
    /// ### Returns
    /// [output::TicketIssued] with hex SHA-256 of the QR code image
    ///
    /// ### Errors
    /// - [Error::InvalidTicket] when
    ///     - payment receipt does not exist
    ///     - ticket has already been used
    /// - [Error::TicketNotDelivered] when ticket is persisted but mail failed
    ///
    async fn validate_payment_receipt(
        &self,
        input::ParticipantEmail { email }: input::ParticipantEmail,
    ) -> Result<output::TicketIssued, Error> {
        tracing::info!("validating payment receipt");

        let email = Self::validate_email(&email)?;
        let ticketing = self.find_latest_by_email(email).await?;
        if ticketing.used {
            return Err(Error::InvalidTicket("ticket already used"));
        }

        let ticket = self.issue_ticket(&ticketing).await?;
        let sha256_sum = ticket.sha256_sum.clone();

        let update = match ticketing.sha256_sum.as_str() {
            "" => Some(TicketingUpdate {
                paid: Some(true),
                sha256_sum: Some(sha256_sum.clone()),
                ..Default::default()
            }),
            stored if stored == sha256_sum => match ticketing.paid {
                true => None,
                false => Some(TicketingUpdate {
                    paid: Some(true),
                    ..Default::default()
                }),
            },
            _ => {
                tracing::error!(id = ticketing.id, "stored ticket differs from issued ticket");
                return Err(Error::UnexpectedError(anyhow!(
                    "ticket {} digest does not match stored digest",
                    ticketing.id
                )));
            }
        };

        if let Some(update) = update {
            self.repository.update(ticketing.id, update).await?;
            tracing::info!(id = ticketing.id, "marked ticket as paid");
        }

        self.send_ticket(&ticketing, ticket).await?;

        Ok(output::TicketIssued { sha256sum: sha256_sum })
    }

    ///
    /// Sends already issued ticket again. The mail is identical
    /// to the one sent during validation
    ///
    /// ### Errors
    /// - [Error::InvalidTicket] when
    ///     - payment receipt does not exist
    ///     - ticket was not issued yet
    ///     - ticket has already been used
    ///
    async fn resend_ticket(
        &self,
        input::ParticipantEmail { email }: input::ParticipantEmail,
    ) -> Result<(), Error> {
        tracing::info!("resending ticket");

        let email = Self::validate_email(&email)?;
        let ticketing = self.find_latest_by_email(email).await?;

        if !ticketing.paid || ticketing.sha256_sum.is_empty() {
            return Err(Error::InvalidTicket("ticket not issued"));
        }
        if ticketing.used {
            return Err(Error::InvalidTicket("ticket already used"));
        }

        let ticket = self.issue_ticket(&ticketing).await?;
        if ticket.sha256_sum != ticketing.sha256_sum {
            tracing::error!(id = ticketing.id, "stored ticket differs from issued ticket");
            return Err(Error::UnexpectedError(anyhow!(
                "ticket {} digest does not match stored digest",
                ticketing.id
            )));
        }

        self.send_ticket(&ticketing, ticket).await
    }

    ///
    /// Redeems scanned ticket. Each ticket can be redeemed once
    ///
    /// ### Returns
    /// [Ticketing] marked as used
    ///
    /// ### Errors
    /// - [Error::Validation] when code is empty
    /// - [Error::MalformedTicket] when code cannot be decoded
    /// - [Error::InvalidTicket] when
    ///     - signature does not match
    ///     - ticket does not exist or has already been used
    ///     - ticket was issued for a different email
    ///
    async fn verify_ticket(
        &self,
        input::TicketScan { code }: input::TicketScan,
    ) -> Result<Ticketing, Error> {
        tracing::info!("verifying ticket");

        let code = code.trim();
        if code.is_empty() {
            return Err(Error::Validation(vec!["code is empty"]));
        }

        let token = TicketToken::decode(code)?;

        let signature_valid = self.signature_service.verify(
            token.signed_segment().as_bytes(),
            &token.signature,
            &self.public_key,
        );
        if !signature_valid {
            return Err(Error::InvalidTicket("signature mismatch"));
        }

        let mut ticketing = self
            .repository
            .find_unused(token.payload.ticket_id)
            .await?
            .ok_or(Error::InvalidTicket("ticket not exist or already used"))?;

        if !token.payload.matches_email(&ticketing.email) {
            return Err(Error::InvalidTicket("email mismatch"));
        }

        match self.repository.update_used(ticketing.id).await {
            Ok(()) => {
                tracing::info!(id = ticketing.id, "redeemed ticket");
                ticketing.used = true;
                Ok(ticketing)
            }
            Err(repository::Error::NoRecordUpdated) => {
                Err(Error::InvalidTicket("ticket already used"))
            }
            Err(err) => Err(Error::Database(err)),
        }
    }

    ///
    /// Marks the latest record of the participant as student
    ///
    /// ### Errors
    /// - [Error::InvalidTicket] when payment receipt does not exist
    ///
    async fn verify_is_student(
        &self,
        input::ParticipantEmail { email }: input::ParticipantEmail,
    ) -> Result<(), Error> {
        tracing::info!("verifying student");

        let email = Self::validate_email(&email)?;
        let ticketing = self.find_latest_by_email(email).await?;

        self.repository
            .update(
                ticketing.id,
                TicketingUpdate {
                    student: Some(true),
                    ..Default::default()
                },
            )
            .await?;
        tracing::info!(id = ticketing.id, "verified student");

        Ok(())
    }
}
