use super::TicketingServiceConfig;
use crate::{
    repository::Ticketing,
    service::mail_service::{Attachment, ContentDisposition, Mail},
};

const QR_CODE_ATTACHMENT_NAME: &str = "qrcode_ticket.png";
const QR_CODE_CONTENT_TYPE: &str = "image/png";

///
/// Mail with the ticket QR code shown inline.
/// Message-ID and Content-ID depend only on the ticket, so every resend
/// of the same ticket is the same logical message
///
pub fn create_ticket_mail(
    config: &TicketingServiceConfig,
    ticketing: &Ticketing,
    qr_code_png: Vec<u8>,
    sha256_sum: &str,
) -> Mail {
    let event_name = &config.event_name;
    let content_id = format!("ticket-{}", ticketing.id);
    let digest_prefix = sha256_sum.get(..16).unwrap_or(sha256_sum);
    let message_id = format!(
        "ticket-{}.{digest_prefix}@{}",
        ticketing.id, config.mail_domain
    );

    let plain_text_body = format!(
        "Hi! This is the mail you have been waiting for.

Your payment has been confirmed. The QR code attached to this mail is your ticket to {event_name}.
If you received a student discount, remember to bring your student card.
The committee will verify it at the venue.

See you at {event_name}!

This mail is intended only for you. If you did not register for {event_name}, please ignore it."
    );

    let html_body = format!(
        r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="UTF-8" />
        <meta content="width=device-width,initial-scale=1" name="viewport" />
        <title>{event_name}: your ticket</title>
    </head>
    <body>
        <h1>Hi! This is the mail you have been waiting for.</h1>
        <p>
            Your payment has been confirmed. The QR code below is your ticket to {event_name}.
            If you received a <i>student discount</i>, remember to bring your student card.
            The committee will verify it at the venue.
        </p>
        <p><b>See you at {event_name}!</b></p>
        <p><img src="cid:{content_id}" alt="ticket" style="width: 100%; max-width: 720px;"></p>
        <p>
            <small>
                This mail is intended only for you. If you did not register for {event_name}, please ignore it.
            </small>
        </p>
    </body>
</html>
"#
    );

    Mail {
        recipient_name: String::new(),
        recipient_email: ticketing.email.clone(),
        subject: format!("{event_name}: your ticket"),
        plain_text_body,
        html_body,
        attachments: vec![Attachment {
            name: QR_CODE_ATTACHMENT_NAME.to_string(),
            content_type: QR_CODE_CONTENT_TYPE.to_string(),
            disposition: ContentDisposition::Inline,
            content_id,
            payload: qr_code_png,
        }],
        message_id: Some(message_id),
    }
}
