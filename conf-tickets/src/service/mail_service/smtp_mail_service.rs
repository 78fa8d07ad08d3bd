use super::{Attachment, ContentDisposition, Error, Mail, MailService, SmtpMailServiceConfig};
use axum::async_trait;
use lettre::{
    message::{
        header::{self, ContentType},
        Mailbox, MultiPart, SinglePart,
    },
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

pub struct SmtpMailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailService {
    pub fn new(config: SmtpMailServiceConfig) -> Result<Self, Error> {
        let from = Mailbox::new(Some(config.from_name), config.from.parse()?);

        let transport = match (config.username, config.password) {
            (Some(username), Some(password)) => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.hostname)?
                    .port(config.port)
                    .credentials(Credentials::new(username, password))
                    .build()
            }
            _ => {
                tracing::warn!(hostname = %config.hostname, "smtp credentials not set");
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.hostname)
                    .port(config.port)
                    .build()
            }
        };

        Ok(Self { transport, from })
    }

    ///
    /// Message layout:
    /// ```text
    /// multipart/mixed
    ///     multipart/related
    ///         multipart/alternative
    ///             text/plain
    ///             text/html
    ///         inline attachments
    ///     attachments
    /// ```
    ///
    fn build_message(&self, mail: Mail) -> Result<Message, Error> {
        let recipient_name = match mail.recipient_name.is_empty() {
            true => None,
            false => Some(mail.recipient_name),
        };
        let to = Mailbox::new(recipient_name, mail.recipient_email.parse()?);

        let alternative = MultiPart::alternative_plain_html(mail.plain_text_body, mail.html_body);
        let mut related = MultiPart::related().multipart(alternative);
        let mut attachments = Vec::new();

        for attachment in mail.attachments {
            match attachment.disposition {
                ContentDisposition::Inline => {
                    related = related.singlepart(Self::build_part(attachment)?);
                }
                ContentDisposition::Attachment => {
                    attachments.push(Self::build_part(attachment)?);
                }
            }
        }

        let mut mixed = MultiPart::mixed().multipart(related);
        for attachment in attachments {
            mixed = mixed.singlepart(attachment);
        }

        let message_id = mail.message_id.map(|message_id| format!("<{message_id}>"));
        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(mail.subject)
            .message_id(message_id)
            .multipart(mixed)?;

        Ok(message)
    }

    fn build_part(attachment: Attachment) -> Result<SinglePart, Error> {
        let content_type = ContentType::parse(&attachment.content_type)?;

        let part = match attachment.disposition {
            ContentDisposition::Inline => SinglePart::builder()
                .header(content_type)
                .header(header::ContentDisposition::inline_with_name(&attachment.name))
                .header(header::ContentId::from(format!(
                    "<{}>",
                    attachment.content_id
                ))),
            ContentDisposition::Attachment => SinglePart::builder()
                .header(content_type)
                .header(header::ContentDisposition::attachment(&attachment.name)),
        };

        Ok(part.body(attachment.payload))
    }
}

#[async_trait]
impl MailService for SmtpMailService {
    async fn send(&self, mail: Mail) -> Result<(), Error> {
        let message = self.build_message(mail)?;

        let response = self.transport.send(message).await?;
        tracing::debug!(code = %response.code(), "mail accepted by smtp server");

        Ok(())
    }
}
