mod attachment;
mod mail;
mod smtp_mail_service_config;

pub use attachment::{Attachment, ContentDisposition};
pub use mail::Mail;
pub use smtp_mail_service_config::SmtpMailServiceConfig;
