mod dto;
mod error;
mod mail_service;
mod smtp_mail_service;

pub use dto::{Attachment, ContentDisposition, Mail, SmtpMailServiceConfig};
pub use error::Error;
pub use mail_service::*;
pub use smtp_mail_service::*;
