use super::{Error, Mail};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailService: Send + Sync {
    async fn send(&self, mail: Mail) -> Result<(), Error>;
}
