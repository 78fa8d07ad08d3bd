use super::{ApplicationEnv, RecordStoreEnv};
use crate::{
    repository::{TicketingRepository, TicketingRepositoryNocoDb, TicketingRepositoryPostgres},
    service::{
        blob_storage_service::{FilesystemBlobStorageService, FilesystemBlobStorageServiceConfig},
        mail_service::{SmtpMailService, SmtpMailServiceConfig},
        qr_code_service::{QrCodeServiceConfig, QrCodeServiceImpl},
        signature_service::SignatureService,
        ticketing_service::{TicketingService, TicketingServiceConfig, TicketingServiceImpl},
    },
};
use axum::extract::FromRef;
use nocodb_client::{NocoDbClient, NocoDbClientConfig};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub ticketing_service: Arc<dyn TicketingService>,
}

pub struct ApplicationStateToClose {
    pub db_pool: Option<PgPool>,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("creating repositories");
    let (ticketing_repository, db_pool) = create_ticketing_repository(env).await?;

    tracing::info!("creating services");
    let config = FilesystemBlobStorageServiceConfig {
        directory: env.blob_directory.clone(),
    };
    let blob_storage_service = FilesystemBlobStorageService::new(config).await?;
    let blob_storage_service = Arc::new(blob_storage_service);

    let config = SmtpMailServiceConfig {
        hostname: env.smtp_hostname.clone(),
        port: env.smtp_port,
        username: env.smtp_username.clone(),
        password: env.smtp_password.clone(),
        from: env.smtp_from.clone(),
        from_name: env.smtp_from_name.clone(),
    };
    let mail_service = SmtpMailService::new(config)?;
    let mail_service = Arc::new(mail_service);

    let config = QrCodeServiceConfig {
        size: env.qr_code_size,
    };
    let qr_code_service = QrCodeServiceImpl::new(config);
    let qr_code_service = Arc::new(qr_code_service);

    let signature_service = SignatureService::from_hex_seed(&env.ed25519_private_key)?;

    let config = TicketingServiceConfig {
        event_name: env.event_name.clone(),
        mail_domain: env.mail_domain.clone(),
    };
    let ticketing_service = TicketingServiceImpl::new(
        config,
        ticketing_repository,
        blob_storage_service,
        mail_service,
        qr_code_service,
        signature_service,
    );
    let ticketing_service = Arc::new(ticketing_service);

    Ok((
        ApplicationState { ticketing_service },
        ApplicationStateToClose { db_pool },
    ))
}

async fn create_ticketing_repository(
    env: &ApplicationEnv,
) -> anyhow::Result<(Arc<dyn TicketingRepository>, Option<PgPool>)> {
    match &env.record_store {
        RecordStoreEnv::Postgres {
            db_connection_string,
        } => {
            tracing::info!("connecting to database");
            let db_pool = PgPoolOptions::new()
                .acquire_timeout(env.request_timeout)
                .connect(db_connection_string)
                .await?;

            let repository = TicketingRepositoryPostgres::new(db_pool.clone()).await?;

            Ok((Arc::new(repository), Some(db_pool)))
        }
        RecordStoreEnv::NocoDb {
            base_url,
            api_token,
            ticketing_table_id,
        } => {
            tracing::info!(base_url = %base_url, "connecting to nocodb");
            let config = NocoDbClientConfig {
                base_url: base_url.clone(),
                api_token: api_token.clone(),
                timeout: env.request_timeout,
            };
            let client = NocoDbClient::new(config)?;

            let repository = TicketingRepositoryNocoDb::new(client, ticketing_table_id.clone());

            Ok((Arc::new(repository), None))
        }
    }
}
