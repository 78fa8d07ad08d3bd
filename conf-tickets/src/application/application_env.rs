use anyhow::anyhow;
use std::{net::SocketAddr, path::PathBuf, time::Duration};
use tracing::level_filters::LevelFilter;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::DEBUG;
const DEFAULT_QR_CODE_SIZE: u32 = 1024;

/// Longest ticket token is QR version 15 at level H, 85 modules with quiet zone.
/// Scanners need at least 3 pixels per module
const MIN_QR_CODE_SIZE: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RecordStore {
    Postgres,
    NocoDb,
}

pub enum RecordStoreEnv {
    Postgres {
        db_connection_string: String,
    },
    NocoDb {
        base_url: String,
        api_token: String,
        ticketing_table_id: String,
    },
}

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,
    pub log_level: LevelFilter,

    pub bind_address: SocketAddr,

    pub max_http_content_len: usize,
    pub request_timeout: Duration,

    pub record_store: RecordStoreEnv,

    pub blob_directory: PathBuf,

    /// Hex encoded 32 byte seed
    pub ed25519_private_key: String,
    pub qr_code_size: u32,

    pub smtp_hostname: String,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_from: String,
    pub smtp_from_name: String,

    pub event_name: String,
    pub mail_domain: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("CONF_TICKETS_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("CONF_TICKETS_LOG_FILENAME")?;
        let log_level = Self::parse_log_level(Self::optional_env_var("CONF_TICKETS_LOG_LEVEL"))?;
        let bind_address = Self::env_var("CONF_TICKETS_BIND_ADDRESS")?.parse()?;
        let max_http_content_len = Self::env_var("CONF_TICKETS_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let request_timeout = Self::env_var("CONF_TICKETS_REQUEST_TIMEOUT")?.parse()?;
        let request_timeout = Duration::from_secs(request_timeout);
        let record_store = Self::parse_record_store()?;
        let blob_directory = Self::env_var("CONF_TICKETS_BLOB_DIRECTORY")?.into();
        let ed25519_private_key = Self::env_var("CONF_TICKETS_ED25519_PRIVATE_KEY")?;
        let qr_code_size =
            Self::parse_qr_code_size(Self::optional_env_var("CONF_TICKETS_QR_CODE_SIZE"))?;
        let smtp_hostname = Self::env_var("CONF_TICKETS_SMTP_HOSTNAME")?;
        let smtp_port = Self::env_var("CONF_TICKETS_SMTP_PORT")?.parse()?;
        let smtp_username = Self::optional_env_var("CONF_TICKETS_SMTP_USERNAME");
        let smtp_password = Self::optional_env_var("CONF_TICKETS_SMTP_PASSWORD");
        if smtp_username.is_some() != smtp_password.is_some() {
            return Err(anyhow!(
                "CONF_TICKETS_SMTP_USERNAME and CONF_TICKETS_SMTP_PASSWORD need to be set together"
            ));
        }
        let smtp_from = Self::env_var("CONF_TICKETS_SMTP_FROM")?;
        let smtp_from_name = Self::env_var("CONF_TICKETS_SMTP_FROM_NAME")?;
        let event_name = Self::env_var("CONF_TICKETS_EVENT_NAME")?;
        let mail_domain = Self::env_var("CONF_TICKETS_MAIL_DOMAIN")?;

        Ok(Self {
            log_directory,
            log_filename,
            log_level,
            bind_address,
            max_http_content_len,
            request_timeout,
            record_store,
            blob_directory,
            ed25519_private_key,
            qr_code_size,
            smtp_hostname,
            smtp_port,
            smtp_username,
            smtp_password,
            smtp_from,
            smtp_from_name,
            event_name,
            mail_domain,
        })
    }

    fn parse_record_store() -> anyhow::Result<RecordStoreEnv> {
        let record_store = Self::env_var("CONF_TICKETS_RECORD_STORE")?;
        let record_store = record_store
            .parse::<RecordStore>()
            .map_err(|_| anyhow!("CONF_TICKETS_RECORD_STORE must be postgres or nocodb"))?;

        let record_store = match record_store {
            RecordStore::Postgres => RecordStoreEnv::Postgres {
                db_connection_string: Self::env_var("CONF_TICKETS_DB_CONNECTION_STRING")?,
            },
            RecordStore::NocoDb => RecordStoreEnv::NocoDb {
                base_url: Self::env_var("CONF_TICKETS_NOCODB_BASE_URL")?,
                api_token: Self::env_var("CONF_TICKETS_NOCODB_API_TOKEN")?,
                ticketing_table_id: Self::env_var("CONF_TICKETS_NOCODB_TICKETING_TABLE_ID")?,
            },
        };

        Ok(record_store)
    }

    fn parse_log_level(level: Option<String>) -> anyhow::Result<LevelFilter> {
        match level {
            Some(level) => level
                .parse()
                .map_err(|_| anyhow!("CONF_TICKETS_LOG_LEVEL {level} is not a valid level")),
            None => Ok(DEFAULT_LOG_LEVEL),
        }
    }

    fn parse_qr_code_size(size: Option<String>) -> anyhow::Result<u32> {
        let size = match size {
            Some(size) => size.parse()?,
            None => DEFAULT_QR_CODE_SIZE,
        };
        if size < MIN_QR_CODE_SIZE {
            return Err(anyhow!(
                "CONF_TICKETS_QR_CODE_SIZE must be at least {MIN_QR_CODE_SIZE}"
            ));
        }

        Ok(size)
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn optional_env_var(name: &'static str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}
