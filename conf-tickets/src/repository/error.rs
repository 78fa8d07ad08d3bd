#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no record inserted")]
    NoRecordInserted,

    #[error("no record updated")]
    NoRecordUpdated,

    #[error("postgres error: {0}")]
    Postgres(#[from] sqlx::Error),

    #[error("nocodb error: {0}")]
    NocoDb(#[from] nocodb_client::Error),
}
