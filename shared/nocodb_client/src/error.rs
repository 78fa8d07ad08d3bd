use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("bad request: {message}")]
    BadRequest { message: String },

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("where value contains reserved characters: {0}")]
    InvalidWhereValue(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}
