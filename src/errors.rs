use axum::{http::StatusCode, response::IntoResponse};
use rusqlite::Error as SqlError;
use tokio::task::JoinError;

use thiserror::Error;
use tracing::error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Sqlite Error: {0}")]
    SqliteError(#[from] SqlError),

    #[error("Io Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Blocking task Error: {0}")]
    JoinError(#[from] JoinError),

    #[error("Serde Json Error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("Invalid limit `{0}`: expected an integer")]
    InvalidLimit(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let internal = || {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Error".to_string(),
            )
        };
        let (status, message) = match self {
            Error::SqliteError(error) => {
                error!("Sqlite Error:{:#?}", error);
                internal()
            }
            Error::IoError(error) => {
                error!("Io Error:{:#?}", error);
                internal()
            }
            Error::JoinError(error) => {
                error!("Blocking task Error:{:#?}", error);
                internal()
            }
            Error::SerdeJsonError(error) => {
                error!("Serde Json Error:{:#?}", error);
                internal()
            }
            // ! unparsable limit is surfaced as a server error, not a 400
            Error::InvalidLimit(raw) => {
                error!("Invalid limit: {raw:?}");
                internal()
            }
            Error::InvalidConfig(message) => {
                error!("Invalid configuration: {message}");
                internal()
            }
        };
        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_limit_is_server_error() {
        let res = Error::InvalidLimit("abc".into()).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_sqlite_error_is_server_error() {
        let res = Error::SqliteError(SqlError::QueryReturnedNoRows).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
