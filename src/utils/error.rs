use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::{
    error::Error as StdError,
    fmt::{self},
    io,
};

#[derive(Debug)]
pub enum Error {
    Validation(String),
    Unauthorized,
    Corrupt(String),
    Storage(io::Error),
    Unexpected(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "validation error: {msg}"),
            Error::Unauthorized => write!(f, "unauthorized"),
            Error::Corrupt(msg) => write!(f, "config corrupt: {msg}"),
            Error::Storage(e) => write!(f, "storage error: {e}"),
            Error::Unexpected(msg) => write!(f, "unexpected error: {msg}"),
        }
    }
}

impl StdError for Error {}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Storage(value)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::Corrupt(_) | Error::Storage(_) | Error::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Corruption and storage details stay in the log; the wire gets a
        // generic body so filesystem paths never leak to clients.
        let (code, message) = match self {
            Error::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            Error::Unauthorized => ("UNAUTHORIZED", self.to_string()),
            Error::Corrupt(_) => {
                tracing::error!("{self}");
                ("CONFIG_ERROR", "internal configuration error".into())
            }
            Error::Storage(_) => {
                tracing::error!("{self}");
                ("STORAGE_ERROR", "internal configuration error".into())
            }
            Error::Unexpected(_) => {
                tracing::error!("{self}");
                ("UNEXPECTED", "internal server error".into())
            }
        };

        let body = ErrorBody { code, message };
        HttpResponse::build(self.status_code()).json(body)
    }
}
