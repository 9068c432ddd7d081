//! Response envelope of the user-management API.
//!
//! Every response has the shape
//! `{ "status": "success" | "error", "message": ..., "data"?: ..., "errors"?: [...] }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Serialize)]
struct Envelope<T> {
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

/// Successful envelope response.
#[derive(Debug)]
pub struct ApiSuccess<T> {
    status: StatusCode,
    message: String,
    data: Option<T>,
}

impl ApiSuccess<()> {
    /// 200 response without `data`.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> ApiSuccess<T> {
    /// 200 response with `data` and the default "Success" message.
    pub fn data(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    /// 201 response with `data`.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        let body = Envelope {
            status: "success",
            message: self.message,
            data: self.data,
            errors: None,
        };

        (self.status, Json(body)).into_response()
    }
}

/// [`AppError`] rendered as an error envelope.
#[derive(Debug)]
pub struct EnvelopeError(pub AppError);

impl From<AppError> for EnvelopeError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl IntoResponse for EnvelopeError {
    fn into_response(self) -> Response {
        let body: Envelope<()> = Envelope {
            status: "error",
            message: self.0.message().to_owned(),
            data: None,
            errors: self.0.field_errors(),
        };

        (self.0.status(), Json(body)).into_response()
    }
}
