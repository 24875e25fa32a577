use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

mod book;
mod review;
mod user;

pub use self::{book::*, review::*, user::*};

/// `{"message": ...}` body shared by confirmations and failures.
#[derive(Debug)]
pub struct MessageResponse {
    status: StatusCode,
    message: String,
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

impl MessageResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        let body = MessageBody {
            message: self.message,
        };
        (self.status, axum::Json(body)).into_response()
    }
}
