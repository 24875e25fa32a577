use crate::response::MessageResponse;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_stack::Report;
use kernel::KernelError;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl ErrorStatus {
    fn status(&self) -> StatusCode {
        match self.0.current_context() {
            KernelError::Validation => StatusCode::BAD_REQUEST,
            KernelError::Unauthorized => StatusCode::UNAUTHORIZED,
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::Conflict => StatusCode::CONFLICT,
            KernelError::Upstream => StatusCode::BAD_GATEWAY,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Client errors carry the most recent attached description; server
    // errors only expose the context so no internals leak.
    fn message(&self, status: StatusCode) -> String {
        let context = self.0.current_context();
        if status.is_server_error() {
            return context.to_string();
        }
        self.0
            .frames()
            .find_map(|frame| {
                frame
                    .downcast_ref::<String>()
                    .cloned()
                    .or_else(|| frame.downcast_ref::<&'static str>().map(|s| s.to_string()))
            })
            .unwrap_or_else(|| context.to_string())
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        } else {
            tracing::debug!("{:?}", self.0);
        }
        let message = self.message(status);
        MessageResponse::new(status, message).into_response()
    }
}

#[cfg(test)]
mod test {
    use crate::error::ErrorStatus;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;
    use kernel::KernelError;

    #[test]
    fn every_context_has_its_status() {
        let cases = [
            (KernelError::Validation, StatusCode::BAD_REQUEST),
            (KernelError::Unauthorized, StatusCode::UNAUTHORIZED),
            (KernelError::NotFound, StatusCode::NOT_FOUND),
            (KernelError::Conflict, StatusCode::CONFLICT),
            (KernelError::Upstream, StatusCode::BAD_GATEWAY),
            (KernelError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (context, status) in cases {
            let response = ErrorStatus::from(Report::new(context)).into_response();
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn client_errors_use_attached_description() {
        let error = ErrorStatus::from(
            Report::new(KernelError::NotFound).attach_printable(format!("Book {} not found", 42)),
        );
        assert_eq!(error.message(StatusCode::NOT_FOUND), "Book 42 not found");

        let error = ErrorStatus::from(
            Report::new(KernelError::Internal).attach_printable("seed path /secret is unreadable"),
        );
        assert_eq!(
            error.message(StatusCode::INTERNAL_SERVER_ERROR),
            "Internal kernel error"
        );
    }
}
