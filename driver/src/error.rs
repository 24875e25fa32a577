use error_stack::Report;
use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Invalid environment configuration")]
    Env,
    #[error("Invalid catalog seed")]
    Seed,
}

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, reqwest::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let timed_out = error.is_timeout();
            let report = Report::new(error).change_context(KernelError::Upstream);
            if timed_out {
                report.attach_printable("Remote catalog timed out")
            } else {
                report
            }
        })
    }
}

impl<T> ConvertError for error_stack::Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|report| report.change_context(KernelError::Internal))
    }
}
