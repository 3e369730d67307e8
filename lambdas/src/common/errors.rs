use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use lambda_http::{Error as LambdaError, Response};
use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request finished with status {}", .0.status())]
    HttpError(Response<String>),
    #[error(transparent)]
    LambdaError(#[from] LambdaError),
}

impl From<lambda_http::http::Error> for Error {
    fn from(err: lambda_http::http::Error) -> Self {
        Error::LambdaError(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::LambdaError(Box::new(err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::LambdaError(Box::new(err))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No connection or credentials could be obtained for the store.
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    OperationFailed(String),
}

impl StoreError {
    pub fn status(&self) -> u16 {
        match self {
            StoreError::Unavailable(_) => 503,
            StoreError::OperationFailed(_) => 500,
        }
    }
}

impl<E, R> From<SdkError<E, R>> for StoreError
where
    E: std::error::Error + 'static,
    R: Debug,
{
    fn from(err: SdkError<E, R>) -> Self {
        let message = DisplayErrorContext(&err).to_string();
        match err {
            SdkError::DispatchFailure(_) => StoreError::Unavailable(message),
            _ => StoreError::OperationFailed(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::config::http::HttpResponse;
    use aws_sdk_dynamodb::operation::scan::ScanError;
    use aws_sdk_dynamodb::types::error::ResourceNotFoundException;
    use aws_smithy_runtime_api::client::result::ConnectorError;
    use aws_smithy_runtime_api::http::StatusCode;
    use aws_smithy_types::body::SdkBody;

    #[test]
    fn dispatch_failure_is_unavailable() {
        let err = SdkError::<ScanError, HttpResponse>::dispatch_failure(ConnectorError::io(
            "connection refused".into(),
        ));
        let err = StoreError::from(err);
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert_eq!(err.status(), 503);
    }

    #[test]
    fn timeout_is_operation_failure() {
        let err = StoreError::from(SdkError::<ScanError, HttpResponse>::timeout_error(
            "scan timed out",
        ));
        assert!(matches!(err, StoreError::OperationFailed(_)));
        assert_eq!(err.status(), 500);
        assert!(err.to_string().contains("scan timed out"));
    }

    #[test]
    fn service_error_is_operation_failure() {
        let source = ScanError::ResourceNotFoundException(
            ResourceNotFoundException::builder()
                .message("Requested resource not found")
                .build(),
        );
        let raw = HttpResponse::new(StatusCode::try_from(400u16).unwrap(), SdkBody::empty());
        let err = StoreError::from(SdkError::service_error(source, raw));
        assert_eq!(err.status(), 500);
        assert!(err.to_string().contains("Requested resource not found"));
    }

    #[test]
    fn store_error_status() {
        assert_eq!(StoreError::Unavailable("down".into()).status(), 503);
        assert_eq!(StoreError::OperationFailed("boom".into()).status(), 500);
    }

    #[test]
    fn store_error_displays_bare_message() {
        let err = StoreError::OperationFailed("ResourceNotFoundException".into());
        assert_eq!(err.to_string(), "ResourceNotFoundException");
    }
}
