//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use jsonrpsee::types::ErrorObjectOwned;
use queuewise_core::domain::DomainError;
use queuewise_core::error::AppError;

/// RPC Error Codes
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    match err {
        AppError::Validation(msg) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, msg, None::<()>)
        }
        AppError::Domain(e @ (DomainError::ServiceNotFound(_) | DomainError::TicketNotFound(_))) => {
            ErrorObjectOwned::owned(code::NOT_FOUND, e.to_string(), None::<()>)
        }
        AppError::Domain(e @ DomainError::ValidationError(_)) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, e.to_string(), None::<()>)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_4001() {
        let err = to_rpc_error(AppError::Domain(DomainError::TicketNotFound("t".into())));
        assert_eq!(err.code(), code::NOT_FOUND);
        assert!(err.message().contains("t"));
    }

    #[test]
    fn test_validation_maps_to_4000() {
        let err = to_rpc_error(AppError::Validation("bad".into()));
        assert_eq!(err.code(), code::VALIDATION_ERROR);

        let err = to_rpc_error(AppError::Domain(DomainError::ValidationError("bad".into())));
        assert_eq!(err.code(), code::VALIDATION_ERROR);
    }
}
