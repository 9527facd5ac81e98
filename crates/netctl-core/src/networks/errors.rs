use crate::errors::NetctlError;

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("network {name} not found")]
    NotFound { name: String },

    #[error("network {name} is ambiguous ({matches} matches found based on ID prefix)")]
    Ambiguous { name: String, matches: usize },

    #[error("error while removing network {name}: network has active endpoints ({endpoints})")]
    InUse { name: String, endpoints: String },

    #[error("invalid network record at {path}: {message}")]
    InvalidRecord { path: String, message: String },

    #[error("network store operation failed: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    /// Failure reported by a gateway implementation that has no finer variant.
    #[error("{message}")]
    Gateway { message: String },
}

impl NetctlError for NetworkError {
    fn error_code(&self) -> &'static str {
        match self {
            NetworkError::NotFound { .. } => "NETWORK_NOT_FOUND",
            NetworkError::Ambiguous { .. } => "NETWORK_AMBIGUOUS",
            NetworkError::InUse { .. } => "NETWORK_IN_USE",
            NetworkError::InvalidRecord { .. } => "NETWORK_INVALID_RECORD",
            NetworkError::IoError { .. } => "NETWORK_IO_ERROR",
            NetworkError::Gateway { .. } => "NETWORK_GATEWAY_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            NetworkError::NotFound { .. }
                | NetworkError::Ambiguous { .. }
                | NetworkError::InUse { .. }
        )
    }
}

/// Identifier and cause of one failed item in a batch.
#[derive(Debug)]
pub struct FailedOperation {
    pub name: String,
    pub error: NetworkError,
}

/// Aggregated failure of a batch operation.
///
/// Holds every per-identifier failure in the order it occurred. Displays as
/// the newline-joined cause messages.
#[derive(Debug, thiserror::Error)]
#[error("{}", join_messages(.failures))]
pub struct BatchError {
    pub failures: Vec<FailedOperation>,
}

fn join_messages(failures: &[FailedOperation]) -> String {
    failures
        .iter()
        .map(|f| f.error.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

impl BatchError {
    /// `Ok(())` when nothing failed, otherwise the aggregated error.
    pub fn from_failures(failures: Vec<FailedOperation>) -> Result<(), BatchError> {
        if failures.is_empty() {
            Ok(())
        } else {
            Err(BatchError { failures })
        }
    }

    pub fn failed_names(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.name.as_str()).collect()
    }
}

impl NetctlError for BatchError {
    fn error_code(&self) -> &'static str {
        "NETWORK_BATCH_FAILED"
    }

    fn is_user_error(&self) -> bool {
        self.failures.iter().all(|f| f.error.is_user_error())
    }
}
