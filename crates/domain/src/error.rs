#[derive(thiserror::Error, Debug)]
pub enum SyncError {
    #[error("{0} environment variable is required")]
    MissingCredential(&'static str),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<ReadError> for SyncError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => SyncError::Storage(storage),
            ReadError::Other(other) => SyncError::Other(other),
        }
    }
}

impl From<CreateError> for SyncError {
    fn from(value: CreateError) -> Self {
        match value {
            CreateError::Storage(storage) => SyncError::Storage(storage),
            CreateError::Other(other) => SyncError::Other(other),
        }
    }
}

impl From<UpdateError> for SyncError {
    fn from(value: UpdateError) -> Self {
        match value {
            UpdateError::Storage(storage) => SyncError::Storage(storage),
            UpdateError::Other(other) => SyncError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("{method} {resource} failed: {status} - {body}")]
    Status {
        method: Method,
        resource: String,
        status: u16,
        body: String,
    },
    #[error("{method} {resource} returned an unexpected response: {reason}")]
    Deserialization {
        method: Method,
        resource: String,
        reason: String,
    },
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(strum::Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sync_error_from_read_error() {
        assert!(matches!(
            SyncError::from(ReadError::Storage(StorageError::NoConnection)),
            SyncError::Storage(StorageError::NoConnection)
        ));
        assert!(matches!(
            SyncError::from(ReadError::Other("foo".into())),
            SyncError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_sync_error_from_create_and_update_error() {
        assert!(matches!(
            SyncError::from(CreateError::Storage(StorageError::NoConnection)),
            SyncError::Storage(StorageError::NoConnection)
        ));
        assert!(matches!(
            SyncError::from(UpdateError::Other("bar".into())),
            SyncError::Other(error) if error.to_string() == "bar"
        ));
    }

    #[test]
    fn test_storage_error_status_display() {
        assert_eq!(
            StorageError::Status {
                method: Method::Post,
                resource: "/routines".to_string(),
                status: 400,
                body: "invalid exercise_template_id".to_string(),
            }
            .to_string(),
            "POST /routines failed: 400 - invalid exercise_template_id"
        );
    }

    #[test]
    fn test_missing_credential_display() {
        assert_eq!(
            SyncError::MissingCredential("HEVY_API_KEY").to_string(),
            "HEVY_API_KEY environment variable is required"
        );
    }
}
