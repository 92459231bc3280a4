/// Typed failures raised by a storage backend
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Username already taken: {0}")]
    UsernameTaken(String),
}
