use std::io;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Corrupt(String),
    UnsupportedSchema(u32),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Corrupt(detail) => write!(f, "Corrupt store: {}", detail),
            StoreError::UnsupportedSchema(version) => {
                write!(f, "Unsupported store schema: {}", version)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

/// Durable key-value store capability. One record per key; `put`
/// overwrites wholesale, last writer wins.
pub trait DurableStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>>;
    fn put(&mut self, key: &str, value: serde_json::Value) -> Result<()>;
}
