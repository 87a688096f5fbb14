use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Index out of range: index {index} is not below length {count}")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Failed to write greeting: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
}
