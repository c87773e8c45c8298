use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Project not found: {name}")]
    NoSuchProject { name: String },

    #[error("Port error: {source}")]
    Port { source: anyhow::Error },
}

impl CoreError {
    pub fn port(source: anyhow::Error) -> Self {
        CoreError::Port { source }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
