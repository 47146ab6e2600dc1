pub type KtxifyResult<T> = Result<T, KtxifyError>;

#[derive(thiserror::Error, Debug)]
pub enum KtxifyError {
    #[error("missing input: {0}")]
    MissingInput(String),

    #[error("document error: {0}")]
    Document(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KtxifyError {
    pub fn missing_input(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }

    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
