use thiserror::Error;

/// Errors surfaced by the high-level API, wrapping each subsystem's errors.
#[derive(Debug, Error)]
pub enum OgtError {
    #[error("model error: {0}")]
    Model(#[from] ogt_model::ModelError),

    #[error("transcode error: {0}")]
    Transcode(#[from] ogt_transcode::TranscodeError),

    #[error("wire error: {0}")]
    Wire(#[from] ogt_wire::WireError),
}

pub type OgtResult<T> = Result<T, OgtError>;
