use std::io;

/// Everything that can go wrong at runtime: codec I/O and recipe parsing.
/// Contract violations (out-of-bounds access, mismatched operand sizes,
/// malformed kernels built in code) are panics, not `ImgError`s.
#[derive(Debug, thiserror::Error)]
pub enum ImgError {
    #[error("{path} could not be accessed: {source}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{source_name} is not recognized as a PNG file")]
    NotPng { source_name: String },

    #[error("error during PNG decoding: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("error during encoding: {0}")]
    Encode(String),

    #[error("recipe parsing failed: {0}")]
    Parse(String),
}

impl ImgError {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        ImgError::Parse(msg.into())
    }
}

impl From<png::EncodingError> for ImgError {
    fn from(err: png::EncodingError) -> Self {
        ImgError::Encode(err.to_string())
    }
}
