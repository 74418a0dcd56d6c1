use thiserror::Error;

/// Failures inside the gallery pipeline.
///
/// None of these reach the visitor: the engine logs them and degrades to
/// "show nothing / show defaults".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("render target `{0}` not found on the page")]
    RenderTargetMissing(String),

    #[error("product not found: {0}")]
    ProductNotFound(String),

    #[error("storage error: {0}")]
    Storage(String),
}

pub type GalleryResult<T> = Result<T, GalleryError>;
