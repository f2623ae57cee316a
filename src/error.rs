/// Errors produced while normalizing color arguments or decoding input images.
///
/// Everything past argument normalization is infallible: a pass that matches
/// no pixels, an all-transparent result, or a zero-size image are all normal
/// outcomes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A hex color argument did not decode into exactly three channels.
    #[error("invalid hex color code {code:?}: {source}")]
    InvalidColor {
        code: String,
        source: hex::FromHexError,
    },
    /// The input bytes could not be decoded as an image.
    #[error("no image could be decoded from the input bytes: {0}")]
    NoImage(image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
