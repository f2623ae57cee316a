use image::DynamicImage;

use crate::error::{Error, Result};

/// An image argument as callers supply it: an already-decoded handle, or raw
/// encoded bytes in any format the `image` crate can sniff.
#[derive(Debug, Clone)]
pub enum ImageInput {
    Decoded(DynamicImage),
    Encoded(Vec<u8>),
}

impl ImageInput {
    /// Resolves to a decoded image, decoding encoded bytes if needed.
    ///
    /// Bytes that do not decode (an empty buffer included) fail with
    /// [`Error::NoImage`].
    pub fn decode(self) -> Result<DynamicImage> {
        match self {
            ImageInput::Decoded(image) => Ok(image),
            ImageInput::Encoded(bytes) => image::load_from_memory(&bytes).map_err(Error::NoImage),
        }
    }
}

impl From<DynamicImage> for ImageInput {
    fn from(image: DynamicImage) -> Self {
        ImageInput::Decoded(image)
    }
}

impl From<image::RgbaImage> for ImageInput {
    fn from(buffer: image::RgbaImage) -> Self {
        ImageInput::Decoded(DynamicImage::ImageRgba8(buffer))
    }
}

impl From<Vec<u8>> for ImageInput {
    fn from(bytes: Vec<u8>) -> Self {
        ImageInput::Encoded(bytes)
    }
}

impl From<&[u8]> for ImageInput {
    fn from(bytes: &[u8]) -> Self {
        ImageInput::Encoded(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};

    use super::*;
    use crate::error::Error;

    #[test]
    fn decoded_handles_pass_through() {
        let buffer = RgbaImage::from_pixel(3, 2, Rgba([7, 8, 9, 255]));
        let image = ImageInput::from(buffer).decode().expect("pass-through");
        assert_eq!((image.width(), image.height()), (3, 2));
    }

    #[test]
    fn encoded_png_bytes_decode() {
        let buffer = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        buffer
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("png encoding");

        let image = ImageInput::from(bytes).decode().expect("png decoding");
        assert_eq!((image.width(), image.height()), (4, 4));
        assert_eq!(image.to_rgba8().get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn empty_bytes_are_no_image() {
        let err = ImageInput::from(Vec::new()).decode().expect_err("empty buffer");
        assert!(matches!(err, Error::NoImage(_)));
    }

    #[test]
    fn garbage_bytes_are_no_image() {
        let err = ImageInput::from(&b"definitely not an image"[..])
            .decode()
            .expect_err("garbage buffer");
        assert!(matches!(err, Error::NoImage(_)));
    }
}
