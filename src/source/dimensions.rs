//! The image-provider seam.
//!
//! Layout math only ever needs a source image's pixel size. Decoding,
//! cropping and compositing stay with the caller; cut rectangles are handed
//! back for them to apply.

use std::ops::Deref;

use image::GenericImageView as _;

use crate::foundation::core::ImageSize;

/// Anything that can report its pixel width and height.
pub trait ImageDimensions {
    /// Pixel size of the image.
    fn image_size(&self) -> ImageSize;
}

impl ImageDimensions for ImageSize {
    fn image_size(&self) -> ImageSize {
        *self
    }
}

impl ImageDimensions for image::DynamicImage {
    fn image_size(&self) -> ImageSize {
        let (width, height) = self.dimensions();
        ImageSize { width, height }
    }
}

impl<P, C> ImageDimensions for image::ImageBuffer<P, C>
where
    P: image::Pixel,
    C: Deref<Target = [P::Subpixel]>,
{
    fn image_size(&self) -> ImageSize {
        let (width, height) = self.dimensions();
        ImageSize { width, height }
    }
}
