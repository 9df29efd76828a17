use image::{DynamicImage, ImageFormat};
use std::fmt::{Debug, Formatter};
use ttfont_shared::Result;

/// The atlas image embedded in a font container: the raw container bytes plus whatever frames the
/// image decoder managed to produce from them.
#[derive(Clone, PartialEq)]
pub struct FontImage {
    /// Raw bytes of the embedded image container
    pub data: Vec<u8>,
    /// Decoded frames, empty when the payload was not decoded
    pub frames: Vec<DynamicImage>,
}

impl FontImage {
    /// Image that only carries the raw payload
    pub fn raw(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            frames: Vec::new(),
        }
    }

    pub fn first_frame(&self) -> Option<&DynamicImage> {
        self.frames.first()
    }
}

impl Debug for FontImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let frames: Vec<_> = self
            .frames
            .iter()
            .map(|frame| (frame.width(), frame.height()))
            .collect();

        f.debug_struct("FontImage")
            .field("data_len", &self.data.len())
            .field("frames", &frames)
            .finish()
    }
}

/// Decodes the image payload trailing a font container. Font decoders hand over the payload bytes
/// as-is and never look inside them.
pub trait ImageContainerDecoder {
    fn decode(&self, data: &[u8]) -> Result<FontImage>;
}

impl<F> ImageContainerDecoder for F
where
    F: Fn(&[u8]) -> Result<FontImage>,
{
    fn decode(&self, data: &[u8]) -> Result<FontImage> {
        self(data)
    }
}

/// Keeps the payload bytes without decoding any frames. Never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawContainer;

impl ImageContainerDecoder for RawContainer {
    fn decode(&self, data: &[u8]) -> Result<FontImage> {
        Ok(FontImage::raw(data))
    }
}

/// Decodes the payload as a DirectDraw Surface, which is what the games embed
#[derive(Clone, Copy, Debug, Default)]
pub struct DdsContainer;

impl ImageContainerDecoder for DdsContainer {
    fn decode(&self, data: &[u8]) -> Result<FontImage> {
        let frame = image::load_from_memory_with_format(data, ImageFormat::Dds)?;

        Ok(FontImage {
            data: data.to_vec(),
            frames: vec![frame],
        })
    }
}
