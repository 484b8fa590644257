//! Video textures
//!
//! A video texture wraps a looping, muted playback source. Building one is
//! treated as loading it: no first-frame signal is awaited.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for video texture creation
#[derive(Error, Debug)]
pub enum VideoError {
    #[error("Unsupported video source: {0}")]
    UnsupportedSource(String),

    #[error("Failed to create video texture: {0}")]
    CreateFailed(String),
}

/// Texture sampling filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

/// Color space of the decoded frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Srgb,
    Linear,
}

/// Playback behaviour of the media element behind the texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSettings {
    pub autoplay: bool,
    pub muted: bool,
    pub looping: bool,
    pub plays_inline: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            muted: true,
            looping: true,
            plays_inline: true,
        }
    }
}

/// Texture created from a video source
#[derive(Debug, Clone, PartialEq)]
pub struct VideoTexture {
    pub source: PathBuf,
    pub playback: PlaybackSettings,
    pub min_filter: TextureFilter,
    pub mag_filter: TextureFilter,
    pub generate_mipmaps: bool,
    pub color_space: ColorSpace,
}

impl VideoTexture {
    /// Texture with the scene defaults: nearest filtering, no mipmaps, sRGB
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            playback: PlaybackSettings::default(),
            min_filter: TextureFilter::Nearest,
            mag_filter: TextureFilter::Nearest,
            generate_mipmaps: false,
            color_space: ColorSpace::Srgb,
        }
    }
}

/// Capability that wraps a video source as a texture
pub trait VideoTextureFactory: Send + Sync {
    fn create(&self, source: &Path) -> Result<VideoTexture, VideoError>;
}

/// Builds [`VideoTexture`]s with the scene defaults
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultVideoTextureFactory;

impl DefaultVideoTextureFactory {
    pub fn new() -> Self {
        Self
    }
}

impl VideoTextureFactory for DefaultVideoTextureFactory {
    fn create(&self, source: &Path) -> Result<VideoTexture, VideoError> {
        if source.as_os_str().is_empty() {
            return Err(VideoError::UnsupportedSource("empty path".to_string()));
        }
        Ok(VideoTexture::new(source))
    }
}
