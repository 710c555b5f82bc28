//! Content blocks that make up a project detail page.
//!
//! Each block is a self-contained rendering instruction; the front-end
//! dispatches on the `"type"` tag and never looks at neighbouring blocks.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A still image with its accessibility text and optional intrinsic size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
}

/// An inline video clip. Playback flags default to off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRef {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub autoplay: bool,
    #[serde(default)]
    pub muted: bool,
    #[serde(default, rename = "loop")]
    pub looping: bool,
    #[serde(default)]
    pub plays_inline: bool,
    #[serde(default)]
    pub controls: bool,
}

/// Which side of a text+image block the image sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

/// The two side-by-side media items of a `twoUp` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaPair {
    Images { images: [ImageRef; 2] },
    Videos { videos: [VideoRef; 2] },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentBlock {
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        body: String,
    },
    Spacer,
    Image {
        image: ImageRef,
    },
    TwoUp(MediaPair),
    TextImage {
        #[serde(default)]
        side: Side,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        body: String,
        image: ImageRef,
    },
    Video(VideoRef),
}

impl ContentBlock {
    /// The wire tag of this block, for logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Text { .. } => "text",
            ContentBlock::Spacer => "spacer",
            ContentBlock::Image { .. } => "image",
            ContentBlock::TwoUp(_) => "twoUp",
            ContentBlock::TextImage { .. } => "textImage",
            ContentBlock::Video(_) => "video",
        }
    }

    /// Check that every media reference points somewhere and that text
    /// blocks carry a body.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            ContentBlock::Text { body, .. } => require_body(body),
            ContentBlock::Spacer => Ok(()),
            ContentBlock::Image { image } => validate_image(image),
            ContentBlock::TwoUp(MediaPair::Images { images }) => {
                images.iter().try_for_each(validate_image)
            }
            ContentBlock::TwoUp(MediaPair::Videos { videos }) => {
                videos.iter().try_for_each(validate_video)
            }
            ContentBlock::TextImage { body, image, .. } => {
                require_body(body)?;
                validate_image(image)
            }
            ContentBlock::Video(video) => validate_video(video),
        }
    }
}

fn require_body(body: &str) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation("Text body must not be empty".into()));
    }
    Ok(())
}

fn validate_image(image: &ImageRef) -> Result<(), CoreError> {
    if image.src.trim().is_empty() {
        return Err(CoreError::Validation("Image src must not be empty".into()));
    }
    Ok(())
}

fn validate_video(video: &VideoRef) -> Result<(), CoreError> {
    if video.src.trim().is_empty() {
        return Err(CoreError::Validation("Video src must not be empty".into()));
    }
    Ok(())
}
