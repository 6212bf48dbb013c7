//! Committed-frame capture: RGBA pixels in, PNG data URL out.
//!
//! The engine never renders. The viewer hands over the framebuffer of the
//! frame it just committed, and this module packages it for the order
//! record. Capture runs synchronously on that buffer; callers must invoke
//! it after render, never concurrently with a configuration change.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Errors from frame capture.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SnapshotError {
    #[error("empty frame: width and height must be non-zero")]
    EmptyFrame,

    #[error("frame is {got} bytes, expected {expected} for {width}x{height} RGBA")]
    FrameSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        got: usize,
    },

    #[error("PNG encoding failed: {reason}")]
    EncodeFailed { reason: String },
}

/// Encode an RGBA8 frame as a `data:image/png;base64,…` URL, the format
/// the checkout flow persists.
pub fn encode_png_data_url(width: u32, height: u32, pixels: &[u8]) -> Result<String, SnapshotError> {
    let png = encode_png(width, height, pixels)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

/// Encode an RGBA8 frame as PNG bytes.
pub fn encode_png(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>, SnapshotError> {
    if width == 0 || height == 0 {
        return Err(SnapshotError::EmptyFrame);
    }
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(SnapshotError::FrameSizeMismatch {
            width,
            height,
            expected,
            got: pixels.len(),
        });
    }

    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder
        .write_header()
        .map_err(|e| SnapshotError::EncodeFailed {
            reason: e.to_string(),
        })?;
    writer
        .write_image_data(pixels)
        .map_err(|e| SnapshotError::EncodeFailed {
            reason: e.to_string(),
        })?;
    writer.finish().map_err(|e| SnapshotError::EncodeFailed {
        reason: e.to_string(),
    })?;
    Ok(out)
}
