//! Image output for the finished texture buffer.
//!
//! The tracer hands over a packed RGBA byte buffer; this module is the
//! display surface that consumes it. It interprets the buffer exactly as a
//! texture upload would — width * height pixels, four bytes each, row pitch
//! `width * 4`, row 0 first — and writes it out as a PNG file.

use image::RgbaImage;
use log::{info, warn};

/// Save a packed RGBA texture buffer as a PNG file.
///
/// I/O failures are logged rather than propagated; the hand-off from the
/// tracer is fire-and-forget, like presenting to a screen.
pub fn save_buffer_as_png(buffer: &[u8], width: u32, height: u32, output_path: &str) {
    let image = match RgbaImage::from_raw(width, height, buffer.to_vec()) {
        Some(image) => image,
        None => {
            warn!(
                "Buffer of {} bytes does not fill a {}x{} RGBA image",
                buffer.len(),
                width,
                height
            );
            return;
        }
    };

    match image.save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}
