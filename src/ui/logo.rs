//! Bitmaps for the logo and graphics screens.
//!
//! 1 bit per pixel, rows packed MSB-first and padded to whole bytes,
//! the layout `embedded_graphics::image::ImageRaw<BinaryColor>` expects.

/// Logo size in pixels.
pub const LOGO_WIDTH: u32 = 128;
pub const LOGO_HEIGHT: u32 = 64;

/// Framed "PANEL CYCLE" wordmark filling the whole panel.
#[rustfmt::skip]
pub const LOGO: [u8; 1024] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0f, 0xff, 0x00, 0x7f, 0xc0, 0xe0, 0x0e, 0x3f, 0xff, 0x8e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0f, 0xff, 0x00, 0x7f, 0xc0, 0xe0, 0x0e, 0x3f, 0xff, 0x8e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0f, 0xff, 0x00, 0x7f, 0xc0, 0xe0, 0x0e, 0x3f, 0xff, 0x8e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0xe3, 0x80, 0x38, 0xfc, 0x0e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0xe3, 0x80, 0x38, 0xfc, 0x0e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0xe3, 0x80, 0x38, 0xfc, 0x0e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0xe3, 0x80, 0x38, 0xe3, 0x8e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0xe3, 0x80, 0x38, 0xe3, 0x8e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0xe3, 0x80, 0x38, 0xe3, 0x8e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0f, 0xff, 0x03, 0xff, 0xf8, 0xe0, 0x7e, 0x3f, 0xfc, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0f, 0xff, 0x03, 0xff, 0xf8, 0xe0, 0x7e, 0x3f, 0xfc, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0f, 0xff, 0x03, 0xff, 0xf8, 0xe0, 0x7e, 0x3f, 0xfc, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x03, 0x80, 0x38, 0xe0, 0x0e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x03, 0x80, 0x38, 0xe0, 0x0e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x03, 0x80, 0x38, 0xe0, 0x0e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x03, 0x80, 0x38, 0xe0, 0x0e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x03, 0x80, 0x38, 0xe0, 0x0e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x03, 0x80, 0x38, 0xe0, 0x0e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x03, 0x80, 0x38, 0xe0, 0x0e, 0x3f, 0xff, 0x8f, 0xff, 0xe0, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x03, 0x80, 0x38, 0xe0, 0x0e, 0x3f, 0xff, 0x8f, 0xff, 0xe0, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x03, 0x80, 0x38, 0xe0, 0x0e, 0x3f, 0xff, 0x8f, 0xff, 0xe0, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x01, 0xff, 0x03, 0x80, 0x38, 0x1f, 0xf0, 0x38, 0x00, 0x0f, 0xff, 0xe0, 0x00, 0x03,
    0xc0, 0x00, 0x01, 0xff, 0x03, 0x80, 0x38, 0x1f, 0xf0, 0x38, 0x00, 0x0f, 0xff, 0xe0, 0x00, 0x03,
    0xc0, 0x00, 0x01, 0xff, 0x03, 0x80, 0x38, 0x1f, 0xf0, 0x38, 0x00, 0x0f, 0xff, 0xe0, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0xe3, 0x80, 0x38, 0xe0, 0x0e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0xe3, 0x80, 0x38, 0xe0, 0x0e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0xe3, 0x80, 0x38, 0xe0, 0x0e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x00, 0x71, 0xc0, 0xe0, 0x00, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x00, 0x71, 0xc0, 0xe0, 0x00, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x00, 0x71, 0xc0, 0xe0, 0x00, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x00, 0x0e, 0x00, 0xe0, 0x00, 0x38, 0x00, 0x0f, 0xff, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x00, 0x0e, 0x00, 0xe0, 0x00, 0x38, 0x00, 0x0f, 0xff, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x00, 0x0e, 0x00, 0xe0, 0x00, 0x38, 0x00, 0x0f, 0xff, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x00, 0x0e, 0x00, 0xe0, 0x00, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x00, 0x0e, 0x00, 0xe0, 0x00, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0x00, 0x0e, 0x00, 0xe0, 0x00, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0xe0, 0x0e, 0x00, 0xe0, 0x0e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0xe0, 0x0e, 0x00, 0xe0, 0x0e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x0e, 0x00, 0xe0, 0x0e, 0x00, 0xe0, 0x0e, 0x38, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x01, 0xff, 0x00, 0x0e, 0x00, 0x1f, 0xf0, 0x3f, 0xff, 0x8f, 0xff, 0xe0, 0x00, 0x03,
    0xc0, 0x00, 0x01, 0xff, 0x00, 0x0e, 0x00, 0x1f, 0xf0, 0x3f, 0xff, 0x8f, 0xff, 0xe0, 0x00, 0x03,
    0xc0, 0x00, 0x01, 0xff, 0x00, 0x0e, 0x00, 0x1f, 0xf0, 0x3f, 0xff, 0x8f, 0xff, 0xe0, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

/// Snowman glyph size in pixels.
pub const SNOWMAN_WIDTH: u32 = 16;
pub const SNOWMAN_HEIGHT: u32 = 16;

#[rustfmt::skip]
pub const SNOWMAN: [u8; 32] = [
    0x07, 0xc0, 0x08, 0x20, 0x12, 0x90, 0x10, 0x10,
    0x0b, 0xa0, 0x07, 0xc0, 0x0c, 0x60, 0x10, 0x10,
    0x21, 0x08, 0x40, 0x04, 0x41, 0x04, 0x40, 0x04,
    0x21, 0x08, 0x10, 0x10, 0x0c, 0x60, 0x03, 0x80,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_match_dimensions() {
        assert_eq!(LOGO.len() as u32, LOGO_WIDTH / 8 * LOGO_HEIGHT);
        assert_eq!(SNOWMAN.len() as u32, SNOWMAN_WIDTH / 8 * SNOWMAN_HEIGHT);
    }

    #[test]
    fn logo_has_a_closed_frame() {
        let row = (LOGO_WIDTH / 8) as usize;
        assert!(LOGO[..row].iter().all(|&b| b == 0xff));
        assert!(LOGO[LOGO.len() - row..].iter().all(|&b| b == 0xff));
    }
}
