//! SSD1306 OLED display wrapper and screen rendering.

use core::fmt::Debug;

use display_interface::WriteOnlyDataCommand;
use embedded_graphics::geometry::Angle;
use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_9X18_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, Sector};
use embedded_graphics::text::{Alignment, Text};
use embedded_hal::i2c::I2c;
use log::warn;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::size::DisplaySize;
use ssd1306::Ssd1306;

use super::logo::{LOGO, LOGO_WIDTH, SNOWMAN, SNOWMAN_WIDTH};
use super::ScreenId;
use crate::bus::delay::{Sleep, ThreadSleep};
use crate::bus::interface::I2cLink;
use crate::bus::Release;
use crate::config::DISPLAY_WIDTH;
use crate::error::{Error, Result};

/// Label drawn three times on the font screen.
pub const BANNER: &str = "panelcycle";

/// Type alias for the concrete display driver.
///
/// Generic over the I²C handle so the binary and the tests plug in
/// their own.
pub type Display<B, S = ThreadSleep> =
    Ssd1306<I2cLink<B, S>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// A frame-buffered 1-bpp drawing surface.
pub trait Surface: DrawTarget<Color = BinaryColor> {
    /// Blank the frame buffer.
    fn clear_frame(&mut self);

    /// Push the frame buffer to the panel.
    fn commit_frame(&mut self);
}

impl<DI, SIZE> Surface for Ssd1306<DI, SIZE, BufferedGraphicsMode<SIZE>>
where
    DI: WriteOnlyDataCommand,
    SIZE: DisplaySize,
{
    fn clear_frame(&mut self) {
        self.clear_buffer();
    }

    fn commit_frame(&mut self) {
        if let Err(e) = self.flush() {
            warn!("Display: flush failed: {:?}", e);
        }
    }
}

impl<B, S, SIZE, MODE> Release for Ssd1306<I2cLink<B, S>, SIZE, MODE>
where
    B: I2c + Release,
    S: Sleep,
    SIZE: DisplaySize,
{
    type Error = <B as Release>::Error;

    /// Give up the panel and close the bus underneath it.
    fn release(self) -> core::result::Result<(), Self::Error> {
        let link = Ssd1306::release(self);
        Release::release(link.release())
    }
}

/// Initialise the SSD1306, wake it and clear the screen.
pub fn init<B, S>(link: I2cLink<B, S>) -> Result<Display<B, S>>
where
    B: I2c,
    S: Sleep,
{
    let mut display = Ssd1306::new(link, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|e| Error::io("display init", e))?;
    display
        .set_display_on(true)
        .map_err(|e| Error::io("display wake", e))?;
    display.clear_frame();
    display.commit_frame();
    Ok(display)
}

/// Blank the panel immediately.
pub fn clear<D: Surface>(surface: &mut D) {
    surface.clear_frame();
    surface.commit_frame();
}

/// Draw `screen` into a fresh frame and commit it.
pub fn render<D>(surface: &mut D, screen: ScreenId)
where
    D: Surface,
    D::Error: Debug,
{
    surface.clear_frame();

    let drawn = match screen {
        ScreenId::Logo => draw_logo(surface),
        ScreenId::Font => draw_fonts(surface),
        ScreenId::Graphics => draw_graphics(surface),
    };
    if let Err(e) = drawn {
        warn!("Display: drawing {:?} failed: {:?}", screen, e);
    }

    surface.commit_frame();
}

fn text_style(font: &'static MonoFont<'static>) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::On)
        .build()
}

fn draw_logo<D: Surface>(surface: &mut D) -> core::result::Result<(), D::Error> {
    let raw = ImageRaw::<BinaryColor>::new(&LOGO, LOGO_WIDTH);
    Image::new(&raw, Point::zero()).draw(surface)
}

fn draw_fonts<D: Surface>(surface: &mut D) -> core::result::Result<(), D::Error> {
    let center = (DISPLAY_WIDTH / 2) as i32;

    for (font, baseline) in [(&FONT_6X10, 10), (&FONT_9X18_BOLD, 32), (&FONT_10X20, 58)] {
        Text::with_alignment(
            BANNER,
            Point::new(center, baseline),
            text_style(font),
            Alignment::Center,
        )
        .draw(surface)?;
    }
    Ok(())
}

fn draw_graphics<D: Surface>(surface: &mut D) -> core::result::Result<(), D::Error> {
    let fill = PrimitiveStyle::with_fill(BinaryColor::On);
    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    let center = Point::new(64, 32);

    // Corner blocks: filled top-left and bottom-right, outlined elsewhere.
    Rectangle::new(Point::new(0, 0), Size::new(30, 20))
        .into_styled(fill)
        .draw(surface)?;
    Rectangle::new(Point::new(98, 0), Size::new(30, 20))
        .into_styled(stroke)
        .draw(surface)?;
    Rectangle::new(Point::new(0, 44), Size::new(30, 20))
        .into_styled(stroke)
        .draw(surface)?;
    Rectangle::new(Point::new(98, 44), Size::new(30, 20))
        .into_styled(fill)
        .draw(surface)?;

    // Upper-right and lower-left quarters of a radius-20 disc.
    for start in [-90.0, 90.0] {
        Sector::with_center(center, 41, Angle::from_degrees(start), Angle::from_degrees(90.0))
            .into_styled(fill)
            .draw(surface)?;
    }
    Circle::with_center(center, 61)
        .into_styled(stroke)
        .draw(surface)?;

    let snowman = ImageRaw::<BinaryColor>::new(&SNOWMAN, SNOWMAN_WIDTH);
    Image::new(&snowman, Point::new(106, 2)).draw(surface)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_graphics::Pixel;

    const W: usize = 128;
    const H: usize = 64;

    struct Canvas {
        pixels: [[bool; W]; H],
        clears: u32,
        commits: u32,
    }

    impl Canvas {
        fn new() -> Self {
            Self {
                pixels: [[false; W]; H],
                clears: 0,
                commits: 0,
            }
        }

        fn on(&self, x: usize, y: usize) -> bool {
            self.pixels[y][x]
        }

        fn lit_in_rows(&self, rows: core::ops::Range<usize>) -> usize {
            self.pixels[rows].iter().flatten().filter(|&&p| p).count()
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            Size::new(W as u32, H as u32)
        }
    }

    impl DrawTarget for Canvas {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Infallible>
        where
            I: IntoIterator<Item = Pixel<BinaryColor>>,
        {
            for Pixel(p, color) in pixels {
                if (0..W as i32).contains(&p.x) && (0..H as i32).contains(&p.y) {
                    self.pixels[p.y as usize][p.x as usize] = color.is_on();
                }
            }
            Ok(())
        }
    }

    impl Surface for Canvas {
        fn clear_frame(&mut self) {
            self.pixels = [[false; W]; H];
            self.clears += 1;
        }

        fn commit_frame(&mut self) {
            self.commits += 1;
        }
    }

    #[test]
    fn each_render_clears_and_commits_once() {
        let mut canvas = Canvas::new();
        for screen in ScreenId::ALL {
            render(&mut canvas, screen);
        }
        assert_eq!(canvas.clears, 3);
        assert_eq!(canvas.commits, 3);
    }

    #[test]
    fn logo_matches_bitmap() {
        let mut canvas = Canvas::new();
        render(&mut canvas, ScreenId::Logo);
        for y in 0..H {
            for x in 0..W {
                let bit = LOGO[y * W / 8 + x / 8] & (0x80 >> (x % 8)) != 0;
                assert_eq!(canvas.on(x, y), bit, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn font_screen_has_three_labels() {
        let mut canvas = Canvas::new();
        render(&mut canvas, ScreenId::Font);
        assert!(canvas.lit_in_rows(0..13) > 0);
        assert!(canvas.lit_in_rows(16..36) > 0);
        assert!(canvas.lit_in_rows(40..62) > 0);
    }

    #[test]
    fn font_labels_are_centred() {
        let mut canvas = Canvas::new();
        render(&mut canvas, ScreenId::Font);
        let lit_cols: Vec<usize> = (0..W)
            .filter(|&x| (0..H).any(|y| canvas.on(x, y)))
            .collect();
        let left = lit_cols[0];
        let right = W - 1 - lit_cols[lit_cols.len() - 1];
        assert!(left.abs_diff(right) <= 4, "left {left}, right {right}");
    }

    #[test]
    fn graphics_screen_primitives() {
        let mut canvas = Canvas::new();
        render(&mut canvas, ScreenId::Graphics);
        // Filled box, top-left.
        assert!(canvas.on(0, 0) && canvas.on(15, 10) && canvas.on(29, 19));
        // Outlined frame, bottom-left: edge on, inside off.
        assert!(canvas.on(0, 44) && !canvas.on(15, 54));
        // Filled box, bottom-right.
        assert!(canvas.on(127, 63) && canvas.on(110, 50));
        // Circle outline crosses the horizontal axis 30 px from centre.
        assert!(canvas.on(34, 32) || canvas.on(94, 32));
        // Snowman inside the top-right frame.
        assert!((106..122).any(|x| (2..18).any(|y| canvas.on(x, y))));
    }

    #[test]
    fn logo_screen_differs_from_graphics() {
        let mut a = Canvas::new();
        let mut b = Canvas::new();
        render(&mut a, ScreenId::Logo);
        render(&mut b, ScreenId::Graphics);
        assert_ne!(a.pixels, b.pixels);
    }
}
