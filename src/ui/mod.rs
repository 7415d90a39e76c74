//! User interface subsystem - OLED display + physical button.
//!
//! The button is polled from a periodic timer; each debounced press
//! moves the screen cycle one step, and the main loop renders whatever
//! screen is current.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Button**: one tactile switch, active-low, level-compare debounce

pub mod buttons;
pub mod display;
pub mod input_logic;
pub mod logo;

/// Screens the demo cycles through, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScreenId {
    /// Static bitmap logo.
    #[default]
    Logo,
    /// Three sizes of the same label.
    Font,
    /// Boxes, frames, circle, disc quadrants and a glyph.
    Graphics,
}

impl ScreenId {
    pub const ALL: [ScreenId; 3] = [ScreenId::Logo, ScreenId::Font, ScreenId::Graphics];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Screen at `index`, wrapping past the last one.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// A debounced button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Press;
