//! Random theme colors. Values are expressed in CSS `rgb()` notation so the
//! frontend can apply them directly.

use rand::Rng;
use serde::{Deserialize, Serialize};

const CHANNEL_SPAN: f64 = 256.0;

/// Uniform source of values in `[0, 1)`, one draw per channel.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

/// Production source backed by a [`rand`] generator.
pub struct RngUnitSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngUnitSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> UnitSource for RngUnitSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random()
    }
}

/// An RGB color with 8-bit channels. No alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Draws the three channels independently, in red, green, blue order.
    pub fn random(source: &mut dyn UnitSource) -> Self {
        Self {
            red: random_channel(source),
            green: random_channel(source),
            blue: random_channel(source),
        }
    }

    /// Returns the CSS form, e.g. `rgb(12,0,255)`.
    #[inline]
    pub fn to_css(&self) -> String {
        format!("rgb({},{},{})", self.red, self.green, self.blue)
    }
}

fn random_channel(source: &mut dyn UnitSource) -> u8 {
    (source.next_unit() * CHANNEL_SPAN).floor() as u8
}
