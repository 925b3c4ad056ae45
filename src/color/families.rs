//! Color families and their fixed palettes
//!
//! Eight families with hand-picked literal palettes and two proportion
//! tables: one for the canvas edge, one for the center. The sampler
//! interpolates between the tables, so greens and oranges only appear in
//! painterly central regions while white (no paint) dominates the edges.

use serde::{Deserialize, Serialize};

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Rgb {
    /// Construct from components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Warm off-white paper color behind all blocks
pub const BACKGROUND: Rgb = Rgb::new(248, 245, 239);

/// Stroke color for the composition lines
pub const LINE_COLOR: Rgb = Rgb::new(0, 0, 0);

/// Color family of a painted block
///
/// The variant order is load-bearing: the weighted sampling walk visits
/// families in exactly this order, so reordering variants changes which
/// family a given draw selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorFamily {
    /// Reserved "no paint" family; blocks sampled white are skipped
    White,
    /// Cadmium reds
    Red,
    /// Bright yellows
    Yellow,
    /// Primary blues
    Blue,
    /// Near-blacks
    Black,
    /// Cyan-leaning light blues
    LightBlue,
    /// Greens, center-only
    Green,
    /// Oranges, center-only
    Orange,
}

impl ColorFamily {
    /// All families in sampling walk order
    pub const ALL: [Self; 8] = [
        Self::White,
        Self::Red,
        Self::Yellow,
        Self::Blue,
        Self::Black,
        Self::LightBlue,
        Self::Green,
        Self::Orange,
    ];

    /// Proportion weight at painterliness 0 (canvas edge)
    pub const fn weight_at_edge(self) -> f64 {
        match self {
            Self::White => 10.0,
            Self::Red | Self::Yellow | Self::Blue => 3.0,
            Self::Black | Self::LightBlue => 2.0,
            Self::Green | Self::Orange => 0.0,
        }
    }

    /// Proportion weight at painterliness 1 (canvas center)
    pub const fn weight_at_center(self) -> f64 {
        match self {
            Self::White | Self::Black => 0.0,
            Self::Red | Self::Yellow | Self::Blue | Self::Green | Self::Orange => 3.0,
            Self::LightBlue => 2.0,
        }
    }

    /// Literal palette for this family
    pub const fn palette(self) -> &'static [Rgb] {
        const RED: &[Rgb] = &[
            Rgb::new(227, 28, 37),
            Rgb::new(255, 23, 68),
            Rgb::new(255, 0, 51),
        ];
        const YELLOW: &[Rgb] = &[
            Rgb::new(255, 235, 0),
            Rgb::new(255, 214, 0),
            Rgb::new(255, 255, 0),
        ];
        const BLUE: &[Rgb] = &[
            Rgb::new(0, 85, 255),
            Rgb::new(41, 121, 255),
            Rgb::new(0, 102, 255),
        ];
        const BLACK: &[Rgb] = &[Rgb::new(26, 26, 26), Rgb::new(33, 33, 33)];
        const LIGHT_BLUE: &[Rgb] = &[
            Rgb::new(64, 196, 255),
            Rgb::new(0, 176, 255),
            Rgb::new(0, 229, 255),
        ];
        const WHITE: &[Rgb] = &[
            Rgb::new(255, 255, 255),
            Rgb::new(250, 250, 250),
            Rgb::new(245, 245, 245),
        ];
        const GREEN: &[Rgb] = &[
            Rgb::new(0, 200, 83),
            Rgb::new(0, 230, 118),
            Rgb::new(0, 255, 85),
        ];
        const ORANGE: &[Rgb] = &[
            Rgb::new(255, 109, 0),
            Rgb::new(255, 145, 0),
            Rgb::new(255, 85, 0),
        ];
        match self {
            Self::Red => RED,
            Self::Yellow => YELLOW,
            Self::Blue => BLUE,
            Self::Black => BLACK,
            Self::LightBlue => LIGHT_BLUE,
            Self::White => WHITE,
            Self::Green => GREEN,
            Self::Orange => ORANGE,
        }
    }
}
