use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use crate::geometry::primitives::Point;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgBedTheme,
    ///Draw the convex hull around all placed boxes
    #[serde(default)]
    pub placed_hull: bool,
    ///Outline the most recently placed box, the anchor of the next placement
    #[serde(default)]
    pub highlight_anchor: bool,
    ///Number the boxes in order of placement
    #[serde(default)]
    pub label_boxes: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgBedTheme::default(),
            placed_hull: true,
            highlight_anchor: true,
            label_boxes: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgBedTheme {
    pub stroke_width_multiplier: f32,
    pub bed_fill: Color,
    pub box_fill: Color,
    pub hull_stroke: Color,
    pub anchor_stroke: Color,
}

impl Default for SvgBedTheme {
    fn default() -> Self {
        SvgBedTheme::EARTH_TONES
    }
}

impl SvgBedTheme {
    pub const EARTH_TONES: SvgBedTheme = SvgBedTheme {
        stroke_width_multiplier: 2.0,
        bed_fill: Color(0xCC, 0x82, 0x4A),
        box_fill: Color(0xFF, 0xC8, 0x79),
        hull_stroke: Color(0x2D, 0x2D, 0x2D),
        anchor_stroke: Color(0xFF, 0x00, 0x00), // RED
    };
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Parses a color in `#RRGGBB` (or `RRGGBB`) notation.
    pub fn try_from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s}, expected #RRGGBB"
        );
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Closed path through all `points`
pub fn polygon_data(points: &[Point]) -> Data {
    let mut points = points.iter().map(|p| (p.0 as f32, p.1 as f32));
    let mut data = match points.next() {
        Some(first) => Data::new().move_to(first),
        None => return Data::new(),
    };
    for p in points {
        data = data.line_to(p);
    }
    data.close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn point(Point(x, y): Point, fill: Option<&str>, rad: Option<f32>) -> Circle {
    Circle::new()
        .set("cx", x as f32)
        .set("cy", y as f32)
        .set("r", rad.unwrap_or(0.5))
        .set("fill", fill.unwrap_or("black"))
}
