//! # Card Colors
//!
//! A color spec is one or more color tokens separated by commas, `+` or
//! whitespace: `"red"`, `"#f80"`, `"red, #0000ff"`. One token is a flat
//! color; several make a left-to-right gradient.
//!
//! Parsing never fails. Unknown tokens are skipped and a spec with no
//! usable token falls back to neutral grey.
//!
//! ## Example
//! ```rust
//! use beatcards::ColorSpec;
//!
//! assert_eq!(ColorSpec::parse("red").css(), "#ff0000");
//! assert_eq!(
//!     ColorSpec::parse("red + blue").css(),
//!     "linear-gradient(to right, #ff0000, #0000ff)"
//! );
//! assert_eq!(ColorSpec::parse("#000").lightened(0.5).css(), "#808080");
//! ```

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Named colors understood in color specs
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0x00, 0x00, 0x00)),
    ("white", Rgb::new(0xff, 0xff, 0xff)),
    ("red", Rgb::new(0xff, 0x00, 0x00)),
    ("orange", Rgb::new(0xff, 0xa5, 0x00)),
    ("yellow", Rgb::new(0xff, 0xff, 0x00)),
    ("lime", Rgb::new(0x00, 0xff, 0x00)),
    ("green", Rgb::new(0x00, 0x80, 0x00)),
    ("teal", Rgb::new(0x00, 0x80, 0x80)),
    ("cyan", Rgb::new(0x00, 0xff, 0xff)),
    ("aqua", Rgb::new(0x00, 0xff, 0xff)),
    ("blue", Rgb::new(0x00, 0x00, 0xff)),
    ("navy", Rgb::new(0x00, 0x00, 0x80)),
    ("indigo", Rgb::new(0x4b, 0x00, 0x82)),
    ("purple", Rgb::new(0x80, 0x00, 0x80)),
    ("violet", Rgb::new(0xee, 0x82, 0xee)),
    ("magenta", Rgb::new(0xff, 0x00, 0xff)),
    ("fuchsia", Rgb::new(0xff, 0x00, 0xff)),
    ("pink", Rgb::new(0xff, 0xc0, 0xcb)),
    ("brown", Rgb::new(0xa5, 0x2a, 0x2a)),
    ("maroon", Rgb::new(0x80, 0x00, 0x00)),
    ("olive", Rgb::new(0x80, 0x80, 0x00)),
    ("silver", Rgb::new(0xc0, 0xc0, 0xc0)),
    ("gray", Rgb::new(0x80, 0x80, 0x80)),
    ("grey", Rgb::new(0x80, 0x80, 0x80)),
];

pub const DEFAULT_COLOR: Rgb = Rgb::new(0x80, 0x80, 0x80);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb` or a color name (case-insensitive).
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(hex) = token.strip_prefix('#') {
            return Self::from_hex(hex);
        }
        NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(token))
            .map(|&(_, rgb)| rgb)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let mut it = hex.chars().map(|c| channel(&c.to_string()).map(|v| v * 17));
                Some(Self::new(it.next()??, it.next()??, it.next()??))
            }
            6 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    /// Mix toward white; `amount` is clamped to `[0, 1]`.
    pub fn lighten(self, amount: f64) -> Self {
        let t = if amount.is_nan() { 0.0 } else { amount.clamp(0.0, 1.0) };
        let mix = |c: u8| (c as f64 + (255.0 - c as f64) * t).round() as u8;
        Self::new(mix(self.r), mix(self.g), mix(self.b))
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A parsed color spec: one flat color or gradient stops
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSpec {
    pub stops: Vec<Rgb>,
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self {
            stops: vec![DEFAULT_COLOR],
        }
    }
}

impl ColorSpec {
    pub fn parse(spec: &str) -> Self {
        let stops: Vec<Rgb> = spec
            .split(|c: char| c == ',' || c == '+' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .filter_map(|t| {
                let rgb = Rgb::parse(t);
                if rgb.is_none() {
                    log::debug!("ignoring unknown color token '{}'", t);
                }
                rgb
            })
            .collect();

        if stops.is_empty() {
            Self::default()
        } else {
            Self { stops }
        }
    }

    pub fn is_gradient(&self) -> bool {
        self.stops.len() > 1
    }

    pub fn lightened(&self, amount: f64) -> Self {
        Self {
            stops: self.stops.iter().map(|c| c.lighten(amount)).collect(),
        }
    }

    /// CSS value for a card background.
    pub fn css(&self) -> String {
        match self.stops.as_slice() {
            [single] => single.hex(),
            stops => {
                let hexes: Vec<String> = stops.iter().map(Rgb::hex).collect();
                format!("linear-gradient(to right, {})", hexes.join(", "))
            }
        }
    }
}

/// Lighten any color spec and return it as CSS.
pub fn lighten(spec: &str, amount: f64) -> String {
    ColorSpec::parse(spec).lightened(amount).css()
}
