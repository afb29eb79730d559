// Simple color struct, created from an unsigned 32 representing RRGGBBAA,
// plus the fixed palette particles pick their color from

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // hue in degrees, saturation and lightness in [0, 1]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
        let hue = hue.rem_euclid(360.0);
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;
        let (r, g, b) = match hue {
            h if h < 60.0 => (chroma, x, 0.0),
            h if h < 120.0 => (x, chroma, 0.0),
            h if h < 180.0 => (0.0, chroma, x),
            h if h < 240.0 => (0.0, x, chroma),
            h if h < 300.0 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let channel = |v: f64| ((v + m) * 255.0).round().max(0.0).min(255.0) as u8;

        Color {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a: 0xff,
        }
    }

    // Opacity is applied separately through the surface, so only rgb goes out
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    Blue,
    Violet,
    Cyan,
}

impl Palette {
    pub const ALL: [Palette; 3] = [Palette::Blue, Palette::Violet, Palette::Cyan];

    // Connection lines always use the blue entry
    pub const ACCENT: Color = Color::from_u32(0x3b82f6ff);

    pub fn color(self) -> Color {
        match self {
            Palette::Blue => Palette::ACCENT,
            Palette::Violet => Color::from_u32(0x8b5cf6ff),
            Palette::Cyan => Color::from_u32(0x06b6d4ff),
        }
    }

    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Palette {
        Palette::ALL[rng.gen_range(0, Palette::ALL.len())]
    }
}
