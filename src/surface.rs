// Drawing seam between the simulation and whatever raster target hosts it

use crate::color::Color;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Bounds { width, height }
    }

    pub fn contains(&self, pos: Vector2<f64>) -> bool {
        pos[0] >= 0.0 && pos[0] <= self.width && pos[1] >= 0.0 && pos[1] <= self.height
    }
}

/// A 2D raster target the particle field can draw into.
///
/// Alpha values are in `[0, 1]` and apply to the single primitive being drawn.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn bounds(&self) -> Bounds {
        Bounds::new(self.width(), self.height())
    }

    /// Erase the whole surface.
    fn clear(&mut self);

    fn fill_disc(&mut self, center: Vector2<f64>, radius: f64, color: Color, alpha: f64);

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    );
}
