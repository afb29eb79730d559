// Simple particle struct to keep track of individual position, velocity, size, opacity and color

use crate::color::{Color, Palette};
use crate::config::FieldConfig;
use crate::surface::{Bounds, Surface};
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub alpha: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(
        pos: Vector2<f64>,
        vel: Vector2<f64>,
        radius: f64,
        alpha: f64,
        color: Color,
    ) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            alpha,
            color,
        }
    }

    pub fn create<R: Rng + ?Sized>(
        bounds: Bounds,
        config: &FieldConfig,
        rng: &mut R,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * bounds.width;
        let pos_y = rng.gen::<f64>() * bounds.height;
        let vel_x = (rng.gen::<f64>() - 0.5) * config.speed_scale;
        let vel_y = (rng.gen::<f64>() - 0.5) * config.speed_scale;
        let radius = rng.gen::<f64>() * config.radius_spread + config.min_radius;
        let alpha = rng.gen::<f64>() * config.alpha_spread + config.min_alpha;
        let color = Palette::pick(rng).color();

        Particle::new([pos_x, pos_y], [vel_x, vel_y], radius, alpha, color)
    }

    // One frame of motion. Each axis bounces off its own bound independently
    // and ends up clamped inside [0, bound].
    pub fn advance(&mut self, bounds: Bounds) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        let limits = [bounds.width, bounds.height];
        for axis in 0..2 {
            if self.pos[axis] < 0.0 || self.pos[axis] > limits[axis] {
                self.vel[axis] *= -1.0;
                self.pos[axis] = self.pos[axis].max(0.0).min(limits[axis]);
            }
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_disc(self.pos, self.radius, self.color, self.alpha);
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, other.pos))
    }
}
