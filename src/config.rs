// Tunables for the particle field. Defaults reproduce the portfolio background.

use crate::color::{Color, Palette};

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    // Each velocity component is (r - 0.5) * speed_scale for r in [0, 1)
    pub speed_scale: f64,
    pub min_radius: f64,
    pub radius_spread: f64,
    pub min_alpha: f64,
    pub alpha_spread: f64,
    pub link_distance: f64,
    pub link_max_alpha: f64,
    pub link_width: f64,
    pub link_color: Color,
}

impl FieldConfig {
    pub const DEFAULT_PARTICLE_COUNT: usize = 50;
    pub const LINK_DISTANCE: f64 = 100.0;
    pub const LINK_MAX_ALPHA: f64 = 0.2;

    // Above this many particles the pairwise connection pass gets expensive
    pub const LINK_PASS_BUDGET: usize = 200;

    pub fn with_particle_count(particle_count: usize) -> Self {
        FieldConfig {
            particle_count,
            ..FieldConfig::default()
        }
    }

    pub fn link_pairs(&self) -> usize {
        self.particle_count * self.particle_count.saturating_sub(1) / 2
    }

    pub fn exceeds_link_budget(&self) -> bool {
        self.particle_count > FieldConfig::LINK_PASS_BUDGET
    }

    // Opacity of the line joining two particles, None when they are too far apart
    pub fn link_alpha(&self, distance: f64) -> Option<f64> {
        if distance < self.link_distance {
            Some((self.link_distance - distance) / self.link_distance * self.link_max_alpha)
        } else {
            None
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::DEFAULT_PARTICLE_COUNT,
            speed_scale: 2.0,
            min_radius: 1.0,
            radius_spread: 3.0,
            min_alpha: 0.2,
            alpha_spread: 0.5,
            link_distance: FieldConfig::LINK_DISTANCE,
            link_max_alpha: FieldConfig::LINK_MAX_ALPHA,
            link_width: 1.0,
            link_color: Palette::ACCENT,
        }
    }
}
