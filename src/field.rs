// The particle field owns every particle for the lifetime of a session and
// draws one full frame per tick

use crate::color::Color;
use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::{Bounds, Surface};
use rand::Rng;
use vecmath::Vector2;

/// A line to draw between two nearby particles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub alpha: f64,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    config: FieldConfig,
}

impl ParticleField {
    pub const RAINBOW_SATURATION: f64 = 0.7;
    pub const RAINBOW_LIGHTNESS: f64 = 0.6;

    pub fn initialize<R: Rng + ?Sized>(
        config: FieldConfig,
        bounds: Bounds,
        rng: &mut R,
    ) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle::create(bounds, &config, rng))
            .collect();
        ParticleField { particles, config }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear_surface<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
    }

    // Bounds come from the surface every tick, so a resize takes effect here
    // without touching particle positions
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.clear_surface(surface);

        let bounds = surface.bounds();
        for particle in self.particles.iter_mut() {
            particle.advance(bounds);
            particle.render(surface);
        }

        let color = self.config.link_color;
        let width = self.config.link_width;
        for link in self.connections() {
            surface.stroke_line(link.from, link.to, color, link.alpha, width);
        }
    }

    /// Every unordered pair `i < j` closer than the link distance, in draw order.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let particles = &self.particles;
        let config = &self.config;
        particles.iter().enumerate().flat_map(move |(i, a)| {
            particles[i + 1..].iter().filter_map(move |b| {
                config.link_alpha(a.distance_to(b)).map(|alpha| Connection {
                    from: a.pos,
                    to: b.pos,
                    alpha,
                })
            })
        })
    }

    pub fn recolor_rainbow<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for particle in self.particles.iter_mut() {
            let hue = rng.gen::<f64>() * 360.0;
            particle.color = Color::from_hsl(
                hue,
                ParticleField::RAINBOW_SATURATION,
                ParticleField::RAINBOW_LIGHTNESS,
            );
        }
    }
}

#[cfg(test)]
impl ParticleField {
    pub(crate) fn from_particles(particles: Vec<Particle>, config: FieldConfig) -> Self {
        ParticleField { particles, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;
    use crate::surface::recording::{DrawOp, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still(x: f64, y: f64) -> Particle {
        Particle::new([x, y], [0.0, 0.0], 1.0, 0.5, Palette::Cyan.color())
    }

    #[test]
    fn initialize_creates_requested_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = Bounds::new(800.0, 600.0);
        let field = ParticleField::initialize(FieldConfig::default(), bounds, &mut rng);
        assert_eq!(field.len(), 50);
    }

    #[test]
    fn tick_never_changes_count() {
        let mut rng = StdRng::seed_from_u64(2);
        let bounds = Bounds::new(320.0, 240.0);
        let mut field = ParticleField::initialize(FieldConfig::default(), bounds, &mut rng);
        let mut surface = RecordingSurface::new(320.0, 240.0);
        for _ in 0..300 {
            field.tick(&mut surface);
            assert_eq!(field.len(), 50);
            assert_eq!(surface.discs(), 50);
        }
        assert_eq!(surface.clears, 300);
    }

    #[test]
    fn zero_particles_is_a_valid_field() {
        let mut rng = StdRng::seed_from_u64(2);
        let config = FieldConfig::with_particle_count(0);
        let mut field = ParticleField::initialize(config, Bounds::new(10.0, 10.0), &mut rng);
        let mut surface = RecordingSurface::new(10.0, 10.0);
        field.tick(&mut surface);
        assert!(field.is_empty());
        assert!(surface.ops.is_empty());
        assert_eq!(surface.clears, 1);
    }

    #[test]
    fn same_seed_is_bit_reproducible() {
        let run = || {
            let mut rng = StdRng::seed_from_u64(0xfeed);
            let bounds = Bounds::new(1024.0, 768.0);
            let mut field = ParticleField::initialize(FieldConfig::default(), bounds, &mut rng);
            for p in field.particles.iter_mut() {
                p.advance(bounds);
            }
            field
                .particles()
                .iter()
                .map(|p| {
                    (
                        p.pos[0].to_bits(),
                        p.pos[1].to_bits(),
                        p.vel[0].to_bits(),
                        p.vel[1].to_bits(),
                    )
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn connections_only_for_close_pairs() {
        let field = ParticleField::from_particles(
            vec![still(0.0, 0.0), still(60.0, 80.0), still(30.0, 40.0), still(500.0, 500.0)],
            FieldConfig::default(),
        );
        let links: Vec<Connection> = field.connections().collect();

        // 0-1 is exactly 100 apart; 3 is far from everything
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].from, [0.0, 0.0]);
        assert_eq!(links[0].to, [30.0, 40.0]);
        assert!((links[0].alpha - 0.1).abs() < 1e-12);
        assert_eq!(links[1].from, [60.0, 80.0]);
        assert_eq!(links[1].to, [30.0, 40.0]);
        assert!((links[1].alpha - 0.1).abs() < 1e-12);
    }

    #[test]
    fn connections_visit_each_pair_once() {
        let particles: Vec<Particle> = (0..6).map(|i| still(i as f64, 0.0)).collect();
        let field = ParticleField::from_particles(particles, FieldConfig::default());
        let links: Vec<Connection> = field.connections().collect();
        assert_eq!(links.len(), 15);
        for link in &links {
            assert!(link.from[0] < link.to[0]);
        }
        let mut pairs: Vec<(u64, u64)> = links
            .iter()
            .map(|l| (l.from[0].to_bits(), l.to[0].to_bits()))
            .collect();
        pairs.sort_unstable();
        pairs.dedup();
        assert_eq!(pairs.len(), 15);
    }

    #[test]
    fn tick_strokes_connections_with_accent() {
        let mut field = ParticleField::from_particles(
            vec![still(10.0, 10.0), still(10.0, 35.0), still(200.0, 200.0)],
            FieldConfig::default(),
        );
        let mut surface = RecordingSurface::new(400.0, 400.0);
        field.tick(&mut surface);

        let lines = surface.lines();
        assert_eq!(lines.len(), 1);
        match lines[0] {
            DrawOp::Line {
                from,
                to,
                color,
                alpha,
                width,
            } => {
                assert_eq!(*from, [10.0, 10.0]);
                assert_eq!(*to, [10.0, 35.0]);
                assert_eq!(*color, Palette::ACCENT);
                assert!((alpha - 0.15).abs() < 1e-12);
                assert_eq!(*width, 1.0);
            }
            _ => unreachable!(),
        }
        // discs come before lines
        assert!(matches!(surface.ops[0], DrawOp::Disc { .. }));
        assert!(matches!(surface.ops[3], DrawOp::Line { .. }));
    }

    #[test]
    fn tick_uses_current_surface_bounds() {
        let mut field = ParticleField::from_particles(
            vec![Particle::new([150.0, 50.0], [1.0, 0.0], 1.0, 0.5, Palette::Blue.color())],
            FieldConfig::default(),
        );
        let mut surface = RecordingSurface::new(200.0, 100.0);
        field.tick(&mut surface);
        assert_eq!(field.particles()[0].pos, [151.0, 50.0]);

        surface.width = 100.0;
        field.tick(&mut surface);
        assert_eq!(field.particles()[0].pos, [100.0, 50.0]);
        assert_eq!(field.particles()[0].vel, [-1.0, 0.0]);
    }

    #[test]
    fn rainbow_recolors_every_particle() {
        let mut rng = StdRng::seed_from_u64(9);
        let bounds = Bounds::new(100.0, 100.0);
        let mut field = ParticleField::initialize(FieldConfig::default(), bounds, &mut rng);
        let before: Vec<Particle> = field.particles().to_vec();
        field.recolor_rainbow(&mut rng);

        assert_eq!(field.len(), before.len());
        let palette: Vec<Color> = Palette::ALL.iter().map(|p| p.color()).collect();
        let recolored = field
            .particles()
            .iter()
            .filter(|p| !palette.contains(&p.color))
            .count();
        assert!(recolored > 40);
        for (after, before) in field.particles().iter().zip(before.iter()) {
            assert_eq!(after.pos, before.pos);
            assert_eq!(after.radius, before.radius);
        }
    }
}
