// The particle network: a fixed-size set of drifting particles drawn onto a
// surface, with nearby pairs linked by lines that fade with distance.

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::NetworkConfig;
use crate::error::NetworkError;
use crate::particle::Particle;
use crate::pointer::PointerTracker;
use crate::surface::{Surface, Viewport};

/// Two particles close enough to be linked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub opacity: f64,
}

/// Line opacity for two particles `distance` apart, in `[0, 1]`.
pub fn connection_opacity(distance: f64, connection_distance: f64) -> f64 {
    (1.0 - distance / connection_distance).max(0.0).min(1.0)
}

pub struct ParticleNetwork<S: Surface> {
    surface: S,
    viewport: Box<dyn Viewport>,
    config: NetworkConfig,
    particles: Vec<Particle>,
    pointer: PointerTracker,
    rng: StdRng,
}

impl<S: Surface> ParticleNetwork<S> {
    /// Binds a network to `surface`, sizes it to the viewport and populates it.
    ///
    /// A missing surface is not an error: the result is `Ok(None)` and nothing
    /// is drawn.
    pub fn initialize(
        surface: Option<S>,
        viewport: Box<dyn Viewport>,
        config: NetworkConfig,
        rng: StdRng,
    ) -> Result<Option<Self>, NetworkError> {
        config.validate()?;
        let surface = match surface {
            Some(surface) => surface,
            None => return Ok(None),
        };

        let mut network = ParticleNetwork {
            surface,
            viewport,
            config,
            particles: Vec::new(),
            pointer: PointerTracker::new(),
            rng,
        };
        network.resize();
        network.populate();
        Ok(Some(network))
    }

    /// Matches the surface's pixel size to the viewport. Particles are left alone.
    pub fn resize(&mut self) {
        let (width, height) = self.viewport.size();
        self.surface.set_size(width, height);
    }

    /// Replaces the particle set with `particle_count` fresh random particles.
    pub fn populate(&mut self) {
        let count = self.config.particle_count();
        let width = self.surface.width() as f64;
        let height = self.surface.height() as f64;
        let speed = self.config.base_speed();
        let (min_radius, max_radius) = self.config.radius_range();
        let palette = self.config.palette();

        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let pos = [self.rng.gen::<f64>() * width, self.rng.gen::<f64>() * height];
            let vel = [
                (self.rng.gen::<f64>() * 2.0 - 1.0) * speed,
                (self.rng.gen::<f64>() * 2.0 - 1.0) * speed,
            ];
            let radius = min_radius + self.rng.gen::<f64>() * (max_radius - min_radius);
            let color = palette[self.rng.gen_range(0, palette.len())];
            particles.push(Particle::new(pos, vel, radius, color));
        }
        self.particles = particles;
    }

    /// Draws one frame: move and draw every particle, then link close pairs.
    pub fn render_frame(&mut self) {
        self.surface.clear();

        let bounds = [self.surface.width() as f64, self.surface.height() as f64];
        let pointer = self.pointer.position();
        for particle in &mut self.particles {
            particle.update(bounds, pointer, &self.config);
            particle.draw(&mut self.surface);
        }

        let line_color = self.config.line_color();
        let line_width = self.config.line_width();
        for connection in self.connections() {
            let from = self.particles[connection.a].pos;
            let to = self.particles[connection.b].pos;
            self.surface
                .stroke_line(from, to, line_color, connection.opacity, line_width);
        }
    }

    /// Every unordered pair closer than the connection distance.
    pub fn connections(&self) -> Vec<Connection> {
        let threshold = self.config.connection_distance();
        let mut connections = Vec::new();
        for (i, p) in self.particles.iter().enumerate() {
            for (j, q) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = vecmath::vec2_len(vecmath::vec2_sub(q.pos, p.pos));
                if distance < threshold {
                    connections.push(Connection {
                        a: i,
                        b: j,
                        distance,
                        opacity: connection_opacity(distance, threshold),
                    });
                }
            }
        }
        connections
    }

    /// Handle for pointer listeners to write into.
    pub fn pointer(&self) -> PointerTracker {
        self.pointer.clone()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
