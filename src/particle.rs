// Simple particle struct to keep track of individual position, velocity, and color

use vecmath::Vector2;

use crate::color::Color;
use crate::config::NetworkConfig;
use crate::surface::Surface;

/// Below this distance to the pointer the attraction direction is undefined,
/// so no impulse is applied.
pub const MIN_POINTER_DISTANCE: f64 = 1e-6;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Advances one frame inside a reflecting `bounds` box anchored at the origin.
    ///
    /// The move happens first; a component that ends up past an edge while still
    /// heading outward has its velocity reversed, so the particle may sit just
    /// outside the box for a frame before coming back.
    pub fn update(&mut self, bounds: Vector2<f64>, pointer: Option<Vector2<f64>>, config: &NetworkConfig) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        for axis in 0..2 {
            let outward = (self.pos[axis] < 0.0 && self.vel[axis] < 0.0)
                || (self.pos[axis] > bounds[axis] && self.vel[axis] > 0.0);
            if outward {
                self.vel[axis] = -self.vel[axis];
            }
        }

        if let Some(impulse) = pointer.and_then(|p| self.pointer_impulse(p, config)) {
            self.vel = cap_speed(vecmath::vec2_add(self.vel, impulse), config.max_speed());
        }
    }

    /// Attraction toward the pointer, or `None` when it is out of range or
    /// sitting on top of the particle.
    pub fn pointer_impulse(&self, pointer: Vector2<f64>, config: &NetworkConfig) -> Option<Vector2<f64>> {
        let to_pointer = vecmath::vec2_sub(pointer, self.pos);
        let distance = vecmath::vec2_len(to_pointer);
        let radius = config.mouse_distance();
        if distance >= radius || distance < MIN_POINTER_DISTANCE {
            return None;
        }
        let strength = (radius - distance) / radius * config.base_speed();
        Some(vecmath::vec2_scale(to_pointer, strength / distance))
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.pos, self.radius, self.color);
    }
}

fn cap_speed(vel: Vector2<f64>, max_speed: f64) -> Vector2<f64> {
    let speed = vecmath::vec2_len(vel);
    if speed > max_speed {
        vecmath::vec2_scale(vel, max_speed / speed)
    } else {
        vel
    }
}
