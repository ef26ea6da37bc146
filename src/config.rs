// Tunables for a particle network. Fixed once the network is built.

use wasm_bindgen::prelude::*;

use crate::color::Color;
use crate::error::NetworkError;

#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    particle_count: usize,
    /// Pairs closer than this are joined by a line.
    connection_distance: f64,
    /// Radius around the pointer within which particles are attracted.
    mouse_distance: f64,
    base_speed: f64,
    /// Upper bound on particle speed after a pointer impulse.
    max_speed: f64,
    min_radius: f64,
    max_radius: f64,
    palette: Vec<Color>,
    line_color: Color,
    line_width: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            particle_count: 80,
            connection_distance: 150.0,
            mouse_distance: 200.0,
            base_speed: 0.5,
            max_speed: 3.0,
            min_radius: 1.0,
            max_radius: 3.0,
            palette: vec![
                Color::from_u32(0x00d4ffff),
                Color::from_u32(0x7b2cbfff),
                Color::from_u32(0xff006eff),
            ],
            line_color: Color::from_u32(0xffffffff),
            line_width: 1.0,
        }
    }
}

// Setters exposed to JS; Rust callers use the `with_*` builders below.
#[wasm_bindgen]
impl NetworkConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> NetworkConfig {
        NetworkConfig::default()
    }

    pub fn set_particle_count(&mut self, count: usize) {
        self.particle_count = count;
    }

    pub fn set_connection_distance(&mut self, distance: f64) {
        self.connection_distance = distance;
    }

    pub fn set_mouse_distance(&mut self, distance: f64) {
        self.mouse_distance = distance;
    }

    pub fn set_base_speed(&mut self, speed: f64) {
        self.base_speed = speed;
    }

    pub fn set_max_speed(&mut self, speed: f64) {
        self.max_speed = speed;
    }

    pub fn set_radius_range(&mut self, min: f64, max: f64) {
        self.min_radius = min;
        self.max_radius = max;
    }

    pub fn clear_palette(&mut self) {
        self.palette.clear();
    }

    pub fn add_color(&mut self, rgba: u32) {
        self.palette.push(Color::from_u32(rgba));
    }

    pub fn set_line_color(&mut self, rgba: u32) {
        self.line_color = Color::from_u32(rgba);
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }
}

impl NetworkConfig {
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_connection_distance(mut self, distance: f64) -> Self {
        self.connection_distance = distance;
        self
    }

    pub fn with_mouse_distance(mut self, distance: f64) -> Self {
        self.mouse_distance = distance;
        self
    }

    pub fn with_base_speed(mut self, speed: f64) -> Self {
        self.base_speed = speed;
        self
    }

    pub fn with_max_speed(mut self, speed: f64) -> Self {
        self.max_speed = speed;
        self
    }

    pub fn with_radius_range(mut self, min: f64, max: f64) -> Self {
        self.min_radius = min;
        self.max_radius = max;
        self
    }

    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    pub fn connection_distance(&self) -> f64 {
        self.connection_distance
    }

    pub fn mouse_distance(&self) -> f64 {
        self.mouse_distance
    }

    pub fn base_speed(&self) -> f64 {
        self.base_speed
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn radius_range(&self) -> (f64, f64) {
        (self.min_radius, self.max_radius)
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn line_color(&self) -> Color {
        self.line_color
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn validate(&self) -> Result<(), NetworkError> {
        fn positive(name: &str, value: f64) -> Result<(), NetworkError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(NetworkError::InvalidConfig(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )))
            }
        }

        positive("connection_distance", self.connection_distance)?;
        positive("mouse_distance", self.mouse_distance)?;
        positive("line_width", self.line_width)?;
        positive("max_radius", self.max_radius)?;

        if !self.base_speed.is_finite() || self.base_speed < 0.0 {
            return Err(NetworkError::InvalidConfig(format!(
                "base_speed must be finite and non-negative, got {}",
                self.base_speed
            )));
        }
        if !self.max_speed.is_finite() || self.max_speed < self.base_speed {
            return Err(NetworkError::InvalidConfig(format!(
                "max_speed ({}) must be finite and at least base_speed ({})",
                self.max_speed, self.base_speed
            )));
        }
        if !self.min_radius.is_finite() || self.min_radius < 0.0 || self.min_radius > self.max_radius {
            return Err(NetworkError::InvalidConfig(format!(
                "radius range {}..{} is invalid",
                self.min_radius, self.max_radius
            )));
        }
        if self.palette.is_empty() {
            return Err(NetworkError::InvalidConfig("palette is empty".to_owned()));
        }
        Ok(())
    }
}
