//! Light and shading configuration.
//!
//! Plain data consumed by the render layer: light parameters, orbit
//! placement, and the three demo presets. Nothing here touches a graphics
//! API; the renderer copies these values into its uniform buffers as-is.

use std::f32::consts::TAU;

use nalgebra::{Point3, Vector3};
use rand::Rng;

/// Maximum number of simultaneously configured lights.
pub const MAX_LIGHTS: usize = 16;

/// Kind of light source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightType {
    /// Omnidirectional light at a point.
    Point,
    /// Parallel rays from a direction.
    Directional,
    /// Cone-limited light with inner/outer falloff.
    Spot,
}

/// Lighting model selected in the demo's shader combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingModel {
    /// Per-fragment Phong shading.
    PhongShading,
    /// Per-vertex Phong lighting.
    PhongLighting,
    /// Blinn's halfway-vector variant.
    Blinn,
}

/// One dynamic light's full parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Whether the renderer should evaluate this light.
    pub enabled: bool,
    /// Kind of source.
    pub light_type: LightType,
    /// Current angle on the orbit circle, radians.
    pub orbit_angle: f32,
    /// World-space position, updated from the orbit each frame.
    pub position: Point3<f32>,
    /// Ambient intensity.
    pub ambient: Vector3<f32>,
    /// Diffuse intensity.
    pub diffuse: Vector3<f32>,
    /// Specular intensity.
    pub specular: Vector3<f32>,
    /// Constant attenuation coefficient.
    pub constant_attenuation: f32,
    /// Linear attenuation coefficient.
    pub linear_attenuation: f32,
    /// Quadratic attenuation coefficient.
    pub quadratic_attenuation: f32,
    /// Cosine of the spot cone's inner angle.
    pub inner_cone_cos: f32,
    /// Cosine of the spot cone's outer angle.
    pub outer_cone_cos: f32,
    /// Spot edge falloff exponent.
    pub falloff: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            enabled: false,
            light_type: LightType::Point,
            orbit_angle: 0.0,
            position: Point3::origin(),
            ambient: Vector3::new(0.8, 0.8, 0.8),
            diffuse: Vector3::new(0.8, 0.8, 0.8),
            specular: Vector3::new(1.0, 1.0, 1.0),
            constant_attenuation: 0.2,
            linear_attenuation: 0.04,
            quadratic_attenuation: 0.015,
            inner_cone_cos: 0.9,
            outer_cone_cos: 0.7,
            falloff: 0.13,
        }
    }
}

impl Light {
    /// Advance the orbit angle by `delta` radians.
    pub fn advance(&mut self, delta: f32) {
        self.orbit_angle += delta;
    }

    /// Place the light on the y = 0 orbit circle of the given radius.
    pub fn orbit(&mut self, radius: f32) {
        self.position = Point3::from(
            radius * Vector3::new(self.orbit_angle.cos(), 0.0, self.orbit_angle.sin()),
        );
    }
}

/// Build `count` default lights with evenly spaced orbit angles.
pub fn ring(count: usize) -> Vec<Light> {
    let count = count.min(MAX_LIGHTS);
    (0..count)
        .map(|i| Light {
            orbit_angle: (TAU / count as f32) * i as f32,
            ..Light::default()
        })
        .collect()
}

/// The demo's light presets, applied over an existing light ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightPreset {
    /// Every light an identical point light.
    Uniform,
    /// Every light a spotlight with random colors.
    ColoredSpots,
    /// Types cycling point/directional/spot, intensity graded by index.
    Mixed,
}

impl LightPreset {
    /// Reconfigure every light in `lights` according to the preset.
    ///
    /// Orbit angles and positions are left untouched so switching presets
    /// does not snap the lights around.
    pub fn apply(self, lights: &mut [Light]) {
        match self {
            LightPreset::Uniform => {
                for light in lights.iter_mut() {
                    light.enabled = true;
                    light.light_type = LightType::Point;
                    light.ambient = Vector3::new(0.2, 0.4, 0.2);
                    light.diffuse = Vector3::new(0.8, 0.4, 0.4);
                    light.specular = Vector3::new(0.4, 0.2, 0.6);
                    light.constant_attenuation = 0.2;
                    light.linear_attenuation = 0.08;
                    light.quadratic_attenuation = 0.015;
                    light.falloff = 0.13;
                }
            }
            LightPreset::ColoredSpots => {
                let mut rng = rand::rng();
                let mut color =
                    || Vector3::new(rng.random::<f32>(), rng.random::<f32>(), rng.random::<f32>());
                for light in lights.iter_mut() {
                    light.enabled = true;
                    light.light_type = LightType::Spot;
                    light.ambient = color();
                    light.diffuse = color();
                    light.specular = 0.6 * color();
                    light.constant_attenuation = 0.08;
                    light.linear_attenuation = 0.02;
                    light.quadratic_attenuation = 0.011;
                    light.falloff = 0.26;
                }
            }
            LightPreset::Mixed => {
                let count = lights.len();
                for (index, light) in lights.iter_mut().enumerate() {
                    light.enabled = true;
                    light.light_type = match index % 3 {
                        0 => LightType::Point,
                        1 => LightType::Directional,
                        _ => LightType::Spot,
                    };

                    let level = (count - index) as f32 / count as f32;
                    light.ambient = Vector3::new(level, level, level);
                    light.diffuse = Vector3::new(level, level, level);
                    light.specular = Vector3::new(level, level, level);
                    light.constant_attenuation = 0.08;
                    light.linear_attenuation = 0.02;
                    light.quadratic_attenuation = 0.011;
                    light.falloff = 0.13;
                }
            }
        }
    }
}
