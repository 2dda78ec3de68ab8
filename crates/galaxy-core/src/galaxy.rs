//! Spiral galaxy point-cloud generator.

use crate::params::GalaxyParameters;
use crate::state::ColorVertex;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Index-aligned positions and colors, three scalars per point each.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl PointCloud {
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat `[x0, y0, z0, x1, ...]` positions.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat `[r0, g0, b0, r1, ...]` colors.
    #[inline]
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.positions
            .get(index * 3..index * 3 + 3)
            .map(Vec3::from_slice)
    }

    pub fn color(&self, index: usize) -> Option<[f32; 3]> {
        self.colors
            .get(index * 3..index * 3 + 3)
            .map(|c| [c[0], c[1], c[2]])
    }

    /// Interleave into the instance layout the renderers upload.
    pub fn to_vertices(&self) -> Vec<ColorVertex> {
        self.positions
            .chunks_exact(3)
            .zip(self.colors.chunks_exact(3))
            .map(|(p, c)| ColorVertex {
                position: [p[0], p[1], p[2]],
                color: [c[0], c[1], c[2]],
            })
            .collect()
    }
}

/// Generate a fresh cloud from `params` using the thread-local RNG.
///
/// Every call draws new random values, so two clouds from the same
/// parameters share their shape but not their points.
pub fn generate(params: &GalaxyParameters) -> PointCloud {
    generate_with(params, &mut rand::thread_rng())
}

/// Generate from `params`, drawing all randomness from `rng`.
pub fn generate_with<R: Rng + ?Sized>(params: &GalaxyParameters, rng: &mut R) -> PointCloud {
    let count = params.count as usize;
    let mut positions = Vec::with_capacity(count * 3);
    let mut colors = Vec::with_capacity(count * 3);

    for index in 0..params.count {
        // Position
        let radius = rng.gen::<f32>() * params.radius;
        let spin_angle = radius * params.spin;
        let angle = branch_angle(index, params.branches) + spin_angle;

        let jitter_x = signed_jitter(rng, params.randomness_power) * params.randomness;
        let jitter_y = signed_jitter(rng, params.randomness_power) * params.randomness;
        let jitter_z = signed_jitter(rng, params.randomness_power) * params.randomness;

        positions.extend_from_slice(&[
            angle.cos() * radius + jitter_x,
            jitter_y,
            angle.sin() * radius + jitter_z,
        ]);

        // Color
        let mixed = params
            .inside_color
            .lerp(params.outside_color, radius / params.radius);
        colors.extend_from_slice(&mixed.to_array());
    }

    log::debug!(
        "[galaxy] generated {} points (branches={}, spin={:.3})",
        count,
        params.branches,
        params.spin
    );
    PointCloud { positions, colors }
}

/// Angle of the arm that point `index` belongs to. Arms are assigned
/// round-robin by index, so indices `i` and `i + branches` share an arm.
///
/// With `branches = 0` there is no arm; the angle is NaN and the resulting
/// cloud is degenerate rather than a panic.
#[inline]
pub fn branch_angle(index: u32, branches: u32) -> f32 {
    match index.checked_rem(branches) {
        Some(arm) => arm as f32 / branches as f32 * TAU,
        None => f32::NAN,
    }
}

// uniform^power with a fair random sign: higher powers pull jitter towards 0
#[inline]
fn signed_jitter<R: Rng + ?Sized>(rng: &mut R, power: f32) -> f32 {
    let magnitude = rng.gen::<f32>().powf(power);
    let sign = if rng.gen::<f32>() < 0.5 { 1.0 } else { -1.0 };
    magnitude * sign
}
