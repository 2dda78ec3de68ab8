//! Single-slot ownership of the displayed point cloud.
//!
//! A display holds at most one installed cloud. Replacing it always releases
//! the old backing storage first, then generates and installs the new one,
//! so there is never a moment with two live clouds.

use crate::error::ParamError;
use crate::galaxy::{generate, PointCloud};
use crate::params::GalaxyParameters;

/// Something that can turn a [`PointCloud`] into displayable storage.
///
/// Renderers implement this by creating and destroying GPU buffers.
pub trait PointCloudHost {
    type Handle;

    fn install(&mut self, cloud: &PointCloud, size: f32) -> Self::Handle;
    fn release(&mut self, handle: Self::Handle);
}

pub struct GalaxySlot<H> {
    current: Option<H>,
    generation: u64,
    points: usize,
}

impl<H> Default for GalaxySlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> GalaxySlot<H> {
    pub fn new() -> Self {
        Self {
            current: None,
            generation: 0,
            points: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> Option<&H> {
        self.current.as_ref()
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }

    /// Number of successful installs so far.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Point count of the installed cloud (0 when empty).
    #[inline]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Rebuild from scratch using a snapshot of `params`.
    ///
    /// Invalid parameters are rejected before anything is released, leaving
    /// the current cloud on screen.
    pub fn regenerate<P>(&mut self, host: &mut P, params: &GalaxyParameters) -> Result<usize, ParamError>
    where
        P: PointCloudHost<Handle = H>,
    {
        params.validate()?;
        self.release_current(host);
        let cloud = generate(params);
        Ok(self.install(host, &cloud, params.size))
    }

    /// Install an already generated cloud, releasing whatever was live.
    pub fn replace<P>(&mut self, host: &mut P, cloud: &PointCloud, size: f32) -> usize
    where
        P: PointCloudHost<Handle = H>,
    {
        self.release_current(host);
        self.install(host, cloud, size)
    }

    /// Release the live cloud, if any, without installing a new one.
    pub fn clear<P>(&mut self, host: &mut P)
    where
        P: PointCloudHost<Handle = H>,
    {
        self.release_current(host);
    }

    fn release_current<P>(&mut self, host: &mut P)
    where
        P: PointCloudHost<Handle = H>,
    {
        if let Some(old) = self.current.take() {
            host.release(old);
            self.points = 0;
        }
    }

    fn install<P>(&mut self, host: &mut P, cloud: &PointCloud, size: f32) -> usize
    where
        P: PointCloudHost<Handle = H>,
    {
        debug_assert!(self.current.is_none());
        self.current = Some(host.install(cloud, size));
        self.generation += 1;
        self.points = cloud.len();
        log::info!(
            "[galaxy] installed generation {} with {} points",
            self.generation,
            self.points
        );
        self.points
    }
}
