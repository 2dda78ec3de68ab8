use crate::constants::MAX_PIXEL_RATIO;

/// Host window dimensions in CSS (logical) pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            css_width,
            css_height,
            device_pixel_ratio,
        }
    }

    #[inline]
    pub fn pixel_ratio(&self) -> f64 {
        clamp_pixel_ratio(self.device_pixel_ratio)
    }

    /// Backing-store size in physical pixels, never smaller than 1x1.
    pub fn physical_size(&self) -> (u32, u32) {
        let ratio = self.pixel_ratio();
        let px = |css: f64| {
            if css.is_finite() && css > 0.0 {
                ((css * ratio).floor() as u32).max(1)
            } else {
                1
            }
        };
        (px(self.css_width), px(self.css_height))
    }

    pub fn aspect(&self) -> f32 {
        if self.css_width > 0.0 && self.css_height > 0.0 {
            (self.css_width / self.css_height) as f32
        } else {
            1.0
        }
    }
}

/// Clamp a reported device pixel ratio to `(0, MAX_PIXEL_RATIO]`; bogus
/// values fall back to 1.
#[inline]
pub fn clamp_pixel_ratio(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}
