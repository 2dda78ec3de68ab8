//! The galaxy parameter record and the editable-field table that panels
//! and keyboard bindings are built from.

use crate::color::Rgb;
use crate::constants::*;
use crate::error::ParamError;

/// Inputs to [`crate::generate`].
///
/// The editing surface owns one of these and mutates it; the generator only
/// ever sees an immutable snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct GalaxyParameters {
    pub count: u32,
    pub size: f32,
    pub radius: f32,
    pub branches: u32,
    pub spin: f32,
    pub randomness: f32,
    pub randomness_power: f32,
    pub inside_color: Rgb,
    pub outside_color: Rgb,
}

impl Default for GalaxyParameters {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            size: DEFAULT_SIZE,
            radius: DEFAULT_RADIUS,
            branches: DEFAULT_BRANCHES,
            spin: DEFAULT_SPIN,
            randomness: DEFAULT_RANDOMNESS,
            randomness_power: DEFAULT_RANDOMNESS_POWER,
            inside_color: Rgb::from_u8(0xff, 0x60, 0x30),
            outside_color: Rgb::from_u8(0x1b, 0x39, 0x84),
        }
    }
}

impl GalaxyParameters {
    /// Structural checks applied before a regeneration is accepted.
    ///
    /// This is looser than the panel ranges: anything the generator can turn
    /// into a meaningful cloud passes, so `count = 0` or `branches = 1` are fine.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.branches == 0 {
            return Err(ParamError::ZeroBranches);
        }
        if self.count > MAX_COUNT {
            return Err(out_of_range("count", self.count as f64, 0.0, MAX_COUNT as f64));
        }
        for field in ParamField::ALL {
            if !field.get(self).is_finite() {
                return Err(ParamError::NonFinite { field: field.key() });
            }
        }
        if self.size <= 0.0 {
            return Err(out_of_range("size", self.size as f64, f64::EPSILON, f64::MAX));
        }
        if self.radius <= 0.0 {
            return Err(out_of_range("radius", self.radius as f64, f64::EPSILON, f64::MAX));
        }
        if self.randomness < 0.0 {
            return Err(out_of_range("randomness", self.randomness as f64, 0.0, f64::MAX));
        }
        if self.randomness_power < 1.0 {
            return Err(out_of_range(
                "randomnessPower",
                self.randomness_power as f64,
                1.0,
                f64::MAX,
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn color(&self, field: ColorField) -> Rgb {
        match field {
            ColorField::Inside => self.inside_color,
            ColorField::Outside => self.outside_color,
        }
    }

    #[inline]
    pub fn set_color(&mut self, field: ColorField, color: Rgb) {
        match field {
            ColorField::Inside => self.inside_color = color,
            ColorField::Outside => self.outside_color = color,
        }
    }
}

fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> ParamError {
    ParamError::OutOfRange {
        field,
        value,
        min,
        max,
    }
}

/// Slider bounds for one numeric field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp into `[min, max]` and snap onto the `min + k * step` grid.
    pub fn clamp_snap(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        // Rounding the step count can land one step past max
        let snapped = snapped.min(self.max);
        // Strip float noise such as 0.30000000000000004
        let scale = 10f64.powi(self.decimals() as i32);
        (snapped * scale).round() / scale
    }

    /// Number of fractional digits the step carries (0.001 -> 3, 100 -> 0).
    pub fn decimals(&self) -> usize {
        let mut step = self.step;
        let mut digits = 0;
        while digits < 9 && (step - step.round()).abs() > 1e-9 {
            step *= 10.0;
            digits += 1;
        }
        digits
    }

    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }
}

/// The numeric fields a user may edit, in panel order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamField {
    Count,
    Size,
    Radius,
    Branches,
    Spin,
    Randomness,
    RandomnessPower,
}

impl ParamField {
    pub const ALL: [ParamField; 7] = [
        ParamField::Count,
        ParamField::Size,
        ParamField::Radius,
        ParamField::Branches,
        ParamField::Spin,
        ParamField::Randomness,
        ParamField::RandomnessPower,
    ];

    /// Stable identifier, also used as the panel label.
    pub fn key(&self) -> &'static str {
        match self {
            ParamField::Count => "count",
            ParamField::Size => "size",
            ParamField::Radius => "radius",
            ParamField::Branches => "branches",
            ParamField::Spin => "spin",
            ParamField::Randomness => "randomness",
            ParamField::RandomnessPower => "randomnessPower",
        }
    }

    pub fn range(&self) -> ParamRange {
        match self {
            ParamField::Count => ParamRange::new(100.0, MAX_COUNT as f64, 100.0),
            ParamField::Size => ParamRange::new(0.001, 0.1, 0.001),
            ParamField::Radius => ParamRange::new(0.01, 20.0, 0.01),
            ParamField::Branches => ParamRange::new(2.0, 20.0, 1.0),
            ParamField::Spin => ParamRange::new(-5.0, 5.0, 0.001),
            ParamField::Randomness => ParamRange::new(0.0, 2.0, 0.001),
            ParamField::RandomnessPower => ParamRange::new(1.0, 10.0, 0.001),
        }
    }

    pub fn get(&self, params: &GalaxyParameters) -> f64 {
        match self {
            ParamField::Count => params.count as f64,
            ParamField::Size => params.size as f64,
            ParamField::Radius => params.radius as f64,
            ParamField::Branches => params.branches as f64,
            ParamField::Spin => params.spin as f64,
            ParamField::Randomness => params.randomness as f64,
            ParamField::RandomnessPower => params.randomness_power as f64,
        }
    }

    /// Write `raw` into `params` after clamping and snapping it the way the
    /// slider would. Returns the value actually stored.
    pub fn apply(&self, params: &mut GalaxyParameters, raw: f64) -> f64 {
        let value = self.range().clamp_snap(raw);
        match self {
            ParamField::Count => params.count = value as u32,
            ParamField::Size => params.size = value as f32,
            ParamField::Radius => params.radius = value as f32,
            ParamField::Branches => params.branches = value as u32,
            ParamField::Spin => params.spin = value as f32,
            ParamField::Randomness => params.randomness = value as f32,
            ParamField::RandomnessPower => params.randomness_power = value as f32,
        }
        value
    }

    /// Apply a typed entry. Blank, unparsable or non-finite text leaves
    /// `params` untouched and returns `None`.
    pub fn apply_text(&self, params: &mut GalaxyParameters, text: &str) -> Option<f64> {
        let raw = text.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(self.apply(params, raw))
    }

    /// Move the field by `steps` increments of its step size.
    pub fn nudge(&self, params: &mut GalaxyParameters, steps: f64) -> f64 {
        let current = self.get(params);
        self.apply(params, current + steps * self.range().step)
    }

    pub fn format(&self, params: &GalaxyParameters) -> String {
        self.range().format(self.get(params))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorField {
    Inside,
    Outside,
}

impl ColorField {
    pub const ALL: [ColorField; 2] = [ColorField::Inside, ColorField::Outside];

    pub fn key(&self) -> &'static str {
        match self {
            ColorField::Inside => "insideColor",
            ColorField::Outside => "outsideColor",
        }
    }
}
