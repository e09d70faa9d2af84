use crate::core::numeric::{format_number, parse_float};
use crate::error::ViewError;
use crate::models::PairedView;

/// Inclusive `[min, max]` domain of a paired control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp into range; `-0` comes out as `0`
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max) + 0.0
    }
}

pub const GPA_BOUNDS: Bounds = Bounds::new(0.0, 4.0);
pub const MAX_TUITION_BOUNDS: Bounds = Bounds::new(0.0, 80_000.0);

/// A value shown through a slider and a numeric field at the same time
///
/// The slider is the source of truth. After any edit from either side both
/// views hold the same clamped value.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedControl {
    bounds: Bounds,
    slider: f64,
    input: String,
}

impl PairedControl {
    pub fn new(bounds: Bounds, initial: f64) -> Self {
        let value = bounds.clamp(initial);
        Self {
            bounds,
            slider: value,
            input: format_number(value),
        }
    }

    pub fn gpa(initial: f64) -> Self {
        Self::new(GPA_BOUNDS, initial)
    }

    pub fn max_tuition(initial: f64) -> Self {
        Self::new(MAX_TUITION_BOUNDS, initial)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Shared value of both views
    pub fn value(&self) -> f64 {
        self.slider
    }

    /// Text currently shown in the numeric field
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn view(&self) -> PairedView {
        PairedView {
            slider: self.slider,
            input: self.input.clone(),
        }
    }

    /// Slider moved: mirror its value into the numeric field
    ///
    /// The slider's own bounds keep it in range; NaN never comes from a
    /// slider and is ignored.
    pub fn on_primary_change(&mut self, raw: f64) {
        if raw.is_nan() {
            return;
        }
        let value = self.bounds.clamp(raw);
        self.slider = value;
        self.input = format_number(value);
    }

    /// Numeric field committed: parse, clamp and write to both views
    ///
    /// Unparseable text leaves both views untouched.
    pub fn on_secondary_change(&mut self, raw: &str) -> Result<f64, ViewError> {
        let parsed = parse_float(raw)
            .ok_or_else(|| ViewError::UnparseableNumericInput(raw.to_string()))?;
        let value = self.bounds.clamp(parsed);

        self.slider = value;
        self.input = format_number(value);
        Ok(value)
    }

    /// Write a preset literal to both views, keeping its text as written
    pub(crate) fn assign_literal(&mut self, literal: &str) {
        if let Some(parsed) = parse_float(literal) {
            let value = self.bounds.clamp(parsed);
            self.slider = value;
            self.input = if value == parsed {
                literal.to_string()
            } else {
                format_number(value)
            };
        }
    }
}
