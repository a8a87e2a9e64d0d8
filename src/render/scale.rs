use crate::render::error::RenderError;
/// Linear mapping between a data axis and a pixel span.
///
/// The pixel span may run in either direction; the voltage axis maps its
/// minimum to the bottom of the plot area and its maximum to the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    min: f64,
    max: f64,
    pixel_start: f64,
    pixel_end: f64,
}
impl LinearScale {
    pub fn new(min: f64, max: f64, pixel_start: f64, pixel_end: f64) -> Result<Self, RenderError> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(RenderError::InvalidRange { min, max });
        }
        Ok(Self {
            min,
            max,
            pixel_start,
            pixel_end,
        })
    }
    pub fn min(&self) -> f64 {
        self.min
    }
    pub fn max(&self) -> f64 {
        self.max
    }
    pub fn pixel_span(&self) -> f64 {
        self.pixel_end - self.pixel_start
    }
    pub fn to_pixel(&self, value: f64) -> f64 {
        let span = self.pixel_span();
        if span == 0.0 {
            return self.pixel_start;
        }
        self.pixel_start + (value - self.min) / (self.max - self.min) * span
    }
    pub fn to_value(&self, pixel: f64) -> f64 {
        let span = self.pixel_span();
        if span == 0.0 {
            return self.min;
        }
        self.min + (pixel - self.pixel_start) / span * (self.max - self.min)
    }
    /// Signed pixels covered by one data unit.
    pub fn pixels_per_unit(&self) -> f64 {
        self.to_pixel(1.0) - self.to_pixel(0.0)
    }
}
