// Viewport over the virtual scene: center, extent and refresh cadence.
use std::fmt;

use thiserror::Error;

pub const DEFAULT_WIDTH: f64 = 300.0;
pub const DEFAULT_HEIGHT: f64 = 200.0;
/// Startup cadence. The Home preset uses 100ms.
pub const DEFAULT_INTERVAL_MS: u32 = 1000;
/// Largest delay a browser timer accepts; longer ones wrap negative and fire at once.
pub const MAX_INTERVAL_MS: u32 = i32::MAX as u32;
/// Centers and extents stay within the exactly representable integers, so the
/// truncated request edges never saturate.
pub const MAX_COORD: f64 = 9_007_199_254_740_992.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportField {
    X,
    Y,
    Width,
    Height,
    Interval,
}

impl ViewportField {
    pub const ALL: [ViewportField; 5] = [
        ViewportField::X,
        ViewportField::Y,
        ViewportField::Width,
        ViewportField::Height,
        ViewportField::Interval,
    ];

    /// Short label used by the controls panel (mirrors the query parameter names).
    pub fn label(self) -> &'static str {
        match self {
            ViewportField::X => "x",
            ViewportField::Y => "y",
            ViewportField::Width => "w",
            ViewportField::Height => "h",
            ViewportField::Interval => "d",
        }
    }
}

impl fmt::Display for ViewportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewportField::X => "center x",
            ViewportField::Y => "center y",
            ViewportField::Width => "width",
            ViewportField::Height => "height",
            ViewportField::Interval => "interval",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ViewportError {
    #[error("{field} must be a finite number")]
    NonFinite { field: ViewportField },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: ViewportField, value: f64 },
    #[error("{field} out of range: {value}")]
    OutOfRange { field: ViewportField, value: f64 },
    #[error("{field}: '{input}' is not a number")]
    NotANumber { field: ViewportField, input: String },
}

/// Named full replacements of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Home,
    End,
}

impl Preset {
    pub fn state(self) -> ViewportState {
        match self {
            Preset::Home => ViewportState {
                center_x: 0.0,
                center_y: 0.0,
                width: 300.0,
                height: 200.0,
                interval_ms: 100,
            },
            Preset::End => ViewportState {
                center_x: 0.0,
                center_y: 0.0,
                width: 1024.0,
                height: 1024.0,
                interval_ms: 1000,
            },
        }
    }
}

/// Fields are private so every write goes through a validating setter:
/// centers stay within [`MAX_COORD`], width and height stay positive, and the
/// interval stays between 1ms and [`MAX_INTERVAL_MS`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    center_x: f64,
    center_y: f64,
    width: f64,
    height: f64,
    interval_ms: u32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
impl ViewportState {
    pub fn new(
        center_x: f64,
        center_y: f64,
        width: f64,
        height: f64,
        interval_ms: u32,
    ) -> Result<Self, ViewportError> {
        let mut state = Self::default();
        state.set_center_x(center_x)?;
        state.set_center_y(center_y)?;
        state.set_width(width)?;
        state.set_height(height)?;
        state.set_interval_ms(interval_ms)?;
        Ok(state)
    }
}

fn finite(field: ViewportField, value: f64) -> Result<f64, ViewportError> {
    if !value.is_finite() {
        return Err(ViewportError::NonFinite { field });
    }
    if value.abs() > MAX_COORD {
        return Err(ViewportError::OutOfRange { field, value });
    }
    Ok(value)
}

fn positive(field: ViewportField, value: f64) -> Result<f64, ViewportError> {
    let value = finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ViewportError::NonPositive { field, value })
    }
}

impl ViewportState {
    pub fn center_x(&self) -> f64 {
        self.center_x
    }
    pub fn center_y(&self) -> f64 {
        self.center_y
    }
    pub fn width(&self) -> f64 {
        self.width
    }
    pub fn height(&self) -> f64 {
        self.height
    }
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn set_center_x(&mut self, v: f64) -> Result<(), ViewportError> {
        self.center_x = finite(ViewportField::X, v)?;
        Ok(())
    }
    pub fn set_center_y(&mut self, v: f64) -> Result<(), ViewportError> {
        self.center_y = finite(ViewportField::Y, v)?;
        Ok(())
    }
    pub fn set_width(&mut self, v: f64) -> Result<(), ViewportError> {
        self.width = positive(ViewportField::Width, v)?;
        Ok(())
    }
    pub fn set_height(&mut self, v: f64) -> Result<(), ViewportError> {
        self.height = positive(ViewportField::Height, v)?;
        Ok(())
    }
    pub fn set_interval_ms(&mut self, v: u32) -> Result<(), ViewportError> {
        if v == 0 {
            return Err(ViewportError::NonPositive {
                field: ViewportField::Interval,
                value: 0.0,
            });
        }
        if v > MAX_INTERVAL_MS {
            return Err(ViewportError::OutOfRange {
                field: ViewportField::Interval,
                value: f64::from(v),
            });
        }
        self.interval_ms = v;
        Ok(())
    }

    pub fn get(&self, field: ViewportField) -> f64 {
        match field {
            ViewportField::X => self.center_x,
            ViewportField::Y => self.center_y,
            ViewportField::Width => self.width,
            ViewportField::Height => self.height,
            ViewportField::Interval => f64::from(self.interval_ms),
        }
    }

    /// Generic setter. Interval values are truncated toward zero to whole milliseconds.
    pub fn set(&mut self, field: ViewportField, value: f64) -> Result<(), ViewportError> {
        match field {
            ViewportField::X => self.set_center_x(value),
            ViewportField::Y => self.set_center_y(value),
            ViewportField::Width => self.set_width(value),
            ViewportField::Height => self.set_height(value),
            ViewportField::Interval => {
                if !value.is_finite() {
                    return Err(ViewportError::NonFinite { field });
                }
                let ms = value.trunc();
                if ms <= 0.0 {
                    return Err(ViewportError::NonPositive { field, value: ms });
                }
                if ms > f64::from(MAX_INTERVAL_MS) {
                    return Err(ViewportError::OutOfRange { field, value: ms });
                }
                self.set_interval_ms(ms as u32)
            }
        }
    }

    /// Parses field input the way the page's number inputs were read:
    /// surrounding whitespace ignored, an empty field counts as zero.
    pub fn set_from_input(&mut self, field: ViewportField, input: &str) -> Result<(), ViewportError> {
        let value = coerce_number(field, input)?;
        self.set(field, value)
    }
}

pub fn coerce_number(field: ViewportField, input: &str) -> Result<f64, ViewportError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed.parse::<f64>().map_err(|_| ViewportError::NotANumber {
        field,
        input: input.to_string(),
    })
}
