//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Number of columns (width in pixels, corresponds to segment outputs)
    pub width: u8,
    /// Number of rows (height in pixels, corresponds to COM outputs)
    pub height: u8,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_COLUMNS
    /// - height == 0 or height > MAX_ROWS
    /// - height % 8 != 0 (rows are addressed in 8-pixel pages)
    pub fn new(width: u8, height: u8) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS || height % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u8 {
        self.height / 8
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.width as usize * self.pages() as usize
    }

    /// COM pins hardware configuration matching this panel geometry
    pub fn default_com_pins(&self) -> u8 {
        match (self.width, self.height) {
            (128, 64) => 0x12,
            _ => 0x02,
        }
    }
}

/// Display configuration
///
/// Panel-specific values written during [`Display::init`](crate::Display::init).
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Contrast (0x81 argument)
    pub contrast: u8,
    /// Clock divide ratio / oscillator frequency (0xD5 argument)
    pub clock_divide: u8,
    /// Pre-charge period (0xD9 argument)
    pub precharge: u8,
    /// VCOMH deselect level (0xDB argument)
    pub vcom_deselect: u8,
    /// COM pins hardware configuration (0xDA argument)
    pub com_pins: u8,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use deskpico_core::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(128, 32) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).contrast(0x7F).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Contrast
    contrast: u8,
    /// Clock divide ratio / oscillator frequency
    clock_divide: u8,
    /// Pre-charge period
    precharge: u8,
    /// VCOMH deselect level
    vcom_deselect: u8,
    /// COM pins override, derived from dimensions when unset
    com_pins: Option<u8>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            contrast: 0xFF,
            // Reset-default divide ratio, mid oscillator frequency
            clock_divide: 0x80,
            // Phase 1 = 1 DCLK, phase 2 = 15 DCLK (charge pump panels)
            precharge: 0xF1,
            vcom_deselect: 0x30,
            com_pins: None,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set contrast
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set clock divide ratio / oscillator frequency
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.clock_divide = value;
        self
    }

    /// Set pre-charge period
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Set VCOMH deselect level
    pub fn vcom_deselect(mut self, value: u8) -> Self {
        self.vcom_deselect = value;
        self
    }

    /// Override the COM pins configuration
    ///
    /// By default this is derived from the panel geometry.
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = Some(value);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        Ok(Config {
            dimensions,
            contrast: self.contrast,
            clock_divide: self.clock_divide,
            precharge: self.precharge,
            vcom_deselect: self.vcom_deselect,
            com_pins: self
                .com_pins
                .unwrap_or_else(|| dimensions.default_com_pins()),
        })
    }
}
