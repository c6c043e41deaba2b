//! Theme color derivation from logo pixels.
//!
//! DESIGN
//! ======
//! The browser draws the logo into a tiny offscreen canvas and hands the raw
//! RGBA bytes to this module. Everything here is plain arithmetic over those
//! bytes so it can be tested natively; the canvas glue lives in
//! `util::theme`.
//!
//! The result is written as `"{h} {s}% {l}%"`, the triplet form consumed by
//! `hsl(var(--background))` in the stylesheet.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Background used whenever sampling fails (warm off-white).
pub const FALLBACK_BACKGROUND: Hsl = Hsl { h: 36, s: 33, l: 97 };

/// Edge length of the canvas used by [`SamplePlan::Points`].
const POINTS_CANVAS_SIZE: u32 = 8;

/// An sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Hue (degrees), saturation and lightness (percent), rounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// CSS custom property value, e.g. `"210 40% 50%"`.
    #[must_use]
    pub fn css_value(&self) -> String {
        format!("{} {}% {}%", self.h, self.s, self.l)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("no sample points")]
    EmptySample,
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    #[error("sample point ({x}, {y}) outside {width}x{height} buffer")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
    #[error("browser error: {0}")]
    Browser(String),
    #[error("image failed to load: {0}")]
    ImageLoad(String),
}

// =============================================================================
// PIXEL BUFFER
// =============================================================================

/// Borrowed RGBA8 pixels in row-major order, as returned by `getImageData`.
#[derive(Clone, Copy, Debug)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Wrap raw bytes, checking that they cover exactly `width * height` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::BufferSize`] when the byte count does not match.
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self, SampleError> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(SampleError::BufferSize { expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB at `(x, y)`; alpha is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::OutOfBounds`] for coordinates outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Result<Rgb, SampleError> {
        if x >= self.width || y >= self.height {
            return Err(SampleError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        let offset = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Ok(Rgb::new(self.data[offset], self.data[offset + 1], self.data[offset + 2]))
    }
}

// =============================================================================
// SAMPLE PLAN
// =============================================================================

/// How the logo is reduced to a single color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SamplePlan {
    /// Draw the whole logo into a 1x1 canvas and read that pixel; the browser
    /// does the averaging while scaling.
    #[default]
    Downscale,
    /// Draw into an 8x8 canvas and average the four inset corners and the center.
    Points,
}

impl SamplePlan {
    /// Edge length of the square canvas the logo is drawn into.
    #[must_use]
    pub fn canvas_size(self) -> u32 {
        match self {
            Self::Downscale => 1,
            Self::Points => POINTS_CANVAS_SIZE,
        }
    }

    /// Fixed coordinates read from the canvas.
    #[must_use]
    pub fn points(self) -> Vec<(u32, u32)> {
        match self {
            Self::Downscale => vec![(0, 0)],
            Self::Points => {
                let near = 1;
                let far = POINTS_CANVAS_SIZE - 2;
                let mid = POINTS_CANVAS_SIZE / 2;
                vec![(near, near), (far, near), (near, far), (far, far), (mid, mid)]
            }
        }
    }
}

// =============================================================================
// CONVERSION
// =============================================================================

/// Convert RGB to rounded HSL using the max/min channel method.
#[must_use]
#[allow(clippy::float_cmp, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (mut h, mut s) = (0.0, 0.0);
    if max != min {
        let d = max - min;
        s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;
    }

    Hsl {
        h: (h * 360.0).round() as u16,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Per-channel rounded mean. `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn average_rgb(samples: &[Rgb]) -> Option<Rgb> {
    if samples.is_empty() {
        return None;
    }
    let n = samples.len() as u64;
    let (r, g, b) = samples.iter().fold((0u64, 0u64, 0u64), |(r, g, b), c| {
        (r + u64::from(c.r), g + u64::from(c.g), b + u64::from(c.b))
    });
    // Rounded integer division; each mean fits in u8.
    let mean = |sum: u64| ((sum * 2 + n) / (n * 2)) as u8;
    Some(Rgb::new(mean(r), mean(g), mean(b)))
}

/// Read `points` from `buffer`, average them and convert to HSL.
///
/// # Errors
///
/// Returns [`SampleError::EmptySample`] for no points or
/// [`SampleError::OutOfBounds`] for any coordinate outside the buffer.
pub fn sample_theme(buffer: &PixelBuffer<'_>, points: &[(u32, u32)]) -> Result<Hsl, SampleError> {
    let samples = points
        .iter()
        .map(|&(x, y)| buffer.pixel(x, y))
        .collect::<Result<Vec<_>, _>>()?;
    let avg = average_rgb(&samples).ok_or(SampleError::EmptySample)?;
    Ok(rgb_to_hsl(avg))
}

/// Collapse any sampling failure into [`FALLBACK_BACKGROUND`].
#[must_use]
pub fn theme_or_fallback(result: Result<Hsl, SampleError>) -> Hsl {
    result.unwrap_or(FALLBACK_BACKGROUND)
}
