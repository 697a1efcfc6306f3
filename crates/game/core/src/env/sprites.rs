//! Sprite oracle and owned icon pixel data.

use std::fmt;

use crate::error::SkillError;

/// A single RGBA pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Rectangular area of a sprite sheet, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square region of side `size` anchored at (x, y).
    pub const fn square(x: u32, y: u32, size: u32) -> Self {
        Self::new(x, y, size, size)
    }

    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns true when the region lies entirely inside a `width`×`height` sheet.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        matches!((right, bottom), (Some(r), Some(b)) if r <= width && b <= height)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}

/// Icon pixels owned by exactly one holder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Icon {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Icon {
    /// Wraps row-major pixels. Missing pixels are padded transparent and
    /// surplus pixels are dropped so the buffer always matches the size.
    pub fn from_pixels(width: u32, height: u32, mut pixels: Vec<Rgba>) -> Self {
        pixels.resize(width as usize * height as usize, Rgba::TRANSPARENT);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrites one pixel; returns false when (x, y) is outside the icon.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (y * self.width + x) as usize)
    }
}

/// Provides pixel regions cut from a shared sprite sheet.
pub trait SpriteOracle: Send + Sync {
    /// Copies the pixels of `region` into `buffer`, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::SpriteRegionOutOfBounds` if the region is not
    /// fully inside the sheet.
    fn read_region(&self, region: Region, buffer: &mut Vec<Rgba>) -> Result<(), SkillError>;

    /// Extracts `region` through a caller-provided scratch buffer.
    ///
    /// The scratch buffer may be reused between calls; the returned icon gets
    /// its own copy of the pixels.
    fn extract_region_with(
        &self,
        region: Region,
        scratch: &mut Vec<Rgba>,
    ) -> Result<Icon, SkillError> {
        self.read_region(region, scratch)?;
        Ok(Icon::from_pixels(region.width, region.height, scratch.to_vec()))
    }

    /// Extracts `region` as an independently owned icon.
    fn extract_region(&self, region: Region) -> Result<Icon, SkillError> {
        let mut pixels = Vec::with_capacity(region.area());
        self.read_region(region, &mut pixels)?;
        Ok(Icon::from_pixels(region.width, region.height, pixels))
    }
}

/// In-memory RGBA sprite sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteSheet {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl SpriteSheet {
    /// Creates a fully transparent sheet.
    pub fn blank(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        (x < self.width && y < self.height).then(|| self.pixels[(y * self.width + x) as usize])
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }
}

impl SpriteOracle for SpriteSheet {
    fn read_region(&self, region: Region, buffer: &mut Vec<Rgba>) -> Result<(), SkillError> {
        if !region.fits_within(self.width, self.height) {
            return Err(SkillError::SpriteRegionOutOfBounds {
                region,
                width: self.width,
                height: self.height,
            });
        }

        buffer.clear();
        buffer.reserve(region.area());
        for row in region.y..region.y + region.height {
            let start = (row * self.width + region.x) as usize;
            buffer.extend_from_slice(&self.pixels[start..start + region.width as usize]);
        }
        Ok(())
    }
}
