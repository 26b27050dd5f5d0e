//! Mask - Canvas-sized pixel membership sets
//!
//! A `Mask` records which pixels of the source canvas belong to a region.
//!
//! # Bit layout
//!
//! - One bit per pixel, packed MSB to LSB within each 32-bit word
//! - Every row starts on a 32-bit boundary (`wpl` words per line)
//! - Padding bits past `width` are always zero, so word popcounts are exact

use crate::box_::Box;
use crate::error::{Error, Result};

/// A 1-bit-per-pixel membership mask over a `width` x `height` canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    /// Words per line
    wpl: u32,
    data: Vec<u32>,
}

impl Mask {
    /// Create an empty mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let wpl = width.div_ceil(32);
        Ok(Self {
            width,
            height,
            wpl,
            data: vec![0; wpl as usize * height as usize],
        })
    }

    /// Get the canvas width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the canvas height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether two masks cover the same canvas size.
    #[inline]
    pub fn same_size(&self, other: &Mask) -> bool {
        self.width == other.width && self.height == other.height
    }

    #[inline]
    fn word_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.wpl as usize + (x / 32) as usize
    }

    /// Get the bit at (x, y).
    ///
    /// Out-of-bounds coordinates read as `false`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.get_unchecked(x, y)
    }

    /// Get the bit at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// May panic or read a padding bit if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> bool {
        let word = self.data[self.word_index(x, y)];
        (word >> (31 - (x % 32))) & 1 == 1
    }

    /// Set the bit at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_unchecked(x, y);
        Ok(())
    }

    /// Set the bit at (x, y) without bounds checking.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32) {
        debug_assert!(x < self.width && y < self.height);
        let i = self.word_index(x, y);
        self.data[i] |= 1 << (31 - (x % 32));
    }

    /// Count the set bits.
    pub fn count(&self) -> u32 {
        self.data.iter().map(|w| w.count_ones()).sum()
    }

    /// Check whether no bit is set.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&w| w == 0)
    }

    /// OR another mask into this one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] if the canvases differ.
    pub fn or_assign(&mut self, other: &Mask) -> Result<()> {
        if !self.same_size(other) {
            return Err(Error::IncompatibleSizes(
                self.width,
                self.height,
                other.width,
                other.height,
            ));
        }
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a |= *b;
        }
        Ok(())
    }

    /// Check whether two masks share any set bit.
    ///
    /// Masks of different sizes never intersect.
    pub fn intersects(&self, other: &Mask) -> bool {
        self.same_size(other)
            && self
                .data
                .iter()
                .zip(&other.data)
                .any(|(a, b)| a & b != 0)
    }

    /// Compute the tightest box enclosing all set bits.
    ///
    /// Returns `None` for an empty mask.
    pub fn bounding_box(&self) -> Option<Box> {
        let mut extremes: Option<(u32, u32, u32, u32)> = None;
        for (x, y) in self.iter() {
            extremes = Some(match extremes {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
        extremes.map(|(x0, y0, x1, y1)| Box::from_extremes(x0, y0, x1, y1))
    }

    /// Iterate over the coordinates of set bits in raster order.
    pub fn iter(&self) -> MaskIter<'_> {
        MaskIter {
            mask: self,
            word: 0,
            bits: self.data.first().copied().unwrap_or(0),
        }
    }
}

/// Raster-order iterator over the set bits of a [`Mask`].
pub struct MaskIter<'a> {
    mask: &'a Mask,
    /// Index of the word currently being drained
    word: usize,
    /// Remaining bits of that word
    bits: u32,
}

impl Iterator for MaskIter<'_> {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        while self.bits == 0 {
            self.word += 1;
            if self.word >= self.mask.data.len() {
                return None;
            }
            self.bits = self.mask.data[self.word];
        }
        let lead = self.bits.leading_zeros();
        self.bits &= !(1 << (31 - lead));

        let wpl = self.mask.wpl as usize;
        let y = (self.word / wpl) as u32;
        let x = (self.word % wpl) as u32 * 32 + lead;
        Some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_creation() {
        let m = Mask::new(33, 2).unwrap();
        assert_eq!(m.width(), 33);
        assert_eq!(m.height(), 2);
        assert_eq!(m.count(), 0);
        assert!(m.is_empty());
        assert!(m.bounding_box().is_none());
        assert!(Mask::new(0, 5).is_err());
    }

    #[test]
    fn test_mask_set_get() {
        let mut m = Mask::new(40, 3).unwrap();
        m.set(0, 0).unwrap();
        m.set(31, 1).unwrap();
        m.set(32, 1).unwrap();
        m.set(39, 2).unwrap();
        assert!(m.get(0, 0));
        assert!(m.get(31, 1));
        assert!(m.get(32, 1));
        assert!(m.get(39, 2));
        assert!(!m.get(1, 0));
        assert!(!m.get(40, 2)); // out of bounds reads false
        assert!(m.set(40, 0).is_err());
        assert_eq!(m.count(), 4);
    }

    #[test]
    fn test_mask_iter_raster_order() {
        let mut m = Mask::new(70, 3).unwrap();
        let pts = [(69, 0), (3, 1), (64, 1), (0, 2), (33, 2)];
        for &(x, y) in pts.iter().rev() {
            m.set(x, y).unwrap();
        }
        let got: Vec<_> = m.iter().collect();
        assert_eq!(got, vec![(69, 0), (3, 1), (64, 1), (0, 2), (33, 2)]);
    }

    #[test]
    fn test_mask_bounding_box() {
        let mut m = Mask::new(10, 10).unwrap();
        m.set(2, 7).unwrap();
        m.set(5, 3).unwrap();
        m.set(8, 4).unwrap();
        assert_eq!(m.bounding_box(), Some(Box::new_unchecked(2, 3, 7, 5)));
    }

    #[test]
    fn test_mask_or_and_intersect() {
        let mut a = Mask::new(8, 8).unwrap();
        let mut b = Mask::new(8, 8).unwrap();
        a.set(1, 1).unwrap();
        b.set(6, 6).unwrap();
        assert!(!a.intersects(&b));

        a.or_assign(&b).unwrap();
        assert_eq!(a.count(), 2);
        assert!(a.get(6, 6));
        assert!(a.intersects(&b));

        let c = Mask::new(9, 8).unwrap();
        assert!(a.or_assign(&c).is_err());
        assert!(!a.intersects(&c));
    }
}
