//! Distinct-block rearrangement of an image into column-stacked patches and back.
//!
//! Images are column-major `height × width` buffers. The image is zero-padded at the
//! bottom and right edge to a multiple of the block size, then cut into non-overlapping
//! `bh × bw` blocks. Patch `p = bc + nbc·br` (block row `br`, block column `bc`, `nbc`
//! block columns) becomes output column `p`, itself stored column-major.

use crate::core::scalar::Scalar;
use crate::core::traits::LinearTransform;
use crate::error::KError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchTransform {
    height: usize,
    width: usize,
    block_rows: usize,
    block_cols: usize,
}

impl PatchTransform {
    pub fn new(height: usize, width: usize, block_rows: usize, block_cols: usize) -> Result<Self, KError> {
        if block_rows == 0 || block_cols == 0 {
            return Err(KError::InvalidStructure(format!(
                "block size must be positive, got {block_rows}x{block_cols}"
            )));
        }
        Ok(Self { height, width, block_rows, block_cols })
    }

    /// Number of blocks along each axis after padding.
    pub fn grid(&self) -> (usize, usize) {
        (self.height.div_ceil(self.block_rows), self.width.div_ceil(self.block_cols))
    }

    pub fn patch_len(&self) -> usize {
        self.block_rows * self.block_cols
    }

    pub fn num_patches(&self) -> usize {
        let (nbr, nbc) = self.grid();
        nbr * nbc
    }

    /// Image → patch columns (`patch_len × num_patches`, column-major).
    pub fn im2col<T: Scalar>(&self, image: &[T]) -> Result<Vec<T>, KError> {
        KError::check_len("image", self.height * self.width, image.len())?;
        let mut cols = vec![T::zero(); self.patch_len() * self.num_patches()];
        self.scatter(image, &mut cols);
        Ok(cols)
    }

    /// Patch columns → image, dropping the padding.
    pub fn col2im<T: Scalar>(&self, cols: &[T]) -> Result<Vec<T>, KError> {
        KError::check_len("patch columns", self.patch_len() * self.num_patches(), cols.len())?;
        let mut image = vec![T::zero(); self.height * self.width];
        self.gather(cols, &mut image);
        Ok(image)
    }

    /// Calls `f(pixel, slot)` for every image pixel and its position in the patch columns.
    fn for_each_pixel(&self, mut f: impl FnMut(usize, usize)) {
        let (_, nbc) = self.grid();
        let plen = self.patch_len();
        for c in 0..self.width {
            let (bc, b) = (c / self.block_cols, c % self.block_cols);
            for r in 0..self.height {
                let (br, a) = (r / self.block_rows, r % self.block_rows);
                let p = bc + nbc * br;
                f(r + c * self.height, p * plen + a + self.block_rows * b);
            }
        }
    }

    fn scatter<T: Scalar>(&self, image: &[T], cols: &mut [T]) {
        cols.iter_mut().for_each(|v| *v = T::zero());
        self.for_each_pixel(|px, slot| cols[slot] = image[px]);
    }

    fn gather<T: Scalar>(&self, cols: &[T], image: &mut [T]) {
        self.for_each_pixel(|px, slot| image[px] = cols[slot]);
    }
}

/// `forward` is [`PatchTransform::im2col`], `adjoint` is [`PatchTransform::col2im`].
impl<T: Scalar> LinearTransform<T> for PatchTransform {
    fn input_len(&self) -> usize {
        self.height * self.width
    }

    fn output_len(&self) -> usize {
        self.patch_len() * self.num_patches()
    }

    fn forward(&self, x: &[T], y: &mut [T]) {
        assert_eq!(LinearTransform::<T>::input_len(self), x.len(), "Input image has incorrect length");
        assert_eq!(LinearTransform::<T>::output_len(self), y.len(), "Output columns have incorrect length");
        self.scatter(x, y);
    }

    fn adjoint(&self, y: &[T], x: &mut [T]) {
        assert_eq!(LinearTransform::<T>::output_len(self), y.len(), "Input columns have incorrect length");
        assert_eq!(LinearTransform::<T>::input_len(self), x.len(), "Output image has incorrect length");
        self.gather(y, x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_blocks() {
        assert!(PatchTransform::new(4, 4, 0, 2).is_err());
    }

    #[test]
    fn exact_tiling_layout() {
        // 2x4 image, column-major, values = linear index
        let t = PatchTransform::new(2, 4, 2, 2).unwrap();
        let img: Vec<f64> = (0..8).map(|v| v as f64).collect();
        let cols = t.im2col(&img).unwrap();
        assert_eq!(t.grid(), (1, 2));
        assert_eq!(cols, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn padding_is_zero_and_cropped_again() {
        // 3x3 image in 2x2 blocks → 2x2 grid of 4 patches
        let t = PatchTransform::new(3, 3, 2, 2).unwrap();
        let img: Vec<f64> = (1..=9).map(|v| v as f64).collect();
        let cols = t.im2col(&img).unwrap();
        assert_eq!(t.num_patches(), 4);
        assert_eq!(cols.len(), 16);
        // patch 0 = rows 0..2, cols 0..2; patch 1 = rows 0..2, cols 2..4
        assert_eq!(&cols[0..4], &[1.0, 2.0, 4.0, 5.0]);
        assert_eq!(&cols[4..8], &[7.0, 8.0, 0.0, 0.0]);
        // patch 2 = row 2 plus padding
        assert_eq!(&cols[8..12], &[3.0, 0.0, 6.0, 0.0]);
        assert_eq!(&cols[12..16], &[9.0, 0.0, 0.0, 0.0]);
        assert_eq!(t.col2im(&cols).unwrap(), img);
    }

    #[test]
    fn adjoint_pairs_with_forward() {
        let t = PatchTransform::new(3, 2, 2, 2).unwrap();
        let x: Vec<f64> = vec![1.0, -2.0, 0.5, 3.0, 4.0, -1.0];
        let y: Vec<f64> = (0..8).map(|v| v as f64 * 0.25 - 1.0).collect();
        let mut wx = vec![0.0; 8];
        let mut wty = vec![0.0; 6];
        t.forward(&x, &mut wx);
        t.adjoint(&y, &mut wty);
        let lhs: f64 = wx.iter().zip(&y).map(|(a, b)| a * b).sum();
        let rhs: f64 = x.iter().zip(&wty).map(|(a, b)| a * b).sum();
        assert!((lhs - rhs).abs() < 1e-12);
    }
}
