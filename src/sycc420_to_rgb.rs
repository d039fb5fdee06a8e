/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::images::{RgbPlanarImageMut, SyccPlanarImage};
use crate::sycc_error::check_precision;
use crate::sycc_row::{sycc_row_h2_to_rgb, ChromaRow, RgbRowMut};
use crate::sycc_support::{get_sycc_range, OriginPhase, SyccChromaSample};
use crate::SyccError;
use num_traits::AsPrimitive;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};
use std::fmt::Debug;

/// Convert sYCC 4:2:0 planar image into full resolution planar RGB.
///
/// Each chroma sample covers a 2x2 block of luma, two luma rows are
/// reconstructed per chroma row. When the origin phase is odd the first
/// column, or the first row, has no chroma sample of its own and is decoded
/// with Cb = Cr = 0. Odd remaining width or height reuse the last chroma
/// column or row.
///
/// # Arguments
///
/// * `planar_image` - Source sYCC planes, chroma is `ceil(width / 2)` x `ceil(height / 2)`.
/// * `rgb` - Destination planes with the same width and height as luma.
/// * `precision` - Bit depth of the samples, 1 to 16.
/// * `phase` - Parity of the image origin on the subsampling grid.
///
pub fn sycc420_to_rgb<T>(
    planar_image: &SyccPlanarImage<T>,
    rgb: &mut RgbPlanarImageMut,
    precision: u32,
    phase: OriginPhase,
) -> Result<(), SyccError>
where
    T: Copy + Debug + AsPrimitive<i32> + Send + Sync,
{
    let chroma_subsampling = SyccChromaSample::Sycc420;
    check_precision(precision)?;
    planar_image.check_constraints(chroma_subsampling)?;
    rgb.check_matches(planar_image)?;

    if planar_image.width == 0 || planar_image.height == 0 {
        return Ok(());
    }

    let range = get_sycc_range(precision);
    let width = planar_image.width as usize;
    let chroma_width = chroma_subsampling.chroma_width(planar_image.width) as usize;

    let y_stride = planar_image.y_stride as usize;
    let cb_stride = planar_image.cb_stride as usize;
    let cr_stride = planar_image.cr_stride as usize;
    let r_stride = rgb.r_stride as usize;
    let g_stride = rgb.g_stride as usize;
    let b_stride = rgb.b_stride as usize;

    let head_rows = usize::from(phase.odd_y);

    let (y_head, y_body) = planar_image.y_plane.split_at(head_rows * y_stride);
    let (r_head, r_body) = rgb.r_plane.split_at_mut(head_rows * r_stride);
    let (g_head, g_body) = rgb.g_plane.split_at_mut(head_rows * g_stride);
    let (b_head, b_body) = rgb.b_plane.split_at_mut(head_rows * b_stride);

    if phase.odd_y {
        sycc_row_h2_to_rgb(
            &range,
            phase.odd_x,
            &y_head[..width],
            ChromaRow::Zero,
            RgbRowMut {
                r: &mut r_head[..width],
                g: &mut g_head[..width],
                b: &mut b_head[..width],
            },
        );
    }

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = r_body
            .par_chunks_mut(r_stride * 2)
            .zip(g_body.par_chunks_mut(g_stride * 2))
            .zip(b_body.par_chunks_mut(b_stride * 2))
            .zip(y_body.par_chunks(y_stride * 2));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = r_body
            .chunks_mut(r_stride * 2)
            .zip(g_body.chunks_mut(g_stride * 2))
            .zip(b_body.chunks_mut(b_stride * 2))
            .zip(y_body.chunks(y_stride * 2));
    }

    iter.enumerate()
        .for_each(|(cy, (((r_rows, g_rows), b_rows), y_rows))| {
            let cb_row = &planar_image.cb_plane[cy * cb_stride..][..chroma_width];
            let cr_row = &planar_image.cr_plane[cy * cr_stride..][..chroma_width];

            for (((r, g), b), y) in r_rows
                .chunks_mut(r_stride)
                .zip(g_rows.chunks_mut(g_stride))
                .zip(b_rows.chunks_mut(b_stride))
                .zip(y_rows.chunks(y_stride))
            {
                sycc_row_h2_to_rgb(
                    &range,
                    phase.odd_x,
                    &y[..width],
                    ChromaRow::Samples {
                        cb: cb_row,
                        cr: cr_row,
                    },
                    RgbRowMut {
                        r: &mut r[..width],
                        g: &mut g[..width],
                        b: &mut b[..width],
                    },
                );
            }
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sycc_support::sycc_to_rgb;
    use rand::Rng;

    struct Planes {
        r: Vec<i32>,
        g: Vec<i32>,
        b: Vec<i32>,
    }

    fn convert(
        y: &[i32],
        cb: &[i32],
        cr: &[i32],
        width: u32,
        height: u32,
        precision: u32,
        phase: OriginPhase,
    ) -> Planes {
        let cw = width.div_ceil(2);
        let image = SyccPlanarImage {
            y_plane: y,
            y_stride: width,
            cb_plane: cb,
            cb_stride: cw,
            cr_plane: cr,
            cr_stride: cw,
            width,
            height,
        };
        let len = width as usize * height as usize;
        let mut planes = Planes {
            r: vec![-1; len],
            g: vec![-1; len],
            b: vec![-1; len],
        };
        let mut dst = RgbPlanarImageMut {
            r_plane: &mut planes.r,
            r_stride: width,
            g_plane: &mut planes.g,
            g_stride: width,
            b_plane: &mut planes.b,
            b_stride: width,
            width,
            height,
        };
        sycc420_to_rgb(&image, &mut dst, precision, phase).unwrap();
        planes
    }

    #[test]
    fn mid_gray_4x4() {
        let y = vec![128; 16];
        let c = vec![128; 4];
        let out = convert(&y, &c, &c, 4, 4, 8, OriginPhase::default());
        assert!(out.r.iter().all(|&v| v == 128));
        assert!(out.g.iter().all(|&v| v == 128));
        assert!(out.b.iter().all(|&v| v == 128));
    }

    #[test]
    fn block_uses_chroma_at_half_coordinates() {
        let mut rng = rand::rng();
        let width = 7u32;
        let height = 5u32;
        let cw = width.div_ceil(2) as usize;
        let ch = height.div_ceil(2) as usize;
        let y: Vec<i32> = (0..width * height).map(|_| rng.random_range(0..256)).collect();
        let cb: Vec<i32> = (0..cw * ch).map(|_| rng.random_range(0..256)).collect();
        let cr: Vec<i32> = (0..cw * ch).map(|_| rng.random_range(0..256)).collect();
        let out = convert(&y, &cb, &cr, width, height, 8, OriginPhase::default());
        let range = get_sycc_range(8);
        for py in 0..height as usize {
            for px in 0..width as usize {
                let i = py * width as usize + px;
                let c = (py / 2) * cw + px / 2;
                assert_eq!(
                    (out.r[i], out.g[i], out.b[i]),
                    sycc_to_rgb(&range, y[i], cb[c], cr[c]),
                    "pixel {}x{}",
                    px,
                    py
                );
            }
        }
    }

    #[test]
    fn odd_origin_zeroes_first_row_and_column() {
        let width = 5u32;
        let height = 5u32;
        let y = vec![128; 25];
        // 3x3 chroma, values distinct per position
        let cb: Vec<i32> = (0..9).map(|i| 100 + i * 5).collect();
        let cr: Vec<i32> = (0..9).map(|i| 150 - i * 5).collect();
        let phase = OriginPhase::from_origin(1, 1);
        let out = convert(&y, &cb, &cr, width, height, 8, phase);
        let range = get_sycc_range(8);
        let zero = sycc_to_rgb(&range, 128, 0, 0);
        for py in 0..5usize {
            for px in 0..5usize {
                let i = py * 5 + px;
                let expected = if py == 0 || px == 0 {
                    zero
                } else {
                    let c = ((py - 1) / 2) * 3 + (px - 1) / 2;
                    sycc_to_rgb(&range, 128, cb[c], cr[c])
                };
                assert_eq!((out.r[i], out.g[i], out.b[i]), expected, "pixel {}x{}", px, py);
            }
        }
    }

    #[test]
    fn odd_origin_on_even_raster_stays_in_bounds() {
        let y = vec![200; 16];
        let c = vec![128; 4];
        let out = convert(&y, &c, &c, 4, 4, 8, OriginPhase::from_origin(1, 1));
        // row 1..4 and column 1..4 get neutral chroma, last row and column reuse
        // the final chroma sample
        assert_eq!(out.r[4 * 3 + 3], 200);
        assert_eq!(out.g[4 * 3 + 3], 200);
        assert!(out.r.iter().all(|&v| v >= 0));
    }

    #[test]
    fn single_pixel() {
        let out = convert(&[77], &[128], &[128], 1, 1, 8, OriginPhase::default());
        assert_eq!((out.r[0], out.g[0], out.b[0]), (77, 77, 77));
    }

    #[test]
    fn ten_bit_neutral() {
        let y: Vec<i32> = (0..6 * 3).map(|i| i * 50).collect();
        let c = vec![512; 3 * 2];
        let out = convert(&y, &c, &c, 6, 3, 10, OriginPhase::default());
        assert_eq!(out.r, y);
        assert_eq!(out.g, y);
        assert_eq!(out.b, y);
    }

    #[test]
    fn accepts_narrow_samples() {
        let y = vec![90u8; 4];
        let c = vec![128u8; 1];
        let image = SyccPlanarImage {
            y_plane: &y,
            y_stride: 2,
            cb_plane: &c,
            cb_stride: 1,
            cr_plane: &c,
            cr_stride: 1,
            width: 2,
            height: 2,
        };
        let mut r = vec![0; 4];
        let mut g = vec![0; 4];
        let mut b = vec![0; 4];
        let mut dst = RgbPlanarImageMut {
            r_plane: &mut r,
            r_stride: 2,
            g_plane: &mut g,
            g_stride: 2,
            b_plane: &mut b,
            b_stride: 2,
            width: 2,
            height: 2,
        };
        sycc420_to_rgb(&image, &mut dst, 8, OriginPhase::default()).unwrap();
        assert_eq!(r, vec![90; 4]);
    }

    #[test]
    fn rejects_mismatched_destination() {
        let y = vec![0; 4];
        let c = vec![0; 1];
        let image = SyccPlanarImage {
            y_plane: &y,
            y_stride: 2,
            cb_plane: &c,
            cb_stride: 1,
            cr_plane: &c,
            cr_stride: 1,
            width: 2,
            height: 2,
        };
        let mut r = vec![0; 2];
        let mut g = vec![0; 2];
        let mut b = vec![0; 2];
        let mut dst = RgbPlanarImageMut {
            r_plane: &mut r,
            r_stride: 2,
            g_plane: &mut g,
            g_stride: 2,
            b_plane: &mut b,
            b_stride: 2,
            width: 2,
            height: 1,
        };
        assert!(matches!(
            sycc420_to_rgb(&image, &mut dst, 8, OriginPhase::default()),
            Err(SyccError::DestinationSizeMismatch(_))
        ));
        assert_eq!(r, vec![0; 2]);
    }
}
