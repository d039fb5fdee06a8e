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
use crate::sycc_row::{sycc_row_h1_to_rgb, RgbRowMut};
use crate::sycc_support::{get_sycc_range, SyccChromaSample};
use crate::SyccError;
use num_traits::AsPrimitive;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};
use std::fmt::Debug;

/// Convert sYCC 4:4:4 planar image into planar RGB.
///
/// Samples correspond one to one, origin phase plays no role.
///
/// # Arguments
///
/// * `planar_image` - Source sYCC planes, all of `width` x `height`.
/// * `rgb` - Destination planes of the same size.
/// * `precision` - Bit depth of the samples, 1 to 16.
///
pub fn sycc444_to_rgb<T>(
    planar_image: &SyccPlanarImage<T>,
    rgb: &mut RgbPlanarImageMut,
    precision: u32,
) -> Result<(), SyccError>
where
    T: Copy + Debug + AsPrimitive<i32> + Send + Sync,
{
    check_precision(precision)?;
    planar_image.check_constraints(SyccChromaSample::Sycc444)?;
    rgb.check_matches(planar_image)?;

    if planar_image.width == 0 || planar_image.height == 0 {
        return Ok(());
    }

    let range = get_sycc_range(precision);
    let width = planar_image.width as usize;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = rgb
            .r_plane
            .par_chunks_mut(rgb.r_stride as usize)
            .zip(rgb.g_plane.par_chunks_mut(rgb.g_stride as usize))
            .zip(rgb.b_plane.par_chunks_mut(rgb.b_stride as usize))
            .zip(
                planar_image
                    .y_plane
                    .par_chunks(planar_image.y_stride as usize),
            )
            .zip(
                planar_image
                    .cb_plane
                    .par_chunks(planar_image.cb_stride as usize),
            )
            .zip(
                planar_image
                    .cr_plane
                    .par_chunks(planar_image.cr_stride as usize),
            );
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = rgb
            .r_plane
            .chunks_mut(rgb.r_stride as usize)
            .zip(rgb.g_plane.chunks_mut(rgb.g_stride as usize))
            .zip(rgb.b_plane.chunks_mut(rgb.b_stride as usize))
            .zip(planar_image.y_plane.chunks(planar_image.y_stride as usize))
            .zip(planar_image.cb_plane.chunks(planar_image.cb_stride as usize))
            .zip(planar_image.cr_plane.chunks(planar_image.cr_stride as usize));
    }

    iter.for_each(|(((((r, g), b), y), cb), cr)| {
        sycc_row_h1_to_rgb(
            &range,
            &y[..width],
            &cb[..width],
            &cr[..width],
            RgbRowMut {
                r: &mut r[..width],
                g: &mut g[..width],
                b: &mut b[..width],
            },
        );
    });

    Ok(())
}
