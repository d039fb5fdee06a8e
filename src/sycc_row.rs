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
use crate::sycc_support::{sycc_to_rgb, SyccChromaRange};
use num_traits::AsPrimitive;

/// Chroma available to a single output row
#[derive(Debug, Copy, Clone)]
pub(crate) enum ChromaRow<'a, T> {
    /// Row sits on the odd edge of the subsampling grid, Cb = Cr = 0
    Zero,
    Samples { cb: &'a [T], cr: &'a [T] },
}

pub(crate) struct RgbRowMut<'a> {
    pub(crate) r: &'a mut [i32],
    pub(crate) g: &'a mut [i32],
    pub(crate) b: &'a mut [i32],
}

#[inline(always)]
fn store(dst: &mut RgbRowMut<'_>, x: usize, rgb: (i32, i32, i32)) {
    dst.r[x] = rgb.0;
    dst.g[x] = rgb.1;
    dst.b[x] = rgb.2;
}

#[inline]
fn sycc_row_zero_chroma<T>(range: &SyccChromaRange, y_row: &[T], dst: &mut RgbRowMut<'_>)
where
    T: Copy + AsPrimitive<i32>,
{
    for (x, &y) in y_row.iter().enumerate() {
        store(dst, x, sycc_to_rgb(range, y.as_(), 0, 0));
    }
}

/// Converts one row whose chroma is halved horizontally.
///
/// Every pair of luma samples shares one chroma sample. With an odd origin
/// the first column has no chroma of its own and is decoded with zero chroma,
/// pairing restarts from the second column. A trailing unpaired column uses
/// the last chroma sample.
#[inline]
pub(crate) fn sycc_row_h2_to_rgb<T>(
    range: &SyccChromaRange,
    odd_x: bool,
    y_row: &[T],
    chroma: ChromaRow<'_, T>,
    mut dst: RgbRowMut<'_>,
) where
    T: Copy + AsPrimitive<i32>,
{
    let (cb_row, cr_row) = match chroma {
        ChromaRow::Zero => {
            sycc_row_zero_chroma(range, y_row, &mut dst);
            return;
        }
        ChromaRow::Samples { cb, cr } => (cb, cr),
    };

    let start = if odd_x && !y_row.is_empty() {
        store(&mut dst, 0, sycc_to_rgb(range, y_row[0].as_(), 0, 0));
        1
    } else {
        0
    };

    for (pair, (y_pair, (&cb, &cr))) in y_row[start..]
        .chunks(2)
        .zip(cb_row.iter().zip(cr_row.iter()))
        .enumerate()
    {
        let x = start + pair * 2;
        let cb = cb.as_();
        let cr = cr.as_();
        for (i, &y) in y_pair.iter().enumerate() {
            store(&mut dst, x + i, sycc_to_rgb(range, y.as_(), cb, cr));
        }
    }
}

/// Converts one row with a chroma sample for every luma sample
#[inline]
pub(crate) fn sycc_row_h1_to_rgb<T>(
    range: &SyccChromaRange,
    y_row: &[T],
    cb_row: &[T],
    cr_row: &[T],
    dst: RgbRowMut<'_>,
) where
    T: Copy + AsPrimitive<i32>,
{
    for (((((&y, &cb), &cr), r), g), b) in y_row
        .iter()
        .zip(cb_row.iter())
        .zip(cr_row.iter())
        .zip(dst.r.iter_mut())
        .zip(dst.g.iter_mut())
        .zip(dst.b.iter_mut())
    {
        let (r_value, g_value, b_value) = sycc_to_rgb(range, y.as_(), cb.as_(), cr.as_());
        *r = r_value;
        *g = g_value;
        *b = b_value;
    }
}
