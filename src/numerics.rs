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
#![forbid(unsafe_code)]
use crate::sink::SampleByteOrder;
use num_traits::AsPrimitive;

#[inline(always)]
/// Clamps sample into `[0, max_value]`
pub(crate) fn clamp_sample(val: i32, max_value: i32) -> i32 {
    val.min(max_value).max(0)
}

#[inline(always)]
/// Multiplies by a coefficient in double precision and truncates toward zero
pub(crate) fn mul_trunc(coeff: f64, val: i32) -> i32 {
    (coeff * val as f64) as i32
}

#[inline]
/// Largest sample value for the bit depth
pub(crate) const fn max_for_depth(depth: u32) -> u32 {
    (1u32 << depth) - 1
}

#[inline]
/// Rescales a sample from `[0, max_in]` to `[0, max_out]` rounding to nearest,
/// out of range input is clamped first
pub(crate) fn rescale<V>(val: i32, max_in: u32, max_out: u32) -> V
where
    V: Copy + 'static,
    u32: AsPrimitive<V>,
{
    let v = val.clamp(0, max_in as i32) as u32;
    if max_in == max_out {
        return v.as_();
    }
    let scaled = (v as u64 * max_out as u64 + (max_in as u64 >> 1)) / max_in as u64;
    (scaled as u32).as_()
}

#[inline(always)]
/// Stores 16 bit sample with requested byte order
pub(crate) fn store_u16(dst: &mut [u8], v: u16, order: SampleByteOrder) {
    let bytes = match order {
        SampleByteOrder::LittleEndian => v.to_le_bytes(),
        SampleByteOrder::BigEndian => v.to_be_bytes(),
    };
    dst[..2].copy_from_slice(&bytes);
}

#[inline(always)]
/// Loads 16 bit sample with requested byte order
pub(crate) fn load_u16(src: &[u8], order: SampleByteOrder) -> u16 {
    let bytes = [src[0], src[1]];
    match order {
        SampleByteOrder::LittleEndian => u16::from_le_bytes(bytes),
        SampleByteOrder::BigEndian => u16::from_be_bytes(bytes),
    }
}
