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
use crate::numerics::{clamp_sample, mul_trunc};
use std::fmt::{Display, Formatter};

/// Red contribution of Cr.
pub(crate) const CR_R: f64 = 1.402;
/// Green contribution of Cb.
pub(crate) const CB_G: f64 = 0.344;
/// Green contribution of Cr.
pub(crate) const CR_G: f64 = 0.714;
/// Blue contribution of Cb.
pub(crate) const CB_B: f64 = 1.772;

/// Horizontal and vertical subsampling factors of a component relative to the reference grid
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SamplingFactors {
    pub dx: u32,
    pub dy: u32,
}

impl SamplingFactors {
    /// Component sampled on every grid position
    pub const FULL: SamplingFactors = SamplingFactors { dx: 1, dy: 1 };

    pub const fn new(dx: u32, dy: u32) -> Self {
        SamplingFactors { dx, dy }
    }
}

impl Default for SamplingFactors {
    fn default() -> Self {
        SamplingFactors::FULL
    }
}

impl Display for SamplingFactors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.dx, self.dy))
    }
}

/// Subsampling factors of luma and both chroma components of an image
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SamplingPattern {
    pub luma: SamplingFactors,
    pub cb: SamplingFactors,
    pub cr: SamplingFactors,
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Declares chroma subsampling of a planar sYCC image
pub enum SyccChromaSample {
    /// Chroma halved horizontally and vertically
    Sycc420 = 0,
    /// Chroma halved horizontally only
    Sycc422 = 1,
    /// No chroma subsampling
    Sycc444 = 2,
}

impl SyccChromaSample {
    /// Recognizes one of the supported ratios.
    ///
    /// Luma must be sampled on every grid position and both chroma components
    /// must share their factors, anything else is not a ratio we know how to
    /// reconstruct.
    pub const fn from_pattern(pattern: &SamplingPattern) -> Option<SyccChromaSample> {
        if pattern.luma.dx != 1
            || pattern.luma.dy != 1
            || pattern.cb.dx != pattern.cr.dx
            || pattern.cb.dy != pattern.cr.dy
        {
            return None;
        }
        match (pattern.cb.dx, pattern.cb.dy) {
            (2, 2) => Some(SyccChromaSample::Sycc420),
            (2, 1) => Some(SyccChromaSample::Sycc422),
            (1, 1) => Some(SyccChromaSample::Sycc444),
            _ => None,
        }
    }

    pub const fn factors(&self) -> SamplingFactors {
        match self {
            SyccChromaSample::Sycc420 => SamplingFactors::new(2, 2),
            SyccChromaSample::Sycc422 => SamplingFactors::new(2, 1),
            SyccChromaSample::Sycc444 => SamplingFactors::FULL,
        }
    }

    #[inline]
    pub const fn chroma_width(&self, width: u32) -> u32 {
        match self {
            SyccChromaSample::Sycc420 | SyccChromaSample::Sycc422 => width.div_ceil(2),
            SyccChromaSample::Sycc444 => width,
        }
    }

    #[inline]
    pub const fn chroma_height(&self, height: u32) -> u32 {
        match self {
            SyccChromaSample::Sycc420 => height.div_ceil(2),
            SyccChromaSample::Sycc422 | SyccChromaSample::Sycc444 => height,
        }
    }
}

impl Display for SyccChromaSample {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SyccChromaSample::Sycc420 => f.write_str("4:2:0"),
            SyccChromaSample::Sycc422 => f.write_str("4:2:2"),
            SyccChromaSample::Sycc444 => f.write_str("4:4:4"),
        }
    }
}

/// Phase of the image origin on the subsampling grid.
///
/// Chroma blocks are aligned to the encoder's coordinate origin, so an odd
/// `x0` leaves the first column without a chroma sample of its own, and an
/// odd `y0` does the same for the first row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct OriginPhase {
    pub odd_x: bool,
    pub odd_y: bool,
}

impl OriginPhase {
    pub const fn from_origin(x0: u32, y0: u32) -> Self {
        OriginPhase {
            odd_x: x0 & 1 != 0,
            odd_y: y0 & 1 != 0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SyccChromaRange {
    /// Neutral chroma value, `1 << (precision - 1)`
    pub bias_uv: i32,
    /// Largest representable sample, `(1 << precision) - 1`
    pub max_value: i32,
    pub precision: u32,
}

/// Range for the given precision, which must be in `1..=16`.
pub const fn get_sycc_range(precision: u32) -> SyccChromaRange {
    SyccChromaRange {
        bias_uv: 1 << (precision - 1),
        max_value: (1 << precision) - 1,
        precision,
    }
}

/// Converts a single sYCC sample to RGB.
///
/// Chroma contributions are truncated toward zero after the multiply, green
/// once for the sum of both terms, and the result is clamped to `[0, max_value]`.
#[inline(always)]
pub fn sycc_to_rgb(range: &SyccChromaRange, y: i32, cb: i32, cr: i32) -> (i32, i32, i32) {
    let cb = cb.saturating_sub(range.bias_uv);
    let cr = cr.saturating_sub(range.bias_uv);

    let r = y.saturating_add(mul_trunc(CR_R, cr));
    let g = y.saturating_sub((CB_G * cb as f64 + CR_G * cr as f64) as i32);
    let b = y.saturating_add(mul_trunc(CB_B, cb));

    (
        clamp_sample(r, range.max_value),
        clamp_sample(g, range.max_value),
        clamp_sample(b, range.max_value),
    )
}
