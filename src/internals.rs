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
use crate::images::RgbPlanarImageMut;
use crate::ConversionError;

/// Owned full resolution output, built completely before anything is swapped
/// into the image. Dropping it releases whatever was allocated.
pub(crate) struct RgbPlanes {
    pub(crate) r: Vec<i32>,
    pub(crate) g: Vec<i32>,
    pub(crate) b: Vec<i32>,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

fn alloc_plane(len: usize) -> Result<Vec<i32>, ConversionError> {
    let mut plane = Vec::new();
    plane
        .try_reserve_exact(len)
        .map_err(|_| ConversionError::AllocationFailed(len))?;
    plane.resize(len, 0);
    Ok(plane)
}

impl RgbPlanes {
    pub(crate) fn alloc(width: u32, height: u32) -> Result<Self, ConversionError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(ConversionError::AllocationFailed(usize::MAX))?;
        Ok(RgbPlanes {
            r: alloc_plane(len)?,
            g: alloc_plane(len)?,
            b: alloc_plane(len)?,
            width,
            height,
        })
    }

    pub(crate) fn as_planar_mut(&mut self) -> RgbPlanarImageMut<'_> {
        RgbPlanarImageMut {
            r_plane: &mut self.r,
            r_stride: self.width,
            g_plane: &mut self.g,
            g_stride: self.width,
            b_plane: &mut self.b,
            b_stride: self.width,
            width: self.width,
            height: self.height,
        }
    }
}
