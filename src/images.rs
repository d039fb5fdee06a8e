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
use crate::sycc_error::{check_chroma_plane, check_overflow_v2, check_plane, check_precision};
use crate::sycc_support::{OriginPhase, SamplingFactors, SyccChromaSample};
use crate::SyccError;
use std::fmt::Debug;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// Color space tag carried by a decoded image
pub enum ColorSpace {
    #[default]
    Unspecified,
    Srgb,
    Gray,
    /// YCbCr family, converted by [crate::color_sycc_to_rgb]
    Sycc,
    /// xvYCC
    Eycc,
    Cmyk,
}

/// One plane of a decoded image.
///
/// Samples are dense and row major, `width` and `height` are counted in
/// samples of this plane, which differ from the image size when the
/// component is subsampled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    data: Vec<i32>,
    width: u32,
    height: u32,
    factors: SamplingFactors,
    precision: u32,
}

impl Component {
    pub fn new(
        data: Vec<i32>,
        width: u32,
        height: u32,
        factors: SamplingFactors,
        precision: u32,
    ) -> Result<Self, SyccError> {
        if factors.dx == 0 || factors.dy == 0 {
            return Err(SyccError::InvalidSubsampling(factors));
        }
        check_precision(precision)?;
        check_plane(&data, width, width, height)?;
        Ok(Component {
            data,
            width,
            height,
            factors,
            precision,
        })
    }

    /// Component sampled on every grid position
    pub fn full_resolution(
        data: Vec<i32>,
        width: u32,
        height: u32,
        precision: u32,
    ) -> Result<Self, SyccError> {
        Component::new(data, width, height, SamplingFactors::FULL, precision)
    }

    pub fn data(&self) -> &[i32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<i32> {
        self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dx(&self) -> u32 {
        self.factors.dx
    }

    pub fn dy(&self) -> u32 {
        self.factors.dy
    }

    pub fn factors(&self) -> SamplingFactors {
        self.factors
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Installs a full resolution plane, the old one is dropped.
    pub(crate) fn install_plane(&mut self, data: Vec<i32>, width: u32, height: u32, precision: u32) {
        self.data = data;
        self.width = width;
        self.height = height;
        self.factors = SamplingFactors::FULL;
        self.precision = precision;
    }
}

/// Decoded planar image as handed over by a codec.
///
/// Holds 1 (gray), 2 (gray + alpha), 3 (color) or 4 (color + alpha)
/// components. Only the first three ever take part in color conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    components: Vec<Component>,
    x0: u32,
    y0: u32,
    color_space: ColorSpace,
}

impl Image {
    pub fn new(
        components: Vec<Component>,
        x0: u32,
        y0: u32,
        color_space: ColorSpace,
    ) -> Result<Self, SyccError> {
        if components.is_empty() || components.len() > 4 {
            return Err(SyccError::InvalidComponentCount(components.len()));
        }
        Ok(Image {
            components,
            x0,
            y0,
            color_space,
        })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut [Component] {
        &mut self.components
    }

    pub fn component(&self, index: usize) -> Option<&Component> {
        self.components.get(index)
    }

    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }

    /// Width of the reference grid, i.e. of the first component
    pub fn width(&self) -> u32 {
        self.components[0].width
    }

    /// Height of the reference grid, i.e. of the first component
    pub fn height(&self) -> u32 {
        self.components[0].height
    }

    pub fn x0(&self) -> u32 {
        self.x0
    }

    pub fn y0(&self) -> u32 {
        self.y0
    }

    pub fn origin_phase(&self) -> OriginPhase {
        OriginPhase::from_origin(self.x0, self.y0)
    }

    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    pub fn set_color_space(&mut self, color_space: ColorSpace) {
        self.color_space = color_space;
    }

    /// Converts sYCC components into full resolution RGB in place,
    /// see [crate::color_sycc_to_rgb].
    pub fn convert_to_rgb(&mut self) -> Result<(), crate::ConversionError> {
        crate::converter::color_sycc_to_rgb(self)
    }

    /// Borrows luma and chroma planes of a color image
    pub(crate) fn sycc_view(&self) -> Option<SyccPlanarImage<'_, i32>> {
        match self.components.as_slice() {
            [y, cb, cr, ..] => Some(SyccPlanarImage {
                y_plane: &y.data,
                y_stride: y.width,
                cb_plane: &cb.data,
                cb_stride: cb.width,
                cr_plane: &cr.data,
                cr_stride: cr.width,
                width: y.width,
                height: y.height,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Borrowed planar sYCC image
pub struct SyccPlanarImage<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub cb_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub cb_stride: u32,
    pub cr_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub cr_stride: u32,
    /// Luma width, chroma width is derived from subsampling
    pub width: u32,
    /// Luma height, chroma height is derived from subsampling
    pub height: u32,
}

impl<T> SyccPlanarImage<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self, subsampling: SyccChromaSample) -> Result<(), SyccError> {
        check_plane(self.y_plane, self.y_stride, self.width, self.height)?;
        check_chroma_plane(
            self.cb_plane,
            self.cb_stride,
            self.width,
            self.height,
            subsampling,
        )?;
        check_chroma_plane(
            self.cr_plane,
            self.cr_stride,
            self.width,
            self.height,
            subsampling,
        )?;
        Ok(())
    }
}

#[derive(Debug)]
/// Mutable full resolution planar RGB destination
pub struct RgbPlanarImageMut<'a> {
    pub r_plane: &'a mut [i32],
    /// Stride here always means Elements per row.
    pub r_stride: u32,
    pub g_plane: &'a mut [i32],
    /// Stride here always means Elements per row.
    pub g_stride: u32,
    pub b_plane: &'a mut [i32],
    /// Stride here always means Elements per row.
    pub b_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl RgbPlanarImageMut<'_> {
    pub fn check_constraints(&self) -> Result<(), SyccError> {
        check_plane(self.r_plane, self.r_stride, self.width, self.height)?;
        check_plane(self.g_plane, self.g_stride, self.width, self.height)?;
        check_plane(self.b_plane, self.b_stride, self.width, self.height)?;
        Ok(())
    }

    /// Destination must cover exactly the source raster
    pub(crate) fn check_matches<T: Copy + Debug>(
        &self,
        source: &SyccPlanarImage<'_, T>,
    ) -> Result<(), SyccError> {
        self.check_constraints()?;
        if self.width != source.width || self.height != source.height {
            return Err(SyccError::DestinationSizeMismatch(
                crate::sycc_error::MismatchedSize {
                    expected: check_overflow_v2(source.width as usize, source.height as usize)?,
                    received: check_overflow_v2(self.width as usize, self.height as usize)?,
                },
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_validates_buffer() {
        assert!(Component::full_resolution(vec![0; 6], 3, 2, 8).is_ok());
        assert!(matches!(
            Component::full_resolution(vec![0; 5], 3, 2, 8),
            Err(SyccError::PlaneSizeMismatch(_))
        ));
        assert_eq!(
            Component::full_resolution(vec![0; 6], 3, 2, 0),
            Err(SyccError::InvalidPrecision(0))
        );
        assert_eq!(
            Component::new(vec![0; 6], 3, 2, SamplingFactors::new(0, 1), 8),
            Err(SyccError::InvalidSubsampling(SamplingFactors::new(0, 1)))
        );
    }

    #[test]
    fn image_component_count() {
        let gray = Component::full_resolution(vec![0; 4], 2, 2, 8).unwrap();
        assert_eq!(
            Image::new(vec![], 0, 0, ColorSpace::Gray),
            Err(SyccError::InvalidComponentCount(0))
        );
        assert_eq!(
            Image::new(vec![gray.clone(); 5], 0, 0, ColorSpace::Srgb),
            Err(SyccError::InvalidComponentCount(5))
        );
        let image = Image::new(vec![gray; 2], 3, 0, ColorSpace::Gray).unwrap();
        assert_eq!(image.num_components(), 2);
        assert_eq!((image.width(), image.height()), (2, 2));
        assert!(image.origin_phase().odd_x);
        assert!(image.sycc_view().is_none());
    }

    #[test]
    fn planar_view_checks_chroma() {
        let y = vec![0u8; 5 * 3];
        let c = vec![0u8; 3 * 2];
        let image = SyccPlanarImage {
            y_plane: &y,
            y_stride: 5,
            cb_plane: &c,
            cb_stride: 3,
            cr_plane: &c,
            cr_stride: 3,
            width: 5,
            height: 3,
        };
        assert!(image.check_constraints(SyccChromaSample::Sycc420).is_ok());
        assert!(image.check_constraints(SyccChromaSample::Sycc444).is_err());
    }
}
