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
use crate::images::{ColorSpace, Image};
use crate::internals::RgbPlanes;
use crate::sycc420_to_rgb::sycc420_to_rgb;
use crate::sycc422_to_rgb::sycc422_to_rgb;
use crate::sycc444_to_rgb::sycc444_to_rgb;
use crate::sycc_support::{SamplingPattern, SyccChromaSample};
use crate::ConversionError;

fn sampling_pattern(image: &Image) -> SamplingPattern {
    let components = image.components();
    SamplingPattern {
        luma: components[0].factors(),
        cb: components[1].factors(),
        cr: components[2].factors(),
    }
}

/// Resolves the ratio and checks chroma planes have the size it implies
fn validate_layout(image: &Image) -> Result<SyccChromaSample, ConversionError> {
    let pattern = sampling_pattern(image);
    let unsupported = ConversionError::UnsupportedSamplingPattern(pattern);

    let sampling = SyccChromaSample::from_pattern(&pattern).ok_or(unsupported)?;

    let components = image.components();
    let (y, cb, cr) = (&components[0], &components[1], &components[2]);
    if cb.precision() != cr.precision() {
        return Err(unsupported);
    }
    let chroma_width = sampling.chroma_width(y.width());
    let chroma_height = sampling.chroma_height(y.height());
    for chroma in [cb, cr] {
        if chroma.width() != chroma_width || chroma.height() != chroma_height {
            return Err(unsupported);
        }
    }
    Ok(sampling)
}

fn build_rgb_planes(image: &Image, sampling: SyccChromaSample) -> Result<RgbPlanes, ConversionError> {
    let unsupported = ConversionError::UnsupportedSamplingPattern(sampling_pattern(image));
    let precision = image.components()[0].precision();
    let planar_image = image.sycc_view().ok_or(unsupported)?;

    let mut planes = RgbPlanes::alloc(image.width(), image.height())?;
    let mut rgb = planes.as_planar_mut();

    // Plane sizes were checked by `validate_layout`, a failure here still
    // means the layout is not one we can reconstruct.
    match sampling {
        SyccChromaSample::Sycc420 => {
            sycc420_to_rgb(&planar_image, &mut rgb, precision, image.origin_phase())
        }
        SyccChromaSample::Sycc422 => {
            sycc422_to_rgb(&planar_image, &mut rgb, precision, image.origin_phase())
        }
        SyccChromaSample::Sycc444 => sycc444_to_rgb(&planar_image, &mut rgb, precision),
    }
    .map_err(|_| unsupported)?;

    Ok(planes)
}

/// Converts an sYCC image into full resolution RGB, in place.
///
/// Images with fewer than three components are already displayable, they
/// are only tagged [ColorSpace::Gray]. Otherwise the chroma layout must be
/// 4:2:0, 4:2:2 or 4:4:4 relative to a fully sampled luma.
///
/// On success the first three components hold R, G and B at the luma
/// resolution and precision, their subsampling factors are reset to 1 and the
/// image is tagged [ColorSpace::Srgb]. Previous planes are dropped, components
/// past the third are left as they are.
///
/// On error the image is left exactly as it was.
pub fn color_sycc_to_rgb(image: &mut Image) -> Result<(), ConversionError> {
    if image.num_components() < 3 {
        image.set_color_space(ColorSpace::Gray);
        return Ok(());
    }

    let sampling = validate_layout(image).inspect_err(|err| {
        tracing::warn!(%err, "cannot convert sYCC image");
    })?;

    let width = image.width();
    let height = image.height();
    let precision = image.components()[0].precision();
    tracing::debug!(%sampling, width, height, precision, "converting sYCC to RGB");

    let planes = build_rgb_planes(image, sampling).inspect_err(|err| {
        tracing::warn!(%err, %sampling, width, height, "sYCC to RGB conversion failed");
    })?;

    let RgbPlanes { r, g, b, .. } = planes;
    let components = image.components_mut();
    for (component, plane) in components.iter_mut().zip([r, g, b]) {
        component.install_plane(plane, width, height, precision);
    }
    image.set_color_space(ColorSpace::Srgb);
    Ok(())
}
