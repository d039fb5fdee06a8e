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
//! sYCC chroma upsampling and color conversion for decoded planar images.
//!
//! A codec hands over an [Image] whose chroma planes may be stored at half
//! resolution. [color_sycc_to_rgb] replaces the luma and chroma planes in
//! place with full resolution R, G and B planes, [write_image] then packs the
//! result into any [PixelSink].
//!
//! The per ratio routines [sycc420_to_rgb], [sycc422_to_rgb] and
//! [sycc444_to_rgb] work directly on borrowed planes and can be used without
//! an [Image].
//!
//! # Features
//!
//! * `rayon` splits the per ratio routines by rows across the rayon pool, the
//!   output is identical to the single threaded one.
mod converter;
mod images;
mod internals;
mod numerics;
mod sink;
mod sycc420_to_rgb;
mod sycc422_to_rgb;
mod sycc444_to_rgb;
mod sycc_error;
mod sycc_row;
mod sycc_support;

pub use converter::color_sycc_to_rgb;

pub use images::{ColorSpace, Component, Image, RgbPlanarImageMut, SyccPlanarImage};

pub use sycc_error::{ConversionError, MismatchedSize, SyccError};

pub use sycc_support::{
    get_sycc_range, sycc_to_rgb, OriginPhase, SamplingFactors, SamplingPattern,
    SyccChromaRange, SyccChromaSample,
};

pub use sycc420_to_rgb::sycc420_to_rgb;
pub use sycc422_to_rgb::sycc422_to_rgb;
pub use sycc444_to_rgb::sycc444_to_rgb;

pub use sink::{
    decode_into_sink, write_image, PackedImage, PixelLayout, PixelSink, SampleByteOrder,
};
