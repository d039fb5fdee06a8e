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

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sycc::{
    decode_into_sink, ColorSpace, Component, Image, PackedImage, PixelLayout, SampleByteOrder,
    SamplingFactors,
};

#[derive(Arbitrary, Debug)]
struct Input {
    width: u8,
    height: u8,
    dx: u8,
    dy: u8,
    x0: u8,
    y0: u8,
    precision: u8,
    with_alpha: bool,
    layout: u8,
    samples: Vec<u16>,
}

fn plane(samples: &[u16], len: usize, precision: u32) -> Vec<i32> {
    let max_value = (1u32 << precision) - 1;
    (0..len)
        .map(|i| {
            let v = samples.get(i % samples.len().max(1)).copied().unwrap_or(0);
            (v as u32 & max_value) as i32
        })
        .collect()
}

fuzz_target!(|input: Input| {
    let width = (input.width % 64) as u32;
    let height = (input.height % 64) as u32;
    let factors = SamplingFactors::new((input.dx % 3) as u32 + 1, (input.dy % 3) as u32 + 1);
    let precision = (input.precision % 16) as u32 + 1;

    let chroma_width = width.div_ceil(factors.dx);
    let chroma_height = height.div_ceil(factors.dy);
    let luma_len = width as usize * height as usize;
    let chroma_len = chroma_width as usize * chroma_height as usize;
    let third = input.samples.len() / 3;

    let mut components = vec![
        Component::full_resolution(
            plane(&input.samples, luma_len, precision),
            width,
            height,
            precision,
        )
        .unwrap(),
        Component::new(
            plane(&input.samples[third..], chroma_len, precision),
            chroma_width,
            chroma_height,
            factors,
            precision,
        )
        .unwrap(),
        Component::new(
            plane(&input.samples[third * 2..], chroma_len, precision),
            chroma_width,
            chroma_height,
            factors,
            precision,
        )
        .unwrap(),
    ];
    if input.with_alpha {
        components.push(
            Component::full_resolution(vec![0; luma_len], width, height, precision).unwrap(),
        );
    }
    let mut image =
        Image::new(components, input.x0 as u32, input.y0 as u32, ColorSpace::Sycc).unwrap();
    let before = image.clone();

    let layout = match input.layout % 6 {
        0 => PixelLayout::Rgb8,
        1 => PixelLayout::Rgba8,
        2 => PixelLayout::Bgra8,
        3 => PixelLayout::Argb8,
        4 => PixelLayout::Rgb16(SampleByteOrder::LittleEndian),
        _ => PixelLayout::Rgba16(SampleByteOrder::BigEndian),
    };
    let mut sink = PackedImage::new(width, height, layout).unwrap();

    // 4:4:4, 4:2:2 and 4:2:0 only
    let supported = factors.dy <= factors.dx && factors.dx <= 2;
    match decode_into_sink(&mut image, &mut sink) {
        Ok(()) => {
            assert!(supported);
            assert_eq!(image.color_space(), ColorSpace::Srgb);
        }
        Err(_) => {
            assert!(!supported);
            assert_eq!(image, before);
        }
    }
});
