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

use libfuzzer_sys::fuzz_target;
use sycc::{
    sycc420_to_rgb, sycc422_to_rgb, sycc444_to_rgb, OriginPhase, RgbPlanarImageMut,
    SyccPlanarImage,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8, u8)| {
    let precision = (data.5 % 16) as u32 + 1;
    let phase = OriginPhase::from_origin(data.6 as u32, (data.6 >> 1) as u32);
    fuzz_sycc(data.0, data.1, data.2, data.3, data.4, precision, phase, 2, 2);
    fuzz_sycc(data.0, data.1, data.2, data.3, data.4, precision, phase, 2, 1);
    fuzz_sycc(data.0, data.1, data.2, data.3, data.4, precision, phase, 1, 1);
});

#[allow(clippy::too_many_arguments)]
fn fuzz_sycc(
    i_width: u8,
    i_height: u8,
    y_value: u8,
    cb_value: u8,
    cr_value: u8,
    precision: u32,
    phase: OriginPhase,
    dx: u32,
    dy: u32,
) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let width = i_width as u32;
    let height = i_height as u32;
    let chroma_width = width.div_ceil(dx);
    let chroma_height = height.div_ceil(dy);

    let scale = |v: u8| (v as u16) << precision.saturating_sub(8);
    let y_plane = vec![scale(y_value); width as usize * height as usize];
    let cb_plane = vec![scale(cb_value); chroma_width as usize * chroma_height as usize];
    let cr_plane = vec![scale(cr_value); chroma_width as usize * chroma_height as usize];

    let planar_image = SyccPlanarImage {
        y_plane: &y_plane,
        y_stride: width,
        cb_plane: &cb_plane,
        cb_stride: chroma_width,
        cr_plane: &cr_plane,
        cr_stride: chroma_width,
        width,
        height,
    };

    let len = width as usize * height as usize;
    let mut r = vec![0i32; len];
    let mut g = vec![0i32; len];
    let mut b = vec![0i32; len];
    let mut rgb = RgbPlanarImageMut {
        r_plane: &mut r,
        r_stride: width,
        g_plane: &mut g,
        g_stride: width,
        b_plane: &mut b,
        b_stride: width,
        width,
        height,
    };

    match (dx, dy) {
        (2, 2) => sycc420_to_rgb(&planar_image, &mut rgb, precision, phase).unwrap(),
        (2, 1) => sycc422_to_rgb(&planar_image, &mut rgb, precision, phase).unwrap(),
        _ => sycc444_to_rgb(&planar_image, &mut rgb, precision).unwrap(),
    }

    let max_value = (1i32 << precision) - 1;
    for plane in [&r, &g, &b] {
        assert!(plane.iter().all(|&v| (0..=max_value).contains(&v)));
    }
}
