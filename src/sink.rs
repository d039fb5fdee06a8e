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
use crate::images::{ColorSpace, Component, Image};
use crate::numerics::{load_u16, max_for_depth, rescale, store_u16};
use crate::sycc_error::{check_overflow_v2, check_packed_destination, MismatchedSize};
use crate::SyccError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// Byte order of multi-byte samples in a packed buffer
pub enum SampleByteOrder {
    #[default]
    LittleEndian,
    BigEndian,
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum PixelChannels {
    Rgb = 0,
    Rgba = 1,
    Bgra = 2,
    Argb = 3,
}

impl From<u8> for PixelChannels {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => PixelChannels::Rgb,
            1 => PixelChannels::Rgba,
            2 => PixelChannels::Bgra,
            3 => PixelChannels::Argb,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl PixelChannels {
    #[inline(always)]
    pub(crate) const fn get_channels_count(&self) -> usize {
        match self {
            PixelChannels::Rgb => 3,
            PixelChannels::Rgba | PixelChannels::Bgra | PixelChannels::Argb => 4,
        }
    }

    #[inline(always)]
    pub(crate) const fn has_alpha(&self) -> bool {
        match self {
            PixelChannels::Rgb => false,
            PixelChannels::Rgba | PixelChannels::Bgra | PixelChannels::Argb => true,
        }
    }

    #[inline(always)]
    pub(crate) const fn get_r_channel_offset(&self) -> usize {
        match self {
            PixelChannels::Rgb | PixelChannels::Rgba => 0,
            PixelChannels::Bgra => 2,
            PixelChannels::Argb => 1,
        }
    }

    #[inline(always)]
    pub(crate) const fn get_g_channel_offset(&self) -> usize {
        match self {
            PixelChannels::Rgb | PixelChannels::Rgba | PixelChannels::Bgra => 1,
            PixelChannels::Argb => 2,
        }
    }

    #[inline(always)]
    pub(crate) const fn get_b_channel_offset(&self) -> usize {
        match self {
            PixelChannels::Rgb | PixelChannels::Rgba => 2,
            PixelChannels::Bgra => 0,
            PixelChannels::Argb => 3,
        }
    }

    #[inline(always)]
    pub(crate) const fn get_a_channel_offset(&self) -> usize {
        match self {
            PixelChannels::Rgb => 0,
            PixelChannels::Rgba | PixelChannels::Bgra => 3,
            PixelChannels::Argb => 0,
        }
    }
}

/// Interleaved pixel layout of a host buffer.
///
/// Channel order is given in memory order, 16 bit layouts carry their
/// sample byte order explicitly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    Rgb8,
    Rgba8,
    Bgra8,
    Argb8,
    Rgb16(SampleByteOrder),
    Rgba16(SampleByteOrder),
}

impl PixelLayout {
    /// Layout matching a native `0xAARRGGBB` 32 bit word stored with `order`.
    ///
    /// Little endian hosts keep such words as B, G, R, A bytes, big endian
    /// hosts as A, R, G, B.
    pub const fn packed_argb32(order: SampleByteOrder) -> PixelLayout {
        match order {
            SampleByteOrder::LittleEndian => PixelLayout::Bgra8,
            SampleByteOrder::BigEndian => PixelLayout::Argb8,
        }
    }

    /// Same as [PixelLayout::packed_argb32] for the byte order of the target
    pub const fn native_argb32() -> PixelLayout {
        if cfg!(target_endian = "big") {
            PixelLayout::packed_argb32(SampleByteOrder::BigEndian)
        } else {
            PixelLayout::packed_argb32(SampleByteOrder::LittleEndian)
        }
    }

    pub(crate) const fn channels(&self) -> PixelChannels {
        match self {
            PixelLayout::Rgb8 | PixelLayout::Rgb16(_) => PixelChannels::Rgb,
            PixelLayout::Rgba8 | PixelLayout::Rgba16(_) => PixelChannels::Rgba,
            PixelLayout::Bgra8 => PixelChannels::Bgra,
            PixelLayout::Argb8 => PixelChannels::Argb,
        }
    }

    pub const fn channels_count(&self) -> usize {
        self.channels().get_channels_count()
    }

    pub const fn has_alpha(&self) -> bool {
        self.channels().has_alpha()
    }

    /// Bits per sample, 8 or 16
    pub const fn bit_depth(&self) -> u32 {
        match self {
            PixelLayout::Rgb16(_) | PixelLayout::Rgba16(_) => 16,
            _ => 8,
        }
    }

    pub const fn bytes_per_pixel(&self) -> usize {
        self.channels_count() * (self.bit_depth() as usize / 8)
    }

    pub(crate) const fn byte_order(&self) -> SampleByteOrder {
        match self {
            PixelLayout::Rgb16(order) | PixelLayout::Rgba16(order) => *order,
            _ => SampleByteOrder::LittleEndian,
        }
    }

    pub(crate) fn row_bytes(&self, width: u32) -> Result<usize, SyccError> {
        check_overflow_v2(width as usize, self.bytes_per_pixel())
    }
}

/// Host image buffer receiving packed scanlines.
pub trait PixelSink {
    fn layout(&self) -> PixelLayout;

    /// Width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Receives one packed row of exactly `width * bytes_per_pixel` bytes.
    /// Rows arrive top to bottom, once each.
    fn write_row(&mut self, row_index: u32, bytes: &[u8]) -> Result<(), SyccError>;
}

struct ChannelRow<'a> {
    samples: &'a [i32],
    max_value: u32,
}

struct PackRow<'a> {
    r: ChannelRow<'a>,
    g: ChannelRow<'a>,
    b: ChannelRow<'a>,
    a: Option<ChannelRow<'a>>,
}

fn pack_row8<const CHANNELS: u8>(row: &PackRow, dst: &mut [u8]) {
    let channels: PixelChannels = CHANNELS.into();
    let max_out = max_for_depth(8);
    for (x, px) in dst
        .chunks_exact_mut(channels.get_channels_count())
        .enumerate()
    {
        px[channels.get_r_channel_offset()] = rescale(row.r.samples[x], row.r.max_value, max_out);
        px[channels.get_g_channel_offset()] = rescale(row.g.samples[x], row.g.max_value, max_out);
        px[channels.get_b_channel_offset()] = rescale(row.b.samples[x], row.b.max_value, max_out);
        if channels.has_alpha() {
            px[channels.get_a_channel_offset()] = match &row.a {
                Some(a) => rescale(a.samples[x], a.max_value, max_out),
                None => u8::MAX,
            };
        }
    }
}

fn pack_row16<const CHANNELS: u8, const BIG_ENDIAN: bool>(row: &PackRow, dst: &mut [u8]) {
    let channels: PixelChannels = CHANNELS.into();
    let order = if BIG_ENDIAN {
        SampleByteOrder::BigEndian
    } else {
        SampleByteOrder::LittleEndian
    };
    let max_out = max_for_depth(16);
    for (x, px) in dst
        .chunks_exact_mut(channels.get_channels_count() * 2)
        .enumerate()
    {
        let r: u16 = rescale(row.r.samples[x], row.r.max_value, max_out);
        let g: u16 = rescale(row.g.samples[x], row.g.max_value, max_out);
        let b: u16 = rescale(row.b.samples[x], row.b.max_value, max_out);
        store_u16(&mut px[channels.get_r_channel_offset() * 2..], r, order);
        store_u16(&mut px[channels.get_g_channel_offset() * 2..], g, order);
        store_u16(&mut px[channels.get_b_channel_offset() * 2..], b, order);
        if channels.has_alpha() {
            let a: u16 = match &row.a {
                Some(a) => rescale(a.samples[x], a.max_value, max_out),
                None => u16::MAX,
            };
            store_u16(&mut px[channels.get_a_channel_offset() * 2..], a, order);
        }
    }
}

type RowPacker = fn(&PackRow, &mut [u8]);

fn row_packer(layout: PixelLayout) -> RowPacker {
    match layout {
        PixelLayout::Rgb8 => pack_row8::<{ PixelChannels::Rgb as u8 }>,
        PixelLayout::Rgba8 => pack_row8::<{ PixelChannels::Rgba as u8 }>,
        PixelLayout::Bgra8 => pack_row8::<{ PixelChannels::Bgra as u8 }>,
        PixelLayout::Argb8 => pack_row8::<{ PixelChannels::Argb as u8 }>,
        PixelLayout::Rgb16(SampleByteOrder::LittleEndian) => {
            pack_row16::<{ PixelChannels::Rgb as u8 }, false>
        }
        PixelLayout::Rgb16(SampleByteOrder::BigEndian) => {
            pack_row16::<{ PixelChannels::Rgb as u8 }, true>
        }
        PixelLayout::Rgba16(SampleByteOrder::LittleEndian) => {
            pack_row16::<{ PixelChannels::Rgba as u8 }, false>
        }
        PixelLayout::Rgba16(SampleByteOrder::BigEndian) => {
            pack_row16::<{ PixelChannels::Rgba as u8 }, true>
        }
    }
}

/// Color planes and optional alpha as laid out by the component count
fn plane_roles(components: &[Component]) -> ([&Component; 3], Option<&Component>) {
    match components {
        [gray] => ([gray, gray, gray], None),
        [gray, alpha] => ([gray, gray, gray], Some(alpha)),
        [r, g, b] => ([r, g, b], None),
        [r, g, b, alpha, ..] => ([r, g, b], Some(alpha)),
        [] => unreachable!("Image always holds at least one component"),
    }
}

fn channel_row(component: &Component, y: usize, width: usize) -> ChannelRow<'_> {
    ChannelRow {
        samples: &component.data()[y * width..][..width],
        max_value: max_for_depth(component.precision()),
    }
}

/// Packs a displayable image into `sink`, one scanline per row.
///
/// Gray images are replicated into R, G and B, a missing alpha is written
/// opaque and every sample is rescaled from its component precision to the
/// sample width of the sink layout.
pub fn write_image<S: PixelSink + ?Sized>(image: &Image, sink: &mut S) -> Result<(), SyccError> {
    let components = image.components();
    if image.color_space() == ColorSpace::Sycc && components.len() > 2 {
        return Err(SyccError::NotConverted);
    }

    let width = image.width();
    let height = image.height();
    for (index, component) in components.iter().enumerate().skip(1) {
        if component.width() != width || component.height() != height {
            return Err(SyccError::ComponentSizeMismatch {
                index,
                expected: (width, height),
                received: (component.width(), component.height()),
            });
        }
    }

    let (sink_width, sink_height) = sink.dimensions();
    if (sink_width, sink_height) != (width, height) {
        return Err(SyccError::SinkDimensionsMismatch {
            expected: (width, height),
            received: (sink_width, sink_height),
        });
    }

    let layout = sink.layout();
    tracing::debug!(?layout, width, height, components = components.len(), "packing image");

    let packer = row_packer(layout);
    let mut row_buffer = vec![0u8; layout.row_bytes(width)?];
    let ([r, g, b], alpha) = plane_roles(components);
    let w = width as usize;

    for y in 0..height {
        let row_index = y as usize;
        let row = PackRow {
            r: channel_row(r, row_index, w),
            g: channel_row(g, row_index, w),
            b: channel_row(b, row_index, w),
            a: alpha.map(|a| channel_row(a, row_index, w)),
        };
        packer(&row, &mut row_buffer);
        sink.write_row(y, &row_buffer)?;
    }
    Ok(())
}

/// Converts `image` to RGB when it is tagged sYCC and packs it into `sink`.
///
/// Other tags, xvYCC included, are packed as they are.
pub fn decode_into_sink<S: PixelSink + ?Sized>(
    image: &mut Image,
    sink: &mut S,
) -> Result<(), SyccError> {
    if image.color_space() == ColorSpace::Sycc {
        image.convert_to_rgb()?;
    }
    write_image(image, sink)
}

/// Owned interleaved image, usable as a [PixelSink].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
    layout: PixelLayout,
}

impl PackedImage {
    /// Zeroed image with tightly packed rows
    pub fn new(width: u32, height: u32, layout: PixelLayout) -> Result<Self, SyccError> {
        let stride = layout.row_bytes(width)?;
        PackedImage::with_stride(width, height, stride, layout)
    }

    /// Zeroed image with `stride` bytes per row
    pub fn with_stride(
        width: u32,
        height: u32,
        stride: usize,
        layout: PixelLayout,
    ) -> Result<Self, SyccError> {
        let row_bytes = layout.row_bytes(width)?;
        let full_size = check_overflow_v2(stride, height as usize)?;
        if stride < row_bytes {
            return Err(SyccError::MinimumDestinationSizeMismatch(MismatchedSize {
                expected: check_overflow_v2(row_bytes, height as usize)?,
                received: full_size,
            }));
        }
        Ok(PackedImage {
            data: vec![0u8; full_size],
            width,
            height,
            stride,
            layout,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row, padding included
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Pixel bytes of row `y`, without padding
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let row_bytes = self.width as usize * self.layout.bytes_per_pixel();
        Some(&self.data[y as usize * self.stride..][..row_bytes])
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl PixelSink for PackedImage {
    fn layout(&self) -> PixelLayout {
        self.layout
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn write_row(&mut self, row_index: u32, bytes: &[u8]) -> Result<(), SyccError> {
        if row_index >= self.height {
            return Err(SyccError::RowOutOfBounds(row_index));
        }
        let row_bytes = self.layout.row_bytes(self.width)?;
        if bytes.len() != row_bytes {
            return Err(SyccError::DestinationSizeMismatch(MismatchedSize {
                expected: row_bytes,
                received: bytes.len(),
            }));
        }
        let start = row_index as usize * self.stride;
        self.data[start..start + row_bytes].copy_from_slice(bytes);
        Ok(())
    }
}

fn unpack_rows<const CHANNELS: u8>(
    src: &[u8],
    stride: usize,
    width: usize,
    order: Option<SampleByteOrder>,
    planes: &mut [Vec<i32>],
) {
    let channels: PixelChannels = CHANNELS.into();
    let sample_bytes = if order.is_some() { 2 } else { 1 };
    let pixel_bytes = channels.get_channels_count() * sample_bytes;
    let offsets = [
        channels.get_r_channel_offset(),
        channels.get_g_channel_offset(),
        channels.get_b_channel_offset(),
        channels.get_a_channel_offset(),
    ];
    let load = |px: &[u8], offset: usize| -> i32 {
        match order {
            Some(order) => load_u16(&px[offset * sample_bytes..], order) as i32,
            None => px[offset] as i32,
        }
    };

    for (y, src_row) in src.chunks(stride).enumerate() {
        for (x, px) in src_row[..width * pixel_bytes]
            .chunks_exact(pixel_bytes)
            .enumerate()
        {
            let dst = y * width + x;
            for (plane, &offset) in planes.iter_mut().zip(offsets.iter()) {
                plane[dst] = load(px, offset);
            }
        }
    }
}

impl Image {
    /// Builds a full resolution sRGB image from an interleaved host buffer.
    ///
    /// Produces three components, or four when `layout` has alpha, at
    /// precision 8 or 16 following the layout sample width.
    pub fn from_packed(
        bytes: &[u8],
        width: u32,
        height: u32,
        stride: usize,
        layout: PixelLayout,
    ) -> Result<Image, SyccError> {
        check_packed_destination(bytes, stride, width, height, layout.bytes_per_pixel())?;

        let len = check_overflow_v2(width as usize, height as usize)?;
        let count = if layout.has_alpha() { 4 } else { 3 };
        let mut planes = vec![vec![0i32; len]; count];
        let order = (layout.bit_depth() == 16).then(|| layout.byte_order());

        if len != 0 {
            let w = width as usize;
            match layout.channels() {
                PixelChannels::Rgb => {
                    unpack_rows::<{ PixelChannels::Rgb as u8 }>(bytes, stride, w, order, &mut planes)
                }
                PixelChannels::Rgba => {
                    unpack_rows::<{ PixelChannels::Rgba as u8 }>(bytes, stride, w, order, &mut planes)
                }
                PixelChannels::Bgra => {
                    unpack_rows::<{ PixelChannels::Bgra as u8 }>(bytes, stride, w, order, &mut planes)
                }
                PixelChannels::Argb => {
                    unpack_rows::<{ PixelChannels::Argb as u8 }>(bytes, stride, w, order, &mut planes)
                }
            }
        }

        let precision = layout.bit_depth();
        let components = planes
            .into_iter()
            .map(|plane| Component::full_resolution(plane, width, height, precision))
            .collect::<Result<Vec<_>, _>>()?;
        Image::new(components, 0, 0, ColorSpace::Srgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sycc_support::{get_sycc_range, sycc_to_rgb, SamplingFactors};

    fn rgb_image(r: Vec<i32>, g: Vec<i32>, b: Vec<i32>, width: u32, height: u32, precision: u32) -> Image {
        Image::new(
            vec![
                Component::full_resolution(r, width, height, precision).unwrap(),
                Component::full_resolution(g, width, height, precision).unwrap(),
                Component::full_resolution(b, width, height, precision).unwrap(),
            ],
            0,
            0,
            ColorSpace::Srgb,
        )
        .unwrap()
    }

    #[test]
    fn argb32_follows_byte_order() {
        assert_eq!(
            PixelLayout::packed_argb32(SampleByteOrder::LittleEndian),
            PixelLayout::Bgra8
        );
        assert_eq!(
            PixelLayout::packed_argb32(SampleByteOrder::BigEndian),
            PixelLayout::Argb8
        );

        let image = rgb_image(vec![0x11], vec![0x22], vec![0x33], 1, 1, 8);
        for (order, to_word) in [
            (SampleByteOrder::LittleEndian, u32::from_le_bytes as fn([u8; 4]) -> u32),
            (SampleByteOrder::BigEndian, u32::from_be_bytes as fn([u8; 4]) -> u32),
        ] {
            let mut sink = PackedImage::new(1, 1, PixelLayout::packed_argb32(order)).unwrap();
            write_image(&image, &mut sink).unwrap();
            let bytes: [u8; 4] = sink.data().try_into().unwrap();
            assert_eq!(to_word(bytes), 0xFF112233);
        }

        let native = PixelLayout::native_argb32();
        let mut sink = PackedImage::new(1, 1, native).unwrap();
        write_image(&image, &mut sink).unwrap();
        let bytes: [u8; 4] = sink.data().try_into().unwrap();
        assert_eq!(u32::from_ne_bytes(bytes), 0xFF112233);
    }

    #[test]
    fn channel_orders() {
        let image = rgb_image(vec![1, 4], vec![2, 5], vec![3, 6], 2, 1, 8);
        let cases = [
            (PixelLayout::Rgb8, vec![1, 2, 3, 4, 5, 6]),
            (PixelLayout::Rgba8, vec![1, 2, 3, 255, 4, 5, 6, 255]),
            (PixelLayout::Bgra8, vec![3, 2, 1, 255, 6, 5, 4, 255]),
            (PixelLayout::Argb8, vec![255, 1, 2, 3, 255, 4, 5, 6]),
        ];
        for (layout, expected) in cases {
            let mut sink = PackedImage::new(2, 1, layout).unwrap();
            write_image(&image, &mut sink).unwrap();
            assert_eq!(sink.data(), expected.as_slice(), "{:?}", layout);
        }
    }

    #[test]
    fn gray_is_replicated() {
        let gray = Component::full_resolution(vec![10, 20, 30, 40], 2, 2, 8).unwrap();
        let image = Image::new(vec![gray], 0, 0, ColorSpace::Gray).unwrap();
        let mut sink = PackedImage::new(2, 2, PixelLayout::Rgba8).unwrap();
        write_image(&image, &mut sink).unwrap();
        assert_eq!(sink.row(0).unwrap(), &[10, 10, 10, 255, 20, 20, 20, 255]);
        assert_eq!(sink.row(1).unwrap(), &[30, 30, 30, 255, 40, 40, 40, 255]);
        assert!(sink.row(2).is_none());
    }

    #[test]
    fn gray_alpha_uses_second_component() {
        let gray = Component::full_resolution(vec![100, 200], 2, 1, 8).unwrap();
        let alpha = Component::full_resolution(vec![0, 128], 2, 1, 8).unwrap();
        let image = Image::new(vec![gray, alpha], 0, 0, ColorSpace::Gray).unwrap();
        let mut sink = PackedImage::new(2, 1, PixelLayout::Rgba8).unwrap();
        write_image(&image, &mut sink).unwrap();
        assert_eq!(sink.data(), &[100, 100, 100, 0, 200, 200, 200, 128]);
    }

    #[test]
    fn fourth_component_is_alpha() {
        let mut comps = rgb_image(vec![9], vec![8], vec![7], 1, 1, 8).into_components();
        comps.push(Component::full_resolution(vec![42], 1, 1, 8).unwrap());
        let image = Image::new(comps, 0, 0, ColorSpace::Srgb).unwrap();
        let mut sink = PackedImage::new(1, 1, PixelLayout::Bgra8).unwrap();
        write_image(&image, &mut sink).unwrap();
        assert_eq!(sink.data(), &[7, 8, 9, 42]);

        // alpha is dropped by layouts without it
        let mut sink = PackedImage::new(1, 1, PixelLayout::Rgb8).unwrap();
        write_image(&image, &mut sink).unwrap();
        assert_eq!(sink.data(), &[9, 8, 7]);
    }

    #[test]
    fn samples_are_rescaled_and_clamped() {
        let image = rgb_image(vec![1023, 2000], vec![512, -4], vec![0, 1], 2, 1, 10);
        let mut sink = PackedImage::new(2, 1, PixelLayout::Rgb8).unwrap();
        write_image(&image, &mut sink).unwrap();
        assert_eq!(sink.data(), &[255, 128, 0, 255, 0, 0]);
    }

    #[test]
    fn sixteen_bit_byte_orders() {
        let image = rgb_image(vec![255], vec![0], vec![128], 1, 1, 8);
        let mut le = PackedImage::new(1, 1, PixelLayout::Rgb16(SampleByteOrder::LittleEndian)).unwrap();
        write_image(&image, &mut le).unwrap();
        assert_eq!(le.data(), &[0xFF, 0xFF, 0, 0, 0x80, 0x80]);

        let mut be = PackedImage::new(1, 1, PixelLayout::Rgba16(SampleByteOrder::BigEndian)).unwrap();
        write_image(&image, &mut be).unwrap();
        assert_eq!(be.data(), &[0xFF, 0xFF, 0, 0, 0x80, 0x80, 0xFF, 0xFF]);
    }

    #[test]
    fn padded_stride_keeps_padding() {
        let image = rgb_image(vec![1, 2], vec![3, 4], vec![5, 6], 1, 2, 8);
        let mut sink = PackedImage::with_stride(1, 2, 5, PixelLayout::Rgb8).unwrap();
        write_image(&image, &mut sink).unwrap();
        assert_eq!(sink.stride(), 5);
        assert_eq!(sink.data(), &[1, 3, 5, 0, 0, 2, 4, 6, 0, 0]);
        assert!(matches!(
            PackedImage::with_stride(2, 2, 5, PixelLayout::Rgb8),
            Err(SyccError::MinimumDestinationSizeMismatch(_))
        ));
    }

    #[test]
    fn rejects_unconverted_sycc() {
        let comp = Component::full_resolution(vec![0; 4], 2, 2, 8).unwrap();
        let image = Image::new(vec![comp.clone(), comp.clone(), comp], 0, 0, ColorSpace::Sycc).unwrap();
        let mut sink = PackedImage::new(2, 2, PixelLayout::Rgb8).unwrap();
        assert_eq!(write_image(&image, &mut sink), Err(SyccError::NotConverted));
    }

    #[test]
    fn rejects_subsampled_component() {
        let y = Component::full_resolution(vec![0; 4], 2, 2, 8).unwrap();
        let c = Component::new(vec![0; 1], 1, 1, SamplingFactors::new(2, 2), 8).unwrap();
        let image = Image::new(vec![y, c.clone(), c], 0, 0, ColorSpace::Srgb).unwrap();
        let mut sink = PackedImage::new(2, 2, PixelLayout::Rgb8).unwrap();
        assert_eq!(
            write_image(&image, &mut sink),
            Err(SyccError::ComponentSizeMismatch {
                index: 1,
                expected: (2, 2),
                received: (1, 1),
            })
        );
    }

    #[test]
    fn rejects_sink_of_other_size() {
        let image = rgb_image(vec![0; 4], vec![0; 4], vec![0; 4], 2, 2, 8);
        let mut sink = PackedImage::new(2, 3, PixelLayout::Rgb8).unwrap();
        assert_eq!(
            write_image(&image, &mut sink),
            Err(SyccError::SinkDimensionsMismatch {
                expected: (2, 2),
                received: (2, 3),
            })
        );
    }

    #[test]
    fn sink_rejects_bad_rows() {
        let mut sink = PackedImage::new(2, 1, PixelLayout::Rgb8).unwrap();
        assert_eq!(
            sink.write_row(1, &[0; 6]),
            Err(SyccError::RowOutOfBounds(1))
        );
        assert!(matches!(
            sink.write_row(0, &[0; 4]),
            Err(SyccError::DestinationSizeMismatch(_))
        ));
    }

    #[test]
    fn decode_converts_sycc_first() {
        let factors = SamplingFactors::new(2, 2);
        let mut image = Image::new(
            vec![
                Component::full_resolution(vec![100; 4], 2, 2, 8).unwrap(),
                Component::new(vec![90], 1, 1, factors, 8).unwrap(),
                Component::new(vec![170], 1, 1, factors, 8).unwrap(),
            ],
            0,
            0,
            ColorSpace::Sycc,
        )
        .unwrap();
        let mut sink = PackedImage::new(2, 2, PixelLayout::Rgb8).unwrap();
        decode_into_sink(&mut image, &mut sink).unwrap();
        assert_eq!(image.color_space(), ColorSpace::Srgb);
        let (r, g, b) = sycc_to_rgb(&get_sycc_range(8), 100, 90, 170);
        let expected = [r as u8, g as u8, b as u8].repeat(4);
        assert_eq!(sink.data(), expected.as_slice());
    }

    #[test]
    fn decode_reports_unsupported_sampling() {
        let y = Component::full_resolution(vec![0; 4], 2, 2, 8).unwrap();
        let c = Component::new(vec![0; 2], 2, 1, SamplingFactors::new(1, 2), 8).unwrap();
        let mut image = Image::new(vec![y, c.clone(), c], 0, 0, ColorSpace::Sycc).unwrap();
        let mut sink = PackedImage::new(2, 2, PixelLayout::Rgb8).unwrap();
        let err = decode_into_sink(&mut image, &mut sink).unwrap_err();
        assert!(matches!(err, SyccError::Conversion(_)));
        assert_eq!(image.color_space(), ColorSpace::Sycc);
    }

    #[test]
    fn decode_packs_eycc_as_is() {
        let mut image = rgb_image(vec![1], vec![2], vec![3], 1, 1, 8);
        image.set_color_space(ColorSpace::Eycc);
        let mut sink = PackedImage::new(1, 1, PixelLayout::Rgb8).unwrap();
        decode_into_sink(&mut image, &mut sink).unwrap();
        assert_eq!(image.color_space(), ColorSpace::Eycc);
        assert_eq!(sink.data(), &[1, 2, 3]);
    }

    #[test]
    fn from_packed_deinterleaves() {
        let bytes = [3u8, 2, 1, 200, 0xAA, 6, 5, 4, 100, 0xAA];
        let image = Image::from_packed(&bytes, 1, 2, 5, PixelLayout::Bgra8).unwrap();
        assert_eq!(image.color_space(), ColorSpace::Srgb);
        assert_eq!(image.num_components(), 4);
        assert_eq!(image.components()[0].data(), &[1, 4]);
        assert_eq!(image.components()[1].data(), &[2, 5]);
        assert_eq!(image.components()[2].data(), &[3, 6]);
        assert_eq!(image.components()[3].data(), &[200, 100]);
        assert_eq!(image.components()[0].precision(), 8);
    }

    #[test]
    fn from_packed_sixteen_bit() {
        let bytes = [0x12, 0x34, 0x00, 0x01, 0xFF, 0xFF];
        let image =
            Image::from_packed(&bytes, 1, 1, 6, PixelLayout::Rgb16(SampleByteOrder::BigEndian))
                .unwrap();
        assert_eq!(image.num_components(), 3);
        assert_eq!(image.components()[0].data(), &[0x1234]);
        assert_eq!(image.components()[1].data(), &[1]);
        assert_eq!(image.components()[2].data(), &[0xFFFF]);
        assert_eq!(image.components()[2].precision(), 16);
    }

    #[test]
    fn from_packed_then_write_restores_buffer() {
        let bytes: Vec<u8> = (0..4 * 3 * 4).map(|i| (i * 5) as u8).collect();
        let layout = PixelLayout::Rgba8;
        let image = Image::from_packed(&bytes, 3, 4, 12, layout).unwrap();
        let mut sink = PackedImage::new(3, 4, layout).unwrap();
        write_image(&image, &mut sink).unwrap();
        assert_eq!(sink.into_data(), bytes);
    }

    #[test]
    fn from_packed_checks_buffer() {
        assert!(matches!(
            Image::from_packed(&[0; 5], 2, 1, 5, PixelLayout::Rgb8),
            Err(SyccError::MinimumDestinationSizeMismatch(_))
        ));
        assert!(matches!(
            Image::from_packed(&[0; 5], 1, 2, 3, PixelLayout::Rgb8),
            Err(SyccError::DestinationSizeMismatch(_))
        ));
    }
}
