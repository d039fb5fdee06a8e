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
use crate::sycc_support::{SamplingFactors, SamplingPattern, SyccChromaSample};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Failure of the in-place sYCC to RGB reclassification.
///
/// Neither kind mutates the image, so the caller is free to fall back to
/// another interpretation or to retry.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ConversionError {
    /// Chroma layout is none of 4:2:0, 4:2:2 or 4:4:4, or chroma planes
    /// don't have the dimensions their subsampling implies.
    UnsupportedSamplingPattern(SamplingPattern),
    /// Output plane of this many samples could not be allocated.
    AllocationFailed(usize),
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnsupportedSamplingPattern(pattern) => f.write_fmt(format_args!(
                "Cannot convert sYCC with sampling Y {}, Cb {}, Cr {}",
                pattern.luma, pattern.cb, pattern.cr
            )),
            ConversionError::AllocationFailed(samples) => f.write_fmt(format_args!(
                "Failed to allocate output plane of {} samples",
                samples
            )),
        }
    }
}

impl Error for ConversionError {}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SyccError {
    PlaneSizeMismatch(MismatchedSize),
    PlaneMinimumSizeMismatch(MismatchedSize),
    DestinationSizeMismatch(MismatchedSize),
    MinimumDestinationSizeMismatch(MismatchedSize),
    PointerOverflow,
    InvalidPrecision(u32),
    InvalidSubsampling(SamplingFactors),
    InvalidComponentCount(usize),
    ComponentSizeMismatch {
        index: usize,
        expected: (u32, u32),
        received: (u32, u32),
    },
    SinkDimensionsMismatch {
        expected: (u32, u32),
        received: (u32, u32),
    },
    RowOutOfBounds(u32),
    NotConverted,
    Conversion(ConversionError),
    /// Reported by [crate::PixelSink] implementations backed by a host buffer
    Sink(String),
}

impl Display for SyccError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SyccError::PlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Plane have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            SyccError::PlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            SyccError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            SyccError::MinimumDestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
            SyccError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            SyccError::InvalidPrecision(precision) => f.write_fmt(format_args!(
                "Precision must be in 1..=16 bits, but it was {}",
                precision
            )),
            SyccError::InvalidSubsampling(factors) => {
                f.write_fmt(format_args!("Invalid subsampling factors {}", factors))
            }
            SyccError::InvalidComponentCount(count) => f.write_fmt(format_args!(
                "Image must have 1 to 4 components, but it has {}",
                count
            )),
            SyccError::ComponentSizeMismatch {
                index,
                expected,
                received,
            } => f.write_fmt(format_args!(
                "Component {} is {}x{}, expected {}x{}",
                index, received.0, received.1, expected.0, expected.1
            )),
            SyccError::SinkDimensionsMismatch { expected, received } => f.write_fmt(format_args!(
                "Sink is {}x{}, but image is {}x{}",
                received.0, received.1, expected.0, expected.1
            )),
            SyccError::RowOutOfBounds(row) => {
                f.write_fmt(format_args!("Row {} is out of sink bounds", row))
            }
            SyccError::NotConverted => f.write_str("Image is still sYCC and must be converted first"),
            SyccError::Conversion(err) => Display::fmt(err, f),
            SyccError::Sink(message) => f.write_fmt(format_args!("Pixel sink failed: {}", message)),
        }
    }
}

impl Error for SyccError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SyccError::Conversion(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConversionError> for SyccError {
    fn from(value: ConversionError) -> Self {
        SyccError::Conversion(value)
    }
}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, SyccError> {
    v0.checked_mul(v1).ok_or(SyccError::PointerOverflow)
}

#[inline]
pub(crate) fn check_precision(precision: u32) -> Result<(), SyccError> {
    if !(1..=16).contains(&precision) {
        return Err(SyccError::InvalidPrecision(precision));
    }
    Ok(())
}

/// Checks a full resolution plane, source or destination.
#[inline]
pub(crate) fn check_plane<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), SyccError> {
    let full_size = check_overflow_v2(stride as usize, height as usize)?;
    let min_size = check_overflow_v2(width as usize, height as usize)?;
    if full_size < min_size {
        return Err(SyccError::PlaneMinimumSizeMismatch(MismatchedSize {
            expected: min_size,
            received: full_size,
        }));
    }
    if full_size != data.len() {
        return Err(SyccError::PlaneSizeMismatch(MismatchedSize {
            expected: full_size,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_chroma_plane<V>(
    data: &[V],
    stride: u32,
    image_width: u32,
    image_height: u32,
    sampling: SyccChromaSample,
) -> Result<(), SyccError> {
    check_plane(
        data,
        stride,
        sampling.chroma_width(image_width),
        sampling.chroma_height(image_height),
    )
}

#[inline]
pub(crate) fn check_packed_destination(
    arr: &[u8],
    stride: usize,
    width: u32,
    height: u32,
    bytes_per_pixel: usize,
) -> Result<(), SyccError> {
    let row_bytes = check_overflow_v2(width as usize, bytes_per_pixel)?;
    let full_size = check_overflow_v2(stride, height as usize)?;
    if arr.len() != full_size {
        return Err(SyccError::DestinationSizeMismatch(MismatchedSize {
            expected: full_size,
            received: arr.len(),
        }));
    }
    if stride < row_bytes {
        return Err(SyccError::MinimumDestinationSizeMismatch(MismatchedSize {
            expected: check_overflow_v2(row_bytes, height as usize)?,
            received: full_size,
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_checks_report_exact_sizes() {
        let data = vec![0i32; 12];
        assert!(check_plane(&data, 4, 4, 3).is_ok());
        assert_eq!(
            check_plane(&data, 4, 4, 4),
            Err(SyccError::PlaneSizeMismatch(MismatchedSize {
                expected: 16,
                received: 12
            }))
        );
        assert_eq!(
            check_plane(&data, 3, 4, 4),
            Err(SyccError::PlaneMinimumSizeMismatch(MismatchedSize {
                expected: 16,
                received: 12
            }))
        );
    }

    #[test]
    fn chroma_plane_uses_rounded_up_dimensions() {
        let data = vec![0u8; 3 * 2];
        assert!(check_chroma_plane(&data, 3, 5, 3, SyccChromaSample::Sycc420).is_ok());
        assert!(check_chroma_plane(&data, 3, 5, 3, SyccChromaSample::Sycc422).is_err());
    }

    #[test]
    fn precision_range() {
        assert!(check_precision(1).is_ok());
        assert!(check_precision(16).is_ok());
        assert_eq!(check_precision(0), Err(SyccError::InvalidPrecision(0)));
        assert_eq!(check_precision(17), Err(SyccError::InvalidPrecision(17)));
    }

    #[test]
    fn overflow_is_detected() {
        assert_eq!(
            check_overflow_v2(usize::MAX, 2),
            Err(SyccError::PointerOverflow)
        );
        assert_eq!(check_overflow_v2(3, 4), Ok(12));
    }

    #[test]
    fn conversion_error_is_source_of_sycc_error() {
        let err: SyccError = ConversionError::AllocationFailed(10).into();
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "Failed to allocate output plane of 10 samples"
        );
    }
}
