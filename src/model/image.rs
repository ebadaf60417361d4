// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Image, our basic processing object.

use std::fmt::{self, Debug, Display, Formatter};

use ndarray::{ArrayD, ArrayViewMutD};

use crate::config::consts::UNDEFINED_ORIGIN;
use crate::errors::{AlsError, AlsResult, ErrorDetails};

/// Element types an [`Image`] can hold, with the dtype name used in diagnostics.
pub trait PixelType: Clone + Debug + 'static {
    const DTYPE_NAME: &'static str;
}

macro_rules! pixel_type {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl PixelType for $ty {
                const DTYPE_NAME: &'static str = $name;
            }
        )*
    };
}

pixel_type! {
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    i16 => "int16",
    i32 => "int32",
    f32 => "float32",
    f64 => "float64",
}

/// An image and the metadata the processing pipeline needs about it.
///
/// Data is laid out as `(height, width)` for monochrome frames and
/// `(height, width, channels)` for color ones. The element type is whatever
/// the producer used; it is never converted here.
///
/// The bayer pattern is `None` for sensors without a color filter array and
/// for images that have already been debayered. Its values are kept verbatim.
///
/// # Example
/// ```
/// use als_core::model::Image;
/// use ndarray::{ArrayD, IxDyn};
///
/// let mut image = Image::new(ArrayD::<u16>::zeros(IxDyn(&[480, 640]))).unwrap();
/// image.set_bayer_pattern(Some("RGGB".to_string()));
/// image.set_origin("/captures/light_0001.fit");
///
/// assert!(!image.is_color());
/// assert!(image.needs_debayering());
/// assert_eq!((image.width(), image.height()), (640, 480));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Image<A: PixelType = f32> {
    data: ArrayD<A>,
    bayer_pattern: Option<String>,
    origin: String,
}

impl<A: PixelType> Image<A> {
    /// Wraps `data`, with no bayer pattern and an undefined origin.
    ///
    /// Arrays with fewer than 2 dimensions are rejected.
    pub fn new(data: ArrayD<A>) -> AlsResult<Self> {
        check_shape(&data)?;
        Ok(Self {
            data,
            bayer_pattern: None,
            origin: UNDEFINED_ORIGIN.to_string(),
        })
    }

    pub fn data(&self) -> &ArrayD<A> {
        &self.data
    }

    /// Mutable view on the pixels. The shape cannot be changed through it.
    pub fn data_mut(&mut self) -> ArrayViewMutD<'_, A> {
        self.data.view_mut()
    }

    /// Replaces the pixels, keeping metadata. Same shape rule as [`Image::new`].
    pub fn set_data(&mut self, data: ArrayD<A>) -> AlsResult<()> {
        check_shape(&data)?;
        self.data = data;
        Ok(())
    }

    pub fn into_data(self) -> ArrayD<A> {
        self.data
    }

    /// Where the image comes from, e.g. the path of the file it was read from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.origin = origin.into();
    }

    pub fn bayer_pattern(&self) -> Option<&str> {
        self.bayer_pattern.as_deref()
    }

    pub fn set_bayer_pattern(&mut self, bayer_pattern: Option<String>) {
        self.bayer_pattern = bayer_pattern;
    }

    /// Tells if a bayer pattern is applied to the image.
    pub fn needs_debayering(&self) -> bool {
        self.bayer_pattern.is_some()
    }

    /// Tells if the image has color information, i.e. more than 2 dimensions.
    pub fn is_color(&self) -> bool {
        self.data.ndim() > 2
    }

    pub fn height(&self) -> usize {
        self.data.shape()[0]
    }

    pub fn width(&self) -> usize {
        self.data.shape()[1]
    }

    pub fn dtype_name(&self) -> &'static str {
        A::DTYPE_NAME
    }

    /// Same dimensions and channel layout as `other`.
    pub fn is_same_shape_as(&self, other: &Image<A>) -> bool {
        self.data.shape() == other.data.shape()
    }
}

fn check_shape<A>(data: &ArrayD<A>) -> AlsResult<()> {
    if data.ndim() < 2 {
        return Err(AlsError::new(
            "Image data needs a height and a width",
            ErrorDetails::InvalidImageShape {
                shape: data.shape().to_vec(),
            },
        ));
    }
    Ok(())
}

impl<A: PixelType> Display for Image<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image(")?;
        writeln!(f, "Color = {},", self.is_color())?;
        writeln!(f, "Needs Debayer = {},", self.needs_debayering())?;
        writeln!(
            f,
            "Bayer Pattern = {},",
            self.bayer_pattern().unwrap_or("None")
        )?;
        writeln!(f, "Width * Height = {} * {},", self.width(), self.height())?;
        writeln!(f, "Data type = {},", self.dtype_name())?;
        write!(f, "Origin = {})", self.origin)
    }
}
