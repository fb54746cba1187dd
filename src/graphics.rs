//! Graphics support via embedded-graphics
//!
//! [`FrameBuffer`] implements the [`DrawTarget`] trait from the
//! embedded-graphics ecosystem with [`BinaryColor`], so an eye-animation
//! engine can render its shapes with the usual primitives.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, RoundedRectangle, Rectangle},
//! };
//! use robo_eyes::{Color, Dimensions, FrameBuffer};
//!
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let mut frame = match FrameBuffer::new([0u8; 1024], dims) {
//!     Ok(frame) => frame,
//!     Err(_) => return,
//! };
//!
//! // One rounded eye
//! let _ = RoundedRectangle::with_equal_corners(
//!     Rectangle::new(Point::new(20, 16), Size::new(36, 36)),
//!     Size::new(8, 8),
//! )
//! .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//! .draw(&mut frame);
//!
//! assert_eq!(frame.pixel(38, 34), Some(Color::Light));
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::color::Color;
use crate::framebuffer::FrameBuffer;

impl<B> DrawTarget for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            self.set_pixel(x as u32, y as u32, Color::from(color));
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        FrameBuffer::clear(self, Color::from(color));
        Ok(())
    }
}

impl<B> OriginDimensions for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(dims.width as u32, dims.height as u32)
    }
}
