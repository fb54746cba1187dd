//! Page-packed monochrome frame buffer
//!
//! The SH1106 stores pixels in 8-row pages: each byte covers one column of
//! 8 vertically stacked pixels, least significant bit on top. The buffer
//! here uses the same layout so a frame can be pushed page by page
//! without conversion.
//!
//! ## Example
//!
//! ```
//! use robo_eyes::{Color, Dimensions, FrameBuffer};
//!
//! let dims = match Dimensions::new(16, 16) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let mut frame = match FrameBuffer::new([0u8; 32], dims) {
//!     Ok(frame) => frame,
//!     Err(_) => return,
//! };
//!
//! // Pixel (1, 9) lives in page 1, column 1, bit 1
//! frame.set_pixel(1, 9, Color::Light);
//! assert_eq!(frame.as_bytes()[16 + 1], 0x02);
//! ```

use crate::color::Color;
use crate::config::Dimensions;
use crate::error::BuilderError;

/// Map a pixel coordinate to its byte index and bit mask
///
/// # Example
///
/// ```
/// use robo_eyes::framebuffer::pixel_index;
///
/// assert_eq!(pixel_index(0, 0, 128), (0, 0x01));
/// assert_eq!(pixel_index(5, 7, 128), (5, 0x80));
/// assert_eq!(pixel_index(5, 8, 128), (133, 0x01));
/// ```
pub fn pixel_index(x: u32, y: u32, width: u32) -> (usize, u8) {
    let index = (x + (y / 8) * width) as usize;
    let bit = 0x01 << (y % 8);
    (index, bit)
}

/// Frame buffer over caller-supplied storage
///
/// ## Type Parameters
///
/// * `B` - Byte storage, e.g. `[u8; 1024]` or a `Vec<u8>`
pub struct FrameBuffer<B> {
    /// Pixel storage in page order
    buffer: B,
    /// Logical size of the frame
    dimensions: Dimensions,
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap `buffer` as a frame of the given dimensions
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::BufferTooSmall` if the buffer is shorter than
    /// `dimensions.buffer_size()` bytes.
    pub fn new(buffer: B, dimensions: Dimensions) -> Result<Self, BuilderError> {
        let required = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(BuilderError::BufferTooSmall { required, provided });
        }
        Ok(Self { buffer, dimensions })
    }

    /// Frame dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Fill the whole frame with one color
    pub fn clear(&mut self, color: Color) {
        let fill = color.fill_byte();
        let len = self.dimensions.buffer_size();
        for byte in &mut self.buffer.as_mut()[..len] {
            *byte = fill;
        }
    }

    /// Set a single pixel; coordinates outside the frame are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let width = self.dimensions.width as u32;
        let height = self.dimensions.height as u32;
        if x >= width || y >= height {
            return;
        }

        let (index, bit) = pixel_index(x, y, width);
        match color {
            Color::Light => self.buffer.as_mut()[index] |= bit,
            Color::Dark => self.buffer.as_mut()[index] &= !bit,
        }
    }

    /// Read a single pixel, `None` outside the frame
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let width = self.dimensions.width as u32;
        if x >= width || y >= self.dimensions.height as u32 {
            return None;
        }
        let (index, bit) = pixel_index(x, y, width);
        Some(if self.buffer.as_ref()[index] & bit != 0 {
            Color::Light
        } else {
            Color::Dark
        })
    }

    /// Bytes of one 8-row page, `None` past the last page
    pub fn page(&self, page: u16) -> Option<&[u8]> {
        if page >= self.dimensions.pages() {
            return None;
        }
        let width = self.dimensions.width as usize;
        let start = page as usize * width;
        Some(&self.buffer.as_ref()[start..start + width])
    }

    /// The whole frame in page order
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.dimensions.buffer_size()]
    }

    /// Release the underlying storage
    pub fn into_inner(self) -> B {
        self.buffer
    }
}

#[cfg(feature = "alloc")]
impl FrameBuffer<alloc::vec::Vec<u8>> {
    /// Allocate a blank (all `Dark`) frame of the given dimensions
    pub fn allocate(dimensions: Dimensions) -> Self {
        Self {
            buffer: alloc::vec![0; dimensions.buffer_size()],
            dimensions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: u16, height: u16) -> FrameBuffer<alloc::vec::Vec<u8>> {
        let dims = Dimensions::new(width, height).unwrap();
        FrameBuffer::new(alloc::vec![0u8; dims.buffer_size()], dims).unwrap()
    }

    #[test]
    fn test_pixel_index_page_layout() {
        assert_eq!(pixel_index(0, 0, 128), (0, 0x01));
        assert_eq!(pixel_index(0, 1, 128), (0, 0x02));
        assert_eq!(pixel_index(127, 0, 128), (127, 0x01));
        assert_eq!(pixel_index(0, 63, 128), (7 * 128, 0x80));
    }

    #[test]
    fn test_new_rejects_small_buffer() {
        let dims = Dimensions::new(128, 64).unwrap();
        let result = FrameBuffer::new(alloc::vec![0u8; 1023], dims);
        assert!(matches!(
            result,
            Err(BuilderError::BufferTooSmall {
                required: 1024,
                provided: 1023
            })
        ));
    }

    #[test]
    fn test_set_and_read_pixel() {
        let mut fb = frame(128, 64);
        fb.set_pixel(10, 20, Color::Light);
        assert_eq!(fb.pixel(10, 20), Some(Color::Light));
        assert_eq!(fb.pixel(10, 21), Some(Color::Dark));

        fb.set_pixel(10, 20, Color::Dark);
        assert_eq!(fb.pixel(10, 20), Some(Color::Dark));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut fb = frame(16, 8);
        fb.set_pixel(16, 0, Color::Light);
        fb.set_pixel(0, 8, Color::Light);
        assert!(fb.as_bytes().iter().all(|b| *b == 0));
        assert_eq!(fb.pixel(16, 0), None);
    }

    #[test]
    fn test_clear_fills_frame_only() {
        let dims = Dimensions::new(8, 8).unwrap();
        let mut fb = FrameBuffer::new(alloc::vec![0u8; 10], dims).unwrap();
        fb.clear(Color::Light);
        assert_eq!(fb.as_bytes(), &[0xFF; 8]);
        assert_eq!(fb.into_inner()[8..], [0, 0]);
    }

    #[test]
    fn test_page_slices() {
        let mut fb = frame(4, 16);
        fb.set_pixel(2, 8, Color::Light);
        assert_eq!(fb.page(0), Some(&[0u8, 0, 0, 0][..]));
        assert_eq!(fb.page(1), Some(&[0u8, 0, 1, 0][..]));
        assert_eq!(fb.page(2), None);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_allocate_is_blank() {
        let fb = FrameBuffer::allocate(Dimensions::new(132, 64).unwrap());
        assert_eq!(fb.as_bytes().len(), 132 * 8);
        assert!(fb.as_bytes().iter().all(|b| *b == 0));
    }
}
