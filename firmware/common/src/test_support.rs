//! In-memory draw target for rendering tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Records every pixel written; out-of-bounds pixels are dropped like on a panel.
pub struct Canvas {
    size: Size,
    pixels: Vec<Option<Rgb565>>,
}

impl Canvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![None; (size.width * size.height) as usize],
        }
    }

    fn index(
        &self,
        p: Point,
    ) -> Option<usize> {
        let in_bounds = p.x >= 0 && p.y >= 0 && (p.x as u32) < self.size.width && (p.y as u32) < self.size.height;
        in_bounds.then(|| p.y as usize * self.size.width as usize + p.x as usize)
    }

    /// Color written at `p`, if any.
    pub fn pixel(
        &self,
        p: Point,
    ) -> Option<Rgb565> {
        self.index(p).and_then(|i| self.pixels[i])
    }

    /// Number of pixels currently holding `color`.
    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|&&p| p == Some(color)).count()
    }

    /// Number of pixels never written.
    pub fn untouched(&self) -> usize { self.pixels.iter().filter(|p| p.is_none()).count() }

    /// Coordinates of every written pixel.
    pub fn drawn_points(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.size.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_some())
            .map(move |(i, _)| Point::new((i % width) as i32, (i / width) as i32))
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = Some(color);
            }
        }
        Ok(())
    }
}
