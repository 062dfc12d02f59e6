//! Single text widget with a fixed frame.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Text, TextStyle};
use heapless::String;

use crate::styles::text_style_for;
use crate::text::push_truncated;

/// A transparent-background text widget.
///
/// Text is anchored at the top of the frame, aligned horizontally within it, and
/// clipped to it. The layer keeps its own copy of the string, truncated to `N` bytes.
#[derive(Clone, Debug)]
pub struct TextLayer<const N: usize> {
    frame: Rectangle,
    text: String<N>,
    character_style: MonoTextStyle<'static, Rgb565>,
    text_style: TextStyle,
    alignment: Alignment,
}

impl<const N: usize> TextLayer<N> {
    /// Create an empty text layer.
    pub fn new(
        frame: Rectangle,
        font: &'static MonoFont<'static>,
        color: Rgb565,
        alignment: Alignment,
    ) -> Self {
        Self {
            frame,
            text: String::new(),
            character_style: MonoTextStyle::new(font, color),
            text_style: text_style_for(alignment),
            alignment,
        }
    }

    /// Replace the displayed text.
    pub fn set_text(
        &mut self,
        text: &str,
    ) {
        self.text.clear();
        push_truncated(&mut self.text, text);
    }

    /// Currently displayed text.
    #[inline]
    pub fn text(&self) -> &str { self.text.as_str() }

    /// Layer frame.
    #[inline]
    pub const fn frame(&self) -> Rectangle { self.frame }

    /// Text color.
    #[inline]
    pub fn color(&self) -> Option<Rgb565> { self.character_style.text_color }

    /// Horizontal alignment within the frame.
    #[inline]
    pub const fn alignment(&self) -> Alignment { self.alignment }

    /// Text anchor for the configured alignment.
    fn anchor(&self) -> Point {
        let Rectangle { top_left, size } = self.frame;
        match self.alignment {
            Alignment::Left => top_left,
            Alignment::Center => Point::new(top_left.x + (size.width / 2) as i32, top_left.y),
            Alignment::Right => Point::new(top_left.x + size.width as i32, top_left.y),
        }
    }

    /// Draw the layer shifted by `offset`, clipped to the shifted frame.
    pub fn draw_translated<D>(
        &self,
        target: &mut D,
        offset: Point,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.text.is_empty() {
            return Ok(());
        }
        let mut clipped = target.clipped(&self.frame.translate(offset));
        Text::with_text_style(&self.text, self.anchor() + offset, self.character_style, self.text_style)
            .draw(&mut clipped)?;
        Ok(())
    }
}

impl<const N: usize> Drawable for TextLayer<N> {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.draw_translated(target, Point::zero())
    }
}
