//! Outlined text: two stacked text layers simulating a stroke.
//!
//! The outline half is black and sits one pixel up and left of the white fill half.
//! Both share font, alignment and text, so the fill reads clearly over any part of
//! the background image.
//!
//! # Feature Flags
//!
//! - **`full-outline`**: draws the outline half at all eight neighbours of the fill
//!   position instead of the single (-1,-1) shadow. Nine text draws per field instead
//!   of two.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;

use crate::colors::{BLACK, WHITE};
use crate::config::OUTLINE_OFFSET;
use crate::widgets::TextLayer;

/// Outline pass offsets, relative to the outline half's own frame.
#[cfg(not(feature = "full-outline"))]
const OUTLINE_PASSES: [Point; 1] = [Point::zero()];

/// Outline pass offsets, relative to the outline half's own frame.
///
/// Each entry is a neighbour of the fill position minus `OUTLINE_OFFSET`.
#[cfg(feature = "full-outline")]
const OUTLINE_PASSES: [Point; 8] = {
    const fn pass(
        dx: i32,
        dy: i32,
    ) -> Point {
        Point::new(dx - OUTLINE_OFFSET.0, dy - OUTLINE_OFFSET.1)
    }
    [
        pass(-1, -1),
        pass(0, -1),
        pass(1, -1), // top row
        pass(-1, 0),
        pass(1, 0), // middle row (skip center)
        pass(-1, 1),
        pass(0, 1),
        pass(1, 1), // bottom row
    ]
};

/// One logical text field rendered with a simulated outline.
#[derive(Clone, Debug)]
pub struct OutlinedText<const N: usize> {
    outline: TextLayer<N>,
    fill: TextLayer<N>,
}

impl<const N: usize> OutlinedText<N> {
    /// Create the outline/fill pair for a field whose fill sits at `bounds`.
    pub fn new(
        bounds: Rectangle,
        font: &'static MonoFont<'static>,
        alignment: Alignment,
    ) -> Self {
        let shadow = Point::new(OUTLINE_OFFSET.0, OUTLINE_OFFSET.1);
        Self {
            outline: TextLayer::new(bounds.translate(shadow), font, BLACK, alignment),
            fill: TextLayer::new(bounds, font, WHITE, alignment),
        }
    }

    /// Set the same text on both halves.
    pub fn set_text(
        &mut self,
        text: &str,
    ) {
        self.outline.set_text(text);
        self.fill.set_text(text);
    }

    /// Displayed text.
    #[inline]
    pub fn text(&self) -> &str { self.fill.text() }

    /// The black offset half.
    #[inline]
    pub const fn outline(&self) -> &TextLayer<N> { &self.outline }

    /// The white foreground half.
    #[inline]
    pub const fn fill(&self) -> &TextLayer<N> { &self.fill }
}

impl<const N: usize> Drawable for OutlinedText<N> {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        for offset in OUTLINE_PASSES {
            self.outline.draw_translated(target, offset)?;
        }
        self.fill.draw(target)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mono_font::iso_8859_1::FONT_10X20;

    use super::*;
    use crate::test_support::Canvas;

    fn pair() -> OutlinedText<16> {
        OutlinedText::new(
            Rectangle::new(Point::new(10, 10), Size::new(100, 24)),
            &FONT_10X20,
            Alignment::Center,
        )
    }

    #[test]
    fn test_new_pair_geometry() {
        let pair = pair();
        assert_eq!(pair.fill().frame().top_left, Point::new(10, 10));
        assert_eq!(pair.outline().frame().top_left, Point::new(9, 9));
        assert_eq!(pair.outline().frame().size, pair.fill().frame().size);
        assert_eq!(pair.outline().color(), Some(BLACK));
        assert_eq!(pair.fill().color(), Some(WHITE));
        assert_eq!(pair.outline().alignment(), Alignment::Center);
        assert_eq!(pair.fill().alignment(), Alignment::Center);
    }

    #[test]
    fn test_set_text_updates_both_halves() {
        let mut pair = pair();
        pair.set_text("14:05");
        assert_eq!(pair.outline().text(), "14:05");
        assert_eq!(pair.fill().text(), "14:05");
    }

    #[test]
    fn test_set_text_is_idempotent() {
        let mut pair = pair();
        pair.set_text("43%");
        pair.set_text("43%");
        assert_eq!(pair.outline().text(), pair.fill().text());
        assert_eq!(pair.text(), "43%");
    }

    #[test]
    fn test_draw_empty_pair_draws_nothing() {
        let mut canvas = Canvas::new(Size::new(120, 40));
        pair().draw(&mut canvas).unwrap();
        assert_eq!(canvas.count(BLACK), 0);
        assert_eq!(canvas.count(WHITE), 0);
        assert_eq!(canvas.untouched(), 120 * 40);
    }

    #[test]
    fn test_draw_paints_outline_and_fill() {
        let mut canvas = Canvas::new(Size::new(120, 40));
        let mut pair = pair();
        pair.set_text("Mon");
        pair.draw(&mut canvas).unwrap();
        assert!(canvas.count(WHITE) > 0);
        assert!(canvas.count(BLACK) > 0);
    }

    #[test]
    fn test_draw_stays_inside_frames() {
        let mut canvas = Canvas::new(Size::new(120, 40));
        let mut pair = OutlinedText::<32>::new(
            Rectangle::new(Point::new(10, 10), Size::new(30, 24)),
            &FONT_10X20,
            Alignment::Left,
        );
        pair.set_text("Wednesday");
        pair.draw(&mut canvas).unwrap();

        let outer = Rectangle::new(Point::new(8, 8), Size::new(34, 28));
        assert!(canvas.drawn_points().all(|p| outer.contains(p)));
    }
}
