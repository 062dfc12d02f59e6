//! Fixed-capacity text buffers.
//!
//! Every text field is backed by a buffer of fixed byte capacity that is overwritten
//! in place and never resized. Writes that do not fit are truncated on a character
//! boundary instead of failing, so a long weather report or date simply loses its
//! tail.

use core::fmt::{self, Write};

use heapless::String;

// =============================================================================
// Text Buffer
// =============================================================================

/// A fixed-capacity string that silently truncates on overflow.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TextBuffer<const N: usize> {
    inner: String<N>,
}

impl<const N: usize> TextBuffer<N> {
    /// Create a new empty buffer.
    pub const fn new() -> Self { Self { inner: String::new() } }

    /// Replace the contents with `text`, truncated to capacity.
    pub fn set(
        &mut self,
        text: &str,
    ) {
        self.inner.clear();
        push_truncated(&mut self.inner, text);
    }

    /// Replace the contents with formatted output, truncated to capacity.
    pub fn set_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        self.inner.clear();
        // `write_str` below never fails; overflow is dropped
        self.write_fmt(args).ok();
    }

    /// Append `text`, truncated to the remaining capacity.
    #[inline]
    pub fn push_str(
        &mut self,
        text: &str,
    ) {
        push_truncated(&mut self.inner, text);
    }

    /// Append the decimal digits of `value`.
    #[inline]
    pub fn push_u32(
        &mut self,
        value: u32,
    ) {
        push_u32(&mut self.inner, value);
    }

    /// Clear the buffer.
    #[inline]
    pub fn clear(&mut self) { self.inner.clear(); }

    /// Borrow the contents.
    #[inline]
    pub fn as_str(&self) -> &str { self.inner.as_str() }

    /// Byte length of the contents.
    #[inline]
    pub fn len(&self) -> usize { self.inner.len() }

    /// Check if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.inner.is_empty() }

    /// Byte capacity of the buffer.
    #[inline]
    pub const fn capacity(&self) -> usize { N }
}

impl<const N: usize> Write for TextBuffer<N> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        push_truncated(&mut self.inner, s);
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for TextBuffer<N> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> AsRef<str> for TextBuffer<N> {
    fn as_ref(&self) -> &str { self.as_str() }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Append as much of `text` as fits, stopping at the first character that does not.
pub fn push_truncated<const N: usize>(
    s: &mut String<N>,
    text: &str,
) {
    for c in text.chars() {
        if s.push(c).is_err() {
            break;
        }
    }
}

/// Push a u32 value to a heapless string (no format! machinery).
pub fn push_u32<const N: usize>(
    s: &mut String<N>,
    mut val: u32,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    // Build digits in reverse
    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }

    // Push in correct order
    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}

// =============================================================================
// Tests
// =============================================================================
