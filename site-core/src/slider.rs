//! Slider index arithmetic and autoplay handle ownership.

pub const DEFAULT_AUTOPLAY_MS: u32 = 7000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideMode {
    /// Instant `translateX` of the track by whole item widths.
    Track,
    /// Smooth horizontal scrolling with autoplay.
    Carousel,
}

impl SlideMode {
    /// `data-slider="gallery"` or a `carousel` class opts into carousel mode.
    pub fn detect(data_slider: Option<&str>, has_carousel_class: bool) -> Self {
        if data_slider == Some("gallery") || has_carousel_class {
            Self::Carousel
        } else {
            Self::Track
        }
    }

    pub fn autoplays(self) -> bool {
        matches!(self, Self::Carousel)
    }
}

/// Wrap any integer index into `[0, len)`. `len` must be non-zero.
pub fn normalize(index: i64, len: usize) -> usize {
    let n = len as i64;
    (((index % n) + n) % n) as usize
}

/// Horizontal track offset for the given index, in CSS pixels.
pub fn track_offset(index: usize, item_width: f64) -> f64 {
    index as f64 * item_width
}

pub fn track_transform(index: usize, item_width: f64) -> String {
    format!("translateX(-{}px)", track_offset(index, item_width))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderState {
    index: usize,
    len: usize,
    mode: SlideMode,
}

impl SliderState {
    pub fn new(len: usize, mode: SlideMode) -> Self {
        Self {
            index: 0,
            len,
            mode,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn mode(&self) -> SlideMode {
        self.mode
    }

    /// Move to `index` (wrapping). Returns `None` for an empty slider.
    pub fn go_to(&mut self, index: i64) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = normalize(index, self.len);
        Some(self.index)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.go_to(self.index as i64 + 1)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.go_to(self.index as i64 - 1)
    }
}

/// Owns at most one live autoplay timer.
///
/// Handles are expected to cancel themselves on drop (as `gloo_timers`
/// intervals do), so stopping is just releasing the handle.
#[derive(Debug)]
pub struct Autoplay<H> {
    handle: Option<H>,
}

impl<H> Default for Autoplay<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> Autoplay<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Create the timer unless one is already live. Returns whether a new
    /// timer was created.
    pub fn start(&mut self, spawn: impl FnOnce() -> H) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(spawn());
        true
    }

    pub fn stop(&mut self) -> Option<H> {
        self.handle.take()
    }
}
