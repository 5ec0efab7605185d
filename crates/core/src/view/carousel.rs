//! Per-item image carousel.

use crate::types::is_web_url;

/// Auto-advance period in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 3000;

/// Image shown when an item has no media.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1580910051074-4c9aab67e3e8?auto=format&fit=crop&w=400&q=60";

/// A carousel interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    /// Timer-driven advance. Does nothing with fewer than two images.
    Tick,
    /// Go straight to an index (a dot click).
    Jump(usize),
}

impl CarouselAction {
    /// Parse from the `action` and `to` request parameters.
    #[must_use]
    pub fn parse(action: &str, to: Option<usize>) -> Option<Self> {
        match action {
            "next" => Some(Self::Next),
            "prev" => Some(Self::Prev),
            "tick" => Some(Self::Tick),
            "jump" => to.map(Self::Jump),
            _ => None,
        }
    }
}

/// Index into one item's images. Every move wraps modulo the image count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    media: Vec<String>,
    index: usize,
}

impl Carousel {
    #[must_use]
    pub fn new(media: impl IntoIterator<Item = String>) -> Self {
        Self::at(media, 0)
    }

    /// Carousel positioned at `index`. Non-web URLs are dropped and an
    /// out-of-range index wraps.
    #[must_use]
    pub fn at(media: impl IntoIterator<Item = String>, index: usize) -> Self {
        let media: Vec<String> = media.into_iter().filter(|url| is_web_url(url)).collect();
        let index = if media.is_empty() {
            0
        } else {
            index % media.len()
        };
        Self { media, index }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.media.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn media(&self) -> &[String] {
        &self.media
    }

    /// Whether the carousel advances on its own.
    #[must_use]
    pub fn auto_advances(&self) -> bool {
        self.media.len() > 1
    }

    /// The image currently shown, or the placeholder.
    #[must_use]
    pub fn current(&self) -> &str {
        self.media
            .get(self.index)
            .map_or(PLACEHOLDER_IMAGE, String::as_str)
    }

    pub fn next(&mut self) {
        if !self.media.is_empty() {
            self.index = (self.index + 1) % self.media.len();
        }
    }

    pub fn prev(&mut self) {
        let len = self.media.len();
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    pub fn jump(&mut self, to: usize) {
        if !self.media.is_empty() {
            self.index = to % self.media.len();
        }
    }

    pub fn tick(&mut self) {
        if self.auto_advances() {
            self.next();
        }
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Prev => self.prev(),
            CarouselAction::Tick => self.tick(),
            CarouselAction::Jump(to) => self.jump(to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(n: usize) -> Vec<String> {
        (0..n)
            .map(|i| format!("https://img.example.com/{i}.jpg"))
            .collect()
    }

    #[test]
    fn test_ticks_cycle_through_three_images() {
        let mut carousel = Carousel::new(urls(3));
        let mut seen = vec![carousel.index()];
        for _ in 0..3 {
            carousel.tick();
            seen.push(carousel.index());
        }
        assert_eq!(seen, [0, 1, 2, 0]);
    }

    #[test]
    fn test_single_image_does_not_advance() {
        let mut carousel = Carousel::new(urls(1));
        assert!(!carousel.auto_advances());
        carousel.tick();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut carousel = Carousel::new(urls(4));
        carousel.prev();
        assert_eq!(carousel.index(), 3);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_jump() {
        let mut carousel = Carousel::new(urls(3));
        carousel.apply(CarouselAction::Jump(2));
        assert_eq!(carousel.current(), "https://img.example.com/2.jpg");
        carousel.apply(CarouselAction::Jump(7));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_empty_carousel_shows_placeholder() {
        let mut carousel = Carousel::new(Vec::new());
        carousel.apply(CarouselAction::Next);
        carousel.apply(CarouselAction::Prev);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.current(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_out_of_range_start_wraps() {
        assert_eq!(Carousel::at(urls(3), 5).index(), 2);
    }

    #[test]
    fn test_non_web_media_dropped() {
        let carousel = Carousel::new(vec![
            "javascript:alert(1)".to_string(),
            "https://img.example.com/ok.jpg".to_string(),
        ]);
        assert_eq!(carousel.len(), 1);
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(CarouselAction::parse("tick", None), Some(CarouselAction::Tick));
        assert_eq!(
            CarouselAction::parse("jump", Some(2)),
            Some(CarouselAction::Jump(2))
        );
        assert_eq!(CarouselAction::parse("jump", None), None);
        assert_eq!(CarouselAction::parse("spin", None), None);
    }
}
