//! Full-screen image viewer.

use crate::types::is_web_url;

/// The single global image overlay.
///
/// There is one slot per page, so opening an image always replaces whatever
/// was showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open(String),
}

impl Modal {
    /// Open on `src`. Anything other than an http(s) URL leaves the modal closed.
    #[must_use]
    pub fn from_source(src: Option<&str>) -> Self {
        src.map(str::trim)
            .filter(|src| is_web_url(src))
            .map_or(Self::Closed, |src| Self::Open(src.to_owned()))
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Open(src) => Some(src.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close() {
        let modal = Modal::from_source(Some("https://img.example.com/x.jpg"));
        assert_eq!(modal.source(), Some("https://img.example.com/x.jpg"));

        assert_eq!(Modal::from_source(None), Modal::Closed);
    }

    #[test]
    fn test_rejects_non_web_source() {
        assert_eq!(Modal::from_source(Some("javascript:alert(1)")), Modal::Closed);
        assert_eq!(Modal::from_source(Some("")), Modal::Closed);
    }
}
