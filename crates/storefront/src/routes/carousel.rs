//! Carousel fragment (HTMX).
//!
//! A carousel carries its whole state in the markup: the current index and
//! the media list as hidden inputs. Every interaction, including the
//! auto-advance poll, sends that state back with an action and gets the next
//! carousel in return. No I/O happens here.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{RawQuery, State};
use qr_inventory_core::view::{Carousel, CarouselAction};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::routes::modal::modal_href;
use crate::state::AppState;

/// One dot under the image.
#[derive(Clone)]
pub struct DotView {
    pub index: usize,
    pub active: bool,
}

/// Carousel fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/carousel.html")]
pub struct CarouselTemplate {
    pub index: usize,
    pub media: Vec<String>,
    pub current: String,
    /// Request that opens the modal on the current image.
    pub modal_href: String,
    pub dots: Vec<DotView>,
    /// More than one image: show controls and poll for ticks.
    pub auto_advance: bool,
    pub interval_ms: u64,
}

impl CarouselTemplate {
    #[must_use]
    pub fn new(carousel: &Carousel, interval_ms: u64) -> Self {
        Self {
            index: carousel.index(),
            media: carousel.media().to_vec(),
            current: carousel.current().to_string(),
            modal_href: modal_href(carousel.current()),
            dots: (0..carousel.len())
                .map(|index| DotView {
                    index,
                    active: index == carousel.index(),
                })
                .collect(),
            auto_advance: carousel.auto_advances(),
            interval_ms,
        }
    }
}

/// Parameters of a carousel request.
///
/// Parsed by hand because `media` repeats.
#[derive(Debug, Default, PartialEq, Eq)]
struct CarouselParams {
    action: Option<String>,
    to: Option<usize>,
    index: usize,
    media: Vec<String>,
}

impl CarouselParams {
    fn parse(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "action" => params.action = Some(value.into_owned()),
                "to" => params.to = value.trim().parse().ok(),
                "index" => params.index = value.trim().parse().unwrap_or_default(),
                "media" => params.media.push(value.into_owned()),
                _ => {}
            }
        }
        params
    }
}

/// Apply one carousel action and render the result.
#[instrument(skip(state, query))]
pub async fn step(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<CarouselTemplate> {
    let params = CarouselParams::parse(query.as_deref().unwrap_or_default());

    let action = params
        .action
        .as_deref()
        .and_then(|action| CarouselAction::parse(action, params.to))
        .ok_or_else(|| AppError::BadRequest("unknown carousel action".to_string()))?;

    let mut carousel = Carousel::at(params.media, params.index);
    carousel.apply(action);

    Ok(CarouselTemplate::new(
        &carousel,
        state.config().display.carousel_interval_ms,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repeated_media() {
        let params = CarouselParams::parse(
            "action=jump&to=2&index=1&media=https%3A%2F%2Fa.example%2F1.jpg&media=https%3A%2F%2Fa.example%2F2.jpg",
        );
        assert_eq!(params.action.as_deref(), Some("jump"));
        assert_eq!(params.to, Some(2));
        assert_eq!(params.index, 1);
        assert_eq!(
            params.media,
            ["https://a.example/1.jpg", "https://a.example/2.jpg"]
        );
    }

    #[test]
    fn test_parse_tolerates_garbage_numbers() {
        let params = CarouselParams::parse("action=next&index=abc&to=-1");
        assert_eq!(params.index, 0);
        assert_eq!(params.to, None);
    }

    #[test]
    fn test_template_for_single_image() {
        let carousel = Carousel::new(vec!["https://a.example/1.jpg".to_string()]);
        let template = CarouselTemplate::new(&carousel, 3000);
        assert!(!template.auto_advance);
        assert_eq!(template.dots.len(), 1);
        assert_eq!(
            template.modal_href,
            "/inventory/modal?src=https%3A%2F%2Fa.example%2F1.jpg"
        );
    }
}
