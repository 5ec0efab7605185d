//! Inventory viewer route handlers.
//!
//! The shell renders the page frame in the `Loading` state. Its loading panel
//! asks for `/inventory/results` as soon as it lands, and every control inside
//! the results fragment (pagination, sort) fetches the next query's fragment
//! into the same region. All of those requests are synchronised on the region
//! with `hx-sync` replace, so only the latest query can ever be swapped in.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header::RETRY_AFTER},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use qr_inventory_core::{
    BusinessIdentity, InventoryParams, InventoryQuery, MobileItem, SortBy, VIEWER_PATH,
    view::{Carousel, ViewError, ViewState},
};
use tracing::instrument;

use crate::config::DisplayConfig;
use crate::error::Result;
use crate::filters;
use crate::routes::carousel::CarouselTemplate;
use crate::state::AppState;

/// Set by HTMX on every request it issues.
const HX_REQUEST: &str = "hx-request";
/// The browser URL at the time of an HTMX request.
const HX_CURRENT_URL: &str = "hx-current-url";
/// Response header telling HTMX to push a history entry.
const HX_PUSH_URL: &str = "hx-push-url";

// =============================================================================
// View models
// =============================================================================

/// Business header display data.
#[derive(Clone)]
pub struct BusinessView {
    pub name: String,
    pub address: String,
    pub state: String,
    pub country: String,
    pub contact: String,
    pub logo: String,
}

impl From<&BusinessIdentity> for BusinessView {
    fn from(business: &BusinessIdentity) -> Self {
        Self {
            name: business.name.clone(),
            address: business.address(),
            state: business.state_name().to_string(),
            country: business.country_name().to_string(),
            contact: business.contact().to_string(),
            logo: business.logo_url().to_string(),
        }
    }
}

/// One inventory card.
#[derive(Clone)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub spec_line: String,
    pub status_label: &'static str,
    pub status_color: &'static str,
    pub battery: u8,
    /// `New`/`Used`, only when condition badges are enabled.
    pub condition: Option<&'static str>,
    /// Pre-rendered carousel fragment.
    pub carousel_html: String,
}

impl CardView {
    /// `position` is the item's index in the listing, used when it has no id.
    fn new(item: &MobileItem, position: usize, display: DisplayConfig) -> askama::Result<Self> {
        let carousel = Carousel::new(item.media_urls());
        Ok(Self {
            id: item
                .id
                .as_ref()
                .map_or_else(|| format!("pos-{position}"), ToString::to_string),
            name: item.name.clone(),
            spec_line: item.spec_line(),
            status_label: item.product_status.label(),
            status_color: item.product_status.color(display.badge_scheme),
            battery: item.battery_percent(),
            condition: display
                .show_condition_badge
                .then(|| item.condition().map(|c| c.label()))
                .flatten(),
            carousel_html: CarouselTemplate::new(&carousel, display.carousel_interval_ms)
                .render()?,
        })
    }
}

/// A prev/next control. Disabled controls carry no target.
#[derive(Clone)]
pub struct PageLinkView {
    pub enabled: bool,
    pub page_href: String,
    pub results_href: String,
}

impl PageLinkView {
    fn new(target: Option<&InventoryQuery>) -> Self {
        target.map_or_else(
            || Self {
                enabled: false,
                page_href: String::new(),
                results_href: String::new(),
            },
            |query| Self {
                enabled: true,
                page_href: query.page_href(),
                results_href: query.results_href(),
            },
        )
    }
}

#[derive(Clone)]
pub struct SortOptionView {
    pub value: &'static str,
    pub selected: bool,
}

/// The sort control. The `<select>` supplies `sortBy`; the hidden fields
/// carry the rest of the query a sort change produces.
#[derive(Clone)]
pub struct SortFormView {
    pub user_id: String,
    pub skip: u32,
    pub take: u32,
    pub options: Vec<SortOptionView>,
}

impl SortFormView {
    fn new(query: &InventoryQuery) -> Self {
        let target = query.with_sort(query.sort_by);
        Self {
            user_id: target.user_id.to_string(),
            skip: target.skip,
            take: target.take.get(),
            options: SortBy::ALL
                .iter()
                .map(|sort| SortOptionView {
                    value: sort.as_str(),
                    selected: *sort == query.sort_by,
                })
                .collect(),
        }
    }
}

/// Controls and cards for a populated page.
#[derive(Clone)]
pub struct PopulatedView {
    pub page_label: String,
    pub prev: PageLinkView,
    pub next: PageLinkView,
    pub sort: SortFormView,
    pub cards: Vec<CardView>,
}

// =============================================================================
// Templates
// =============================================================================

/// Results region content for one view state (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/results.html")]
pub struct ResultsTemplate {
    pub state: &'static str,
    /// Fragment to request while loading.
    pub loading_href: String,
    pub error_message: String,
    pub populated: Option<PopulatedView>,
}

impl ResultsTemplate {
    /// Build the results view for `view_state`.
    ///
    /// # Errors
    ///
    /// Returns an error if a card's carousel fails to render.
    pub fn new(view_state: &ViewState, display: DisplayConfig) -> askama::Result<Self> {
        let mut template = Self {
            state: view_state.name(),
            loading_href: String::new(),
            error_message: String::new(),
            populated: None,
        };

        match view_state {
            ViewState::Loading(query) => template.loading_href = query.results_href(),
            ViewState::Error(err) => template.error_message = err.message().to_string(),
            ViewState::Empty => {}
            ViewState::Populated(results) => {
                let pagination = results.pagination();
                let query = &results.query;
                template.populated = Some(PopulatedView {
                    page_label: format!(
                        "Page {} (total {})",
                        pagination.page_number, pagination.total_count
                    ),
                    prev: PageLinkView::new(pagination.prev.as_ref()),
                    next: PageLinkView::new(pagination.next.as_ref()),
                    sort: SortFormView::new(query),
                    cards: results
                        .page
                        .mobiles
                        .iter()
                        .enumerate()
                        .map(|(position, item)| CardView::new(item, position, display))
                        .collect::<askama::Result<_>>()?,
                });
            }
        }

        Ok(template)
    }
}

/// Inventory page template: business header plus the results region.
#[derive(Template, WebTemplate)]
#[template(path = "inventory/show.html")]
pub struct InventoryPageTemplate {
    pub business: Option<BusinessView>,
    pub results_html: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the inventory shell.
///
/// Never calls the listing endpoint: a usable query renders the loading panel,
/// anything else renders its error right away.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Query(params): Query<InventoryParams>,
) -> Result<InventoryPageTemplate> {
    let display = state.config().display;
    let view_state = ViewState::from_params(&params, state.config().inventory.page_size);

    if let ViewState::Error(err) = &view_state {
        log_view_error(*err);
    }

    Ok(InventoryPageTemplate {
        business: business_for(&state, &view_state).await,
        results_html: ResultsTemplate::new(&view_state, display)?.render()?,
    })
}

/// Fetch and render one page of results.
///
/// HTMX requests get the bare fragment, with `HX-Push-Url` set when the
/// browser is not already showing this query. Plain requests get a full page.
#[instrument(skip(state, headers))]
pub async fn results(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<InventoryParams>,
) -> Result<Response> {
    let display = state.config().display;
    let page_size = state.config().inventory.page_size;

    let view_state = match ViewState::from_params(&params, page_size) {
        ViewState::Loading(query) => {
            let outcome = state.inventory().list_inventory(&query).await;
            if let Err(e) = &outcome {
                let event_id = sentry::capture_error(e);
                tracing::error!(
                    error = %e,
                    user_id = %query.user_id,
                    sentry_event_id = %event_id,
                    "Failed to fetch inventory"
                );
            }
            ViewState::settle(query, outcome)
        }
        settled => settled,
    };

    if let ViewState::Error(err) = &view_state
        && *err != ViewError::Transport
    {
        log_view_error(*err);
    }

    let results_html = ResultsTemplate::new(&view_state, display)?.render()?;

    if !is_htmx(&headers) {
        let page = InventoryPageTemplate {
            business: business_for(&state, &view_state).await,
            results_html,
        };
        return Ok(page.into_response());
    }

    let mut response = Html(results_html).into_response();
    if let Ok(query) = params.resolve(page_size)
        && !showing(&headers, &query, page_size)
        && let Ok(value) = HeaderValue::from_str(&query.page_href())
    {
        response.headers_mut().insert(HX_PUSH_URL, value);
    }
    Ok(response)
}

/// Turn a rate-limited HTMX results request into the throttled error card.
///
/// Wraps the listing rate limiter. The layout's HTMX config swaps `429`
/// responses, so the user sees why paging stopped instead of nothing.
pub async fn throttled_fragment(request: Request, next: Next) -> Response {
    let htmx = is_htmx(request.headers());
    let response = next.run(request).await;
    if !htmx || response.status() != StatusCode::TOO_MANY_REQUESTS {
        return response;
    }

    tracing::warn!("Inventory results rate limited");
    let view_state = ViewState::Error(ViewError::Throttled);
    let html = match ResultsTemplate::new(&view_state, DisplayConfig::default())
        .and_then(|template| template.render())
    {
        Ok(html) => html,
        Err(e) => {
            tracing::error!(error = %e, "Failed to render throttled fragment");
            return response;
        }
    };

    let retry_after = response.headers().get(RETRY_AFTER).cloned();
    let mut throttled = (StatusCode::TOO_MANY_REQUESTS, Html(html)).into_response();
    if let Some(value) = retry_after {
        throttled.headers_mut().insert(RETRY_AFTER, value);
    }
    throttled
}

// =============================================================================
// Helpers
// =============================================================================

fn is_htmx(headers: &HeaderMap) -> bool {
    headers.contains_key(HX_REQUEST)
}

/// Whether the browser address bar already shows the viewer for `query`.
fn showing(headers: &HeaderMap, query: &InventoryQuery, page_size: std::num::NonZeroU32) -> bool {
    let Some(current) = headers
        .get(HX_CURRENT_URL)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<Uri>().ok())
    else {
        return false;
    };

    current.path() == VIEWER_PATH
        && Query::<InventoryParams>::try_from_uri(&current)
            .ok()
            .and_then(|Query(params)| params.resolve(page_size).ok())
            .is_some_and(|current| current == *query)
}

/// Business header for the user being viewed, if the resolver left one.
async fn business_for(state: &AppState, view_state: &ViewState) -> Option<BusinessView> {
    let user_id = match view_state {
        ViewState::Loading(query) => &query.user_id,
        ViewState::Populated(results) => &results.query.user_id,
        ViewState::Error(_) | ViewState::Empty => return None,
    };
    state
        .identities()
        .get(user_id)
        .await
        .map(|business| BusinessView::from(business.as_ref()))
}

fn log_view_error(err: ViewError) {
    match err {
        ViewError::NoIdentifier => tracing::debug!("Inventory requested without userId"),
        ViewError::LookupNotFound | ViewError::LookupFailed => {
            tracing::info!(error = %err, "Inventory requested after failed lookup");
        }
        ViewError::Transport | ViewError::Throttled => {}
    }
}
