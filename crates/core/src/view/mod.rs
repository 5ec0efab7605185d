//! Presentation state for the inventory viewer.
//!
//! The resolver outcome lives here too, since it decides where the viewer
//! starts.
//!
//! These are plain state machines with no rendering or I/O: the storefront
//! turns them into markup, and HTMX drives the transitions through fragment
//! requests.

pub mod carousel;
pub mod modal;
pub mod resolve;
pub mod state;

pub use carousel::{Carousel, CarouselAction, DEFAULT_INTERVAL_MS, PLACEHOLDER_IMAGE};
pub use modal::Modal;
pub use resolve::{ResolveOutcome, pick_website_name};
pub use state::{InventoryResults, Pagination, ViewError, ViewState};
