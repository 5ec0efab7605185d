//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, COOP/COEP, etc.)
//! 5. Rate limiting (governor), on upstream-backed routes only

pub mod rate_limit;
pub mod request_id;
pub mod security_headers;

pub use rate_limit::{listing_rate_limiter, lookup_rate_limiter};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
