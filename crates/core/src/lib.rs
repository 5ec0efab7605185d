//! QR Inventory Core - Shared types library.
//!
//! This crate provides the domain types and view state used by the
//! storefront:
//! - wire types for the inventory API (business identity, items, pages)
//! - the typed viewer query with its pagination and sort rules
//! - the viewer, carousel and modal state machines
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no rendering. Everything here is testable without a server.
//!
//! # Modules
//!
//! - [`types`] - IDs, statuses, sort order, items, and the inventory query
//! - [`view`] - resolver outcome, viewer state, carousel, and modal

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod view;

pub use types::*;
