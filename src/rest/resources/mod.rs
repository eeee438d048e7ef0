//! Version-specific REST resource implementations.
//!
//! Resources are organized by API version:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports the current version)
//!   v1/
//!     mod.rs         <- Version-specific resources
//! ```
//!
//! # Using Resources
//!
//! The current version is re-exported at this module level for convenience:
//!
//! ```rust,ignore
//! use lemon_squeezy::rest::resources::Order;
//!
//! // Or explicitly specify a version:
//! use lemon_squeezy::rest::resources::v1::Order;
//! ```
//!
//! Each resource is a [`ResourceObject`](crate::rest::ResourceObject) over
//! its attributes type, so `order.id` is the resource ID and `order.total`
//! reads the attribute directly through `Deref`.

pub mod v1;

pub use v1::*;
