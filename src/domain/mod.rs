// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core value objects and business rules.
//!
//! This module contains pure domain types with no rendering or I/O
//! dependencies. Only `serde` derives appear here, for config round-trips.
//!
//! # Modules
//!
//! - [`editing`]: Editing values ([`AdjustmentPercent`](editing::AdjustmentPercent),
//!   [`StylisticFilter`](editing::StylisticFilter), [`Color`](editing::Color), ...)
//! - [`geometry`]: Work-surface rectangles and sizes
//! - [`locator`]: Image locators ([`Locator`](locator::Locator))
//! - [`session`]: Sessions and photo records

pub mod editing;
pub mod geometry;
pub mod locator;
pub mod session;
