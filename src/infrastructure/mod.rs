// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`fs`]: Local files ([`FsFetcher`])
//! - [`http`]: Remote images over HTTP(S) ([`HttpFetcher`])
//! - [`locator`]: Dispatch by locator kind ([`LocatorFetcher`])
//! - [`memory`]: Bytes already held by the host ([`MemoryFetcher`])
//! - [`skia`]: `tiny-skia` work surface ([`SkiaSurface`])

pub mod fs;
pub mod http;
pub mod locator;
pub mod memory;
pub mod skia;

pub use fs::FsFetcher;
pub use http::HttpFetcher;
pub use locator::LocatorFetcher;
pub use memory::MemoryFetcher;
pub use skia::SkiaSurface;
