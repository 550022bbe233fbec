// SPDX-License-Identifier: MPL-2.0
//! Ports the editor is written against.
//!
//! [`port`] holds the fetch, surface and host traits. Types come from
//! [`crate::domain`], and adapters in [`crate::infrastructure`] implement
//! the traits. The editor never names a concrete adapter.

pub mod port;
