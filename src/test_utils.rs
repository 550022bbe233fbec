// SPDX-License-Identifier: MPL-2.0
//! Test helpers for float comparisons.
//!
//! Geometry and placement values go through scale factors, so tests compare
//! them with an explicit epsilon instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;
