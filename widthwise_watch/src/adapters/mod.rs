// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with foreign geometry types.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "kurbo_adapter")]
pub mod kurbo;
