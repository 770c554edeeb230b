// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small string helpers shared by the index, matcher and renderer.
//!
//! Lowercasing for the index, keyword splitting, and HTML escaping. Nothing
//! here knows about pages or queries.

pub mod html;
pub mod normalize;
pub mod pattern;
