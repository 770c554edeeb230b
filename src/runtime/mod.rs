// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser bindings.
//!
//! The library is host-agnostic; this is where it meets a real page. The DOM
//! implements [`HostSurface`](crate::surface::HostSurface), `setTimeout` is the
//! debounce timer, and log records go to the browser console.

pub mod console;
pub mod wasm;
