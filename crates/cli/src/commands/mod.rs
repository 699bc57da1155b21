// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod dirs;
pub mod resolve;
pub mod transcript;
pub mod validate;
