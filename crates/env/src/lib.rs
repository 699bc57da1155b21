// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! clawpath-env: environment, home and state directory resolution

pub mod dotenv;
mod error;
pub mod home;
pub mod lookup;
pub mod state;

pub use dotenv::{load_layered, load_process_env, read_env_file, DOTENV_FILE};
pub use error::EnvError;
pub use home::{expand_home_prefix, required_home_dir};
pub use lookup::{Environment, MapEnv, ProcessEnv};
pub use state::{
    state_dir, state_dir_override, state_env_path, DEFAULT_STATE_DIR_NAME, LEGACY_STATE_DIR_ENV,
    STATE_DIR_ENV,
};
