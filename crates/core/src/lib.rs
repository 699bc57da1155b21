// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! clawpath-core: identifier types and lexical path helpers shared by the
//! clawpath crates

pub mod agent;
pub mod id;
pub mod lexical;
pub mod session;
pub mod topic;

pub use agent::{
    normalize_agent_id, normalize_optional_agent_id, AgentId, DEFAULT_AGENT_ID, MAX_AGENT_ID_LEN,
};
pub use session::{validate_session_id, SessionId, SessionIdError, MAX_SESSION_ID_LEN};
pub use topic::TopicId;
