// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging of resolution events.
//!
//! Message types follow a struct-based pattern with a `Display`
//! implementation, keeping log wording out of the control-flow code and in
//! one reviewable place. Messages are organized by subsystem:
//!
//! * `messages::registry` - provider registration events
//! * `messages::resolution` - fallback resolution lifecycle events
//!
//! # Usage
//!
//! ```rust
//! use switchyard::observability::messages::registry::ProviderRegistered;
//!
//! let msg = ProviderRegistered {
//!     name: "json",
//!     priority: 10,
//! };
//!
//! tracing::debug!("{}", msg);
//! ```

pub mod messages;
