// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod confidence;
mod registry;
mod resolution;

pub use confidence::ConfidenceError;
pub use registry::RegistryError;
pub use resolution::{Attempt, RejectReason, ResolutionError};
