// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod executor;
mod resolution;


pub use executor::FallbackExecutor;
pub use resolution::Resolution;
