// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod runtime;
mod validation;

pub use loader::{load_and_validate_config, load_config, Domain, ProviderSpec, ResolverConfig};
pub use runtime::RuntimeBuilder;
pub use validation::{validate_config, ValidationError};
