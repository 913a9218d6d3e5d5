// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Switchyard: priority-ordered provider selection with confidence-gated
//! fallback.
//!
//! A [`registry::ProviderRegistry`] holds an immutable, name-unique set of
//! [`traits::Provider`] implementations; an [`engine::FallbackExecutor`]
//! tries the candidates that support a given input descriptor in priority
//! order and accepts the first success that clears a confidence threshold.
//! Everything that happened along the way (rejections, panics, skipped
//! providers) comes back as data, never as a stray panic.

pub mod confidence; // confidence scores + thresholds
pub mod config; // config loading + runtime assembly
pub mod engine; // fallback resolution engine
pub mod errors; // error handling
pub mod observability;
pub mod providers; // built-in provider families
pub mod registry; // provider registry
pub mod traits; // unified abstractions
