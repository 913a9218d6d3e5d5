// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test-only provider implementations.
//!
//! The stub family uses `&'static str` descriptors and inputs so tests can
//! exercise registry ordering and executor control flow without dragging in
//! a real provider domain. Every stub counts its `execute` invocations,
//! which is how tests assert "supports == false means never invoked" and
//! "each candidate is tried exactly once".

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::confidence::Confidence;
use crate::registry::ProviderRegistry;
use crate::traits::{Outcome, Provider};

/// A registry over the stub provider family.
pub type StubRegistry =
    ProviderRegistry<dyn Provider<Descriptor = &'static str, Input = &'static str, Output = String>>;

/// A provider that always succeeds with a fixed confidence.
///
/// Supports every descriptor unless narrowed with [`StaticProvider::supporting`].
pub struct StaticProvider {
    name: &'static str,
    priority: i32,
    confidence: Confidence,
    supported: Option<&'static [&'static str]>,
    calls: AtomicUsize,
}

impl StaticProvider {
    pub fn new(name: &'static str, priority: i32, confidence: Confidence) -> Self {
        Self {
            name,
            priority,
            confidence,
            supported: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Restrict support to the given descriptors.
    pub fn supporting(mut self, descriptors: &'static [&'static str]) -> Self {
        self.supported = Some(descriptors);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Provider for StaticProvider {
    type Descriptor = &'static str;
    type Input = &'static str;
    type Output = String;

    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn supports(&self, descriptor: &Self::Descriptor) -> bool {
        match self.supported {
            Some(list) => list.contains(descriptor),
            None => true,
        }
    }

    async fn execute(&self, input: Self::Input) -> Outcome<Self::Output> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Outcome::success(format!("{}:{}", self.name, input), self.confidence)
    }
}

/// A provider that always declares failure.
pub struct FailingProvider {
    name: &'static str,
    priority: i32,
    calls: AtomicUsize,
}

impl FailingProvider {
    pub fn new(name: &'static str, priority: i32) -> Self {
        Self {
            name,
            priority,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Provider for FailingProvider {
    type Descriptor = &'static str;
    type Input = &'static str;
    type Output = String;

    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn supports(&self, _descriptor: &Self::Descriptor) -> bool {
        true
    }

    async fn execute(&self, _input: Self::Input) -> Outcome<Self::Output> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Outcome::failure("simulated provider failure")
    }
}

/// A provider that panics during execute, for boundary-isolation tests.
pub struct PanickingProvider {
    name: &'static str,
    priority: i32,
    calls: AtomicUsize,
}

impl PanickingProvider {
    pub fn new(name: &'static str, priority: i32) -> Self {
        Self {
            name,
            priority,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Provider for PanickingProvider {
    type Descriptor = &'static str;
    type Input = &'static str;
    type Output = String;

    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn supports(&self, _descriptor: &Self::Descriptor) -> bool {
        true
    }

    async fn execute(&self, _input: Self::Input) -> Outcome<Self::Output> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        panic!("simulated provider panic");
    }
}
