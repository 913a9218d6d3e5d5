// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::{ParseDescriptor, ParseSource, RecordSet};
use crate::confidence::Confidence;
use crate::traits::{Outcome, Provider};

/// Parses `yaml`/`yml` sources into records.
///
/// Scores just under full confidence: YAML happily parses a lot of plain
/// text as a single scalar, so a successful parse is weaker evidence than it
/// is for JSON.
pub struct YamlParserProvider {
    priority: i32,
}

impl YamlParserProvider {
    pub fn new(priority: i32) -> Self {
        Self { priority }
    }
}

const YAML_CONFIDENCE: Confidence = Confidence::from_literal(0.95);

#[async_trait]
impl Provider for YamlParserProvider {
    type Descriptor = ParseDescriptor;
    type Input = ParseSource;
    type Output = RecordSet;

    fn name(&self) -> &str {
        "yaml"
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn supports(&self, descriptor: &Self::Descriptor) -> bool {
        matches!(descriptor.extension.as_str(), "yaml" | "yml")
    }

    async fn execute(&self, input: Self::Input) -> Outcome<Self::Output> {
        let parsed: serde_yaml::Value = match serde_yaml::from_str(&input.content) {
            Ok(value) => value,
            Err(err) => {
                return Outcome::failure(format!("invalid YAML document: {}", err));
            }
        };

        // Re-encode through serde_json so every family shares one record
        // representation.
        let as_json = match serde_json::to_value(&parsed) {
            Ok(value) => value,
            Err(err) => {
                return Outcome::failure(format!(
                    "YAML document is not representable as records: {}",
                    err
                ));
            }
        };

        let records = match as_json {
            serde_json::Value::Array(elements) => elements,
            serde_json::Value::Null => {
                return Outcome::failure("empty YAML document");
            }
            value => vec![value],
        };

        Outcome::success(
            RecordSet {
                format: "yaml",
                records,
            },
            YAML_CONFIDENCE,
        )
    }
}
