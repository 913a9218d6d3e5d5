// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::{ParseDescriptor, ParseSource, RecordSet};
use crate::confidence::Confidence;
use crate::traits::{Outcome, Provider};

/// Parses `json` and `jsonl` sources into records.
///
/// A whole-document parse scores full confidence; when that fails, the
/// provider retries the content as JSON-lines at a slightly lower score,
/// since line-wise parsing can silently accept documents that were meant to
/// be a single (broken) value.
pub struct JsonParserProvider {
    priority: i32,
}

impl JsonParserProvider {
    pub fn new(priority: i32) -> Self {
        Self { priority }
    }
}

const WHOLE_DOCUMENT_CONFIDENCE: Confidence = Confidence::from_literal(1.0);
const JSON_LINES_CONFIDENCE: Confidence = Confidence::from_literal(0.9);

#[async_trait]
impl Provider for JsonParserProvider {
    type Descriptor = ParseDescriptor;
    type Input = ParseSource;
    type Output = RecordSet;

    fn name(&self) -> &str {
        "json"
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn supports(&self, descriptor: &Self::Descriptor) -> bool {
        matches!(descriptor.extension.as_str(), "json" | "jsonl")
    }

    async fn execute(&self, input: Self::Input) -> Outcome<Self::Output> {
        match serde_json::from_str::<serde_json::Value>(&input.content) {
            Ok(serde_json::Value::Array(elements)) => Outcome::success(
                RecordSet {
                    format: "json",
                    records: elements,
                },
                WHOLE_DOCUMENT_CONFIDENCE,
            ),
            Ok(value) => Outcome::success(
                RecordSet {
                    format: "json",
                    records: vec![value],
                },
                WHOLE_DOCUMENT_CONFIDENCE,
            ),
            // Not a single document; try JSON-lines before giving up.
            Err(document_error) => match parse_json_lines(&input.content) {
                Some(records) => Outcome::success(
                    RecordSet {
                        format: "jsonl",
                        records,
                    },
                    JSON_LINES_CONFIDENCE,
                ),
                None => {
                    Outcome::failure(format!("invalid JSON document: {}", document_error))
                }
            },
        }
    }
}

/// Parse every non-empty line as its own JSON value; `None` unless all
/// lines parse and at least one line is present.
fn parse_json_lines(content: &str) -> Option<Vec<serde_json::Value>> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return None;
    }

    let mut records = Vec::with_capacity(lines.len());
    for line in lines {
        match serde_json::from_str(line) {
            Ok(value) => records.push(value),
            Err(_) => return None,
        }
    }
    Some(records)
}
