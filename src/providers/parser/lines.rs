// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::{ParseDescriptor, ParseSource, RecordSet};
use crate::confidence::Confidence;
use crate::traits::{Outcome, Provider};

/// Last-resort parser: every non-empty line becomes a string record.
///
/// Supports any extension, so it should be registered with the highest
/// priority number in the family. It self-scores 0.6 on clean text and 0.2
/// on binary-looking content, which keeps it from winning a resolution under
/// the default threshold when the input clearly is not line-oriented text.
pub struct LineParserProvider {
    priority: i32,
}

impl LineParserProvider {
    pub fn new(priority: i32) -> Self {
        Self { priority }
    }
}

const CLEAN_TEXT_CONFIDENCE: Confidence = Confidence::from_literal(0.6);
const BINARY_SUSPECT_CONFIDENCE: Confidence = Confidence::from_literal(0.2);

/// Fraction of control characters above which content is treated as binary.
const CONTROL_CHAR_TOLERANCE: f64 = 0.1;

#[async_trait]
impl Provider for LineParserProvider {
    type Descriptor = ParseDescriptor;
    type Input = ParseSource;
    type Output = RecordSet;

    fn name(&self) -> &str {
        "lines"
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn supports(&self, _descriptor: &Self::Descriptor) -> bool {
        true
    }

    async fn execute(&self, input: Self::Input) -> Outcome<Self::Output> {
        let records: Vec<serde_json::Value> = input
            .content
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(|line| serde_json::Value::String(line.to_string()))
            .collect();

        if records.is_empty() {
            return Outcome::failure("no non-empty lines in input");
        }

        let confidence = if looks_binary(&input.content) {
            BINARY_SUSPECT_CONFIDENCE
        } else {
            CLEAN_TEXT_CONFIDENCE
        };

        Outcome::success(
            RecordSet {
                format: "lines",
                records,
            },
            confidence,
        )
    }
}

/// Heuristic binary sniff: NUL bytes, or too many control characters that
/// are not ordinary whitespace.
fn looks_binary(content: &str) -> bool {
    if content.contains('\u{0}') {
        return true;
    }
    let total = content.chars().count();
    if total == 0 {
        return false;
    }
    let control = content
        .chars()
        .filter(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
        .count();
    (control as f64) / (total as f64) > CONTROL_CHAR_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn execute(content: &str) -> Outcome<RecordSet> {
        LineParserProvider::new(90)
            .execute(ParseSource::new(content))
            .await
    }

    #[tokio::test]
    async fn clean_text_splits_into_line_records() {
        match execute("alpha\nbeta\n\ngamma\n").await {
            Outcome::Success {
                payload,
                confidence,
            } => {
                assert_eq!(payload.format, "lines");
                assert_eq!(payload.records.len(), 3);
                assert_eq!(confidence, CLEAN_TEXT_CONFIDENCE);
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn binary_looking_content_scores_low() {
        match execute("alpha\u{0}beta\n").await {
            Outcome::Success { confidence, .. } => {
                assert_eq!(confidence, BINARY_SUSPECT_CONFIDENCE);
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_input_is_a_declared_failure() {
        match execute("\n\n").await {
            Outcome::Failure { reason } => assert!(reason.contains("no non-empty lines")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn supports_every_extension() {
        let provider = LineParserProvider::new(90);
        assert!(provider.supports(&ParseDescriptor::new("csv")));
        assert!(provider.supports(&ParseDescriptor::new("log")));
        assert!(provider.supports(&ParseDescriptor::new("bin")));
    }
}
