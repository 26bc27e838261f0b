//! AI study-suggestion flow.
//!
//! The upstream producer is a generative model with no schema guarantee, so
//! interpretation is a two-path decode:
//! - A strict JSON parse into [`SuggestionResult`] returns the payload verbatim
//! - Anything else becomes a fallback result that keeps the raw text as the
//!   study plan under a synthesized title
//!
//! Failures to reach the completion backend at all surface as
//! [`SuggestionError`] and are never absorbed into the fallback -- the
//! fallback only applies to content that was actually received.

mod client;

pub use client::{CompletionService, HttpCompletionClient};

use serde::{Deserialize, Serialize};

use crate::error::SuggestionError;

/// System prompt sent with every suggestion request.
const SYSTEM_PROMPT: &str =
    "You are a helpful study assistant. Provide concise, actionable study advice.";

/// A structured study suggestion.
///
/// This is the shape the completion backend is asked to produce. Field
/// contents are passed through as received; callers wanting stricter
/// guarantees validate on their side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResult {
    pub title: String,
    /// Free-text study-plan narrative.
    pub study_plan: String,
    /// Recommended resources, possibly empty.
    pub resources: Vec<String>,
}

/// Outcome of interpreting raw model text.
///
/// Both variants carry a renderable [`SuggestionResult`]; the split exists
/// so callers can tell a verbatim payload from a synthesized one without
/// exception-driven control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpretation {
    /// The model text decoded cleanly into the expected shape.
    Parsed(SuggestionResult),
    /// The model text did not decode; it is kept as-is under a
    /// synthesized title.
    Fallback(SuggestionResult),
}

impl Interpretation {
    /// The suggestion value, whichever path produced it.
    pub fn result(&self) -> &SuggestionResult {
        match self {
            Self::Parsed(result) | Self::Fallback(result) => result,
        }
    }

    /// Consume the interpretation, yielding the suggestion value.
    pub fn into_result(self) -> SuggestionResult {
        match self {
            Self::Parsed(result) | Self::Fallback(result) => result,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Interpret raw completion text as a structured suggestion.
///
/// Never fails. Malformed syntax, a wrong shape, or missing fields all
/// resolve to a fallback titled after `fallback_topic` that carries the
/// entire raw text as the study plan, so the caller always has something
/// renderable.
pub fn interpret(raw_text: &str, fallback_topic: &str) -> Interpretation {
    match serde_json::from_str::<SuggestionResult>(raw_text) {
        Ok(parsed) => Interpretation::Parsed(parsed),
        Err(_) => Interpretation::Fallback(SuggestionResult {
            title: format!("Study Plan: {fallback_topic}"),
            study_plan: raw_text.to_string(),
            resources: Vec::new(),
        }),
    }
}

/// User prompt for a topic within a subject.
fn user_prompt(subject_name: &str, topic: &str) -> String {
    format!(
        "Create a study plan for: {topic} (Subject: {subject_name}). \
         Include: 1) A catchy title 2) A brief study plan (2-3 paragraphs) \
         3) 3 recommended resources. Format as JSON with keys: title, \
         studyPlan, resources (array)."
    )
}

/// Suggestion flow over an injected completion backend.
pub struct SuggestionEngine<C> {
    client: C,
}

impl<C: CompletionService> SuggestionEngine<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Request a study suggestion for `topic`, scoped to `subject_name`.
    ///
    /// Performs the one outbound completion call and interprets whatever
    /// comes back. Upstream failures propagate; unparseable content
    /// resolves to the fallback interpretation.
    pub async fn suggest(
        &self,
        subject_name: &str,
        topic: &str,
    ) -> Result<Interpretation, SuggestionError> {
        let raw = self
            .client
            .complete(SYSTEM_PROMPT, &user_prompt(subject_name, topic))
            .await?;
        Ok(interpret(&raw, topic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_payload_is_returned_verbatim() {
        let raw = r#"{"title":"T","studyPlan":"P","resources":["R1"]}"#;

        let interpretation = interpret(raw, "X");

        assert_eq!(
            interpretation,
            Interpretation::Parsed(SuggestionResult {
                title: "T".to_string(),
                study_plan: "P".to_string(),
                resources: vec!["R1".to_string()],
            })
        );
    }

    #[test]
    fn prose_falls_back_with_raw_text_preserved() {
        let interpretation = interpret("not json at all", "Derivatives");

        assert!(interpretation.is_fallback());
        let result = interpretation.into_result();
        assert_eq!(result.title, "Study Plan: Derivatives");
        assert_eq!(result.study_plan, "not json at all");
        assert!(result.resources.is_empty());
    }

    #[test]
    fn missing_field_falls_back() {
        // Valid JSON, but no resources key.
        let raw = r#"{"title":"T","studyPlan":"P"}"#;

        let interpretation = interpret(raw, "Algebra");

        assert!(interpretation.is_fallback());
        assert_eq!(interpretation.result().study_plan, raw);
    }

    #[test]
    fn wrong_shape_falls_back() {
        for raw in [
            r#"["a","b"]"#,
            r#"{"title":"T","studyPlan":"P","resources":"not-a-list"}"#,
            r#"{"title":42,"studyPlan":"P","resources":[]}"#,
            "",
        ] {
            let interpretation = interpret(raw, "Topic");
            assert!(interpretation.is_fallback(), "should fall back for {raw:?}");
            assert_eq!(interpretation.result().study_plan, raw);
        }
    }

    #[test]
    fn unknown_extra_fields_are_tolerated() {
        let raw = r#"{"title":"T","studyPlan":"P","resources":[],"model":"x"}"#;
        assert!(!interpret(raw, "X").is_fallback());
    }

    #[test]
    fn empty_resources_parse() {
        let raw = r#"{"title":"T","studyPlan":"P","resources":[]}"#;
        let interpretation = interpret(raw, "X");
        assert!(!interpretation.is_fallback());
        assert!(interpretation.result().resources.is_empty());
    }

    struct CannedCompletion(String);

    impl CompletionService for CannedCompletion {
        async fn complete(
            &self,
            _system_prompt: &str,
            _user_prompt: &str,
        ) -> Result<String, SuggestionError> {
            Ok(self.0.clone())
        }
    }

    struct DownCompletion;

    impl CompletionService for DownCompletion {
        async fn complete(
            &self,
            _system_prompt: &str,
            _user_prompt: &str,
        ) -> Result<String, SuggestionError> {
            Err(SuggestionError::UpstreamUnavailable {
                message: "connection refused".to_string(),
                source: None,
            })
        }
    }

    #[tokio::test]
    async fn engine_interprets_received_content() {
        let engine = SuggestionEngine::new(CannedCompletion(
            r#"{"title":"Limits 101","studyPlan":"Start small.","resources":["a book"]}"#
                .to_string(),
        ));

        let interpretation = engine.suggest("Math", "Limits").await.unwrap();

        assert!(!interpretation.is_fallback());
        assert_eq!(interpretation.result().title, "Limits 101");
    }

    #[tokio::test]
    async fn engine_falls_back_on_prose() {
        let engine = SuggestionEngine::new(CannedCompletion("just some advice".to_string()));

        let interpretation = engine.suggest("Math", "Limits").await.unwrap();

        assert!(interpretation.is_fallback());
        assert_eq!(interpretation.result().title, "Study Plan: Limits");
    }

    #[tokio::test]
    async fn upstream_failure_is_not_masked_by_the_fallback() {
        let engine = SuggestionEngine::new(DownCompletion);

        let err = engine.suggest("Math", "Limits").await.unwrap_err();

        assert!(matches!(err, SuggestionError::UpstreamUnavailable { .. }));
    }
}
