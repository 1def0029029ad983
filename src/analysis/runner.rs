use crate::analysis::engine::InsightEngine;
use crate::analysis::prompt::{build_analysis_prompt, user_message_sample};
use crate::models::Conversation;
use crate::progress::ProgressSink;

/// Longest finding preview surfaced through the progress sink.
const PREVIEW_CHARS: usize = 50;

/// Runs one isolated analysis task per conversation, strictly sequentially.
///
/// The engine is injected at construction; dry-run substitution is a matter
/// of handing in a canned engine rather than inspecting ambient state.
pub struct AnalysisRunner {
    engine: Box<dyn InsightEngine>,
}

impl AnalysisRunner {
    pub fn new(engine: Box<dyn InsightEngine>) -> Self {
        Self { engine }
    }

    /// Analyze a single conversation.
    ///
    /// Returns `None` without touching the engine when the conversation has
    /// fewer than 2 messages or no usable user content; otherwise returns
    /// whatever the engine produced (empty on timeout or silence).
    pub fn run_one(&self, conversation: &Conversation) -> Option<String> {
        if conversation.messages.len() < 2 {
            return None;
        }

        let sample = user_message_sample(&conversation.messages);
        if sample.is_empty() {
            return None;
        }

        self.engine.analyze(&build_analysis_prompt(&sample))
    }

    /// Analyze every conversation in the sample, in order, reporting progress
    /// and insight previews along the way. One result slot per conversation,
    /// absent slots included, so aggregation sees selection order.
    pub fn run_all(
        &self,
        sample: &[Conversation],
        sink: &dyn ProgressSink,
    ) -> Vec<Option<String>> {
        let mut results = Vec::with_capacity(sample.len());

        for (index, conversation) in sample.iter().enumerate() {
            sink.report(&format!(
                "Analyzing conversation {}/{} from {}...",
                index + 1,
                sample.len(),
                conversation.project_label()
            ));

            let result = self.run_one(conversation);

            if let Some(insight) = &result
                && let Some(first_rule) = insight.lines().next().filter(|l| !l.is_empty())
            {
                let preview: String = first_rule.chars().take(PREVIEW_CHARS).collect();
                sink.report(&format!("Found: {}...", preview));
            }

            results.push(result);
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::models::{ConversationMetadata, Message, MessageRole};
    use crate::progress::NullSink;
    use crate::progress::testing::RecordingSink;

    /// Engine spy: counts invocations and returns a fixed response.
    struct SpyEngine {
        calls: Rc<Cell<usize>>,
        response: Option<String>,
    }

    impl SpyEngine {
        fn returning(response: Option<&str>) -> (Self, Rc<Cell<usize>>) {
            let calls = Rc::new(Cell::new(0));
            let engine =
                Self { calls: Rc::clone(&calls), response: response.map(str::to_string) };
            (engine, calls)
        }
    }

    impl InsightEngine for SpyEngine {
        fn analyze(&self, _prompt: &str) -> Option<String> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }
    }

    fn message(role: MessageRole, content: &str) -> Message {
        Message { role, content: content.to_string(), timestamp: None }
    }

    fn conversation(messages: Vec<Message>) -> Conversation {
        Conversation {
            project: "-Users-alice-demo".to_string(),
            source_file: "session.jsonl".to_string(),
            messages,
            metadata: ConversationMetadata::default(),
        }
    }

    fn exchange() -> Conversation {
        conversation(vec![
            message(MessageRole::User, "please fix this"),
            message(MessageRole::Assistant, "done"),
        ])
    }

    #[test]
    fn test_single_message_conversation_short_circuits() {
        let (engine, calls) = SpyEngine::returning(Some("- insight"));
        let runner = AnalysisRunner::new(Box::new(engine));

        let single = conversation(vec![message(MessageRole::User, "only one")]);
        assert!(runner.run_one(&single).is_none());
        // The engine was never consulted.
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_no_user_content_short_circuits() {
        let (engine, calls) = SpyEngine::returning(Some("- insight"));
        let runner = AnalysisRunner::new(Box::new(engine));

        let assistant_only = conversation(vec![
            message(MessageRole::Assistant, "one"),
            message(MessageRole::Assistant, "two"),
        ]);
        assert!(runner.run_one(&assistant_only).is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_run_one_returns_engine_insight() {
        let (engine, calls) = SpyEngine::returning(Some("- be terse"));
        let runner = AnalysisRunner::new(Box::new(engine));
        assert_eq!(runner.run_one(&exchange()).as_deref(), Some("- be terse"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_engine_failure_does_not_abort_batch() {
        let (engine, _) = SpyEngine::returning(None);
        let runner = AnalysisRunner::new(Box::new(engine));
        let sample = vec![exchange(), exchange(), exchange()];

        let results = runner.run_all(&sample, &NullSink);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(Option::is_none));
    }

    #[test]
    fn test_run_all_keeps_one_slot_per_conversation() {
        let (engine, _) = SpyEngine::returning(Some("- rule"));
        let runner = AnalysisRunner::new(Box::new(engine));
        let sample = vec![
            exchange(),
            conversation(vec![message(MessageRole::User, "too short")]),
            exchange(),
        ];

        let results = runner.run_all(&sample, &NullSink);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_some());
        assert!(results[1].is_none());
        assert!(results[2].is_some());
    }

    #[test]
    fn test_run_all_reports_progress_and_previews() {
        let (engine, _) =
            SpyEngine::returning(Some("- Keep responses brief\n- More detail below"));
        let runner = AnalysisRunner::new(Box::new(engine));
        let sink = RecordingSink::new();

        runner.run_all(&[exchange()], &sink);

        let statuses = sink.statuses.borrow();
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0], "Analyzing conversation 1/1 from demo...");
        assert_eq!(statuses[1], "Found: - Keep responses brief...");
    }

    #[test]
    fn test_empty_insight_produces_no_preview() {
        let (engine, _) = SpyEngine::returning(Some(""));
        let runner = AnalysisRunner::new(Box::new(engine));
        let sink = RecordingSink::new();

        runner.run_all(&[exchange()], &sink);

        let statuses = sink.statuses.borrow();
        assert_eq!(statuses.len(), 1);
        assert!(statuses[0].starts_with("Analyzing"));
    }
}
