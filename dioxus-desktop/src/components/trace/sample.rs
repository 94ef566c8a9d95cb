use serde_json::json;
use shared_types::{Span, SpanKind};
use trace_graph::InMemoryTraceStore;

/// Two recorded traces bundled with the canvas for offline browsing.
pub fn sample_store() -> InMemoryTraceStore {
    let mut store = InMemoryTraceStore::new();
    store.insert("research-run", research_trace());
    store.insert("support-run", support_trace());
    store
}

fn span(trace_id: &str, id: &str, kind: SpanKind, name: &str, parent: Option<&str>) -> Span {
    let span = Span::new(trace_id, kind, name).with_id(id);
    match parent {
        Some(parent) => span.with_parent(parent),
        None => span,
    }
}

fn research_trace() -> Vec<Span> {
    let t = "research-run";
    vec![
        span(t, "r-root", SpanKind::Invocation, "research request", None).with_duration_ms(8_420.0),
        span(t, "r-plan", SpanKind::LlmCall, "plan", Some("r-root"))
            .with_attribute("input_tokens", json!(812))
            .with_attribute("output_tokens", json!(164)),
        span(t, "r-searcher", SpanKind::AgentRun, "searcher", Some("r-root")),
        span(t, "r-search-1", SpanKind::ToolCall, "web_search", Some("r-searcher")),
        span(t, "r-search-2", SpanKind::ToolCall, "web_search", Some("r-searcher")),
        span(t, "r-search-3", SpanKind::ToolCall, "web_search", Some("r-searcher")),
        span(t, "r-fetch", SpanKind::Retrieval, "vector_lookup", Some("r-searcher")),
        span(t, "r-writer", SpanKind::AgentRun, "writer", Some("r-root")),
        span(t, "r-draft", SpanKind::LlmCall, "draft", Some("r-writer"))
            .with_attribute("gen_ai.usage.input_tokens", json!(4_210))
            .with_attribute("gen_ai.usage.output_tokens", json!(1_024)),
        span(t, "r-format", SpanKind::Custom, "format_markdown", Some("r-writer")),
    ]
}

fn support_trace() -> Vec<Span> {
    let t = "support-run";
    vec![
        span(t, "s-answer", SpanKind::LlmCall, "answer", Some("s-root")),
        span(t, "s-root", SpanKind::Invocation, "support ticket", None),
        span(t, "s-kb", SpanKind::Retrieval, "knowledge_base", Some("s-root")),
        span(t, "s-orphan", SpanKind::ToolCall, "late_callback", Some("s-missing")),
    ]
}
