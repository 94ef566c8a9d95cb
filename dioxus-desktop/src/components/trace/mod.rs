pub mod canvas;
pub mod sample;
pub mod styles;
pub mod view;

pub use canvas::TraceGraphCanvas;
pub use view::TraceView;

#[cfg(test)]
mod tests {
    use super::sample::sample_store;
    use trace_graph::{render_trace, GraphConfig, TraceStore, EMPTY_GRAPH_SVG};

    #[test]
    fn test_sample_traces_compact() {
        let store = sample_store();
        assert_eq!(store.trace_ids(), vec!["research-run", "support-run"]);

        let research = futures_util::FutureExt::now_or_never(store.get_spans("research-run"))
            .expect("in-memory store is ready")
            .expect("research trace");
        let graph = trace_graph::compact_spans(&research);
        // root, plan, searcher, web_search (x3 merged), vector_lookup, writer, draft, format
        assert_eq!(graph.len(), 8);

        let support = futures_util::FutureExt::now_or_never(store.get_spans("support-run"))
            .expect("in-memory store is ready")
            .expect("support trace");
        let svg = render_trace(&support, None, &GraphConfig::default());
        assert_ne!(svg, EMPTY_GRAPH_SVG);
        assert!(!svg.contains("s-orphan"));
    }
}
