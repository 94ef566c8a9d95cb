use std::rc::Rc;

use dioxus::prelude::*;
use trace_graph::{GraphConfig, GraphScene, InMemoryTraceStore, SelectOutcome, TraceViewer};

use super::canvas::TraceGraphCanvas;
use super::sample::sample_store;
use super::styles::TRACE_VIEW_STYLES;

type Viewer = TraceViewer<InMemoryTraceStore>;

fn outcome_label(outcome: &SelectOutcome) -> &'static str {
    match outcome {
        SelectOutcome::Rendered { .. } => "rendered",
        SelectOutcome::Unavailable { .. } => "unavailable",
        SelectOutcome::Stale { .. } => "stale",
    }
}

// ── TraceView component ──────────────────────────────────────────────────────

#[component]
pub fn TraceView() -> Element {
    let viewer = use_hook(|| {
        let viewer = Rc::new(Viewer::new(sample_store(), GraphConfig::default()));
        viewer.subscribe(|span_id: &str| log::info!("trace graph selection: {span_id}"));
        viewer
    });
    let trace_ids = use_hook(|| {
        viewer
            .store()
            .trace_ids()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
    });

    let mut scene = use_signal(GraphScene::default);
    let mut active_trace = use_signal(|| None::<String>);
    let mut selected_span = use_signal(|| None::<String>);
    let mut rows = use_signal(Vec::<String>::new);
    let mut status = use_signal(|| "pick a trace".to_string());

    let select_viewer = viewer.clone();
    let on_select = move |span_id: String| {
        select_viewer.activate_span(&span_id);
        if let Some(next) = select_viewer.current_scene() {
            scene.set(next);
        }
        selected_span.set(select_viewer.selected_span());
    };

    let listing = rows.read().clone();

    rsx! {
        style { {TRACE_VIEW_STYLES} }
        div {
            class: "trace-main",
            div {
                class: "trace-run-list",
                for trace_id in trace_ids.iter() {
                    {
                        let trace_id = trace_id.clone();
                        let viewer = viewer.clone();
                        let is_active = active_trace.read().as_deref() == Some(trace_id.as_str());
                        rsx! {
                            button {
                                key: "{trace_id}",
                                class: if is_active { "trace-run-toggle trace-run-toggle--active" } else { "trace-run-toggle" },
                                onclick: move |_| {
                                    let viewer = viewer.clone();
                                    let trace_id = trace_id.clone();
                                    active_trace.set(Some(trace_id.clone()));
                                    spawn(async move {
                                        let outcome = viewer.select_trace(&trace_id).await;
                                        if matches!(outcome, SelectOutcome::Stale { .. }) {
                                            return;
                                        }
                                        status.set(format!("{trace_id}: {}", outcome_label(&outcome)));
                                        scene.set(viewer.current_scene().unwrap_or_default());
                                        selected_span.set(viewer.selected_span());
                                        rows.set(
                                            viewer
                                                .current_listing()
                                                .iter()
                                                .map(|row| row.summary_line())
                                                .collect(),
                                        );
                                    });
                                },
                                "{trace_id}"
                            }
                        }
                    }
                }
            }
            div {
                class: "trace-graph-card",
                div {
                    class: "trace-graph-head",
                    h3 { class: "trace-graph-title", "Span graph" }
                    div {
                        class: "trace-graph-metrics",
                        span { class: "trace-pill", "{status}" }
                        if let Some(span_id) = selected_span() {
                            span { class: "trace-pill trace-pill--selected", "{span_id}" }
                        }
                    }
                }
                TraceGraphCanvas { scene: scene(), on_select }
            }
            if !listing.is_empty() {
                pre {
                    class: "trace-span-listing",
                    for line in listing.iter() {
                        "{line}\n"
                    }
                }
            }
        }
    }
}
