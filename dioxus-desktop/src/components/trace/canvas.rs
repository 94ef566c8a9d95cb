use dioxus::prelude::*;
use trace_graph::styles::{
    CANVAS_BACKGROUND, CANVAS_BORDER, CANVAS_RADIUS, EDGE_COLOR, LABEL_FONT, LABEL_FONT_SIZE,
    LEAF_RADIUS,
};
use trace_graph::{GraphScene, NodeShape};

const ARROW_MARKER_ID: &str = "trace-graph-arrow";

// ── TraceGraphCanvas component ───────────────────────────────────────────────

/// Live rendition of a [`GraphScene`]: same geometry as the SVG document, but every
/// node carries a click handler that announces its span id.
#[component]
pub fn TraceGraphCanvas(scene: GraphScene, on_select: EventHandler<String>) -> Element {
    if scene.is_empty() {
        return rsx! {
            div {
                class: "trace-graph-empty",
                "No spans to display"
            }
        };
    }

    let width = format!("{:.1}", scene.width);
    let height = format!("{:.1}", scene.height);
    let view_box = scene.view_box();
    let marker_url = format!("url(#{ARROW_MARKER_ID})");

    rsx! {
        div {
            class: "trace-graph-scroll",
            svg {
                width: "{width}",
                height: "{height}",
                view_box: "{view_box}",
                defs {
                    marker {
                        id: ARROW_MARKER_ID,
                        "viewBox": "0 0 10 10",
                        "refX": "10",
                        "refY": "5",
                        "markerWidth": "6",
                        "markerHeight": "6",
                        "orient": "auto",
                        path { d: "M 0 0 L 10 5 L 0 10 z", fill: EDGE_COLOR }
                    }
                }
                rect {
                    x: "0.5",
                    y: "0.5",
                    width: format!("{:.1}", (scene.width - 1.0).max(0.0)),
                    height: format!("{:.1}", (scene.height - 1.0).max(0.0)),
                    rx: "{CANVAS_RADIUS}",
                    fill: CANVAS_BACKGROUND,
                    stroke: CANVAS_BORDER
                }
                for edge in &scene.edges {
                    path {
                        d: "{edge.path()}",
                        fill: "none",
                        stroke: EDGE_COLOR,
                        stroke_width: "1.5",
                        "marker-end": "{marker_url}"
                    }
                }
                for node in &scene.nodes {
                    {
                        let span_id = node.span_id.clone();
                        let (cx, cy) = node.center();
                        let stroke_width = format!("{:.1}", node.stroke_width);
                        rsx! {
                            g {
                                key: "{node.span_id}",
                                class: if node.selected {
                                    "trace-graph-node trace-graph-node--selected"
                                } else {
                                    "trace-graph-node"
                                },
                                "data-span-id": "{node.span_id}",
                                onclick: move |_| on_select.call(span_id.clone()),
                                if node.shape == NodeShape::Ellipse {
                                    ellipse {
                                        cx: format!("{:.1}", cx),
                                        cy: format!("{:.1}", cy),
                                        rx: format!("{:.1}", node.width / 2.0),
                                        ry: format!("{:.1}", node.height / 2.0),
                                        fill: node.fill,
                                        stroke: node.stroke,
                                        stroke_width: "{stroke_width}"
                                    }
                                } else {
                                    rect {
                                        x: format!("{:.1}", node.x),
                                        y: format!("{:.1}", node.y),
                                        width: format!("{:.1}", node.width),
                                        height: format!("{:.1}", node.height),
                                        rx: "{LEAF_RADIUS}",
                                        fill: node.fill,
                                        stroke: node.stroke,
                                        stroke_width: "{stroke_width}"
                                    }
                                }
                                text {
                                    x: format!("{:.1}", cx),
                                    y: format!("{:.1}", cy + 4.0),
                                    text_anchor: "middle",
                                    fill: node.label_color,
                                    font_size: "{LABEL_FONT_SIZE}",
                                    font_family: LABEL_FONT,
                                    "{node.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
