pub const TRACE_VIEW_STYLES: &str = r#"
.trace-main {
    display: flex;
    flex-direction: column;
    gap: 0.8rem;
    padding: 0.8rem;
    color: var(--text-primary, white);
    font-family: ui-sans-serif, system-ui, sans-serif;
}

.trace-run-list {
    display: flex;
    gap: 0.45rem;
    flex-wrap: wrap;
}

.trace-run-toggle {
    background: var(--bg-primary, #0f172a);
    border: 1px solid var(--border-color, #334155);
    color: var(--text-primary, white);
    border-radius: 0.45rem;
    padding: 0.32rem 0.55rem;
    font-size: 0.72rem;
    cursor: pointer;
}

.trace-run-toggle:hover,
.trace-run-toggle--active {
    border-color: #60a5fa;
}

.trace-graph-card {
    border: 1px solid var(--border-color, #334155);
    border-radius: 10px;
    background: var(--bg-secondary, #111827);
    padding: 0.7rem;
}

.trace-graph-head {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    gap: 0.6rem;
    margin-bottom: 0.55rem;
}

.trace-graph-title {
    margin: 0;
    font-size: 1rem;
}

.trace-graph-metrics {
    display: flex;
    gap: 0.35rem;
    flex-wrap: wrap;
    justify-content: flex-end;
}

.trace-pill {
    border: 1px solid var(--border-color, #334155);
    background: var(--bg-primary, #0f172a);
    color: var(--text-secondary, #cbd5e1);
    border-radius: 999px;
    font-size: 0.68rem;
    padding: 0.2rem 0.45rem;
    white-space: nowrap;
}

.trace-pill--selected {
    border-color: #f59e0b;
    color: #fde68a;
}

.trace-graph-scroll {
    overflow: auto;
    border-radius: 8px;
}

.trace-graph-empty {
    padding: 2rem;
    text-align: center;
    color: var(--text-secondary, #94a3b8);
    font-size: 0.85rem;
}

.trace-graph-node {
    cursor: pointer;
}

.trace-graph-node:hover {
    opacity: 0.85;
}

.trace-span-listing {
    margin: 0;
    padding: 0.6rem;
    border-radius: 8px;
    background: var(--bg-primary, #0b1222);
    color: var(--text-secondary, #cbd5e1);
    font-size: 0.72rem;
    line-height: 1.5;
    overflow-x: auto;
}
"#;
