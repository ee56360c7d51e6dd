//! CSS for the flight search page.
//!
//! Two-column layout on wide screens (form left, ticket and results right),
//! single column below 900px.

/// Complete stylesheet, injected once by `App`.
pub const APP_CSS: &str = r#"
:root {
    --bg: #f4f6fb;
    --panel: #ffffff;
    --text: #1f2937;
    --text-dim: #6b7280;
    --border: #d1d5db;
    --primary: #007bff;
    --primary-dark: #0062cc;
    --error: #dc2626;
    --radius: 10px;
    --font: system-ui, -apple-system, 'Segoe UI', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font);
}

.layout {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 24px;
    max-width: 1000px;
    min-height: 100vh;
    margin: 0 auto;
    padding: 24px;
    align-items: center;
}

@media (max-width: 900px) {
    .layout {
        grid-template-columns: 1fr;
        max-width: 600px;
    }
}

.panel {
    background: var(--panel);
    border-radius: 4px;
    padding: 20px;
    box-shadow: 0 3px 6px rgba(0, 0, 0, 0.12);
}

.title {
    color: var(--primary);
    font-size: 2rem;
    font-weight: 400;
    margin: 0 0 16px;
}

/* Tabs */
.tab-bar {
    display: flex;
    border-bottom: 1px solid var(--border);
    margin-bottom: 16px;
}

.tab {
    flex: 1;
    padding: 12px;
    background: none;
    border: none;
    border-bottom: 2px solid transparent;
    color: var(--text-dim);
    font-weight: 700;
    text-transform: uppercase;
    cursor: pointer;
}

.tab.active {
    color: var(--primary);
    border-bottom-color: var(--primary);
}

/* Fields */
.search-form {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 16px;
}

.field {
    display: flex;
    flex-direction: column;
}

.field label {
    font-size: 0.8rem;
    color: var(--text-dim);
}

.field input[type="text"],
.field select {
    border: none;
    border-bottom: 1px solid var(--border);
    padding: 6px 0;
    font-size: 1rem;
    background: transparent;
}

.field input[type="text"]:focus,
.field select:focus {
    outline: none;
    border-bottom: 2px solid var(--primary);
}

.field.invalid label,
.field.invalid .helper {
    color: var(--error);
}

.field.invalid input,
.field.invalid select {
    border-bottom-color: var(--error);
}

.helper {
    min-height: 1em;
    margin: 4px 0 0;
    font-size: 0.75rem;
}

.price-range input[type="range"] {
    width: 100%;
    accent-color: var(--primary);
}

.subtitle {
    margin: 0 0 4px;
}

.btn-search {
    width: 100%;
    padding: 10px;
    border: none;
    border-radius: 4px;
    background: var(--primary);
    color: #fff;
    font-weight: 600;
    text-transform: uppercase;
    cursor: pointer;
}

.btn-search:hover:not(:disabled) {
    background: var(--primary-dark);
}

.btn-search:disabled {
    background: #e5e7eb;
    color: #9ca3af;
    cursor: not-allowed;
}

/* Ticket */
.ticket-card {
    background: var(--panel);
    border: 2px solid var(--primary);
    border-radius: var(--radius);
    padding: 16px;
    margin-bottom: 16px;
}

.ticket-title {
    font-size: 1.25rem;
    margin: 0 0 8px;
}

.ticket-lines {
    list-style: none;
    padding: 0;
    margin: 0;
    line-height: 1.8;
}

/* Results */
.results-title {
    font-size: 1.1rem;
    margin: 0 0 8px;
}

.flight-list {
    list-style: none;
    padding: 0;
    margin: 0;
}

.flight-row {
    display: grid;
    grid-template-columns: 1.2fr 1fr 1.6fr auto;
    gap: 8px;
    padding: 8px 12px;
    background: var(--panel);
    border-bottom: 1px solid var(--border);
    font-size: 0.9rem;
}

.flight-row .price {
    font-weight: 700;
    color: var(--primary);
}

.empty {
    color: var(--text-dim);
}
"#;
