//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js bar/pie charts and the Leaflet incident map live in
//! `assets/js/*.js` and are embedded at compile time. They are evaluated as
//! globals (no ES modules) and exposed via `window.*`. This module provides
//! Rust wrappers that pass JSON payloads to those globals.

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static INCIDENT_MAP_JS: &str = include_str!("../assets/js/incident-map.js");

/// Global chart functions promoted to `window` once the scripts are evaluated.
const CHART_FUNCTIONS: [&str; 7] = [
    "renderBarChart",
    "renderPieChart",
    "renderIncidentMap",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
    "escapeHtml",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SFPD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
///
/// JSON string syntax is valid JS, so this escapes quotes, backslashes and
/// newlines in chart payloads.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-libraries polling loop.
///
/// D3.js and Leaflet are loaded by `<script>` tags in the page. Once both are
/// present, the chart scripts are evaluated at global scope via indirect eval
/// and each function is promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BAR_CHART_JS, PIE_CHART_JS, INCIDENT_MAP_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!("window.__sfpdChartScripts = {};", js_string(&all_js));
    let _ = js_sys::eval(&store_js);

    let promote: String = CHART_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};\n"))
        .collect();

    let init_js = format!(
        r#"
        (function() {{
            var waitForLibs = setInterval(function() {{
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {{
                    clearInterval(waitForLibs);
                    (0, eval)(window.__sfpdChartScripts);
                    delete window.__sfpdChartScripts;
                    {promote}
                    window.__sfpdChartsReady = true;
                    console.log('SFPD charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Call `window.{function}(container_id, data_json, config_json)` once the
/// scripts are initialized and the container element exists.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__sfpdChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {data}, {config});
                    }} catch(e) {{ console.error('[SFPD] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a categorical bar chart.
///
/// `data_json` is an array of `{label, count}` in display order.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render a pie chart.
///
/// `data_json` is an array of `{label, count, share}`.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPieChart", container_id, data_json, config_json);
}

/// Render the incident scatter map on OpenStreetMap tiles.
///
/// `data_json` is an array of `{latitude, longitude, description}`.
pub fn render_incident_map(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderIncidentMap", container_id, data_json, config_json);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("it's"), "\"it's\"");
        assert_eq!(js_string("a\"b\nc"), "\"a\\\"b\\nc\"");
    }

    #[test]
    fn chart_scripts_define_promoted_functions() {
        let all_js = [TOOLTIP_JS, BAR_CHART_JS, PIE_CHART_JS, INCIDENT_MAP_JS].join("\n");
        for f in CHART_FUNCTIONS {
            assert!(
                all_js.contains(&format!("function {f}(")),
                "{f} should be defined by a chart script"
            );
        }
    }
}
