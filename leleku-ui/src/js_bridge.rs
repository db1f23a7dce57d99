//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js area chart lives in `assets/js/area-chart.js` and is evaluated as
//! a global (no ES modules) once D3 has loaded. This module provides Rust
//! wrappers that serialize data and call that global.

use serde::Serialize;

static AREA_CHART_JS: &str = include_str!("../assets/js/area-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Leleku JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// Safe to call on every dashboard mount; the script is only evaluated once
/// per page load.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__lelekuChartsReady) {{ window.__lelekuChartScripts = {}; }}",
        js_literal(AREA_CHART_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__lelekuChartsReady || window.__lelekuChartsPolling) return;
            window.__lelekuChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Indirect eval so the function declarations land at global scope
                    (0, eval)(window.__lelekuChartScripts);
                    delete window.__lelekuChartScripts;
                    if (typeof renderAreaChart !== 'undefined') window.renderAreaChart = renderAreaChart;
                    window.__lelekuChartsReady = true;
                    console.log('Leleku charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Axis and color settings for one area chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaChartConfig {
    pub y_label: String,
    pub color: String,
}

/// JS that stops the pending render poll for one container, if any.
fn cancel_pending_js(id: &str) -> String {
    format!(
        "var pending = window.__lelekuPending || {{}}; \
         if (pending[{id}]) {{ clearInterval(pending[{id}]); delete pending[{id}]; }}"
    )
}

/// Render an area chart into `container_id`.
///
/// Polls until D3 is loaded, the chart script is initialized and the
/// container element exists. Each container has at most one pending poll;
/// a newer render replaces the older one's data.
pub fn render_area_chart<T: Serialize>(container_id: &str, points: &[T], config: &AreaChartConfig) {
    let data_json = serde_json::to_string(points).unwrap_or_else(|_| "[]".to_string());
    let config_json = serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string());
    call_js(&render_js(container_id, &data_json, &config_json));
}

fn render_js(container_id: &str, data_json: &str, config_json: &str) -> String {
    let id = js_literal(container_id);
    let data = js_literal(data_json);
    let config = js_literal(config_json);
    let cancel = cancel_pending_js(&id);
    format!(
        r#"
        (function() {{
            {cancel}
            window.__lelekuPending = pending;
            pending[{id}] = setInterval(function() {{
                if (window.__lelekuChartsReady &&
                    typeof window.renderAreaChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(pending[{id}]);
                    delete pending[{id}];
                    try {{
                        window.renderAreaChart({id}, {data}, {config});
                    }} catch(e) {{ console.error('[Leleku] renderAreaChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Drop any pending render and empty the container.
pub fn destroy_chart(container_id: &str) {
    let id = js_literal(container_id);
    call_js(&format!(
        "{} var el = document.getElementById({}); if (el) el.innerHTML = '';",
        cancel_pending_js(&id),
        id
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_pending_poll() {
        let js = render_js("ph-chart", "[]", "{}");
        let cancel = js.find("clearInterval(pending[\"ph-chart\"])").unwrap();
        let schedule = js.find("pending[\"ph-chart\"] = setInterval").unwrap();
        assert!(cancel < schedule);
        assert!(js.contains("window.__lelekuPending = pending;"));
    }

    #[test]
    fn test_cancel_targets_one_container() {
        let js = cancel_pending_js(&js_literal("turbidity-chart"));
        assert!(js.contains("clearInterval(pending[\"turbidity-chart\"])"));
        assert!(js.contains("delete pending[\"turbidity-chart\"]"));
        assert!(!js.contains("ph-chart"));
    }
}
