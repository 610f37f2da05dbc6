//! Whispering Woods Forest Health Dashboard
//!
//! Visualizes vegetation health indicators (NDVI, NDWI, EVI) for a small
//! set of monitored points around Königssee. A slider selects one of the
//! dates present in the dataset; the app then shows a color-coded point
//! map, the filtered readings, and per-index summary statistics.
//!
//! Data flow:
//! 1. `build.rs` copies `sample_ndvi_data.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is parsed into an in-memory `Dataset`.
//! 4. When the user changes the date or point selection, the matching
//!    subset is recomputed and handed to D3.js for rendering.

use chrono::NaiveDate;
use dioxus::prelude::*;
use wwd_chart_ui::components::{
    ChartContainer, ChartHeader, DateSelector, ErrorDisplay, LoadingSpinner, PointSelector,
};
use wwd_chart_ui::js_bridge;
use wwd_chart_ui::state::AppState;
use wwd_stats::filter::RecordFilter;
use wwd_stats::summary::summarize;
use wwd_veg::dataset::Dataset;
use wwd_veg::health::HealthBand;
use wwd_veg::record::DATE_FORMAT;

/// Sample vegetation index readings around Königssee.
const DATASET_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/sample_ndvi_data.csv"));

/// Container DOM element IDs used by D3.js to render into.
const MAP_ID: &str = "vegetation-point-map";
const TABLE_ID: &str = "vegetation-data-table";
const STATS_ID: &str = "vegetation-stats-table";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("forest-health-root"))
        .launch(App);
}

/// Empty-state text for a selection that matched no records.
/// Names the point when a point filter is active, so the user can tell
/// the emptiness came from the point choice rather than the date.
fn empty_state_message(point_id: &str) -> String {
    if point_id.is_empty() {
        "No data available for the selected date.".to_string()
    } else {
        format!(
            "No data available for point {} on the selected date.",
            point_id
        )
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse the embedded dataset on mount
    use_effect(move || {
        match Dataset::from_csv(DATASET_CSV) {
            Ok(dataset) => {
                let dates: Vec<String> = dataset
                    .dates()
                    .iter()
                    .map(|d| d.format(DATE_FORMAT).to_string())
                    .collect();
                // Default to the earliest date with readings
                if let Some(first) = dates.first() {
                    web_sys::console::log_1(
                        &format!("[WWD] default date selection: {}", first).into(),
                    );
                    state.selected_date.set(first.clone());
                }
                state.available_dates.set(dates);
                state.points.set(dataset.points());
                state.dataset.set(Some(dataset));
                state.loading.set(false);
            }
            Err(e) => {
                log::error!("Failed to load vegetation data: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load vegetation data: {}", e)));
                state.loading.set(false);
            }
        }
    });

    // Re-render map and tables whenever the selection changes
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            return;
        }

        let dataset = match &*state.dataset.read() {
            Some(dataset) => dataset.clone(),
            None => return,
        };

        let date_str = (state.selected_date)();
        if date_str.is_empty() {
            return;
        }
        // The selector only offers dates from the dataset, so this parse
        // cannot fail in practice
        let date = match NaiveDate::parse_from_str(&date_str, DATE_FORMAT) {
            Ok(date) => date,
            Err(e) => {
                log::error!("unexpected selected date '{}': {}", date_str, e);
                return;
            }
        };
        let point = (state.selected_point)();

        // Initialize D3.js chart scripts
        js_bridge::init_charts();

        let mut record_filter = RecordFilter::on_date(date);
        if !point.is_empty() {
            record_filter = record_filter.with_point(point.clone());
        }
        let rows = record_filter.apply(dataset.records());
        log::info!("{} records for {} (point: {:?})", rows.len(), date_str, point);

        if rows.is_empty() {
            // Empty display state, not an error
            state.no_data.set(true);
            js_bridge::destroy_chart(MAP_ID);
            js_bridge::destroy_chart(TABLE_ID);
            js_bridge::destroy_chart(STATS_ID);
            return;
        }
        if *state.no_data.peek() {
            state.no_data.set(false);
        }

        // Point map, markers colored by NDVI health band
        let map_data: Vec<serde_json::Value> = rows
            .iter()
            .map(|r| {
                serde_json::json!({
                    "point_id": r.point_id,
                    "lat": r.latitude,
                    "lon": r.longitude,
                    "ndvi": r.ndvi,
                    "ndwi": r.ndwi,
                    "evi": r.evi,
                    "color": HealthBand::from_ndvi(r.ndvi).color(),
                })
            })
            .collect();
        let map_config = serde_json::json!({
            "title": format!("Monitored points on {}", date_str),
            "markerRadius": 8,
        });
        js_bridge::render_point_map(
            MAP_ID,
            &serde_json::to_string(&map_data).unwrap_or_default(),
            &serde_json::to_string(&map_config).unwrap_or_default(),
        );

        // Filtered readings table
        let table_data: Vec<serde_json::Value> = rows
            .iter()
            .map(|r| {
                serde_json::json!({
                    "point_id": r.point_id,
                    "lat": r.latitude,
                    "lon": r.longitude,
                    "date": r.date.format(DATE_FORMAT).to_string(),
                    "ndvi": r.ndvi,
                    "ndwi": r.ndwi,
                    "evi": r.evi,
                })
            })
            .collect();
        let table_config = serde_json::json!({
            "title": format!("Data for {}", date_str),
            "columns": [
                {"key": "point_id", "label": "Point"},
                {"key": "lat", "label": "Latitude"},
                {"key": "lon", "label": "Longitude"},
                {"key": "date", "label": "Date"},
                {"key": "ndvi", "label": "NDVI", "format": "fixed3"},
                {"key": "ndwi", "label": "NDWI", "format": "fixed3"},
                {"key": "evi", "label": "EVI", "format": "fixed3"},
            ],
        });
        js_bridge::render_data_table(
            TABLE_ID,
            &serde_json::to_string(&table_data).unwrap_or_default(),
            &serde_json::to_string(&table_config).unwrap_or_default(),
        );

        // Summary statistics table
        let summary = summarize(&rows);
        let stats_data: Vec<serde_json::Value> = summary
            .rows()
            .iter()
            .map(|(index, index_summary)| match index_summary.stats() {
                Some(stats) => serde_json::json!({
                    "index": index.label(),
                    "count": stats.count,
                    "mean": stats.mean,
                    "min": stats.min,
                    "max": stats.max,
                }),
                None => serde_json::json!({
                    "index": index.label(),
                    "no_data": true,
                }),
            })
            .collect();
        let stats_config = serde_json::json!({
            "title": "Summary Statistics",
            "emptyText": "no data available",
            "columns": [
                {"key": "index", "label": "Index"},
                {"key": "count", "label": "Count"},
                {"key": "mean", "label": "Mean", "format": "fixed3"},
                {"key": "min", "label": "Min", "format": "fixed3"},
                {"key": "max", "label": "Max", "format": "fixed3"},
            ],
        });
        js_bridge::render_data_table(
            STATS_ID,
            &serde_json::to_string(&stats_data).unwrap_or_default(),
            &serde_json::to_string(&stats_config).unwrap_or_default(),
        );
    });

    let empty_msg = empty_state_message(&(state.selected_point)());

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Whispering Woods Forest Health Dashboard".to_string(),
                description: "Vegetation health indicators (NDVI, NDWI, EVI) for a small area \
                    around Königssee. Use the date selector to view readings for a specific day. \
                    Color-coded markers indicate vegetation stress (red), moderate (orange) or \
                    healthy (green) conditions based on the NDVI index.".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-end; margin-bottom: 8px;",
                    DateSelector {}
                    PointSelector {}
                }

                if (state.no_data)() {
                    div {
                        style: "padding: 24px; color: #666;",
                        "{empty_msg}"
                    }
                } else {
                    ChartContainer {
                        id: MAP_ID.to_string(),
                        loading: false,
                        min_height: 440,
                    }
                    ChartContainer {
                        id: STATS_ID.to_string(),
                        loading: false,
                        min_height: 160,
                    }
                    ChartContainer {
                        id: TABLE_ID.to_string(),
                        loading: false,
                        min_height: 240,
                    }
                }
            }
        }
    }
}
