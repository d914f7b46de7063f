use serde_json::{json, Value};
use crate::config::constants::{
    AXIS_OUTCOME, AXIS_PAYLOAD, COLUMN_BOOSTER_CATEGORY, COLUMN_LAUNCH_SITE, GRID_COLOR, LABEL_FAILED,
    PALETTE_OUTCOME, PALETTE_PLOTLY, PALETTE_SET3, PIE_TITLE_ALL, PIE_TITLE_SITE_PREFIX,
    SCATTER_MAX_MARKER_PX, SCATTER_TITLE_ALL, SCATTER_TITLE_SITE_PREFIX, TICK_FAILURE, TICK_SUCCESS,
};
use crate::enums::site_selection::SiteSelection;
use crate::structs::figure::Figure;
use crate::structs::pie_chart_data::PieChartData;
use crate::structs::scatter_chart_data::ScatterChartData;

const EMPTY_SELECTION_NOTE: &str = "No launches match the current selection";

/// Turns aggregated chart data into Plotly figures. Presentation only.
pub struct ChartRenderer;

impl ChartRenderer {

    pub fn render_pie(data: &PieChartData) -> Figure {
        let title = match &data.site {
            SiteSelection::All => PIE_TITLE_ALL.to_string(),
            SiteSelection::Site(site) => format!("{PIE_TITLE_SITE_PREFIX} {site}"),
        };

        let colors: Vec<&str> = data
            .slices
            .iter()
            .enumerate()
            .map(|(i, slice)| match data.site {
                SiteSelection::All => PALETTE_SET3[i % PALETTE_SET3.len()],
                SiteSelection::Site(_) if slice.label == LABEL_FAILED => PALETTE_OUTCOME[0],
                SiteSelection::Site(_) => PALETTE_OUTCOME[1],
            })
            .collect();

        let trace = json!({
            "type": "pie",
            "labels": data.labels(),
            "values": data.values(),
            "sort": false,
            "direction": "counterclockwise",
            "marker": { "colors": colors },
            "hovertemplate": "%{label}<br>%{value} launches<extra></extra>",
        });

        let mut layout = json!({
            "title": { "text": title, "x": 0.5, "font": { "size": 20 } },
            "font": { "size": 14 },
        });
        if data.is_empty() {
            Self::annotate_empty(&mut layout);
        }

        Figure {
            data: vec![trace],
            layout,
        }
    }

    pub fn render_scatter(data: &ScatterChartData) -> Figure {
        let title = match &data.site {
            SiteSelection::All => SCATTER_TITLE_ALL.to_string(),
            SiteSelection::Site(site) => format!("{SCATTER_TITLE_SITE_PREFIX} {site}"),
        };

        let max_payload = data
            .points
            .iter()
            .map(|p| p.payload_mass_kg)
            .fold(0.0_f64, f64::max);
        let size_ref = if max_payload > 0.0 {
            2.0 * max_payload / SCATTER_MAX_MARKER_PX.powi(2)
        } else {
            1.0
        };

        let traces: Vec<Value> = data
            .categories()
            .into_iter()
            .enumerate()
            .map(|(i, category)| {
                let points: Vec<_> = data
                    .points
                    .iter()
                    .filter(|p| p.booster_version_category == category)
                    .collect();
                let x: Vec<f64> = points.iter().map(|p| p.payload_mass_kg).collect();
                let y: Vec<u8> = points.iter().map(|p| p.outcome_class.as_u8()).collect();

                let mut trace = json!({
                    "type": "scatter",
                    "mode": "markers",
                    "name": category,
                    "legendgroup": category,
                    "x": x,
                    "y": y,
                    "marker": {
                        "color": PALETTE_PLOTLY[i % PALETTE_PLOTLY.len()],
                        "size": x,
                        "sizemode": "area",
                        "sizeref": size_ref,
                        "sizemin": 2,
                    },
                });

                if data.site.is_all() {
                    let sites: Vec<&str> = points
                        .iter()
                        .map(|p| p.launch_site.as_deref().unwrap_or_default())
                        .collect();
                    trace["customdata"] = json!(sites);
                    trace["hovertemplate"] = json!(format!(
                        "{COLUMN_LAUNCH_SITE}=%{{customdata}}<br>{AXIS_PAYLOAD}=%{{x}}<br>{AXIS_OUTCOME}=%{{y}}<extra>{category}</extra>"
                    ));
                } else {
                    trace["hovertemplate"] = json!(format!(
                        "{AXIS_PAYLOAD}=%{{x}}<br>{AXIS_OUTCOME}=%{{y}}<extra>{category}</extra>"
                    ));
                }
                trace
            })
            .collect();

        let mut layout = json!({
            "title": { "text": title, "x": 0.5, "font": { "size": 16 } },
            "font": { "size": 12 },
            "legend": { "title": { "text": COLUMN_BOOSTER_CATEGORY } },
            "xaxis": {
                "title": { "text": AXIS_PAYLOAD },
                "showgrid": true,
                "gridwidth": 1,
                "gridcolor": GRID_COLOR,
            },
            "yaxis": {
                "title": { "text": AXIS_OUTCOME },
                "tickmode": "array",
                "tickvals": [0, 1],
                "ticktext": [TICK_FAILURE, TICK_SUCCESS],
                "range": [-0.5, 1.5],
                "showgrid": true,
                "gridwidth": 1,
                "gridcolor": GRID_COLOR,
            },
        });
        if data.is_empty() {
            Self::annotate_empty(&mut layout);
        }

        Figure {
            data: traces,
            layout,
        }
    }

    fn annotate_empty(layout: &mut Value) {
        layout["annotations"] = json!([{
            "text": EMPTY_SELECTION_NOTE,
            "showarrow": false,
            "xref": "paper",
            "yref": "paper",
            "x": 0.5,
            "y": 0.5,
        }]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::outcome_class::OutcomeClass;
    use crate::structs::payload_range::PayloadRange;
    use crate::structs::pie_chart_data::PieSlice;
    use crate::structs::scatter_chart_data::ScatterPoint;

    fn point(payload: f64, class: OutcomeClass, category: &str, site: Option<&str>) -> ScatterPoint {
        ScatterPoint {
            payload_mass_kg: payload,
            outcome_class: class,
            booster_version_category: category.to_string(),
            launch_site: site.map(ToString::to_string),
        }
    }

    #[test]
    fn test_pie_titles() {
        let all = PieChartData { site: SiteSelection::All, slices: vec![] };
        assert_eq!(ChartRenderer::render_pie(&all).title(), Some("Total Success Launches By Site"));

        let site = PieChartData { site: SiteSelection::from("KSC LC-39A"), slices: vec![] };
        assert_eq!(
            ChartRenderer::render_pie(&site).title(),
            Some("Total Success Launches for site KSC LC-39A")
        );
    }

    #[test]
    fn test_pie_single_site_colors_follow_labels() {
        let data = PieChartData {
            site: SiteSelection::from("SiteA"),
            slices: vec![
                PieSlice { label: "Failed".to_string(), value: 3 },
                PieSlice { label: "Success".to_string(), value: 4 },
            ],
        };
        let figure = ChartRenderer::render_pie(&data);
        assert_eq!(figure.data[0]["marker"]["colors"], json!(["#ff7f7f", "#7fbf7f"]));
        assert_eq!(figure.data[0]["values"], json!([3, 4]));
        assert!(figure.layout.get("annotations").is_none());
    }

    #[test]
    fn test_scatter_axes_and_ticks() {
        let data = ScatterChartData {
            site: SiteSelection::All,
            payload_range: PayloadRange::new(0.0, 10000.0),
            points: vec![point(500.0, OutcomeClass::Success, "v1.0", Some("SiteA"))],
        };
        let figure = ChartRenderer::render_scatter(&data);
        assert_eq!(figure.title(), Some("Correlation between Payload and Success for all Sites"));
        assert_eq!(figure.layout["xaxis"]["title"]["text"], "Payload Mass (kg)");
        assert_eq!(figure.layout["yaxis"]["title"]["text"], "Launch Outcome");
        assert_eq!(figure.layout["yaxis"]["tickvals"], json!([0, 1]));
        assert_eq!(figure.layout["yaxis"]["ticktext"], json!(["Failure", "Success"]));
    }

    #[test]
    fn test_scatter_one_trace_per_category_keeps_every_point() {
        let data = ScatterChartData {
            site: SiteSelection::All,
            payload_range: PayloadRange::new(0.0, 10000.0),
            points: vec![
                point(500.0, OutcomeClass::Success, "FT", Some("SiteA")),
                point(700.0, OutcomeClass::Failure, "v1.1", Some("SiteB")),
                point(900.0, OutcomeClass::Success, "FT", Some("SiteB")),
            ],
        };
        let figure = ChartRenderer::render_scatter(&data);
        assert_eq!(figure.data.len(), 2);
        assert_eq!(figure.data[0]["name"], "FT");
        assert_eq!(figure.data[0]["x"], json!([500.0, 900.0]));
        assert_eq!(figure.data[0]["customdata"], json!(["SiteA", "SiteB"]));
        assert_eq!(figure.data[1]["y"], json!([0]));
    }

    #[test]
    fn test_scatter_single_site_has_no_site_hover() {
        let data = ScatterChartData {
            site: SiteSelection::from("SiteA"),
            payload_range: PayloadRange::new(0.0, 10000.0),
            points: vec![point(500.0, OutcomeClass::Success, "FT", None)],
        };
        let figure = ChartRenderer::render_scatter(&data);
        assert_eq!(figure.title(), Some("Correlation between Payload and Success for site SiteA"));
        assert!(figure.data[0].get("customdata").is_none());
    }

    #[test]
    fn test_empty_scatter_is_annotated() {
        let data = ScatterChartData {
            site: SiteSelection::All,
            payload_range: PayloadRange::new(1.0, 0.0),
            points: vec![],
        };
        let figure = ChartRenderer::render_scatter(&data);
        assert!(figure.data.is_empty());
        assert_eq!(figure.layout["annotations"][0]["text"], EMPTY_SELECTION_NOTE);
    }
}
