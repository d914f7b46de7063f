use crate::config::constants::{LABEL_FAILED, LABEL_SUCCESS};
use crate::enums::outcome_class::OutcomeClass;
use crate::enums::pie_label_policy::PieLabelPolicy;
use crate::enums::site_selection::SiteSelection;
use crate::structs::launch_table::LaunchTable;
use crate::structs::payload_range::PayloadRange;
use crate::structs::pie_chart_data::{PieChartData, PieSlice};
use crate::structs::scatter_chart_data::{ScatterChartData, ScatterPoint};

/// Pure chart aggregations over an immutable [`LaunchTable`].
///
/// Neither function fails: unknown sites and inverted ranges produce empty data.
pub struct LaunchAggregator;

impl LaunchAggregator {

    /// Success counts per site for "ALL", otherwise the failure/success split of one site.
    pub fn pie_data(table: &LaunchTable, site: &SiteSelection, policy: PieLabelPolicy) -> PieChartData {
        let slices = match site {
            SiteSelection::All => Self::success_counts_by_site(table),
            SiteSelection::Site(name) => Self::outcome_split(table, name, policy),
        };

        PieChartData {
            site: site.clone(),
            slices,
        }
    }

    /// Launches inside `range` (inclusive), restricted to `site` unless it is "ALL".
    pub fn scatter_data(table: &LaunchTable, site: &SiteSelection, range: PayloadRange) -> ScatterChartData {
        let points = table
            .records()
            .iter()
            .filter(|r| range.contains(r.payload_mass_kg))
            .filter(|r| site.matches(&r.launch_site))
            .map(|r| ScatterPoint {
                payload_mass_kg: r.payload_mass_kg,
                outcome_class: r.outcome_class,
                booster_version_category: r.booster_version_category.clone(),
                launch_site: site.is_all().then(|| r.launch_site.clone()),
            })
            .collect();

        ScatterChartData {
            site: site.clone(),
            payload_range: range,
            points,
        }
    }

    fn success_counts_by_site(table: &LaunchTable) -> Vec<PieSlice> {
        table
            .sites()
            .iter()
            .map(|site| PieSlice {
                label: site.clone(),
                value: table
                    .records()
                    .iter()
                    .filter(|r| &r.launch_site == site && r.outcome_class.is_success())
                    .count(),
            })
            .collect()
    }

    fn outcome_split(table: &LaunchTable, site: &str, policy: PieLabelPolicy) -> Vec<PieSlice> {
        let (failures, successes) = table
            .records()
            .iter()
            .filter(|r| r.launch_site == site)
            .fold((0usize, 0usize), |(f, s), r| match r.outcome_class {
                OutcomeClass::Failure => (f + 1, s),
                OutcomeClass::Success => (f, s + 1),
            });

        let slice = |label: &str, value: usize| PieSlice { label: label.to_string(), value };

        match (failures, successes) {
            (0, 0) => Vec::new(),
            (0, s) => vec![slice(LABEL_SUCCESS, s)],
            (f, 0) => {
                let label = match policy {
                    PieLabelPolicy::Corrected => LABEL_FAILED,
                    PieLabelPolicy::Legacy => LABEL_SUCCESS,
                };
                vec![slice(label, f)]
            }
            (f, s) => vec![slice(LABEL_FAILED, f), slice(LABEL_SUCCESS, s)],
        }
    }
}
