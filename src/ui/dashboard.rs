use std::sync::Arc;
use std::time::{Duration, Instant};
use crate::enums::control_event::ControlEvent;
use crate::services::launch_aggregator::LaunchAggregator;
use crate::structs::control_state::ControlState;
use crate::structs::dashboard_context::DashboardContext;
use crate::structs::dashboard_view::DashboardView;
use crate::ui::chart_renderer::ChartRenderer;

/// One open dashboard page: its control state bound to both charts.
///
/// Every event recomputes the pie and the scatter from the shared table, so
/// callers only ever see a complete view.
pub struct Dashboard {
    context: Arc<DashboardContext>,
    state: ControlState,
    last_seen: Instant,
}

impl Dashboard {
    pub fn new(context: Arc<DashboardContext>) -> Self {
        let state = ControlState::initial(&context.table);
        Self {
            context,
            state,
            last_seen: Instant::now(),
        }
    }

    pub const fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn apply(&mut self, event: &ControlEvent) -> DashboardView {
        log::debug!("🎛️ Control event: {:?}", event);
        self.state.apply(event, &self.context.table);
        self.touch();
        self.view()
    }

    pub fn view(&self) -> DashboardView {
        Self::render(&self.context, &self.state)
    }

    pub fn render(context: &DashboardContext, state: &ControlState) -> DashboardView {
        let pie = LaunchAggregator::pie_data(&context.table, &state.selected_site, context.pie_label_policy);
        let scatter = LaunchAggregator::scatter_data(&context.table, &state.selected_site, state.payload_range);

        DashboardView {
            state: state.clone(),
            pie: ChartRenderer::render_pie(&pie),
            scatter: ChartRenderer::render_scatter(&scatter),
            matched_launches: scatter.len(),
        }
    }

    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.last_seen.elapsed() >= ttl
    }
}
