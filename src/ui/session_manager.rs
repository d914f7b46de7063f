use std::sync::Arc;
use std::time::Duration;
use dashmap::DashMap;
use uuid::Uuid;
use crate::enums::control_event::ControlEvent;
use crate::structs::dashboard_context::DashboardContext;
use crate::structs::dashboard_controls::DashboardControls;
use crate::structs::dashboard_view::DashboardView;
use crate::ui::dashboard::Dashboard;

pub struct SessionManager {
    sessions: DashMap<String, Dashboard>,
    context: Arc<DashboardContext>,
    ttl: Duration,
}

impl SessionManager {
    pub fn new(context: Arc<DashboardContext>, ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            context,
            ttl,
        }
    }

    pub const fn context(&self) -> &Arc<DashboardContext> {
        &self.context
    }

    pub fn controls(&self) -> DashboardControls {
        DashboardControls::from_context(&self.context)
    }

    pub fn create_session(&self) -> (String, DashboardView) {
        self.cleanup_expired_sessions();

        let session_id = Uuid::new_v4().to_string();
        let dashboard = Dashboard::new(Arc::clone(&self.context));
        let view = dashboard.view();
        self.sessions.insert(session_id.clone(), dashboard);

        log::info!("🆕 Dashboard session {} opened ({} active)", session_id, self.sessions.len());
        (session_id, view)
    }

    pub fn get_view(&self, session_id: &str) -> Option<DashboardView> {
        self.sessions.get_mut(session_id).map(|mut dashboard| {
            dashboard.touch();
            dashboard.view()
        })
    }

    pub fn apply(&self, session_id: &str, event: &ControlEvent) -> Option<DashboardView> {
        self.sessions
            .get_mut(session_id)
            .map(|mut dashboard| dashboard.apply(event))
    }

    pub fn close_session(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    pub fn cleanup_expired_sessions(&self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, dashboard| !dashboard.is_expired(self.ttl));
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            log::info!("🧹 Dropped {} idle dashboard sessions", removed);
        }
        removed
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
