use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::Filter;
use crate::config::constants::{DASHBOARD_TITLE, MAX_SESSION_ID_LENGTH, SERVER_PORT_SEARCH_SPAN};
use crate::enums::control_event::ControlEvent;
use crate::enums::site_selection::SiteSelection;
use crate::errors::{DashError, DashResult};
use crate::services::launch_aggregator::LaunchAggregator;
use crate::structs::payload_range::PayloadRange;
use crate::ui::chart_renderer::ChartRenderer;
use crate::ui::session_manager::SessionManager;

type JsonReply = warp::reply::WithStatus<warp::reply::Json>;

#[derive(Debug, Deserialize)]
pub struct PieQuery {
    pub site: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

pub struct DashboardServer {
    session_manager: Arc<SessionManager>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl DashboardServer {
    pub const fn new(session_manager: Arc<SessionManager>) -> Self {
        Self {
            session_manager,
            shutdown_tx: None,
        }
    }

    pub async fn start(&mut self, host: &str, port: u16) -> DashResult<SocketAddr> {
        let ip: IpAddr = host
            .parse()
            .map_err(|_| DashError::validation_error("server.host", host, "must be an IP address", Some("Use 127.0.0.1 or 0.0.0.0")))?;
        let port = Self::find_available_port(ip, port).await?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let routes = routes(Arc::clone(&self.session_manager));
        let (address, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(SocketAddr::new(ip, port), async move {
                shutdown_rx.await.ok();
            })
            .map_err(|e| DashError::server_error(&format!("{ip}:{port}"), &e.to_string()))?;

        tokio::spawn(server);

        log::info!("🌐 Dashboard server started on http://{}", address);
        Ok(address)
    }

    pub fn shutdown(&mut self) -> DashResult<()> {
        log::info!("🛑 Shutting down dashboard server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|()|
                DashError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        log::info!("✅ Dashboard server shutdown complete");
        Ok(())
    }

    /// First free port in `[preferred, preferred + span)`; port 0 lets the OS choose.
    async fn find_available_port(ip: IpAddr, preferred: u16) -> DashResult<u16> {
        if preferred == 0 {
            return Ok(0);
        }
        let last = preferred.saturating_add(SERVER_PORT_SEARCH_SPAN);
        for port in preferred..last {
            if let Ok(listener) = tokio::net::TcpListener::bind(SocketAddr::new(ip, port)).await {
                drop(listener);
                if port != preferred {
                    log::warn!("⚠️ Port {} is busy, using {} instead", preferred, port);
                }
                return Ok(port);
            }
        }
        Err(DashError::server_error(
            &format!("{ip}:{preferred}-{last}"),
            "No available ports found",
        ))
    }
}

pub fn routes(
    session_manager: Arc<SessionManager>,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let session_manager_filter = warp::any().map(move || Arc::clone(&session_manager));

    let page = warp::path::end()
        .and(warp::get())
        .and_then(serve_dashboard_page);

    let create_session = warp::path!("api" / "session")
        .and(warp::post())
        .and(session_manager_filter.clone())
        .and_then(create_session_handler);

    let get_session = warp::path!("api" / "session" / String)
        .and(warp::get())
        .and(session_manager_filter.clone())
        .and_then(get_session_handler);

    let control = warp::path!("api" / "session" / String / "control")
        .and(warp::post())
        .and(warp::body::json())
        .and(session_manager_filter.clone())
        .and_then(control_handler);

    let pie = warp::path!("api" / "pie")
        .and(warp::get())
        .and(warp::query::<PieQuery>())
        .and(session_manager_filter.clone())
        .and_then(pie_handler);

    let scatter = warp::path!("api" / "scatter")
        .and(warp::get())
        .and(warp::query::<ScatterQuery>())
        .and(session_manager_filter)
        .and_then(scatter_handler);

    page.or(create_session)
        .or(get_session)
        .or(control)
        .or(pie)
        .or(scatter)
        .recover(handle_rejection)
        .with(warp::log("spacex_dash::http"))
}

async fn serve_dashboard_page() -> Result<impl warp::Reply, Infallible> {
    let html = include_str!("static/index.html")
        .replace("{{TITLE}}", DASHBOARD_TITLE);
    Ok(warp::reply::html(html))
}

fn sanitize_session_id(session_id: &str) -> String {
    session_id.chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .take(MAX_SESSION_ID_LENGTH)
        .collect()
}

fn ok(body: &serde_json::Value) -> JsonReply {
    warp::reply::with_status(warp::reply::json(body), StatusCode::OK)
}

fn error(status: StatusCode, message: &str) -> JsonReply {
    warp::reply::with_status(warp::reply::json(&json!({ "error": message })), status)
}

/// Maps warp rejections to the same `{"error": ...}` body the handlers return.
async fn handle_rejection(rejection: warp::Rejection) -> Result<JsonReply, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if let Some(e) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, format!("Invalid request body: {e}"))
    } else if rejection.find::<warp::reject::InvalidQuery>().is_some() {
        (StatusCode::BAD_REQUEST, "Invalid query string".to_string())
    } else if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected a JSON body".to_string())
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else {
        log::warn!("⚠️ Unhandled rejection: {:?}", rejection);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
    };

    Ok(error(status, &message))
}

async fn create_session_handler(session_manager: Arc<SessionManager>) -> Result<JsonReply, Infallible> {
    let (session_id, view) = session_manager.create_session();
    Ok(ok(&json!({
        "session_id": session_id,
        "controls": session_manager.controls(),
        "view": view,
    })))
}

async fn get_session_handler(session_id: String, session_manager: Arc<SessionManager>) -> Result<JsonReply, Infallible> {
    let sanitized_session_id = sanitize_session_id(&session_id);
    if sanitized_session_id.is_empty() {
        return Ok(error(StatusCode::BAD_REQUEST, "Invalid session ID"));
    }

    match session_manager.get_view(&sanitized_session_id) {
        Some(view) => Ok(ok(&json!({
            "session_id": sanitized_session_id,
            "controls": session_manager.controls(),
            "view": view,
        }))),
        None => Ok(error(StatusCode::NOT_FOUND, "Session not found")),
    }
}

async fn control_handler(
    session_id: String,
    body: serde_json::Value,
    session_manager: Arc<SessionManager>,
) -> Result<JsonReply, Infallible> {
    let sanitized_session_id = sanitize_session_id(&session_id);
    if sanitized_session_id.is_empty() {
        return Ok(error(StatusCode::BAD_REQUEST, "Invalid session ID"));
    }

    let event: ControlEvent = match serde_json::from_value(body) {
        Ok(event) => event,
        Err(e) => return Ok(error(StatusCode::BAD_REQUEST, &format!("Invalid control event: {e}"))),
    };

    match session_manager.apply(&sanitized_session_id, &event) {
        Some(view) => Ok(ok(&json!(view))),
        None => Ok(error(StatusCode::NOT_FOUND, "Session not found")),
    }
}

async fn pie_handler(query: PieQuery, session_manager: Arc<SessionManager>) -> Result<JsonReply, Infallible> {
    let context = session_manager.context();
    let site = query.site.map_or(SiteSelection::All, SiteSelection::from);
    let data = LaunchAggregator::pie_data(&context.table, &site, context.pie_label_policy);
    Ok(ok(&json!(ChartRenderer::render_pie(&data))))
}

async fn scatter_handler(query: ScatterQuery, session_manager: Arc<SessionManager>) -> Result<JsonReply, Infallible> {
    let context = session_manager.context();
    let site = query.site.map_or(SiteSelection::All, SiteSelection::from);
    let range = PayloadRange::new(
        query.low.unwrap_or_else(|| context.table.min_payload()),
        query.high.unwrap_or_else(|| context.table.max_payload()),
    );
    let data = LaunchAggregator::scatter_data(&context.table, &site, range);
    Ok(ok(&json!(ChartRenderer::render_scatter(&data))))
}
