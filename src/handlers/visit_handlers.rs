use std::time::{Duration, Instant};

use actix_web::HttpRequest;

use crate::db::schema::USER_IP_MAX_LEN;
use crate::error::Result;
use crate::models::visit::Visit;
use crate::state::app_state::AppState;
use crate::utils::mask_ip::mask_ip_str;

pub const RECENT_VISIT_LIMIT: u32 = 10;

const FAVICON_PATH: &str = "/favicon.ico";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The last visits read back after logging one.
#[derive(Debug)]
pub struct VisitReport {
    pub visits: Vec<Visit>,
    pub elapsed: Duration,
}

impl VisitReport {
    pub fn render(&self) -> String {
        let lines: String = self
            .visits
            .iter()
            .map(|visit| {
                format!(
                    "Time: {} Addr: {}\n",
                    visit.timestamp.format(TIMESTAMP_FORMAT),
                    visit.user_ip
                )
            })
            .collect();

        format!(
            "Last 10 visits:\n{}Elapsed: {}\n",
            lines,
            self.elapsed.as_millis()
        )
    }
}

/// Masked transport-level address of the caller.
fn caller_ip(req: &HttpRequest) -> String {
    let conn = req.connection_info();
    match conn.peer_addr() {
        Some(raw) => mask_ip_str(raw).unwrap_or_else(|| {
            log::warn!("Cannot mask peer address {}, storing it as is", raw);
            raw.chars().take(USER_IP_MAX_LEN).collect()
        }),
        None => {
            log::warn!("No peer address for {}", req.path());
            "unknown".to_string()
        }
    }
}

/// Record the caller's masked address.
///
/// Favicon probes are skipped. With `with_report` the newest visits are read
/// back and returned; otherwise `Ok(None)`.
pub async fn log_visit(
    state: &AppState,
    req: &HttpRequest,
    with_report: bool,
) -> Result<Option<VisitReport>> {
    if req.path().starts_with(FAVICON_PATH) {
        return Ok(None);
    }

    let store = state.visit_store()?;

    let visit = Visit::new(caller_ip(req));

    store.ensure_table().await?;
    let started = Instant::now();
    store.insert(&visit.user_ip, visit.timestamp).await?;

    if !with_report {
        return Ok(None);
    }

    let visits = store.recent(RECENT_VISIT_LIMIT).await?;
    Ok(Some(VisitReport {
        visits,
        elapsed: started.elapsed(),
    }))
}
