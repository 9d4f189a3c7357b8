//! HTTP request handlers and their response payloads.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use veritier_status::display::{Badge, TierDisplay};
use veritier_status::panel::VerificationPanel;
use veritier_status::resolve_panel;
use veritier_types::UserInfo;

use crate::error::RpcError;
use crate::server::AppState;

// ── Verification panel ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PanelResponse {
    pub uid: String,
    pub level: u32,
    pub header_key: String,
    pub tiers: Vec<TierRow>,
}

#[derive(Serialize)]
pub struct TierRow {
    pub tier: String,
    pub display: TierDisplay,
    pub title_key: String,
    pub message_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_key: Option<String>,
}

impl PanelResponse {
    /// Build the wire payload from a user snapshot and a resolved panel.
    pub fn from_parts(user: &UserInfo, panel: VerificationPanel) -> Self {
        let tiers = panel
            .tiers
            .into_iter()
            .map(|row| TierRow {
                tier: row.tier.as_str().to_string(),
                display: row.display,
                title_key: row.title_key.to_string(),
                message_key: row.message_key.to_string(),
                link: row.link.map(str::to_string),
                verified: row.verified,
                badge: row.badge,
                badge_key: row.badge_key.map(str::to_string),
            })
            .collect();
        Self {
            uid: user.uid.clone(),
            level: user.level,
            header_key: panel.header_key.to_string(),
            tiers,
        }
    }
}

/// `GET /profile/{uid}/verification`
///
/// Fetches the user and label snapshots from the accounts service,
/// resolves the panel, and returns the display descriptor.
pub async fn get_verification_panel(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> Result<Json<PanelResponse>, RpcError> {
    let user = state.accounts.fetch_user(&uid).await?;

    // A failed label fetch degrades to an empty snapshot: the panel
    // still resolves, with the identity action link suppressed.
    let labels = match state.accounts.fetch_labels(&uid).await {
        Ok(labels) => labels,
        Err(e) => {
            warn!("label fetch for {uid} failed: {e}; resolving without labels");
            Vec::new()
        }
    };

    let panel = resolve_panel(&user, &labels);
    Ok(Json(PanelResponse::from_parts(&user, panel)))
}

// ── Health ───────────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
