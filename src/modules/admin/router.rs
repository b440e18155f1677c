use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_overview;

pub fn init_admin_router() -> Router<AppState> {
    Router::new().route("/overview", get(get_overview))
}
