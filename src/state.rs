//! Shared application state: the configuration every handler connects with.
//! No database handle lives here; each request opens its own via `db::connect`.

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}
