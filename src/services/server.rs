use anyhow::Result;
use log::info;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::seed;

pub struct ServerService {
    config: AppConfig,
}

impl ServerService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<()> {
        let addr = self.config.server.socket_addr();
        let state = Arc::new(AppState::new(self.config));

        if let Some(path) = state.config.seed_path.as_deref() {
            let updates = seed::load_updates(path)?;
            let applied = seed::apply_updates(&state.board, &updates, seed::now_millis());
            info!("Seeded leaderboard with {} updates ({} players)", applied, state.board.len());
        }

        let app = create_router(state).layer(CorsLayer::permissive());

        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
