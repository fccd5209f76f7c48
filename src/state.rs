use sqlx::PgPool;

use crate::auth::TokenService;
use crate::config::AppConfig;

/// Shared application state, constructed once in main and injected into every
/// handler. Replaces ambient singletons for the pool and signing secret.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub tokens: TokenService,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig, pool: PgPool) -> Self {
        let tokens = TokenService::new(
            &config.security.jwt_secret,
            config.security.token_expiry_days,
        );
        Self {
            pool,
            tokens,
            config,
        }
    }
}
