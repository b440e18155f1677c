use authgate_config::{CorsConfig, JwtConfig};

use crate::middleware::auth::BearerTokenResolver;

#[derive(Clone, Debug)]
pub struct AppState {
    pub cors_config: CorsConfig,
    pub resolver: BearerTokenResolver,
}

impl AppState {
    pub fn new(jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            resolver: BearerTokenResolver::new(jwt_config),
            cors_config,
        }
    }
}

pub fn init_app_state() -> AppState {
    AppState::new(JwtConfig::from_env(), CorsConfig::from_env())
}
