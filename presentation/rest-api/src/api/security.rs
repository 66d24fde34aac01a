use poem::Request;
use poem_openapi::{SecurityScheme, auth::ApiKey};

use crate::config::admin_config::AdminConfig;

/// API key authentication for catalog administration
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-API-Key",
    key_in = "header",
    checker = "admin_api_key_checker"
)]
#[allow(dead_code)]
pub struct AdminApiKey(pub String);

async fn admin_api_key_checker(req: &Request, api_key: ApiKey) -> Option<String> {
    let Some(config) = req.data::<AdminConfig>() else {
        tracing::error!("Admin configuration missing from request data");
        return None;
    };

    check_api_key(config, api_key.key)
}

fn check_api_key(config: &AdminConfig, key: String) -> Option<String> {
    if !config.is_enabled() {
        tracing::warn!("Admin request rejected: ADMIN_API_KEY is not configured");
        return None;
    }

    if config.authorizes(&key) {
        Some(key)
    } else {
        tracing::warn!("Admin request rejected: invalid API key");
        None
    }
}
