use std::env;

/// Access settings for the catalog administration endpoints.
///
/// Environment variables:
/// - ADMIN_API_KEY: key expected in the `X-API-Key` header. When unset or
///   blank, every admin request is rejected.
#[derive(Debug, Clone, Default)]
pub struct AdminConfig {
    api_key: Option<String>,
}

impl AdminConfig {
    pub fn from_env() -> Self {
        Self::new(env::var("ADMIN_API_KEY").ok())
    }

    pub fn new(api_key: Option<String>) -> Self {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        Self { api_key }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn authorizes(&self, candidate: &str) -> bool {
        match &self.api_key {
            Some(expected) => {
                // Constant time over the key length
                expected.len() == candidate.len()
                    && expected
                        .bytes()
                        .zip(candidate.bytes())
                        .fold(0_u8, |acc, (a, b)| acc | (a ^ b))
                        == 0
            }
            None => false,
        }
    }
}
