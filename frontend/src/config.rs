// `trunk serve` and `cargo run` listen on different ports during development;
// release bundles are served by the backend itself.
#[cfg(debug_assertions)]
const BACKEND_ORIGIN: &str = "http://localhost:3000";

#[cfg(not(debug_assertions))]
const BACKEND_ORIGIN: &str = "";

pub fn get_backend_url() -> &'static str {
    BACKEND_ORIGIN
}

pub fn api_url(endpoint: &str) -> String {
    format!("{}/api/{}", get_backend_url(), endpoint.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_without_double_slash() {
        assert_eq!(api_url("/newsletter"), format!("{}/api/newsletter", BACKEND_ORIGIN));
        assert_eq!(api_url("demo-requests"), format!("{}/api/demo-requests", BACKEND_ORIGIN));
    }
}
