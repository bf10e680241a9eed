use std::num::NonZeroU32;
use std::sync::Arc;

use crate::{build_pool, run_migrations, AppState, DbPool};

/// Private in-memory database. A single connection keeps the data alive for the pool's lifetime.
pub fn memory_pool() -> DbPool {
    let pool = build_pool(":memory:", 1).expect("in-memory pool");
    run_migrations(&pool).expect("migrations apply to a fresh database");
    pool
}

pub fn test_state(admin_token: Option<&str>, submissions_per_minute: u32) -> Arc<AppState> {
    state_with_proxy(admin_token, submissions_per_minute, false)
}

/// Same as `test_state` but keyed on `X-Forwarded-For`, as when deployed behind a proxy.
pub fn proxied_test_state(admin_token: Option<&str>, submissions_per_minute: u32) -> Arc<AppState> {
    state_with_proxy(admin_token, submissions_per_minute, true)
}

fn state_with_proxy(admin_token: Option<&str>, submissions_per_minute: u32, trust_proxy: bool) -> Arc<AppState> {
    Arc::new(AppState::new(
        memory_pool(),
        admin_token.map(str::to_string),
        NonZeroU32::new(submissions_per_minute).expect("non-zero limit"),
        trust_proxy,
    ))
}
