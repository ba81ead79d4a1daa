#![allow(dead_code)]

use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;
use tiny_shortener::application::services::{CodePolicy, LinkService};
use tiny_shortener::infrastructure::persistence::{self, PoolSettings, SqliteUrlRepository};
use tiny_shortener::state::AppState;
use tiny_shortener::utils::request_origin::OriginPolicy;

/// Origin used by tests that send a `Host` header.
pub const TEST_HOST: &str = "s.example.com";

/// A migrated database in a temporary directory.
///
/// The directory (and the database file) is removed on drop.
pub struct TestDb {
    pub pool: SqlitePool,
    _dir: TempDir,
}

pub async fn create_test_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("test.db").display());

    let pool = persistence::connect(&url, &PoolSettings::default())
        .await
        .unwrap();
    persistence::migrate(&pool).await.unwrap();

    TestDb { pool, _dir: dir }
}

pub fn create_repository(pool: &SqlitePool) -> Arc<SqliteUrlRepository> {
    Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())))
}

pub fn create_test_state(pool: &SqlitePool) -> AppState {
    create_test_state_with(pool, CodePolicy::default(), OriginPolicy::default())
}

pub fn create_test_state_with(
    pool: &SqlitePool,
    policy: CodePolicy,
    origin: OriginPolicy,
) -> AppState {
    let link_service = Arc::new(LinkService::new(create_repository(pool), policy));
    AppState::new(link_service, origin)
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str, clicks: i64) {
    sqlx::query("INSERT INTO urls (code, url, created_at, clicks) VALUES (?1, ?2, ?3, ?4)")
        .bind(code)
        .bind(url)
        .bind(Utc::now())
        .bind(clicks)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn get_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM urls WHERE code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
