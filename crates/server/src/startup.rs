use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use configs::{AppConfig, LogFormat};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, auth::ServerState};
use service::auth::{repo::seaorm::SeaOrmAuthRepository, AuthConfig, AuthService};
use service::directory::{repo::seaorm::SeaOrmStudentRepository, DirectoryConfig, DirectoryService};

/// Initialize logging via shared common utils
pub fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => init_logging_default(),
        LogFormat::Json => init_logging_json(),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire repositories and services over one connection pool.
pub fn build_state(db: DatabaseConnection, cfg: &AppConfig) -> ServerState {
    let auth_repo = Arc::new(SeaOrmAuthRepository { db: db.clone() });
    let student_repo = Arc::new(SeaOrmStudentRepository { db });
    ServerState {
        auth: Arc::new(AuthService::new(auth_repo, AuthConfig::from_settings(&cfg.auth))),
        directory: Arc::new(DirectoryService::new(student_repo, DirectoryConfig::from_settings(&cfg.directory))),
        require_auth: cfg.auth.require_auth,
    }
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: connect, migrate, build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    // 连接数据库并执行未应用的迁移
    let db = models::db::connect_and_migrate(&cfg.database).await?;

    if cfg.auth.uses_dev_secret() {
        warn!("auth.jwt_secret not configured; signing tokens with the development secret");
    }

    let app = build_app(build_state(db, &cfg));

    // 绑定地址并启动服务
    let addr: SocketAddr = cfg.bind_addr().parse()?;
    info!(%addr, require_auth = cfg.auth.require_auth, "starting student directory server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
