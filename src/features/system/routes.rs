use actix_web::{get, HttpResponse, Result};
use chrono::Utc;
use serde_json::json;
use sysinfo::System;
use utoipa;

#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "system",
    responses(
        (status = 200, description = "API liveness + host metadata")
    )
)]
#[get("/health")]
pub async fn health() -> Result<HttpResponse> {
    let mut sys = System::new_all();
    sys.refresh_all();

    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "host": {
            "host_name": System::host_name(),
            "os_version": System::os_version(),
            "memory": {
                "total_bytes": sys.total_memory(),
                "available_bytes": sys.available_memory(),
            },
        }
    })))
}

#[utoipa::path(
    get,
    path = "/api/v1/version",
    tag = "system",
    responses(
        (status = 200, description = "API name and version")
    )
)]
#[get("/version")]
pub async fn version() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "name": env!("CARGO_PKG_NAME")
    })))
}
