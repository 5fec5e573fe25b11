use actix_web::{get, post, web, HttpResponse};
use serde_json::json;
use utoipa;

use super::{AiConfig, AiConfigService, UpdateParametersReq, UpdatePromptReq};
use crate::utils::error::Result;
use crate::utils::token_service::Principal;

#[utoipa::path(
    get,
    path = "/api/v1/ai/config",
    tag = "ai",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current AI configuration", body = AiConfig),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Configuration unreadable")
    )
)]
#[get("/ai/config")]
pub async fn config(
    _principal: Principal,
    service: web::Data<AiConfigService>,
) -> Result<HttpResponse> {
    let cfg = service.get().await?;
    Ok(HttpResponse::Ok().json(cfg))
}

#[utoipa::path(
    post,
    path = "/api/v1/ai/prompt",
    tag = "ai",
    security(("bearer" = [])),
    request_body = UpdatePromptReq,
    responses(
        (status = 200, description = "Prompt updated"),
        (status = 400, description = "Prompt missing or blank"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Configuration unwritable")
    )
)]
#[post("/ai/prompt")]
pub async fn update_prompt(
    principal: Principal,
    service: web::Data<AiConfigService>,
    payload: web::Json<UpdatePromptReq>,
) -> Result<HttpResponse> {
    service.update_prompt(&payload).await?;
    tracing::info!(subject = %principal.subject, "ai prompt updated");
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "AI prompt updated"
    })))
}

#[utoipa::path(
    post,
    path = "/api/v1/ai/parameters",
    tag = "ai",
    security(("bearer" = [])),
    request_body = UpdateParametersReq,
    responses(
        (status = 200, description = "Parameters updated"),
        (status = 400, description = "Missing or out-of-range parameters"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Configuration unwritable")
    )
)]
#[post("/ai/parameters")]
pub async fn update_parameters(
    principal: Principal,
    service: web::Data<AiConfigService>,
    payload: web::Json<UpdateParametersReq>,
) -> Result<HttpResponse> {
    service.update_parameters(&payload).await?;
    tracing::info!(subject = %principal.subject, "ai parameters updated");
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "AI parameters updated"
    })))
}
