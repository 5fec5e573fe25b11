use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::ai::{AiConfig, UpdateParametersReq, UpdatePromptReq};

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "ai", description = "AI configuration for the messaging bot"),
        (name = "system", description = "Liveness and build metadata")
    ),
    paths(
        crate::features::ai::config,
        crate::features::ai::update_prompt,
        crate::features::ai::update_parameters,
        crate::features::system::health,
        crate::features::system::version,
    ),
    components(schemas(AiConfig, UpdatePromptReq, UpdateParametersReq)),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
