use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use prompt_gate::config::traits::Env;
use prompt_gate::config::AppSettings;
use prompt_gate::features;
use prompt_gate::features::ai::{AiConfigService, JsonFileStore};
use prompt_gate::swagger::ApiDoc;
use prompt_gate::utils::token_service::TokenService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .with_line_number(true)
        .init();

    let settings = AppSettings::from_env().expect("Failed to load settings");

    // region services
    let token_service = TokenService::new(
        settings.auth_secret.as_bytes(),
        settings.auth_issuer.clone(),
        settings.auth_audience.clone(),
    );
    let ai_service = AiConfigService::new(JsonFileStore::new(&settings.ai_config_path));
    // endregion services

    let openapi = ApiDoc::openapi();
    let bind = (settings.http_host.clone(), settings.http_port);
    tracing::info!(host = %bind.0, port = bind.1, config_path = %settings.ai_config_path, "starting");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(token_service.clone()))
            .app_data(web::Data::new(ai_service.clone()))
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allow_any_header(),
            ) // should be restricted for production!!!
            .service(
                SwaggerUi::new("/swagger/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .service(
                web::scope("/api/v1")
                    .service(features::system::health)
                    .service(features::system::version)
                    .service(features::ai::config)
                    .service(features::ai::update_prompt)
                    .service(features::ai::update_parameters),
            )
    })
    .bind(bind)?
    .run()
    .await
}
