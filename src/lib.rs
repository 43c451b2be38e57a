use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod invoice;
pub mod terbilang;

pub use crate::config::ServerConfig;
pub use crate::invoice::InvoiceGenerator;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::invoice::handlers::api_index,
            crate::invoice::handlers::health_check,
            crate::invoice::handlers::preview_terbilang,
            crate::invoice::handlers::generate_invoice,
        ),
        components(
            schemas(
                invoice::models::InvoiceRequest,
                invoice::models::InvoiceItem,
                invoice::handlers::HealthResponse,
                invoice::handlers::TerbilangResponse,
                invoice::validation::ValidationError,
                invoice::validation::ValidationFailedResponse,
                ErrorResponse,
            )
        ),
        tags(
            (name = "Invoice Service", description = "Invoice generation and terbilang preview endpoints.")
        )
    )]
    struct ApiDoc;

    let config = ServerConfig::from_env();

    let generator = match InvoiceGenerator::new() {
        Ok(generator) => web::Data::new(generator),
        Err(e) => {
            log::error!("Failed to load the invoice template. Please ensure static/faktur.typ exists. Error: {e}");
            std::process::exit(1);
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("faktur_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    prometheus
        .registry
        .register(Box::new(invoice::handlers::INVOICES_GENERATED.clone()))
        .expect("Failed to register invoice counter");

    let frontend_url = config.frontend_url.clone();

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        let generator = generator.clone();
        let prometheus = prometheus.clone();
        let cors = Cors::default()
            .allowed_origin(&frontend_url)
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(generator)
            .service(
                web::scope("/api/invoices")
                    .service(
                        web::resource("/health")
                            .route(web::get().to(invoice::handlers::health_check)),
                    )
                    .service(
                        web::resource("/generate")
                            .route(web::post().to(invoice::handlers::generate_invoice)),
                    )
                    .service(
                        web::resource("/terbilang")
                            .route(web::get().to(invoice::handlers::preview_terbilang)),
                    ),
            )
            .service(web::resource("/").route(web::get().to(invoice::handlers::api_index)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .default_service(web::route().to(invoice::handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
