//! HTTP handlers for the invoice API.

use actix_web::{http::header, web, HttpResponse, Responder};
use lazy_static::lazy_static;
use prometheus::IntCounter;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::invoice::generator::InvoiceGenerator;
use crate::invoice::models::{InvoiceRequest, RenderedInvoice};
use crate::invoice::traits::{Generator, Validator};
use crate::invoice::validation::ValidationFailedResponse;
use crate::terbilang::terbilang;
use crate::ErrorResponse;

lazy_static! {
    /// Counts successfully generated invoice PDFs; exported at /metrics.
    pub static ref INVOICES_GENERATED: IntCounter = IntCounter::new(
        "faktur_invoices_generated_total",
        "Total invoice PDFs generated successfully",
    )
    .expect("invoice counter definition is valid");
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    #[schema(example = "Invoice generator API is running")]
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TerbilangQuery {
    /// Nominal in rupiah to spell out.
    pub amount: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TerbilangResponse {
    #[schema(example = 1500000.0)]
    pub amount: f64,
    #[schema(example = "Satu juta lima ratus ribu rupiah")]
    pub terbilang: String,
}

#[utoipa::path(
    tag = "Invoice Service",
    get,
    path = "/",
    responses(
        (status = 200, description = "API index with available endpoints")
    )
)]
pub async fn api_index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Faktur Server API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /api/invoices/health",
            "generate": "POST /api/invoices/generate",
            "terbilang": "GET /api/invoices/terbilang?amount=<nominal>"
        }
    }))
}

#[utoipa::path(
    context_path = "/api/invoices",
    tag = "Invoice Service",
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Invoice generator API is running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[utoipa::path(
    context_path = "/api/invoices",
    tag = "Invoice Service",
    get,
    path = "/terbilang",
    params(TerbilangQuery),
    responses(
        (status = 200, description = "Spelled-out amount", body = TerbilangResponse),
        (status = 400, description = "Amount outside the supported range", body = ErrorResponse)
    )
)]
pub async fn preview_terbilang(query: web::Query<TerbilangQuery>) -> impl Responder {
    match terbilang(query.amount) {
        Ok(words) => HttpResponse::Ok().json(TerbilangResponse {
            amount: query.amount,
            terbilang: words,
        }),
        Err(err) => HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string())),
    }
}

#[utoipa::path(
    context_path = "/api/invoices",
    tag = "Invoice Service",
    post,
    path = "/generate",
    request_body = InvoiceRequest,
    responses(
        (status = 200, description = "Rendered invoice PDF", content_type = "application/pdf"),
        (status = 400, description = "Invalid invoice data", body = ValidationFailedResponse),
        (status = 500, description = "Rendering failed", body = ErrorResponse)
    )
)]
pub async fn generate_invoice(
    req: web::Json<InvoiceRequest>,
    generator: web::Data<InvoiceGenerator>,
) -> impl Responder {
    let request = req.into_inner();

    if let Err(errors) = request.validate() {
        log::warn!("Rejected invoice request:\n{}", errors.to_message());
        return HttpResponse::BadRequest().json(ValidationFailedResponse::from(errors));
    }

    let rendered = match RenderedInvoice::from_request(&request) {
        Ok(rendered) => rendered,
        Err(err) => {
            return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&format!(
                "Total invoice tidak dapat diterbilangkan: {err}"
            )));
        }
    };

    log::info!(
        "Generating invoice {} for {} (total Rp {})",
        rendered.invoice_no,
        rendered.pelanggan,
        rendered.total
    );

    let document = match web::block(move || generator.generate(&rendered)).await {
        Ok(Ok(document)) => document,
        Ok(Err(err)) => {
            log::error!("Invoice rendering failed: {err}");
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Gagal membuat berkas PDF invoice"));
        }
        Err(err) => {
            log::error!("Invoice rendering task failed: {err}");
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Gagal membuat berkas PDF invoice"));
        }
    };

    INVOICES_GENERATED.inc();

    HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.filename),
        ))
        .body(document.pdf)
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorResponse::not_found("Route tidak ditemukan"))
}
