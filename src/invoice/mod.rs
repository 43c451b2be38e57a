//! Invoice module - validation, rendering and HTTP handlers for generating
//! rental invoice PDFs from a Typst template.

pub mod common;
pub mod engine;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod traits;
pub mod validation;

pub use generator::InvoiceGenerator;
pub use models::{InvoiceItem, InvoiceRequest, RenderedInvoice};
pub use traits::{Generator, Validator};

use thiserror::Error;

/// Errors that can occur while rendering an invoice PDF.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to load invoice template: {0}")]
    Template(#[source] std::io::Error),
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write Typst source: {0}")]
    WriteSource(#[source] std::io::Error),
    #[error("failed to run the Typst compiler: {0}")]
    CompilerIo(#[source] std::io::Error),
    #[error("Typst compiler exited with status {0}")]
    CompilerExit(i32),
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
}

/// Result of a successful invoice render.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
}
