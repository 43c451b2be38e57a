//! Invoice PDF generator.
//!
//! Loads the Typst invoice template once at startup, splices rendered
//! invoice data into its function call and compiles the result to PDF.

use std::fs;
use std::path::Path;
use tempfile::tempdir;

use super::common::{escape_typst_string, sanitize_filename};
use super::engine::compile_typst_to_pdf;
use super::models::{RenderedInvoice, RenderedItem};
use super::traits::Generator;
use super::{GeneratedDocument, RenderError};

const TEMPLATE_FILE: &str = "faktur.typ";

/// Get the static assets directory path.
fn get_static_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

/// Generator for rental invoice PDFs.
pub struct InvoiceGenerator {
    template: String,
}

impl InvoiceGenerator {
    /// Load the invoice template from the static directory.
    pub fn new() -> Result<Self, RenderError> {
        let template_path = get_static_dir().join(TEMPLATE_FILE);
        let template = fs::read_to_string(&template_path).map_err(RenderError::Template)?;
        Ok(Self { template })
    }

    fn render_template(&self, invoice: &RenderedInvoice) -> String {
        format!(
            r#"#let faktur(
  pelanggan: "{pelanggan}",
  tanggal: "{tanggal}",
  invoice_no: "{invoice_no}",
  periode: "{periode}",
  alamat_sewa: "{alamat_sewa}",
  items: (
{items}
  ),
  subtotal: "{subtotal}",
  ongkir: "{ongkir}",
  total: "{total}",
  total_terbilang: "{total_terbilang}",
  keterangan: "{keterangan}",
) = {{{body}
#faktur()
"#,
            pelanggan = escape_typst_string(&invoice.pelanggan),
            tanggal = escape_typst_string(&invoice.tanggal),
            invoice_no = escape_typst_string(&invoice.invoice_no),
            periode = escape_typst_string(&invoice.periode),
            alamat_sewa = escape_typst_string(&invoice.alamat_sewa),
            items = render_items(&invoice.items),
            subtotal = escape_typst_string(&invoice.subtotal),
            ongkir = escape_typst_string(&invoice.ongkir),
            total = escape_typst_string(&invoice.total),
            total_terbilang = escape_typst_string(&invoice.total_terbilang),
            keterangan = escape_typst_string(&invoice.keterangan),
            body = self.extract_function_body(),
        )
    }

    /// Extract the function body from the template: everything after the
    /// signature's `) = {`, up to the trailing `#faktur()` call. The slice
    /// keeps the function's own closing brace.
    fn extract_function_body(&self) -> String {
        if let Some(start) = self.template.find(") = {") {
            let body_start = start + 5;
            if let Some(end) = self.template.rfind("#faktur()") {
                return self.template[body_start..end].to_string();
            }
        }
        self.template.clone()
    }
}

impl Generator<RenderedInvoice> for InvoiceGenerator {
    fn generate(&self, invoice: &RenderedInvoice) -> Result<GeneratedDocument, RenderError> {
        let typst_source = self.render_template(invoice);

        let temp_dir = tempdir().map_err(RenderError::TempDir)?;
        let typ_path = temp_dir.path().join(TEMPLATE_FILE);
        fs::write(&typ_path, &typst_source).map_err(RenderError::WriteSource)?;

        let pdf = compile_typst_to_pdf(&temp_dir, TEMPLATE_FILE, "faktur.pdf")?;

        let filename = format!(
            "invoice-{}.pdf",
            sanitize_filename(&invoice.invoice_no, "faktur")
        );

        Ok(GeneratedDocument { filename, pdf })
    }
}

/// Render line items as a Typst array of dictionaries, one per row.
fn render_items(items: &[RenderedItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"    (no: "{}", nama: "{}", jumlah: "{}", harga: "{}", total: "{}"),"#,
                item.no,
                escape_typst_string(&item.nama),
                item.jumlah,
                escape_typst_string(&item.harga),
                escape_typst_string(&item.total),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::models::InvoiceRequest;

    fn sample_rendered() -> RenderedInvoice {
        let request: InvoiceRequest = serde_json::from_str(
            r#"{
                "pelanggan": "CV Sumber \"Rejeki\"",
                "tanggal": "2026-08-07",
                "invoiceNo": "INV/2026/001",
                "periode": "Agustus 2026",
                "alamatSewa": "Jl. Raya Bekasi KM 25, Jakarta Timur",
                "noItems": [{ "name": "Sewa genset", "quantity": 1, "price": 350000 }]
            }"#,
        )
        .unwrap();
        RenderedInvoice::from_request(&request).unwrap()
    }

    #[test]
    fn test_new_generator() {
        // Requires static/faktur.typ to exist in the repository.
        let result = InvoiceGenerator::new();
        assert!(result.is_ok());
    }

    #[test]
    fn test_render_template_substitutes_values() {
        let generator = InvoiceGenerator::new().unwrap();
        let source = generator.render_template(&sample_rendered());

        assert!(source.starts_with("#let faktur("));
        assert!(source.trim_end().ends_with("#faktur()"));
        assert!(source.contains(r#"CV Sumber \"Rejeki\""#));
        assert!(source.contains(r#"invoice_no: "INV/2026/001""#));
        assert!(source.contains(r#"total_terbilang: "Tiga ratus lima puluh ribu rupiah""#));
        assert!(source.contains(r#"(no: "1", nama: "Sewa genset", jumlah: "1""#));
    }

    #[test]
    fn test_generated_filename_is_sanitized() {
        let invoice = sample_rendered();
        let filename = format!(
            "invoice-{}.pdf",
            sanitize_filename(&invoice.invoice_no, "faktur")
        );
        assert_eq!(filename, "invoice-inv-2026-001.pdf");
    }
}
