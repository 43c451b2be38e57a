//! Invoice request payloads and their display-ready counterparts.

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use super::common::{format_indonesian_date, format_rupiah};
use crate::terbilang::{terbilang, TerbilangError};

/// One invoice line item.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct InvoiceItem {
    #[schema(example = "Sewa scaffolding 190 set")]
    pub name: String,
    #[schema(example = 2)]
    pub quantity: u32,
    #[schema(example = 1500000.0)]
    pub price: f64,
}

impl InvoiceItem {
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// Invoice payload, wire-compatible with the invoice form.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    #[schema(example = "PT Maju Jaya")]
    pub pelanggan: String,
    #[schema(example = "2026-08-07")]
    pub tanggal: NaiveDate,
    #[schema(example = "INV-2026-001")]
    pub invoice_no: String,
    #[schema(example = "Agustus 2026")]
    pub periode: String,
    #[schema(example = "Jl. Raya Bogor KM 26, Kramat Jati, Jakarta Timur")]
    pub alamat_sewa: String,
    #[serde(rename = "noItems")]
    pub items: Vec<InvoiceItem>,
    #[serde(default)]
    #[schema(example = 150000.0)]
    pub ongkir: Option<f64>,
    #[serde(default)]
    #[schema(example = "Pembayaran paling lambat 14 hari setelah invoice diterima")]
    pub keterangan: Option<String>,
}

impl InvoiceRequest {
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(InvoiceItem::line_total).sum()
    }

    pub fn total(&self) -> f64 {
        self.subtotal() + self.ongkir.unwrap_or(0.0)
    }
}

/// A line item with formatted figures, ready for the template.
#[derive(Debug)]
pub struct RenderedItem {
    pub no: usize,
    pub nama: String,
    pub jumlah: u32,
    pub harga: String,
    pub total: String,
}

/// An invoice with every field formatted for display, including the
/// terbilang form of the total.
#[derive(Debug)]
pub struct RenderedInvoice {
    pub pelanggan: String,
    pub tanggal: String,
    pub invoice_no: String,
    pub periode: String,
    pub alamat_sewa: String,
    pub items: Vec<RenderedItem>,
    pub subtotal: String,
    pub ongkir: String,
    pub total: String,
    pub total_terbilang: String,
    pub keterangan: String,
}

impl RenderedInvoice {
    /// Compute totals and format every figure for the template. Fails only
    /// when the computed total falls outside the terbilang scale table.
    pub fn from_request(request: &InvoiceRequest) -> Result<Self, TerbilangError> {
        let total = request.total();
        let total_terbilang = terbilang(total)?;

        let items = request
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| RenderedItem {
                no: index + 1,
                nama: item.name.clone(),
                jumlah: item.quantity,
                harga: format_rupiah(item.price),
                total: format_rupiah(item.line_total()),
            })
            .collect();

        Ok(Self {
            pelanggan: request.pelanggan.clone(),
            tanggal: format_indonesian_date(request.tanggal),
            invoice_no: request.invoice_no.clone(),
            periode: request.periode.clone(),
            alamat_sewa: request.alamat_sewa.clone(),
            items,
            subtotal: format_rupiah(request.subtotal()),
            ongkir: format_rupiah(request.ongkir.unwrap_or(0.0)),
            total: format_rupiah(total),
            total_terbilang,
            keterangan: request.keterangan.clone().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> InvoiceRequest {
        serde_json::from_str(
            r#"{
                "pelanggan": "PT Maju Jaya",
                "tanggal": "2026-08-07",
                "invoiceNo": "INV-2026-001",
                "periode": "Agustus 2026",
                "alamatSewa": "Jl. Raya Bogor KM 26, Kramat Jati, Jakarta Timur",
                "noItems": [
                    { "name": "Sewa scaffolding", "quantity": 2, "price": 500000 },
                    { "name": "Sewa genset", "quantity": 1, "price": 350000 }
                ],
                "ongkir": 150000
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_request_deserialization() {
        let request = sample_request();
        assert_eq!(request.pelanggan, "PT Maju Jaya");
        assert_eq!(request.invoice_no, "INV-2026-001");
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.ongkir, Some(150_000.0));
        assert!(request.keterangan.is_none());
    }

    #[test]
    fn test_totals() {
        let request = sample_request();
        assert_eq!(request.subtotal(), 1_350_000.0);
        assert_eq!(request.total(), 1_500_000.0);
    }

    #[test]
    fn test_rendered_invoice() {
        let request = sample_request();
        let rendered = RenderedInvoice::from_request(&request).unwrap();

        assert_eq!(rendered.tanggal, "07 Agustus 2026");
        assert_eq!(rendered.subtotal, "1.350.000");
        assert_eq!(rendered.ongkir, "150.000");
        assert_eq!(rendered.total, "1.500.000");
        assert_eq!(
            rendered.total_terbilang,
            "Satu juta lima ratus ribu rupiah"
        );
        assert_eq!(rendered.items[0].no, 1);
        assert_eq!(rendered.items[0].total, "1.000.000");
        assert_eq!(rendered.items[1].no, 2);
    }

    #[test]
    fn test_rendered_invoice_rejects_out_of_range_total() {
        let mut request = sample_request();
        request.items[0].price = 1e15;
        assert!(RenderedInvoice::from_request(&request).is_err());
    }
}
