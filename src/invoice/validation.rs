//! Input validation for invoice requests.
//!
//! Collects every violation with a descriptive Indonesian message and a
//! suggestion for how to fix it, so the form can surface all problems at once.

use serde::Serialize;
use utoipa::ToSchema;

use super::models::{InvoiceItem, InvoiceRequest};
use super::traits::Validator;

/// A single validation failure.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message in Indonesian
    pub message: String,
    /// Suggestion for how to fix the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{label} tidak boleh kosong")).with_suggestion(format!(
            "Mohon isi {} dengan data yang valid",
            label.to_lowercase()
        ))
    }

    pub fn length_out_of_range(field: &str, label: &str, min: usize, max: usize) -> Self {
        Self::new(
            field,
            format!("{label} harus terdiri dari {min} sampai {max} karakter"),
        )
    }

    pub fn negative_amount(field: &str, label: &str) -> Self {
        Self::new(field, format!("{label} tidak boleh negatif"))
            .with_suggestion(format!("Isi {} dengan angka 0 atau lebih", label.to_lowercase()))
    }

    pub fn invalid_amount(field: &str, label: &str) -> Self {
        Self::new(field, format!("{label} harus berupa angka yang valid"))
    }

    pub fn zero_quantity(field: &str) -> Self {
        Self::new(field, "Jumlah barang minimal 1")
            .with_suggestion("Isi jumlah dengan bilangan bulat 1 atau lebih")
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {suggestion}")?;
        }
        Ok(())
    }
}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// One-line summary suitable for a response `message` field.
    pub fn summary(&self) -> String {
        format!("Validasi gagal: {} kesalahan ditemukan", self.errors.len())
    }

    /// Numbered multi-line report of every failure.
    pub fn to_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![self.summary()];
        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }

        parts.join("\n")
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// 400 response body for a failed validation: a summary plus one detail entry
/// per violated rule.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationFailedResponse {
    pub error: String,
    pub message: String,
    pub details: Vec<ValidationError>,
}

impl From<ValidationErrors> for ValidationFailedResponse {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            error: "ValidationFailed".to_string(),
            message: errors.summary(),
            details: errors.into_errors(),
        }
    }
}

// ============================================================================
// Validation functions
// ============================================================================

/// Validate that a string is not empty after trimming.
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Validate that a required string falls within a character-length range.
pub fn validate_length(
    value: &str,
    field: &str,
    label: &str,
    min: usize,
    max: usize,
    errors: &mut ValidationErrors,
) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(ValidationError::empty_field(field, label));
        return;
    }
    let length = trimmed.chars().count();
    if length < min || length > max {
        errors.add(ValidationError::length_out_of_range(field, label, min, max));
    }
}

/// Validate an optional free-text field against a maximum length.
pub fn validate_max_length(
    value: &str,
    field: &str,
    label: &str,
    max: usize,
    errors: &mut ValidationErrors,
) {
    if value.chars().count() > max {
        errors.add(ValidationError::length_out_of_range(field, label, 0, max));
    }
}

/// Validate that a monetary amount is a finite, non-negative number.
pub fn validate_amount(value: f64, field: &str, label: &str, errors: &mut ValidationErrors) {
    if !value.is_finite() {
        errors.add(ValidationError::invalid_amount(field, label));
    } else if value < 0.0 {
        errors.add(ValidationError::negative_amount(field, label));
    }
}

/// Validate one invoice line item.
pub fn validate_item(item: &InvoiceItem, index: usize, errors: &mut ValidationErrors) {
    let name_field = format!("noItems[{index}].name");
    validate_length(&item.name, &name_field, "Nama barang", 1, 255, errors);

    if item.quantity == 0 {
        errors.add(ValidationError::zero_quantity(&format!(
            "noItems[{index}].quantity"
        )));
    }

    validate_amount(
        item.price,
        &format!("noItems[{index}].price"),
        "Harga satuan",
        errors,
    );
}

impl Validator for InvoiceRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        validate_length(&self.pelanggan, "pelanggan", "Nama pelanggan", 2, 255, &mut errors);
        validate_length(&self.invoice_no, "invoiceNo", "Nomor invoice", 1, 100, &mut errors);
        validate_length(&self.periode, "periode", "Periode sewa", 1, 100, &mut errors);
        validate_length(&self.alamat_sewa, "alamatSewa", "Alamat sewa", 5, 1000, &mut errors);

        if self.items.is_empty() {
            errors.add(
                ValidationError::new("noItems", "Minimal satu barang harus diisi")
                    .with_suggestion("Tambahkan setidaknya satu baris barang pada invoice"),
            );
        }
        for (index, item) in self.items.iter().enumerate() {
            validate_item(item, index, &mut errors);
        }

        if let Some(ongkir) = self.ongkir {
            validate_amount(ongkir, "ongkir", "Ongkos kirim", &mut errors);
        }
        if let Some(ref keterangan) = self.keterangan {
            validate_max_length(keterangan, "keterangan", "Keterangan", 1000, &mut errors);
        }

        errors.into_result()
    }
}
