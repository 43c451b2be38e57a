//! Traits for the invoice pipeline seams.

use super::validation::ValidationErrors;
use super::{GeneratedDocument, RenderError};

/// Trait for validating request objects.
pub trait Validator {
    /// Validate the state of the object, collecting every violation.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Trait for document generators.
pub trait Generator<Input> {
    /// Render the input into a finished PDF document.
    fn generate(&self, input: &Input) -> Result<GeneratedDocument, RenderError>;
}
