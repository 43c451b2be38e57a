//! Typst compilation step.
//!
//! Writes rendered Typst source into a temporary directory and invokes the
//! `typst` CLI to produce the PDF bytes.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

use super::RenderError;

/// Compile a Typst source file inside `temp_dir` to PDF and return the bytes.
pub fn compile_typst_to_pdf(
    temp_dir: &TempDir,
    typ_filename: &str,
    output_filename: &str,
) -> Result<Vec<u8>, RenderError> {
    let typ_path = temp_dir.path().join(typ_filename);
    let output_path = temp_dir.path().join(output_filename);

    let status = Command::new("typst")
        .arg("compile")
        .arg(&typ_path)
        .arg(&output_path)
        .current_dir(temp_dir.path())
        .status()
        .map_err(RenderError::CompilerIo)?;

    if !status.success() {
        let code = status.code().unwrap_or(-1);
        return Err(RenderError::CompilerExit(code));
    }

    fs::read(&output_path).map_err(RenderError::ReadPdf)
}
