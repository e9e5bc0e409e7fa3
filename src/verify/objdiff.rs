//! Object-diff comparator
//!
//! Transforms an assembly file through the tool, assembles both the
//! original and the transformed output with the reference assembler, and
//! byte-diffs the two object files. The outcome is exactly the diff
//! tool's exit status.

use std::path::{Path, PathBuf};

use crate::common::Result;
use crate::process;

/// Executables the object-diff comparator drives
#[derive(Debug)]
pub struct ObjDiffTools {
    pub tool: PathBuf,
    pub assembler: PathBuf,
    pub diff: PathBuf,
}

/// Verify that the tool's transformation preserves the assembled object
///
/// Returns the diff exit status (0 = identical), or 1 when the tool or
/// either assembly step fails; in that case no diff is attempted. The
/// three temporary files (`.mao`, `.o`, `.mao.o`) are removed on every
/// path, drop does the cleanup.
pub async fn verify_object(tools: &ObjDiffTools, input: &Path) -> Result<i32> {
    let transformed = tempfile::Builder::new().suffix(".mao").tempfile()?;

    let tool_cmd = vec![
        tools.tool.display().to_string(),
        format!("--mao=ASM=o[{}]", transformed.path().display()),
        input.display().to_string(),
    ];
    if process::run_status(&tool_cmd).await? != 0 {
        tracing::warn!(command = %process::render_command(&tool_cmd), "tool failed");
        return Ok(1);
    }

    let original_obj = tempfile::Builder::new().suffix(".o").tempfile()?;
    let as_cmd = assemble_command(&tools.assembler, original_obj.path(), input);
    if process::run_status(&as_cmd).await? != 0 {
        tracing::warn!(command = %process::render_command(&as_cmd), "assembly failed");
        return Ok(1);
    }

    let transformed_obj = tempfile::Builder::new().suffix(".mao.o").tempfile()?;
    let as_cmd = assemble_command(&tools.assembler, transformed_obj.path(), transformed.path());
    if process::run_status(&as_cmd).await? != 0 {
        tracing::warn!(command = %process::render_command(&as_cmd), "assembly failed");
        return Ok(1);
    }

    let diff_cmd = vec![
        tools.diff.display().to_string(),
        original_obj.path().display().to_string(),
        transformed_obj.path().display().to_string(),
    ];
    process::run_status(&diff_cmd).await
}

fn assemble_command(assembler: &Path, output: &Path, input: &Path) -> Vec<String> {
    vec![
        assembler.display().to_string(),
        "-o".to_string(),
        output.display().to_string(),
        input.display().to_string(),
    ]
}
