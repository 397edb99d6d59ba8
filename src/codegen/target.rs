//! Target machine and object file generation.
//!
//! This module handles LLVM target initialization and object file output.

use super::Codegen;
use super::error::CodegenError;
use inkwell::OptimizationLevel;
use inkwell::targets::{
    CodeModel, FileType, InitializationConfig, RelocMode, Target, TargetMachine,
};
use std::path::Path;

impl<'ctx> Codegen<'ctx> {
    /// Writes the compiled module to a native object file.
    ///
    /// This method initializes the native target (if not already done),
    /// creates a target machine for the host triple with PIC relocation
    /// and the `generic` CPU model, and writes the compiled LLVM IR to an
    /// object file that can be linked.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Failed to initialize the native target
    /// - Failed to create the target machine
    /// - Failed to write the object file
    ///
    /// # Platform Support
    ///
    /// Object files are produced for the host platform only. The format
    /// depends on the host: Mach-O on macOS, ELF on Linux, COFF on
    /// Windows. Cross-compilation is not supported.
    pub fn write_object_file(&self, path: &Path) -> Result<(), CodegenError> {
        Target::initialize_native(&InitializationConfig::default()).map_err(|e| {
            CodegenError::without_line(format!("Failed to initialize native target: {}", e))
        })?;

        let triple = TargetMachine::get_default_triple();
        let target = Target::from_triple(&triple).map_err(|e| {
            CodegenError::without_line(format!(
                "Failed to get target for triple '{}': {}",
                triple, e
            ))
        })?;

        let target_machine = target
            .create_target_machine(
                &triple,
                "generic",
                "",
                OptimizationLevel::Default,
                RelocMode::PIC,
                CodeModel::Default,
            )
            .ok_or_else(|| {
                CodegenError::without_line(format!(
                    "Failed to create target machine for triple '{}'. \
                     This may indicate an unsupported platform or LLVM configuration issue.",
                    triple
                ))
            })?;

        target_machine
            .write_to_file(&self.module, FileType::Object, path)
            .map_err(|e| {
                CodegenError::without_line(format!(
                    "Failed to write object file to '{}': {}",
                    path.display(),
                    e
                ))
            })?;

        Ok(())
    }
}
