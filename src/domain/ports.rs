use crate::domain::model::{CompileOutput, CompileRequest};
use crate::utils::error::Result;
use std::path::Path;

pub trait Compiler {
    /// Runs one compilation. A compiler that ran and rejected the source is
    /// `Ok` with `success == false`; `Err` means it could not be run at all.
    fn compile(&self, request: &CompileRequest) -> Result<CompileOutput>;
}

pub trait ConfigProvider {
    fn compiler_command(&self) -> &str;
    fn compiler_flags(&self) -> &[String];
    fn problems_dir(&self) -> &Path;
    fn library_dir(&self) -> &Path;
    fn include_dir(&self) -> &Path;
    fn build_dir(&self) -> &Path;
}
