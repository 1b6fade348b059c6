use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct CopyInput {
    pub files: Vec<PathBuf>,
    pub scan_root: PathBuf,
    pub output_root: PathBuf,
    pub no_progress: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CopyFailure {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyOutput {
    pub copied: usize,
    pub bytes_copied: u64,
    pub failures: Vec<CopyFailure>,
    /// Итоговая позиция индикатора прогресса
    pub progress: u64,
}

impl CopyOutput {
    pub fn processed(&self) -> usize {
        self.copied + self.failures.len()
    }
}
