use std::collections::BTreeMap;
use std::path::PathBuf;

/// Количество и суммарный размер файлов одного расширения.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtensionStat {
    pub count: u64,
    pub size: u64,
}

impl ExtensionStat {
    pub fn record(&mut self, size: u64) {
        self.count += 1;
        self.size += size;
    }
}

#[derive(Clone, Debug)]
pub struct ScanInput {
    pub root: PathBuf,
    pub no_progress: bool,
}

// Аккумулятор одного прохода сканирования
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOutput {
    pub total_size: u64,
    pub stats: BTreeMap<String, ExtensionStat>,
    pub files: Vec<PathBuf>,
    pub skipped_entries: u64,
}

impl ScanOutput {
    pub fn record(&mut self, path: PathBuf, extension: String, size: u64) {
        self.total_size += size;
        self.stats.entry(extension).or_default().record(size);
        self.files.push(path);
    }
}
