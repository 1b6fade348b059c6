use std::io;
use std::path::Path;
use log::{info, warn};
use walkdir::WalkDir;
use crate::config::config::{is_allowed_extension, validate_scan_root};
use crate::models::scan::{ScanInput, ScanOutput};
use crate::service::traits::i_service::ScanServiceTrait;
use crate::utils::utils::ProgressManager;

const SCAN_MESSAGE: &str = "Сканирование файлов...";

#[derive(Default)]
pub struct ScanService;

impl ScanService {
    pub fn new() -> Self {
        ScanService
    }
}

/// Расширение в нижнем регистре вместе с точкой: всё от последней точки в имени.
/// У `.pdf` расширение `.pdf`, у `README` его нет.
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let dot = name.rfind('.')?;
    Some(name[dot..].to_lowercase())
}

impl ScanServiceTrait for ScanService {
    fn scan(&self, input: ScanInput) -> io::Result<ScanOutput> {
        validate_scan_root(&input.root)?;
        info!("Начато сканирование: {}", input.root.display());

        let pm = ProgressManager::spinner(SCAN_MESSAGE, input.no_progress);
        let mut output = ScanOutput::default();

        for entry in WalkDir::new(&input.root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    pm.finish_and_clear();
                    return Err(io::Error::from(e));
                }
                Err(e) => {
                    let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                    warn!("Ошибка при доступе к {}: {}", path, e);
                    pm.println(format!("Ошибка при доступе к {}: {}", path, e));
                    output.skipped_entries += 1;
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }
            let Some(extension) = extension_of(entry.path()) else {
                continue;
            };
            if !is_allowed_extension(&extension) {
                continue;
            }

            let size = match entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(e) => {
                    warn!("Ошибка при доступе к {}: {}", entry.path().display(), e);
                    pm.println(format!("Ошибка при доступе к {}: {}", entry.path().display(), e));
                    output.skipped_entries += 1;
                    continue;
                }
            };
            output.record(entry.into_path(), extension, size);
            pm.update(output.files.len() as u64, None, "Сканирование, найдено");
        }

        pm.finish_and_clear();
        info!(
            "Сканирование завершено: найдено {} файлов, {} байт, пропущено {} записей",
            output.files.len(),
            output.total_size,
            output.skipped_entries
        );
        Ok(output)
    }
}
