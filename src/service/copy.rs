use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use log::{error, info};
use pathdiff::diff_paths;
use crate::models::copy::{CopyFailure, CopyInput, CopyOutput};
use crate::service::traits::i_service::CopyServiceTrait;
use crate::utils::utils::{format_file_size, ProgressManager};

const COPY_BUFFER_SIZE: usize = 4 * 1024 * 1024;

#[derive(Default)]
pub struct CopyService;

impl CopyService {
    pub fn new() -> Self {
        CopyService
    }
}

/// Путь назначения: корень копирования плюс путь файла относительно корня сканирования.
pub fn target_path(source: &Path, scan_root: &Path, output_root: &Path) -> io::Result<PathBuf> {
    let relative = diff_paths(source, scan_root).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("не удалось получить путь {} относительно {}", source.display(), scan_root.display()),
        )
    })?;
    Ok(output_root.join(relative))
}

pub fn copy_file(source: &Path, target: &Path) -> io::Result<u64> {
    let source_file = File::open(source)?;
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    let target_file = File::create(target)?;

    let mut reader = BufReader::with_capacity(COPY_BUFFER_SIZE, source_file);
    let mut writer = BufWriter::new(target_file);
    let written = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(written)
}

impl CopyServiceTrait for CopyService {
    fn copy_files(&self, input: CopyInput) -> CopyOutput {
        let total = input.files.len();
        info!("Копирование {} файлов в {}", total, input.output_root.display());

        let pm = ProgressManager::new(total as u64, input.no_progress);
        let mut output = CopyOutput::default();

        for (index, source) in input.files.iter().enumerate() {
            let result = target_path(source, &input.scan_root, &input.output_root)
                .and_then(|target| copy_file(source, &target));
            match result {
                Ok(written) => {
                    output.copied += 1;
                    output.bytes_copied += written;
                }
                Err(e) => {
                    error!("Ошибка копирования {}: {}", source.display(), e);
                    pm.println(format!("Ошибка копирования {}: {}", source.display(), e));
                    output.failures.push(CopyFailure {
                        path: source.clone(),
                        message: e.to_string(),
                    });
                }
            }
            pm.update((index + 1) as u64, Some(output.bytes_copied), "Копирование файлов");
        }

        output.progress = pm.position();
        pm.finish(format!(
            "Готово: {} из {} файлов, {}",
            output.copied,
            total,
            format_file_size(output.bytes_copied)
        ));
        info!(
            "Копирование завершено: успешно {}, с ошибками {}",
            output.copied,
            output.failures.len()
        );
        output
    }
}
