use std::io;
use log::{error, info, warn};
use crate::config::ports::ConfigPort;
use crate::facade::traits::i_backup::BackupFacadeTrait;
use crate::models::backup::BackupOutput;
use crate::models::copy::CopyInput;
use crate::models::report::ReportInput;
use crate::models::scan::ScanInput;
use crate::service::config_service::ConfigService;
use crate::service::traits::i_service::{CopyServiceTrait, ReportServiceTrait, ScanServiceTrait};
use crate::utils::utils::format_file_size;

pub struct BackupFacade {
    config_service: ConfigService,
    scan_service: Box<dyn ScanServiceTrait>,
    report_service: Box<dyn ReportServiceTrait>,
    copy_service: Box<dyn CopyServiceTrait>,
}

impl BackupFacade {
    pub fn new(
        config_port: Box<dyn ConfigPort>,
        scan_service: Box<dyn ScanServiceTrait>,
        report_service: Box<dyn ReportServiceTrait>,
        copy_service: Box<dyn CopyServiceTrait>,
    ) -> Self {
        let config_service = ConfigService::new(config_port);
        BackupFacade {
            config_service,
            scan_service,
            report_service,
            copy_service,
        }
    }
}

impl BackupFacadeTrait for BackupFacade {
    fn execute_backup(&self) -> io::Result<BackupOutput> {
        let config = self.config_service.get_config()?;

        let scan = self
            .scan_service
            .scan(ScanInput {
                root: config.scan_dir.clone(),
                no_progress: config.no_progress,
            })
            .map_err(|e| {
                error!("Сканирование прервано: {}: {}", config.scan_dir.display(), e);
                e
            })?;

        let report = self.report_service.render(ReportInput {
            total_size: scan.total_size,
            stats: scan.stats.clone(),
            units: config.units,
        });
        print!("{}", report);

        let copy = match &config.output_dir {
            Some(output_dir) => {
                println!("\nКопирование файлов...");
                let copy = self.copy_service.copy_files(CopyInput {
                    files: scan.files.clone(),
                    scan_root: config.scan_dir.clone(),
                    output_root: output_dir.clone(),
                    no_progress: config.no_progress,
                });
                println!(
                    "Скопировано {} из {} файлов ({})",
                    copy.copied,
                    scan.files.len(),
                    format_file_size(copy.bytes_copied)
                );
                if !copy.failures.is_empty() {
                    warn!("Не удалось скопировать {} файлов", copy.failures.len());
                }
                Some(copy)
            }
            None => {
                info!("Директория для копирования не указана, только сканирование");
                None
            }
        };

        Ok(BackupOutput { config, scan, report, copy })
    }
}
