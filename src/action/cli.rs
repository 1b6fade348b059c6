use std::io;
use std::path::PathBuf;
use clap::Parser;
use crate::action::interactive::wait_for_exit;
use crate::config::config::{non_empty, Cli, USAGE};
use crate::config::ports::{AppConfig, ConfigPort};
use crate::facade::backup_facade::BackupFacade;
use crate::facade::traits::i_backup::BackupFacadeTrait;
use crate::models::backup::BackupOutput;
use crate::service::copy::CopyService;
use crate::service::report::ReportService;
use crate::service::scan::ScanService;
use crate::utils::utils::{print_banner, setup_logging};

pub const FATAL_PREFIX: &str = "Ошибка при сканировании";

/// Разбирает аргументы и запускает проход. `Ok(None)` означает, что показана справка.
/// Фатальная ошибка печатается здесь, до ожидания `--pause`.
pub fn process_args(args: Vec<String>) -> io::Result<Option<BackupOutput>> {
    print_banner();
    let cli = Cli::parse_from(args);

    if non_empty(&cli.scan_dir).is_none() {
        println!("{}", USAGE);
        return Ok(None);
    }

    let result = run_backup(&cli);
    match &result {
        Ok(output) if cli.show_config => {
            println!("Использованная конфигурация: {:#?}", output.config);
        }
        Ok(_) => {}
        Err(e) => println!("{}: {}", FATAL_PREFIX, e),
    }
    if cli.pause {
        if let Err(e) = wait_for_exit() {
            log::warn!("Ожидание нажатия пропущено: {}", e);
        }
    }

    result.map(Some)
}

fn run_backup(cli: &Cli) -> io::Result<BackupOutput> {
    setup_logging(&cli.log_level)?;

    let facade: Box<dyn BackupFacadeTrait> = Box::new(BackupFacade::new(
        Box::new(CliConfigAdapter::new(cli.clone())),
        Box::new(ScanService::new()),
        Box::new(ReportService::new()),
        Box::new(CopyService::new()),
    ));
    facade.execute_backup()
}

// Адаптер конфигурации из аргументов командной строки
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let scan_dir = non_empty(&self.cli.scan_dir).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "не указана директория для сканирования (-d)")
        })?;

        Ok(AppConfig {
            scan_dir: PathBuf::from(scan_dir),
            output_dir: non_empty(&self.cli.output_dir).map(PathBuf::from),
            units: self.cli.units,
            no_progress: self.cli.no_progress,
            pause_on_exit: self.cli.pause,
        })
    }
}
