use std::io;
use std::path::PathBuf;
use crate::config::config::SizeUnits;
use crate::config::ports::{AppConfig, ConfigPort};

// Сервис конфигурации, делегирует выбранному адаптеру
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// Адаптер конфигурации по умолчанию: только пути, остальное стандартное
pub struct DefaultConfigAdapter {
    scan_dir: PathBuf,
    output_dir: Option<PathBuf>,
}

impl DefaultConfigAdapter {
    pub fn new(scan_dir: impl Into<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        DefaultConfigAdapter {
            scan_dir: scan_dir.into(),
            output_dir,
        }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            scan_dir: self.scan_dir.clone(),
            output_dir: self.output_dir.clone(),
            units: SizeUnits::Mixed,
            no_progress: false,
            pause_on_exit: false,
        })
    }
}
