use std::io;
use std::path::PathBuf;
use crate::config::config::SizeUnits;

// Конфигурация приложения, собирает все параметры запуска
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub scan_dir: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub units: SizeUnits,
    pub no_progress: bool,
    pub pause_on_exit: bool,
}

// Port источника конфигурации
pub trait ConfigPort: Send + Sync {
    fn get_config(&self) -> io::Result<AppConfig>;
}
