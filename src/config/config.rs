use clap::{Parser, ValueEnum};
use std::io;
use std::path::Path;

// Расширения, которые нас интересуют (в нижнем регистре, с точкой)
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    ".doc", ".docx", ".pdf",
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff",
    ".mp3", ".wav", ".flac",
    ".mp4", ".avi", ".mov", ".mkv",
];

pub const USAGE: &str = "Использование: -d <директория для сканирования> [-o <директория для копирования>]";

#[derive(Parser, Clone, Debug)]
#[command(
    name = "backuper",
    about = "Поиск медиафайлов и документов со статистикой по расширениям и копированием",
    long_about = "Рекурсивно сканирует директорию, находит документы, изображения, аудио и видео по фиксированному списку расширений, выводит общий размер и статистику по расширениям.\nЕсли указан -o, найденные файлы копируются с сохранением структуры директорий."
)]
pub struct Cli {
    /// Директория для сканирования
    #[arg(short = 'd', long = "dir")]
    pub scan_dir: Option<String>,
    /// Директория для копирования найденных файлов (необязательно)
    #[arg(short = 'o', long = "output")]
    pub output_dir: Option<String>,
    /// Единицы измерения для вывода размеров
    #[arg(long, default_value = "mixed")]
    pub units: SizeUnits,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    /// Ждать нажатия Enter перед выходом
    #[arg(long, default_value_t = false)]
    pub pause: bool,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

/// Режим пересчёта байтов в MB/GB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SizeUnits {
    /// Порог GB по 10^9 байт, значения делятся на 2^20 и 2^30
    #[default]
    Mixed,
    /// Порог 2^30, делители 2^20 и 2^30
    Binary,
    /// Порог 10^9, делители 10^6 и 10^9
    Decimal,
}

pub fn is_allowed_extension(ext: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&ext)
}

pub fn validate_scan_root(root: &Path) -> io::Result<()> {
    let metadata = std::fs::metadata(root).map_err(|e| {
        log::error!("Директория для сканирования недоступна: {}: {}", root.display(), e);
        io::Error::new(e.kind(), format!("{}: {}", root.display(), e))
    })?;
    if !metadata.is_dir() {
        log::error!("Путь для сканирования не является директорией: {}", root.display());
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' не является директорией", root.display()),
        ));
    }
    Ok(())
}

/// Пустая строка во флаге считается отсутствующим значением.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
