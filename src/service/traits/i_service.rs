use std::io;
use crate::models::copy::{CopyInput, CopyOutput};
use crate::models::report::ReportInput;
use crate::models::scan::{ScanInput, ScanOutput};

// Сервис сканирования, обходит дерево и собирает статистику
pub trait ScanServiceTrait: Send + Sync {
    /// Рекурсивно обходит корень сканирования
    /// # Параметры
    /// - input: корень и настройки индикатора
    /// # Возвращает
    /// - найденные файлы и статистику; ошибку, если корень недоступен
    fn scan(&self, input: ScanInput) -> io::Result<ScanOutput>;
}

// Сервис отчёта
pub trait ReportServiceTrait: Send + Sync {
    /// Формирует текст итогов сканирования, без побочных эффектов
    fn render(&self, input: ReportInput) -> String;
}

// Сервис копирования
pub trait CopyServiceTrait: Send + Sync {
    /// Копирует найденные файлы с сохранением относительных путей
    /// # Возвращает
    /// - итоги пакета; ошибки отдельных файлов собраны в `failures`
    fn copy_files(&self, input: CopyInput) -> CopyOutput;
}
