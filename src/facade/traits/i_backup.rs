use std::io;
use crate::models::backup::BackupOutput;

// Facade интерфейс, координирует сканирование, отчёт и копирование
pub trait BackupFacadeTrait: Send + Sync {
    /// Выполняет полный проход: сканирование, отчёт, копирование (если задано)
    /// # Возвращает
    /// - итоги всех этапов; ошибку, если корень сканирования недоступен
    fn execute_backup(&self) -> io::Result<BackupOutput>;
}
