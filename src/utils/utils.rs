use std::io;
use std::time::{Duration, Instant};
use indicatif::{ProgressBar, ProgressStyle};

pub const BANNER: &str = r#"  _                _
 | |__   __ _  ___| | ___   _ _ __   ___ _ __
 | '_ \ / _` |/ __| |/ / | | | '_ \ / _ \ '__|
 | |_) | (_| | (__|   <| |_| | |_) |  __/ |
 |_.__/ \__,_|\___|_|\_\\__,_| .__/ \___|_|
                             |_|
"#;

pub fn print_banner() {
    println!("{}", BANNER);
}

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Не удалось настроить логирование: {}", e)))
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else if total == 0 {
            Self::spinner_bar()
        } else {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40}] {pos}/{len} ETA: {eta_precise}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("##-"),
            );
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    /// Спиннер без известного общего количества, обновляется сам каждые 100 мс.
    pub fn spinner(message: &str, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = Self::spinner_bar();
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        };
        pb.set_message(message.to_string());
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    fn spinner_bar() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb
    }

    pub fn update(&self, count: u64, total_size: Option<u64>, action: &str) {
        self.pb.set_position(count);
        if self.no_progress {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        let speed = if elapsed > 0.0 { count as f64 / elapsed } else { 0.0 };
        let msg = match total_size {
            Some(size) => format!(
                "{}: {} файлов, {}, скорость: {:.0} файлов/с",
                action, count, format_file_size(size), speed
            ),
            None => format!("{}: {} файлов", action, count),
        };
        self.pb.set_message(msg);
    }

    pub fn position(&self) -> u64 {
        self.pb.position()
    }

    /// Печатает строку над индикатором, не ломая его отрисовку.
    pub fn println(&self, line: impl AsRef<str>) {
        if self.pb.is_hidden() {
            println!("{}", line.as_ref());
        } else {
            self.pb.println(line);
        }
    }

    pub fn finish(&self, message: String) {
        if self.no_progress {
            return;
        }
        self.pb.finish_with_message(message);
    }

    pub fn finish_and_clear(&self) {
        self.pb.finish_and_clear();
    }
}

pub fn format_file_size(size: u64) -> String {
    if size < 1024 * 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    }
}
