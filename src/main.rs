use std::process::ExitCode;

use backuper::action::cli::process_args;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(Some(output)) => {
            log::info!(
                "Программа завершена, найдено {} файлов",
                output.scan.files.len()
            );
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Программа завершена с ошибкой: {}", e);
            ExitCode::FAILURE
        }
    }
}
