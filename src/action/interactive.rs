use dialoguer::Input;
use std::io;

/// Блокирует выход, пока пользователь не нажмёт Enter.
pub fn wait_for_exit() -> io::Result<()> {
    Input::<String>::new()
        .with_prompt("Нажмите Enter для выхода")
        .allow_empty(true)
        .interact_text()
        .map(|_| ())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Ошибка ожидания ввода: {}", e)))
}
