use colored::*;
use std::io::{self, Write};
use tracing::warn;

use crate::store::ConfirmPrompt;

/// Leer una línea de stdin, sin espacios alrededor
pub fn read_line(label: &str) -> io::Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Como `read_line`, pero una línea vacía conserva `current`
pub fn read_with_default(label: &str, current: &str) -> io::Result<String> {
    let input = read_line(&format!("{} [{}]: ", label, current))?;
    if input.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(input)
    }
}

/// Confirmación por terminal; cualquier respuesta distinta de "y" cancela
pub struct StdinConfirm;

impl ConfirmPrompt for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        match read_line(&format!("{} [y/N]: ", prompt)) {
            Ok(answer) => matches!(answer.to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                warn!("⚠️ No se pudo leer la confirmación: {}", e);
                false
            }
        }
    }
}
