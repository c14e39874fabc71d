use std::io::{self, Write};

use todo_core::{Confirmer, Notifier};

/// Asks on stdout and reads the answer from stdin. End of input counts as no.
pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        let _ = io::stdout().flush();

        let mut answer = String::new();
        match io::stdin().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_yes(&answer),
        }
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Writes alerts to stderr.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("! {message}");
    }
}
