//! Yes/no confirmation for very large images.

use std::io::{self, BufRead, Write};

/// Source of a yes/no answer.
///
/// Closures `FnMut(&str) -> bool` implement this, which keeps tests free of
/// stdin.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self(prompt))
    }
}

/// Asks on stderr and reads the answer from stdin.
///
/// Only `y` (any case) counts as yes. End of input counts as no.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{prompt} (y/n)")?;
        stderr.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_y_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes("  Y  "));
        assert!(!is_yes("yes"));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
    }

    #[test]
    fn closures_are_confirmers() {
        let mut seen = Vec::new();
        let mut confirm = |prompt: &str| {
            seen.push(prompt.to_string());
            false
        };
        assert!(!confirm.confirm("continue?").unwrap());
        assert_eq!(seen, vec!["continue?".to_string()]);
    }
}
