//! Shell completions command implementation.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell as ClapShell};

use crate::cli::{Cli, Shell};

impl From<Shell> for ClapShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => ClapShell::Bash,
            Shell::Zsh => ClapShell::Zsh,
            Shell::Fish => ClapShell::Fish,
            Shell::Powershell => ClapShell::PowerShell,
        }
    }
}

/// Generate shell completions for the given shell and write to stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn execute(shell: Shell) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_completions(shell, &mut stdout)?;
    stdout.flush()
}

fn write_completions<W: Write>(shell: Shell, out: &mut W) -> io::Result<()> {
    let mut cmd = Cli::command();
    generate(ClapShell::from(shell), &mut cmd, "bbw", out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_completions(shell, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_shell_mapping() {
        assert!(matches!(ClapShell::from(Shell::Bash), ClapShell::Bash));
        assert!(matches!(ClapShell::from(Shell::Zsh), ClapShell::Zsh));
        assert!(matches!(ClapShell::from(Shell::Fish), ClapShell::Fish));
        assert!(matches!(
            ClapShell::from(Shell::Powershell),
            ClapShell::PowerShell
        ));
    }

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let script = render(Shell::Bash);
        assert!(script.contains("bbw"));
        assert!(script.contains("filter"));
        assert!(script.contains("calendar"));
    }

    #[test]
    fn test_fish_completions_not_empty() {
        assert!(!render(Shell::Fish).is_empty());
    }
}
