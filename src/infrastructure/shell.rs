//! Shell-command directives
//!
//! Lets a config file register pre/post compile directives as shell
//! commands. The directive's response is the command's trimmed stdout, or a
//! short failure description.

use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Build a directive that runs `command` through the platform shell.
///
/// `cwd` sets the working directory (normally the config file's directory).
pub fn shell_directive(
    command: impl Into<String>,
    cwd: Option<PathBuf>,
) -> impl FnMut() -> String + Send + 'static {
    let command = command.into();
    move || run(&command, cwd.as_ref())
}

fn run(command: &str, cwd: Option<&PathBuf>) -> String {
    let mut cmd = shell(command);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    match cmd.output() {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let code = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            format!("command failed ({}): {}", code, stderr.trim())
        }
        Err(e) => format!("failed to run '{}': {}", command, e),
    }
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn response_is_trimmed_stdout() {
        let mut directive = shell_directive("echo '  hello  '", None);
        assert_eq!(directive(), "hello");
    }

    #[test]
    fn failing_command_reports_exit_code() {
        let mut directive = shell_directive("echo oops >&2; exit 3", None);
        let response = directive();
        assert!(response.contains("(3)"), "got: {}", response);
        assert!(response.contains("oops"));
    }

    #[test]
    fn runs_in_given_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "here").unwrap();

        let mut directive = shell_directive("cat marker.txt", Some(dir.path().to_path_buf()));
        assert_eq!(directive(), "here");
    }

    #[test]
    fn directive_can_run_repeatedly() {
        let mut directive = shell_directive("echo again", None);
        assert_eq!(directive(), "again");
        assert_eq!(directive(), "again");
    }
}
