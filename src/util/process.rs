//! Subprocess execution utilities.
//!
//! Every external tool (compilers, `make`, `qmake`, the host Python) is run
//! through a [`ProcessBuilder`]. Failures are reported as
//! [`DeployError::ExternalTool`].

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::errors::DeployError;

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    env: HashMap<String, String>,
    env_remove: Vec<String>,
    cwd: Option<PathBuf>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            env: HashMap::new(),
            env_remove: Vec::new(),
            cwd: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Set an environment variable.
    pub fn env(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.env
            .insert(key.as_ref().to_string(), value.as_ref().to_string());
        self
    }

    /// Remove a variable from the inherited environment.
    pub fn env_remove(mut self, key: impl AsRef<str>) -> Self {
        self.env.remove(key.as_ref());
        self.env_remove.push(key.as_ref().to_string());
        self
    }

    /// Set the working directory.
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    pub fn get_program(&self) -> &Path {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        for key in &self.env_remove {
            cmd.env_remove(key);
        }

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }

        cmd
    }

    /// Execute the command, capturing its output.
    pub fn exec(&self) -> Result<Output> {
        debug!("running `{}`", self.display_command());

        let output = self
            .build_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| self.tool_error(format!("unable to start: {}", e)))?;

        Ok(output)
    }

    /// Execute and require success.
    pub fn exec_and_check(&self) -> Result<Output> {
        let output = self.exec()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let status = match output.status.code() {
                Some(code) => format!("exit code {}", code),
                None => "terminated by a signal".to_string(),
            };
            return Err(self
                .tool_error(format!("{}\n{}", status, stderr.trim_end()))
                .into());
        }
        Ok(output)
    }

    /// Execute, require success and return stdout as a string.
    pub fn exec_with_stdout(&self) -> Result<String> {
        let output = self.exec_and_check()?;
        String::from_utf8(output.stdout)
            .with_context(|| format!("`{}` produced invalid UTF-8", self.display_command()))
    }

    /// Display the command for error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }

    fn tool_error(&self, detail: String) -> DeployError {
        DeployError::ExternalTool {
            program: self.display_command(),
            detail,
        }
    }
}

/// Find an executable in PATH.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;

    #[test]
    fn test_display_command() {
        let pb = ProcessBuilder::new("make").args(["-f", "win32/Makefile.msc", "install"]);

        assert_eq!(pb.display_command(), "make -f win32/Makefile.msc install");
    }

    #[test]
    fn test_missing_program_is_external_tool_error() {
        let err = ProcessBuilder::new("pydeploy-surely-not-a-real-program")
            .exec()
            .unwrap_err();

        let err = err.downcast_ref::<DeployError>().unwrap();
        assert_eq!(err.kind(), ErrorKind::ExternalTool);
    }

    #[cfg(unix)]
    #[test]
    fn test_exec_with_stdout() {
        let out = ProcessBuilder::new("echo").arg("3.7.8").exec_with_stdout().unwrap();
        assert_eq!(out.trim(), "3.7.8");
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_is_external_tool_error() {
        let err = ProcessBuilder::new("false").exec_and_check().unwrap_err();
        let err = err.downcast_ref::<DeployError>().unwrap();
        assert_eq!(err.kind(), ErrorKind::ExternalTool);
    }

    #[cfg(unix)]
    #[test]
    fn test_env_remove() {
        let out = ProcessBuilder::new("sh")
            .args(["-c", "echo ${PYDEPLOY_TEST_VAR-unset}"])
            .env("PYDEPLOY_TEST_VAR", "set")
            .env_remove("PYDEPLOY_TEST_VAR")
            .exec_with_stdout()
            .unwrap();
        assert_eq!(out.trim(), "unset");
    }
}
