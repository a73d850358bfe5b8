//! Freezing Python source to marshalled code.
//!
//! Freezing needs the host Python of the same version as the target, so the
//! jobs are collected while the build files are written and then run in a
//! single invocation of `freeze.py`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tempfile::TempDir;
use tracing::{debug, info};

use crate::util::process::ProcessBuilder;

const FREEZE_PY: &str = include_str!("freeze.py");

/// What a frozen module is written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conversion {
    /// A C array in a header file, for code needed before the resources
    /// are available.
    C,
    /// The raw marshalled code, embedded as a resource.
    Data,
}

/// One source file to freeze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreezeJob {
    pub label: String,
    pub source: PathBuf,
    pub output: PathBuf,
    pub name: String,
    pub conversion: Conversion,
}

/// The freeze jobs of a build.
#[derive(Debug, Clone, Default)]
pub struct FreezeJobs {
    jobs: Vec<FreezeJob>,
}

impl FreezeJobs {
    pub fn new() -> Self {
        FreezeJobs::default()
    }

    /// Freeze a module to a C header. `name` completes the `frozen_` array
    /// name.
    pub fn as_c(&mut self, label: impl Into<String>, source: &Path, output: &Path, name: &str) {
        self.jobs.push(FreezeJob {
            label: label.into(),
            source: source.to_path_buf(),
            output: output.to_path_buf(),
            name: name.to_string(),
            conversion: Conversion::C,
        });
    }

    /// Freeze a module to a resource. `resource` is its path in the
    /// resource file system.
    pub fn as_data(
        &mut self,
        label: impl Into<String>,
        source: &Path,
        output: &Path,
        resource: &str,
    ) {
        self.jobs.push(FreezeJob {
            label: label.into(),
            source: source.to_path_buf(),
            output: output.to_path_buf(),
            name: format!(":/{}", resource),
            conversion: Conversion::Data,
        });
    }

    pub fn jobs(&self) -> &[FreezeJob] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.jobs).context("failed to serialize the freeze jobs")
    }

    /// The host Python command that runs the jobs in `job_dir`.
    fn command(&self, python: &Path, opt: u8, job_dir: &Path) -> ProcessBuilder {
        let mut command = ProcessBuilder::new(python);

        match opt {
            0 => {}
            1 => command = command.arg("-O"),
            _ => command = command.arg("-OO"),
        }

        command
            .arg(job_dir.join("freeze.py"))
            .arg(job_dir.join("jobs.json"))
    }

    /// Run every job with the host Python at an optimisation level.
    pub fn run(&self, python: &Path, opt: u8) -> Result<()> {
        let job_dir = TempDir::new().context("failed to create a directory for the freeze jobs")?;

        std::fs::write(job_dir.path().join("freeze.py"), FREEZE_PY)
            .context("failed to write freeze.py")?;
        std::fs::write(job_dir.path().join("jobs.json"), self.to_json()?)
            .context("failed to write the freeze jobs")?;

        info!("freezing {} modules", self.jobs.len());

        let output = self.command(python, opt, job_dir.path()).exec_with_stdout()?;
        for line in output.lines() {
            debug!("{}", line);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_file() {
        let mut jobs = FreezeJobs::new();
        jobs.as_c(
            "main.py",
            Path::new("/p/main.py"),
            Path::new("/b/frozen_main.h"),
            "pydeploy_main",
        );
        jobs.as_data(
            "json",
            Path::new("/s/json/__init__.py"),
            Path::new("/b/resources/json/__init__.pyo"),
            "json/__init__.pyo",
        );

        let value: serde_json::Value = serde_json::from_str(&jobs.to_json().unwrap()).unwrap();
        assert_eq!(value[0]["conversion"], "c");
        assert_eq!(value[0]["name"], "pydeploy_main");
        assert_eq!(value[1]["conversion"], "data");
        assert_eq!(value[1]["name"], ":/json/__init__.pyo");
        assert_eq!(value[1]["label"], "json");
    }

    #[test]
    fn test_optimisation_flags() {
        let jobs = FreezeJobs::new();
        let dir = Path::new("/tmp/jobs");

        let args = |opt| jobs.command(Path::new("python3"), opt, dir).get_args().to_vec();

        assert_eq!(args(0).len(), 2);
        assert_eq!(args(1)[0], "-O");
        assert_eq!(args(2)[0], "-OO");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_with_host_python() {
        let Ok(python) = which::which("python3") else {
            return;
        };

        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("hello.py");
        std::fs::write(&source, "print('hello')\n").unwrap();

        let mut jobs = FreezeJobs::new();
        jobs.as_c("hello.py", &source, &tmp.path().join("frozen_hello.h"), "hello");
        jobs.as_data("hello", &source, &tmp.path().join("hello.pyo"), "hello.pyo");
        jobs.run(&python, 2).unwrap();

        let header = std::fs::read_to_string(tmp.path().join("frozen_hello.h")).unwrap();
        assert!(header.starts_with("static unsigned char frozen_hello[] = {"));
        assert!(tmp.path().join("hello.pyo").metadata().unwrap().len() > 0);
    }
}
