//! Source archive lookup, download and unpacking.
//!
//! An archive is looked for in each source directory, then in the download
//! cache, and is finally downloaded into the cache from each of the URLs a
//! plugin suggests.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use indicatif::{ProgressBar, ProgressStyle};
use tar::Archive;
use tracing::debug;

use crate::core::errors::DeployError;
use crate::util::fs;
use crate::util::process::ProcessBuilder;

/// The archive extensions we know how to unpack, longest first.
const EXTENSIONS: &[&str] = &[".tar.bz2", ".tar.gz", ".tar.xz", ".tar", ".tgz"];

/// Where to look for archives.
#[derive(Debug, Clone)]
pub struct ArchiveSearch {
    pub source_dirs: Vec<PathBuf>,
    pub cache_dir: PathBuf,
    pub offline: bool,
}

impl ArchiveSearch {
    /// Look for a file in the source directories only.
    pub fn find_file(&self, name: &str) -> Option<PathBuf> {
        for source_dir in &self.source_dirs {
            debug!("looking for '{}' in {}", name, source_dir.display());

            let path = source_dir.join(name);
            if path.is_file() {
                debug!("found '{}' in {}", name, source_dir.display());
                return Some(path);
            }
        }

        None
    }

    /// Return a local copy of an archive, downloading it if necessary.
    ///
    /// `urls` yields the directory URLs that the archive name is appended
    /// to. It is only called if the archive is not available locally.
    pub fn get_archive(
        &self,
        component: &str,
        archive: &str,
        urls: impl FnOnce() -> Result<Vec<String>>,
    ) -> Result<PathBuf> {
        if let Some(path) = self.find_file(archive) {
            return Ok(path);
        }

        let cached = self.cache_dir.join(archive);
        if cached.is_file() {
            debug!("found '{}' in download cache", archive);
            return Ok(cached);
        }

        let mut attempts: Vec<String> = self
            .source_dirs
            .iter()
            .map(|d| d.join(archive).display().to_string())
            .collect();
        attempts.push(cached.display().to_string());

        if self.offline {
            debug!("not downloading '{}' while offline", archive);
        } else {
            let urls = urls()?;
            if !urls.is_empty() {
                fs::ensure_dir(&self.cache_dir)?;
            }

            for url in urls {
                let archive_url = format!("{}{}", url, archive);
                tracing::info!("{}: downloading '{}' from {}", component, archive, url);

                match download(&archive_url, &cached) {
                    Ok(()) => {
                        debug!("downloaded '{}'", archive_url);
                        return Ok(cached);
                    }
                    Err(e) => {
                        debug!("unable to download '{}': {:#}", archive_url, e);
                        attempts.push(archive_url);
                    }
                }
            }
        }

        Err(DeployError::Download {
            component: Some(component.to_string()),
            archive: archive.to_string(),
            attempts,
        }
        .into())
    }
}

/// Download a URL to a file, showing a progress bar when the size is known.
///
/// The file only appears once the download is complete.
pub fn download(url: &str, dest: &Path) -> Result<()> {
    let url = url::Url::parse(url).with_context(|| format!("invalid URL '{}'", url))?;

    let response = reqwest::blocking::get(url.clone())
        .with_context(|| format!("failed to download {}", url))?;

    if !response.status().is_success() {
        bail!("failed to download {}: HTTP {}", url, response.status());
    }

    let progress = match response.content_length() {
        Some(len) => {
            let pb = ProgressBar::new(len);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:30}] {bytes}/{total_bytes}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            );
            pb
        }
        None => ProgressBar::new_spinner(),
    };
    progress.set_message(
        url.path_segments()
            .and_then(|mut s| s.next_back())
            .unwrap_or_default()
            .to_string(),
    );

    let parent = dest.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("failed to create a temporary file in {}", parent.display()))?;

    io::copy(&mut progress.wrap_read(response), &mut tmp)
        .with_context(|| format!("failed to read the response from {}", url))?;
    progress.finish_and_clear();

    tmp.persist(dest)
        .with_context(|| format!("failed to write {}", dest.display()))?;

    Ok(())
}

/// Find the download directory of an archive on a PyPI project page.
pub fn pypi_urls(project: &str, version: &str, archive: &str) -> Result<Vec<String>> {
    let url = format!("https://pypi.org/project/{}/{}/", project, version);
    debug!("reading '{}'", url);

    let page = reqwest::blocking::get(&url)
        .and_then(|r| r.error_for_status())
        .and_then(|r| r.text())
        .map_err(|e| {
            DeployError::config(format!("unable to read '{}'", url)).with_detail(e.to_string())
        })?;

    Ok(pypi_link(&page, archive).into_iter().collect())
}

/// Return the URL, less the archive name, of the first link to `archive`.
fn pypi_link(page: &str, archive: &str) -> Option<String> {
    let href = regex::Regex::new(r#"href="([^"]+)""#).ok()?;

    let found = href
        .captures_iter(page)
        .filter_map(|c| c.get(1))
        .find_map(|m| m.as_str().strip_suffix(archive).map(str::to_string));

    if found.is_none() {
        debug!("unable to find a link to '{}'", archive);
    }

    found
}

/// The name of an archive without its extension.
pub fn archive_stem(name: &str) -> Option<&str> {
    EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .filter(|stem| !stem.is_empty())
}

/// Unpack an archive into `dest_dir`.
///
/// The archive must contain a single top-level directory named after the
/// archive. Its path is returned.
pub fn unpack_archive(component: &str, archive: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let name = archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let Some(stem) = archive_stem(&name) else {
        return Err(DeployError::component(
            component,
            format!("'{}' has an unknown extension", archive.display()),
        )
        .into());
    };

    debug!("{}: unpacking '{}'", component, name);
    fs::ensure_dir(dest_dir)?;

    let unpacked = if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        let file = File::open(archive)
            .with_context(|| format!("failed to open {}", archive.display()))?;
        extract_tarball(GzDecoder::new(file), dest_dir)
    } else if name.ends_with(".tar") {
        let file = File::open(archive)
            .with_context(|| format!("failed to open {}", archive.display()))?;
        extract_tarball(file, dest_dir)
    } else {
        // Other compressions are left to the host's tar.
        ProcessBuilder::new("tar")
            .arg("-xf")
            .arg(archive)
            .cwd(dest_dir)
            .exec_and_check()
            .map(|_| ())
    };

    if let Err(e) = unpacked {
        return Err(DeployError::component(component, format!("unable to unpack {}", name))
            .with_detail(format!("{:#}", e))
            .into());
    }

    let root = dest_dir.join(stem);
    if !root.is_dir() {
        return Err(DeployError::component(
            component,
            format!(
                "unpacking {} did not create a directory called '{}' as expected",
                name, stem
            ),
        )
        .into());
    }

    Ok(root)
}

/// Extract a tar stream into a destination directory.
///
/// Entries that would be written outside `dest` are rejected.
fn extract_tarball<R: Read>(reader: R, dest: &Path) -> Result<()> {
    let mut archive = Archive::new(reader);

    for entry in archive.entries().context("failed to read tarball entries")? {
        let mut entry = entry.context("failed to read tarball entry")?;
        let path = entry
            .path()
            .context("failed to get entry path")?
            .into_owned();

        let inside = entry
            .unpack_in(dest)
            .with_context(|| format!("failed to extract {}", path.display()))?;
        if !inside {
            bail!("tarball entry escapes destination directory: {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::TempDir;

    fn write_tarball(path: &Path, files: &[(&str, &str)]) {
        let file = File::create(path).unwrap();
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);

        for (name, contents) in files {
            let mut header = tar::Header::new_gnu();
            header.set_path(name).unwrap();
            header.set_size(contents.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append(&header, io::Cursor::new(contents.as_bytes()))
                .unwrap();
        }

        builder.into_inner().unwrap().finish().unwrap();
    }

    fn search(source_dirs: Vec<PathBuf>, cache_dir: PathBuf) -> ArchiveSearch {
        ArchiveSearch {
            source_dirs,
            cache_dir,
            offline: true,
        }
    }

    #[test]
    fn test_archive_stem() {
        assert_eq!(archive_stem("zlib-1.2.11.tar.gz"), Some("zlib-1.2.11"));
        assert_eq!(archive_stem("Python-3.7.8.tgz"), Some("Python-3.7.8"));
        assert_eq!(
            archive_stem("qt-everywhere-src-5.15.0.tar.xz"),
            Some("qt-everywhere-src-5.15.0")
        );
        assert_eq!(archive_stem("sip.zip"), None);
    }

    #[test]
    fn test_pypi_link() {
        let page = concat!(
            r#"<a href="https://files.pythonhosted.org/packages/ab/cd/PyQt5_sip-12.8.1.tar.gz">"#,
            "PyQt5_sip-12.8.1.tar.gz</a>"
        );

        assert_eq!(
            pypi_link(page, "PyQt5_sip-12.8.1.tar.gz").as_deref(),
            Some("https://files.pythonhosted.org/packages/ab/cd/")
        );
        assert_eq!(pypi_link(page, "PyQt5-5.15.1.tar.gz"), None);
    }

    #[test]
    fn test_source_dirs_searched_in_order() {
        let tmp = TempDir::new().unwrap();
        let first = tmp.path().join("first");
        let second = tmp.path().join("second");
        std::fs::create_dir_all(&first).unwrap();
        std::fs::create_dir_all(&second).unwrap();
        std::fs::write(second.join("zlib-1.2.11.tar.gz"), b"").unwrap();

        let search = search(vec![first, second.clone()], tmp.path().join("cache"));
        let found = search
            .get_archive("zlib", "zlib-1.2.11.tar.gz", || Ok(Vec::new()))
            .unwrap();
        assert_eq!(found, second.join("zlib-1.2.11.tar.gz"));
    }

    #[test]
    fn test_cache_is_searched_after_source_dirs() {
        let tmp = TempDir::new().unwrap();
        let cache = tmp.path().join("cache");
        std::fs::create_dir_all(&cache).unwrap();
        std::fs::write(cache.join("openssl-1.1.1g.tar.gz"), b"").unwrap();

        let search = search(vec![tmp.path().to_path_buf()], cache.clone());
        let found = search
            .get_archive("OpenSSL", "openssl-1.1.1g.tar.gz", || Ok(Vec::new()))
            .unwrap();
        assert_eq!(found, cache.join("openssl-1.1.1g.tar.gz"));
    }

    #[test]
    fn test_missing_archive_is_download_error() {
        let tmp = TempDir::new().unwrap();
        let search = search(vec![tmp.path().to_path_buf()], tmp.path().join("cache"));

        let err = search
            .get_archive("zlib", "zlib-1.2.11.tar.gz", || {
                Ok(vec!["https://zlib.net/".to_string()])
            })
            .unwrap_err();
        let err = err.downcast_ref::<DeployError>().unwrap();

        assert_eq!(err.kind(), ErrorKind::Download);
        assert_eq!(err.to_string(), "zlib: unable to find 'zlib-1.2.11.tar.gz'");
    }

    #[test]
    fn test_unpack_archive() {
        let tmp = TempDir::new().unwrap();
        let archive = tmp.path().join("zlib-1.2.11.tar.gz");
        write_tarball(
            &archive,
            &[("zlib-1.2.11/zlib.h", "#define ZLIB_VERSION \"1.2.11\"\n")],
        );

        let build = tmp.path().join("build");
        let root = unpack_archive("zlib", &archive, &build).unwrap();

        assert_eq!(root, build.join("zlib-1.2.11"));
        assert!(root.join("zlib.h").is_file());
    }

    #[test]
    fn test_unpack_requires_named_directory() {
        let tmp = TempDir::new().unwrap();
        let archive = tmp.path().join("zlib-1.2.11.tar.gz");
        write_tarball(&archive, &[("zlib/zlib.h", "")]);

        let err = unpack_archive("zlib", &archive, &tmp.path().join("build")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "zlib: unpacking zlib-1.2.11.tar.gz did not create a directory called \
             'zlib-1.2.11' as expected"
        );
    }

    #[test]
    fn test_unknown_extension() {
        let tmp = TempDir::new().unwrap();
        let err = unpack_archive("SIP", &tmp.path().join("sip.zip"), tmp.path()).unwrap_err();
        assert!(err.to_string().contains("has an unknown extension"));
    }
}
