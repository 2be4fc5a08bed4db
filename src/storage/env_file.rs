// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Minimal `.env` file reader and writer.
//!
//! Supported syntax:
//! - `KEY=VALUE`, optionally prefixed with `export `
//! - values wrapped in matching single or double quotes are unquoted
//! - blank lines and lines starting with `#` are kept verbatim but ignored
//!
//! Writes preserve every line the tool did not touch, byte for byte and in
//! order. Only entries changed through [`EnvFile::set`] are re-rendered.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{StorageError, StorageResult};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// `raw` holds the original text until the entry is rewritten.
    Entry {
        key: String,
        value: String,
        raw: Option<String>,
    },
    Other(String),
}

/// In-memory view of a `.env` file.
#[derive(Debug, Clone)]
pub struct EnvFile {
    path: PathBuf,
    lines: Vec<Line>,
}

impl EnvFile {
    /// Load `path`, or start empty if it does not exist.
    pub fn load(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            lines: contents.lines().map(parse_line).collect(),
        })
    }

    /// Value of the last definition of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().rev().find_map(|line| match line {
            Line::Entry { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Insert or replace `key`.
    ///
    /// The first existing definition is updated in place and later
    /// duplicates are dropped; otherwise the entry is appended.
    pub fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if key.is_empty() || key.contains(['=', '\n', ' ']) {
            return Err(StorageError::InvalidEntry(format!("invalid key: {key:?}")));
        }
        if value.contains('\n') {
            return Err(StorageError::InvalidEntry(format!(
                "value for {key} contains a newline"
            )));
        }

        let mut replaced = false;
        self.lines.retain_mut(|line| match line {
            Line::Entry {
                key: k,
                value: v,
                raw,
            } if *k == key => {
                if replaced {
                    return false;
                }
                if *v != value {
                    *v = value.to_string();
                    *raw = None;
                }
                replaced = true;
                true
            }
            _ => true,
        });

        if !replaced {
            self.lines.push(Line::Entry {
                key: key.to_string(),
                value: value.to_string(),
                raw: None,
            });
        }
        Ok(())
    }

    /// Write the file back to disk.
    ///
    /// Content goes to a sibling `<name>.tmp` file first and is renamed over
    /// the target. On Unix the file is created with mode `0600`.
    pub fn save(&self) -> StorageResult<()> {
        let tmp_path = self.tmp_path();
        {
            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::OpenOptionsExt;
                options.mode(0o600);
            }
            let mut file = options.open(&tmp_path)?;
            file.write_all(self.render().as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name: OsString = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Entry { raw: Some(raw), .. } | Line::Other(raw) => out.push_str(raw),
                Line::Entry { key, value, raw: None } => {
                    out.push_str(key);
                    out.push('=');
                    out.push_str(value);
                }
            }
            out.push('\n');
        }
        out
    }
}

fn parse_line(raw: &str) -> Line {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Line::Other(raw.to_string());
    }

    let body = trimmed.strip_prefix("export ").unwrap_or(trimmed);
    match body.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Line::Entry {
            key: key.trim().to_string(),
            value: unquote(value.trim()).to_string(),
            raw: Some(raw.to_string()),
        },
        _ => Line::Other(raw.to_string()),
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join(".env");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let env = EnvFile::load(dir.path().join(".env")).unwrap();
        assert_eq!(env.get("PRIVATE_KEY"), None);
    }

    #[test]
    fn parses_quotes_exports_and_comments() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "# wallet\nexport A=1\nB=\"two words\"\nC='3'\n\nnot an entry\nD = spaced \n",
        );
        let env = EnvFile::load(&path).unwrap();

        assert_eq!(env.get("A"), Some("1"));
        assert_eq!(env.get("B"), Some("two words"));
        assert_eq!(env.get("C"), Some("3"));
        assert_eq!(env.get("D"), Some("spaced"));
        assert_eq!(env.get("not an entry"), None);
    }

    #[test]
    fn last_definition_wins() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "A=1\nA=2\n");
        assert_eq!(EnvFile::load(&path).unwrap().get("A"), Some("2"));
    }

    #[test]
    fn set_preserves_other_lines() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "# keep me\nRPC=x\nPRIVATE_KEY=[1]\nPRIVATE_KEY=[2]\nZ=9\n");

        let mut env = EnvFile::load(&path).unwrap();
        env.set("PRIVATE_KEY", "[3]").unwrap();
        env.set("NEW", "value").unwrap();
        env.save().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "# keep me\nRPC=x\nPRIVATE_KEY=[3]\nZ=9\nNEW=value\n"
        );
    }

    #[test]
    fn save_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");

        let mut env = EnvFile::load(&path).unwrap();
        env.set("PRIVATE_KEY", "[1,2,3]").unwrap();
        env.save().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "PRIVATE_KEY=[1,2,3]\n");
        assert!(!dir.path().join(".env.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn save_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        let mut env = EnvFile::load(&path).unwrap();
        env.set("K", "v").unwrap();
        env.save().unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn set_rejects_bad_entries() {
        let dir = TempDir::new().unwrap();
        let mut env = EnvFile::load(dir.path().join(".env")).unwrap();
        assert!(env.set("", "v").is_err());
        assert!(env.set("A=B", "v").is_err());
        assert!(env.set("A", "multi\nline").is_err());
    }

    #[test]
    fn save_keeps_untouched_lines_verbatim() {
        let dir = TempDir::new().unwrap();
        let original = "export RPC=x\nGREETING=\"hello # world\"\n  SPACED = 'a b' \n";
        let path = write(&dir, original);

        let mut env = EnvFile::load(&path).unwrap();
        env.set("PRIVATE_KEY", "[1]").unwrap();
        env.save().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, format!("{original}PRIVATE_KEY=[1]\n"));
        assert_eq!(EnvFile::load(&path).unwrap().get("GREETING"), Some("hello # world"));
    }

    #[test]
    fn set_with_same_value_keeps_original_line() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "export PRIVATE_KEY=\"[1]\"\n");

        let mut env = EnvFile::load(&path).unwrap();
        env.set("PRIVATE_KEY", "[1]").unwrap();
        env.save().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "export PRIVATE_KEY=\"[1]\"\n");

        env.set("PRIVATE_KEY", "[2]").unwrap();
        env.save().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "PRIVATE_KEY=[2]\n");
    }

    #[test]
    fn save_leaves_similarly_named_siblings_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wallet.env");
        let sibling = dir.path().join("wallet.tmp");
        fs::write(&sibling, "keep").unwrap();

        let mut env = EnvFile::load(&path).unwrap();
        env.set("PRIVATE_KEY", "[1]").unwrap();
        env.save().unwrap();

        assert_eq!(fs::read_to_string(&sibling).unwrap(), "keep");
        assert_eq!(fs::read_to_string(&path).unwrap(), "PRIVATE_KEY=[1]\n");
        assert!(!dir.path().join("wallet.env.tmp").exists());
    }
}
