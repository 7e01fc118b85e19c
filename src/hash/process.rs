//! External `xxhsum` provider: one child process per digest.

use super::{HashProvider, ProviderError};
use crate::types::Fingerprint;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tracing::trace;

/// Runs the `xxhsum` tool and takes the first whitespace-delimited token of
/// its output as the digest.
#[derive(Debug, Clone)]
pub struct XxhsumProvider {
    program: String,
}

impl Default for XxhsumProvider {
    fn default() -> Self {
        Self::with_program("xxhsum")
    }
}

impl XxhsumProvider {
    /// Use a specific executable (name on PATH or absolute path).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn spawn_error(&self, e: std::io::Error) -> ProviderError {
        ProviderError::Unavailable(format!("failed to run '{}': {}", self.program, e))
    }

    fn digest_from(&self, output: Output) -> Result<Fingerprint, ProviderError> {
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProviderError::Unavailable(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_digest(&stdout).ok_or_else(|| {
            ProviderError::Unavailable(format!("'{}' produced no digest", self.program))
        })
    }
}

/// Extract the digest from a line of `xxhsum` output.
///
/// `xxhsum` prefixes the line with a backslash when it had to escape the
/// file name; the prefix is not part of the digest.
fn parse_digest(output: &str) -> Option<Fingerprint> {
    let token = output.split_whitespace().next()?;
    let token = token.strip_prefix('\\').unwrap_or(token);
    if token.is_empty() {
        None
    } else {
        Some(Fingerprint::from(token))
    }
}

impl HashProvider for XxhsumProvider {
    fn name(&self) -> &'static str {
        "xxhsum"
    }

    fn hash_bytes(&self, data: &[u8]) -> Result<Fingerprint, ProviderError> {
        let mut child = Command::new(&self.program)
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(data).map_err(|e| {
                ProviderError::Unavailable(format!(
                    "failed to write to '{}' stdin: {}",
                    self.program, e
                ))
            })?;
        }

        let output = child.wait_with_output().map_err(|e| self.spawn_error(e))?;
        let digest = self.digest_from(output)?;
        trace!(bytes = data.len(), digest = %digest, "xxhsum digest of input");
        Ok(digest)
    }

    fn hash_file(&self, path: &Path) -> Result<Fingerprint, ProviderError> {
        let output = Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))?;
        let digest = self.digest_from(output)?;
        trace!(path = %path.display(), digest = %digest, "xxhsum digest of file");
        Ok(digest)
    }
}
