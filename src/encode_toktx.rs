use std::{path::Path, process::Command};

use crate::{
    config::Config,
    convert::{Encoder, FileCopier},
    error::{KtxifyError, KtxifyResult},
    paths::ensure_parent_dir,
};

pub fn is_toktx_on_path() -> bool {
    Command::new("toktx")
        .arg("--version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// [`Encoder`] backed by the system `toktx` binary from the KTX-Software
/// tools. We intentionally shell out rather than bind libktx to avoid native
/// dev header/lib requirements.
#[derive(Clone, Debug)]
pub struct ToktxEncoder {
    /// Emit the KTX2 container (`--t2`); otherwise the legacy KTX container.
    pub ktx2: bool,
}

impl ToktxEncoder {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            ktx2: !cfg.use_ktx_container,
        }
    }
}

impl Encoder for ToktxEncoder {
    fn encode(&self, input: &Path, output: &Path, extra_args: &[String]) -> KtxifyResult<()> {
        ensure_parent_dir(output)?;

        // toktx takes `[options] <outfile> <infile>`.
        let mut cmd = Command::new("toktx");
        if self.ktx2 {
            cmd.arg("--t2");
        }
        cmd.args(extra_args).arg(output).arg(input);

        let out = cmd.output().map_err(|e| {
            KtxifyError::encode(format!(
                "failed to spawn toktx (is it installed and on PATH?): {e}"
            ))
        })?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(KtxifyError::encode(format!(
                "toktx exited with status {} for '{}': {}",
                out.status,
                input.display(),
                stderr.trim()
            )));
        }

        Ok(())
    }
}

/// [`FileCopier`] over `std::fs`.
#[derive(Clone, Debug, Default)]
pub struct StdFileCopier;

impl FileCopier for StdFileCopier {
    fn copy(&self, src: &Path, dst: &Path) -> KtxifyResult<()> {
        ensure_parent_dir(dst)?;
        std::fs::copy(src, dst).map_err(|e| {
            KtxifyError::io(format!(
                "failed to copy '{}' to '{}': {e}",
                src.display(),
                dst.display()
            ))
        })?;
        Ok(())
    }
}
