use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Fixed locations inside the repository that Autowire reads and patches.
///
/// The tool binary lives in `<root>/tools/`, so the repository root is two
/// levels up from the binary itself. Everything else is anchored to that
/// root; no component looks at the environment after resolution.
#[derive(Debug, Clone)]
pub struct RepoPaths {
    pub root: PathBuf,
    /// CMake build descriptor template, carries `@@PARSER_SOURCE@@`.
    pub build_descriptor: PathBuf,
    /// JNI bridge template, carries `@@PARSER_HEADER@@` and `@@PARSER_CALL@@`.
    pub bridge_source: PathBuf,
}

impl RepoPaths {
    /// Resolve the repository root from the tool's own executable path.
    pub fn resolve(tool_path: &Path) -> Result<Self> {
        let tool_dir = tool_path.parent().ok_or_else(|| {
            anyhow::anyhow!("cannot determine tool directory from `{}`", tool_path.display())
        })?;

        let root = tool_dir.parent().ok_or_else(|| {
            anyhow::anyhow!(
                "cannot resolve repository root from `{}` (expected <repo>/tools/<binary>)",
                tool_path.display()
            )
        })?;

        let root = root.canonicalize().context(format!(
            "failed to resolve repository root `{}`",
            root.display()
        ))?;

        Ok(Self::at_root(root))
    }

    /// Anchor the fixed target paths to an already-known root.
    pub fn at_root(root: PathBuf) -> Self {
        let build_descriptor = root.join("android/app/src/main/cpp/CMakeLists.txt");
        let bridge_source = root.join("android/app/src/main/cpp/continuity_bridge.cpp");
        Self {
            root,
            build_descriptor,
            bridge_source,
        }
    }
}
