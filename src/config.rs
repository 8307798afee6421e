use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Flags that can come from the CLI or from a saved config file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub sidebar: bool,
    pub no_sidebar: bool,
    pub author: Option<String>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: booleans accumulate, valued flags from
    /// `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            sidebar: self.sidebar || other.sidebar,
            no_sidebar: self.no_sidebar || other.no_sidebar,
            author: other.author.clone().or_else(|| self.author.clone()),
        }
    }

    /// Effective sidebar visibility. Visible by default; `--no-sidebar`
    /// hides it, and an explicit `--sidebar` re-enables it even over a
    /// saved `--no-sidebar`.
    pub const fn sidebar_visible(&self) -> bool {
        self.sidebar || !self.no_sidebar
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("jotter").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("jotter")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("jotter").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("jotter").join("config");
        }
    }

    PathBuf::from(".jotterrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".jotterrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let mut tokens = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Valued flags are written as one `--flag=value` line; the value
        // may contain spaces, so the line must stay a single token.
        if line.contains('=') {
            tokens.push(line.to_owned());
        } else {
            tokens.extend(line.split_whitespace().map(ToOwned::to_owned));
        }
    }
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# jotter defaults (saved with --save)".to_string());
    if flags.sidebar {
        lines.push("--sidebar".to_string());
    }
    if flags.no_sidebar {
        lines.push("--no-sidebar".to_string());
    }
    if let Some(author) = &flags.author {
        lines.push(format!("--author={author}"));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--sidebar" {
            flags.sidebar = true;
        } else if token == "--no-sidebar" {
            flags.no_sidebar = true;
        } else if token == "--author" {
            if let Some(next) = tokens.get(i + 1) {
                flags.author = Some(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--author=") {
            flags.author = Some(value.to_string());
        }
        i += 1;
    }
    flags
}
