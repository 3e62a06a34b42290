//! 简报读取 - 只支持纯文本与Markdown

use anyhow::{Context, Result, bail};
use std::path::Path;

/// 需要二进制解析的文档格式，不予支持
const BINARY_FORMATS: &[&str] = &["docx", "doc", "pdf", "odt", "rtf", "pages"];

/// 读取简报正文，去除BOM与首尾空白
pub fn read_brief(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if BINARY_FORMATS.contains(&extension.as_str()) {
        bail!(
            "Unsupported brief format '.{}': export {} as plain text or Markdown first",
            extension,
            path.display()
        );
    }

    let bytes = std::fs::read(path).with_context(|| format!("Failed to read brief {}", path.display()))?;
    let text = String::from_utf8(bytes)
        .with_context(|| format!("Brief {} is not valid UTF-8 text", path.display()))?;

    let text = text.trim_start_matches('\u{feff}').trim();
    if text.is_empty() {
        bail!("Brief {} is empty", path.display());
    }
    Ok(text.to_string())
}
