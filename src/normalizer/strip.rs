use regex::Regex;
use std::sync::LazyLock;

/// 代码围栏标记，带或不带语言标签（```json / ```）
static FENCE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[A-Za-z0-9_+.\-]*").expect("fence pattern is valid"));

const BOM: char = '\u{feff}';

/// 去掉模型输出外层的噪声：首尾空白、任意位置的代码围栏标记、BOM
///
/// 重复执行直到结果不再变化，因此对同一输入多次调用的结果相同。
pub fn strip_wrapper(text: &str) -> String {
    let mut current = strip_once(text);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(text: &str) -> String {
    let without_bom: String = text.chars().filter(|c| *c != BOM).collect();
    FENCE_MARKER
        .replace_all(&without_bom, "")
        .trim()
        .to_string()
}
