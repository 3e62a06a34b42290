/// 近似JSON文本的修复能力，输入文本输出文本，永不失败
pub trait JsonRepair: Send + Sync {
    fn repair(&self, text: &str) -> String;
}

/// 不做任何修复，原样返回
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRepair;

impl JsonRepair for NoRepair {
    fn repair(&self, text: &str) -> String {
        text.to_string()
    }
}

/// 基于单遍扫描的启发式修复器
///
/// 处理的问题：
/// - JSON前后夹带的说明文字
/// - 未加引号的键、单引号字符串、字符串内的裸换行
/// - Python风格的`True`/`False`/`None`
/// - 多余的尾逗号、括号不匹配
/// - 末尾被截断但最后一个值完整时，补齐字符串引号和括号
///
/// 如果文本在`,`或`:`之后被截断（说明有内容丢失），不做猜测，原样返回。
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicRepair;

impl JsonRepair for HeuristicRepair {
    fn repair(&self, text: &str) -> String {
        repair_json(text).unwrap_or_else(|| text.to_string())
    }
}

fn repair_json(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    // 说明文字里可能出现方括号，有对象时总是从第一个`{`开始
    let start = chars
        .iter()
        .position(|c| *c == '{')
        .or_else(|| chars.iter().position(|c| *c == '['))?;

    let mut out = String::with_capacity(text.len() + 16);
    // 期望的闭合符号
    let mut closers: Vec<char> = Vec::new();
    let mut i = start;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '"' | '\'' => {
                i = copy_string(&chars, i, &mut out);
                continue;
            }
            '{' => {
                closers.push('}');
                out.push(c);
            }
            '[' => {
                closers.push(']');
                out.push(c);
            }
            '}' | ']' => {
                drop_trailing_comma(&mut out);
                match closers.pop() {
                    Some(expected) => out.push(expected),
                    None => break,
                }
                if closers.is_empty() {
                    // 根节点已闭合，之后的内容视为说明文字
                    return Some(out);
                }
            }
            c if is_word_start(c) => {
                let end = word_end(&chars, i);
                let word: String = chars[i..end].iter().collect();
                if closers.last() == Some(&'}')
                    && in_key_position(&out)
                    && next_significant(&chars, end) == Some(':')
                {
                    out.push('"');
                    out.push_str(&word);
                    out.push('"');
                } else {
                    out.push_str(match word.as_str() {
                        "True" => "true",
                        "False" => "false",
                        "None" => "null",
                        other => other,
                    });
                }
                i = end;
                continue;
            }
            _ => out.push(c),
        }
        i += 1;
    }

    if closers.is_empty() {
        return Some(out);
    }

    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    if out.ends_with(',') || out.ends_with(':') {
        return None;
    }
    while let Some(closer) = closers.pop() {
        out.push(closer);
    }
    Some(out)
}

/// 复制一个字符串字面量（单引号统一改为双引号），返回结束后的位置
fn copy_string(chars: &[char], start: usize, out: &mut String) -> usize {
    let quote = chars[start];
    out.push('"');
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' => {
                match chars.get(i + 1) {
                    Some('\'') => out.push('\''),
                    Some(next) => {
                        out.push('\\');
                        out.push(*next);
                    }
                    None => {}
                }
                i += 2;
                continue;
            }
            c if c == quote => {
                out.push('"');
                return i + 1;
            }
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
        i += 1;
    }
    // 字符串未闭合
    out.push('"');
    i
}

fn drop_trailing_comma(out: &mut String) {
    let trimmed_len = out.trim_end().len();
    if out[..trimmed_len].ends_with(',') {
        out.truncate(trimmed_len - 1);
    }
}

fn in_key_position(out: &str) -> bool {
    matches!(out.trim_end().chars().last(), Some('{') | Some(','))
}

fn next_significant(chars: &[char], from: usize) -> Option<char> {
    chars[from..].iter().copied().find(|c| !c.is_whitespace())
}

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn word_end(chars: &[char], start: usize) -> usize {
    let mut end = start;
    while end < chars.len() && (chars[end].is_ascii_alphanumeric() || chars[end] == '_' || chars[end] == '$') {
        end += 1;
    }
    end
}
