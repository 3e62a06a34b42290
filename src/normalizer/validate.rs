use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{AnalysisError, ViolationKind};
use crate::types::{AnalysisResult, Category, CategoryResult, ExtractedField, ExtractedFields};

const MAX_SCORE: i128 = 100;

/// 把解析后的JSON树校验并规整为`AnalysisResult`
///
/// 必填：`overall_score`、`breakdown`，以及六个维度各自的`score`和`feedback`。
/// 可选列表字段缺失或为`null`时取空列表；未知的键一律忽略。
pub fn validate(value: &Value) -> Result<AnalysisResult, AnalysisError> {
    let root = value.as_object().ok_or_else(|| {
        AnalysisError::violation(
            None,
            "<root>",
            ViolationKind::WrongType {
                expected: "a JSON object",
            },
        )
    })?;

    let overall_score = coerce_score(root.get("overall_score"))
        .map_err(|kind| AnalysisError::violation(None, "overall_score", kind))?;

    let breakdown = match root.get("breakdown") {
        None | Some(Value::Null) => {
            return Err(AnalysisError::violation(
                None,
                "breakdown",
                ViolationKind::Missing,
            ));
        }
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(AnalysisError::violation(
                None,
                "breakdown",
                ViolationKind::WrongType {
                    expected: "an object",
                },
            ));
        }
    };

    for key in breakdown.keys() {
        if key.parse::<Category>().is_err() {
            warn!(category = %key, "ignoring unknown breakdown category");
        }
    }

    let categories = Category::ALL
        .into_iter()
        .map(|category| validate_category(category, breakdown))
        .collect::<Result<Vec<_>, _>>()?;

    let gaps = string_list(root.get("gap_analysis"))
        .map_err(|kind| AnalysisError::violation(None, "gap_analysis", kind))?;

    Ok(AnalysisResult::new(overall_score, categories, gaps))
}

fn validate_category(
    category: Category,
    breakdown: &Map<String, Value>,
) -> Result<CategoryResult, AnalysisError> {
    let details = match breakdown.get(category.key()) {
        None | Some(Value::Null) => {
            return Err(AnalysisError::violation(
                Some(category),
                "",
                ViolationKind::Missing,
            ));
        }
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(AnalysisError::violation(
                Some(category),
                "",
                ViolationKind::WrongType {
                    expected: "an object",
                },
            ));
        }
    };

    let score = coerce_score(details.get("score"))
        .map_err(|kind| AnalysisError::violation(Some(category), "score", kind))?;

    let feedback = match details.get("feedback") {
        None | Some(Value::Null) => Err(ViolationKind::Missing),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ViolationKind::Empty),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ViolationKind::WrongType {
            expected: "a string",
        }),
    }
    .map_err(|kind| AnalysisError::violation(Some(category), "feedback", kind))?;

    let mut extracted = ExtractedFields::default();
    for field in ExtractedField::ALL {
        let values = string_list(details.get(field.key()))
            .map_err(|kind| AnalysisError::violation(Some(category), field.key(), kind))?;
        extracted.set(field, values);
    }

    Ok(CategoryResult::new(category, score, feedback, extracted))
}

/// 分数规整为整数：接受JSON整数、小数部分为0的浮点数、数字字符串
fn coerce_score(value: Option<&Value>) -> Result<u8, ViolationKind> {
    let not_integer = ViolationKind::WrongType {
        expected: "an integer score",
    };
    let raw = match value {
        None | Some(Value::Null) => return Err(ViolationKind::Missing),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i128::from(i)
            } else if let Some(u) = n.as_u64() {
                i128::from(u)
            } else {
                integral(n.as_f64()).ok_or(not_integer)?
            }
        }
        Some(Value::String(s)) => {
            let s = s.trim();
            match s.parse::<i128>() {
                Ok(i) => i,
                Err(_) => integral(s.parse::<f64>().ok()).ok_or(not_integer)?,
            }
        }
        Some(_) => return Err(not_integer),
    };

    if (0..=MAX_SCORE).contains(&raw) {
        Ok(raw as u8)
    } else {
        Err(ViolationKind::OutOfRange { value: raw })
    }
}

fn integral(value: Option<f64>) -> Option<i128> {
    value
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .map(|f| f as i128)
}

/// 可选列表字段：缺失/null取空，单个字符串视为一项，空白项丢弃
fn string_list(value: Option<&Value>) -> Result<Vec<String>, ViolationKind> {
    let wrong_type = ViolationKind::WrongType {
        expected: "a list of strings",
    };
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(s)) => Ok(non_blank(s).into_iter().collect()),
        Some(Value::Array(items)) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => values.extend(non_blank(s)),
                    Value::Number(n) => values.push(n.to_string()),
                    Value::Bool(b) => values.push(b.to_string()),
                    Value::Null => {}
                    Value::Array(_) | Value::Object(_) => return Err(wrong_type),
                }
            }
            Ok(values)
        }
        Some(_) => Err(wrong_type),
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
