use serde::{Deserialize, Serialize};

/// 目标语言类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum TargetLanguage {
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "en")]
    #[default]
    English,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "ru")]
    Russian,
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetLanguage::Chinese => write!(f, "zh"),
            TargetLanguage::English => write!(f, "en"),
            TargetLanguage::Japanese => write!(f, "ja"),
            TargetLanguage::Korean => write!(f, "ko"),
            TargetLanguage::German => write!(f, "de"),
            TargetLanguage::French => write!(f, "fr"),
            TargetLanguage::Russian => write!(f, "ru"),
        }
    }
}

impl std::str::FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zh" | "chinese" | "中文" => Ok(TargetLanguage::Chinese),
            "en" | "english" | "英文" => Ok(TargetLanguage::English),
            "ja" | "japanese" | "日本語" | "日文" => Ok(TargetLanguage::Japanese),
            "ko" | "korean" | "한국어" | "韩文" => Ok(TargetLanguage::Korean),
            "de" | "german" | "deutsch" | "德文" => Ok(TargetLanguage::German),
            "fr" | "french" | "français" | "法文" => Ok(TargetLanguage::French),
            "ru" | "russian" | "русский" | "俄文" => Ok(TargetLanguage::Russian),
            _ => Err(format!("Unknown target language: {}", s)),
        }
    }
}

impl TargetLanguage {
    /// 获取语言的提示词指令，只约束反馈与列表内容的语言，JSON键名保持不变
    pub fn prompt_instruction(&self) -> &'static str {
        match self {
            TargetLanguage::Chinese => "请使用中文撰写所有反馈和列表内容，JSON键名保持英文原样。",
            TargetLanguage::English => {
                "Write all feedback and list items in English, in clear and professional language."
            }
            TargetLanguage::Japanese => {
                "すべてのフィードバックとリスト項目は日本語で記述してください。JSONのキー名は変更しないでください。"
            }
            TargetLanguage::Korean => {
                "모든 피드백과 목록 항목은 한국어로 작성해 주세요. JSON 키 이름은 그대로 유지해 주세요."
            }
            TargetLanguage::German => {
                "Bitte verfassen Sie alle Rückmeldungen und Listeneinträge auf Deutsch. Die JSON-Schlüssel bleiben unverändert."
            }
            TargetLanguage::French => {
                "Veuillez rédiger tous les commentaires et éléments de liste en français. Les clés JSON restent inchangées."
            }
            TargetLanguage::Russian => {
                "Пожалуйста, пишите все отзывы и элементы списков на русском языке. Ключи JSON не изменяйте."
            }
        }
    }

    /// 获取报告文件名
    pub fn report_filename(&self) -> &'static str {
        match self {
            TargetLanguage::Chinese => "简报分析报告.md",
            TargetLanguage::English => "Brief-Analysis-Report.md",
            TargetLanguage::Japanese => "ブリーフ分析レポート.md",
            TargetLanguage::Korean => "브리프-분석-보고서.md",
            TargetLanguage::German => "Briefing-Analysebericht.md",
            TargetLanguage::French => "Rapport-d-Analyse-du-Brief.md",
            TargetLanguage::Russian => "Отчет-по-Анализу-Брифа.md",
        }
    }
}
