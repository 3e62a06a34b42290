//! 简报语气分析 - 基于词典的极性/主观性估计，以及面向用户的解读文本

use serde::Serialize;

/// 极性 [-1, 1]，主观性 [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// 语气解读
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentInterpretation {
    pub polarity_text: &'static str,
    pub subjectivity_text: &'static str,
}

/// (词, 极性, 主观性)
const LEXICON: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9),
    ("authentic", 0.5, 0.5),
    ("bad", -0.7, 0.667),
    ("best", 1.0, 0.3),
    ("boring", -1.0, 1.0),
    ("bold", 0.333, 0.667),
    ("clear", 0.1, 0.383),
    ("compelling", 0.5, 0.6),
    ("confusing", -0.3, 0.6),
    ("difficult", -0.5, 1.0),
    ("disappointing", -0.6, 0.7),
    ("effective", 0.6, 0.8),
    ("engaging", 0.4, 0.6),
    ("excellent", 1.0, 1.0),
    ("exciting", 0.3, 0.8),
    ("expensive", -0.5, 0.7),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("failure", -0.316, 0.3),
    ("fantastic", 0.4, 0.9),
    ("fresh", 0.3, 0.5),
    ("fun", 0.3, 0.2),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("hate", -0.8, 0.9),
    ("important", 0.4, 1.0),
    ("innovative", 0.5, 0.6),
    ("inspiring", 0.5, 0.7),
    ("love", 0.5, 0.6),
    ("loyal", 0.333, 0.667),
    ("negative", -0.3, 0.4),
    ("outdated", -0.4, 0.5),
    ("perfect", 1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("positive", 0.227, 0.545),
    ("premium", 0.4, 0.5),
    ("problem", -0.3, 0.4),
    ("risk", -0.2, 0.3),
    ("strong", 0.433, 0.733),
    ("struggling", -0.4, 0.6),
    ("successful", 0.75, 0.95),
    ("terrible", -1.0, 1.0),
    ("trusted", 0.4, 0.5),
    ("ugly", -0.7, 1.0),
    ("unclear", -0.2, 0.5),
    ("unique", 0.375, 1.0),
    ("weak", -0.375, 0.625),
    ("wonderful", 1.0, 1.0),
    ("worst", -1.0, 1.0),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "isn't", "aren't", "don't", "doesn't", "won't", "can't", "cannot",
    "without",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("highly", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("somewhat", 0.7),
    ("slightly", 0.5),
];

/// 估计文本的极性与主观性，未命中任何词典词时两者都为0
pub fn analyze_sentiment(text: &str) -> SentimentScore {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| !(c.is_alphabetic() || c == '\''))
        .filter(|t| !t.is_empty())
        .collect();

    let mut polarity_sum = 0.0;
    let mut subjectivity_sum = 0.0;
    let mut hits = 0usize;

    for (idx, token) in tokens.iter().enumerate() {
        let Some((_, polarity, subjectivity)) = LEXICON.iter().find(|(w, _, _)| w == token) else {
            continue;
        };

        let mut polarity = *polarity;
        let mut subjectivity = *subjectivity;

        // 只看紧邻的前两个词
        let window = &tokens[idx.saturating_sub(2)..idx];
        if let Some(factor) = window
            .iter()
            .rev()
            .find_map(|w| INTENSIFIERS.iter().find(|(i, _)| i == w).map(|(_, f)| *f))
        {
            polarity *= factor;
            subjectivity *= factor;
        }
        if window.iter().any(|w| NEGATIONS.contains(w)) {
            polarity *= -0.5;
        }

        polarity_sum += polarity.clamp(-1.0, 1.0);
        subjectivity_sum += subjectivity.clamp(0.0, 1.0);
        hits += 1;
    }

    if hits == 0 {
        return SentimentScore {
            polarity: 0.0,
            subjectivity: 0.0,
        };
    }

    SentimentScore {
        polarity: (polarity_sum / hits as f64).clamp(-1.0, 1.0),
        subjectivity: (subjectivity_sum / hits as f64).clamp(0.0, 1.0),
    }
}

pub fn interpret_sentiment(score: SentimentScore) -> SentimentInterpretation {
    let polarity_text = if score.polarity <= -0.5 {
        "The brief has a very negative tone, which might not be engaging. A negative tone can demotivate your audience and reduce the effectiveness of your messaging. Consider revising the content to include more positive and inspiring language."
    } else if score.polarity < -0.1 {
        "The brief has a somewhat negative tone. While it's important to address challenges, ensure that the overall message remains optimistic and solution-oriented to keep your audience engaged."
    } else if score.polarity <= 0.1 {
        "The brief has a neutral tone. This is balanced but may lack emotional impact. Consider adding elements that evoke positive emotions to make your message more compelling."
    } else if score.polarity <= 0.5 {
        "The brief has a positive tone, which is generally engaging. Positive language can inspire and motivate your audience, making your campaign more effective."
    } else {
        "The brief has a very positive tone, which is highly engaging. A positive tone can significantly boost audience morale and drive better engagement and action."
    };

    let subjectivity_text = if score.subjectivity <= 0.3 {
        "The brief is very objective, focusing on facts. While factual information is crucial, consider incorporating some subjective elements like testimonials or personal stories to connect emotionally with your audience."
    } else if score.subjectivity <= 0.5 {
        "The brief is fairly objective. This balance is good, but adding a bit more personal touch or opinion can make the content more relatable and persuasive."
    } else if score.subjectivity <= 0.7 {
        "The brief is somewhat subjective, focusing on opinions. While opinions can be powerful, ensure they are backed by facts to maintain credibility and trust."
    } else {
        "The brief is very subjective, focusing heavily on opinions. High subjectivity can make the content feel biased. Balance it with factual information to strengthen your argument and credibility."
    };

    SentimentInterpretation {
        polarity_text,
        subjectivity_text,
    }
}
