#[cfg(test)]
mod tests {
    use crate::error::{AnalysisError, ViolationKind};
    use crate::normalizer::{
        HeuristicRepair, JsonRepair, NoRepair, Normalizer, normalize, parse, strip_wrapper,
        validate,
    };
    use crate::types::{Category, ExtractedField};
    use serde_json::{Value, json};

    const WELL_FORMED: &str = include_str!("../../tests/fixtures/analysis_response.json");

    fn fixture_value() -> Value {
        serde_json::from_str(WELL_FORMED).unwrap()
    }

    fn with_category_field(category: Category, field: &str, value: Value) -> String {
        let mut tree = fixture_value();
        tree["breakdown"][category.key()][field] = value;
        tree.to_string()
    }

    #[test]
    fn test_strip_wrapper_is_idempotent() {
        let inputs = [
            "",
            "   ",
            "\u{feff}{\"a\": 1}",
            "```json\n{\"a\": 1}\n```",
            "```\n{}\n```\n\n",
            "``````json``",
            "`````tag`",
            "prefix ```JSON {} ``` suffix",
            "\u{feff}\u{feff}```json\u{feff}\n[1, 2]\n```  ",
            "no fences at all",
        ];
        for input in inputs {
            let once = strip_wrapper(input);
            assert_eq!(strip_wrapper(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_strip_wrapper_removes_fences_and_bom() {
        assert_eq!(strip_wrapper("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_wrapper("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_wrapper("\u{feff}  {\"a\": 1}  "), "{\"a\": 1}");
        assert_eq!(strip_wrapper(""), "");
    }

    #[test]
    fn test_well_formed_round_trip() {
        let text = WELL_FORMED;
        let result = validate(&parse(&strip_wrapper(text)).unwrap()).unwrap();
        let tree = fixture_value();

        assert_eq!(result.overall_score(), 82);
        assert_eq!(result.categories().len(), 6);
        for category in result.categories() {
            let raw = &tree["breakdown"][category.key().key()];
            assert_eq!(category.score() as u64, raw["score"].as_u64().unwrap());
            assert_eq!(category.feedback(), raw["feedback"].as_str().unwrap());
        }
        assert_eq!(
            result.gaps(),
            ["No budget is specified", "No timeline for creative approvals"]
        );
    }

    #[test]
    fn test_fenced_input_matches_unwrapped() {
        let fenced = format!("```json\n{}\n```", WELL_FORMED);
        assert_eq!(normalize(&fenced).unwrap(), normalize(WELL_FORMED).unwrap());
    }

    #[test]
    fn test_prose_around_json_is_tolerated() {
        let wrapped = format!(
            "Sure! Here is the analysis you asked for:\n{}\nLet me know if you need anything else.",
            WELL_FORMED
        );
        assert_eq!(normalize(&wrapped).unwrap(), normalize(WELL_FORMED).unwrap());
    }

    #[test]
    fn test_truncated_unquoted_input_is_malformed() {
        let err = normalize("{ overall_score: 82, ").unwrap_err();
        assert!(
            matches!(err, AnalysisError::MalformedResponse { .. }),
            "unexpected error: {:?}",
            err
        );
    }

    #[test]
    fn test_empty_and_prose_only_input_is_malformed() {
        for input in ["", "   ", "I'm sorry, I cannot analyze this brief."] {
            assert!(matches!(
                normalize(input),
                Err(AnalysisError::MalformedResponse { .. })
            ));
        }
    }

    #[test]
    fn test_malformed_response_carries_text_and_position() {
        match Normalizer::with_repair(NoRepair).normalize("{\"overall_score\": 82,\n  oops}") {
            Err(AnalysisError::MalformedResponse { text, line, .. }) => {
                assert!(text.contains("oops"));
                assert_eq!(line, 2);
            }
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_score_names_category() {
        let text = with_category_field(Category::ChannelStrategy, "score", json!(150));
        match normalize(&text) {
            Err(AnalysisError::SchemaViolation {
                category,
                field,
                kind,
            }) => {
                assert_eq!(category, Some(Category::ChannelStrategy));
                assert_eq!(field, "score");
                assert_eq!(kind, ViolationKind::OutOfRange { value: 150 });
            }
            other => panic!("expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_score_reports_exact_value() {
        let text = with_category_field(
            Category::ClarityOfObjectives,
            "score",
            json!(18_446_744_073_709_551_615u64),
        );
        match normalize(&text) {
            Err(AnalysisError::SchemaViolation { kind, .. }) => {
                assert_eq!(
                    kind,
                    ViolationKind::OutOfRange {
                        value: 18_446_744_073_709_551_615
                    }
                );
                assert_eq!(
                    kind.to_string(),
                    "value 18446744073709551615 is outside 0..=100"
                );
            }
            other => panic!("expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_overall_score_is_rejected() {
        let mut tree = fixture_value();
        tree["overall_score"] = json!(-1);
        let err = normalize(&tree.to_string()).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::SchemaViolation {
                category: None,
                kind: ViolationKind::OutOfRange { value: -1 },
                ..
            }
        ));
    }

    #[test]
    fn test_score_coercion() {
        let text = with_category_field(Category::StrategicAlignment, "score", json!("64"));
        let result = normalize(&text).unwrap();
        assert_eq!(result.category(Category::StrategicAlignment).unwrap().score(), 64);

        let text = with_category_field(Category::StrategicAlignment, "score", json!(64.0));
        let result = normalize(&text).unwrap();
        assert_eq!(result.category(Category::StrategicAlignment).unwrap().score(), 64);

        for bad in [json!(64.5), json!("high"), json!([64]), json!(true)] {
            let text = with_category_field(Category::StrategicAlignment, "score", bad);
            assert!(matches!(
                normalize(&text),
                Err(AnalysisError::SchemaViolation {
                    kind: ViolationKind::WrongType { .. },
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_missing_required_fields() {
        let mut tree = fixture_value();
        tree.as_object_mut().unwrap().remove("overall_score");
        let err = normalize(&tree.to_string()).unwrap_err();
        assert!(err.to_string().contains("overall_score"));

        let mut tree = fixture_value();
        tree.as_object_mut().unwrap().remove("breakdown");
        assert!(matches!(
            normalize(&tree.to_string()),
            Err(AnalysisError::SchemaViolation {
                kind: ViolationKind::Missing,
                ..
            })
        ));

        let mut tree = fixture_value();
        tree["breakdown"]["key_performance_indicators"]
            .as_object_mut()
            .unwrap()
            .remove("feedback");
        match normalize(&tree.to_string()) {
            Err(AnalysisError::SchemaViolation {
                category, field, ..
            }) => {
                assert_eq!(category, Some(Category::KeyPerformanceIndicators));
                assert_eq!(field, "feedback");
            }
            other => panic!("expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_feedback_is_rejected() {
        let text = with_category_field(Category::ClarityOfObjectives, "feedback", json!("   "));
        assert!(matches!(
            normalize(&text),
            Err(AnalysisError::SchemaViolation {
                kind: ViolationKind::Empty,
                ..
            })
        ));
    }

    #[test]
    fn test_legacy_taxonomy_is_rejected() {
        let mut tree = fixture_value();
        let breakdown = tree["breakdown"].as_object_mut().unwrap();
        let moved = breakdown.remove("competitive_analysis").unwrap();
        breakdown.insert("competitive_landscape".to_string(), moved);

        match normalize(&tree.to_string()) {
            Err(AnalysisError::SchemaViolation { category, kind, .. }) => {
                assert_eq!(category, Some(Category::CompetitiveAnalysis));
                assert_eq!(kind, ViolationKind::Missing);
            }
            other => panic!("expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut tree = fixture_value();
        tree["model_version"] = json!("v2");
        tree["breakdown"]["brand_voice"] = json!({"score": 10, "feedback": "n/a"});
        tree["breakdown"]["channel_strategy"]["confidence"] = json!(0.8);

        let result = normalize(&tree.to_string()).unwrap();
        let keys: Vec<Category> = result.categories().iter().map(|c| c.key()).collect();
        assert_eq!(keys, Category::ALL.to_vec());
    }

    #[test]
    fn test_categories_follow_canonical_order() {
        let tree = fixture_value();
        let breakdown = tree["breakdown"].as_object().unwrap();
        let mut reversed = String::from("{\"overall_score\": 82, \"breakdown\": {");
        let entries: Vec<String> = breakdown
            .iter()
            .rev()
            .map(|(k, v)| format!("{}: {}", json!(k), v))
            .collect();
        reversed.push_str(&entries.join(", "));
        reversed.push_str("}}");

        let result = normalize(&reversed).unwrap();
        let keys: Vec<Category> = result.categories().iter().map(|c| c.key()).collect();
        assert_eq!(keys, Category::ALL.to_vec());
    }

    #[test]
    fn test_optional_fields_default_to_empty() {
        let minimal = json!({
            "overall_score": 40,
            "breakdown": {
                "clarity_of_objectives": {"score": 40, "feedback": "Vague."},
                "strategic_alignment": {"score": 40, "feedback": "Unclear."},
                "target_audience_definition": {"score": 40, "feedback": "Broad.", "target_locations": null},
                "competitive_analysis": {"score": 40, "feedback": "Absent."},
                "channel_strategy": {"score": 40, "feedback": "Generic.", "recommended_channels": "Radio"},
                "key_performance_indicators": {"score": 40, "feedback": "None."}
            }
        });
        let result = normalize(&minimal.to_string()).unwrap();

        assert!(result.gaps().is_empty());
        for category in result.categories() {
            for field in ExtractedField::ALL {
                let values = category.extracted().get(field);
                if category.key() == Category::ChannelStrategy
                    && field == ExtractedField::RecommendedChannels
                {
                    assert_eq!(values, ["Radio"]);
                } else {
                    assert!(values.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_nested_list_items_are_rejected() {
        let text = with_category_field(
            Category::CompetitiveAnalysis,
            "competitors_mentioned",
            json!([["Oatly"]]),
        );
        match normalize(&text) {
            Err(AnalysisError::SchemaViolation { field, .. }) => {
                assert_eq!(field, "competitors_mentioned")
            }
            other => panic!("expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_root_must_be_object() {
        assert!(matches!(
            normalize("[1, 2, 3]"),
            Err(AnalysisError::SchemaViolation { .. })
        ));
    }

    #[test]
    fn test_bracketed_prose_before_object_is_skipped() {
        let text = format!("Scores follow the rubric [v2]:\n{}", WELL_FORMED);
        let result = normalize(&text).unwrap();
        assert_eq!(result.overall_score(), 82);
    }

    #[test]
    fn test_repair_roots_at_object_after_bracketed_prose() {
        let repaired = HeuristicRepair.repair("See [notes] below: {overall_score: 82,}");
        let value: Value = serde_json::from_str(&repaired).unwrap();
        assert_eq!(value, json!({"overall_score": 82}));
    }

    #[test]
    fn test_repair_trailing_commas_and_bare_keys() {
        let repaired = HeuristicRepair.repair("{overall_score: 82, tags: ['a', 'b',],}");
        let value: Value = serde_json::from_str(&repaired).unwrap();
        assert_eq!(value, json!({"overall_score": 82, "tags": ["a", "b"]}));
    }

    #[test]
    fn test_repair_python_literals_and_raw_newlines() {
        let repaired = HeuristicRepair.repair("{\"ok\": True, \"gap\": None, \"note\": \"line one\nline two\"}");
        let value: Value = serde_json::from_str(&repaired).unwrap();
        assert_eq!(
            value,
            json!({"ok": true, "gap": null, "note": "line one\nline two"})
        );
    }

    #[test]
    fn test_repair_closes_truncated_value() {
        let repaired = HeuristicRepair.repair("{\"a\": [1, 2], \"b\": {\"c\": \"unfinished");
        let value: Value = serde_json::from_str(&repaired).unwrap();
        assert_eq!(value, json!({"a": [1, 2], "b": {"c": "unfinished"}}));
    }

    #[test]
    fn test_repair_leaves_irreparable_text_unchanged() {
        for input in ["{ overall_score: 82, ", "{\"a\":", "no json here", ""] {
            assert_eq!(HeuristicRepair.repair(input), input);
        }
    }

    #[test]
    fn test_repair_keeps_valid_json_intact() {
        let repaired = HeuristicRepair.repair(WELL_FORMED.trim());
        assert_eq!(repaired, WELL_FORMED.trim());
    }

    #[test]
    fn test_custom_repair_is_pluggable() {
        struct Replace;
        impl JsonRepair for Replace {
            fn repair(&self, _text: &str) -> String {
                WELL_FORMED.to_string()
            }
        }

        let result = Normalizer::with_repair(Replace).normalize("garbage").unwrap();
        assert_eq!(result.overall_score(), 82);
    }

    #[test]
    fn test_range_and_completeness_invariants() {
        let result = normalize(WELL_FORMED).unwrap();
        assert!(result.overall_score() <= 100);
        for (category, expected) in result.categories().iter().zip(Category::ALL) {
            assert_eq!(category.key(), expected);
            assert!(category.score() <= 100);
        }
    }
}
