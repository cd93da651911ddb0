//! Integration tests for the sentiment engine

use chrono::{TimeZone, Utc};
use finsent::{
    analyze_batch, analyze_text, Article, CompanyMatcher, ConsensusResult, Method, MethodDetails,
    MethodResult, SentimentAnalyzer, SentimentError, SentimentLabel, SentimentRow,
    SentimentScorer, TrackedCompany,
};

/// Texts exercising punctuation, case, negation, unicode and length extremes
fn corpus() -> Vec<String> {
    vec![
        "Record profits and strong growth, investors optimistic".to_string(),
        "Missed earnings, weak outlook, significant risk".to_string(),
        "AMAZING quarter!!!!!! Not bad at all".to_string(),
        "Is this a crash??? Or a rally????".to_string(),
        "The company will hold its annual meeting on Thursday.".to_string(),
        "gain gain gain gain gain gain gain gain gain gain gain gain".to_string(),
        "Revenue was excellent but guidance was extremely disappointing".to_string(),
        "Société Générale annonce des résultats; 株価が上昇".to_string(),
        "!!! ??? ... ,,, ---".to_string(),
        "Visit https://investor.example.com or email ir@example.com".to_string(),
        "not not not good good good never bad".to_string(),
        "crisis fraud bankruptcy collapse losses layoffs debt recession".repeat(20),
        "x".repeat(5000),
    ]
}

fn assert_bounds(result: &ConsensusResult) {
    assert!((-1.0..=1.0).contains(&result.score), "score {}", result.score);
    assert!((0.0..=1.0).contains(&result.confidence), "confidence {}", result.confidence);
    for method in result.methods.values() {
        if let Some(score) = method.score {
            assert!((-1.0..=1.0).contains(&score), "{} score {}", method.method, score);
        }
        assert!(
            (0.0..=1.0).contains(&method.confidence),
            "{} confidence {}",
            method.method,
            method.confidence
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_and_confidences_bounded() {
        for text in corpus() {
            let result = analyze_text(&text);
            assert_bounds(&result);
        }
    }

    #[test]
    fn test_empty_input_is_neutral() {
        for text in ["", " ", "\n\n\t  "] {
            let result = analyze_text(text);
            assert_eq!(result.score, 0.0);
            assert_eq!(result.confidence, 0.0);
            assert_eq!(result.label, SentimentLabel::Neutral);
            assert!(result.methods.is_empty());
        }
    }

    #[test]
    fn test_positive_scenario() {
        let result = analyze_text("record profits and strong growth, investors optimistic");

        let polarity = result.method_result(Method::Polarity).unwrap();
        let valence = result.method_result(Method::Valence).unwrap();
        let keyword = result.method_result(Method::Keyword).unwrap();

        assert!(polarity.score.unwrap() > 0.0);
        assert!(valence.score.unwrap() > 0.0);
        assert_eq!(keyword.score, Some(1.0));
        assert!((keyword.confidence - 0.3).abs() < 1e-12);
        assert_eq!(
            keyword.details,
            MethodDetails::Keyword {
                positive_hits: 3,
                negative_hits: 0,
                total_hits: 3
            }
        );
        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.method, Method::Combined);
    }

    #[test]
    fn test_negative_scenario() {
        let result = analyze_text("missed earnings, weak outlook, significant risk");

        let keyword = result.method_result(Method::Keyword).unwrap();
        assert_eq!(keyword.score, Some(-1.0));
        assert_eq!(keyword.label, SentimentLabel::Negative);
        assert_eq!(
            result.method_result(Method::Valence).unwrap().label,
            SentimentLabel::Negative
        );
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_zero_keyword_hits_is_sentinel() {
        let result = analyze_text("The board will meet on Thursday to discuss the agenda.");
        assert_eq!(
            result.method_result(Method::Keyword),
            Some(&MethodResult::neutral(Method::Keyword))
        );
    }

    #[test]
    fn test_weight_invariant() {
        for text in corpus() {
            let result = analyze_text(&text);
            if result.is_sentinel() {
                continue;
            }
            let s = |m: Method| result.method_result(m).unwrap().score.unwrap();
            let expected = (0.4 * s(Method::Polarity) + 0.4 * s(Method::Valence)
                + 0.2 * s(Method::Keyword))
                / (0.4 + 0.4 + 0.2);
            assert!(
                (result.score - expected).abs() < 1e-9,
                "{}: {} != {}",
                text,
                result.score,
                expected
            );
        }
    }

    #[test]
    fn test_label_follows_votes_not_score() {
        for text in corpus() {
            let result = analyze_text(&text);
            if result.is_sentinel() {
                continue;
            }
            let best = result.votes.get(result.label);
            for label in SentimentLabel::VOTE_ORDER {
                assert!(result.votes.get(label) <= best);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let analyzer = SentimentAnalyzer::default();
        for text in corpus() {
            let first = analyzer.analyze(&text);
            let second = analyzer.analyze(&text);
            assert_eq!(first, second);
            assert_eq!(first.score.to_bits(), second.score.to_bits());
            assert_eq!(first.confidence.to_bits(), second.confidence.to_bits());
        }
    }

    #[test]
    fn test_batch_matches_individual() {
        let texts = corpus();
        let batch = analyze_batch(&texts);

        assert_eq!(batch.len(), texts.len());
        for (i, entry) in batch.iter().enumerate() {
            assert_eq!(entry.index, i);
            assert!(entry.error.is_none());
            assert_eq!(entry.result, analyze_text(&texts[i]));
        }
    }

    #[test]
    fn test_batch_isolates_failures() {
        struct ExplodingScorer;

        impl SentimentScorer for ExplodingScorer {
            fn method(&self) -> Method {
                Method::Keyword
            }

            fn score(&self, text: &str) -> Result<MethodResult, SentimentError> {
                if text.contains("detonate") {
                    panic!("keyword model crashed");
                }
                finsent::features::keyword::KeywordScorer::default().score(text)
            }
        }

        let analyzer = SentimentAnalyzer::default().with_scorer(ExplodingScorer);
        let reference = SentimentAnalyzer::default();
        let texts = vec![
            "strong growth ahead",
            "detonate the forecast",
            "weak demand and losses",
        ];

        let batch = analyzer.analyze_batch(&texts);
        assert_eq!(batch.len(), 3);

        assert_eq!(batch[1].index, 1);
        assert_eq!(batch[1].result, ConsensusResult::neutral(Method::Error));
        assert_eq!(batch[1].error.as_deref(), Some("keyword model crashed"));

        for i in [0, 2] {
            assert!(batch[i].error.is_none());
            assert_eq!(batch[i].result, reference.analyze(texts[i]));
        }
    }

    #[test]
    fn test_article_pipeline() {
        let matcher = CompanyMatcher::new(vec![
            TrackedCompany::new("Apple Inc.", "Technology", Some("AAPL")),
            TrackedCompany::new("Tesla", "Automotive", Some("TSLA")),
        ]);
        let article = Article {
            title: "Tesla deliveries miss as demand looks weak".to_string(),
            description: Some("Analysts flag risk to margins".to_string()),
            content: Some("Shares fell after the report. ".repeat(100)),
            url: "https://news.example.com/tesla-deliveries".to_string(),
            source: "Reuters".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 4, 2, 13, 0, 0).unwrap(),
            company_search_term: "sector:automotive".to_string(),
            author: Some("Staff".to_string()),
        };

        let company = matcher.attribute(&article).unwrap();
        assert_eq!(company.name, "Tesla");

        let analyzer = SentimentAnalyzer::default();
        let result = analyzer.analyze_article(&article);
        assert_bounds(&result);
        assert_eq!(result.label, SentimentLabel::Negative);

        let row = SentimentRow::from_result(42, &result);
        assert_eq!(row.processing_method, Method::Combined);
        assert_eq!(row.sentiment_label, SentimentLabel::Negative);
        assert_eq!(row.sentiment_score, result.score);
    }
}
