use viewharvest::analyzer::*;
use viewharvest::data_models::{KeywordFrequency, ResultRow};
use viewharvest::error::AnalyzeError;

fn freq(token: &str, count: usize) -> KeywordFrequency {
    KeywordFrequency {
        token: token.to_string(),
        count,
    }
}

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    #[test]
    fn test_punctuation_and_whitespace_separate() {
        let tokens = WordTokenizer.tokenize("Hello hello, World!");
        assert_eq!(tokens, vec!["Hello", "hello", "World"]);
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        assert!(WordTokenizer.tokenize("").is_empty());
        assert!(WordTokenizer.tokenize("!!! ... ---").is_empty());
    }

    #[test]
    fn test_lower_case_filter() {
        let analyzer = TextAnalyzer::new(vec![Box::new(LowerCaseCharFilter)], Box::new(WordTokenizer));
        let terms: Vec<String> = analyzer
            .analyze("RUST Rust rust")
            .into_iter()
            .map(|t| t.term)
            .collect();
        assert_eq!(terms, vec!["rust", "rust", "rust"]);
    }

    #[test]
    fn test_lower_case_runs_before_splitting() {
        // 'İ' lower-cases to 'i' + U+0307, and the combining dot separates words
        let analyzer = TextAnalyzer::new(vec![Box::new(LowerCaseCharFilter)], Box::new(WordTokenizer));
        let terms: Vec<String> = analyzer
            .analyze("İstanbul ŞEHİR")
            .into_iter()
            .map(|t| t.term)
            .collect();
        assert_eq!(terms, vec!["i", "stanbul", "şehi", "r"]);
    }
}

#[cfg(test)]
mod keyword_analyzer_tests {
    use super::*;

    #[test]
    fn test_hello_world_frequencies() {
        let analyzer = KeywordAnalyzer::default();
        let freqs = analyzer.frequencies(&["Hello hello, World!"]);
        assert_eq!(freqs, vec![freq("hello", 2), freq("world", 1)]);
        assert_eq!(analyzer.top(&["Hello hello, World!"]).unwrap(), freq("hello", 2));
    }

    #[test]
    fn test_counts_across_titles() {
        let analyzer = KeywordAnalyzer::default();
        let titles = ["Seoul food guide", "Best food in Busan", "FOOD trucks"];
        assert_eq!(analyzer.top(&titles).unwrap(), freq("food", 3));
    }

    #[test]
    fn test_titles_do_not_merge_words() {
        let analyzer = KeywordAnalyzer::default();
        let freqs = analyzer.frequencies(&["ab", "cd"]);
        assert_eq!(freqs, vec![freq("ab", 1), freq("cd", 1)]);
    }

    #[test]
    fn test_tie_returns_a_maximal_token() {
        let analyzer = KeywordAnalyzer::default();
        let top = analyzer.top(&["beta alpha", "alpha beta"]).unwrap();
        assert_eq!(top.count, 2);
        assert!(top.token == "alpha" || top.token == "beta");
    }

    #[test]
    fn test_dotted_capital_i_counts_as_separate_words() {
        let freqs = KeywordAnalyzer::default().frequencies(&["İstanbul ŞEHİR"]);
        assert_eq!(
            freqs,
            vec![freq("i", 1), freq("stanbul", 1), freq("şehi", 1), freq("r", 1)]
        );
    }

    #[test]
    fn test_most_common_n() {
        let analyzer = KeywordAnalyzer::default();
        let titles = ["a b c", "a b", "a"];
        assert_eq!(analyzer.most_common(&titles, 2), vec![freq("a", 3), freq("b", 2)]);
        assert_eq!(analyzer.most_common(&titles, 10).len(), 3);
    }

    #[test]
    fn test_no_tokens_is_an_error() {
        let analyzer = KeywordAnalyzer::default();
        assert_eq!(analyzer.top(&["", "?!"]), Err(AnalyzeError::NoTokens));
        let empty: [&str; 0] = [];
        assert_eq!(analyzer.top(&empty), Err(AnalyzeError::NoTokens));
    }

    #[test]
    fn test_top_for_rows() {
        let rows = vec![
            ResultRow::new(1, "서울 맛집 추천".into(), None),
            ResultRow::new(2, "부산 맛집".into(), None),
        ];
        let top = KeywordAnalyzer::default().top_for_rows(&rows).unwrap();
        assert_eq!(top, freq("맛집", 2));
    }
}
