use std::collections::HashMap;

use crate::data_models::{KeywordFrequency, ResultRow};
use crate::error::AnalyzeError;

/// A character filter receives the original text as a stream of characters and can transform the stream by adding,
/// removing, or changing characters before it reaches the tokenizer.
pub trait CharacterFilter: Send + Sync {
    fn filter(&self, text: String) -> String;
}

/// Lower-cases the whole text. Runs before tokenizing because lower-casing can
/// change where word boundaries fall: `İ` becomes `i` plus a combining dot,
/// and the dot is not a word character.
pub struct LowerCaseCharFilter;

impl CharacterFilter for LowerCaseCharFilter {
    fn filter(&self, text: String) -> String {
        text.to_lowercase()
    }
}

/// A tokenizer receives a stream of characters, breaks it up into individual tokens (usually individual words),
/// and outputs a stream of tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits on anything that is not a word character. Word characters are
/// Unicode letters, digits and `_`, so "Hello, World!" becomes [Hello, World].
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !is_word_char(c))
            .filter(|s| !s.is_empty())
            .map(|w| w.to_string())
            .collect()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextToken {
    pub term: String,
    pub pos: usize,
}

/// Character filters followed by a tokenizer.
pub struct TextAnalyzer {
    char_filters: Vec<Box<dyn CharacterFilter>>,
    tokenizer: Box<dyn Tokenizer>,
}

impl TextAnalyzer {
    pub fn new(char_filters: Vec<Box<dyn CharacterFilter>>, tokenizer: Box<dyn Tokenizer>) -> Self {
        Self {
            char_filters,
            tokenizer,
        }
    }

    pub fn char_filter(&self, mut content: String) -> String {
        for filter in self.char_filters.iter() {
            content = filter.filter(content);
        }
        content
    }

    pub fn tokenize(&self, content: &str) -> Vec<TextToken> {
        self.tokenizer
            .tokenize(content)
            .into_iter()
            .enumerate()
            .map(|(idx, term)| TextToken { term, pos: idx })
            .collect()
    }

    pub fn analyze(&self, content: &str) -> Vec<TextToken> {
        let content = self.char_filter(content.to_string());
        self.tokenize(&content)
    }
}

/// Counts words across result titles.
pub struct KeywordAnalyzer {
    text_analyzer: TextAnalyzer,
}

impl KeywordAnalyzer {
    pub fn new(text_analyzer: TextAnalyzer) -> Self {
        Self { text_analyzer }
    }

    /// Frequencies of every token across `titles`, highest count first.
    /// Equal counts keep the order in which the tokens first appeared.
    pub fn frequencies<S: AsRef<str>>(&self, titles: &[S]) -> Vec<KeywordFrequency> {
        let joined = titles
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        let tokens = self.text_analyzer.analyze(&joined);

        // term -> (count, first position)
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
        for token in tokens {
            counts
                .entry(token.term)
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, token.pos));
        }

        let mut freqs: Vec<(String, usize, usize)> = counts
            .into_iter()
            .map(|(term, (count, first))| (term, count, first))
            .collect();
        freqs.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        freqs
            .into_iter()
            .map(|(token, count, _)| KeywordFrequency { token, count })
            .collect()
    }

    pub fn most_common<S: AsRef<str>>(&self, titles: &[S], n: usize) -> Vec<KeywordFrequency> {
        let mut freqs = self.frequencies(titles);
        freqs.truncate(n);
        freqs
    }

    /// The single most frequent token. Fails when the titles hold no words at all.
    pub fn top<S: AsRef<str>>(&self, titles: &[S]) -> Result<KeywordFrequency, AnalyzeError> {
        self.most_common(titles, 1)
            .into_iter()
            .next()
            .ok_or(AnalyzeError::NoTokens)
    }

    pub fn top_for_rows(&self, rows: &[ResultRow]) -> Result<KeywordFrequency, AnalyzeError> {
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        self.top(&titles)
    }
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new(TextAnalyzer::new(
            vec![Box::new(LowerCaseCharFilter)],
            Box::new(WordTokenizer),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(tokens: Vec<TextToken>) -> Vec<String> {
        tokens.into_iter().map(|t| t.term).collect()
    }

    #[test]
    fn test_word_tokenizer_keeps_underscore_and_digits() {
        let tokens = WordTokenizer.tokenize("snake_case v2-release 2024!");
        assert_eq!(tokens, vec!["snake_case", "v2", "release", "2024"]);
    }

    #[test]
    fn test_word_tokenizer_hangul() {
        let tokens = WordTokenizer.tokenize("맛집 추천, 서울 맛집");
        assert_eq!(tokens, vec!["맛집", "추천", "서울", "맛집"]);
    }

    #[test]
    fn test_positions_are_sequential() {
        let analyzer = KeywordAnalyzer::default();
        let tokens = analyzer.text_analyzer.analyze("A b, C");
        assert_eq!(tokens.iter().map(|t| t.pos).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(terms(tokens), vec!["a", "b", "c"]);
    }
}
