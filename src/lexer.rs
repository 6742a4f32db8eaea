use crate::token::Token;

/// Splits a filter expression into tokens.
///
/// Scanning is a single left-to-right pass. A `'` toggles quoted mode and
/// stays part of the token; inside quotes whitespace and punctuation are
/// ordinary characters. There are no escape sequences, and an unbalanced quote
/// keeps quoted mode on until the end of the input.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    in_quotes: bool,
    buffer: String,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            in_quotes: false,
            buffer: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Convenience wrapper for `Lexer::new(input).tokenize()`.
    pub fn tokenize_str(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize()
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            self.tokens.push(Token::new(text));
        }
    }

    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(ch) = self.current_char() {
            if ch == '\'' {
                self.in_quotes = !self.in_quotes;
            }

            match ch {
                c if c.is_whitespace() && !self.in_quotes => self.flush(),
                '(' | ')' | ',' if !self.in_quotes => {
                    self.flush();
                    self.tokens.push(Token::new(ch.to_string()));
                }
                c => self.buffer.push(c),
            }

            self.advance();
        }

        self.flush();
        self.tokens
    }
}

#[cfg(test)]
fn texts(input: &str) -> Vec<String> {
    Lexer::tokenize_str(input)
        .into_iter()
        .map(Token::into_string)
        .collect()
}

#[test]
fn test_simple_comparison() {
    assert_eq!(texts("name eq 'John'"), vec!["name", "eq", "'John'"]);
}

#[test]
fn test_punctuation_splits() {
    assert_eq!(
        texts("(a eq 1,b)"),
        vec!["(", "a", "eq", "1", ",", "b", ")"]
    );
}

#[test]
fn test_quoted_whitespace_and_parens() {
    assert_eq!(
        texts("city eq 'New York (NY)'"),
        vec!["city", "eq", "'New York (NY)'"]
    );
}

#[test]
fn test_unbalanced_quote_runs_to_end() {
    assert_eq!(texts("a eq 'x y) or"), vec!["a", "eq", "'x y) or"]);
}
