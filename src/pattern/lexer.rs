//! Lexer for date pattern strings.
//!
//! Handles the subset of format code syntax that shows up in date patterns:
//! - `y`, `m`, `d`, `h`, `s` runs (case-insensitive) become counted tokens
//! - Quoted strings ("text") and escaped characters (\-) become literals
//! - `_x` reserves the width of `x` and renders as a space; `*x` fill is dropped
//! - Bracketed sections (`[$-409]`, `[Red]`) are skipped, except `[h]`, `[m]`, `[s]`
//! - Lexing stops at the first `;`, so only the first section is used
//!
//! Lexing never fails: anything unrecognised is passed through as literal text.

use crate::pattern::tokens::{AmPmStyle, ElapsedUnit, Token};

/// A lexer for date pattern strings.
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole input, resolving `m` runs into months or minutes.
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(ch) = self.current() {
            match ch {
                ';' => break,
                '"' => self.lex_quoted(),
                '\\' => {
                    self.advance();
                    if let Some(escaped) = self.current() {
                        self.advance();
                        self.push_literal(escaped);
                    }
                }
                '_' => {
                    self.position += 2;
                    self.push_literal(' ');
                }
                '*' => self.position += 2,
                '[' => self.lex_bracket(),
                '.' if self.follows_seconds() && self.peek(1) == Some('0') => {
                    self.advance();
                    let count = self.count_run('0');
                    self.tokens.push(Token::SubSecond(count));
                }
                'A' | 'a' => {
                    if !self.lex_am_pm() {
                        self.advance();
                        self.push_literal(ch);
                    }
                }
                _ => match ch.to_ascii_lowercase() {
                    'y' => self.lex_run(Token::Year),
                    'm' => self.lex_run(Token::Month),
                    'd' => self.lex_run(Token::Day),
                    'h' => self.lex_run(Token::Hour),
                    's' => self.lex_run(Token::Second),
                    _ => {
                        self.advance();
                        self.push_literal(ch);
                    }
                },
            }
        }

        resolve_minutes(&mut self.tokens);
        self.tokens
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Count and consume a run of `target`, case-insensitively.
    fn count_run(&mut self, target: char) -> usize {
        let mut count = 0;
        while self
            .current()
            .is_some_and(|c| c.eq_ignore_ascii_case(&target))
        {
            count += 1;
            self.advance();
        }
        count
    }

    fn lex_run(&mut self, make: fn(usize) -> Token) {
        let letter = self.chars[self.position];
        let count = self.count_run(letter);
        self.tokens.push(make(count));
    }

    fn push_literal(&mut self, ch: char) {
        if let Some(Token::Literal(s)) = self.tokens.last_mut() {
            s.push(ch);
        } else {
            self.tokens.push(Token::Literal(ch.to_string()));
        }
    }

    fn lex_quoted(&mut self) {
        self.advance();
        let mut text = String::new();
        while let Some(c) = self.current() {
            self.advance();
            if c == '"' {
                break;
            }
            text.push(c);
        }
        for c in text.chars() {
            self.push_literal(c);
        }
    }

    fn lex_bracket(&mut self) {
        self.advance();
        let mut content = String::new();
        while let Some(c) = self.current() {
            self.advance();
            if c == ']' {
                break;
            }
            content.push(c);
        }

        let lower = content.to_ascii_lowercase();
        let Some(first) = lower.chars().next() else {
            return;
        };
        if !lower.chars().all(|c| c == first) {
            return;
        }
        let unit = match first {
            'h' => ElapsedUnit::Hours,
            'm' => ElapsedUnit::Minutes,
            's' => ElapsedUnit::Seconds,
            _ => return,
        };
        self.tokens.push(Token::Elapsed(unit, lower.len()));
    }

    /// Match `AM/PM` or `A/P` at the current position.
    fn lex_am_pm(&mut self) -> bool {
        let rest: String = self.chars[self.position..].iter().take(5).collect();
        if rest.eq_ignore_ascii_case("am/pm") {
            let style = if rest.starts_with('a') {
                AmPmStyle::Lower
            } else {
                AmPmStyle::Upper
            };
            self.position += 5;
            self.tokens.push(Token::AmPm(style));
            return true;
        }

        let short: String = rest.chars().take(3).collect();
        if short.eq_ignore_ascii_case("a/p") {
            let style = if short.starts_with('a') {
                AmPmStyle::ShortLower
            } else {
                AmPmStyle::ShortUpper
            };
            self.position += 3;
            self.tokens.push(Token::AmPm(style));
            return true;
        }

        false
    }

    fn follows_seconds(&self) -> bool {
        matches!(
            self.tokens.last(),
            Some(Token::Second(_) | Token::Elapsed(ElapsedUnit::Seconds, _))
        )
    }
}

/// `m`/`mm` directly after an hour or directly before a second means minutes.
fn resolve_minutes(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        let Token::Month(count) = tokens[i] else {
            continue;
        };
        if count > 2 {
            continue;
        }

        let prev = tokens[..i].iter().rev().find(|t| t.is_date_part());
        let next = tokens[i + 1..].iter().find(|t| t.is_date_part());
        let after_hour = matches!(
            prev,
            Some(Token::Hour(_) | Token::Elapsed(ElapsedUnit::Hours, _))
        );
        let before_second = matches!(
            next,
            Some(Token::Second(_) | Token::Elapsed(ElapsedUnit::Seconds, _))
        );

        if after_hour || before_second {
            tokens[i] = Token::Minute(count);
        }
    }
}
