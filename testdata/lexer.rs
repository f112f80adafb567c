use std::collections::HashMap;
use std::fmt;

#[derive(Debug)]
pub enum Token {
    Number(f64),
    Op(char),
}

pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, pos: 0 }
    }

    pub fn next_token(&mut self) -> Option<Token> {
        let c = self.input[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        match c {
            '0'..='9' => Some(Token::Number(c.to_digit(10)? as f64)),
            '+' | '-' | '*' | '/' => Some(Token::Op(c)),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Op(c) => write!(f, "{}", c),
        }
    }
}

pub fn count(tokens: &[Token]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for t in tokens {
        *counts.entry(t.to_string()).or_insert(0) += 1;
    }
    counts
}
