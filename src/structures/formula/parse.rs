//! A recursive-descent parser for the formula surface syntax.
//!
//! Precedence, loosest first: `|`, `&`, `~`. Whitespace is insignificant.
//! An atom is any maximal run of characters other than whitespace, connectives, and parentheses,
//! which admits the dot-separated identifiers preprocessing writes without any escaping.

use crate::{structures::formula::Formula, types::err::FormulaError};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Token {
    And,
    Or,
    Not,
    Open,
    Close,
    Atom(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::And => write!(f, "&"),
            Token::Or => write!(f, "|"),
            Token::Not => write!(f, "~"),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
            Token::Atom(a) => write!(f, "{a}"),
        }
    }
}

fn lex(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut atom = String::new();
    for c in input.chars() {
        let token = match c {
            '&' => Some(Token::And),
            '|' => Some(Token::Or),
            '~' => Some(Token::Not),
            '(' => Some(Token::Open),
            ')' => Some(Token::Close),
            c if c.is_whitespace() => None,
            c => {
                atom.push(c);
                continue;
            }
        };
        if !atom.is_empty() {
            tokens.push(Token::Atom(std::mem::take(&mut atom)));
        }
        if let Some(token) = token {
            tokens.push(token);
        }
    }
    if !atom.is_empty() {
        tokens.push(Token::Atom(atom));
    }
    tokens
}

/// Parses a formula, or details why the text is not a formula.
pub fn parse(input: &str) -> Result<Formula, FormulaError> {
    let tokens = lex(input);
    if tokens.is_empty() {
        return Err(FormulaError::Empty);
    }
    let mut parser = Parser { tokens, at: 0 };
    let formula = parser.disjunction()?;
    match parser.peek() {
        None => Ok(formula),
        Some(Token::Close) => Err(FormulaError::UnbalancedParentheses),
        Some(token) => Err(FormulaError::UnexpectedToken(token.to_string())),
    }
}

struct Parser {
    tokens: Vec<Token>,
    at: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.at)
    }

    fn advance(&mut self) {
        self.at += 1;
    }

    fn disjunction(&mut self) -> Result<Formula, FormulaError> {
        let mut parts = vec![self.conjunction()?];
        while self.peek() == Some(&Token::Or) {
            self.advance();
            parts.push(self.conjunction()?);
        }
        if parts.len() == 1 {
            Ok(parts.swap_remove(0))
        } else {
            Ok(Formula::Or(parts))
        }
    }

    fn conjunction(&mut self) -> Result<Formula, FormulaError> {
        let mut parts = vec![self.unary()?];
        while self.peek() == Some(&Token::And) {
            self.advance();
            parts.push(self.unary()?);
        }
        if parts.len() == 1 {
            Ok(parts.swap_remove(0))
        } else {
            Ok(Formula::And(parts))
        }
    }

    fn unary(&mut self) -> Result<Formula, FormulaError> {
        let token = match self.peek() {
            None => return Err(FormulaError::UnexpectedEnd),
            Some(token) => token.clone(),
        };

        match token {
            Token::Not => {
                self.advance();
                Ok(Formula::Not(Box::new(self.unary()?)))
            }

            Token::Open => {
                self.advance();
                let inner = self.disjunction()?;
                match self.peek() {
                    Some(Token::Close) => {
                        self.advance();
                        Ok(inner)
                    }
                    _ => Err(FormulaError::UnbalancedParentheses),
                }
            }

            Token::Atom(atom) => {
                self.advance();
                Ok(Formula::Atom(atom))
            }

            Token::And | Token::Or | Token::Close => {
                Err(FormulaError::UnexpectedToken(token.to_string()))
            }
        }
    }
}
