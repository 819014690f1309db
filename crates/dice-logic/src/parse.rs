//! Reader for the lambda notation printed by [`Expr`]'s `Display`
//!
//! ```text
//! expr   := '\' ident '.' expr | 'exists' ident '.' expr | conj
//! conj   := equal ('&' equal)*
//! equal  := app ('=' app)?
//! app    := atom ('(' expr (',' expr)* ')')*
//! atom   := ident | '(' expr ')'
//! ```
//!
//! A single lowercase letter optionally followed by digits is a variable;
//! every other identifier is a constant.

use crate::expr::Expr;
use crate::{LogicError, Result};

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Backslash,
    Dot,
    LParen,
    RParen,
    Comma,
    Amp,
    Equals,
}

#[derive(Debug)]
struct Spanned {
    token: Token,
    position: usize,
}

fn tokenize(text: &str) -> Result<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(position, c)) = chars.peek() {
        let token = match c {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '\\' | 'λ' => Token::Backslash,
            '.' => Token::Dot,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            '&' | '∧' => Token::Amp,
            '=' => Token::Equals,
            c if is_ident_char(c) => {
                let mut ident = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if !is_ident_char(c) {
                        break;
                    }
                    ident.push(c);
                    chars.next();
                }
                tokens.push(Spanned {
                    token: Token::Ident(ident),
                    position,
                });
                continue;
            }
            other => {
                return Err(LogicError::Syntax {
                    position,
                    message: format!("unexpected character '{}'", other),
                })
            }
        };
        chars.next();
        tokens.push(Spanned { token, position });
    }

    Ok(tokens)
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// Does `name` read as a variable: one lowercase letter, then digits
pub fn is_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase()) && chars.all(|c| c.is_ascii_digit())
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    fn position(&self) -> usize {
        self.tokens.get(self.pos).map_or(self.end, |s| s.position)
    }

    fn error(&self, message: impl Into<String>) -> LogicError {
        LogicError::Syntax {
            position: self.position(),
            message: message.into(),
        }
    }

    fn expect(&mut self, expected: Token, what: &str) -> Result<()> {
        if self.peek() == Some(&expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(format!("expected {}", what)))
        }
    }

    fn ident(&mut self) -> Result<String> {
        match self.peek() {
            Some(Token::Ident(name)) => {
                let name = name.clone();
                self.pos += 1;
                Ok(name)
            }
            _ => Err(self.error("expected identifier")),
        }
    }

    fn expr(&mut self) -> Result<Expr> {
        match self.peek() {
            Some(Token::Backslash) => {
                self.pos += 1;
                let (var, body) = self.binder_tail()?;
                Ok(Expr::lambda(var, body))
            }
            Some(Token::Ident(kw)) if kw == "exists" => {
                self.pos += 1;
                let (var, body) = self.binder_tail()?;
                Ok(Expr::exists(var, body))
            }
            _ => self.conjunction(),
        }
    }

    fn binder_tail(&mut self) -> Result<(String, Expr)> {
        let var = self.ident()?;
        if !is_variable_name(&var) {
            return Err(self.error(format!("'{}' cannot be bound", var)));
        }
        self.expect(Token::Dot, "'.' after bound variable")?;
        let body = self.expr()?;
        Ok((var, body))
    }

    fn conjunction(&mut self) -> Result<Expr> {
        let mut left = self.equality()?;
        while self.peek() == Some(&Token::Amp) {
            self.pos += 1;
            let right = self.equality()?;
            left = Expr::and(left, right);
        }
        Ok(left)
    }

    fn equality(&mut self) -> Result<Expr> {
        let left = self.application()?;
        if self.peek() == Some(&Token::Equals) {
            self.pos += 1;
            let right = self.application()?;
            return Ok(Expr::equality(left, right));
        }
        Ok(left)
    }

    fn application(&mut self) -> Result<Expr> {
        let mut function = self.atom()?;
        while self.peek() == Some(&Token::LParen) {
            self.pos += 1;
            let mut args = vec![self.expr()?];
            while self.peek() == Some(&Token::Comma) {
                self.pos += 1;
                args.push(self.expr()?);
            }
            self.expect(Token::RParen, "')' after arguments")?;
            function = Expr::apply(function, args);
        }
        Ok(function)
    }

    fn atom(&mut self) -> Result<Expr> {
        match self.peek() {
            Some(Token::LParen) => {
                self.pos += 1;
                let inner = self.expr()?;
                self.expect(Token::RParen, "')'")?;
                Ok(inner)
            }
            Some(Token::Ident(name)) if name == "exists" => {
                Err(self.error("quantifier must be parenthesised here"))
            }
            Some(Token::Ident(_)) => {
                let name = self.ident()?;
                if is_variable_name(&name) {
                    Ok(Expr::variable(name))
                } else {
                    Ok(Expr::constant(name))
                }
            }
            Some(Token::Backslash) => Err(self.error("lambda must be parenthesised here")),
            Some(_) => Err(self.error("expected expression")),
            None => Err(self.error("unexpected end of input")),
        }
    }
}

/// Parse an expression written in lambda notation
pub fn parse(text: &str) -> Result<Expr> {
    let tokens = tokenize(text)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        end: text.len(),
    };
    let expr = parser.expr()?;
    if parser.pos < parser.tokens.len() {
        return Err(parser.error("unexpected trailing input"));
    }
    Ok(expr)
}
