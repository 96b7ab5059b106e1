use crate::element::Element;
use crate::formula::error::FormulaError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Symbol { element: Element, pos: usize },
    Count { value: f64, pos: usize },
    OpenParen(usize),
    CloseParen(usize),
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, FormulaError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            ' ' | '\t' | '\r' | '\n' => {
                i += 1;
            }
            '(' => {
                tokens.push(Token::OpenParen(i));
                i += 1;
            }
            ')' => {
                tokens.push(Token::CloseParen(i));
                i += 1;
            }
            c if c.is_ascii_uppercase() => {
                let (tok, next) = parse_symbol(&chars, i)?;
                tokens.push(tok);
                i = next;
            }
            c if c.is_ascii_digit() || c == '.' => {
                let (tok, next) = parse_count(&chars, i)?;
                tokens.push(tok);
                i = next;
            }
            ch => return Err(FormulaError::UnexpectedChar { pos: i, ch }),
        }
    }

    Ok(tokens)
}

// An uppercase letter plus every immediately following lowercase letter.
fn parse_symbol(chars: &[char], start: usize) -> Result<(Token, usize), FormulaError> {
    let mut i = start + 1;
    while i < chars.len() && chars[i].is_ascii_lowercase() {
        i += 1;
    }
    let text: String = chars[start..i].iter().collect();
    match Element::from_symbol(&text) {
        Some(element) => Ok((Token::Symbol { element, pos: start }, i)),
        None => Err(FormulaError::UnknownElement { pos: start, text }),
    }
}

// A run of digits and dots. More than one dot fails the parse.
fn parse_count(chars: &[char], start: usize) -> Result<(Token, usize), FormulaError> {
    let mut i = start;
    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
    }
    let text: String = chars[start..i].iter().collect();
    match text.parse::<f64>() {
        Ok(value) => Ok((Token::Count { value, pos: start }, i)),
        Err(_) => Err(FormulaError::InvalidCount { pos: start, text }),
    }
}
