use crate::types::{TranslatorError, TranslatorResult};

/// Source text of an anonymous function together with its declared
/// parameter count.
///
/// The arity is taken as given here; the encoder rejects anything other
/// than 0, 1 or 2 when the lambda is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lambda {
    arity: usize,
    source: String,
}

impl Lambda {
    pub fn new(arity: usize, source: impl Into<String>) -> Self {
        Self {
            arity,
            source: source.into(),
        }
    }

    /// Invokes a lambda producer once and reads the declared parameters off
    /// the `lambda <params>: <body>` header of the text it returns.
    ///
    /// ```rust
    /// use goblin::protocol::lambda::Lambda;
    ///
    /// let lambda = Lambda::from_producer(|| "  lambda x, y: x + y ").unwrap();
    /// assert_eq!(lambda.arity(), 2);
    /// assert_eq!(lambda.source(), "lambda x, y: x + y");
    /// ```
    pub fn from_producer<F, S>(producer: F) -> TranslatorResult<Self>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let source = producer().into().trim().to_string();
        let arity = declared_arity(&source)?;
        Ok(Self { arity, source })
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Counts the positional parameters of a lambda header. Star parameters
/// and anything after them are not positional and are not counted.
fn declared_arity(source: &str) -> TranslatorResult<usize> {
    let malformed = || TranslatorError::MalformedLambdaSource(source.to_string());

    let header = source.strip_prefix("lambda").ok_or_else(malformed)?;
    if !header.starts_with(|c: char| c.is_whitespace() || c == ':') {
        return Err(malformed());
    }

    let mut params = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut closed = false;
    for c in header.chars() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.checked_sub(1).ok_or_else(malformed)?,
            ',' if depth == 0 => {
                params.push(std::mem::take(&mut current));
                continue;
            }
            ':' if depth == 0 => {
                closed = true;
                break;
            }
            _ => {}
        }
        current.push(c);
    }
    if !closed {
        return Err(malformed());
    }
    // a trailing comma is allowed, an empty parameter elsewhere is not
    if !current.trim().is_empty() || !params.is_empty() {
        params.push(current);
    }
    if params.last().is_some_and(|p| p.trim().is_empty()) && params.len() > 1 {
        params.pop();
    }

    let mut arity = 0;
    let mut positional = true;
    for param in &params {
        let param = param.trim();
        let name = param.split('=').next().unwrap_or_default().trim();
        if let Some(starred) = name.strip_prefix('*') {
            let starred = starred.strip_prefix('*').unwrap_or(starred);
            if !starred.is_empty() && !is_identifier(starred) {
                return Err(malformed());
            }
            positional = false;
            continue;
        }
        if !is_identifier(name) {
            return Err(malformed());
        }
        if positional {
            arity += 1;
        }
    }
    Ok(arity)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    }
}
