use crate::cursor::Cursor;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Labels describing what a failed parser was looking for
///
/// Behaves as a set: [`Expectations::union`] collapses duplicates and equality
/// ignores order. Insertion order is kept so diagnostics are stable.
#[derive(Debug, Clone, Default)]
pub struct Expectations {
    labels: Vec<Cow<'static, str>>,
}

impl Expectations {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn one(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            labels: vec![label.into()],
        }
    }

    pub fn insert(&mut self, label: impl Into<Cow<'static, str>>) {
        let label = label.into();
        if !self.contains(&label) {
            self.labels.push(label);
        }
    }

    pub fn union(mut self, other: Expectations) -> Self {
        for label in other.labels {
            self.insert(label);
        }
        self
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.as_ref())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl PartialEq for Expectations {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|l| other.contains(l))
    }
}

impl Eq for Expectations {}

impl<L: Into<Cow<'static, str>>> FromIterator<L> for Expectations {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        let mut expectations = Expectations::none();
        for label in iter {
            expectations.insert(label);
        }
        expectations
    }
}

impl fmt::Display for Expectations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

/// A parse failure, carried as data
///
/// `remainder` is the cursor at which the failure was detected. Alternation
/// compares it with the input cursor to tell whether the failing parser
/// consumed anything, and the best-error policy compares positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure<'code> {
    remainder: Cursor<'code>,
    message: Cow<'static, str>,
    expectations: Expectations,
}

impl<'code> Failure<'code> {
    pub fn new(
        remainder: Cursor<'code>,
        message: impl Into<Cow<'static, str>>,
        expectations: Expectations,
    ) -> Self {
        Self {
            remainder,
            message: message.into(),
            expectations,
        }
    }

    /// Failure describing the element under `cursor`, or end of input
    pub fn unexpected(cursor: Cursor<'code>, expectations: Expectations) -> Self {
        let message: Cow<'static, str> = match cursor.current() {
            Some(c) => format!("unexpected {:?}", c).into(),
            None => "unexpected end of input".into(),
        };
        Self::new(cursor, message, expectations)
    }

    pub fn remainder(&self) -> Cursor<'code> {
        self.remainder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn expectations(&self) -> &Expectations {
        &self.expectations
    }

    /// Same failure with its expectations replaced
    pub fn with_expectations(self, expectations: Expectations) -> Self {
        Self {
            expectations,
            ..self
        }
    }

    /// Same failure reported at another cursor
    pub fn at(self, remainder: Cursor<'code>) -> Self {
        Self { remainder, ..self }
    }

    /// Whether the failing parser consumed input past `input`
    pub fn consumed_from(&self, input: &Cursor<'code>) -> bool {
        self.remainder != *input
    }

    /// Lines of source around the failure: up to 2 before and after, with a
    /// pointer under the failing column
    pub fn context_lines(&self) -> Vec<String> {
        let target_line = self.remainder.line();
        let first = target_line.saturating_sub(2).max(1);
        let last = target_line + 2;
        let text: String = self.remainder.source().iter().collect();

        let mut lines = Vec::new();
        for (index, content) in text.split('\n').enumerate() {
            let number = index + 1;
            if number < first {
                continue;
            }
            if number > last {
                break;
            }
            let prefix = if number == target_line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == target_line {
                let offset = prefix.chars().count() + self.remainder.column() - 1;
                lines.push(format!("{}^--- here", " ".repeat(offset)));
            }
        }
        lines
    }
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.remainder)?;
        if !self.expectations.is_empty() {
            write!(f, "; expected one of: {}", self.expectations)?;
        }
        Ok(())
    }
}

impl Error for Failure<'_> {}

/// Owned error produced by [`crate::parse`] when the input does not match
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at line {line}, column {column}{}", expected_suffix(.expectations))]
pub struct ParseError {
    pub message: String,
    pub expectations: Vec<String>,
    /// 0-based code point offset of the failure
    pub position: usize,
    pub line: usize,
    pub column: usize,
    /// Source lines around the failure, see [`Failure::context_lines`]
    pub context: Vec<String>,
}

fn expected_suffix(expectations: &[String]) -> String {
    if expectations.is_empty() {
        String::new()
    } else {
        format!("; expected one of: {}", expectations.join(", "))
    }
}

impl ParseError {
    /// Multi-line diagnostic: the summary line followed by the source context
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        report.push('\n');
        for line in &self.context {
            report.push('\n');
            report.push_str(line);
        }
        report
    }
}

impl From<Failure<'_>> for ParseError {
    fn from(failure: Failure<'_>) -> Self {
        let remainder = failure.remainder();
        ParseError {
            message: failure.message().to_string(),
            expectations: failure.expectations().iter().map(str::to_string).collect(),
            position: remainder.position(),
            line: remainder.line(),
            column: remainder.column(),
            context: failure.context_lines(),
        }
    }
}
