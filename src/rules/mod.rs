pub mod answers;
pub mod country;
pub mod likert;
pub mod roles;

pub use answers::*;
pub use country::*;
pub use likert::*;
pub use roles::*;

/// How a rule tests an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Whole value equals the pattern
    Exact(&'static str),
    /// Value begins with the pattern
    StartsWith(&'static str),
    /// Pattern occurs anywhere in the value
    Contains(&'static str),
    /// Pattern occurs, but not at the very start of the value
    ContainsAfterStart(&'static str),
    /// Value equals the pattern once surrounding whitespace is removed
    TrimmedEquals(&'static str),
}

impl Matcher {
    pub fn matches(&self, value: &str) -> bool {
        match *self {
            Matcher::Exact(p) => value == p,
            Matcher::StartsWith(p) => value.starts_with(p),
            Matcher::Contains(p) => value.contains(p),
            Matcher::ContainsAfterStart(p) => value.find(p).is_some_and(|pos| pos > 0),
            Matcher::TrimmedEquals(p) => value.trim() == p,
        }
    }
}

/// A (predicate, result) pair in an ordered rule table
#[derive(Debug, Clone, Copy)]
pub struct Rule<T> {
    pub matcher: Matcher,
    pub result: T,
}

impl<T> Rule<T> {
    pub const fn new(matcher: Matcher, result: T) -> Self {
        Self { matcher, result }
    }

    pub const fn exact(pattern: &'static str, result: T) -> Self {
        Self::new(Matcher::Exact(pattern), result)
    }
}

/// Evaluate rules in order; the first matching rule wins
pub fn first_match<T: Copy>(rules: &[Rule<T>], value: &str) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.matcher.matches(value))
        .map(|rule| rule.result)
}

/// Word capitalization: a cased character after an uncased one is
/// uppercased, every other cased character is lowercased.
pub fn title_case(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut previous_cased = false;

    for c in value.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased {
            if previous_cased {
                output.extend(c.to_lowercase());
            } else {
                output.extend(c.to_uppercase());
            }
        } else {
            output.push(c);
        }
        previous_cased = cased;
    }

    output
}
