//! Literals are variables paired with a (boolean) polarity.
//!
//! Variables are names, and two names are the same variable whenever they agree ignoring case.
//! So, `Pasta` and `pasta` are the same variable, while `pasta` and `~pasta` are complementary literals.
//!
//! ```rust
//! # use otter_refute::structures::literal::Literal;
//! let literal = Literal::new("Pasta", false);
//!
//! assert!(!literal.is_negated());
//! assert!(literal.negate().is_negated());
//!
//! assert_eq!(literal, Literal::new("pasta", false));
//! assert_ne!(literal, Literal::new("pasta", true));
//! assert!(literal.is_complement_of(&Literal::new("PASTA", true)));
//! ```
//!
//! Implementation of the comparison traits is over the case-folded variable and then the polarity, with affirmed literals (strictly) less than negated literals.
//! In turn, a literal keeps the spelling of the variable it was created with, for display.

use std::{cmp::Ordering, hash::Hash, rc::Rc};

/// The character which marks a literal as negated, in text.
pub const NEGATION: char = '~';

/// A variable paired with a polarity.
#[derive(Clone, Debug)]
pub struct Literal {
    /// The variable of the literal, as first written.
    variable: Rc<str>,

    /// Whether the literal is the negation of the variable.
    negated: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing a variable with whether the variable is negated.
    pub fn new(variable: impl Into<Rc<str>>, negated: bool) -> Self {
        Self {
            variable: variable.into(),
            negated,
        }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            variable: self.variable.clone(),
            negated: !self.negated,
        }
    }

    /// The variable of the literal.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Whether the literal is negated.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether the literal shares a variable with `other`, regardless of polarity.
    pub fn has_same_variable_as(&self, other: &Literal) -> bool {
        self.folded().eq(other.folded())
    }

    /// Whether `other` is the negation of the literal.
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.negated != other.negated && self.has_same_variable_as(other)
    }

    /// The characters of the variable, case-folded.
    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.variable.chars().flat_map(char::to_lowercase)
    }
}

impl std::ops::Neg for Literal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::ops::Neg for &Literal {
    type Output = Literal;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// Traits

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.negated == other.negated && self.has_same_variable_as(other)
    }
}

impl Eq for Literal {}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded()
            .cmp(other.folded())
            .then(self.negated.cmp(&other.negated))
    }
}

impl Hash for Literal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for character in self.folded() {
            character.hash(state);
        }
        self.negated.hash(state);
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.negated {
            true => write!(f, "{NEGATION}{}", self.variable),
            false => write!(f, "{}", self.variable),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    use super::*;

    fn hash_of(literal: &Literal) -> u64 {
        let mut hasher = DefaultHasher::new();
        literal.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn case_insensitive() {
        let upper = Literal::new("Butter", true);
        let lower = Literal::new("butter", true);

        assert_eq!(upper, lower);
        assert_eq!(hash_of(&upper), hash_of(&lower));
        assert_eq!(upper.cmp(&lower), Ordering::Equal);

        assert_eq!(upper.to_string(), "~Butter");
    }

    #[test]
    fn polarity() {
        let p = Literal::new("p", false);

        assert_ne!(p, -&p);
        assert_ne!(hash_of(&p), hash_of(&-&p));
        assert!(p < -&p);

        assert_eq!(-(-p.clone()), p);
        assert!(p.is_complement_of(&p.negate()));
        assert!(!p.is_complement_of(&p));
        assert!(!p.is_complement_of(&Literal::new("q", true)));
    }
}
