//! Literals and variables.
//!
//! A `Literal` is a signed, non-zero integer. Its magnitude names a
//! variable (`1..=N`), its sign the polarity. Two literals conflict when
//! one is the negation of the other.
//!
//! ```
//! use literal_grid::core::{Literal, VariableId};
//!
//! let lit = Literal::new(-4);
//! assert_eq!(lit.variable(), VariableId::new(4));
//! assert!(lit.is_negative());
//! assert_eq!(lit.negate(), Literal::new(4));
//! ```

use serde::{Deserialize, Serialize};

use super::error::ZeroLiteral;

/// Variable identifier, the magnitude of a literal (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VariableId(pub u32);

impl VariableId {
    /// Create a new variable ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw variable number.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into a per-variable table (palette, counters).
    ///
    /// Variable 1 maps to index 0.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }

    /// Positive literal of this variable.
    #[must_use]
    pub const fn positive(self) -> Literal {
        Literal::new(self.0 as i32)
    }

    /// Negative literal of this variable.
    #[must_use]
    pub const fn negative(self) -> Literal {
        Literal::new(-(self.0 as i32))
    }

    /// Iterate over variables `1..=count`.
    pub fn all(count: u32) -> impl Iterator<Item = VariableId> {
        (1..=count).map(VariableId)
    }
}

impl std::fmt::Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// Signed literal: a variable together with its polarity.
///
/// Never zero. Deserializing goes through `TryFrom<i32>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Literal(i32);

impl Literal {
    /// Create a literal from its signed integer form.
    ///
    /// Zero is not a literal.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        assert!(value != 0, "Literal must be non-zero");
        Self(value)
    }

    /// Get the raw signed value.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// The variable this literal refers to.
    #[must_use]
    pub const fn variable(self) -> VariableId {
        VariableId(self.0.unsigned_abs())
    }

    /// The opposite-polarity literal of the same variable.
    #[must_use]
    pub const fn negate(self) -> Self {
        Self(-self.0)
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// True if `other` is the negation of this literal.
    #[must_use]
    pub const fn conflicts_with(self, other: Literal) -> bool {
        self.0 == -other.0
    }
}

impl std::ops::Neg for Literal {
    type Output = Literal;

    fn neg(self) -> Literal {
        self.negate()
    }
}

impl TryFrom<i32> for Literal {
    type Error = ZeroLiteral;

    fn try_from(value: i32) -> Result<Self, ZeroLiteral> {
        if value == 0 {
            Err(ZeroLiteral)
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Literal> for i32 {
    fn from(lit: Literal) -> i32 {
        lit.0
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_negative() {
            write!(f, "-x{}", self.0.unsigned_abs())
        } else {
            write!(f, "x{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_and_polarity() {
        let pos = Literal::new(3);
        let neg = Literal::new(-3);

        assert_eq!(pos.variable(), VariableId::new(3));
        assert_eq!(neg.variable(), VariableId::new(3));
        assert!(pos.is_positive());
        assert!(neg.is_negative());
    }

    #[test]
    fn test_negation() {
        let lit = Literal::new(7);
        assert_eq!(lit.negate(), Literal::new(-7));
        assert_eq!(-lit, Literal::new(-7));
        assert_eq!(lit.negate().negate(), lit);
    }

    #[test]
    fn test_conflicts_with() {
        let a = Literal::new(2);
        assert!(a.conflicts_with(Literal::new(-2)));
        assert!(!a.conflicts_with(Literal::new(2)));
        assert!(!a.conflicts_with(Literal::new(-3)));
    }

    #[test]
    fn test_variable_index_is_zero_based() {
        assert_eq!(VariableId::new(1).index(), 0);
        assert_eq!(VariableId::new(10).index(), 9);
    }

    #[test]
    fn test_variable_literals() {
        let v = VariableId::new(5);
        assert_eq!(v.positive(), Literal::new(5));
        assert_eq!(v.negative(), Literal::new(-5));

        let all: Vec<_> = VariableId::all(3).collect();
        assert_eq!(all, vec![VariableId::new(1), VariableId::new(2), VariableId::new(3)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Literal::new(4)), "x4");
        assert_eq!(format!("{}", Literal::new(-4)), "-x4");
        assert_eq!(format!("{}", VariableId::new(4)), "x4");
    }

    #[test]
    #[should_panic(expected = "Literal must be non-zero")]
    fn test_zero_literal() {
        let _ = Literal::new(0);
    }

    #[test]
    fn test_literal_serde() {
        let lit = Literal::new(-9);
        let json = serde_json::to_string(&lit).unwrap();
        assert_eq!(json, "-9");
        let back: Literal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lit);
    }

    #[test]
    fn test_zero_is_rejected_on_deserialize() {
        assert!(serde_json::from_str::<Literal>("0").is_err());
        let rows: Result<Vec<Vec<Literal>>, _> = serde_json::from_str("[[1, 2], [0, -3]]");
        assert!(rows.is_err());
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Literal::try_from(-6), Ok(Literal::new(-6)));
        assert_eq!(Literal::try_from(0), Err(ZeroLiteral));
        assert_eq!(i32::from(Literal::new(8)), 8);
    }
}
