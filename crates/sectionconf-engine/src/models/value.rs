use std::fmt;

/// A scalar value with its coerced representation.
///
/// `Display` renders the canonical string form. Coercion accepts a literal
/// only when its canonical form reproduces it byte for byte, so displaying a
/// parsed value always yields the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Float(f64),
    Integer(i64),
    String(String),
}

impl Value {
    /// Name of the active representation, for diagnostics and snapshots.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Float(_) => "Float",
            Self::Integer(_) => "Integer",
            Self::String(_) => "String",
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Canonical text of a float: the shortest representation that parses
    /// back to the same value, always with a fraction or exponent (`10.0`,
    /// `10.4`, `1e-7`).
    pub fn float_repr(f: f64) -> String {
        format!("{f:?}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => f.write_str(&Self::float_repr(*v)),
            Self::Integer(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Float(10.4), "10.4")]
    #[case(Value::Float(10.0), "10.0")]
    #[case(Value::Float(-0.5), "-0.5")]
    #[case(Value::Float(1e-7), "1e-7")]
    #[case(Value::Integer(5), "5")]
    #[case(Value::Integer(-42), "-42")]
    #[case(Value::from("A Red Furnace"), "A Red Furnace")]
    fn displays_canonical_form(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Float(1.5).type_name(), "Float");
        assert_eq!(Value::Integer(1).type_name(), "Integer");
        assert_eq!(Value::from("1.5x").type_name(), "String");
    }
}
