use crate::models::Value;

/// Coerces a trimmed value string into its best-guess representation.
///
/// A literal becomes a `Float` when it parses as one and its canonical float
/// text equals the literal exactly, otherwise an `Integer` under the same
/// rule, otherwise it stays a `String`. `"007"`, `"1e3"`, `"+5"` and `"10.50"`
/// all stay strings because a numeric reading would not print them back.
pub fn coerce(raw: &str) -> Value {
    if let Some(f) = as_float(raw) {
        return Value::Float(f);
    }
    if let Some(i) = as_integer(raw) {
        return Value::Integer(i);
    }
    Value::String(raw.to_owned())
}

fn as_float(raw: &str) -> Option<f64> {
    let f = raw.parse::<f64>().ok()?;
    (f.is_finite() && Value::float_repr(f) == raw).then_some(f)
}

fn as_integer(raw: &str) -> Option<i64> {
    let i = raw.parse::<i64>().ok()?;
    (i.to_string() == raw).then_some(i)
}
