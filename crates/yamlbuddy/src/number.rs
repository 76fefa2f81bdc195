/// Numeric scalar as resolved by the YAML parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    pub fn is_finite(&self) -> bool {
        match self {
            Number::I64(_) | Number::U64(_) => true,
            Number::F64(f) => f.is_finite(),
        }
    }
}

impl core::fmt::Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Number::I64(i) => write!(f, "{}", i),
            Number::U64(u) => write!(f, "{}", u),
            Number::F64(num) => f.write_str(&format_f64(*num)),
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::I64(i)
    }
}

impl From<u64> for Number {
    fn from(u: u64) -> Self {
        Number::U64(u)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::F64(f)
    }
}

impl From<&serde_yaml::Number> for Number {
    fn from(n: &serde_yaml::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::I64(i)
        } else if let Some(u) = n.as_u64() {
            Number::U64(u)
        } else {
            Number::F64(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

/// Shortest round-trip rendering; non-finite values use YAML spelling.
pub(crate) fn format_f64(value: f64) -> String {
    if value.is_nan() {
        return String::from(".nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { ".inf" } else { "-.inf" });
    }
    let mut buf = ryu::Buffer::new();
    String::from(buf.format_finite(value))
}
