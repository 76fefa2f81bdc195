use core::fmt;

pub use crate::number::Number;

/// Dynamically-typed document tree as produced by the YAML parser.
///
/// Mapping keys may be any variant until the tree has been passed through
/// [`crate::normalize()`]. Entries keep document order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Vec<(Value, Value)>),
}

impl Value {
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// True when every mapping key in the tree is a string.
    pub fn is_json_safe(&self) -> bool {
        let mut pending = vec![self];
        while let Some(v) = pending.pop() {
            match v {
                Value::Sequence(items) => pending.extend(items),
                Value::Mapping(entries) => {
                    for (k, vv) in entries {
                        if !matches!(k, Value::String(_)) {
                            return false;
                        }
                        pending.push(vv);
                    }
                }
                _ => {}
            }
        }
        true
    }

    /// Look up a mapping entry by string key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(entries) => entries
                .iter()
                .find(|(k, _)| k.as_str() == Some(key))
                .map(|(_, v)| v),
            _ => None,
        }
    }
}

// Containers are emptied onto a heap stack so deep trees do not overflow the
// call stack when dropped.
impl Drop for Value {
    fn drop(&mut self) {
        let mut pending = match self {
            Value::Sequence(items) if !items.is_empty() => core::mem::take(items),
            Value::Mapping(entries) if !entries.is_empty() => {
                let mut out = Vec::with_capacity(entries.len() * 2);
                for (k, v) in entries.drain(..) {
                    out.push(k);
                    out.push(v);
                }
                out
            }
            _ => return,
        };
        while let Some(mut v) = pending.pop() {
            match &mut v {
                Value::Sequence(items) => pending.append(items),
                Value::Mapping(entries) => {
                    for (k, vv) in entries.drain(..) {
                        pending.push(k);
                        pending.push(vv);
                    }
                }
                _ => {}
            }
        }
    }
}

// Compact flow-style rendering used in diagnostics.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::I64(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Number(Number::U64(u))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::F64(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Mapping(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Tags are dropped; the tagged value is kept.
impl From<serde_yaml::Value> for Value {
    fn from(v: serde_yaml::Value) -> Self {
        match v {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Number(n) => Value::Number(Number::from(&n)),
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Sequence(seq) => {
                Value::Sequence(seq.into_iter().map(Value::from).collect())
            }
            serde_yaml::Value::Mapping(map) => Value::Mapping(
                map.into_iter()
                    .map(|(k, vv)| (Value::from(k), Value::from(vv)))
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => Value::from(tagged.value),
        }
    }
}
