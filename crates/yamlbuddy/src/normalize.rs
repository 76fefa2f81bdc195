//! Restrict a parsed [`Value`] tree to JSON-representable shapes.
//!
//! Every mapping key must already be a string; any other key fails the walk
//! with [`NormalizeError::NonStringKey`]. Scalars pass through unchanged and
//! containers are rebuilt, so the input is never mutated.
//!
//! The walk keeps its own stack of partially rebuilt containers instead of
//! recursing, and dropping a [`Value`] is iterative too, so normalizing and
//! discarding a tree are bounded by memory rather than the call stack.
//! `Clone`, `PartialEq` and `Display` on [`Value`] still recurse.

use core::slice;

use crate::error::NormalizeError;
use crate::value::Value;

/// A container whose children are still being normalized.
enum Frame<'a> {
    Sequence {
        rest: slice::Iter<'a, Value>,
        out: Vec<Value>,
    },
    Mapping {
        rest: slice::Iter<'a, (Value, Value)>,
        out: Vec<(Value, Value)>,
        // Key of the entry whose value is currently being normalized.
        key: Option<String>,
    },
}

impl<'a> Frame<'a> {
    fn open(value: &'a Value) -> Option<Self> {
        match value {
            Value::Sequence(items) => Some(Frame::Sequence {
                rest: items.iter(),
                out: Vec::with_capacity(items.len()),
            }),
            Value::Mapping(entries) => Some(Frame::Mapping {
                rest: entries.iter(),
                out: Vec::with_capacity(entries.len()),
                key: None,
            }),
            _ => None,
        }
    }

    /// Next child to normalize, or `None` once the container is exhausted.
    fn advance(&mut self) -> Result<Option<&'a Value>, NormalizeError> {
        match self {
            Frame::Sequence { rest, .. } => Ok(rest.next()),
            Frame::Mapping { rest, key, .. } => match rest.next() {
                None => Ok(None),
                Some((Value::String(k), v)) => {
                    *key = Some(k.clone());
                    Ok(Some(v))
                }
                Some((k, _)) => Err(NormalizeError::NonStringKey { key: k.clone() }),
            },
        }
    }

    fn accept(&mut self, child: Value) {
        match self {
            Frame::Sequence { out, .. } => out.push(child),
            Frame::Mapping { out, key, .. } => {
                if let Some(k) = key.take() {
                    out.push((Value::String(k), child));
                }
            }
        }
    }

    fn finish(self) -> Value {
        match self {
            Frame::Sequence { out, .. } => Value::Sequence(out),
            Frame::Mapping { out, .. } => Value::Mapping(out),
        }
    }
}

/// Produce an equivalent tree whose mappings all have string keys.
///
/// Sequence elements and mapping entries are visited in stored order and the
/// first non-string key found terminates the walk; no partial result is
/// returned.
pub fn normalize(value: &Value) -> Result<Value, NormalizeError> {
    let Some(root) = Frame::open(value) else {
        return Ok(value.clone());
    };
    let mut stack = vec![root];
    loop {
        // The stack only drains through the `return` below.
        let top = stack.len() - 1;
        match stack[top].advance()? {
            Some(child) => match Frame::open(child) {
                Some(frame) => stack.push(frame),
                None => stack[top].accept(child.clone()),
            },
            None => {
                let done = stack.swap_remove(top).finish();
                match stack.last_mut() {
                    Some(parent) => parent.accept(done),
                    None => return Ok(done),
                }
            }
        }
    }
}

impl Value {
    /// See [`normalize`].
    pub fn normalized(&self) -> Result<Value, NormalizeError> {
        normalize(self)
    }

    /// Like [`Value::normalized`], but returns `self` untouched when the tree
    /// is already JSON-safe.
    pub fn into_normalized(self) -> Result<Value, NormalizeError> {
        if self.is_json_safe() {
            Ok(self)
        } else {
            normalize(&self)
        }
    }
}
