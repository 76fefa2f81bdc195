//! YAML text to [`Value`].
//!
//! Only the first document of a stream is read; later documents are ignored.
//! A key repeated within one mapping keeps its last value.

use core::fmt;
use std::io::Read;

use serde::de::{self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor};

use crate::{Options, Result, value::Value};

pub fn from_str(s: &str, options: &Options) -> Result<Value> {
    first_document(serde_yaml::Deserializer::from_str(s), options)
}

pub fn from_slice(bytes: &[u8], options: &Options) -> Result<Value> {
    first_document(serde_yaml::Deserializer::from_slice(bytes), options)
}

pub fn from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Value> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    from_slice(&buf, options)
}

fn first_document(mut stream: serde_yaml::Deserializer<'_>, options: &Options) -> Result<Value> {
    let yaml = match stream.next() {
        Some(document) => Node::deserialize(document)?.0,
        None => serde_yaml::Value::Null,
    };
    resolve(yaml, options)
}

fn resolve(mut yaml: serde_yaml::Value, options: &Options) -> Result<Value> {
    if options.merge_keys {
        yaml.apply_merge()?;
    }
    Ok(Value::from(yaml))
}

/// A parsed node whose mappings overwrite repeated keys instead of failing.
struct Node(serde_yaml::Value);

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor).map(Node)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = serde_yaml::Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> core::result::Result<Self::Value, E> {
        Ok(serde_yaml::Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, i: i64) -> core::result::Result<Self::Value, E> {
        Ok(serde_yaml::Value::Number(i.into()))
    }

    fn visit_u64<E: de::Error>(self, u: u64) -> core::result::Result<Self::Value, E> {
        Ok(serde_yaml::Value::Number(u.into()))
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> core::result::Result<Self::Value, E> {
        Ok(serde_yaml::Value::Number(f.into()))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> core::result::Result<Self::Value, E> {
        Ok(serde_yaml::Value::String(s.to_owned()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> core::result::Result<Self::Value, E> {
        Ok(serde_yaml::Value::String(s))
    }

    fn visit_unit<E: de::Error>(self) -> core::result::Result<Self::Value, E> {
        Ok(serde_yaml::Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> core::result::Result<Self::Value, E> {
        Ok(serde_yaml::Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> core::result::Result<Self::Value, D::Error> {
        Node::deserialize(deserializer).map(|n| n.0)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> core::result::Result<Self::Value, A::Error> {
        let mut items = serde_yaml::Sequence::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(Node(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(serde_yaml::Value::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> core::result::Result<Self::Value, A::Error> {
        let mut entries = serde_yaml::Mapping::new();
        while let Some((Node(k), Node(v))) = map.next_entry()? {
            // Last one wins; the key keeps its first position.
            entries.insert(k, v);
        }
        Ok(serde_yaml::Value::Mapping(entries))
    }

    // Custom tags arrive as enums; the tag is dropped.
    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> core::result::Result<Self::Value, A::Error> {
        let (_tag, contents): (String, _) = data.variant()?;
        contents.newtype_variant::<Node>().map(|n| n.0)
    }
}
