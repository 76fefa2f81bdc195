#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::{arbitrary, fuzz_target};
use yamlbuddy::{NormalizeError, Value, normalize};

const MAX_DEPTH: usize = 64;
const MAX_LEN: usize = 8;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    fn to_value(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 8 {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::from(u.arbitrary::<i64>()?),
            3 => Value::String(u.arbitrary()?),
            4 | 5 => {
                let size = u.int_in_range(0..=MAX_LEN)?;
                let mut items = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    items.push(fv.to_value(u, depth + 1)?);
                }
                Value::Sequence(items)
            }
            _ => {
                let size = u.int_in_range(0..=MAX_LEN)?;
                let mut entries = Vec::with_capacity(size);
                for _ in 0..size {
                    // Mostly string keys, occasionally something else.
                    let key = if u.ratio(1, 16)? {
                        Value::from(u.arbitrary::<i64>()?)
                    } else {
                        Value::String(u.arbitrary()?)
                    };
                    let fv: FuzzValue = u.arbitrary()?;
                    entries.push((key, fv.to_value(u, depth + 1)?));
                }
                Value::Mapping(entries)
            }
        })
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);
    let Ok(root) = u.arbitrary::<FuzzValue>() else { return };
    let Ok(value) = root.to_value(&mut u, 0) else { return };

    match normalize(&value) {
        Ok(once) => {
            assert!(value.is_json_safe());
            assert_eq!(once, value, "string-keyed tree must normalize to itself");
            assert_eq!(normalize(&once), Ok(once.clone()));
        }
        Err(NormalizeError::NonStringKey { key }) => {
            assert!(!value.is_json_safe());
            assert!(!matches!(key, Value::String(_)));
        }
    }
});
