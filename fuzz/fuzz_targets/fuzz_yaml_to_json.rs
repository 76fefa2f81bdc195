#![no_main]
use libfuzzer_sys::fuzz_target;
use yamlbuddy::{Options, yaml_to_json_string};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(Some(json)) = yaml_to_json_string(s, &Options::default()) {
            if let Err(e) = serde_json::from_str::<serde_json::Value>(&json) {
                panic!("Emitted invalid JSON!\nYAML: {}\nJSON: {}\nError: {}", s, json, e);
            }
        }
    }
});
