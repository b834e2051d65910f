#![cfg(feature = "json")]
use serde_json::json;

#[test]
fn table_serializes_to_plain_json() -> Result<(), Box<dyn std::error::Error>> {
    let table = potconf::parse_str("name=\"x\"\nlibs=[\"a\",\n\"b\"]\nempty=[]\n")?;
    let v = potconf::to_json_value(&table)?;
    assert_eq!(v, json!({"name": "x", "libs": ["a", "b"], "empty": []}));
    Ok(())
}

#[test]
fn json_keeps_first_insertion_order() -> Result<(), Box<dyn std::error::Error>> {
    let table = potconf::parse_str("z=1\na=2\nz=3\n")?;
    let s = serde_json::to_string(&table)?;
    assert_eq!(s, r#"{"z":"3","a":"2"}"#);
    Ok(())
}
