use potconf::decode::splitter::{Split, split};

#[test]
fn splits_on_first_equals_only() {
    assert_eq!(
        split("url = https://x.test/?a=b&c=d"),
        Split::Scalar {
            key: "url",
            value: "https://x.test/?a=b&c=d"
        }
    );
}

#[test]
fn detects_array_opener() {
    assert_eq!(
        split("libs = [\"a\", \"b\"]"),
        Split::ArrayOpen {
            key: "libs",
            rest: "\"a\", \"b\"]"
        }
    );
    assert_eq!(split("libs=["), Split::ArrayOpen { key: "libs", rest: "" });
}

#[test]
fn quoted_bracket_is_a_scalar() {
    assert_eq!(
        split("k=\"[x\""),
        Split::Scalar {
            key: "k",
            value: "\"[x\""
        }
    );
}

#[test]
fn malformed_lines() {
    assert_eq!(split("justtext"), Split::Malformed);
    assert_eq!(split("=value"), Split::Malformed);
    assert_eq!(split("   = value"), Split::Malformed);
}

#[test]
fn empty_value_is_an_empty_scalar() {
    assert_eq!(split("k="), Split::Scalar { key: "k", value: "" });
}
