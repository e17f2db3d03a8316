use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use serde_logfmt::{
    format, format_value, format_value_with_options, format_with_options, logval, ErrorValue,
    FormatOptions, List, Map, Value,
};

#[test]
fn formats_a_string_as_itself() {
    assert_eq!(format(&"Hello, World!"), "Hello, World!");
    assert_eq!(format_value(&Value::from("Hello, World!")), "Hello, World!");
}

#[test]
fn formats_a_number_as_its_digits() {
    assert_eq!(format(&42), "42");
    assert_eq!(format_value(&Value::from(4.25)), "4.25");
}

#[test]
fn formats_booleans_bare() {
    assert_eq!(format(&true), "true");
    assert_eq!(format(&false), "false");
    assert_eq!(format_value(&logval!({ "is_it_true": true })), "is_it_true=true");
}

#[test]
fn formats_absent_roots_as_empty_string() {
    assert_eq!(format_value(&Value::Null), "");
    assert_eq!(format_value(&Value::Undefined), "");
    assert_eq!(format(&None::<i32>), "");
    assert_eq!(format(&""), "");
}

#[test]
fn formats_empty_composites_as_literals() {
    assert_eq!(format_value(&logval!([])), "[]");
    assert_eq!(format_value(&logval!({})), "{}");
}

#[test]
fn formats_nested_empty_composites_as_literal_leaves() {
    assert_eq!(format_value(&logval!({ "x": [] })), "x=[]");
    assert_eq!(format_value(&logval!({ "x": {} })), "x={}");
}

#[test]
fn formats_a_pattern_in_slash_form() {
    assert_eq!(format_value(&Value::pattern("^foobar$")), "/^foobar$/");
    assert_eq!(
        format_value(&logval!({ "pqr": (Value::pattern("^foobar$")) })),
        "pqr=/^foobar$/"
    );
}

#[test]
fn formats_dates_as_iso8601_with_offset() {
    let date = DateTime::parse_from_rfc3339("2016-06-21T08:37:16-04:00").unwrap();

    assert_eq!(format_value(&Value::from(date)), "2016-06-21T08:37:16-04:00");
    assert_eq!(
        format_value(&logval!({ "date": (Value::from(date)) })),
        "date=2016-06-21T08:37:16-04:00"
    );

    let utc: DateTime<Utc> = date.with_timezone(&Utc);
    assert_eq!(format_value(&Value::from(utc)), "2016-06-21T12:37:16+00:00");
}

#[test]
fn formats_a_root_error_with_the_error_prefix() {
    let err = ErrorValue::new("logformat.test.err", "Test");
    assert_eq!(
        format_value(&Value::from(err)),
        "ERROR name=logformat.test.err message=Test"
    );
}

#[test]
fn formats_a_nested_error_as_flattened_pairs() {
    let err = ErrorValue::new("logformat.test.err", "Test");
    assert_eq!(
        format_value(&logval!({ "err": (Value::from(err)) })),
        "err.name=logformat.test.err err.message=Test"
    );
}

#[test]
fn formats_error_fields_after_name_and_message() {
    let err = ErrorValue::new("db.query", "syntax error near SELECT")
        .with_field("code", 1064)
        .with_field("hint", "check the statement");
    assert_eq!(
        format_value(&Value::from(err)),
        "ERROR name=db.query message=\"syntax error near SELECT\" code=1064 hint=\"check the statement\""
    );
}

#[test]
fn formats_an_error_nested_inside_an_error() {
    let inner = ErrorValue::new("inner.err", "Test Double Nested Inner");
    let outer =
        ErrorValue::new("outer.err", "Outer").with_field("inner", Value::from(inner));
    assert_eq!(
        format_value(&logval!({ "err": (Value::from(outer)) })),
        "err.name=outer.err err.message=Outer err.inner.name=inner.err err.inner.message=\"Test Double Nested Inner\""
    );
}

#[test]
fn does_not_significantly_modify_its_input() {
    // The exposure of an error's hidden diagnostics must not change the
    // error's own fields or its type.
    let err = ErrorValue::new("logformat.test.err", "Test").with_field("request_id", "r-1");
    let snapshot = std::format!("{:?}", err);
    let _ = format_value(&Value::from(err.clone()));
    assert_eq!(std::format!("{:?}", err), snapshot);
    assert_eq!(err.fields().len(), 1);

    let nested = logval!({ "err": (Value::from(err.clone())) });
    let _ = format_value(&nested);
    let held = nested.as_object().unwrap().get("err").unwrap();
    assert!(held.is_error());

    let map = Map::new();
    map.insert("a", 1);
    let value = Value::from(map.clone());
    let _ = format_value(&value);
    assert_eq!(map.keys(), vec!["a".to_string()]);
}

#[test]
fn formats_objects_as_key_value_pairs() {
    let value = logval!({
        "foo": undefined,
        "bar": null,
        "abc": true,
        "def": "Hello, World!",
        "ghi": "cheese",
        "jkl": {
            "a": null,
            "b": undefined,
            "c": "howdy",
            "d": "apple sauce",
            "f": [4, "life"],
            "g": {}
        },
        "mno": [
            "this",
            "is",
            "a test"
        ],
        "pqr": (Value::pattern("^foobar$")),
        "stu": []
    });

    assert_eq!(
        format_value(&value),
        "foo=undefined bar=null abc=true def=\"Hello, World!\" ghi=cheese \
         jkl.a=null jkl.b=undefined jkl.c=howdy jkl.d=\"apple sauce\" \
         jkl.f.0=4 jkl.f.1=life jkl.g={} mno.0=this mno.1=is mno.2=\"a test\" \
         pqr=/^foobar$/ stu=[]"
    );
}

#[test]
fn formats_arrays_with_index_paths() {
    let value = logval!([
        true,
        null,
        undefined,
        "test",
        "quoted test",
        42,
        [],
        {}
    ]);

    assert_eq!(
        format_value(&value),
        "0=true 1=null 2=undefined 3=test 4=\"quoted test\" 5=42 6=[] 7={}"
    );
}

#[test]
fn respects_the_max_depth_option() {
    let value = logval!({ "foo": { "bar": { "baz": 1 } } });

    assert_eq!(
        format_value_with_options(&value, FormatOptions::new().with_max_depth(2)),
        "foo.bar=\"[object Object]\""
    );
    assert_eq!(
        format_value_with_options(&value, FormatOptions::new().with_max_depth(10)),
        "foo.bar.baz=1"
    );
    assert_eq!(format_value(&value), "foo.bar.baz=1");
}

#[test]
fn depth_capped_arrays_render_their_join_text() {
    let value = logval!({ "jkl": { "f": [4, "life"] } });
    assert_eq!(
        format_value_with_options(&value, FormatOptions::new().with_max_depth(2)),
        "jkl.f=4,life"
    );
}

#[test]
fn does_not_crash_on_a_circular_reference() {
    let a = Map::new();
    let b = Map::new();
    a.insert("b", b.clone());
    b.insert("a", a.clone());
    assert_eq!(format_value(&Value::from(a)), "[Circular]");
}

#[test]
fn detects_a_self_referential_map() {
    let map = Map::new();
    map.insert("me", map.clone());
    assert_eq!(format_value(&Value::from(map)), "[Circular]");
}

#[test]
fn detects_a_cycle_through_an_array() {
    let list = List::new();
    list.push(1);
    list.push(list.clone());
    assert_eq!(format_value(&Value::from(list)), "[Circular]");
}

#[test]
fn detects_a_cycle_through_an_error_field() {
    let holder = Map::new();
    let err = ErrorValue::new("loop.err", "circular").with_field("context", holder.clone());
    holder.insert("err", Value::from(err.clone()));
    assert_eq!(format_value(&Value::from(err)), "[Circular]");
}

#[test]
fn allows_shared_acyclic_subtrees() {
    let shared = Map::new();
    shared.insert("x", 1);
    let root = Map::new();
    root.insert("a", shared.clone());
    root.insert("b", shared.clone());
    assert_eq!(format_value(&Value::from(root)), "a.x=1 b.x=1");
}

#[test]
fn skips_callable_values() {
    let value = logval!({
        "handler": (Value::Callable),
        "x": 1
    });
    assert_eq!(format_value(&value), "x=1");
    assert_eq!(format_value(&Value::Callable), "");
}

#[test]
fn skipped_array_slots_keep_their_positions() {
    let value = logval!([1, (Value::Callable), 3]);
    assert_eq!(format_value(&value), "0=1 2=3");
}

#[test]
fn formats_bigints_as_digits() {
    let big = num_bigint::BigInt::parse_bytes(b"170141183460469231731687303715884105728", 10)
        .unwrap();
    assert_eq!(
        format_value(&logval!({ "big": (Value::from(big)) })),
        "big=170141183460469231731687303715884105728"
    );
}

#[test]
fn renders_special_numbers_with_javascript_text() {
    assert_eq!(format(&f64::INFINITY), "Infinity");
    assert_eq!(
        format_value(&logval!({ "ratio": (Value::from(f64::NAN)) })),
        "ratio=NaN"
    );
}

#[test]
fn recovers_from_a_panicking_display_impl() {
    struct Hostile;
    impl std::fmt::Display for Hostile {
        fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            panic!("cannot be converted to a primitive")
        }
    }

    assert_eq!(format_value(&Value::opaque(Hostile)), "{}");
    assert_eq!(
        format_value(&logval!({ "pool": (Value::opaque(Hostile)) })),
        "pool={}"
    );
}

#[test]
fn repeated_calls_are_deterministic() {
    let value = logval!({
        "b": [1, { "c": "two words" }],
        "a": null
    });
    let first = format_value(&value);
    assert_eq!(first, "b.0=1 b.1.c=\"two words\" a=null");
    assert_eq!(format_value(&value), first);
    assert_eq!(format_value(&value), first);
}

#[test]
fn formats_serde_structs() {
    #[derive(Serialize)]
    struct Connection<'a> {
        host: &'a str,
        port: u16,
        secure: bool,
    }

    assert_eq!(
        format(&Connection {
            host: "db.internal",
            port: 5432,
            secure: true,
        }),
        "host=db.internal port=5432 secure=true"
    );
}

#[test]
fn formats_serde_json_values() {
    // serde_json objects iterate in sorted key order.
    let value = json!({
        "abc": true,
        "def": "Hello, World!",
        "ghi": "cheese",
        "jkl": { "c": "howdy", "f": [4, "life"] },
        "stu": []
    });

    assert_eq!(
        format(&value),
        "abc=true def=\"Hello, World!\" ghi=cheese jkl.c=howdy jkl.f.0=4 jkl.f.1=life stu=[]"
    );
}

#[test]
fn formats_serde_maps_with_scalar_keys() {
    use std::collections::BTreeMap;

    let mut by_code: BTreeMap<u32, &str> = BTreeMap::new();
    by_code.insert(200, "ok");
    by_code.insert(404, "missing page");
    assert_eq!(format(&by_code), "200=ok 404=\"missing page\"");
}

#[test]
fn max_depth_applies_through_the_serde_path() {
    let value = json!({ "foo": { "bar": { "baz": 1 } } });
    assert_eq!(
        format_with_options(&value, FormatOptions::new().with_max_depth(2)),
        "foo.bar=\"[object Object]\""
    );
}

#[test]
fn output_has_no_trailing_newline() {
    let line = format_value(&logval!({ "a": 1, "b": 2 }));
    assert_eq!(line, "a=1 b=2");
    assert!(!line.ends_with('\n'));
}
