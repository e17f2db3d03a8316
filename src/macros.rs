#[macro_export]
macro_rules! logval {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle undefined
    (undefined) => {
        $crate::Value::Undefined
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array($crate::List::new())
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array($crate::List::from(vec![$($crate::logval!($elem)),*]))
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let object = $crate::Map::new();
        $(
            object.insert($key, $crate::logval!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any expression, including values that already are a Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{List, Map, Number, Value};

    #[test]
    fn test_logval_macro_primitives() {
        assert_eq!(logval!(null), Value::Null);
        assert_eq!(logval!(undefined), Value::Undefined);
        assert_eq!(logval!(true), Value::Bool(true));
        assert_eq!(logval!(false), Value::Bool(false));
        assert_eq!(logval!(42), Value::Number(Number::Integer(42)));
        assert_eq!(logval!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(logval!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_logval_macro_arrays() {
        assert_eq!(logval!([]), Value::Array(List::new()));

        let arr = logval!([1, 2, 3]);
        match arr {
            Value::Array(list) => {
                assert_eq!(list.len(), 3);
                assert_eq!(list.get(0), Some(Value::Number(Number::Integer(1))));
                assert_eq!(list.get(1), Some(Value::Number(Number::Integer(2))));
                assert_eq!(list.get(2), Some(Value::Number(Number::Integer(3))));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_logval_macro_objects() {
        assert_eq!(logval!({}), Value::Object(Map::new()));

        let obj = logval!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(Value::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_logval_macro_nesting_and_passthrough() {
        let nested = logval!({
            "outer": {
                "inner": [1, null, "x"]
            },
            "pattern": (Value::pattern("^ok$"))
        });

        match nested {
            Value::Object(map) => {
                assert_eq!(map.get("pattern"), Some(Value::pattern("^ok$")));
                let outer = map.get("outer").and_then(|v| v.as_object()).unwrap();
                let inner = outer.get("inner").and_then(|v| v.as_array()).unwrap();
                assert_eq!(inner.len(), 3);
                assert_eq!(inner.get(1), Some(Value::Null));
            }
            _ => panic!("Expected object"),
        }
    }
}
