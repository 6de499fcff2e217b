/// Writes a LookML mapping inline, JSON style.
///
/// An object at the top level evaluates to a [`LookmlMap`](crate::LookmlMap), ready to
/// pass to [`build`](crate::build); everything else evaluates to a
/// [`Value`](crate::Value).
///
/// # Examples
///
/// ```rust
/// use lookml_tree::{lookml, Value};
///
/// let view = lookml!({
///     "view": {
///         "name": "orders",
///         "fields": ["id", "status"]
///     }
/// });
/// assert_eq!(view.len(), 1);
///
/// assert_eq!(lookml!("yes"), Value::from("yes"));
/// ```
#[macro_export]
macro_rules! lookml {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::Value::from($crate::lookml!($elem))),*])
    };

    ({}) => {
        $crate::LookmlMap::new()
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::LookmlMap::new();
        $(
            object.insert($key.to_string(), $crate::Value::from($crate::lookml!($value)));
        )*
        object
    }};

    // Strings, integers and any other expression with a `From` conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{LookmlMap, Number, Value};

    #[test]
    fn test_lookml_macro_primitives() {
        assert_eq!(lookml!(null), Value::Null);
        assert_eq!(lookml!(true), Value::Bool(true));
        assert_eq!(lookml!(42), Value::Number(Number::Integer(42)));
        assert_eq!(lookml!("yes"), Value::String("yes".to_string()));
    }

    #[test]
    fn test_lookml_macro_arrays() {
        assert_eq!(lookml!([]), Value::Array(vec![]));
        assert_eq!(
            lookml!(["a", 1]),
            Value::Array(vec![Value::from("a"), Value::from(1)])
        );
    }

    #[test]
    fn test_lookml_macro_objects() {
        assert_eq!(lookml!({}), LookmlMap::new());

        let obj = lookml!({
            "view": { "name": "orders" },
            "includes": ["*.view"],
        });
        assert_eq!(obj.len(), 2);
        let view = obj.get("view").and_then(Value::as_object).unwrap();
        assert_eq!(view.get("name"), Some(&Value::from("orders")));
    }
}
