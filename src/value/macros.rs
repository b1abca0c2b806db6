//! Constructor macros for [`Value`](crate::value::Value) literals.
//!
//! The macros accept any expression convertible into a `Value` via [`From`],
//! so numeric, boolean, and text literals nest naturally.

/// Builds a [`Value::Seq`](crate::value::Value::Seq) from element expressions.
///
/// # Examples
///
/// ```rust
/// use hanuman::seq;
/// use hanuman::value::Value;
///
/// let numbers = seq![1, 2, 3];
/// assert_eq!(numbers.as_sequence().map(<[Value]>::len), Some(3));
///
/// let nested = seq![seq![1, 2], seq![3, 4]];
/// assert!(nested.is_sequence());
///
/// let empty = seq![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::value::Value::Seq(::std::vec::Vec::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::value::Value::Seq(::std::vec![
            $($crate::value::Value::from($element)),+
        ])
    };
}

/// Builds a [`Value::Map`](crate::value::Value::Map) from `key => value`
/// pairs.
///
/// # Examples
///
/// ```rust
/// use hanuman::mapping;
///
/// let user = mapping! {
///     "name" => mapping! { "first" => "Joe", "last" => "Brown" },
///     "age" => 26,
/// };
/// assert!(user.is_mapping());
///
/// let empty = mapping! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::value::Value::Map($crate::value::Mapping::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut entries = $crate::value::Mapping::new();
        $(
            entries.insert(
                ::std::string::String::from($key),
                $crate::value::Value::from($value),
            );
        )+
        $crate::value::Value::Map(entries)
    }};
}
