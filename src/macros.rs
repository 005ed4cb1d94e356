/// Builds a [`Node`](crate::Node) from JSON-like literal syntax.
///
/// Mapping entries keep the order they are written in.
///
/// ```rust
/// use toon_encoder::{encode, node};
///
/// let tree = node!({
///     "framework": "react",
///     "dirs": ["src/components", "app"],
///     "stats": { "totalComponents": 12 }
/// });
///
/// assert_eq!(
///     encode(&tree),
///     "framework: react\ndirs[2]: src/components,app\nstats:\n  totalComponents: 12"
/// );
/// ```
#[macro_export]
macro_rules! node {
    // Handle null
    (null) => {
        $crate::Node::NULL
    };

    // Handle true
    (true) => {
        $crate::Node::from(true)
    };

    // Handle false
    (false) => {
        $crate::Node::from(false)
    };

    // Handle empty sequence
    ([]) => {
        $crate::Node::Sequence(vec![])
    };

    // Handle non-empty sequence
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Node::Sequence(vec![$($crate::node!($elem)),*])
    };

    // Handle empty mapping
    ({}) => {
        $crate::Node::Mapping($crate::Mapping::new())
    };

    // Handle non-empty mapping
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut mapping = $crate::Mapping::new();
        $(
            mapping.insert($key, $crate::node!($value));
        )*
        $crate::Node::Mapping(mapping)
    }};

    // Any other expression convertible into a node
    ($other:expr) => {
        $crate::Node::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Mapping, Node, Number, Scalar};

    #[test]
    fn test_node_macro_primitives() {
        assert_eq!(node!(null), Node::NULL);
        assert_eq!(node!(true), Node::from(true));
        assert_eq!(node!(false), Node::from(false));
        assert_eq!(node!(42), Node::Scalar(Scalar::Number(Number::Integer(42))));
        assert_eq!(node!(3.5), Node::Scalar(Scalar::Number(Number::Float(3.5))));
        assert_eq!(node!("hello"), Node::from("hello"));
    }

    #[test]
    fn test_node_macro_sequences() {
        assert_eq!(node!([]), Node::Sequence(vec![]));

        let seq = node!([1, "two", null, [3]]);
        assert_eq!(
            seq,
            Node::Sequence(vec![
                Node::from(1),
                Node::from("two"),
                Node::NULL,
                Node::Sequence(vec![Node::from(3)]),
            ])
        );
    }

    #[test]
    fn test_node_macro_mappings() {
        assert_eq!(node!({}), Node::Mapping(Mapping::new()));

        let obj = node!({
            "z": "last letter",
            "a": 30,
            "m": { "nested": true }
        });

        let map = obj.as_mapping().expect("mapping");
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(map.get("a"), Some(&Node::from(30)));
        assert_eq!(
            map.get("m").and_then(Node::as_mapping).map(Mapping::len),
            Some(1)
        );
    }

    #[test]
    fn test_node_macro_expressions() {
        let name = String::from("Card");
        let count = 3usize;
        let tree = node!({ "name": name, "count": count });
        assert_eq!(
            tree.as_mapping().and_then(|m| m.get("count")).and_then(Node::as_i64),
            Some(3)
        );
    }
}
