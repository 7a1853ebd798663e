use unijson::json::{Array, Object, Value};

fn nested(depth: usize) -> Value {
    nested_with_leaf(depth, Value::Null)
}

fn nested_with_leaf(depth: usize, leaf: Value) -> Value {
    let mut value = leaf;
    for i in 0..depth {
        if i % 2 == 0 {
            let mut array = Array::new();
            array.push(value);
            value = Value::Array(array);
        } else {
            let mut object = Object::new();
            object.insert("x".to_owned(), value);
            value = Value::Object(object);
        }
    }
    value
}

#[test]
fn test_drop_deeply_nested() {
    let value = nested(100_000);
    drop(value);
}

#[test]
fn test_into_iter_deeply_nested() {
    let value = nested(100_001);
    if let Value::Array(array) = value {
        let children: Vec<Value> = array.into_iter().collect();
        assert_eq!(children.len(), 1);
    } else {
        panic!("expected array at the top");
    }
}

#[test]
fn test_compare_nested() {
    let a = nested(100_000);
    let b = nested(100_000);
    let c = nested(100_001);
    assert!(a == b);
    assert!(a != c);
    assert!(c != a);
}

#[test]
fn test_compare_nested_leaf() {
    let a = nested_with_leaf(100_000, Value::from(7u64));
    let b = nested_with_leaf(100_000, Value::from(7.0f64));
    let c = nested_with_leaf(100_000, Value::from(8i64));
    assert!(a == b);
    assert!(b == a);
    assert!(a != c);
}
