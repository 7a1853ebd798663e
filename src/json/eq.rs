use crate::json::{Array, Object, Value};

type Stack<'a> = Vec<(&'a Value, &'a Value)>;

/// Compares two value trees without recursion.
///
/// Container children are queued as pairs on an explicit stack, so the
/// depth of the trees only costs heap space.
pub fn values(left: &Value, right: &Value) -> bool {
    drain(vec![(left, right)])
}

pub fn arrays(left: &Array, right: &Array) -> bool {
    let mut stack = Vec::new();
    push_array(left, right, &mut stack) && drain(stack)
}

pub fn objects(left: &Object, right: &Object) -> bool {
    let mut stack = Vec::new();
    push_object(left, right, &mut stack) && drain(stack)
}

fn drain(mut stack: Stack) -> bool {
    while let Some((left, right)) = stack.pop() {
        let equal = match (left, right) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(left), Value::Bool(right)) => left == right,
            (Value::Number(left), Value::Number(right)) => left == right,
            (Value::String(left), Value::String(right)) => left == right,
            (Value::Array(left), Value::Array(right)) => push_array(left, right, &mut stack),
            (Value::Object(left), Value::Object(right)) => push_object(left, right, &mut stack),
            _ => false,
        };
        if !equal {
            return false;
        }
    }
    true
}

fn push_array<'a>(left: &'a Array, right: &'a Array, stack: &mut Stack<'a>) -> bool {
    if left.len() != right.len() {
        return false;
    }
    stack.extend(left.iter().zip(right.iter()));
    true
}

// Both maps iterate in key order, so equal key sets line up pairwise.
fn push_object<'a>(left: &'a Object, right: &'a Object, stack: &mut Stack<'a>) -> bool {
    if left.len() != right.len() {
        return false;
    }
    for ((left_key, left), (right_key, right)) in left.iter().zip(right.iter()) {
        if left_key != right_key {
            return false;
        }
        stack.push((left, right));
    }
    true
}
