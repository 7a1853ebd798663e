use std::mem;

use crate::json::Value;

/// Drops a value tree without recursion.
///
/// Containers are emptied onto an explicit stack, so each `Array` and
/// `Object` is dropped with no children left in it.
pub fn safely(value: Value) {
    match value {
        Value::Array(_) | Value::Object(_) => {}
        _ => return,
    }

    let mut stack = Vec::new();
    stack.push(value);
    while let Some(value) = stack.pop() {
        match value {
            Value::Array(mut array) => {
                stack.extend(mem::take(&mut *array));
            }
            Value::Object(mut object) => {
                stack.extend(mem::take(&mut *object).into_iter().map(|(_, v)| v));
            }
            _ => {}
        }
    }
}
