//! Serde integration (Optional)

use std::fmt;

use serde1::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde1::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::json::{Array, Number, Object, Value};

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::I64(n) => serializer.serialize_i64(n),
            Number::U64(n) => serializer.serialize_u64(n),
            Number::F64(n) => serializer.serialize_f64(n),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(array) => {
                let mut seq = serializer.serialize_seq(Some(array.len()))?;
                for e in array {
                    seq.serialize_element(e)?;
                }
                seq.end()
            }
            Value::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (k, e) in object {
                    map.serialize_entry(k, e)?;
                }
                map.end()
            }
        }
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON number")
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Number, E> {
        Ok(Number::I64(n))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Number, E> {
        Ok(Number::U64(n))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<Number, E> {
        Number::from_f64(n).ok_or_else(|| E::custom("non-finite number"))
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any valid JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Value, E> {
        Ok(Value::Number(Number::I64(n)))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Value, E> {
        Ok(Value::Number(Number::U64(n)))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<Value, E> {
        NumberVisitor.visit_f64(n).map(Value::Number)
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_owned()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut array = Array::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(e) = seq.next_element()? {
            array.push(e);
        }
        Ok(Value::Array(array))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut object = Object::new();
        while let Some((k, v)) = map.next_entry::<String, Value>()? {
            object.insert(k, v);
        }
        Ok(Value::Object(object))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Value> for Value {
    /// Integers keep their form: non-negative ones become `U64`, negative
    /// ones `I64`.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(n) = n.as_u64() {
                    Value::Number(Number::U64(n))
                } else if let Some(n) = n.as_i64() {
                    Value::Number(Number::I64(n))
                } else {
                    n.as_f64().map_or(Value::Null, Value::from)
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(vec) => vec.into_iter().collect(),
            serde_json::Value::Object(map) => map.into_iter().collect(),
        }
    }
}

#[cfg(feature = "serde_json")]
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(Number::I64(n)) => serde_json::Value::from(n),
            Value::Number(Number::U64(n)) => serde_json::Value::from(n),
            Value::Number(Number::F64(n)) => serde_json::Number::from_f64(n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(array) => {
                serde_json::Value::Array(array.into_iter().map(Into::into).collect())
            }
            Value::Object(object) => serde_json::Value::Object(
                object.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_keeps_representation() {
        let value: Value = vec![
            ("i", Value::from(-1i64)),
            ("u", Value::from(1u64)),
            ("f", Value::from(1.0f64)),
        ]
        .into_iter()
        .collect();

        let actual = serde_json::to_string(&value).unwrap();
        assert_eq!(actual, r#"{"f":1.0,"i":-1,"u":1}"#);
    }

    #[test]
    fn deserialize_picks_variant() {
        let value: Value = serde_json::from_str(r#"[-1, 1, 1.5, null, "x", {"k": true}]"#).unwrap();
        let array = value.as_array().unwrap();
        assert!(matches!(array[0], Value::Number(Number::I64(-1))));
        assert!(matches!(array[1], Value::Number(Number::U64(1))));
        assert!(matches!(array[2], Value::Number(Number::F64(_))));
        assert!(array[3].is_null());
        assert_eq!(array[4], "x");
        assert_eq!(array[5].get("k"), Some(&Value::Bool(true)));
    }

    #[test]
    fn number_rejects_other_kinds() {
        assert!(serde_json::from_str::<Number>("\"1\"").is_err());
        assert_eq!(serde_json::from_str::<Number>("7").unwrap(), Number::U64(7));
    }

    #[test]
    fn non_finite_is_rejected() {
        use serde1::de::value::Error as ValueError;
        use serde1::de::IntoDeserializer;

        for &n in &[f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let value: Result<Value, ValueError> = Value::deserialize(n.into_deserializer());
            assert!(value.is_err());
            let number: Result<Number, ValueError> = Number::deserialize(n.into_deserializer());
            assert!(number.is_err());
        }

        let value: Result<Value, ValueError> = Value::deserialize(0.5f64.into_deserializer());
        assert_eq!(value.unwrap(), Value::from(0.5f64));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn serde_json_value_conversions() {
        let original = serde_json::json!({"id": 42, "neg": -3, "pi": 3.25, "tags": ["x"]});
        let value = Value::from(original.clone());
        assert!(matches!(value.get("id"), Some(Value::Number(Number::U64(42)))));
        assert!(matches!(value.get("neg"), Some(Value::Number(Number::I64(-3)))));
        assert_eq!(serde_json::Value::from(value), original);
    }
}
