//! Path-tracking access to a parsed JSON value.
//!
//! Every accessor reports failures with the full [`FieldPath`] of the field
//! it was reading. Explicit `null` is treated the same as an absent key.

use crate::enums::decode_tag;
use figdoc_core::{DecodeError, FieldPath, Result, Tagged, ValueKind};
use serde_json::{Map, Value};

/// A JSON value and the path it was reached by.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    value: &'a Value,
    path: FieldPath,
}

impl<'a> Field<'a> {
    pub fn new(value: &'a Value, path: FieldPath) -> Self {
        Self { value, path }
    }

    /// A field at the payload root.
    pub fn root(value: &'a Value) -> Self {
        Self::new(value, FieldPath::root())
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn object(&self) -> Result<Object<'a>> {
        match self.value {
            Value::Object(map) => Ok(Object {
                map,
                path: self.path.clone(),
            }),
            _ => Err(self.mismatch(ValueKind::Object)),
        }
    }

    pub fn as_str(&self) -> Result<&'a str> {
        self.value
            .as_str()
            .ok_or_else(|| self.mismatch(ValueKind::String))
    }

    pub fn as_bool(&self) -> Result<bool> {
        self.value
            .as_bool()
            .ok_or_else(|| self.mismatch(ValueKind::Bool))
    }

    pub fn as_f64(&self) -> Result<f64> {
        self.value
            .as_f64()
            .ok_or_else(|| self.mismatch(ValueKind::Number))
    }

    pub fn as_f32(&self) -> Result<f32> {
        self.as_f64().map(|v| v as f32)
    }

    /// An integer. Floats with no fractional part are accepted.
    pub fn as_i64(&self) -> Result<i64> {
        if let Some(v) = self.value.as_i64() {
            return Ok(v);
        }
        match self.value.as_f64() {
            Some(v) if v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 => {
                Ok(v as i64)
            }
            _ => Err(self.mismatch(ValueKind::Integer)),
        }
    }

    pub fn as_u32(&self) -> Result<u32> {
        let v = self.as_i64()?;
        u32::try_from(v).map_err(|_| self.mismatch(ValueKind::Integer))
    }

    /// Decode this field as a tag of the closed set `T`.
    pub fn tag<T: Tagged>(&self) -> Result<T> {
        decode_tag(self)
    }

    /// Elements of an array, each with its indexed path.
    pub fn items(&self) -> Result<impl Iterator<Item = Field<'a>> + '_> {
        match self.value {
            Value::Array(items) => Ok(items
                .iter()
                .enumerate()
                .map(move |(index, value)| Field::new(value, self.path.index(index)))),
            _ => Err(self.mismatch(ValueKind::Array)),
        }
    }

    /// Decode every element of an array, stopping at the first failure.
    pub fn list<T>(&self, decode: impl FnMut(Field<'a>) -> Result<T>) -> Result<Vec<T>> {
        self.items()?.map(decode).collect()
    }

    pub fn mismatch(&self, expected: ValueKind) -> DecodeError {
        DecodeError::mismatch(self.path.clone(), expected)
    }

    pub fn malformed(&self, reason: impl Into<String>) -> DecodeError {
        DecodeError::malformed(self.path.clone(), reason)
    }
}

/// A JSON object and the path it was reached by.
#[derive(Debug, Clone)]
pub struct Object<'a> {
    map: &'a Map<String, Value>,
    path: FieldPath,
}

impl<'a> Object<'a> {
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The field under `key`, or `None` when absent or `null`.
    pub fn get(&self, key: &str) -> Option<Field<'a>> {
        match self.map.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(Field::new(value, self.path.key(key))),
        }
    }

    pub fn required(&self, key: &str) -> Result<Field<'a>> {
        self.get(key)
            .ok_or_else(|| DecodeError::missing(self.path.key(key)))
    }

    /// Every entry, in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, Field<'a>)> + '_ {
        self.map
            .iter()
            .map(move |(key, value)| (key.as_str(), Field::new(value, self.path.key(key.as_str()))))
    }

    pub fn object(&self, key: &str) -> Result<Object<'a>> {
        self.required(key)?.object()
    }

    pub fn str(&self, key: &str) -> Result<&'a str> {
        self.required(key)?.as_str()
    }

    pub fn string(&self, key: &str) -> Result<String> {
        self.str(key).map(str::to_string)
    }

    pub fn opt_string(&self, key: &str) -> Result<Option<String>> {
        self.get(key)
            .map(|field| field.as_str().map(str::to_string))
            .transpose()
    }

    pub fn bool(&self, key: &str) -> Result<bool> {
        self.required(key)?.as_bool()
    }

    pub fn opt_bool(&self, key: &str) -> Result<Option<bool>> {
        self.get(key).map(|field| field.as_bool()).transpose()
    }

    pub fn bool_or(&self, key: &str, default: bool) -> Result<bool> {
        Ok(self.opt_bool(key)?.unwrap_or(default))
    }

    pub fn f64(&self, key: &str) -> Result<f64> {
        self.required(key)?.as_f64()
    }

    pub fn opt_f64(&self, key: &str) -> Result<Option<f64>> {
        self.get(key).map(|field| field.as_f64()).transpose()
    }

    pub fn f64_or(&self, key: &str, default: f64) -> Result<f64> {
        Ok(self.opt_f64(key)?.unwrap_or(default))
    }

    pub fn f32(&self, key: &str) -> Result<f32> {
        self.required(key)?.as_f32()
    }

    pub fn f32_or(&self, key: &str, default: f32) -> Result<f32> {
        self.get(key)
            .map(|field| field.as_f32())
            .transpose()
            .map(|v| v.unwrap_or(default))
    }

    pub fn i64(&self, key: &str) -> Result<i64> {
        self.required(key)?.as_i64()
    }

    pub fn u32(&self, key: &str) -> Result<u32> {
        self.required(key)?.as_u32()
    }

    pub fn tag<T: Tagged>(&self, key: &str) -> Result<T> {
        self.required(key)?.tag()
    }

    pub fn opt_tag<T: Tagged>(&self, key: &str) -> Result<Option<T>> {
        self.get(key).map(|field| field.tag()).transpose()
    }

    pub fn tag_or<T: Tagged>(&self, key: &str, default: T) -> Result<T> {
        Ok(self.opt_tag(key)?.unwrap_or(default))
    }

    /// A required array, decoded element by element.
    pub fn list<T>(&self, key: &str, decode: impl FnMut(Field<'a>) -> Result<T>) -> Result<Vec<T>> {
        self.required(key)?.list(decode)
    }

    /// An optional array; absent decodes to an empty vector.
    pub fn list_or_empty<T>(
        &self,
        key: &str,
        decode: impl FnMut(Field<'a>) -> Result<T>,
    ) -> Result<Vec<T>> {
        Ok(self.opt_list(key, decode)?.unwrap_or_default())
    }

    pub fn opt_list<T>(
        &self,
        key: &str,
        decode: impl FnMut(Field<'a>) -> Result<T>,
    ) -> Result<Option<Vec<T>>> {
        self.get(key).map(|field| field.list(decode)).transpose()
    }
}
