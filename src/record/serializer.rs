//! Serde serializer producing a [`Row`] straight from a record.
//!
//! Top-level structs and maps become columns. Each field is converted to a
//! [`Value`] without going through a JSON tree, so floats and byte strings
//! keep their meaning: non-finite floats are an error and `serialize_bytes`
//! becomes a blob. Nested sequences, maps and data-carrying enum variants are
//! stored as their JSON text.

use std::fmt::Display;

use serde::ser::{self, Serialize, Serializer as _};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::Row;
use crate::value::Value;

type JsonSerializer = serde_json::value::Serializer;

/// Failure while serializing one record.
#[derive(Debug, Error)]
pub(crate) enum RowError {
    #[error("field {column} is not a finite number")]
    NonFiniteFloat { column: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ser::Error for RowError {
    fn custom<T: Display>(msg: T) -> Self {
        RowError::Json(<serde_json::Error as ser::Error>::custom(msg))
    }
}

fn json_text(value: JsonValue) -> Value {
    Value::Text(value.to_string())
}

fn map_key(key: JsonValue) -> Result<String, RowError> {
    match key {
        JsonValue::String(s) => Ok(s),
        JsonValue::Number(n) => Ok(n.to_string()),
        JsonValue::Bool(b) => Ok(b.to_string()),
        other => Err(ser::Error::custom(format!(
            "map key must be a string, found {other}"
        ))),
    }
}

/// Serializes a whole record. Yields `None` when the record is not a struct
/// or map.
pub(crate) struct RowSerializer;

/// Collects the columns of a struct or map record.
pub(crate) struct RowBuilder {
    columns: Vec<String>,
    values: Vec<Value>,
    pending_key: Option<String>,
}

impl RowBuilder {
    fn with_capacity(len: usize) -> Self {
        RowBuilder {
            columns: Vec::with_capacity(len),
            values: Vec::with_capacity(len),
            pending_key: None,
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, column: String, value: &T) -> Result<(), RowError> {
        let value = value.serialize(FieldSerializer { column: &column })?;
        self.columns.push(column);
        self.values.push(value);
        Ok(())
    }

    fn finish(self) -> Result<Option<Row>, RowError> {
        Ok(Some(Row {
            columns: self.columns,
            values: self.values,
        }))
    }
}

/// Swallows the contents of a top-level value that cannot be a row.
pub(crate) struct Ignored;

impl ser::Serializer for RowSerializer {
    type Ok = Option<Row>;
    type Error = RowError;

    type SerializeSeq = Ignored;
    type SerializeTuple = Ignored;
    type SerializeTupleStruct = Ignored;
    type SerializeTupleVariant = Ignored;
    type SerializeMap = RowBuilder;
    type SerializeStruct = RowBuilder;
    type SerializeStructVariant = Ignored;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_i8(self, _v: i8) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_i16(self, _v: i16) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_i32(self, _v: i32) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_u8(self, _v: u8) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_u16(self, _v: u16) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_u32(self, _v: u32) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_str(self, _v: &str) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Self::Ok, Self::Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Ok(Ignored)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        Ok(Ignored)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Ok(Ignored)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Ok(Ignored)
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Ok(RowBuilder::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(RowBuilder::with_capacity(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Ok(Ignored)
    }
}

impl ser::SerializeStruct for RowBuilder {
    type Ok = Option<Row>;
    type Error = RowError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Self::Error> {
        self.push(key.to_string(), value)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        self.finish()
    }
}

impl ser::SerializeMap for RowBuilder {
    type Ok = Option<Row>;
    type Error = RowError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), Self::Error> {
        self.pending_key = Some(map_key(serde_json::to_value(key)?)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        let column = self
            .pending_key
            .take()
            .ok_or_else(|| <RowError as ser::Error>::custom("map value without a key"))?;
        self.push(column, value)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        self.finish()
    }
}

impl ser::SerializeSeq for Ignored {
    type Ok = Option<Row>;
    type Error = RowError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<(), Self::Error> {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }
}

impl ser::SerializeTuple for Ignored {
    type Ok = Option<Row>;
    type Error = RowError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<(), Self::Error> {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }
}

impl ser::SerializeTupleStruct for Ignored {
    type Ok = Option<Row>;
    type Error = RowError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<(), Self::Error> {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }
}

impl ser::SerializeTupleVariant for Ignored {
    type Ok = Option<Row>;
    type Error = RowError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<(), Self::Error> {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }
}

impl ser::SerializeStructVariant for Ignored {
    type Ok = Option<Row>;
    type Error = RowError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }
}

/// Converts one column value.
struct FieldSerializer<'a> {
    column: &'a str,
}

impl FieldSerializer<'_> {
    fn integer<I>(v: I) -> Value
    where
        I: TryInto<i64> + Display + Copy,
    {
        v.try_into()
            .map_or_else(|_| Value::Text(v.to_string()), Value::Integer)
    }
}

impl ser::Serializer for FieldSerializer<'_> {
    type Ok = Value;
    type Error = RowError;

    type SerializeSeq = Nested<<JsonSerializer as ser::Serializer>::SerializeSeq>;
    type SerializeTuple = Nested<<JsonSerializer as ser::Serializer>::SerializeTuple>;
    type SerializeTupleStruct = Nested<<JsonSerializer as ser::Serializer>::SerializeTupleStruct>;
    type SerializeTupleVariant = Nested<<JsonSerializer as ser::Serializer>::SerializeTupleVariant>;
    type SerializeMap = Nested<<JsonSerializer as ser::Serializer>::SerializeMap>;
    type SerializeStruct = Nested<<JsonSerializer as ser::Serializer>::SerializeStruct>;
    type SerializeStructVariant =
        Nested<<JsonSerializer as ser::Serializer>::SerializeStructVariant>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Integer(v.into()))
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Integer(v.into()))
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Integer(v.into()))
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Integer(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok, Self::Error> {
        Ok(Self::integer(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Integer(v.into()))
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Integer(v.into()))
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Integer(v.into()))
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok, Self::Error> {
        Ok(Self::integer(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok, Self::Error> {
        Ok(Self::integer(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok, Self::Error> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok, Self::Error> {
        if !v.is_finite() {
            return Err(RowError::NonFiniteFloat {
                column: self.column.to_string(),
            });
        }
        Ok(Value::Real(v))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Blob(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Null)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Self::Ok, Self::Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Text(variant.to_string()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        let json =
            serde_json::value::Serializer.serialize_newtype_variant(name, variant_index, variant, value)?;
        Ok(json_text(json))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Ok(Nested(serde_json::value::Serializer.serialize_seq(len)?))
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        Ok(Nested(serde_json::value::Serializer.serialize_tuple(len)?))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Ok(Nested(serde_json::value::Serializer.serialize_tuple_struct(name, len)?))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Ok(Nested(serde_json::value::Serializer.serialize_tuple_variant(
            name,
            variant_index,
            variant,
            len,
        )?))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Ok(Nested(serde_json::value::Serializer.serialize_map(len)?))
    }

    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(Nested(serde_json::value::Serializer.serialize_struct(name, len)?))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Ok(Nested(serde_json::value::Serializer.serialize_struct_variant(
            name,
            variant_index,
            variant,
            len,
        )?))
    }
}

/// A nested field value, built as JSON and stored as its text.
pub(crate) struct Nested<S>(S);

impl<S> ser::SerializeSeq for Nested<S>
where
    S: ser::SerializeSeq<Ok = JsonValue, Error = serde_json::Error>,
{
    type Ok = Value;
    type Error = RowError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        Ok(self.0.serialize_element(value)?)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(json_text(self.0.end()?))
    }
}

impl<S> ser::SerializeTuple for Nested<S>
where
    S: ser::SerializeTuple<Ok = JsonValue, Error = serde_json::Error>,
{
    type Ok = Value;
    type Error = RowError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        Ok(self.0.serialize_element(value)?)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(json_text(self.0.end()?))
    }
}

impl<S> ser::SerializeTupleStruct for Nested<S>
where
    S: ser::SerializeTupleStruct<Ok = JsonValue, Error = serde_json::Error>,
{
    type Ok = Value;
    type Error = RowError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        Ok(self.0.serialize_field(value)?)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(json_text(self.0.end()?))
    }
}

impl<S> ser::SerializeTupleVariant for Nested<S>
where
    S: ser::SerializeTupleVariant<Ok = JsonValue, Error = serde_json::Error>,
{
    type Ok = Value;
    type Error = RowError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        Ok(self.0.serialize_field(value)?)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(json_text(self.0.end()?))
    }
}

impl<S> ser::SerializeMap for Nested<S>
where
    S: ser::SerializeMap<Ok = JsonValue, Error = serde_json::Error>,
{
    type Ok = Value;
    type Error = RowError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), Self::Error> {
        Ok(self.0.serialize_key(key)?)
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        Ok(self.0.serialize_value(value)?)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(json_text(self.0.end()?))
    }
}

impl<S> ser::SerializeStruct for Nested<S>
where
    S: ser::SerializeStruct<Ok = JsonValue, Error = serde_json::Error>,
{
    type Ok = Value;
    type Error = RowError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Self::Error> {
        Ok(self.0.serialize_field(key, value)?)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(json_text(self.0.end()?))
    }
}

impl<S> ser::SerializeStructVariant for Nested<S>
where
    S: ser::SerializeStructVariant<Ok = JsonValue, Error = serde_json::Error>,
{
    type Ok = Value;
    type Error = RowError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Self::Error> {
        Ok(self.0.serialize_field(key, value)?)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(json_text(self.0.end()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    fn row_of<T: Serialize>(value: &T) -> Option<Row> {
        value.serialize(RowSerializer).unwrap()
    }

    fn single_value<T: Serialize>(value: T) -> Result<Value, RowError> {
        value.serialize(FieldSerializer { column: "v" })
    }

    #[derive(Serialize)]
    enum Shape {
        Circle,
        Square(u32),
        Rect { w: u32, h: u32 },
    }

    #[test]
    fn test_scalar_fields() {
        assert_eq!(single_value(true).unwrap(), Value::Bool(true));
        assert_eq!(single_value(-7i8).unwrap(), Value::Integer(-7));
        assert_eq!(single_value(7u32).unwrap(), Value::Integer(7));
        assert_eq!(single_value(1.5f32).unwrap(), Value::Real(1.5));
        assert_eq!(single_value('x').unwrap(), Value::Text("x".into()));
        assert_eq!(single_value(None::<i64>).unwrap(), Value::Null);
        assert_eq!(single_value(Some("a")).unwrap(), Value::Text("a".into()));
        assert_eq!(single_value(()).unwrap(), Value::Null);
    }

    #[test]
    fn test_integers_outside_i64_are_text() {
        assert_eq!(
            single_value(u64::MAX).unwrap(),
            Value::Text("18446744073709551615".into())
        );
        assert_eq!(
            single_value(i64::MAX as u64).unwrap(),
            Value::Integer(i64::MAX)
        );
        assert_eq!(
            single_value(i128::MIN).unwrap(),
            Value::Text(i128::MIN.to_string())
        );
        assert_eq!(single_value(42u128).unwrap(), Value::Integer(42));
    }

    #[test]
    fn test_non_finite_floats_are_rejected() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = single_value(v).unwrap_err();
            assert!(matches!(err, RowError::NonFiniteFloat { ref column } if column == "v"));
        }
        assert!(single_value(f32::NAN).is_err());
        assert!(single_value(Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_bytes_are_blob() {
        let bytes = serde_bytes::Bytes::new(&[0, 255]);
        assert_eq!(single_value(bytes).unwrap(), Value::Blob(vec![0, 255]));
    }

    #[test]
    fn test_nested_values_are_json_text() {
        assert_eq!(
            single_value(vec!["a", "b"]).unwrap(),
            Value::Text(r#"["a","b"]"#.into())
        );
        assert_eq!(
            single_value(vec![0u8, 255]).unwrap(),
            Value::Text("[0,255]".into())
        );
        let map: BTreeMap<&str, i32> = [("k", 1)].into_iter().collect();
        assert_eq!(single_value(map).unwrap(), Value::Text(r#"{"k":1}"#.into()));
        assert_eq!(single_value((1, "x")).unwrap(), Value::Text(r#"[1,"x"]"#.into()));
    }

    #[test]
    fn test_enum_fields() {
        assert_eq!(single_value(Shape::Circle).unwrap(), Value::Text("Circle".into()));
        assert_eq!(
            single_value(Shape::Square(2)).unwrap(),
            Value::Text(r#"{"Square":2}"#.into())
        );
        assert_eq!(
            single_value(Shape::Rect { w: 1, h: 2 }).unwrap(),
            Value::Text(r#"{"Rect":{"w":1,"h":2}}"#.into())
        );
    }

    #[test]
    fn test_only_structs_and_maps_are_rows() {
        assert!(row_of(&42i64).is_none());
        assert!(row_of(&"text").is_none());
        assert!(row_of(&vec![1, 2]).is_none());
        assert!(row_of(&(1, 2)).is_none());
        assert!(row_of(&Shape::Circle).is_none());
        assert!(row_of(&Shape::Rect { w: 1, h: 2 }).is_none());
        assert!(row_of(&None::<BTreeMap<String, i64>>).is_none());
    }

    #[test]
    fn test_map_keys_become_columns() {
        let map: BTreeMap<i32, &str> = [(2, "b"), (1, "a")].into_iter().collect();
        let row = row_of(&map).unwrap();
        assert_eq!(row.columns(), ["1", "2"]);
        assert_eq!(row.values(), [Value::Text("a".into()), Value::Text("b".into())]);
    }

    #[test]
    fn test_non_finite_float_in_row_names_column() {
        #[derive(Serialize)]
        struct Reading {
            id: i64,
            v: f64,
        }

        let err = Reading { id: 1, v: f64::NAN }
            .serialize(RowSerializer)
            .unwrap_err();
        assert_eq!(err.to_string(), "field v is not a finite number");
    }
}
