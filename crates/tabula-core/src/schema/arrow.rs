//! Conversion into Arrow data types.
//!
//! Arrow needs concrete parameters where the catalog types only name a family:
//! timestamps use microsecond precision and decimals use
//! [`DECIMAL_PRECISION`] / [`DECIMAL_SCALE`]. Maps are converted through their
//! list-of-records form.

use super::{PrimitiveType, Schema, Type};

use ::arrow::datatypes::{DataType, Field as ArrowField, Fields, Schema as ArrowSchema, TimeUnit};
use std::sync::Arc;

/// Precision used for `decimal` columns.
pub const DECIMAL_PRECISION: u8 = 38;

/// Scale used for `decimal` columns.
pub const DECIMAL_SCALE: i8 = 10;

impl PrimitiveType {
    pub fn to_arrow(self) -> DataType {
        match self {
            PrimitiveType::Int8 => DataType::Int8,
            PrimitiveType::Int16 => DataType::Int16,
            PrimitiveType::Int32 => DataType::Int32,
            PrimitiveType::Int64 => DataType::Int64,
            PrimitiveType::Float32 => DataType::Float32,
            PrimitiveType::Float64 => DataType::Float64,
            PrimitiveType::Utf8 => DataType::Utf8,
            PrimitiveType::Boolean => DataType::Boolean,
            PrimitiveType::Date => DataType::Date32,
            PrimitiveType::Datetime => DataType::Timestamp(TimeUnit::Microsecond, None),
            PrimitiveType::Decimal => DataType::Decimal128(DECIMAL_PRECISION, DECIMAL_SCALE),
        }
    }
}

impl Type {
    pub fn to_arrow(&self) -> DataType {
        match self {
            Type::Primitive(ty) => ty.to_arrow(),
            Type::List(item) => DataType::List(Arc::new(ArrowField::new(
                "item",
                item.to_arrow(),
                true,
            ))),
            Type::Record(fields) => DataType::Struct(
                fields
                    .iter()
                    .map(|field| ArrowField::new(&field.name, field.ty.to_arrow(), true))
                    .collect::<Fields>(),
            ),
            Type::KeyValueList(..) => self.to_list_of_records().to_arrow(),
        }
    }
}

impl Schema {
    /// Converts to an Arrow schema with every column nullable.
    pub fn to_arrow(&self) -> ArrowSchema {
        ArrowSchema::new(
            self.iter()
                .map(|(name, ty)| ArrowField::new(name, ty.to_arrow(), true))
                .collect::<Vec<_>>(),
        )
    }
}
