use serde_json::{Number, Value};
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteTypeInfo, SqliteValueRef};
use sqlx::{Decode, Type, TypeInfo, ValueRef};

/// 按实际存储类型读取的标量列
///
/// SQLite 不强制列类型, 库外写入的 number_of_bags 可能是 '' 或 3.5,
/// 这里原样转成 JSON: INTEGER/REAL 为数字, TEXT 为字符串, NULL 为 null。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredScalar(pub Value);

impl StoredScalar {
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<i64> for StoredScalar {
    fn from(n: i64) -> Self {
        Self(Value::from(n))
    }
}

impl Type<Sqlite> for StoredScalar {
    fn type_info() -> SqliteTypeInfo {
        <i64 as Type<Sqlite>>::type_info()
    }

    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}

impl<'r> Decode<'r, Sqlite> for StoredScalar {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(Self(Value::Null));
        }

        let kind = value.type_info().name().to_string();
        let json = match kind.as_str() {
            "INTEGER" => Value::from(<i64 as Decode<Sqlite>>::decode(value)?),
            "REAL" => Number::from_f64(<f64 as Decode<Sqlite>>::decode(value)?)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            "BLOB" => {
                let bytes = <Vec<u8> as Decode<Sqlite>>::decode(value)?;
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            }
            _ => Value::String(<String as Decode<Sqlite>>::decode(value)?),
        };
        Ok(Self(json))
    }
}
