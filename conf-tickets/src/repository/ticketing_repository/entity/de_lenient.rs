//!
//! NocoDB returns `null` for empty cells, checkboxes as booleans or
//! 0/1 depending on the underlying database and timestamps either as
//! RFC 3339 or as `YYYY-MM-DD HH:MM:SS+HH:MM`
//!

pub mod string {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }
}

pub mod boolean {
    use serde::{de::Error, Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(false),
            Value::Bool(value) => Ok(value),
            Value::Number(number) => Ok(number.as_i64().is_some_and(|n| n != 0)),
            Value::String(string) => match string.as_str() {
                "" | "0" | "false" => Ok(false),
                "1" | "true" => Ok(true),
                other => Err(Error::custom(format!("invalid checkbox value: {other}"))),
            },
            other => Err(Error::custom(format!("invalid checkbox value: {other}"))),
        }
    }
}

pub mod datetime {
    use serde::{de::Error, Deserialize, Deserializer};
    use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        parse(&string).map_err(Error::custom)
    }

    pub fn parse(value: &str) -> Result<OffsetDateTime, time::error::Parse> {
        if let Ok(datetime) = OffsetDateTime::parse(value, &Rfc3339) {
            return Ok(datetime);
        }

        OffsetDateTime::parse(
            value,
            format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
            ),
        )
    }
}
