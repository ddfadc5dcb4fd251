//! YAML output

use serde::Serialize;
use std::io::Write;

use crate::error::SpendlensResult;

/// Write a value as a YAML document
pub fn write_yaml<T, W>(value: &T, writer: &mut W) -> SpendlensResult<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    serde_yaml::to_writer(writer, value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpendlensError;
    use crate::models::MonthPeriod;
    use crate::reports::monthly_trends;
    use chrono::NaiveDate;

    #[test]
    fn test_trend_yaml() {
        let empty: Vec<crate::models::Transaction> = Vec::new();
        let trends = monthly_trends(&empty, 2, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        let mut out = Vec::new();
        write_yaml(&trends, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("monthLabel: Jan"));

        let parsed: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed[0]["period"].as_str(), Some("2023-12"));
        assert_eq!(MonthPeriod::parse("2023-12").unwrap().short_label(), "Dec");
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("not representable"))
        }
    }

    #[test]
    fn test_serializer_failure_is_yaml_error() {
        let mut out = Vec::new();
        let err = write_yaml(&Unserializable, &mut out).unwrap_err();
        assert!(matches!(err, SpendlensError::Yaml(_)));
        assert!(err.to_string().contains("not representable"));
    }
}
