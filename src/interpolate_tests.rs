#[cfg(test)]
mod tests {
    use crate::args::Arg;
    use crate::interpolate::{InterpolateError, interpolate};
    use crate::value::{SqlDateTime, SqlValue};
    use crate::valuer::{SqlValuer, ValuerError};
    use crate::where_;
    use pretty_assertions::assert_eq;
    use time::UtcOffset;
    use time::macros::datetime;

    #[test]
    fn interpolate_built_statement() {
        let mut sb = where_("name = ? AND state IN (?, ?)", ("I'm fine", 42_i64, 8_i64));
        sb.from("a");
        let (sql, args) = sb.build();
        assert_eq!(
            interpolate(&sql, &args).unwrap(),
            "select * from a where (name = E'I\\'m fine' AND state IN (42, 8))"
        );
    }

    #[test]
    fn dollar_quote_and_string_literals_are_kept() {
        let sql = "SELECT $1, '$1', $abc$$1$abc$ WHERE x = $2";
        let args = vec![Arg::from(1_i64), Arg::from("hi")];
        assert_eq!(
            interpolate(sql, &args).unwrap(),
            "SELECT 1, '$1', $abc$$1$abc$ WHERE x = E'hi'"
        );
    }

    #[test]
    fn scalar_literals() {
        let args = vec![
            Arg::Value(SqlValue::Null),
            Arg::from(true),
            Arg::from(1.5_f64),
            Arg::Value(SqlValue::Bytes(vec![0xde, 0xad])),
        ];
        assert_eq!(
            interpolate("$1 $2 $3 $4", &args).unwrap(),
            "NULL TRUE 1.5 E'\\\\xDEAD'::bytea"
        );
    }

    #[test]
    fn missing_arg_is_an_error() {
        let args = vec![Arg::from(1_i64)];
        assert_eq!(
            interpolate("a = $1 and b = $2", &args),
            Err(InterpolateError::MissingArgs(2))
        );
        assert_eq!(interpolate("$0", &args), Err(InterpolateError::MissingArgs(0)));
    }

    #[test]
    fn datetime_with_abbr_and_offset() {
        let dt = datetime!(2019-04-24 12:23:34.123456789)
            .assume_offset(UtcOffset::from_hms(8, 0, 0).unwrap());

        let abbr = vec![Arg::from(SqlDateTime::new(dt).with_tz_abbr("CST"))];
        assert_eq!(
            interpolate("SELECT $1", &abbr).unwrap(),
            "SELECT '2019-04-24 12:23:34.123457 CST'"
        );

        let offset = vec![Arg::from(dt)];
        assert_eq!(
            interpolate("SELECT $1", &offset).unwrap(),
            "SELECT '2019-04-24 12:23:34.123457 +08:00'"
        );
    }

    #[test]
    fn overflowing_placeholder_is_unsupported() {
        let args = vec![Arg::from(1_i64)];
        assert_eq!(
            interpolate("x = $99999999999999999999999", &args),
            Err(InterpolateError::UnsupportedArgs(
                "$99999999999999999999999".to_string()
            ))
        );
    }

    #[derive(Debug, Clone)]
    struct Failing;

    impl SqlValuer for Failing {
        fn value(&self) -> Result<SqlValue, ValuerError> {
            Err(ValuerError("boom".to_string()))
        }
    }

    #[test]
    fn valuer_error_propagates() {
        let valuer: Box<dyn SqlValuer> = Box::new(Failing);
        let args = vec![Arg::from(valuer)];
        assert_eq!(
            interpolate("x = $1", &args),
            Err(InterpolateError::Valuer(ValuerError("boom".to_string())))
        );
    }
}
