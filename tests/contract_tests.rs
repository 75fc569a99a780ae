//! Contract tests for the public reading API.

use rowbind::{
    record, Limit, MemoryCursor, ReaderConfig, Record, RowBindError, RowReader, Timestamp,
};

record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct RowExample {
        pub flag: bool => "row_bool",
        pub flag_opt: Option<bool> => "row_bool_ptr",
        pub int: i64 => "row_int64",
        pub int_opt: Option<i64> => "row_int64_ptr",
        pub text: String => "row_string",
        pub text_opt: Option<String> => "row_string_ptr",
        pub datetime: Timestamp => "row_datetime",
    }
}

record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct User {
        pub id: i64 => "id",
        pub name: String => "name",
        pub created_at: Timestamp => "created_at",
    }
}

/// Reads a single-column, single-row result into a `RowExample`.
fn read_cell(column: &str, cell: Option<&str>) -> Result<RowExample, RowBindError> {
    let reader = RowReader::<RowExample>::new()?;
    let cursor = MemoryCursor::new([column]).with_row([cell]);
    let mut row = RowExample::default();
    assert!(reader.read_one(cursor, &mut row)?);
    Ok(row)
}

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
    Timestamp::from_ymd_hms(y, mo, d, h, mi, s).unwrap()
}

// =============================================================================
// Coercion Contracts
// =============================================================================

mod coercion_contracts {
    use super::*;

    #[test]
    fn test_bool_field() {
        for (input, expected) in [
            (Some("0"), false),
            (Some("1"), true),
            (Some("-1"), true),
            (Some("2"), true),
            (Some("string"), true),
            (Some(""), false),
            (None, false),
        ] {
            assert_eq!(read_cell("row_bool", input).unwrap().flag, expected, "{input:?}");
        }
    }

    #[test]
    fn test_optional_bool_field() {
        for (input, expected) in [
            (Some("0"), Some(false)),
            (Some("1"), Some(true)),
            (Some("string"), Some(true)),
            (Some(""), Some(false)),
            (None, None),
        ] {
            assert_eq!(read_cell("row_bool_ptr", input).unwrap().flag_opt, expected, "{input:?}");
        }
    }

    #[test]
    fn test_int64_field() {
        assert_eq!(read_cell("row_int64", Some("12345")).unwrap().int, 12345);
        assert_eq!(read_cell("row_int64", Some("01234")).unwrap().int, 1234);
        assert_eq!(read_cell("row_int64", Some("-1234")).unwrap().int, -1234);
        assert_eq!(read_cell("row_int64", None).unwrap().int, 0);
        assert!(matches!(
            read_cell("row_int64", Some("string")),
            Err(RowBindError::CoercionError { .. })
        ));
        assert!(matches!(
            read_cell("row_int64", Some("")),
            Err(RowBindError::CoercionError { .. })
        ));
    }

    #[test]
    fn test_optional_int64_field() {
        assert_eq!(read_cell("row_int64_ptr", Some("01234")).unwrap().int_opt, Some(1234));
        assert_eq!(read_cell("row_int64_ptr", None).unwrap().int_opt, None);
        assert!(read_cell("row_int64_ptr", Some("string")).is_err());
    }

    #[test]
    fn test_string_fields() {
        for input in ["12345", "01234", "-1234", "string", ""] {
            assert_eq!(read_cell("row_string", Some(input)).unwrap().text, input);
            assert_eq!(
                read_cell("row_string_ptr", Some(input)).unwrap().text_opt.as_deref(),
                Some(input)
            );
        }
        assert_eq!(read_cell("row_string", None).unwrap().text, "");
        assert_eq!(read_cell("row_string_ptr", None).unwrap().text_opt, None);
    }

    #[test]
    fn test_datetime_field() {
        let read = |s| read_cell("row_datetime", s).map(|r| r.datetime);

        assert_eq!(read(Some("0000-00-00 00:00:00")).unwrap(), ts(1, 1, 1, 0, 0, 0));
        assert_eq!(read(Some("0001-01-01 00:00:00")).unwrap(), ts(1, 1, 1, 0, 0, 0));
        assert_eq!(read(Some("2001-02-03 04:05:06")).unwrap(), ts(2001, 2, 3, 4, 5, 6));
        assert_eq!(read(Some("9999-12-31 23:59:59")).unwrap(), ts(9999, 12, 31, 23, 59, 59));
        assert_eq!(read(None).unwrap(), ts(1, 1, 1, 0, 0, 0));
        assert!(read(Some("0000-00-00 00:00:01")).is_err());
        assert!(read(Some("9999-99-99 99:99:99")).is_err());
    }
}

// =============================================================================
// Binding Contracts
// =============================================================================

mod binding_contracts {
    use super::*;

    #[test]
    fn test_reordered_and_missing_columns() {
        let cursor = MemoryCursor::new(["created_at", "id"])
            .with_row([Some("2001-02-03 04:05:06"), Some("1")])
            .with_row([Some("0000-00-00 00:00:00"), Some("2")]);

        let users = RowReader::<User>::new().unwrap().fetch_all(cursor).unwrap();

        assert_eq!(
            users,
            vec![
                User {
                    id: 1,
                    name: String::new(),
                    created_at: ts(2001, 2, 3, 4, 5, 6),
                },
                User {
                    id: 2,
                    name: String::new(),
                    created_at: Timestamp::min(),
                },
            ]
        );
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let forward = MemoryCursor::new(["id", "name", "created_at"])
            .with_row([Some("7"), Some("ann"), Some("2010-01-01 00:00:00")]);
        let backward = MemoryCursor::new(["created_at", "name", "id"])
            .with_row([Some("2010-01-01 00:00:00"), Some("ann"), Some("7")]);

        let reader = RowReader::<User>::new().unwrap();
        assert_eq!(reader.fetch_all(forward).unwrap(), reader.fetch_all(backward).unwrap());
    }

    #[test]
    fn test_extra_column_ignored() {
        let cursor = MemoryCursor::new(["id", "unknown", "name"])
            .with_row([Some("3"), Some("not a number"), Some("bob")]);

        let users = RowReader::<User>::new().unwrap().fetch_all(cursor).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 3);
        assert_eq!(users[0].name, "bob");
    }

    #[test]
    fn test_no_columns_is_bind_error() {
        let cursor = MemoryCursor::new(Vec::<String>::new());
        let err = RowReader::<User>::new().unwrap().fetch_all(cursor).unwrap_err();
        assert!(matches!(err, RowBindError::BindError(_)));
    }

    #[test]
    fn test_strict_binding_rejects_missing_columns() {
        let config = ReaderConfig::new().with_require_all_columns(true);
        let reader = RowReader::<User>::with_config(config).unwrap();
        let cursor = MemoryCursor::new(["id"]).with_row([Some("1")]);

        let err = reader.fetch_all(cursor).unwrap_err();
        assert!(matches!(err, RowBindError::BindError(ref msg) if msg.contains("name")));
    }
}

// =============================================================================
// Materializer Contracts
// =============================================================================

mod materializer_contracts {
    use super::*;

    fn three_users() -> MemoryCursor {
        MemoryCursor::new(["id", "name"])
            .with_row([Some("1"), Some("first")])
            .with_row([Some("2"), Some("second")])
            .with_row([Some("3"), Some("third")])
    }

    #[test]
    fn test_zero_rows() {
        let reader = RowReader::<User>::new().unwrap();

        let mut users = vec![User::default()];
        reader.read_all(MemoryCursor::new(["id"]), &mut users).unwrap();
        assert!(users.is_empty());

        let mut slot = User {
            id: 99,
            ..User::default()
        };
        assert!(!reader.read_one(MemoryCursor::new(["id"]), &mut slot).unwrap());
        assert_eq!(slot.id, 99);
    }

    #[test]
    fn test_read_all_preserves_cursor_order() {
        let users = RowReader::<User>::new().unwrap().fetch_all(three_users()).unwrap();
        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_read_one_takes_first_row() {
        let mut slot = User::default();
        let found = RowReader::<User>::new()
            .unwrap()
            .read_one(three_users(), &mut slot)
            .unwrap();

        assert!(found);
        assert_eq!(slot.id, 1);
        assert_eq!(slot.name, "first");
    }

    #[test]
    fn test_limit_rows() {
        let reader = RowReader::<User>::new().unwrap();
        let mut users = Vec::new();

        reader.read_limited(three_users(), &mut users, Limit::Rows(2)).unwrap();
        assert_eq!(users.len(), 2);

        reader.read_limited(three_users(), &mut users, Limit::Rows(0)).unwrap();
        assert!(users.is_empty());

        reader.read_limited(three_users(), &mut users, Limit::Rows(10)).unwrap();
        assert_eq!(users.len(), 3);
    }

    #[test]
    fn test_configured_limit() {
        let config = ReaderConfig::new().with_limit(Limit::Rows(1));
        let users = RowReader::<User>::with_config(config)
            .unwrap()
            .fetch_all(three_users())
            .unwrap();
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn test_destination_is_cleared_first() {
        let reader = RowReader::<User>::new().unwrap();
        let mut users = vec![User::default(); 5];
        reader.read_all(three_users(), &mut users).unwrap();
        assert_eq!(users.len(), 3);
    }

    #[test]
    fn test_coercion_failure_aborts_batch() {
        let cursor = three_users().with_row([Some("four"), Some("fourth")]);
        let reader = RowReader::<User>::new().unwrap();
        let mut users = Vec::new();

        let err = reader.read_all(cursor, &mut users).unwrap_err();
        assert!(matches!(err, RowBindError::CoercionError { ref input, .. } if input == "four"));
        assert!(users.is_empty());
    }

    #[test]
    fn test_read_one_error_leaves_slot() {
        let cursor = MemoryCursor::new(["id"]).with_row([Some("x")]);
        let mut slot = User {
            id: 5,
            ..User::default()
        };
        assert!(RowReader::<User>::new().unwrap().read_one(cursor, &mut slot).is_err());
        assert_eq!(slot.id, 5);
    }
}

// =============================================================================
// Shape Contracts
// =============================================================================

mod shape_contracts {
    use super::*;
    use rowbind::{DataType, FieldDef, TypeTag, Value};

    record! {
        #[derive(Debug, Default)]
        struct Empty {}
    }

    #[derive(Debug, Default)]
    struct Ratio;

    impl Record for Ratio {
        fn fields() -> Vec<FieldDef> {
            vec![FieldDef::new(
                "value",
                "value",
                TypeTag::required(DataType::Unsupported("f64")),
            )]
        }

        fn assign(&mut self, _index: usize, _value: Value) -> rowbind::Result<()> {
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct Unnamed;

    impl Record for Unnamed {
        fn fields() -> Vec<FieldDef> {
            vec![FieldDef::new("id", "", TypeTag::required(DataType::Int64))]
        }

        fn assign(&mut self, _index: usize, _value: Value) -> rowbind::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_shape() {
        assert!(matches!(
            RowReader::<Empty>::new(),
            Err(RowBindError::ShapeError(_))
        ));
    }

    #[test]
    fn test_unsupported_field_type() {
        let err = RowReader::<Ratio>::new().err().unwrap();
        assert!(matches!(err, RowBindError::SchemaError(ref msg) if msg.contains("f64")));
    }

    #[test]
    fn test_missing_column_name() {
        let err = RowReader::<Unnamed>::new().err().unwrap();
        assert!(matches!(err, RowBindError::SchemaError(ref msg) if msg.contains("'id'")));
    }
}

// =============================================================================
// Cursor Contracts
// =============================================================================

mod cursor_contracts {
    use super::*;
    use rowbind::storage::MemoryCursorError;

    fn two_users() -> MemoryCursor {
        MemoryCursor::new(["id"])
            .with_row([Some("1")])
            .with_row([Some("2")])
    }

    #[test]
    fn test_cursor_closed_once_on_success() {
        let mut cursor = two_users();
        RowReader::<User>::new().unwrap().fetch_all(&mut cursor).unwrap();
        assert!(cursor.is_closed());
        assert_eq!(cursor.close_count(), 1);
    }

    #[test]
    fn test_fetch_error_propagates() {
        let mut cursor = two_users().failing_at_row(1);
        let mut users = Vec::new();
        let err = RowReader::<User>::new()
            .unwrap()
            .read_all(&mut cursor, &mut users)
            .unwrap_err();

        assert!(matches!(err, RowBindError::CursorError(_)));
        assert!(users.is_empty());
        assert_eq!(cursor.close_count(), 1);

        let source = std::error::Error::source(&err).unwrap();
        assert!(matches!(
            source.downcast_ref::<MemoryCursorError>(),
            Some(MemoryCursorError::Simulated(_))
        ));
    }

    #[test]
    fn test_close_error_propagates() {
        let mut cursor = two_users().failing_on_close();
        let mut users = Vec::new();
        let err = RowReader::<User>::new()
            .unwrap()
            .read_all(&mut cursor, &mut users)
            .unwrap_err();

        assert!(matches!(err, RowBindError::CursorError(_)));
        assert!(users.is_empty());
        assert_eq!(cursor.close_count(), 1);
    }

    #[test]
    fn test_cursor_closed_on_coercion_error() {
        let mut cursor = two_users().with_row([Some("three")]);
        assert!(RowReader::<User>::new().unwrap().fetch_all(&mut cursor).is_err());
        assert_eq!(cursor.close_count(), 1);
    }

    #[test]
    fn test_cursor_closed_on_bind_error() {
        let mut cursor = MemoryCursor::new(Vec::<String>::new());
        assert!(RowReader::<User>::new().unwrap().fetch_all(&mut cursor).is_err());
        assert!(cursor.is_closed());
    }
}
