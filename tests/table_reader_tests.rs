#[cfg(test)]
mod tests {
    use colhash::table::{Cell, TableReader};
    use colhash::TableError;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn read(data: &str) -> Result<colhash::Table, TableError> {
        TableReader::default().read(data.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_read_headers_and_rows() {
        let table = read("id,name,email\n1,ann,a@x\n2,bob,b@x\n").unwrap();

        let names: Vec<&str> = table.column_names().collect();
        assert_eq!(names, vec!["id", "name", "email"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column("name").unwrap().values[1], Cell::Value("bob".into()));
    }

    #[test]
    fn test_empty_and_na_fields_are_missing() {
        let table = read("a,b\n,NA\nnull,x\n").unwrap();

        let a = &table.column("a").unwrap().values;
        let b = &table.column("b").unwrap().values;
        assert!(a[0].is_missing());
        assert!(a[1].is_missing());
        assert_eq!(a[1].as_field(), "null", "missing cells keep their source text");
        assert!(b[0].is_missing());
        assert_eq!(b[1].value(), Some("x"));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = read("a,b,c\n1,2\n").unwrap();

        assert_eq!(table.row_count(), 1);
        assert!(table.column("c").unwrap().values[0].is_missing());
    }

    #[test]
    fn test_long_rows_are_rejected() {
        let err = read("a,b\n1,2\n1,2,3\n").unwrap_err();
        match err {
            TableError::RaggedRow { row, found, expected, .. } => {
                assert_eq!(row, 2);
                assert_eq!(found, 3);
                assert_eq!(expected, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_empty_input_has_no_header() {
        assert!(matches!(read(""), Err(TableError::NoHeader { .. })));
    }

    #[test]
    fn test_header_only() {
        let table = read("a,b\n").unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.columns().len(), 2);
    }

    #[test]
    fn test_custom_delimiter_and_quoting() {
        let table = TableReader::new(b';')
            .read("name;note\n\"Doe; J\";\"said \"\"hi\"\"\"\n".as_bytes(), Path::new("t.csv"))
            .unwrap();

        assert_eq!(table.column("name").unwrap().first_present(), Some("Doe; J"));
        assert_eq!(table.column("note").unwrap().first_present(), Some("said \"hi\""));
    }

    #[test]
    fn test_open_file() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "x\n1\n2\n").unwrap();

        let table = TableReader::default().open(temp.path()).unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_open_missing_file_fails() {
        let err = TableReader::default()
            .open(Path::new("/nonexistent/dir/data.csv"))
            .unwrap_err();
        assert!(matches!(err, TableError::Read { .. }));
    }
}
