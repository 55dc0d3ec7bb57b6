#[cfg(test)]
mod tests {
    use colhash::anonymize::selector::print_selection;
    use colhash::anonymize::{sample_value, Decision, Prompter, EMPTY_SAMPLE};
    use colhash::table::{Cell, Column, Table};
    use std::io::Cursor;

    fn table() -> Table {
        Table::new(vec![
            Column::new("id", vec![Cell::parse("1"), Cell::parse("2")]),
            Column::new("name", vec![Cell::parse(""), Cell::parse("bob")]),
            Column::new("email", vec![Cell::parse("a@x"), Cell::parse("b@x")]),
            Column::new("phone", vec![Cell::parse("555"), Cell::parse("556")]),
        ])
    }

    fn select(answers: &str) -> (Vec<String>, String) {
        let mut out = Vec::new();
        let selected = Prompter::new(Cursor::new(answers), &mut out)
            .select(&table())
            .unwrap();
        (selected, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_decision_parse() {
        assert_eq!(Decision::parse("y"), Some(Decision::Hash));
        assert_eq!(Decision::parse("Y\n"), Some(Decision::Hash));
        assert_eq!(Decision::parse(" n "), Some(Decision::Skip));
        assert_eq!(Decision::parse(""), Some(Decision::Skip));
        assert_eq!(Decision::parse("\r\n"), Some(Decision::Skip));
        assert_eq!(Decision::parse("S"), Some(Decision::Stop));
        assert_eq!(Decision::parse("yes"), None);
        assert_eq!(Decision::parse("x"), None);
    }

    #[test]
    fn test_sample_value_skips_missing() {
        let t = table();
        assert_eq!(sample_value(t.column("name").unwrap()), "bob");

        let empty = Column::new("notes", vec![Cell::parse(""), Cell::parse("NaN")]);
        assert_eq!(sample_value(&empty), EMPTY_SAMPLE);
    }

    #[test]
    fn test_stop_ends_selection() {
        let (selected, out) = select("n\ny\ns\ny\n");

        assert_eq!(selected, vec!["name".to_string()]);
        assert!(out.contains("Column: email, sample value: a@x."));
        assert!(!out.contains("Column: phone"), "no prompt after stop");
    }

    #[test]
    fn test_blank_answer_defaults_to_skip() {
        let (selected, _) = select("\nY\n\ny\n");
        assert_eq!(selected, vec!["name".to_string(), "phone".to_string()]);
    }

    #[test]
    fn test_invalid_answer_reprompts() {
        let (selected, out) = select("maybe\ny\nn\nn\nn\n");

        assert_eq!(selected, vec!["id".to_string()]);
        assert_eq!(out.matches("Invalid input.").count(), 1);
        assert_eq!(out.matches("Column: id,").count(), 2);
    }

    #[test]
    fn test_end_of_input_stops() {
        let (selected, _) = select("y\n");
        assert_eq!(selected, vec!["id".to_string()]);
    }

    #[test]
    fn test_print_selection_marks_hashed_columns() {
        let mut out = Vec::new();
        print_selection(&mut out, &table(), &["email", "missing"]).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("  - id\n"));
        assert!(out.contains("  * email (will be hashed)\n"));
        assert!(!out.contains("missing"));
    }
}
