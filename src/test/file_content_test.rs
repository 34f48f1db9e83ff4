#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use crate::{
        domain::file::{
            FileContent, FilePath, MenuChoice, ModifyMode, format_timestamp, parse_line_number,
        },
        error::{AppError, ErrInput, ErrPath},
    };

    #[test]
    fn parse_strips_terminators() {
        let content = FileContent::parse("a\r\nb\nc\n");
        assert_eq!(content.lines(), &["a", "b", "c"]);

        let no_final_newline = FileContent::parse("a\nb");
        assert_eq!(no_final_newline.len(), 2);

        assert!(FileContent::parse("").is_empty());
    }

    #[test]
    fn serialize_terminates_every_line() {
        let content = FileContent::from_lines(vec!["x".into(), "".into(), "y".into()]);
        assert_eq!(content.serialize("\n"), "x\n\ny\n");
        assert_eq!(content.serialize("\r\n"), "x\r\n\r\ny\r\n");
    }

    #[test]
    fn insert_bounds() {
        let mut content = FileContent::parse("1\n2\n3\n");

        assert!(matches!(
            content.insert(0, "z".into()),
            Err(AppError::Input(ErrInput::LineOutOfRange { line: 0, max: 4 }))
        ));
        assert!(matches!(
            content.insert(5, "z".into()),
            Err(AppError::Input(ErrInput::LineOutOfRange { line: 5, max: 4 }))
        ));
        assert_eq!(content.len(), 3);

        content.insert(4, "end".into()).expect("last slot");
        content.insert(1, "start".into()).expect("first slot");
        assert_eq!(content.lines(), &["start", "1", "2", "3", "end"]);
    }

    #[test]
    fn file_path_trims_and_rejects_empty() {
        let path = FilePath::new("  /tmp/some dir/file.txt \n").expect("valid path");
        assert_eq!(path.to_string(), "/tmp/some dir/file.txt");
        assert_eq!(path.file_name(), "file.txt");

        assert!(matches!(FilePath::new(" \t"), Err(AppError::Path(ErrPath::EmptyPath))));
    }

    #[test]
    fn menu_choices() {
        assert_eq!(MenuChoice::parse("1").unwrap(), MenuChoice::Read);
        assert_eq!(MenuChoice::parse(" 2 ").unwrap(), MenuChoice::Write);
        assert_eq!(MenuChoice::parse("3").unwrap(), MenuChoice::Modify);
        assert_eq!(MenuChoice::parse("4").unwrap(), MenuChoice::Delete);
        assert_eq!(MenuChoice::parse("5").unwrap(), MenuChoice::Info);
        assert_eq!(MenuChoice::parse("6").unwrap(), MenuChoice::Exit);
        assert!(matches!(
            MenuChoice::parse("7"),
            Err(AppError::Input(ErrInput::InvalidChoice(_)))
        ));
    }

    #[test]
    fn modify_modes() {
        assert_eq!(ModifyMode::parse("1").unwrap(), ModifyMode::Append);
        assert_eq!(ModifyMode::parse("2").unwrap(), ModifyMode::Overwrite);
        assert_eq!(ModifyMode::parse("3").unwrap(), ModifyMode::Insert);
        assert!(ModifyMode::parse("append").is_err());
    }

    #[test]
    fn line_numbers() {
        assert_eq!(parse_line_number(" 12 ").unwrap(), 12);
        assert!(matches!(
            parse_line_number("-1"),
            Err(AppError::Input(ErrInput::NotANumber(_)))
        ));
        assert!(matches!(
            parse_line_number("three"),
            Err(AppError::Input(ErrInput::NotANumber(_)))
        ));
    }

    #[test]
    fn timestamp_format() {
        let time = Local
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("unambiguous local time");
        assert_eq!(format_timestamp(&time), "2024-01-02 03:04:05");
    }
}
