#[cfg(test)]
mod tests {
    use inquire::InquireError;
    use std::io::{self, Cursor};

    use crate::{
        domain::ports::input::{InputSource, is_yes},
        error::{AppError, ErrInput},
        infra::input::LineInput,
    };

    fn input(text: &str) -> LineInput<Cursor<Vec<u8>>, io::Sink> {
        LineInput::new(Cursor::new(text.as_bytes().to_vec()), io::sink())
    }

    #[test]
    fn line_strips_terminators() {
        let mut src = input("first\r\nsecond\nlast");
        assert_eq!(src.line("?").unwrap(), "first");
        assert_eq!(src.line("?").unwrap(), "second");
        assert_eq!(src.line("?").unwrap(), "last");
        assert!(matches!(
            src.line("?"),
            Err(AppError::Input(ErrInput::Closed))
        ));
    }

    #[test]
    fn confirm_accepts_only_yes() {
        let mut src = input("y\nYES\n  Y \nn\nmaybe\n\n");
        assert!(src.confirm("?").unwrap());
        assert!(src.confirm("?").unwrap());
        assert!(src.confirm("?").unwrap());
        assert!(!src.confirm("?").unwrap());
        assert!(!src.confirm("?").unwrap());
        assert!(!src.confirm("?").unwrap());
    }

    #[test]
    fn block_stops_at_sentinel() {
        let mut src = input("one\n\n END\nEND\nafter\n");
        let lines = src.block("text:", "END").unwrap();
        // seule la ligne exacte compte comme sentinelle
        assert_eq!(lines, vec!["one", "", " END"]);
        assert_eq!(src.line("?").unwrap(), "after");
    }

    #[test]
    fn block_with_custom_sentinel() {
        let mut src = input("END\n.\n");
        assert_eq!(src.block("text:", ".").unwrap(), vec!["END"]);
    }

    #[test]
    fn block_without_sentinel_is_closed() {
        let mut src = input("dangling\n");
        assert!(matches!(
            src.block("text:", "END"),
            Err(AppError::Input(ErrInput::Closed))
        ));
    }

    #[test]
    fn prompts_are_echoed() {
        let mut out = Vec::new();
        {
            let mut src = LineInput::new(Cursor::new(b"a\ny\n".to_vec()), &mut out);
            src.line("Path:").unwrap();
            src.confirm("Sure?").unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "Path: Sure? (y/n): ");
    }

    #[test]
    fn yes_helper() {
        assert!(is_yes("y"));
        assert!(is_yes(" Yes "));
        assert!(!is_yes("yep"));
        assert!(!is_yes(""));
    }

    #[test]
    fn inquire_errors_map_to_input_kinds() {
        let interrupted = AppError::from(InquireError::OperationInterrupted);
        assert!(interrupted.is_exit());

        let cancelled = AppError::from(InquireError::OperationCanceled);
        assert!(cancelled.is_declined());
        assert!(!cancelled.is_exit());

        let other = AppError::from(InquireError::NotTTY);
        assert!(!other.is_exit());
        assert!(!other.is_declined());
    }
}
