use inquire::{Confirm, Text};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{
    domain::ports::input::{InputSource, is_yes},
    error::{AppError, ErrInput},
};

/// Terminal prompts through `inquire`.
#[derive(Default)]
pub struct InquireInput;

impl InquireInput {
    pub fn new() -> Self {
        InquireInput
    }
}

impl InputSource for InquireInput {
    fn line(&mut self, message: &str) -> Result<String, AppError> {
        Ok(Text::new(message).prompt()?)
    }

    fn confirm(&mut self, message: &str) -> Result<bool, AppError> {
        Ok(Confirm::new(message).with_default(false).prompt()?)
    }

    fn block(&mut self, message: &str, sentinel: &str) -> Result<Vec<String>, AppError> {
        println!("{}", message);
        let mut lines = Vec::new();
        loop {
            let line = Text::new(">").prompt()?;
            if line == sentinel {
                break;
            }
            lines.push(line);
        }
        Ok(lines)
    }
}

/// Plain line-oriented input, for piped stdin and scripted sessions.
pub struct LineInput<R: BufRead, W: Write> {
    reader: R,
    echo: W,
}

impl LineInput<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, echo: W) -> Self {
        Self { reader, echo }
    }

    fn show(&mut self, text: &str) -> Result<(), AppError> {
        self.echo.write_all(text.as_bytes())?;
        self.echo.flush()?;
        Ok(())
    }

    fn next_line(&mut self) -> Result<String, AppError> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Err(AppError::Input(ErrInput::Closed));
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(buf)
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn line(&mut self, message: &str) -> Result<String, AppError> {
        self.show(&format!("{} ", message))?;
        self.next_line()
    }

    fn confirm(&mut self, message: &str) -> Result<bool, AppError> {
        self.show(&format!("{} (y/n): ", message))?;
        Ok(is_yes(&self.next_line()?))
    }

    fn block(&mut self, message: &str, sentinel: &str) -> Result<Vec<String>, AppError> {
        self.show(&format!("{}\n", message))?;
        let mut lines = Vec::new();
        loop {
            let line = self.next_line()?;
            if line == sentinel {
                break;
            }
            lines.push(line);
        }
        Ok(lines)
    }
}
