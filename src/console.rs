//! Where the interpreter sends printed values and fault reports.
use std::io::Write;

use crate::interpreter::Fault;

/// Receives everything a session prints, in the order it happens.
///
/// Implement this trait to redirect output, e.g. into a buffer for tests.
pub trait Console {
    /// Called by `.` with the popped value.
    fn print(&mut self, value: i64);
    /// Called for every fault, right when it happens.
    fn report(&mut self, fault: &Fault);
}

/// A `Console` that discards everything.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullConsole {}

impl Console for NullConsole {
    #[inline(always)]
    fn print(&mut self, _: i64) {}
    #[inline(always)]
    fn report(&mut self, _: &Fault) {}
}

/// Prints one line per value or fault to any writer.
#[derive(Debug)]
pub struct WriterConsole<W: Write> {
    writer: W,
}

impl<W: Write> WriterConsole<W> {
    pub fn new(writer: W) -> Self {
        WriterConsole { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Console for WriterConsole<W> {
    fn print(&mut self, value: i64) {
        // a closed stdout must not abort the session
        let _ = writeln!(self.writer, "{value}");
    }

    fn report(&mut self, fault: &Fault) {
        let _ = writeln!(self.writer, "{fault}");
    }
}

/// The console used by [`crate::interpreter::Interpreter::new`].
pub type StdoutConsole = WriterConsole<std::io::Stdout>;

impl Default for StdoutConsole {
    fn default() -> Self {
        WriterConsole::new(std::io::stdout())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Value(i64),
    Fault(Fault),
}

/// Records output instead of printing it.
#[derive(Default, Debug, Clone)]
pub struct Transcript {
    pub lines: Vec<Line>,
}

impl Transcript {
    pub fn values(&self) -> Vec<i64> {
        self.lines.iter().filter_map(|l| match l {
            Line::Value(v) => Some(*v),
            Line::Fault(_) => None,
        }).collect()
    }

    pub fn faults(&self) -> Vec<&Fault> {
        self.lines.iter().filter_map(|l| match l {
            Line::Fault(f) => Some(f),
            Line::Value(_) => None,
        }).collect()
    }

    /// The text a [`WriterConsole`] would have printed.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Value(v) => out.push_str(&v.to_string()),
                Line::Fault(f) => out.push_str(&f.to_string()),
            }
            out.push('\n');
        }
        out
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Console for Transcript {
    fn print(&mut self, value: i64) {
        self.lines.push(Line::Value(value));
    }

    fn report(&mut self, fault: &Fault) {
        self.lines.push(Line::Fault(fault.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::OperationError;

    fn underflow() -> Fault {
        Fault { token: ".".to_string(), position: 0, word: None, error: OperationError::StackUnderflow }
    }

    #[test]
    fn test_writer_console() {
        let mut console = WriterConsole::new(Vec::new());
        console.print(25);
        console.report(&underflow());
        console.print(-3);
        let text = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(text, "25\nError: Stack underflow\n-3\n");
    }

    #[test]
    fn test_transcript() {
        let mut transcript = Transcript::default();
        transcript.print(1);
        transcript.report(&underflow());
        transcript.print(2);
        assert_eq!(transcript.values(), vec![1, 2]);
        assert_eq!(transcript.faults(), vec![&underflow()]);
        assert_eq!(transcript.render(), "1\nError: Stack underflow\n2\n");
        transcript.clear();
        assert!(transcript.lines.is_empty());
    }
}
