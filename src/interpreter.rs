//! Running source text against a stack and a dictionary.
use std::{fmt, mem};

use thiserror::Error;

use crate::config::{get_config, Config};
use crate::console::{Console, StdoutConsole};
use crate::dictionary::{Action, Dictionary};
use crate::ops::OpCode;
use crate::parser::{tokenize, Token};
use crate::stack::Stack;


/// Why a single operation could not run as written.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperationError {
    #[error("Stack underflow")]
    StackUnderflow,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unknown word")]
    UnknownWord,
    #[error("Word `{word}` nested deeper than {limit} calls")]
    CallDepthExceeded { word: String, limit: usize },
    #[error("Definition ended before a name was given")]
    MissingWordName,
    #[error("Unterminated definition{} ({captured} tokens discarded)", describe_name(.name))]
    UnterminatedDefinition { name: Option<String>, captured: usize },
}

fn describe_name(name: &Option<String>) -> String {
    match name {
        Some(name) => format!(" of `{name}`"),
        None => String::new(),
    }
}

/// A non-fatal error, together with where it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    /// The token being resolved when the error happened.
    pub token: String,
    /// 0-based index of the top-level token within the input passed to
    /// [`Interpreter::execute`]. For faults raised inside a user-defined word this is
    /// the position of the outermost call.
    pub position: usize,
    /// The user-defined word whose body contained `token`, if any.
    pub word: Option<String>,
    pub error: OperationError,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.error, &self.word) {
            (OperationError::UnknownWord, None) => write!(f, "Unknown word: {}", self.token),
            (OperationError::UnknownWord, Some(_)) => write!(f, "Unknown word in definition: {}", self.token),
            (error, _) => write!(f, "Error: {error}"),
        }
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// All faults raised by one call to [`Interpreter::execute`] or [`Interpreter::finish`],
/// in the order they happened. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faults(pub Vec<Fault>);

impl Faults {
    pub fn iter(&self) -> std::slice::Iter<'_, Fault> {
        self.0.iter()
    }

    pub fn errors(&self) -> Vec<&OperationError> {
        self.0.iter().map(|f| &f.error).collect()
    }
}

impl fmt::Display for Faults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => write!(f, "No faults"),
            [only] => write!(f, "{only}"),
            [first, rest @ ..] => write!(f, "{first} (and {} more)", rest.len()),
        }
    }
}

impl std::error::Error for Faults {}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Mode {
    Normal,
    /// Between `:` and `;`. The first token after `:` becomes the name.
    Capturing { name: Option<String>, tokens: Vec<Token> },
}

#[derive(Clone, Copy)]
struct Site<'a> {
    position: usize,
    word: Option<&'a str>,
    token: &'a Token,
}

/// An interpreter session: a stack, a dictionary and the definition being captured.
///
/// # Example
/// ```
/// use minforth::console::Transcript;
/// use minforth::interpreter::{Interpreter, OperationError};
///
/// let mut forth = Interpreter::with_console(Transcript::default());
/// assert!(forth.execute("1 2 + 3 *").is_ok());
/// assert_eq!(forth.stack().as_slice(), &[9]);
///
/// let faults = forth.execute("0 / .").unwrap_err();
/// assert_eq!(faults.errors(), vec![&OperationError::DivisionByZero, &OperationError::StackUnderflow]);
/// ```
pub struct Interpreter<C: Console = StdoutConsole> {
    stack: Stack,
    dictionary: Dictionary,
    mode: Mode,
    console: C,
    config: Config,
    faults: Vec<Fault>,
}

impl Interpreter<StdoutConsole> {
    /// An interpreter printing to standard output, configured from the environment.
    pub fn new() -> Self {
        Self::with_console(StdoutConsole::default())
    }
}

impl Default for Interpreter<StdoutConsole> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Console> Interpreter<C> {
    pub fn with_console(console: C) -> Self {
        Self::with_config(console, get_config().clone())
    }

    pub fn with_config(console: C, config: Config) -> Self {
        Interpreter {
            stack: Stack::new(),
            dictionary: Dictionary::with_builtins(),
            mode: Mode::Normal,
            console,
            config,
            faults: Vec::new(),
        }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Whether a `:` definition is still waiting for its `;`.
    pub fn is_capturing(&self) -> bool {
        matches!(self.mode, Mode::Capturing { .. })
    }

    /// Name of the definition being captured, once it has been read.
    pub fn pending_definition(&self) -> Option<&str> {
        match &self.mode {
            Mode::Capturing { name, .. } => name.as_deref(),
            Mode::Normal => None,
        }
    }

    /// Runs one piece of source text, token by token.
    ///
    /// Faults never stop execution; each one is reported to the console as it happens and
    /// all of them are returned. A definition left open at the end of `input` stays open
    /// and continues with the next call.
    pub fn execute(&mut self, input: &str) -> Result<(), Faults> {
        for (position, token) in tokenize(input).enumerate() {
            self.step(position, token);
        }
        self.take_faults()
    }

    /// Ends the session input. A definition that is still open is discarded and reported.
    pub fn finish(&mut self) -> Result<(), Faults> {
        if let Mode::Capturing { name, tokens } = mem::replace(&mut self.mode, Mode::Normal) {
            if self.config.should_log(1) {
                eprintln!("discarding unterminated definition {name:?} ({} tokens)", tokens.len());
            }
            let start = Token::new(OpCode::Define.name());
            let site = Site { position: 0, word: None, token: &start };
            self.fault(site, OperationError::UnterminatedDefinition { name, captured: tokens.len() });
        }
        self.take_faults()
    }

    fn take_faults(&mut self) -> Result<(), Faults> {
        let faults = mem::take(&mut self.faults);
        if faults.is_empty() {
            Ok(())
        } else {
            Err(Faults(faults))
        }
    }

    fn step(&mut self, position: usize, token: Token) {
        let Mode::Capturing { name, tokens } = &mut self.mode else {
            self.interpret(position, &token);
            return;
        };
        if !token.is_definition_end() {
            match name {
                None => *name = Some(token.text().to_string()),
                Some(_) => tokens.push(token),
            }
            return;
        }
        if let Mode::Capturing { name, tokens } = mem::replace(&mut self.mode, Mode::Normal) {
            self.register(Site { position, word: None, token: &token }, name, tokens);
        }
    }

    fn register(&mut self, site: Site, name: Option<String>, tokens: Vec<Token>) {
        let Some(name) = name else {
            self.fault(site, OperationError::MissingWordName);
            return;
        };
        let len = tokens.len();
        let previous = self.dictionary.define(&name, Action::UserDefined(tokens.into()));
        if self.config.should_log(1) {
            match previous {
                Some(Action::Builtin(op)) => eprintln!("defined `{name}` ({len} tokens), shadowing built-in {op:?}"),
                Some(Action::UserDefined(_)) => eprintln!("redefined `{name}` ({len} tokens)"),
                None => eprintln!("defined `{name}` ({len} tokens)"),
            }
        }
    }

    fn interpret(&mut self, position: usize, token: &Token) {
        if self.config.should_log(3) {
            eprintln!("[{position}] {token} (stack depth {})", self.stack.len());
        }
        let site = Site { position, word: None, token };
        if let Err(error) = self.resolve(site, 0) {
            self.fault(site, error);
        }
    }

    /// Looks the token up in the dictionary, falls back to a literal and reports
    /// anything else as an unknown word.
    ///
    /// Only errors that abandon the whole top-level token are returned; everything else
    /// is reported where it happens.
    fn resolve(&mut self, site: Site, depth: usize) -> Result<(), OperationError> {
        match self.dictionary.get(site.token.text()).cloned() {
            Some(Action::Builtin(op)) => {
                self.apply(op, site);
                Ok(())
            }
            Some(Action::UserDefined(body)) => self.call(site, &body, depth + 1),
            None => {
                match site.token.literal() {
                    Some(value) => self.stack.push(value),
                    None => self.fault(site, OperationError::UnknownWord),
                }
                Ok(())
            }
        }
    }

    fn call(&mut self, site: Site, body: &[Token], depth: usize) -> Result<(), OperationError> {
        let word = site.token.text();
        if depth > self.config.max_call_depth {
            return Err(OperationError::CallDepthExceeded {
                word: word.to_string(),
                limit: self.config.max_call_depth,
            });
        }
        for token in body {
            self.resolve(Site { position: site.position, word: Some(word), token }, depth)?;
        }
        Ok(())
    }

    fn apply(&mut self, op: OpCode, site: Site) {
        match op {
            OpCode::Add => {
                let (a, b) = self.pop2(site);
                self.stack.push(a.wrapping_add(b));
            }
            OpCode::Subtract => {
                let (a, b) = self.pop2(site);
                self.stack.push(a.wrapping_sub(b));
            }
            OpCode::Multiply => {
                let (a, b) = self.pop2(site);
                self.stack.push(a.wrapping_mul(b));
            }
            OpCode::Divide => {
                let (a, b) = self.pop2(site);
                if b == 0 {
                    self.fault(site, OperationError::DivisionByZero);
                    return;
                }
                self.stack.push(a.wrapping_div(b));
            }
            OpCode::Print => {
                let value = self.pop(site);
                self.console.print(value);
            }
            OpCode::Dup => {
                let value = self.peek(site);
                self.stack.push(value);
            }
            OpCode::Swap => {
                let (a, b) = self.pop2(site);
                self.stack.push(b);
                self.stack.push(a);
            }
            OpCode::Define => {
                self.mode = Mode::Capturing { name: None, tokens: Vec::new() };
            }
        }
    }

    /// Pops the top value, or reports the underflow and yields 0.
    fn pop(&mut self, site: Site) -> i64 {
        self.stack.pop().unwrap_or_else(|error| {
            self.fault(site, error);
            0
        })
    }

    /// Pops `b` then `a` and returns `(a, b)`.
    fn pop2(&mut self, site: Site) -> (i64, i64) {
        let b = self.pop(site);
        let a = self.pop(site);
        (a, b)
    }

    fn peek(&mut self, site: Site) -> i64 {
        self.stack.peek().unwrap_or_else(|error| {
            self.fault(site, error);
            0
        })
    }

    fn fault(&mut self, site: Site, error: OperationError) {
        let fault = Fault {
            token: site.token.text().to_string(),
            position: site.position,
            word: site.word.map(str::to_string),
            error,
        };
        self.console.report(&fault);
        self.faults.push(fault);
    }
}
