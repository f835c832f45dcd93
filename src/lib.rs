//! # minforth
//! A small interpreter for a Forth-like stack language.
//!
//! Programs are whitespace-separated words operating on a stack of 64-bit integers.
//! Besides the built-in words (`+ - * / . dup swap`), new words can be defined with
//! `: name body ;` and are resolved against the dictionary each time they run, so
//! redefining a word changes every definition that uses it.
//!
//! ```
//! use minforth::console::Transcript;
//! use minforth::interpreter::Interpreter;
//!
//! let mut forth = Interpreter::with_console(Transcript::default());
//! forth.execute(": square dup * ;").unwrap();
//! forth.execute("5 square .").unwrap();
//! assert_eq!(forth.console().values(), vec![25]);
//! ```
//!
//! Nothing in a session is fatal: stack underflow, division by zero and unknown words are
//! reported as [`interpreter::Fault`]s and the interpreter moves on to the next token.
pub mod config;
pub mod console;
pub mod dictionary;
pub mod interpreter;
pub mod ops;
pub mod parser;
pub mod stack;
