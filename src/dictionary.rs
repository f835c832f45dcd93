//! Named words known to an interpreter.
use std::rc::Rc;

use rustc_hash::FxHashMap as HashMap;

use crate::ops::OpCode;
use crate::parser::Token;

/// What running a word does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Builtin(OpCode),
    /// A body captured between `: name` and `;`. The tokens are resolved when the
    /// word runs, not when it is defined.
    UserDefined(Rc<[Token]>),
}

impl Action {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Action::Builtin(_))
    }
}

/// Mapping from word name to [`Action`]. Names are case-sensitive and unique;
/// defining an existing name replaces it, built-ins included.
#[derive(Clone, Debug)]
pub struct Dictionary {
    words: HashMap<Box<str>, Action>,
}

impl Dictionary {
    /// A dictionary without any words, not even `:`.
    pub fn empty() -> Self {
        Dictionary { words: HashMap::default() }
    }

    pub fn with_builtins() -> Self {
        let mut dict = Self::empty();
        for op in OpCode::ALL {
            dict.define(op.name(), Action::Builtin(op));
        }
        dict
    }

    /// Inserts or replaces a word, returning the action previously registered under `name`.
    pub fn define(&mut self, name: &str, action: Action) -> Option<Action> {
        self.words.insert(name.into(), action)
    }

    pub fn get(&self, name: &str) -> Option<&Action> {
        self.words.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.words.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All word names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.words.keys().map(|k| &**k).collect();
        names.sort_unstable();
        names
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let dict = Dictionary::with_builtins();
        assert_eq!(dict.len(), OpCode::ALL.len());
        assert_eq!(dict.get("dup"), Some(&Action::Builtin(OpCode::Dup)));
        assert_eq!(dict.get(":"), Some(&Action::Builtin(OpCode::Define)));
        assert!(!dict.contains(";"));
        assert!(!dict.contains("DUP"));
        assert_eq!(dict.names(), vec!["*", "+", "-", ".", "/", ":", "dup", "swap"]);
    }

    #[test]
    fn test_define_replaces() {
        let mut dict = Dictionary::with_builtins();
        let body: Rc<[Token]> = vec![Token::new("1")].into();
        let old = dict.define("+", Action::UserDefined(body.clone()));
        assert_eq!(old, Some(Action::Builtin(OpCode::Add)));
        assert_eq!(dict.get("+"), Some(&Action::UserDefined(body)));
        assert!(!dict.get("+").unwrap().is_builtin());
        assert_eq!(dict.len(), OpCode::ALL.len());

        assert_eq!(dict.define("new", Action::Builtin(OpCode::Dup)), None);
        assert_eq!(dict.len(), OpCode::ALL.len() + 1);
    }
}
