use std::fmt;

/// A built-in word.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OpCode {
    Add,
    Subtract,
    Multiply,
    Divide,
    Print,
    Dup,
    Swap,
    /// `:`, switches the interpreter into definition capture.
    Define,
}

impl OpCode {
    pub const ALL: [OpCode; 8] = [
        OpCode::Add,
        OpCode::Subtract,
        OpCode::Multiply,
        OpCode::Divide,
        OpCode::Print,
        OpCode::Dup,
        OpCode::Swap,
        OpCode::Define,
    ];

    /// The name under which the word is registered in a fresh dictionary.
    pub fn name(self) -> &'static str {
        match self {
            OpCode::Add => "+",
            OpCode::Subtract => "-",
            OpCode::Multiply => "*",
            OpCode::Divide => "/",
            OpCode::Print => ".",
            OpCode::Dup => "dup",
            OpCode::Swap => "swap",
            OpCode::Define => ":",
        }
    }

    pub fn by_name(name: &str) -> Option<OpCode> {
        OpCode::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for op in OpCode::ALL {
            assert_eq!(OpCode::by_name(op.name()), Some(op));
        }
        assert_eq!(OpCode::by_name(";"), None);
        assert_eq!(OpCode::by_name("DUP"), None);
    }
}
