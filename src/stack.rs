use crate::interpreter::OperationError;

/// The data stack. The last element is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack {
    values: Vec<i64>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    pub fn pop(&mut self) -> Result<i64, OperationError> {
        self.values.pop().ok_or(OperationError::StackUnderflow)
    }

    pub fn peek(&self) -> Result<i64, OperationError> {
        self.values.last().copied().ok_or(OperationError::StackUnderflow)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Bottom to top.
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }
}

impl From<Vec<i64>> for Stack {
    fn from(values: Vec<i64>) -> Self {
        Stack { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.as_slice(), &[1, 2]);
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(OperationError::StackUnderflow));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_peek() {
        let mut stack = Stack::from(vec![3, 4]);
        assert_eq!(stack.peek(), Ok(4));
        assert_eq!(stack.len(), 2);
        stack.clear();
        assert_eq!(stack.peek(), Err(OperationError::StackUnderflow));
    }
}
