use std::collections::HashMap;

/// A single lexical nesting level, mapping names to their values.
pub type Frame = HashMap<String, i64>;

/// The symbol table: a stack of scope frames, innermost last.
///
/// The bottom frame is the global scope. It is created together with the
/// stack and can never be popped, so the stack always holds at least one
/// frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeStack {
    frames: Vec<Frame>,
}

/// Returned by [`ScopeStack::pop`] when only the global frame is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeUnderflow;

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    /// Creates a stack holding only an empty global frame.
    ///
    /// # Example
    /// ```
    /// use scopelang::interpreter::scope::ScopeStack;
    ///
    /// let scopes = ScopeStack::new();
    /// assert_eq!(scopes.depth(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Frame::new()] }
    }

    /// Returns the number of open frames, counting the global frame.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Looks a name up from the innermost frame outward.
    ///
    /// The first frame that binds the name wins, so inner bindings shadow
    /// outer ones.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    ///
    /// # Returns
    /// The bound value, or `None` if no visible frame binds the name.
    ///
    /// # Example
    /// ```
    /// use scopelang::interpreter::scope::ScopeStack;
    ///
    /// let mut scopes = ScopeStack::new();
    /// scopes.bind("x", 1);
    /// scopes.push();
    /// assert_eq!(scopes.lookup("x"), Some(1));
    ///
    /// scopes.bind("x", 2);
    /// assert_eq!(scopes.lookup("x"), Some(2));
    /// assert_eq!(scopes.lookup("y"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name).copied())
    }

    /// Binds a name in the innermost frame.
    ///
    /// An existing binding in the innermost frame is overwritten. Bindings in
    /// outer frames are never touched; binding a name that an outer frame
    /// already holds shadows it until the innermost frame is popped.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `value`: Value to store.
    pub fn bind(&mut self, name: &str, value: i64) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string(), value);
        }
    }

    /// Opens a new, empty innermost frame.
    pub fn push(&mut self) {
        self.frames.push(Frame::new());
    }

    /// Closes the innermost frame, discarding its bindings.
    ///
    /// # Errors
    /// Returns [`ScopeUnderflow`] if only the global frame is open. The stack
    /// is left unchanged in that case.
    ///
    /// # Example
    /// ```
    /// use scopelang::interpreter::scope::{ScopeStack, ScopeUnderflow};
    ///
    /// let mut scopes = ScopeStack::new();
    /// scopes.push();
    /// scopes.bind("inner", 3);
    ///
    /// assert_eq!(scopes.pop(), Ok(()));
    /// assert_eq!(scopes.lookup("inner"), None);
    /// assert_eq!(scopes.pop(), Err(ScopeUnderflow));
    /// assert_eq!(scopes.depth(), 1);
    /// ```
    pub fn pop(&mut self) -> Result<(), ScopeUnderflow> {
        if self.frames.len() <= 1 {
            return Err(ScopeUnderflow);
        }
        self.frames.pop();
        Ok(())
    }
}
