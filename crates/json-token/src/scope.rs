//! Nesting state shared by the reader and the writer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScopeKind {
    Object,
    Array,
}

/// One open container. `len` counts the tokens emitted directly inside it;
/// object members count twice (name, then value).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scope {
    pub kind: ScopeKind,
    pub len: usize,
}

impl Scope {
    pub fn object() -> Self {
        Self {
            kind: ScopeKind::Object,
            len: 0,
        }
    }

    pub fn array() -> Self {
        Self {
            kind: ScopeKind::Array,
            len: 0,
        }
    }

    /// An object scope expects a member name (or its closing brace) whenever
    /// an even number of tokens has been seen.
    pub fn wants_name(&self) -> bool {
        self.kind == ScopeKind::Object && self.len % 2 == 0
    }

    /// A separator is needed before the next member name or array element.
    pub fn needs_comma(&self) -> bool {
        match self.kind {
            ScopeKind::Object => self.len > 0 && self.len % 2 == 0,
            ScopeKind::Array => self.len > 0,
        }
    }
}
