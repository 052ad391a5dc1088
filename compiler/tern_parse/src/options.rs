//! Parser configuration.

/// When declaration types, initializers, and bodies are parsed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ParseMode {
    /// Capture them as unparsed token ranges for elaboration to resolve.
    /// Required for forward references.
    #[default]
    Deferred,
    /// Parse them on the spot.
    Eager,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ParseOptions {
    pub mode: ParseMode,
}

impl ParseOptions {
    pub fn eager() -> Self {
        ParseOptions {
            mode: ParseMode::Eager,
        }
    }

    #[inline]
    pub fn defers(&self) -> bool {
        self.mode == ParseMode::Deferred
    }
}
