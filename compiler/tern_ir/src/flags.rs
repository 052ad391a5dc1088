//! Declaration specifiers and type qualifiers.

use bitflags::bitflags;

bitflags! {
    /// Specifiers attached to a declaration or parameter.
    ///
    /// Storage, function, and access specifiers precede declarations;
    /// passing-mode specifiers precede parameters.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Specifiers: u32 {
        // Storage
        const STATIC = 1 << 0;
        const DYNAMIC = 1 << 1;

        // Function
        const INLINE = 1 << 2;
        const EXPLICIT = 1 << 3;
        const IMPLICIT = 1 << 4;
        const VIRTUAL = 1 << 5;
        const ABSTRACT = 1 << 6;

        // Access
        const PUBLIC = 1 << 7;
        const PRIVATE = 1 << 8;
        const PROTECTED = 1 << 9;

        // Parameter passing
        const IN = 1 << 10;
        const OUT = 1 << 11;
        const MUTABLE = 1 << 12;
        const CONSUME = 1 << 13;
        const FORWARD = 1 << 14;
        const CONST = 1 << 15;
    }
}

impl Default for Specifiers {
    fn default() -> Self {
        Specifiers::empty()
    }
}

bitflags! {
    /// Cv-qualifiers of a qualified type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Qualifiers: u8 {
        const CONST = 1 << 0;
        const VOLATILE = 1 << 1;
    }
}

impl Default for Qualifiers {
    fn default() -> Self {
        Qualifiers::empty()
    }
}
