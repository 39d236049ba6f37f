// crates/emberplus-rs/src/types.rs

//! Protocol enumerations and the absolute `Path` type of the Glow DTD.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// --- Parameter Types (Glow DTD, ParameterType) ---

/// The primitive type tag of a parameter, value or tuple item.
///
/// This is a newtype rather than a closed enum because a decoded tree may carry
/// a tag the protocol does not define. Consumers decide what to do with such tags
/// (the XML exporter omits the affected value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ParameterType(pub i32);

impl ParameterType {
    pub const NULL: ParameterType = ParameterType(0);
    pub const INTEGER: ParameterType = ParameterType(1);
    pub const REAL: ParameterType = ParameterType(2);
    pub const STRING: ParameterType = ParameterType(3);
    pub const BOOLEAN: ParameterType = ParameterType(4);
    pub const TRIGGER: ParameterType = ParameterType(5);
    pub const ENUM: ParameterType = ParameterType(6);
    pub const OCTETS: ParameterType = ParameterType(7);

    /// Returns the raw protocol code.
    pub fn code(self) -> i32 {
        self.0
    }
}

impl From<i32> for ParameterType {
    fn from(code: i32) -> Self {
        ParameterType(code)
    }
}

/// Error returned when an integer does not name a variant of a protocol enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCode {
    /// The enumeration that rejected the code.
    pub kind: &'static str,
    /// The rejected code.
    pub code: i32,
}

impl fmt::Display for InvalidCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} code: {}", self.kind, self.code)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidCode {}

/// Declares a `#[repr(i32)]` enumeration with `code()` and `TryFrom<i32>`.
/// Used for closed sets of well-known numbers that are never stored in a tree.
macro_rules! protocol_enum {
    (
        $(#[$meta:meta])*
        $name:ident : $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code ),+
        }

        impl $name {
            /// Returns the integer code written on the wire.
            pub fn code(self) -> i32 {
                self as i32
            }
        }

        impl TryFrom<i32> for $name {
            type Error = InvalidCode;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                match code {
                    $( $code => Ok($name::$variant), )+
                    _ => Err(InvalidCode { kind: $label, code }),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }
    };
}

/// Declares an open protocol code: an `i32` newtype with one constant per
/// defined value. Codes the protocol does not define are kept as decoded.
macro_rules! protocol_code {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$cmeta:meta])* $constant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
        pub struct $name(pub i32);

        impl $name {
            $( $(#[$cmeta])* pub const $constant: $name = $name($code); )+

            /// Returns the integer code written on the wire.
            pub fn code(self) -> i32 {
                self.0
            }

            /// Returns `true` if the protocol defines this code.
            pub fn is_defined(self) -> bool {
                matches!(self.0, $( $code )|+)
            }
        }

        impl From<i32> for $name {
            fn from(code: i32) -> Self {
                $name(code)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

protocol_code! {
    /// Access rights of a parameter.
    ParameterAccess {
        NONE = 0,
        READ = 1,
        WRITE = 2,
        READ_WRITE = 3,
    }
}

protocol_code! {
    /// Connection topology of a matrix.
    MatrixType {
        ONE_TO_N = 0,
        ONE_TO_ONE = 1,
        N_TO_N = 2,
    }
}

protocol_code! {
    /// Whether matrix targets and sources are numbered contiguously.
    MatrixAddressingMode {
        LINEAR = 0,
        NON_LINEAR = 1,
    }
}

protocol_code! {
    /// The operation requested by a connection sent by a consumer.
    ConnectionOperation {
        /// The connection's sources replace the target's current sources.
        ABSOLUTE = 0,
        CONNECT = 1,
        DISCONNECT = 2,
    }
}

protocol_code! {
    /// The state of a connection reported by a provider.
    ConnectionDisposition {
        TALLY = 0,
        MODIFIED = 1,
        PENDING = 2,
        LOCKED = 3,
    }
}

protocol_code! {
    /// Field mask of a GetDirectory command.
    FieldFlags {
        SPARSE = -2,
        ALL = -1,
        DEFAULT = 0,
        IDENTIFIER = 1,
        DESCRIPTION = 2,
        TREE = 3,
        VALUE = 4,
        CONNECTIONS = 5,
    }
}

protocol_enum! {
    /// Well-known command numbers.
    CommandType: "CommandType" {
        Subscribe = 30,
        Unsubscribe = 31,
        GetDirectory = 32,
        Invoke = 33,
    }
}

protocol_code! {
    /// Packing of a parameter value inside a stream entry's octet string.
    StreamFormat {
        UNSIGNED_INT8 = 0,
        UNSIGNED_INT16_BIG_ENDIAN = 2,
        UNSIGNED_INT16_LITTLE_ENDIAN = 3,
        UNSIGNED_INT32_BIG_ENDIAN = 4,
        UNSIGNED_INT32_LITTLE_ENDIAN = 5,
        UNSIGNED_INT64_BIG_ENDIAN = 6,
        UNSIGNED_INT64_LITTLE_ENDIAN = 7,
        SIGNED_INT8 = 8,
        SIGNED_INT16_BIG_ENDIAN = 10,
        SIGNED_INT16_LITTLE_ENDIAN = 11,
        SIGNED_INT32_BIG_ENDIAN = 12,
        SIGNED_INT32_LITTLE_ENDIAN = 13,
        SIGNED_INT64_BIG_ENDIAN = 14,
        SIGNED_INT64_LITTLE_ENDIAN = 15,
        IEEE_FLOAT32_BIG_ENDIAN = 20,
        IEEE_FLOAT32_LITTLE_ENDIAN = 21,
        IEEE_FLOAT64_BIG_ENDIAN = 22,
        IEEE_FLOAT64_LITTLE_ENDIAN = 23,
    }
}

// --- Paths ---

/// Error type for invalid `Path` creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// A path must contain at least one step.
    Empty,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Empty => write!(f, "A path must contain at least one number"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PathError {}

/// The absolute address of an element: the numbers of every element from the
/// root down to (and including) the addressed element.
///
/// A `Path` is never empty. Its `Display` form joins the numbers with `.`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<u32>", into = "Vec<u32>")
)]
pub struct Path(Vec<u32>);

impl Path {
    /// Creates a path from its root-to-element numbers.
    pub fn new(numbers: Vec<u32>) -> Result<Self, PathError> {
        Self::try_from(numbers)
    }

    /// Returns a new path addressing the child `number` of this path.
    pub fn child(&self, number: u32) -> Path {
        let mut numbers = self.0.clone();
        numbers.push(number);
        Path(numbers)
    }

    /// The number of the addressed element itself.
    pub fn last(&self) -> u32 {
        // Non-empty by construction.
        self.0[self.0.len() - 1]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl TryFrom<Vec<u32>> for Path {
    type Error = PathError;

    fn try_from(numbers: Vec<u32>) -> Result<Self, Self::Error> {
        if numbers.is_empty() {
            Err(PathError::Empty)
        } else {
            Ok(Path(numbers))
        }
    }
}

impl TryFrom<&[u32]> for Path {
    type Error = PathError;

    fn try_from(numbers: &[u32]) -> Result<Self, Self::Error> {
        Path::try_from(numbers.to_vec())
    }
}

impl From<Path> for Vec<u32> {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl Deref for Path {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, number) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", number)?;
        }
        Ok(())
    }
}
