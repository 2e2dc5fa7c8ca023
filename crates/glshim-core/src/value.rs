//! Host runtime values and their conversion to native GL scalars.
//!
//! The host passes every argument as one machine word. Integers, booleans and
//! unit are *immediates*: the payload shifted left by one with the low bit
//! set. Doubles arrive unboxed and native handles arrive as raw pointers.

use std::ffi::c_void;
use std::fmt;

/// Calls with more arguments than this use the array convention
/// (`argv`/`argc`) instead of passing values directly.
pub const FAST_CALL_MAX_ARGS: usize = 5;

// =====================================================================
// Value
// =====================================================================

/// One host runtime value as seen at the native boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// A tagged immediate word, `(payload << 1) | 1`.
    Immediate(isize),
    /// An unboxed double.
    Double(f64),
    /// A raw native pointer or opaque handle.
    Pointer(*mut c_void),
}

impl Value {
    pub const UNIT: Value = Value::int(0);
    pub const FALSE: Value = Value::int(0);
    pub const TRUE: Value = Value::int(1);
    pub const NULL: Value = Value::Pointer(std::ptr::null_mut());

    /// Tag an integer payload. The top bit of `n` is lost, as in the host.
    pub const fn int(n: isize) -> Value {
        Value::Immediate(n.wrapping_shl(1) | 1)
    }

    pub const fn bool(b: bool) -> Value {
        if b {
            Value::TRUE
        } else {
            Value::FALSE
        }
    }

    /// Untagged payload of an immediate, or `None` for other shapes and for
    /// words without the tag bit.
    pub const fn as_int(self) -> Option<isize> {
        match self {
            Value::Immediate(word) if word & 1 == 1 => Some(word >> 1),
            _ => None,
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Immediate(word) if word & 1 == 1 => ValueKind::Immediate,
            Value::Immediate(_) => ValueKind::Untagged,
            Value::Double(_) => ValueKind::Double,
            Value::Pointer(_) => ValueKind::Pointer,
        }
    }
}

/// Shape of a [`Value`], used in conversion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Immediate,
    Untagged,
    Double,
    Pointer,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Immediate => "immediate",
            ValueKind::Untagged => "untagged word",
            ValueKind::Double => "double",
            ValueKind::Pointer => "pointer",
        })
    }
}

// =====================================================================
// Conversion traits
// =====================================================================

/// A value of the wrong shape was passed where a native type was expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueError {
    pub expected: &'static str,
    pub found: ValueKind,
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, found {}", self.expected, self.found)
    }
}

impl std::error::Error for ValueError {}

/// Unmarshal a host value into a native type.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

/// Marshal a native result back into a host value.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

fn expect_int(value: Value, expected: &'static str) -> Result<isize, ValueError> {
    value.as_int().ok_or(ValueError {
        expected,
        found: value.kind(),
    })
}

// Integers narrow with two's complement truncation, exactly like a C cast.
macro_rules! impl_int {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, ValueError> {
                    expect_int(value, stringify!($ty)).map(|n| n as $ty)
                }
            }

            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::int(self as isize)
                }
            }
        )*
    };
}

impl_int!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        expect_int(value, "bool").map(|n| n != 0)
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::bool(self)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Double(d) => Ok(d),
            other => Err(ValueError {
                expected: "double",
                found: other.kind(),
            }),
        }
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Double(self)
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        f64::from_value(value).map(|d| d as f32)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Double(self as f64)
    }
}

impl<T> FromValue for *const T {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        <*mut T>::from_value(value).map(|p| p as *const T)
    }
}

impl<T> FromValue for *mut T {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Pointer(p) => Ok(p.cast()),
            other => Err(ValueError {
                expected: "pointer",
                found: other.kind(),
            }),
        }
    }
}

impl<T> IntoValue for *const T {
    fn into_value(self) -> Value {
        Value::Pointer(self as *mut c_void)
    }
}

impl<T> IntoValue for *mut T {
    fn into_value(self) -> Value {
        Value::Pointer(self.cast())
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::UNIT
    }
}

/// Native GL boolean that decodes any non-zero immediate as true.
///
/// `GLboolean` is a plain `u8`, the same type as `GLubyte`, so it needs its
/// own wrapper to get boolean rather than byte semantics. The layout matches
/// `GLboolean`, so it can appear directly in native signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct GlBool(pub u8);

impl GlBool {
    pub const FALSE: GlBool = GlBool(0);
    pub const TRUE: GlBool = GlBool(1);

    pub fn get(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for GlBool {
    fn from(b: bool) -> Self {
        if b {
            GlBool::TRUE
        } else {
            GlBool::FALSE
        }
    }
}

impl From<u8> for GlBool {
    fn from(raw: u8) -> Self {
        GlBool(raw)
    }
}

impl From<GlBool> for u8 {
    fn from(b: GlBool) -> Self {
        b.0
    }
}

impl FromValue for GlBool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        bool::from_value(value).map(GlBool::from)
    }
}

impl IntoValue for GlBool {
    fn into_value(self) -> Value {
        Value::bool(self.get())
    }
}

// =====================================================================
// Arguments
// =====================================================================

/// Argument error raised before any native call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    Arity { expected: usize, found: usize },
    Type { index: usize, source: ValueError },
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::Arity { expected, found } => {
                write!(f, "expected {expected} arguments, got {found}")
            }
            ArgError::Type { index, source } => write!(f, "argument {index}: {source}"),
        }
    }
}

impl std::error::Error for ArgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgError::Arity { .. } => None,
            ArgError::Type { source, .. } => Some(source),
        }
    }
}

/// The argument list of one stub call.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub fn new(values: &'a [Value]) -> Self {
        Self { values }
    }

    /// Borrow the argument array of a slow call.
    ///
    /// # Safety
    ///
    /// `argv` must point to `argc` initialised values that outlive `'a`.
    pub unsafe fn from_raw(argv: *const Value, argc: usize) -> Self {
        if argc == 0 {
            return Self::new(&[]);
        }
        Self::new(std::slice::from_raw_parts(argv, argc))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the host passed these through the array convention.
    pub fn is_slow_call(&self) -> bool {
        self.values.len() > FAST_CALL_MAX_ARGS
    }

    pub fn expect_arity(&self, expected: usize) -> Result<(), ArgError> {
        if self.values.len() != expected {
            return Err(ArgError::Arity {
                expected,
                found: self.values.len(),
            });
        }
        Ok(())
    }

    pub fn get<T: FromValue>(&self, index: usize) -> Result<T, ArgError> {
        let value = *self.values.get(index).ok_or(ArgError::Arity {
            expected: index + 1,
            found: self.values.len(),
        })?;
        T::from_value(value).map_err(|source| ArgError::Type { index, source })
    }

    /// Sequential reader, used by generated stubs.
    pub fn cursor(&self) -> ArgCursor<'a> {
        ArgCursor {
            args: *self,
            next: 0,
        }
    }
}

/// Reads arguments left to right.
#[derive(Debug)]
pub struct ArgCursor<'a> {
    args: Args<'a>,
    next: usize,
}

impl ArgCursor<'_> {
    pub fn next<T: FromValue>(&mut self) -> Result<T, ArgError> {
        let value = self.args.get(self.next)?;
        self.next += 1;
        Ok(value)
    }
}
