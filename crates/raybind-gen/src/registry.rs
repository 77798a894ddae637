//! Static type registry: (C type name, pointer-ness) → Zig type and
//! marshalling strategy.
//!
//! The table is deliberately short. It covers only the types referenced by
//! allow-listed raylib functions, not raylib's whole type surface; looking
//! up anything else is a hard failure with no best-effort mode.

use crate::error::{GenError, Result};

/// How a value crosses the Zig → C shim boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarshalKind {
    /// Forwarded by value unchanged (bool, float, double).
    Passthrough,
    /// Forwarded with a numeric-width cast to `c_int`.
    CastInt,
    /// Zig slice surfaced as `[]const u8`, passed as `[*c]const u8`.
    CString,
    /// Struct-valued: local copy, address-of, passed as `[*c]r.<type>`.
    /// In return position this forces the call into out-parameter style.
    StructByPointer,
    /// Return position only; nothing crosses.
    Void,
}

/// One registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    /// Bare C type name (qualifiers stripped).
    pub c_name: &'static str,
    /// Whether the C-side type is a pointer.
    pub is_pointer: bool,
    /// Zig-side type in the generated binding.
    pub zig_type: &'static str,
    /// Marshalling strategy.
    pub kind: MarshalKind,
}

const fn struct_mapping(c_name: &'static str, zig_type: &'static str) -> TypeMapping {
    TypeMapping {
        c_name,
        is_pointer: false,
        zig_type,
        kind: MarshalKind::StructByPointer,
    }
}

/// The registry, keyed on (c_name, is_pointer).
const REGISTRY: &[TypeMapping] = &[
    TypeMapping {
        c_name: "void",
        is_pointer: false,
        zig_type: "void",
        kind: MarshalKind::Void,
    },
    TypeMapping {
        c_name: "char",
        is_pointer: true,
        zig_type: "[]const u8",
        kind: MarshalKind::CString,
    },
    TypeMapping {
        c_name: "bool",
        is_pointer: false,
        zig_type: "bool",
        kind: MarshalKind::Passthrough,
    },
    TypeMapping {
        c_name: "float",
        is_pointer: false,
        zig_type: "f32",
        kind: MarshalKind::Passthrough,
    },
    TypeMapping {
        c_name: "double",
        is_pointer: false,
        zig_type: "f64",
        kind: MarshalKind::Passthrough,
    },
    TypeMapping {
        c_name: "int",
        is_pointer: false,
        zig_type: "i32",
        kind: MarshalKind::CastInt,
    },
    struct_mapping("Font", "t.Font"),
    struct_mapping("Rectangle", "t.Rectangle"),
    struct_mapping("Camera2D", "t.Camera2D"),
    struct_mapping("Vector2", "t.Vector2"),
    struct_mapping("Color", "t.Color"),
    struct_mapping("Matrix", "t.Matrix"),
    struct_mapping("Texture2D", "t.Texture2D"),
];

impl TypeMapping {
    /// Whether this is a struct-valued type that must cross by address.
    pub fn is_struct(&self) -> bool {
        matches!(self.kind, MarshalKind::StructByPointer)
    }

    /// Whether this mapping is `void`.
    pub fn is_void(&self) -> bool {
        matches!(self.kind, MarshalKind::Void)
    }

    /// Render the Zig-side expression forwarding `name` into the shim call.
    ///
    /// Struct-valued arguments reference the local copy `_name` made by the
    /// wrapper body. Returns `None` for `void`.
    pub fn marshal_expr(&self, name: &str) -> Option<String> {
        match self.kind {
            MarshalKind::Void => None,
            MarshalKind::Passthrough => Some(name.to_string()),
            MarshalKind::CastInt => Some(format!("@intCast(c_int, {name})")),
            MarshalKind::CString => Some(format!("@ptrCast([*c]const u8, {name}.ptr)")),
            MarshalKind::StructByPointer => {
                Some(format!("@ptrCast([*c]r.{}, &_{name})", self.c_name))
            }
        }
    }

    /// Render the C-side shim parameter declaration for `name`.
    ///
    /// Struct-valued parameters and strings are declared as pointers;
    /// scalars keep their bare type.
    pub fn c_param_decl(&self, name: &str) -> String {
        match self.kind {
            MarshalKind::Void => String::new(),
            MarshalKind::Passthrough | MarshalKind::CastInt => {
                format!("{} {name}", self.c_name)
            }
            MarshalKind::CString => format!("const char *{name}"),
            MarshalKind::StructByPointer => format!("{} *{name}", self.c_name),
        }
    }

    /// Render the argument expression the shim body forwards to raylib.
    ///
    /// Struct-valued parameters arrive as pointers and are dereferenced on
    /// the way in; everything else forwards untouched.
    pub fn c_forward_expr(&self, name: &str) -> String {
        match self.kind {
            MarshalKind::StructByPointer => format!("*{name}"),
            _ => name.to_string(),
        }
    }
}

/// Look up a (type name, pointer) pair.
///
/// An unregistered pair aborts the whole run; the error names the offending
/// type and its pointer-ness.
pub fn lookup(type_name: &str, is_pointer: bool) -> Result<&'static TypeMapping> {
    REGISTRY
        .iter()
        .find(|m| m.c_name == type_name && m.is_pointer == is_pointer)
        .ok_or_else(|| GenError::UnknownType {
            name: type_name.to_string(),
            is_pointer,
        })
}
