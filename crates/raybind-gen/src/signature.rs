//! Signature mapping: resolve one extracted declaration against the type
//! registry and decide its calling convention.

use crate::cdecl::{parse_params, RawDecl};
use crate::error::Result;
use crate::registry::{self, TypeMapping};

/// A parameter resolved through the registry.
#[derive(Debug, Clone)]
pub struct MappedParam {
    /// Parameter name from the declaration.
    pub name: String,
    /// Registry entry for the parameter type.
    pub mapping: &'static TypeMapping,
}

/// A fully resolved declaration, computed once and then borrowed read-only
/// by all three emitters.
#[derive(Debug, Clone)]
pub struct MappedSignature {
    /// Function name (unprefixed; emitters add the shim prefix).
    pub name: String,
    /// Parameters in declaration order.
    pub params: Vec<MappedParam>,
    /// Return type mapping.
    pub ret: &'static TypeMapping,
}

impl MappedSignature {
    /// Resolve a raw declaration.
    ///
    /// Fails on malformed parameter tokens or types absent from the
    /// registry; both abort the whole run.
    pub fn map(raw: &RawDecl) -> Result<Self> {
        let mut params = Vec::new();
        for p in parse_params(&raw.params)? {
            let mapping = registry::lookup(&p.type_name, p.is_pointer)?;
            params.push(MappedParam {
                name: p.name,
                mapping,
            });
        }

        // Allow-listed raylib functions never return pointer types.
        let ret = registry::lookup(&raw.return_type, false)?;

        Ok(MappedSignature {
            name: raw.name.clone(),
            params,
            ret,
        })
    }

    /// Whether the struct-valued return crosses the boundary through a
    /// leading out-parameter, making the shim's visible return type void.
    /// Callers of the Zig binding still see an ordinary value return.
    pub fn returns_via_out(&self) -> bool {
        self.ret.is_struct()
    }
}
