//! The three output renderers.
//!
//! All three consume the same [`MappedSignature`] and stay structurally
//! consistent: identical argument order, the same hidden out-parameter for
//! struct-valued returns, and the same copy-then-address-of pattern for
//! struct-valued arguments. Rendering is a pure function of the signature,
//! so re-running on unchanged input reproduces byte-identical documents.

use crate::signature::MappedSignature;

/// Symbol prefix for shim functions, avoiding collisions with raylib itself.
pub const SHIM_PREFIX: &str = "m";

/// Name of the hidden out-parameter carrying struct-valued returns.
const OUT_PARAM: &str = "out";

/// Fixed prelude of the generated Zig document.
pub const ZIG_PRELUDE: &str = r#"const std = @import("std");
const r = @cImport({
    @cInclude("raylib_marshall.h");
});
const t = @import("types.zig");
"#;

/// Fixed include block shared by the shim header and implementation.
pub const C_INCLUDES: &str = r#"#include "raylib.h"
#include "raymath.h"
#include "extras/raygui.h"
"#;

/// Render the Zig binding function.
///
/// The body copies struct-valued arguments into locals, invokes the shim
/// with the out-parameter first when present, and preserves value-return
/// semantics for its callers.
pub fn zig_fn(sig: &MappedSignature) -> String {
    let params: Vec<String> = sig
        .params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.mapping.zig_type))
        .collect();

    let mut out = format!(
        "pub fn {}({}) {} {{\n",
        sig.name,
        params.join(", "),
        sig.ret.zig_type
    );

    for p in sig.params.iter().filter(|p| p.mapping.is_struct()) {
        out.push_str(&format!("    var _{} = {};\n", p.name, p.name));
    }

    let mut call_args: Vec<String> = Vec::new();
    if sig.returns_via_out() {
        out.push_str(&format!(
            "    var _{OUT_PARAM}: {} = undefined;\n",
            sig.ret.zig_type
        ));
        if let Some(expr) = sig.ret.marshal_expr(OUT_PARAM) {
            call_args.push(expr);
        }
    }
    for p in &sig.params {
        if let Some(expr) = p.mapping.marshal_expr(&p.name) {
            call_args.push(expr);
        }
    }

    let callee = format!("r.{SHIM_PREFIX}{}", sig.name);
    let call = if call_args.is_empty() {
        format!("{callee}()")
    } else {
        format!("{callee}(\n        {},\n    )", call_args.join(",\n        "))
    };

    if sig.returns_via_out() {
        out.push_str(&format!("    {call};\n    return _{OUT_PARAM};\n"));
    } else if sig.ret.is_void() {
        out.push_str(&format!("    {call};\n"));
    } else {
        out.push_str(&format!("    return {call};\n"));
    }
    out.push('}');
    out
}

/// Render the shim prototype for the header document.
pub fn c_prototype(sig: &MappedSignature) -> String {
    format!("{};", c_signature(sig))
}

/// Render the shim definition forwarding into the native library.
///
/// Struct-valued parameters arrive by pointer and are dereferenced on the
/// way in; a struct-valued return is written through the out-parameter.
pub fn c_definition(sig: &MappedSignature) -> String {
    let args: Vec<String> = sig
        .params
        .iter()
        .map(|p| p.mapping.c_forward_expr(&p.name))
        .collect();
    let call = format!("{}({})", sig.name, args.join(", "));

    let body = if sig.returns_via_out() {
        format!("    *{OUT_PARAM} = {call};")
    } else if sig.ret.is_void() {
        format!("    {call};")
    } else {
        format!("    return {call};")
    };

    format!("{}\n{{\n{body}\n}}", c_signature(sig))
}

/// Shim signature shared by prototype and definition. The struct-valued
/// return becomes `void` plus a leading pointer out-parameter.
fn c_signature(sig: &MappedSignature) -> String {
    let ret = if sig.returns_via_out() {
        "void"
    } else {
        sig.ret.c_name
    };

    let mut params: Vec<String> = Vec::new();
    if sig.returns_via_out() {
        params.push(format!("{} *{OUT_PARAM}", sig.ret.c_name));
    }
    for p in &sig.params {
        params.push(p.mapping.c_param_decl(&p.name));
    }

    let params = if params.is_empty() {
        "void".to_string()
    } else {
        params.join(", ")
    };

    format!("{ret} {SHIM_PREFIX}{}({params})", sig.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdecl::RawDecl;
    use crate::signature::MappedSignature;

    fn sig(return_type: &str, name: &str, params: &str) -> MappedSignature {
        MappedSignature::map(&RawDecl {
            return_type: return_type.to_string(),
            name: name.to_string(),
            params: params.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn struct_return_becomes_out_parameter() {
        let s = sig("Vector2", "GetMousePosition", "void");

        assert_eq!(c_prototype(&s), "void mGetMousePosition(Vector2 *out);");
        assert_eq!(
            c_definition(&s),
            "void mGetMousePosition(Vector2 *out)\n{\n    *out = GetMousePosition();\n}"
        );
        assert_eq!(
            zig_fn(&s),
            "pub fn GetMousePosition() t.Vector2 {\n\
             \x20   var _out: t.Vector2 = undefined;\n\
             \x20   r.mGetMousePosition(\n\
             \x20       @ptrCast([*c]r.Vector2, &_out),\n\
             \x20   );\n\
             \x20   return _out;\n\
             }"
        );
    }

    #[test]
    fn struct_argument_copied_then_passed_by_address() {
        let s = sig(
            "void",
            "DrawText",
            "const char *text, int posX, int posY, int fontSize, Color color",
        );

        assert_eq!(
            c_prototype(&s),
            "void mDrawText(const char *text, int posX, int posY, int fontSize, Color *color);"
        );
        assert_eq!(
            c_definition(&s),
            "void mDrawText(const char *text, int posX, int posY, int fontSize, Color *color)\n\
             {\n\
             \x20   DrawText(text, posX, posY, fontSize, *color);\n\
             }"
        );

        let zig = zig_fn(&s);
        assert!(zig.starts_with(
            "pub fn DrawText(text: []const u8, posX: i32, posY: i32, fontSize: i32, color: t.Color) void {"
        ));
        // The argument is copied into a local before its address is taken.
        assert!(zig.contains("var _color = color;"));
        assert!(zig.contains("@ptrCast([*c]r.Color, &_color)"));
        // Call-site argument order matches declaration order.
        let text_pos = zig.find("text.ptr").unwrap();
        let color_pos = zig.find("&_color").unwrap();
        assert!(text_pos < color_pos);
    }

    #[test]
    fn scalar_return_forwards_directly() {
        let s = sig("int", "GetFPS", "void");
        assert_eq!(c_prototype(&s), "int mGetFPS(void);");
        assert_eq!(c_definition(&s), "int mGetFPS(void)\n{\n    return GetFPS();\n}");
        assert_eq!(zig_fn(&s), "pub fn GetFPS() i32 {\n    return r.mGetFPS();\n}");
    }

    #[test]
    fn void_return_is_a_bare_call() {
        let s = sig("void", "EndDrawing", "void");
        assert_eq!(c_definition(&s), "void mEndDrawing(void)\n{\n    EndDrawing();\n}");
        assert_eq!(zig_fn(&s), "pub fn EndDrawing() void {\n    r.mEndDrawing();\n}");
    }

    #[test]
    fn out_parameter_leads_remaining_arguments() {
        let s = sig(
            "Vector2",
            "GetScreenToWorld2D",
            "Vector2 position, Camera2D camera",
        );
        assert_eq!(
            c_prototype(&s),
            "void mGetScreenToWorld2D(Vector2 *out, Vector2 *position, Camera2D *camera);"
        );
        assert_eq!(
            c_definition(&s),
            "void mGetScreenToWorld2D(Vector2 *out, Vector2 *position, Camera2D *camera)\n\
             {\n\
             \x20   *out = GetScreenToWorld2D(*position, *camera);\n\
             }"
        );

        let zig = zig_fn(&s);
        let out_pos = zig.find("&_out").unwrap();
        let position_pos = zig.find("&_position").unwrap();
        assert!(out_pos < position_pos);
    }

    #[test]
    fn rendering_is_deterministic() {
        let s = sig("Texture2D", "LoadTexture", "const char *fileName");
        assert_eq!(zig_fn(&s), zig_fn(&s));
        assert_eq!(c_prototype(&s), c_prototype(&s));
        assert_eq!(c_definition(&s), c_definition(&s));
    }
}
