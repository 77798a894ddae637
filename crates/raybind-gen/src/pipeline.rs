//! Whole-run generation pipeline: extract → allow-list filter → map → render.
//!
//! The run is a single synchronous batch. Fragments accumulate in owned
//! vectors and are joined into three complete documents at the end; any
//! fatal error returns before a document exists, so callers can never
//! observe partial output.

use crate::cdecl;
use crate::emit;
use crate::error::Result;
use crate::signature::MappedSignature;

/// The three rendered documents plus run accounting.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Zig binding source.
    pub zig: String,
    /// C shim header.
    pub header: String,
    /// C shim implementation.
    pub implementation: String,
    /// Names that produced bindings, in extraction order.
    pub functions: Vec<String>,
    /// Allow-listed names that never produced a binding.
    pub missing: Vec<String>,
}

/// Run generation over concatenated header text.
///
/// `allowlist` is the ordered set of function names to bind. Declarations
/// not on the list are dropped silently; allow-listed names that never
/// match are reported in [`Generated::missing`] rather than failing the
/// run. One console line is logged per accepted function.
pub fn generate(header_text: &str, allowlist: &[String]) -> Result<Generated> {
    let mut zig_fragments = Vec::new();
    let mut header_fragments = Vec::new();
    let mut impl_fragments = Vec::new();
    let mut functions = Vec::new();

    for raw in cdecl::scan(header_text) {
        if !allowlist.iter().any(|n| n == &raw.name) {
            continue;
        }
        println!("generating binding for: {}", raw.name);

        let sig = MappedSignature::map(&raw)?;
        zig_fragments.push(emit::zig_fn(&sig));
        header_fragments.push(emit::c_prototype(&sig));
        impl_fragments.push(emit::c_definition(&sig));
        functions.push(sig.name);
    }

    let missing = allowlist
        .iter()
        .filter(|n| !functions.contains(n))
        .cloned()
        .collect();

    Ok(Generated {
        zig: assemble(emit::ZIG_PRELUDE, &zig_fragments),
        header: assemble(emit::C_INCLUDES, &header_fragments),
        implementation: assemble(emit::C_INCLUDES, &impl_fragments),
        functions,
        missing,
    })
}

fn assemble(preamble: &str, fragments: &[String]) -> String {
    let mut doc = String::from(preamble);
    doc.push('\n');
    doc.push_str(&fragments.join("\n\n"));
    doc.push('\n');
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"
// Window-related functions
RLAPI void InitWindow(int width, int height, const char *title);  // Initialize window
RLAPI bool WindowShouldClose(void);
RLAPI void CloseWindow(void);
RLAPI Vector2 GetMousePosition(void);
RLAPI void DrawText(const char *text, int posX, int posY, int fontSize, Color color);
RLAPI Texture2D LoadTexture(const char *fileName);
RLAPI void SetWindowIcon(Image image);
"#;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn one_fragment_per_target_per_function() {
        let allow = names(&["InitWindow", "GetMousePosition", "DrawText"]);
        let generated = generate(HEADER, &allow).unwrap();

        assert_eq!(generated.functions, allow);
        assert!(generated.missing.is_empty());
        assert_eq!(generated.zig.matches("pub fn ").count(), 3);
        // The include preamble has no semicolons, so each counts a prototype.
        assert_eq!(generated.header.matches(';').count(), 3);
        assert_eq!(generated.implementation.matches("\n{\n").count(), 3);
    }

    #[test]
    fn non_allowlisted_functions_emit_nothing() {
        let allow = names(&["InitWindow"]);
        let generated = generate(HEADER, &allow).unwrap();

        assert_eq!(generated.functions, vec!["InitWindow"]);
        assert!(!generated.zig.contains("WindowShouldClose"));
        assert!(!generated.header.contains("mCloseWindow"));
    }

    #[test]
    fn documents_carry_preambles() {
        let generated = generate(HEADER, &names(&["CloseWindow"])).unwrap();
        assert!(generated.zig.starts_with("const std = @import(\"std\");"));
        assert!(generated.header.starts_with("#include \"raylib.h\""));
        assert!(generated.implementation.starts_with("#include \"raylib.h\""));
    }

    #[test]
    fn missing_names_reported_not_fatal() {
        let allow = names(&["InitWindow", "MatrixIdentity", "QuaternionFromMatrix"]);
        let generated = generate(HEADER, &allow).unwrap();

        assert_eq!(generated.functions, vec!["InitWindow"]);
        assert_eq!(generated.missing, names(&["MatrixIdentity", "QuaternionFromMatrix"]));
        // The documents still render for what was found.
        assert!(generated.zig.contains("pub fn InitWindow"));
    }

    #[test]
    fn unknown_type_in_allowlisted_function_aborts() {
        // Image is not registered; SetWindowIcon is only fatal when requested.
        let err = generate(HEADER, &names(&["SetWindowIcon"])).unwrap_err();
        assert!(err.to_string().contains("Image"), "{err}");
    }

    #[test]
    fn unknown_type_outside_allowlist_is_harmless() {
        let generated = generate(HEADER, &names(&["CloseWindow"])).unwrap();
        assert_eq!(generated.functions, vec!["CloseWindow"]);
    }

    #[test]
    fn extraction_order_preserved_over_allowlist_order() {
        let allow = names(&["DrawText", "InitWindow"]);
        let generated = generate(HEADER, &allow).unwrap();
        assert_eq!(generated.functions, vec!["InitWindow", "DrawText"]);
    }

    #[test]
    fn generation_is_idempotent() {
        let allow = names(&["InitWindow", "GetMousePosition", "DrawText", "LoadTexture"]);
        let first = generate(HEADER, &allow).unwrap();
        let second = generate(HEADER, &allow).unwrap();

        assert_eq!(first.zig, second.zig);
        assert_eq!(first.header, second.header);
        assert_eq!(first.implementation, second.implementation);
    }

    #[test]
    fn empty_allowlist_yields_empty_documents() {
        let generated = generate(HEADER, &[]).unwrap();
        assert!(generated.functions.is_empty());
        assert!(generated.zig.ends_with("\n"));
        assert!(!generated.zig.contains("pub fn"));
    }
}
