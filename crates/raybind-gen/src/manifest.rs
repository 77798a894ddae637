//! `raybind.toml` manifest: input headers, output paths, allow-list.
//!
//! Editing the allow-list is the only supported way to add or remove
//! generated bindings. An empty (or omitted) `functions` key falls back to
//! the built-in raylib list.

use serde::Deserialize;

use crate::error::{GenError, Result};

/// The built-in allow-list: every raylib function the marshalling layer
/// binds by default. The raymath names at the end live in `raymath.h`,
/// which is not among the default input headers; they surface through the
/// missing-functions warning until that header is added.
pub const DEFAULT_FUNCTIONS: &[&str] = &[
    // window
    "InitWindow",
    "SetWindowSize",
    "SetWindowMinSize",
    "WindowShouldClose",
    "CloseWindow",
    "GetScreenWidth",
    "GetScreenHeight",
    "SetWindowMonitor",
    "SetWindowPosition",
    // data
    "OpenURL",
    // timing
    "SetTargetFPS",
    "GetFPS",
    "GetFrameTime",
    "GetTime",
    // camera
    "BeginMode2D",
    "GetScreenToWorld2D",
    "GetWorldToScreen2D",
    "EndMode2D",
    "GetCameraMatrix2D",
    // drawing
    "ClearBackground",
    "BeginDrawing",
    "EndDrawing",
    // shapes
    "DrawLineEx",
    "DrawRectanglePro",
    // textures
    "LoadTexture",
    "UnloadTexture",
    "DrawTextureEx",
    "DrawTexturePro",
    "DrawTextureRec",
    // text
    "DrawText",
    "DrawFPS",
    // touch
    "GetTouchPointCount",
    "GetTouchPosition",
    // mouse
    "IsCursorOnScreen",
    "GetMousePosition",
    "GetMouseDelta",
    "IsMouseButtonDown",
    "IsMouseButtonPressed",
    "IsMouseButtonReleased",
    "IsMouseButtonUp",
    "SetMouseOffset",
    "SetMouseScale",
    "GetMouseWheelMove",
    "SetMouseCursor",
    // keyboard
    "IsKeyPressed",
    "IsKeyDown",
    "IsKeyReleased",
    "IsKeyUp",
    "SetExitKey",
    "GetKeyPressed",
    "GetCharPressed",
    // math
    "MatrixIdentity",
    "MatrixMultiply",
    "QuaternionFromMatrix",
    "QuaternionFromAxisAngle",
    "QuaternionToAxisAngle",
];

/// A complete bind manifest parsed from a `raybind.toml` file.
///
/// `functions` is a top-level key, so in TOML it must appear before the
/// first `[table]` header. The sections reject unknown fields, so a
/// `functions` key that drifts under `[output]` is a parse error rather
/// than a silently ignored allow-list.
#[derive(Debug, Clone, Deserialize)]
pub struct BindManifest {
    /// Allow-list of function names; empty means the built-in list.
    #[serde(default)]
    pub functions: Vec<String>,
    /// The native library being bound.
    pub library: LibraryConfig,
    /// Output file paths, each overwritten wholesale on every run.
    pub output: OutputConfig,
}

/// Native library section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryConfig {
    /// Library name.
    #[serde(default = "default_library_name")]
    pub name: String,
    /// Header files, read in order and concatenated with a newline.
    pub headers: Vec<String>,
}

fn default_library_name() -> String {
    "raylib".to_string()
}

/// Output paths section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Zig binding source file.
    pub zig: String,
    /// C shim header.
    pub header: String,
    /// C shim implementation.
    pub implementation: String,
}

impl Default for BindManifest {
    fn default() -> Self {
        BindManifest {
            library: LibraryConfig {
                name: default_library_name(),
                headers: vec![
                    "raylib/src/raylib.h".to_string(),
                    "raylib/src/extras/raygui.h".to_string(),
                ],
            },
            output: OutputConfig {
                zig: "src/ray/gen.zig".to_string(),
                header: "emscripten/raylib_marshall_gen.h".to_string(),
                implementation: "emscripten/raylib_marshall_gen.c".to_string(),
            },
            functions: Vec::new(),
        }
    }
}

impl BindManifest {
    /// Parse a manifest from a TOML string.
    pub fn parse(input: &str) -> Result<Self> {
        let manifest: BindManifest = toml::from_str(input).map_err(GenError::Toml)?;

        if manifest.library.headers.is_empty() {
            return Err(GenError::InvalidManifest {
                detail: "library.headers must list at least one header".to_string(),
            });
        }
        for path in [
            &manifest.output.zig,
            &manifest.output.header,
            &manifest.output.implementation,
        ] {
            if path.is_empty() {
                return Err(GenError::InvalidManifest {
                    detail: "output paths must be non-empty".to_string(),
                });
            }
        }

        Ok(manifest)
    }

    /// Parse a manifest from a file path.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// The effective allow-list: the manifest's functions, or the built-in
    /// list when none are given.
    pub fn allowlist(&self) -> Vec<String> {
        if self.functions.is_empty() {
            DEFAULT_FUNCTIONS.iter().map(|s| s.to_string()).collect()
        } else {
            self.functions.clone()
        }
    }

    /// Generate the starter manifest for `raybind init`.
    pub fn template(name: &str) -> String {
        format!(
            r#"# Empty means the built-in raylib allow-list. Top-level key:
# keep it above the section headers.
functions = []

[library]
name = "{name}"
headers = ["raylib/src/raylib.h", "raylib/src/extras/raygui.h"]

[output]
zig = "src/ray/gen.zig"
header = "emscripten/raylib_marshall_gen.h"
implementation = "emscripten/raylib_marshall_gen.c"
"#
        )
    }
}
