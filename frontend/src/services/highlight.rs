//! Syntax highlighting helpers.
//!
//! The language tag is derived from the file extension; the highlighting
//! itself is delegated to Prism through `src/js/highlight.js`.

use wasm_bindgen::prelude::*;

/// Highlighting language for a file name.
///
/// Looks at the text after the last `.`, case-insensitively. Unknown or
/// missing extensions map to `"text"`.
pub fn language_for(filename: &str) -> &'static str {
    let extension = filename.rsplit('.').next().unwrap_or_default().to_lowercase();

    match extension.as_str() {
        "js" | "jsx" | "ts" | "tsx" => "javascript",
        "py" => "python",
        "html" | "htm" => "html",
        "css" => "css",
        "json" => "json",
        "xml" => "xml",
        "yaml" | "yml" => "yaml",
        "md" => "markdown",
        "sh" | "bash" => "bash",
        "c" => "c",
        "cpp" | "cxx" => "cpp",
        "java" => "java",
        "php" | "phtml" => "php",
        "rb" => "ruby",
        "go" => "go",
        "rs" => "rust",
        "swift" => "swift",
        "kt" | "kts" => "kotlin",
        "sql" => "sql",
        "txt" => "text",
        "asm" => "nasm",
        _ => "text",
    }
}

/// Highlight a rendered `<code class="language-...">` element in place.
pub fn highlight(element: &web_sys::Element) {
    highlight_element(element);
}

#[wasm_bindgen(module = "/src/js/highlight.js")]
extern "C" {
    #[wasm_bindgen(js_name = "highlightElement")]
    fn highlight_element(element: &web_sys::Element);
}
