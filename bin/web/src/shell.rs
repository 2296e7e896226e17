//! HTML shell for standalone runs.
//!
//! Inside Shiny the host page provides the mount element and script tag;
//! the dev server serves this shell instead.

/// Id of the element the app mounts into.
pub const MOUNT_ID: &str = "app";

/// Renders the page that loads the wasm bundle from `static_prefix` and
/// calls its `mount` export.
#[must_use]
pub fn render_shell(static_prefix: &str, output_name: &str) -> String {
    let prefix = static_prefix.trim_end_matches('/');
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="utf-8"/>
        <meta name="viewport" content="width=device-width, initial-scale=1"/>
        <link rel="stylesheet" href="{prefix}/main.css"/>
    </head>
    <body>
        <div id="{MOUNT_ID}"></div>
        <script type="module">
            import init, {{ mount }} from "{prefix}/pkg/{output_name}.js";
            await init();
            mount();
        </script>
    </body>
</html>
"#
    )
}
