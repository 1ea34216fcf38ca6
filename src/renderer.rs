//! Desktop entry renderer.
//!
//! Produces the fixed `[Desktop Entry]` document. Line order, empty fields
//! and the trailing newline are part of the on-disk contract: identical
//! inputs must render byte-identical files.

use crate::entry::LauncherSpec;

/// Render a launcher spec into desktop entry text.
pub fn render(spec: &LauncherSpec) -> String {
    format!(
        "[Desktop Entry]\n\
         Encoding=UTF-8\n\
         Version=1.0\n\
         Name={}\n\
         GenericName={}\n\
         Exec={}\n\
         Terminal={}\n\
         Icon={}\n\
         Type=Application\n\
         Categories={}\n\
         Comment={}\n",
        spec.name,
        spec.generic_name,
        spec.exec,
        spec.terminal,
        spec.icon,
        spec.categories.join(","),
        spec.comment
    )
}
