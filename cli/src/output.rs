use std::io::{self, Write};
use std::path::Path;

/// Write the validation report for `path` to `w` and return whether the
/// document was valid.
///
/// Two lines either way: a status line, then either the top-level keys in
/// file order or the diagnostic. Read failures and syntax failures share
/// the failure shape.
pub fn report(w: &mut impl Write, path: &Path) -> io::Result<bool> {
    match validator::validate_file(path) {
        Ok(document) => {
            writeln!(w, "✅ {} is valid TOML!", path.display())?;
            writeln!(w, "📊 Parsed sections: {:?}", document.top_level_keys())?;
            Ok(true)
        }
        Err(err) => {
            writeln!(w, "❌ {} has TOML syntax errors:", path.display())?;
            writeln!(w, "   Error: {err}")?;
            Ok(false)
        }
    }
}
