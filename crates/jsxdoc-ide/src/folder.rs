//! Component-folder names derived from definition paths.

use std::path::{Component, Path};

/// Build output directories that sit between a package root and its
/// component folders.
const BUILD_DIRS: &[&str] = &["lib", "es", "esm", "cjs", "dist", "src"];

/// The component folder of a definition inside `module_root`, in Pascal case.
///
/// `node_modules/antd/lib/date-picker/index.d.ts` gives `DatePicker`.
/// Returns `None` when the path is outside the module or names a file
/// directly under it.
#[must_use]
pub fn component_folder(path: &Path, module_root: &Path) -> Option<String> {
    let root: Vec<Component<'_>> = module_root.components().collect();
    if root.is_empty() {
        return None;
    }
    let own: Vec<Component<'_>> = path.components().collect();
    let start = own
        .windows(root.len())
        .position(|window| window == root.as_slice())?
        + root.len();

    // The last component is the file itself.
    let dirs = own.get(start..own.len().saturating_sub(1))?;
    dirs.iter()
        .filter_map(|c| match c {
            Component::Normal(name) => name.to_str(),
            _ => None,
        })
        .find(|name| !BUILD_DIRS.contains(name))
        .map(pascal_case)
}

/// `date-picker` → `DatePicker`; `_util` → `Util`.
#[must_use]
pub fn pascal_case(folder: &str) -> String {
    folder
        .split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect()
}
