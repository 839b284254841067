use std::{io::Result, path::Path};

/// Names of the member directories under `members_dir`, sorted.
/// Plain files and dot-prefixed entries are skipped.
pub fn list_members(members_dir: &Path) -> Result<Vec<String>> {
    let mut members = Vec::new();
    for entry in members_dir.read_dir()? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') || !entry.path().is_dir() {
            continue;
        }
        members.push(name);
    }
    members.sort();
    Ok(members)
}
