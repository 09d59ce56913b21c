use std::path::{Path, PathBuf};

pub fn read_folder(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            files.extend(read_folder(&path)?);
        }
    }

    files.sort();

    Ok(files)
}

/// Files of `folder_path` (recursively) with the given extension.
pub fn read_folder_with_extension(
    folder_path: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = read_folder(folder_path)?;
    files.retain(|path| path.extension().is_some_and(|ext| ext == extension));
    Ok(files)
}
