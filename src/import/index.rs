use crate::errors::{Result, SyncError};
use crate::utils::log_utils::Logger;
use std::fs;
use std::path::Path;
use toml::{Table, Value};

/// Load the index, falling back to an empty table when it is missing or unparseable
pub fn load_index(index_file: &Path, logger: &Logger) -> Table {
    if !index_file.exists() {
        return Table::new();
    }
    match fs::read_to_string(index_file)
        .map_err(SyncError::from)
        .and_then(|content| {
            content
                .parse::<Table>()
                .map_err(|e| SyncError::Index(e.to_string()))
        }) {
        Ok(table) => table,
        Err(e) => {
            logger.warn(&format!("Could not load existing TOML file: {e}"));
            Table::new()
        }
    }
}

/// Append one `{ file = "<name>" }` entry per image to the `images` array
pub fn append_images(index: &mut Table, image_files: &[String], logger: &Logger) {
    let entry = index
        .entry("images")
        .or_insert(Value::Array(Vec::new()));
    if !entry.is_array() {
        logger.warn("'images' in the index is not an array, replacing it");
        *entry = Value::Array(Vec::new());
    }

    if let Value::Array(images) = entry {
        for name in image_files {
            let mut row = Table::new();
            row.insert("file".to_string(), Value::String(name.clone()));
            images.push(Value::Table(row));
        }
    }
}

/// Write the index back out
///
/// # Errors
///
/// Returns an error if the table cannot be serialized or the file cannot be written.
pub fn save_index(index_file: &Path, index: &Table) -> Result<()> {
    let content = toml::to_string(index).map_err(|e| SyncError::Index(e.to_string()))?;
    fs::write(index_file, content)?;
    Ok(())
}

/// Add imported images to the TOML index file. Failures are logged, never returned.
pub fn update_index(index_file: &Path, image_files: &[String], logger: &Logger) {
    let mut index = load_index(index_file, logger);
    append_images(&mut index, image_files, logger);
    match save_index(index_file, &index) {
        Ok(()) => logger.normal(&format!("Updated TOML index file: {}", index_file.display())),
        Err(e) => logger.error(&format!("Could not write TOML file: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn creates_index_with_images_array() {
        let tmp = tempfile::tempdir().unwrap();
        let index_file = tmp.path().join("gallery.toml");
        let logger = Logger::new(0);

        update_index(&index_file, &files(&["LOP25-0001.jpeg", "LOP25-0002.jpeg"]), &logger);

        let table: Table = fs::read_to_string(&index_file).unwrap().parse().unwrap();
        let images = table["images"].as_array().unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[1]["file"].as_str(), Some("LOP25-0002.jpeg"));
    }

    #[test]
    fn keeps_existing_entries_and_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let index_file = tmp.path().join("gallery.toml");
        fs::write(
            &index_file,
            "title = \"Gallery\"\n\n[[images]]\nfile = \"LOP25-0001.jpeg\"\n",
        )
        .unwrap();

        update_index(&index_file, &files(&["LOP25-0002.jpeg"]), &Logger::new(0));

        let table: Table = fs::read_to_string(&index_file).unwrap().parse().unwrap();
        assert_eq!(table["title"].as_str(), Some("Gallery"));
        let names: Vec<&str> = table["images"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v["file"].as_str())
            .collect();
        assert_eq!(names, ["LOP25-0001.jpeg", "LOP25-0002.jpeg"]);
    }

    #[test]
    fn unparseable_index_starts_over() {
        let tmp = tempfile::tempdir().unwrap();
        let index_file = tmp.path().join("gallery.toml");
        fs::write(&index_file, "this is [not toml").unwrap();

        let index = load_index(&index_file, &Logger::new(0));
        assert!(index.is_empty());
    }
}
