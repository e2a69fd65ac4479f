use crate::models::{DocumentMeta, MarkdownFile};
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid wiki directory: {0}")]
    InvalidWikiDir(String),
    #[error("Invalid article metadata in {path}: {source}")]
    Meta {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Read an article or sidecar relative to the wiki root
pub fn read_file(relative_path: &RelativePath, wiki_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(wiki_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write a converted page, creating parent directories as needed
pub fn write_file(
    relative_path: &RelativePath,
    output_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(output_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown articles in the wiki directory
pub fn scan_markdown_files(wiki_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !wiki_root.exists() {
        return Err(IoError::InvalidWikiDir(
            "wiki directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(wiki_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_wiki_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidWikiDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

/// Parse a metadata sidecar file.
pub fn load_meta(path: &Path) -> Result<DocumentMeta, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    DocumentMeta::from_toml_str(&content).map_err(|source| IoError::Meta {
        path: path.to_path_buf(),
        source,
    })
}

/// `<stem>.meta.toml` next to an article on disk.
pub fn sidecar_path(article: &Path) -> PathBuf {
    let stem = article
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    article.with_file_name(format!("{stem}{}", MarkdownFile::META_SUFFIX))
}

/// Metadata for an article from its sidecar, or `None` when it has none.
pub fn load_article_meta(
    file: &MarkdownFile,
    wiki_root: &Path,
) -> Result<Option<DocumentMeta>, IoError> {
    let path = file.meta_path().to_path(wiki_root);
    if !path.exists() {
        log::debug!("no metadata sidecar at {}", path.display());
        return Ok(None);
    }
    load_meta(&path).map(Some)
}
