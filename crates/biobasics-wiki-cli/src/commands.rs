use anyhow::{Context, Result};
use biobasics_wiki_config::Config;
use biobasics_wiki_engine::{
    DocumentMeta, MarkdownFile, PageOptions, WikiConverter, io, parse_document,
    parsing::headings::DocumentOutline,
};
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

/// Page options from the config file, falling back to the built-in ones.
pub fn page_options(config: &Config) -> PageOptions {
    let defaults = PageOptions::default();
    PageOptions {
        site_name: config.site_name.clone().unwrap_or(defaults.site_name),
        tag_url_prefix: config
            .tag_url_prefix
            .clone()
            .unwrap_or(defaults.tag_url_prefix),
        article_url_prefix: config
            .article_url_prefix
            .clone()
            .unwrap_or(defaults.article_url_prefix),
    }
}

/// Converts one article and returns the path written.
pub fn convert_file(
    converter: &WikiConverter,
    input: &Path,
    output: Option<&Path>,
    meta: Option<&Path>,
) -> Result<PathBuf> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("Failed to read article '{}'", input.display()))?;
    let meta = article_meta(input, meta)?;
    let output = output.map_or_else(|| input.with_extension("html"), Path::to_path_buf);

    let html = converter.convert(&markdown, &meta);
    fs::write(&output, html)
        .with_context(|| format!("Failed to write page '{}'", output.display()))?;

    log::info!("Converted {} to {}", input.display(), output.display());
    Ok(output)
}

/// Metadata from an explicit file, else the article's sidecar, else empty.
fn article_meta(input: &Path, explicit: Option<&Path>) -> Result<DocumentMeta> {
    if let Some(path) = explicit {
        return Ok(io::load_meta(path)?);
    }
    let sidecar = io::sidecar_path(input);
    if sidecar.exists() {
        Ok(io::load_meta(&sidecar)?)
    } else {
        Ok(DocumentMeta::default())
    }
}

/// Converts every article under the wiki directory, mirroring its layout
/// into the output directory. Returns how many pages were written.
pub fn build_wiki(
    converter: &WikiConverter,
    config: &Config,
    wiki_dir: Option<&Path>,
    out_dir: Option<&Path>,
) -> Result<usize> {
    let wiki_dir = wiki_dir
        .map(Path::to_path_buf)
        .or_else(|| config.wiki_path.clone())
        .with_context(|| {
            format!(
                "No wiki directory given and no wiki_path in {}",
                Config::config_path().display()
            )
        })?;
    io::validate_wiki_dir(&wiki_dir)
        .with_context(|| format!("Wiki path '{}' is invalid", wiki_dir.display()))?;

    let out_dir = out_dir
        .map(Path::to_path_buf)
        .or_else(|| config.output_path.clone())
        .unwrap_or_else(|| wiki_dir.clone());
    let excludes = config.excludes()?;

    let mut converted = 0;
    for path in io::scan_markdown_files(&wiki_dir)? {
        let relative = path.strip_prefix(&wiki_dir)?;
        if excludes.matches(relative) {
            log::debug!("Skipping excluded {}", relative.display());
            continue;
        }

        let file = MarkdownFile::new(RelativePathBuf::from_path(relative)?);
        let markdown = io::read_file(file.relative_path(), &wiki_dir)?;
        let meta = io::load_article_meta(&file, &wiki_dir)?.unwrap_or_default();

        let html_path = file.html_path();
        io::write_file(&html_path, &out_dir, &converter.convert(&markdown, &meta))?;

        log::info!(
            "Converted {} to {}",
            path.display(),
            html_path.to_path(&out_dir).display()
        );
        converted += 1;
    }

    Ok(converted)
}

/// The article's outline as text or JSON.
pub fn toc(input: &Path, json: bool) -> Result<String> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("Failed to read article '{}'", input.display()))?;
    let outline = parse_document(&markdown).outline;

    if json {
        let mut out = serde_json::to_string_pretty(&outline)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(format_outline(&outline))
    }
}

fn format_outline(outline: &DocumentOutline) -> String {
    let mut lines = vec![outline.title.as_deref().unwrap_or("(untitled)").to_string()];
    lines.extend(outline.toc.iter().map(|entry| {
        let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
        format!("{indent}{} (#{})", entry.text, entry.anchor)
    }));
    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const ARTICLE: &str = "# Heart Attacks\n## Symptoms\n### Chest pain\n## Sources\n";

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn page_options_fall_back_to_defaults() {
        let config = Config {
            site_name: Some("Clinic Wiki".into()),
            ..Config::default()
        };
        let options = page_options(&config);
        assert_eq!(options.site_name, "Clinic Wiki");
        assert_eq!(options.tag_url_prefix, PageOptions::DEFAULT_TAG_URL_PREFIX);
        assert_eq!(
            options.article_url_prefix,
            PageOptions::DEFAULT_ARTICLE_URL_PREFIX
        );
    }

    #[test]
    fn convert_writes_next_to_input_using_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(&dir, "heart.md", "Body text");
        write(&dir, "heart.meta.toml", "title = \"Heart Attacks\"\nview_count = 1500");

        let output = convert_file(&WikiConverter::default(), &input, None, None).unwrap();

        assert_eq!(output, dir.path().join("heart.html"));
        let page = fs::read_to_string(output).unwrap();
        assert!(page.contains("<title>Heart Attacks</title>"));
        assert!(page.contains("1,500 views"));
    }

    #[test]
    fn convert_with_explicit_output_and_meta() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(&dir, "a.md", "text");
        let meta = write(&dir, "custom.toml", "title = \"Custom\"");
        let output = dir.path().join("out/page.html");
        fs::create_dir_all(output.parent().unwrap()).unwrap();

        convert_file(&WikiConverter::default(), &input, Some(&output), Some(&meta)).unwrap();

        assert!(fs::read_to_string(output).unwrap().contains("<title>Custom</title>"));
    }

    #[test]
    fn convert_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = convert_file(
            &WikiConverter::default(),
            &dir.path().join("missing.md"),
            None,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn build_mirrors_layout_and_honours_excludes() {
        let wiki = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write(&wiki, "cardiology/heart.md", ARTICLE);
        write(&wiki, "asthma.md", "# Asthma");
        write(&wiki, "drafts/wip.md", "# WIP");
        let config = Config {
            exclude: vec!["drafts/**".into()],
            ..Config::default()
        };

        let count = build_wiki(
            &WikiConverter::default(),
            &config,
            Some(wiki.path()),
            Some(out.path()),
        )
        .unwrap();

        assert_eq!(count, 2);
        assert!(out.path().join("cardiology/heart.html").exists());
        assert!(out.path().join("asthma.html").exists());
        assert!(!out.path().join("drafts/wip.html").exists());
    }

    #[test]
    fn build_uses_configured_directories() {
        let wiki = tempfile::tempdir().unwrap();
        write(&wiki, "asthma.md", "# Asthma");
        let config = Config {
            wiki_path: Some(wiki.path().to_path_buf()),
            ..Config::default()
        };

        let count = build_wiki(&WikiConverter::default(), &config, None, None).unwrap();

        assert_eq!(count, 1);
        assert!(wiki.path().join("asthma.html").exists());
    }

    #[test]
    fn build_without_directory_fails() {
        let result = build_wiki(&WikiConverter::default(), &Config::default(), None, None);
        assert!(result.is_err());
    }

    #[test]
    fn toc_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(&dir, "heart.md", ARTICLE);

        assert_eq!(
            toc(&input, false).unwrap(),
            "Heart Attacks\n  Symptoms (#symptoms)\n    Chest pain (#chest-pain)\n"
        );
    }

    #[test]
    fn toc_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(&dir, "heart.md", ARTICLE);

        let value: serde_json::Value = serde_json::from_str(&toc(&input, true).unwrap()).unwrap();
        assert_eq!(value["title"], "Heart Attacks");
        assert_eq!(value["toc"][1]["anchor"], "chest-pain");
        assert_eq!(value["toc"][1]["level"], 3);
    }
}
