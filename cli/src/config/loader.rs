//! Portfolio content loader
//!
//! Implements single-source priority loading:
//! 1. --content file/dir (highest priority)
//! 2. Current working directory: ./folio.json or ./.folio/content.json
//! 3. Git repository root: <repo_root>/.folio/content.json
//! 4. Config directory: <config_dir>/folio/content.json
//! 5. Built-in sample content (no files)

use anyhow::{anyhow, Context, Result};
use folio_core::{AssetResolver, PortfolioContent};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONTENT_FILE: &str = "content.json";
const CWD_FILE: &str = "folio.json";
const DOT_DIR: &str = ".folio";
const APP_DIR: &str = "folio";

/// Where the content came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    File(PathBuf),
    BuiltIn,
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::File(path) => write!(f, "{}", path.display()),
            ContentSource::BuiltIn => f.write_str("built-in sample"),
        }
    }
}

/// Loaded content plus the directory its images are read from
#[derive(Debug, Clone)]
pub struct LoadedContent {
    pub content: PortfolioContent,
    pub source: ContentSource,
    pub asset_root: PathBuf,
}

impl LoadedContent {
    pub fn assets(&self) -> AssetResolver {
        AssetResolver::new(&self.asset_root)
    }
}

/// CLI content loader
#[derive(Debug, Default)]
pub struct ContentLoader {
    /// Override content file/directory path
    content_override: Option<PathBuf>,
    /// Override image directory
    assets_override: Option<PathBuf>,
}

impl ContentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set content file/directory override
    pub fn with_content_override(mut self, path: PathBuf) -> Self {
        self.content_override = Some(path);
        self
    }

    /// Set image directory override
    pub fn with_assets_override(mut self, path: PathBuf) -> Self {
        self.assets_override = Some(path);
        self
    }

    /// Load content from the highest-priority source available
    pub async fn load(&self) -> Result<LoadedContent> {
        let cwd = std::env::current_dir().context("Failed to read the working directory")?;
        let config_dir = dirs::config_dir();
        self.load_from(&cwd, config_dir.as_deref()).await
    }

    /// Load with explicit search roots
    pub async fn load_from(&self, cwd: &Path, config_dir: Option<&Path>) -> Result<LoadedContent> {
        let (content, source) = match &self.content_override {
            Some(path) => {
                let path = expand(path);
                let file = content_file(&path)?;
                let content = load_file(&file).await.with_context(|| {
                    format!("Failed to load content from override path: {}", path.display())
                })?;
                (content, ContentSource::File(file))
            }
            None => match search(cwd, config_dir) {
                Some(file) => (load_file(&file).await?, ContentSource::File(file)),
                None => (PortfolioContent::default(), ContentSource::BuiltIn),
            },
        };

        let asset_root = match (&self.assets_override, &source) {
            (Some(dir), _) => expand(dir),
            (None, ContentSource::File(file)) => file
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf),
            (None, ContentSource::BuiltIn) => cwd.to_path_buf(),
        };

        info!(source = %source, assets = %asset_root.display(), "portfolio content loaded");
        Ok(LoadedContent {
            content,
            source,
            asset_root,
        })
    }
}

/// First existing content file in priority order
fn search(cwd: &Path, config_dir: Option<&Path>) -> Option<PathBuf> {
    let mut candidates = vec![cwd.join(CWD_FILE), cwd.join(DOT_DIR).join(CONTENT_FILE)];
    if let Some(root) = find_git_root(cwd) {
        candidates.push(root.join(DOT_DIR).join(CONTENT_FILE));
    }
    if let Some(dir) = config_dir {
        candidates.push(dir.join(APP_DIR).join(CONTENT_FILE));
    }

    candidates.into_iter().find(|candidate| {
        let found = candidate.is_file();
        debug!(path = %candidate.display(), found, "checked content location");
        found
    })
}

/// Resolve an override path: a file as-is, a directory to its content.json
fn content_file(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else if path.is_dir() {
        let file = path.join(CONTENT_FILE);
        if file.is_file() {
            Ok(file)
        } else {
            Err(anyhow!(
                "No {} found in directory: {}",
                CONTENT_FILE,
                path.display()
            ))
        }
    } else {
        Err(anyhow!("Content path does not exist: {}", path.display()))
    }
}

async fn load_file(path: &Path) -> Result<PortfolioContent> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;

    PortfolioContent::from_json_str(&json)
        .with_context(|| format!("Failed to parse content file: {}", path.display()))
}

fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Expand a leading `~` in a user-supplied path
fn expand(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CUSTOM: &str = r#"{"profile": {"name": "Ada", "headline": "Hi", "bio": "Bio"}}"#;

    #[tokio::test]
    async fn test_falls_back_to_sample() {
        let cwd = tempfile::tempdir().unwrap();
        let loaded = ContentLoader::new().load_from(cwd.path(), None).await.unwrap();
        assert_eq!(loaded.source, ContentSource::BuiltIn);
        assert_eq!(loaded.content, PortfolioContent::default());
        assert_eq!(loaded.asset_root, cwd.path());
    }

    #[tokio::test]
    async fn test_cwd_file_wins_over_config_dir() {
        let cwd = tempfile::tempdir().unwrap();
        let config = tempfile::tempdir().unwrap();
        fs::write(cwd.path().join(CWD_FILE), CUSTOM).unwrap();
        fs::create_dir_all(config.path().join(APP_DIR)).unwrap();
        fs::write(config.path().join(APP_DIR).join(CONTENT_FILE), "{}").unwrap();

        let loaded = ContentLoader::new()
            .load_from(cwd.path(), Some(config.path()))
            .await
            .unwrap();
        assert_eq!(loaded.source, ContentSource::File(cwd.path().join(CWD_FILE)));
        assert_eq!(loaded.content.profile.name, "Ada");
        // sections missing from the file keep the sample values
        assert_eq!(loaded.content.projects, PortfolioContent::default().projects);
    }

    #[tokio::test]
    async fn test_dot_dir_and_config_dir() {
        let cwd = tempfile::tempdir().unwrap();
        let config = tempfile::tempdir().unwrap();
        fs::create_dir_all(config.path().join(APP_DIR)).unwrap();
        let config_file = config.path().join(APP_DIR).join(CONTENT_FILE);
        fs::write(&config_file, CUSTOM).unwrap();

        let loaded = ContentLoader::new()
            .load_from(cwd.path(), Some(config.path()))
            .await
            .unwrap();
        assert_eq!(loaded.source, ContentSource::File(config_file.clone()));
        assert_eq!(loaded.asset_root, config.path().join(APP_DIR));

        fs::create_dir_all(cwd.path().join(DOT_DIR)).unwrap();
        let dot_file = cwd.path().join(DOT_DIR).join(CONTENT_FILE);
        fs::write(&dot_file, "{}").unwrap();
        let loaded = ContentLoader::new()
            .load_from(cwd.path(), Some(config.path()))
            .await
            .unwrap();
        assert_eq!(loaded.source, ContentSource::File(dot_file));
    }

    #[tokio::test]
    async fn test_git_root_is_searched() {
        let repo = tempfile::tempdir().unwrap();
        fs::create_dir(repo.path().join(".git")).unwrap();
        fs::create_dir_all(repo.path().join(DOT_DIR)).unwrap();
        fs::write(repo.path().join(DOT_DIR).join(CONTENT_FILE), CUSTOM).unwrap();
        let nested = repo.path().join("site").join("pages");
        fs::create_dir_all(&nested).unwrap();

        let loaded = ContentLoader::new().load_from(&nested, None).await.unwrap();
        assert_eq!(loaded.content.profile.name, "Ada");
    }

    #[tokio::test]
    async fn test_override_directory_and_assets() {
        let cwd = tempfile::tempdir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONTENT_FILE), CUSTOM).unwrap();
        let images = tempfile::tempdir().unwrap();

        let loaded = ContentLoader::new()
            .with_content_override(dir.path().to_path_buf())
            .with_assets_override(images.path().to_path_buf())
            .load_from(cwd.path(), None)
            .await
            .unwrap();
        assert_eq!(loaded.content.profile.name, "Ada");
        assert_eq!(loaded.asset_root, images.path());
    }

    #[tokio::test]
    async fn test_override_errors() {
        let cwd = tempfile::tempdir().unwrap();

        let missing = ContentLoader::new()
            .with_content_override(cwd.path().join("nope.json"))
            .load_from(cwd.path(), None)
            .await
            .unwrap_err();
        assert!(missing.to_string().contains("does not exist"));

        let empty_dir = ContentLoader::new()
            .with_content_override(cwd.path().to_path_buf())
            .load_from(cwd.path(), None)
            .await
            .unwrap_err();
        assert!(empty_dir.to_string().contains("No content.json"));
    }

    #[tokio::test]
    async fn test_invalid_content_is_rejected() {
        let cwd = tempfile::tempdir().unwrap();
        let file = cwd.path().join(CWD_FILE);
        fs::write(
            &file,
            r#"{"metrics": {"paper_years": ["2020"], "paper_counts": [1, 2],
                "citation_years": [], "citations": []}}"#,
        )
        .unwrap();

        let err = ContentLoader::new()
            .load_from(cwd.path(), None)
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse content file"));
    }
}
