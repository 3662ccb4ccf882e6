//! Content loader - loads the blog collection from the content directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{validate, ContentError, FrontMatter, LocalBlogPost};
use crate::Site;

/// Name of the blog collection directory
pub const BLOG_COLLECTION: &str = "blog";

/// Outcome of checking every entry without stopping at the first failure
#[derive(Debug, Default)]
pub struct CheckReport {
    pub valid: usize,
    pub failures: Vec<ContentError>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Loads content from the collection directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    fn collection_dir(&self) -> PathBuf {
        self.site
            .config
            .collection_dir(&self.site.base_dir, BLOG_COLLECTION)
    }

    /// Load and validate every blog post; the first invalid entry aborts the load
    pub fn load_posts(&self) -> Result<Vec<LocalBlogPost>, ContentError> {
        let dir = self.collection_dir();
        let mut posts = Vec::new();

        for path in entry_files(&dir) {
            posts.push(load_post(&dir, &path?)?);
        }

        // Sort by date descending (newest first)
        posts.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| a.slug.cmp(&b.slug))
        });

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), dir);
        Ok(posts)
    }

    /// Validate every entry, collecting all failures
    pub fn check_posts(&self) -> CheckReport {
        let dir = self.collection_dir();
        let mut report = CheckReport::default();

        for path in entry_files(&dir) {
            match path.and_then(|path| load_post(&dir, &path)) {
                Ok(_) => report.valid += 1,
                Err(e) => {
                    tracing::warn!("{}", e);
                    report.failures.push(e);
                }
            }
        }

        report
    }
}

/// Markdown files of a collection, skipping `_`-prefixed files and directories.
/// Traversal errors are kept in order alongside the files.
fn entry_files(dir: &Path) -> Vec<Result<PathBuf, ContentError>> {
    if !dir.exists() {
        tracing::debug!("Collection directory {:?} does not exist", dir);
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('_'))
    {
        match entry {
            Ok(entry) => {
                let path = entry.into_path();
                if path.is_file() && is_markdown_file(&path) {
                    files.push(Ok(path));
                }
            }
            Err(e) => {
                let path = e.path().unwrap_or(dir).to_path_buf();
                tracing::warn!("Failed to walk {:?}: {}", path, e);
                files.push(Err(ContentError::Io {
                    path,
                    source: e.into(),
                }));
            }
        }
    }
    files
}

/// Load a single post from a file
fn load_post(dir: &Path, path: &Path) -> Result<LocalBlogPost, ContentError> {
    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (fm, body) = FrontMatter::parse(&content).map_err(|source| ContentError::FrontMatter {
        path: path.to_path_buf(),
        source,
    })?;

    let fields = validate(&fm).map_err(|errors| ContentError::Schema {
        path: path.to_path_buf(),
        errors,
    })?;

    let slug = entry_slug(dir, path);
    Ok(LocalBlogPost::new(
        fields,
        slug,
        path.to_path_buf(),
        body.to_string(),
    ))
}

/// Slug from the path relative to the collection, one slugified segment per component
fn entry_slug(dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(dir).unwrap_or(path);
    let relative = relative.with_extension("");
    relative
        .components()
        .map(|c| slug::slugify(c.as_os_str().to_string_lossy()))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_lowercase().as_str(), "md" | "mdx"))
        .unwrap_or(false)
}
