//! File Writer.
//!
//! Writes one text file per titled article and appends untitled articles to
//! a shared catch-all file.
//!
//! # Output Structure
//!
//! ```text
//! directory/
//! ├── <sanitized title>.txt   # description, then content
//! ├── <sanitized title>.txt
//! └── other_news.txt          # "Article" header per untitled entry
//! ```
//!
//! # Append vs Create
//!
//! A titled file is created once and never touched again, so repeated runs
//! keep whatever the first run captured. The catch-all file is opened in
//! append mode and grows on every run.

use crate::error::{Error, Result};
use crate::models::Article;
use crate::utils::{truncate_for_log, valid_filename};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};

/// Name of the file that receives every untitled article.
pub const CATCH_ALL_FILE: &str = "other_news.txt";

/// Header line written before each untitled article.
const UNTITLED_HEADER: &str = "Article";

/// What a write pass did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    /// Titled files created by this pass.
    pub written: usize,
    /// Titled articles whose file already existed.
    pub skipped: usize,
    /// Untitled articles appended to the catch-all file.
    pub untitled: usize,
}

/// Write `articles` into `directory`, in order.
///
/// The directory must already exist. The first I/O failure aborts the pass;
/// files written before it are left in place.
#[instrument(level = "info", skip_all, fields(directory = %directory.display(), count = articles.len()))]
pub async fn write_articles(articles: &[Article], directory: &Path) -> Result<WriteSummary> {
    let mut summary = WriteSummary::default();

    for article in articles {
        match article.title() {
            None => {
                append_untitled(article, directory).await?;
                summary.untitled += 1;
            }
            Some(title) => {
                let path = directory.join(valid_filename(title));
                if create_titled(article, &path).await? {
                    debug!(path = %path.display(), "Wrote article");
                    summary.written += 1;
                } else {
                    debug!(
                        path = %path.display(),
                        title = %truncate_for_log(title, 80),
                        "Article file already exists; skipping"
                    );
                    summary.skipped += 1;
                }
            }
        }
    }

    info!(
        written = summary.written,
        skipped = summary.skipped,
        untitled = summary.untitled,
        "Finished writing articles"
    );
    Ok(summary)
}

/// Append an untitled article to the catch-all file.
async fn append_untitled(article: &Article, directory: &Path) -> Result<()> {
    let path = directory.join(CATCH_ALL_FILE);
    let body = render(Some(UNTITLED_HEADER), article);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .await
        .map_err(|e| Error::io(&path, e))?;
    file.write_all(body.as_bytes())
        .await
        .map_err(|e| Error::io(&path, e))?;
    file.flush().await.map_err(|e| Error::io(&path, e))?;

    debug!(
        path = %path.display(),
        preview = %truncate_for_log(&body, 120),
        "Appended untitled article"
    );
    Ok(())
}

/// Create the file for a titled article.
///
/// Returns `false` without writing anything when the file already exists.
async fn create_titled(article: &Article, path: &Path) -> Result<bool> {
    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(Error::io(path, e)),
    };

    let body = render(None, article);
    file.write_all(body.as_bytes())
        .await
        .map_err(|e| Error::io(path, e))?;
    file.flush().await.map_err(|e| Error::io(path, e))?;
    Ok(true)
}

/// One line per present part: optional header, description, content.
fn render(header: Option<&str>, article: &Article) -> String {
    let mut body = String::new();
    for line in header
        .into_iter()
        .chain(article.description())
        .chain(article.content())
    {
        body.push_str(line);
        body.push('\n');
    }
    body
}
