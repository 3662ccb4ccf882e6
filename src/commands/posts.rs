//! List local posts

use anyhow::Result;

use crate::content::LocalBlogPost;
use crate::Site;

/// List the local blog collection
pub fn run(site: &Site) -> Result<()> {
    let posts = site.load_posts()?;
    print!("{}", format_posts(site, &posts));
    Ok(())
}

fn format_posts(site: &Site, posts: &[LocalBlogPost]) -> String {
    let mut out = format!("Posts ({}):\n", posts.len());
    for post in posts {
        let source = post
            .source
            .strip_prefix(&site.base_dir)
            .unwrap_or(&post.source);
        out.push_str(&format!(
            "  {} - {} [{}]\n",
            post.published_at.format("%Y-%m-%d"),
            post.title,
            source.display()
        ));
    }
    out
}
