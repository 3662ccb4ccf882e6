//! Read blogs from the remote CMS

use anyhow::Result;

use crate::cms::{get_blog_detail, list_blogs, Blog, CmsClient, ListResponse, Queries};

/// List remote blogs
pub async fn list(client: &CmsClient, queries: &Queries) -> Result<()> {
    let queries = (!queries.is_empty()).then_some(queries);
    let list = list_blogs(client, queries).await?;
    print!("{}", format_list(&list));
    Ok(())
}

/// Print one remote blog as JSON
pub async fn show(client: &CmsClient, content_id: &str, queries: &Queries) -> Result<()> {
    let queries = (!queries.is_empty()).then_some(queries);
    let blog = get_blog_detail(client, content_id, queries).await?;
    println!("{}", serde_json::to_string_pretty(&blog)?);
    Ok(())
}

fn format_list(list: &ListResponse<Blog>) -> String {
    let mut out = format!(
        "Blogs ({} of {}, offset {}):\n",
        list.contents.len(),
        list.total_count,
        list.offset
    );
    for blog in &list.contents {
        let date = blog
            .published()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "draft".to_string());
        out.push_str(&format!("  {} - {} [{}]\n", date, blog.title(), blog.id()));
    }
    out
}
