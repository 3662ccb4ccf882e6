//! Validate the local collection

use anyhow::Result;

use crate::content::ContentLoader;
use crate::Site;

/// Check every local entry against the schema, failing if any is invalid
pub fn run(site: &Site) -> Result<()> {
    let report = ContentLoader::new(site).check_posts();

    for failure in &report.failures {
        println!("  x {}", failure);
    }

    if !report.is_ok() {
        anyhow::bail!(
            "{} of {} entries failed validation",
            report.failures.len(),
            report.valid + report.failures.len()
        );
    }

    println!("{} entries valid", report.valid);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_fails_on_invalid_entry() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("src/content/blog");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("ok.md"), "---\ntitle: Ok\npublishedAt: 2024-01-01\n---\n").unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert!(run(&site).is_ok());

        fs::write(dir.join("bad.md"), "---\ntitle: Bad\npublishedAt: 31/31/2024\n---\n").unwrap();
        let err = run(&site).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 entries failed validation");
    }
}
