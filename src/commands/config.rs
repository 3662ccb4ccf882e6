//! Print the resolved site configuration

use anyhow::Result;

use crate::Site;

/// Print the configuration as YAML, with the site URL resolved
pub fn run(site: &Site) -> Result<()> {
    print!("{}", render(site)?);
    Ok(())
}

fn render(site: &Site) -> Result<String> {
    let mut config = site.config.clone();
    config.site = Some(site.config.site_url().to_string());
    Ok(serde_yaml::to_string(&config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_resolves_site_url() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        let yaml = render(&site).unwrap();
        assert!(yaml.contains("http://localhost:4321"));
        assert!(yaml.contains("output: static"));
        assert!(yaml.contains("mode: directory"));
    }
}
