//! Configuration module

mod site;

pub use site::AdapterConfig;
pub use site::AdapterMode;
pub use site::AdapterName;
pub use site::OutputMode;
pub use site::SiteConfig;
pub use site::DEFAULT_SITE_URL;
pub use site::SITE_URL_ENV;
