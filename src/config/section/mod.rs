//! Configuration section definitions.

mod authors;
mod content;
mod excerpt;
mod remote;
mod site;

pub use authors::AuthorDirectory;
pub use content::ContentConfig;
pub use excerpt::ExcerptConfig;
pub use remote::RemoteConfig;
pub use site::SiteSectionConfig;
