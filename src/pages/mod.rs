//! Pages
//!
//! Top-level view constructors, one per route-table entry.

pub mod debug;
pub mod dns;
pub mod go;
pub mod home;
pub mod search;
pub mod socializer;
pub mod sources;
pub mod tell;
pub mod tells;
pub mod tools;
pub mod user;
pub mod users;

pub use debug::DebugPage;
pub use dns::DnsPage;
pub use go::GoPage;
pub use home::HomePage;
pub use search::SearchPage;
pub use socializer::SocializerPage;
pub use sources::SourcesPage;
pub use tell::TellPage;
pub use tells::TellsPage;
pub use tools::ToolsPage;
pub use user::UserPage;
pub use users::UsersPage;
