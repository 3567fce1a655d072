pub mod dash;
pub mod markets;
pub mod version;
