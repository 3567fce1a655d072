//! Market data: upstream types, the fetch client, pure search/sort
//! transforms, the derived view state, and console rendering.

pub mod client;
pub mod display;
pub mod state;
pub mod transforms;
pub mod types;

pub use client::{FetchError, MarketsClient};
pub use state::DashboardState;
pub use transforms::SortKey;
pub use types::MarketEntry;
