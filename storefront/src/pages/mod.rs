//! Routed views.

mod browse;
mod cart;
mod dashboard;
mod home;
mod listings;

pub use browse::BrowsePage;
pub use cart::CartPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use listings::ListingsPage;
