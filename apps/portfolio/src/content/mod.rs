// Static portfolio content and the authoring checks run by `portfolio check` and the tests.

pub mod catalog;
pub mod validation;

pub use catalog::portfolio_catalog;
pub use validation::validate_catalog;
