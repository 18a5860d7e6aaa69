pub mod controller;
pub mod pagination;
pub mod source;
pub mod view;

pub use controller::NewsController;
pub use source::NewsSource;
