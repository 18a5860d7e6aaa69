pub mod artwork;
pub mod news;
