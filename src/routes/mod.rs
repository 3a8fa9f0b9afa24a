pub mod analytics;
pub mod landing;
pub mod prediction;
