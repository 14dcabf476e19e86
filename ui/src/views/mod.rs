mod landing;
pub use landing::LandingPage;

mod sections;
