//! Page Components

mod about;
mod contact;
mod donation;
mod home;
mod partners;
mod projects;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use donation::DonationPage;
pub use home::HomePage;
pub use partners::PartnersPage;
pub use projects::ProjectsPage;
