mod about;
mod careers;
mod company;
mod contact;
mod home;
mod initiatives;
mod offices;
mod philanthropy;
mod projects;
mod services;

pub use about::AboutPage;
pub use careers::CareersPage;
pub use company::CompanyPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use initiatives::InitiativesPage;
pub use offices::OfficesPage;
pub use philanthropy::PhilanthropyPage;
pub use projects::ProjectsPage;
pub use services::ServicesPage;
