pub mod home;
pub mod profile;

pub use home::HomePage;
pub use profile::ProfilePage;
