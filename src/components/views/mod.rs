mod home;
mod narrated_works;
mod narrator_profile;

pub use home::Home;
pub use narrated_works::NarratedWorks;
pub use narrator_profile::NarratorProfile;
