mod profiles;
pub use profiles::ProfilesView;

mod sign_in;
pub use sign_in::SignInView;

mod species;
pub use species::SpeciesView;
