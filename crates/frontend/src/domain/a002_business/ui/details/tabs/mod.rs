//! Profile tabs

mod about;
mod media;
mod reviews;
mod services;

pub use about::AboutTab;
pub use media::MediaTab;
pub use reviews::ReviewsTab;
pub use services::ServicesTab;
