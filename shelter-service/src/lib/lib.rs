pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::adoption;
pub use domain::comment;
pub use domain::pet;
pub use domain::user;
pub use domain::wild_animal;
