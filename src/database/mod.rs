pub mod manager;
pub mod models;
pub mod posts;
pub mod profiles;
pub mod users;

pub use manager::{DatabaseError, DatabaseManager};
pub use posts::PostRepository;
pub use profiles::ProfileRepository;
pub use users::UserRepository;
