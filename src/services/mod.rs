pub mod game_service;
pub mod genre_service;
pub mod publisher_service;

pub use game_service::GameService;
pub use genre_service::GenreService;
pub use publisher_service::PublisherService;
