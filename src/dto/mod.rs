pub mod game;
pub mod genre;
pub mod publisher;

pub use game::{GameForm, GameInput, GameView};
pub use genre::{GenreView, SelectOption};
pub use publisher::{PublisherForm, PublisherView};
