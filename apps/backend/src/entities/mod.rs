pub mod games;
pub mod guesses;
pub mod phrases;
pub mod rounds;
pub mod teams;

pub use games::Entity as Games;
pub use games::Model as Game;
pub use guesses::Entity as Guesses;
pub use guesses::Model as Guess;
pub use phrases::Entity as Phrases;
pub use phrases::Model as Phrase;
pub use rounds::Entity as Rounds;
pub use rounds::Model as Round;
pub use teams::Entity as Teams;
pub use teams::Model as Team;
