pub mod favorite_controller;
pub mod people_controller;
pub mod planet_controller;
pub mod user_controller;

pub use favorite_controller::FavoriteController;
pub use people_controller::PeopleController;
pub use planet_controller::PlanetController;
pub use user_controller::UserController;
