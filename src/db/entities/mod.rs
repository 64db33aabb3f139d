#[allow(unused_imports)]
pub mod prelude {
    pub use super::favorite::Entity as Favorite;
    pub use super::person::Entity as Person;
    pub use super::planet::Entity as Planet;
    pub use super::user::Entity as User;
}

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
