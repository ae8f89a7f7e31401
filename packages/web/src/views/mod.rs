mod header;
pub use header::Header;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod add_recipe;
pub use add_recipe::AddRecipe;
