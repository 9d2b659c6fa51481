pub mod amount;
pub mod catalog;
pub mod csv;
pub mod model;
pub mod session;

pub use amount::Amount;
pub use model::{Command, Size, Topping};
pub use session::{DrinkConfiguration, OrderCollection, Session};
