//! Order editing session.
//!
//! A session owns the one live drink configuration the customer is editing
//! and the list of orders already submitted to the store. Every user intent
//! arrives as a [`Command`] and is applied synchronously.
//! Also supports an async stream of commands.

use tokio_stream::{Stream, StreamExt};
use tracing::{info, warn};

use crate::Amount;
use crate::model::Command;

mod drink;
pub use drink::{DrinkConfiguration, MAX_QUANTITY};

mod orders;
pub use orders::OrderCollection;

mod error;
pub use error::{DrinkError, OrdersError, SessionError};

/// A single customer's editing session plus the store-side order list.
pub struct Session {
    current: DrinkConfiguration,
    orders: OrderCollection,
}

/// Public API
impl Session {
    pub fn new() -> Self {
        Self {
            current: DrinkConfiguration::new(),
            orders: OrderCollection::new(),
        }
    }

    /// Run the session with the given command stream
    pub async fn run(&mut self, mut stream: impl Stream<Item = Command> + Unpin) {
        while let Some(command) = stream.next().await {
            // a rejected command must not end the session; it is logged by `apply`
            let _ = self.apply(command);
        }
    }

    /// The configuration being edited.
    pub fn current(&self) -> &DrinkConfiguration {
        &self.current
    }

    /// Live price of the configuration being edited.
    pub fn price(&self) -> Amount {
        self.current.price()
    }

    pub fn orders(&self) -> &OrderCollection {
        &self.orders
    }

    pub fn render_entry(&self, index: usize) -> Result<String, SessionError> {
        Ok(self.orders.render_entry(index)?)
    }

    /// Copy the live configuration into the order list, then start a fresh one.
    /// Returns the index of the submitted order.
    pub fn submit(&mut self) -> usize {
        let index = self.orders.append(&self.current);
        self.current.reset();
        index
    }

    /// Apply a single command on top of the current session state
    pub fn apply(&mut self, command: Command) -> Result<(), SessionError> {
        match command {
            Command::ChangeSize(code) => {
                self.current.change_size(&code);
                self.log_applied("change size");
            }
            Command::SetQuantity(quantity) => {
                let result = self.current.set_quantity(quantity);
                self.log_result("set quantity", &result);
                result?;
            }
            Command::AddTopping(topping) => {
                self.current.add_topping(topping);
                self.log_applied("add topping");
            }
            Command::RemoveTopping(topping) => {
                self.current.remove_topping(topping);
                self.log_applied("remove topping");
            }
            Command::Submit => {
                let index = self.submit();
                info!(
                    order = index + 1,
                    total = self.orders.len(),
                    "order submitted"
                );
            }
            Command::Reset => {
                self.current.reset();
                self.log_applied("reset");
            }
        }
        Ok(())
    }
}

/// Private API
impl Session {
    fn log_applied(&self, action: &str) {
        self.log_result::<DrinkError>(action, &Ok(()));
    }

    /// Small helper to log `apply` results together with the live state
    fn log_result<E: std::fmt::Display>(&self, action: &str, result: &Result<(), E>) {
        let drink = &self.current;
        match result {
            Ok(()) => {
                info!(
                    size = %drink.size(),
                    quantity = drink.quantity(),
                    price = %drink.price(),
                    "{action} applied"
                );
            }
            Err(e) => {
                warn!(
                    size = %drink.size(),
                    quantity = drink.quantity(),
                    price = %drink.price(),
                    reason = %e,
                    "{action} skipped"
                );
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
