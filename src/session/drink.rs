use std::collections::BTreeSet;

use tracing::warn;

use super::error::DrinkError;
use crate::Amount;
use crate::catalog;
use crate::model::{Size, Topping};

/// Largest quantity a single configuration can carry.
pub const MAX_QUANTITY: u32 = 5;

/// The in-progress drink order being edited.
/// Quantity always stays within `1..=MAX_QUANTITY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkConfiguration {
    size: Size,
    quantity: u32,
    toppings: BTreeSet<Topping>,
}

impl DrinkConfiguration {
    pub fn new() -> Self {
        Self {
            size: Size::default(),
            quantity: 1,
            toppings: BTreeSet::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Selected toppings in menu order.
    pub fn toppings(&self) -> impl Iterator<Item = Topping> + '_ {
        self.toppings.iter().copied()
    }

    pub fn has_topping(&self, topping: Topping) -> bool {
        self.toppings.contains(&topping)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), DrinkError> {
        if !(1..=MAX_QUANTITY).contains(&quantity) {
            return Err(DrinkError::InvalidQuantity(quantity));
        }
        self.quantity = quantity;
        Ok(())
    }

    /// Switch to the size named by `code`.
    ///
    /// An unrecognized code keeps the current size and is not an error. This
    /// mirrors how the storefront has always behaved, though it may be a
    /// missing default case rather than intended policy, hence the warning.
    pub fn change_size(&mut self, code: &str) {
        match Size::from_code(code) {
            Some(size) => self.size = size,
            None => {
                warn!(code, size = %self.size, "unrecognized size code, keeping current size");
            }
        }
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn add_topping(&mut self, topping: Topping) {
        self.toppings.insert(topping);
    }

    pub fn remove_topping(&mut self, topping: Topping) {
        self.toppings.remove(&topping);
    }

    /// `quantity × (base price + Σ topping surcharges)`
    pub fn price(&self) -> Amount {
        let unit = catalog::base_price(self.size)
            + self.toppings().map(catalog::surcharge).sum::<Amount>();
        unit * self.quantity
    }
}

impl Default for DrinkConfiguration {
    fn default() -> Self {
        Self::new()
    }
}
