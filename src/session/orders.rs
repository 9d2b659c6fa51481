use super::drink::DrinkConfiguration;
use super::error::OrdersError;

/// Submitted drink orders, in submission order, for staff review.
#[derive(Debug, Default)]
pub struct OrderCollection {
    orders: Vec<DrinkConfiguration>,
}

impl OrderCollection {
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Store a copy of `drink` and return its index.
    /// Later edits to `drink` never reach the stored entry.
    pub fn append(&mut self, drink: &DrinkConfiguration) -> usize {
        self.orders.push(drink.clone());
        self.orders.len() - 1
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&DrinkConfiguration, OrdersError> {
        self.orders.get(index).ok_or(OrdersError::IndexOutOfRange {
            index,
            len: self.orders.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrinkConfiguration> + '_ {
        self.orders.iter()
    }

    /// One display line per order, positions counted from 1:
    /// `Order #1: 2 x Grande coffee (Milk, Caramel) $9.20`
    pub fn render_entry(&self, index: usize) -> Result<String, OrdersError> {
        let drink = self.get(index)?;

        let toppings: Vec<_> = drink.toppings().map(|t| t.name()).collect();
        let toppings = if toppings.is_empty() {
            "no toppings".to_string()
        } else {
            toppings.join(", ")
        };

        Ok(format!(
            "Order #{}: {} x {} coffee ({}) {}",
            index + 1,
            drink.quantity(),
            drink.size(),
            toppings,
            drink.price().currency()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Topping;

    fn drink(size: &str, quantity: u32, toppings: &[Topping]) -> DrinkConfiguration {
        let mut drink = DrinkConfiguration::new();
        drink.change_size(size);
        drink.set_quantity(quantity).unwrap();
        for topping in toppings {
            drink.add_topping(*topping);
        }
        drink
    }

    #[test]
    fn new_collection_is_empty() {
        let orders = OrderCollection::new();
        assert!(orders.is_empty());
        assert_eq!(orders.len(), 0);
    }

    #[test]
    fn append_grows_by_one_and_keeps_prior_entries() {
        let mut orders = OrderCollection::new();
        let first = drink("Tall", 1, &[Topping::Cream]);
        let second = drink("Venti", 3, &[]);

        assert_eq!(orders.append(&first), 0);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders.append(&second), 1);
        assert_eq!(orders.len(), 2);

        let stored: Vec<_> = orders.iter().cloned().collect();
        assert_eq!(stored, vec![first, second]);
    }

    #[test]
    fn appended_entry_is_independent_of_source() {
        let mut orders = OrderCollection::new();
        let mut live = drink("Grande", 2, &[Topping::Milk, Topping::Caramel]);
        orders.append(&live);

        live.add_topping(Topping::Syrup);
        live.set_quantity(5).unwrap();

        assert_eq!(
            orders.render_entry(0).unwrap(),
            "Order #1: 2 x Grande coffee (Milk, Caramel) $9.20"
        );
    }

    #[test]
    fn render_entry_without_toppings() {
        let mut orders = OrderCollection::new();
        orders.append(&drink("Short", 1, &[]));
        orders.append(&drink("Venti", 4, &[Topping::WhippedCream]));

        assert_eq!(
            orders.render_entry(0).unwrap(),
            "Order #1: 1 x Short coffee (no toppings) $2.50"
        );
        assert_eq!(
            orders.render_entry(1).unwrap(),
            "Order #2: 4 x Venti coffee (Whipped Cream) $18.20"
        );
    }

    #[test]
    fn render_entry_out_of_range_fails() {
        let mut orders = OrderCollection::new();
        assert_eq!(
            orders.render_entry(0),
            Err(OrdersError::IndexOutOfRange { index: 0, len: 0 })
        );

        orders.append(&DrinkConfiguration::new());
        assert_eq!(
            orders.render_entry(1),
            Err(OrdersError::IndexOutOfRange { index: 1, len: 1 })
        );
    }
}
