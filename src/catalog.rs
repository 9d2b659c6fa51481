//! Fixed menu prices.

use crate::Amount;
use crate::model::{Size, Topping};

pub fn base_price(size: Size) -> Amount {
    match size {
        Size::Short => Amount::from_cents(250),
        Size::Tall => Amount::from_cents(300),
        Size::Grande => Amount::from_cents(350),
        Size::Venti => Amount::from_cents(400),
    }
}

pub fn surcharge(topping: Topping) -> Amount {
    match topping {
        Topping::Cream => Amount::from_cents(40),
        Topping::Milk => Amount::from_cents(50),
        Topping::Caramel => Amount::from_cents(60),
        Topping::Syrup => Amount::from_cents(45),
        Topping::WhippedCream => Amount::from_cents(55),
    }
}
