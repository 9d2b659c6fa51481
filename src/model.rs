//! Core domain types for the order core.

use std::fmt;

/// Drink size, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Size {
    #[default]
    Short,
    Tall,
    Grande,
    Venti,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::Short, Size::Tall, Size::Grande, Size::Venti];

    pub fn name(self) -> &'static str {
        match self {
            Size::Short => "Short",
            Size::Tall => "Tall",
            Size::Grande => "Grande",
            Size::Venti => "Venti",
        }
    }

    /// Map a size code (the size name, any case) to a size.
    /// Returns `None` for codes outside the menu.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Optional add-on with a fixed surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topping {
    Cream,
    Milk,
    Caramel,
    Syrup,
    WhippedCream,
}

impl Topping {
    pub const ALL: [Topping; 5] = [
        Topping::Cream,
        Topping::Milk,
        Topping::Caramel,
        Topping::Syrup,
        Topping::WhippedCream,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Topping::Cream => "Cream",
            Topping::Milk => "Milk",
            Topping::Caramel => "Caramel",
            Topping::Syrup => "Syrup",
            Topping::WhippedCream => "Whipped Cream",
        }
    }

    /// Parse a topping name, case-insensitive. `whipped_cream` and `whipped`
    /// are accepted for [`Topping::WhippedCream`].
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("whipped_cream") || name.eq_ignore_ascii_case("whipped") {
            return Some(Topping::WhippedCream);
        }
        Self::ALL
            .into_iter()
            .find(|topping| topping.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single user intent, the possible inputs of a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch size by code; unknown codes leave the size as is.
    ChangeSize(String),
    /// Set how many drinks of this configuration are ordered.
    SetQuantity(u32),
    AddTopping(Topping),
    RemoveTopping(Topping),
    /// Snapshot the live configuration into the store orders and start over.
    Submit,
    /// Discard the live configuration.
    Reset,
}
