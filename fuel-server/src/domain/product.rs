//! Fuel product types.

use std::fmt;
use std::str::FromStr;

/// Error returned when a product name matches none of the known aliases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid product: use 93, 95, 97, diesel, kerosene")]
pub struct InvalidProduct {
    input: String,
}

impl InvalidProduct {
    /// The rejected input, as given.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A canonical fuel product.
///
/// Every free-form product name accepted by the API resolves to exactly
/// one of these. The canonical key (`"93"`, `"diesel"`, ...) is what
/// appears in responses.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::Product;
///
/// assert_eq!(Product::parse("Gasolina 93").unwrap(), Product::Gasoline93);
/// assert_eq!(Product::parse("  DI ").unwrap(), Product::Diesel);
/// assert!(Product::parse("98").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Product {
    Gasoline93,
    Gasoline95,
    Gasoline97,
    Diesel,
    Kerosene,
}

impl Product {
    /// All products, in response order.
    pub const ALL: [Product; 5] = [
        Product::Gasoline93,
        Product::Gasoline95,
        Product::Gasoline97,
        Product::Diesel,
        Product::Kerosene,
    ];

    /// Parse a free-form product name.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidProduct> {
        let name = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|p| p.aliases().contains(&name.as_str()))
            .ok_or_else(|| InvalidProduct {
                input: s.to_string(),
            })
    }

    /// The canonical key used in responses.
    pub fn key(self) -> &'static str {
        match self {
            Product::Gasoline93 => "93",
            Product::Gasoline95 => "95",
            Product::Gasoline97 => "97",
            Product::Diesel => "diesel",
            Product::Kerosene => "kerosene",
        }
    }

    /// Names accepted from API callers.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Product::Gasoline93 => &["93", "gasolina 93"],
            Product::Gasoline95 => &["95", "gasolina 95"],
            Product::Gasoline97 => &["97", "gasolina 97"],
            Product::Diesel => &[
                "diesel",
                "di",
                "d",
                "petroleo diesel",
                "petróleo diésel",
                "petroleo di",
            ],
            Product::Kerosene => &["kerosene", "kero", "kerosén"],
        }
    }

    /// Whether this is one of the numbered gasoline grades.
    pub fn is_gasoline(self) -> bool {
        matches!(
            self,
            Product::Gasoline93 | Product::Gasoline95 | Product::Gasoline97
        )
    }
}

impl FromStr for Product {
    type Err = InvalidProduct;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Trim and lower-case a product or service name for comparison.
pub fn normalize_name(s: &str) -> String {
    s.trim().to_lowercase()
}
