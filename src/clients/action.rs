//! Action-to-endpoint mapping.
//!
//! Every Lightspeed resource lives under the per-account base URL
//! (`.../API/Account/{id}/`). An [`Action`] names one of those resources and
//! maps to the relative fragment requested for it.

use std::fmt;
use std::str::FromStr;

/// Fragment used for action names that have no mapping.
pub const ROOT_FRAGMENT: &str = "/";

/// A Lightspeed resource endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// `Category.json`
    Category,
    /// `Item.json`
    Item,
    /// `Item`, used for XML item (coupon) creation.
    ItemXml,
    /// `Customer.json`
    Customer,
    /// `Sale.json`
    Sale,
    /// `Sale`, used for XML sale creation.
    SaleXml,
    /// `Manufacturer.json`
    Manufacturer,
    /// `Vendor.json`
    Vendor,
    /// `Department.json`
    Department,
    /// `PriceLevel.json`
    PriceLevel,
}

impl Action {
    /// Every mapped action.
    pub const ALL: [Self; 10] = [
        Self::Category,
        Self::Item,
        Self::ItemXml,
        Self::Customer,
        Self::Sale,
        Self::SaleXml,
        Self::Manufacturer,
        Self::Vendor,
        Self::Department,
        Self::PriceLevel,
    ];

    /// Returns the symbolic name of this action.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Item => "item",
            Self::ItemXml => "item-xml",
            Self::Customer => "customer",
            Self::Sale => "sale",
            Self::SaleXml => "sale_xml",
            Self::Manufacturer => "manufacturer",
            Self::Vendor => "vendor",
            Self::Department => "department",
            Self::PriceLevel => "price_level",
        }
    }

    /// Returns the URL fragment, relative to the account base URL.
    #[must_use]
    pub const fn fragment(self) -> &'static str {
        match self {
            Self::Category => "Category.json",
            Self::Item => "Item.json",
            Self::ItemXml => "Item",
            Self::Customer => "Customer.json",
            Self::Sale => "Sale.json",
            Self::SaleXml => "Sale",
            Self::Manufacturer => "Manufacturer.json",
            Self::Vendor => "Vendor.json",
            Self::Department => "Department.json",
            Self::PriceLevel => "PriceLevel.json",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AsRef<str> for Action {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

/// Error returned when parsing an action name with no mapping.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown action '{0}'")]
pub struct UnknownActionError(pub String);

impl FromStr for Action {
    type Err = UnknownActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| UnknownActionError(s.to_string()))
    }
}

/// Returns the URL fragment for an action name.
///
/// Names without a mapping resolve to [`ROOT_FRAGMENT`].
#[must_use]
pub fn resolve_fragment(name: &str) -> &'static str {
    name.parse::<Action>().map_or(ROOT_FRAGMENT, Action::fragment)
}
