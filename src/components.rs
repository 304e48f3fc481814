//! Components
//!
//! Stateless builders for the fragments handed to a
//! [`DisplaySurface`](crate::surface::DisplaySurface). Controls come out unbound; the store
//! locates them by [`ControlName`] and binds an [`Action`] to each.

use smallvec::{SmallVec, smallvec};

use crate::store::Action;

/// Names of the controls a fragment can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlName {
    /// "Buy it now" button on a product card.
    AddToCart,

    /// "Buy it later" button on a product card.
    AddToWishlist,

    /// Remove button on a summary row.
    Remove,
}

/// An activatable control, such as a button.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    name: ControlName,
    label: &'static str,
    action: Option<Action>,
}

impl Control {
    /// Create an unbound control.
    pub fn new(name: ControlName, label: &'static str) -> Self {
        Self {
            name,
            label,
            action: None,
        }
    }

    /// Bind the action this control triggers.
    pub fn bind(&mut self, action: Action) {
        self.action = Some(action);
    }

    /// Returns the control name
    pub fn name(&self) -> ControlName {
        self.name
    }

    /// Returns the visible label
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the bound action, if any
    pub fn action(&self) -> Option<Action> {
        self.action
    }
}

/// A labelled product attribute, e.g. `Size: M`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute label
    pub label: &'static str,

    /// Attribute value
    pub value: String,
}

/// A product card in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Product name
    pub title: String,

    /// Formatted price
    pub price: String,

    /// Attributes that are present on the product
    pub attributes: SmallVec<[Attribute; 5]>,

    controls: SmallVec<[Control; 2]>,
}

impl Card {
    /// Controls in display order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Find a control by name.
    pub fn control(&self, name: ControlName) -> Option<&Control> {
        self.controls.iter().find(|control| control.name == name)
    }

    /// Find a control by name, mutably.
    pub fn control_mut(&mut self, name: ControlName) -> Option<&mut Control> {
        self.controls.iter_mut().find(|control| control.name == name)
    }
}

/// One line of a cart or wishlist summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Product name
    pub name: String,

    /// Formatted unit price
    pub unit_price: String,

    /// Quantity on the line
    pub quantity: u32,

    /// Formatted line subtotal
    pub subtotal: String,

    /// Remove control for this line
    pub remove: Control,
}

impl SummaryRow {
    /// Unit price times quantity, e.g. `$20.00 × 2`.
    pub fn price_breakdown(&self) -> String {
        format!("{} × {}", self.unit_price, self.quantity)
    }
}

/// Itemized summary with a footer total.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// One row per line item
    pub rows: Vec<SummaryRow>,

    /// Formatted total
    pub total: String,
}

/// Content for a display region.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Product cards.
    Cards(Vec<Card>),

    /// Itemized list summary.
    Summary(Summary),

    /// A single line of text, used for empty states.
    Message(String),
}

impl Fragment {
    /// Every bound action in the fragment, in display order.
    pub fn actions(&self) -> Vec<Action> {
        match self {
            Fragment::Cards(cards) => cards
                .iter()
                .flat_map(|card| card.controls.iter())
                .filter_map(Control::action)
                .collect(),
            Fragment::Summary(summary) => summary
                .rows
                .iter()
                .filter_map(|row| row.remove.action())
                .collect(),
            Fragment::Message(_) => Vec::new(),
        }
    }
}

/// Build a product card.
pub fn card<'a>(
    title: impl Into<String>,
    price: impl Into<String>,
    attributes: impl IntoIterator<Item = (&'static str, &'a str)>,
    controls: SmallVec<[Control; 2]>,
) -> Card {
    Card {
        title: title.into(),
        price: price.into(),
        attributes: attributes
            .into_iter()
            .map(|(label, value)| Attribute {
                label,
                value: value.to_string(),
            })
            .collect(),
        controls,
    }
}

/// The unbound "buy now" and "buy later" controls for a product card.
pub fn purchase_controls() -> SmallVec<[Control; 2]> {
    smallvec![
        Control::new(ControlName::AddToCart, "BUY IT NOW!"),
        Control::new(ControlName::AddToWishlist, "Buy It Later"),
    ]
}

/// Build a summary row with an unbound remove control.
pub fn summary_row(
    name: impl Into<String>,
    unit_price: impl Into<String>,
    quantity: u32,
    subtotal: impl Into<String>,
) -> SummaryRow {
    SummaryRow {
        name: name.into(),
        unit_price: unit_price.into(),
        quantity,
        subtotal: subtotal.into(),
        remove: Control::new(ControlName::Remove, "Remove"),
    }
}

/// Build a summary fragment.
pub fn summary(rows: Vec<SummaryRow>, total: impl Into<String>) -> Fragment {
    Fragment::Summary(Summary {
        rows,
        total: total.into(),
    })
}

/// Build an empty-state fragment.
pub fn empty_state(message: impl Into<String>) -> Fragment {
    Fragment::Message(message.into())
}
