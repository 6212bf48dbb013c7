//! Order-summary flattening.
//!
//! Checkout persists display names and prices only; the scene value model
//! never leaves the editing session.

use serde::{Deserialize, Serialize};

use cake_types::CakeShape;
use style_registry::{
    coating, side_style, top_style, topping_style, SIDE_DECORATION_PRICE, TOPPING_PRICE,
    TOP_DECORATION_PRICE,
};

use crate::state::{BridgeError, DesignerState};

/// The flattened order summary sent to checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub cake_id: i64,
    pub flavor: String,
    pub coating: String,
    pub shape: CakeShape,
    pub size: String,
    pub custom_text: String,
    pub top_decoration: String,
    pub side_decoration: String,
    pub topping: String,
    pub occasion: String,
    pub base_price: f64,
    pub price: f64,
}

/// Flatten the current design into an order summary. Styles the registry
/// does not know render nothing, so they are neither charged nor named.
pub fn build_summary(
    state: &DesignerState,
    cake_id: i64,
    base_price: f64,
    occasion: String,
) -> Result<OrderSummary, BridgeError> {
    let flavor = state.flavor.as_ref().ok_or(BridgeError::IncompleteDesign)?;

    let top = top_style(&state.decoration.top);
    let side = side_style(&state.decoration.side);
    let topping = topping_style(&state.decoration.topping);

    let mut price = base_price + state.size.price_modifier();
    if state.decoration.top != "none" && top.is_some() {
        price += TOP_DECORATION_PRICE;
    }
    if state.decoration.side != "none" && side.is_some() {
        price += SIDE_DECORATION_PRICE;
    }
    if state.decoration.topping != "none" && topping.is_some() {
        price += TOPPING_PRICE;
    }

    Ok(OrderSummary {
        cake_id,
        flavor: flavor.name.clone(),
        coating: coating(&state.coating_id)
            .map(|c| c.name)
            .unwrap_or("None (Flavor)")
            .to_string(),
        shape: state.shape,
        size: state.size.label().to_string(),
        custom_text: state.custom_text.clone(),
        top_decoration: top.map(|s| s.name).unwrap_or("None").to_string(),
        side_decoration: side.map(|s| s.name).unwrap_or("None").to_string(),
        topping: topping.map(|s| s.name).unwrap_or("None").to_string(),
        occasion,
        base_price,
        price,
    })
}
