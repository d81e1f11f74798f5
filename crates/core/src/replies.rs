//! Reply text for every storefront action.
//!
//! Each function is pure: decoded backend data in, the exact user-facing
//! string out. Empty collections get their own fixed sentence instead of an
//! empty list.

use crate::domain::cart::{Cart, Quantity};
use crate::domain::catalog::{ProductDetail, ProductSummary};
use crate::domain::order::{CheckoutSession, Order};

pub const CURRENCY_SYMBOL: &str = "₹";
pub const UNKNOWN_USER: &str = "unknown user";

pub const NO_PRODUCTS: &str = "No products found.";
pub const EMPTY_CART: &str = "Your cart is empty.";
pub const ITEM_REMOVED: &str = "Item removed from your cart.";
pub const CART_CLEARED: &str = "Your cart has been cleared.";
pub const NO_ORDERS_YET: &str = "You have no orders yet.";
pub const NO_ADMIN_ORDERS: &str = "No orders found.";

pub fn product_list(products: &[ProductSummary]) -> String {
    if products.is_empty() {
        return NO_PRODUCTS.to_owned();
    }

    let lines = products
        .iter()
        .map(|product| format!("- {} ({CURRENCY_SYMBOL}{})", product.name, product.price))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Here are some products:\n{lines}")
}

pub fn product_detail(product: &ProductDetail) -> String {
    format!(
        "{}: {}\nPrice: {CURRENCY_SYMBOL}{}\nStock: {}",
        product.name, product.description, product.price, product.count_in_stock
    )
}

pub fn item_added(item: &str, quantity: Quantity) -> String {
    format!("Added {quantity} x {item} to your cart.")
}

pub fn cart_contents(cart: &Cart) -> String {
    if cart.lines().is_empty() {
        return EMPTY_CART.to_owned();
    }

    let mut message = String::from("Your cart contains:\n");
    for line in cart.lines() {
        message.push_str(&format!("- {} x {}\n", line.product.name, line.quantity));
    }
    message
}

pub fn item_quantity_updated(item_id: &str, quantity: Quantity) -> String {
    format!("Updated quantity of item {item_id} to {quantity}.")
}

pub fn checkout_link(session: &CheckoutSession) -> String {
    format!("Proceed to payment here: {}", session.payment_link())
}

pub fn my_orders(orders: &[Order]) -> String {
    if orders.is_empty() {
        return NO_ORDERS_YET.to_owned();
    }

    let mut message = String::from("Here are your orders:\n");
    for order in orders {
        message.push_str(&format!("Order #{}: {CURRENCY_SYMBOL}{}\n", order.id, order.total_price));
    }
    message
}

pub fn admin_orders(orders: &[Order]) -> String {
    if orders.is_empty() {
        return NO_ADMIN_ORDERS.to_owned();
    }

    let mut message = String::from("Admin orders:\n");
    for order in orders {
        message.push_str(&format!(
            "Order #{} by {} - {CURRENCY_SYMBOL}{}\n",
            order.id,
            order.user_name().unwrap_or(UNKNOWN_USER),
            order.total_price
        ));
    }
    message
}
