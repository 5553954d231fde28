//! Custom actions for the Cart actor.
//!
//! Every cart mutation is an action, so each one is a single read-modify-write
//! executed by the cart actor without interleaving with other requests.

use crate::model::{Cart, CartItem, CheckoutReceipt, ProductId};

/// Custom actions for Cart entities.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Appends an item.
    ///
    /// # Errors
    /// `ProductAlreadyInCart` if an item with the same product id is present.
    AddItem(CartItem),
    /// Sets the quantity of an item. A quantity of `0` removes it.
    ///
    /// # Errors
    /// `ProductNotInCart` if no item matches.
    SetQuantity { product_id: ProductId, quantity: u32 },
    /// Removes every item with this product id.
    ///
    /// # Errors
    /// `ProductNotInCart` if no item matches.
    RemoveItem(ProductId),
    /// Debits the owner's wallet for the cart total, then empties the cart.
    ///
    /// # Errors
    /// `EmptyCart`, `UserNotFound`, `AddressNotSet`, `TotalOverflow` or
    /// `InsufficientBalance`, checked in that order. On error nothing is charged and
    /// the cart is unchanged.
    Checkout,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    AddItem(Cart),
    SetQuantity(Cart),
    RemoveItem(Cart),
    Checkout(CheckoutReceipt),
}
