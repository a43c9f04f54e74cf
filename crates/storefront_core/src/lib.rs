pub mod cart_store;
pub mod clock;
pub mod domain;
pub mod ports;

pub use cart_store::{CartError, CartStore};
pub use clock::{Clock, SystemClock};
pub use domain::{
    Cart, CartItem, CartSummary, Category, CategoryUpdate, ItemQuantityUpdate, NewCartItem,
    NewCategory, NewProduct, Product,
};
pub use ports::{CartRepository, CategoryRepository, PortError, PortResult, ProductRepository};
