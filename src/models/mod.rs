mod coupon;
mod order;
mod payment;
mod product;
mod user;

pub use coupon::Coupon;
pub use order::{Order, OrderLine};
pub use payment::PaymentMethod;
pub use product::Product;
pub use user::UserProfile;
