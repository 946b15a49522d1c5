pub mod paymaya;
pub use self::paymaya::Paymaya;
