//! Literal key names used in the persistent store

/// Keys shared between this crate and the storefront pages
pub struct StorageKeys;

impl StorageKeys {
    /// Short-lived bearer token
    pub const ACCESS_TOKEN: &'static str = "access_token";

    /// Token exchanged for a new access token
    pub const REFRESH_TOKEN: &'static str = "refresh_token";

    /// JSON-encoded user profile
    pub const USER: &'static str = "user";

    /// JSON-encoded cart, owned by the cart pages
    pub const CART_DATA: &'static str = "cartData";

    /// JSON-encoded pending order, owned by the checkout pages
    pub const ORDER_DATA: &'static str = "orderData";

    /// Keys removed by an explicit logout
    pub const CREDENTIALS: [&'static str; 3] = [Self::ACCESS_TOKEN, Self::REFRESH_TOKEN, Self::USER];

    /// Every key this crate knows about
    pub const ALL: [&'static str; 5] = [
        Self::ACCESS_TOKEN,
        Self::REFRESH_TOKEN,
        Self::USER,
        Self::CART_DATA,
        Self::ORDER_DATA,
    ];
}
