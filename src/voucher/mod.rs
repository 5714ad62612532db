pub mod builder;
pub mod html;
pub mod labels;
pub mod money;
pub mod qr;
pub mod render;
pub mod validator;

pub use builder::VoucherBuilder;
pub use html::to_html;
pub use qr::ContactCode;
pub use render::{render, VoucherLayout};
pub use validator::{validate, FormValidator, ValidForm, ValidationError};
