pub mod check;
pub mod complete;
pub mod dispatch;
pub mod hover;
pub mod locate;
pub mod schema;
pub mod shared;
