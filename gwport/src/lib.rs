pub mod concepts;
pub mod feedback;
pub mod framework;
pub mod registry;
pub mod table;
pub mod util;

pub use concepts::binding::GatewayPortBinding;
pub use concepts::prefix::{Prefix, PrefixId};
