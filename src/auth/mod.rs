pub mod middleware;
pub mod utils;

pub use middleware::AuthenticatedUser;
pub use utils::{require_admin, require_owner, require_owner_or_admin};
