#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod path;
#[doc(hidden)]
pub mod router;


#[doc(inline)]
pub use error::RouteError;
#[doc(inline)]
pub use path::{find_path, Route};
#[doc(inline)]
pub use router::Router;
