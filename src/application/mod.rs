// Application layer - use cases and orchestration.
// The presentation layer talks to the domain only through these types.

pub mod error;
pub mod handle;
pub mod reporting;
pub mod service;
pub mod view;

pub use error::*;
pub use handle::*;
pub use reporting::*;
pub use service::*;
pub use view::*;
