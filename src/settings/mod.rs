//! Configuration loading and resolution.
//!
//! Values are layered from built-in defaults, config files, `FORMSMITH__*`
//! environment variables and CLI flags. `load` is the entry point and returns
//! a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
