/* src/provider/source/mod.rs */

mod memory;
pub use memory::MemoryProvider;

#[cfg(feature = "fs")]
mod file;
#[cfg(feature = "fs")]
pub use file::FileProvider;
