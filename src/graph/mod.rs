#[doc(hidden)]
pub mod index;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use index::GraphIndex;
