//! Decoder types
//!
//! Defines the parse strategy shared by descriptors and paginated responses.

use crate::error::Result;
use crate::types::JsonValue;
use std::sync::Arc;

type ParseFn<T> = dyn Fn(&JsonValue) -> Result<T> + Send + Sync;

/// Converts a JSON payload into `T`
pub struct Parser<T> {
    inner: Arc<ParseFn<T>>,
}

impl<T> Parser<T> {
    /// Wrap a parse function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&JsonValue) -> Result<T> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Run the parser
    pub fn parse(&self, value: &JsonValue) -> Result<T> {
        (self.inner)(value)
    }

}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}
