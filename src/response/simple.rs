//! Single-result responses

use crate::error::Result;
use crate::request::Execution;

/// A single typed result, delivered once
#[derive(Debug)]
pub struct SimpleApiResponse<T> {
    result: Result<T>,
}

impl<T> SimpleApiResponse<T> {
    /// Wrap a result
    pub fn new(result: Result<T>) -> Self {
        Self { result }
    }

    /// Borrow the result
    pub fn result(&self) -> &Result<T> {
        &self.result
    }

    /// Take the result
    pub fn into_result(self) -> Result<T> {
        self.result
    }

    /// Check for success
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

impl<T> From<Result<T>> for SimpleApiResponse<T> {
    fn from(result: Result<T>) -> Self {
        Self::new(result)
    }
}

impl<T> From<Execution<T>> for SimpleApiResponse<T> {
    fn from(execution: Execution<T>) -> Self {
        Self::new(execution.result)
    }
}
