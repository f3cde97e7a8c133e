//! Network messages - communication between App and Network layers

use crate::models::{Category, NewsPayload};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the news list, filtered by category when one is in scope
    FetchNews {
        id: u64,
        category: Option<Category>,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// The backend answered with a decodable news body
    News {
        id: u64,
        /// Category the request was sent with
        category: Option<Category>,
        payload: NewsPayload,
        time_ms: u64,
    },
    /// The request could not complete: connect error, bad status or bad body
    Error {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::News { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }

    /// Round-trip time of the request
    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::News { time_ms, .. } => *time_ms,
            NetworkResponse::Error { time_ms, .. } => *time_ms,
        }
    }
}
