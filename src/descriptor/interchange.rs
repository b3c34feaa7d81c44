//! JSON export of descriptors for out-of-process compilers.

use super::types::ComponentDescriptor;
use crate::base::ExtractError;

/// Serialize one descriptor as pretty-printed JSON.
pub fn descriptor_to_json(descriptor: &ComponentDescriptor) -> Result<String, ExtractError> {
    serde_json::to_string_pretty(descriptor).map_err(|e| ExtractError::Interchange(e.to_string()))
}

/// Serialize a batch of descriptors as a JSON array.
pub fn descriptors_to_json(descriptors: &[ComponentDescriptor]) -> Result<String, ExtractError> {
    serde_json::to_string_pretty(descriptors).map_err(|e| ExtractError::Interchange(e.to_string()))
}
