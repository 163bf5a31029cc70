//! Boundary reordering
//!
//! Face boundary records arrive in arbitrary order and orientation. This
//! module rebuilds the single closed chain: starting from an arbitrary seed
//! element, it repeatedly finds the unplaced element whose start (or,
//! reversed, end) continues the chain tail, using the coarse endpoint
//! tolerance. A dead end means the input geometry is disconnected or
//! malformed and is reported, never dropped.

use crate::element::PathElement;
use shaperkit_core::error::ProfileError;
use tracing::debug;

/// An ordered boundary loop.
///
/// Invariant: non-empty, every element's end matches the next element's
/// start within the coarse endpoint tolerance, and the last element's end
/// matches the first element's start (closed cycle). Only [`reorder`]
/// constructs this type.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedLoop {
    elements: Vec<PathElement>,
}

impl OrderedLoop {
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathElement> {
        self.elements.iter()
    }
}

/// Rebuild a consistently-oriented closed chain from unordered elements.
///
/// The first element seeds the chain in its given orientation; ties between
/// matching candidates go to the first in iteration order (real boundary
/// data has no ambiguous junctions). Fails with
/// [`ProfileError::DisconnectedBoundary`] when no element continues the
/// chain, or when the consumed chain does not close back on its seed.
pub fn reorder(elements: Vec<PathElement>) -> Result<OrderedLoop, ProfileError> {
    if elements.is_empty() {
        return Err(ProfileError::EmptyBoundary);
    }

    let mut remaining = elements;
    let mut ordered = vec![remaining.remove(0)];
    let mut tail = ordered[0].end_position();

    while !remaining.is_empty() {
        let mut found = None;
        for (i, candidate) in remaining.iter().enumerate() {
            if tail.matches_endpoint(candidate.start_position()) {
                found = Some((i, false));
                break;
            }
            if tail.matches_endpoint(candidate.end_position()) {
                found = Some((i, true));
                break;
            }
        }

        let Some((index, reverse)) = found else {
            return Err(ProfileError::DisconnectedBoundary {
                tail: tail.to_string(),
                placed: ordered.len(),
                remaining: remaining.len(),
            });
        };

        let element = remaining.remove(index);
        let element = if reverse { element.reversed() } else { element };
        tail = element.end_position();
        ordered.push(element);
    }

    // The chain must close back on the seed element
    let head = ordered[0].start_position();
    if !tail.matches_endpoint(head) {
        return Err(ProfileError::DisconnectedBoundary {
            tail: tail.to_string(),
            placed: ordered.len(),
            remaining: 0,
        });
    }

    debug!(elements = ordered.len(), "reordered boundary loop");
    Ok(OrderedLoop { elements: ordered })
}
