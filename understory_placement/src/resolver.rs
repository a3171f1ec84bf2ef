// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::{PlacementRequest, PlacementResult, resolve};

/// Memoizing wrapper around [`resolve`].
///
/// Scroll and resize handlers tend to ask for the same placement many times in
/// a row. `PlacementResolver` remembers the last inputs and result so identical
/// calls skip the computation, and reports whether the result moved.
#[derive(Clone, Debug, Default)]
pub struct PlacementResolver {
    last: Option<Memo>,
    computations: u64,
}

#[derive(Clone, Copy, Debug)]
struct Memo {
    trigger: Rect,
    overlay: Size,
    request: PlacementRequest,
    result: PlacementResult,
}

impl PlacementResolver {
    /// Creates a resolver with nothing cached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a placement, reusing the cached result for identical inputs.
    pub fn resolve(
        &mut self,
        trigger: Rect,
        overlay: Size,
        request: &PlacementRequest,
    ) -> PlacementResult {
        if let Some(memo) = &self.last
            && memo.trigger == trigger
            && memo.overlay == overlay
            && memo.request == *request
        {
            return memo.result;
        }
        let result = resolve(trigger, overlay, request);
        self.computations += 1;
        self.last = Some(Memo {
            trigger,
            overlay,
            request: *request,
            result,
        });
        result
    }

    /// Resolves a placement and returns it only if it differs from the
    /// previously returned result.
    pub fn resolve_changed(
        &mut self,
        trigger: Rect,
        overlay: Size,
        request: &PlacementRequest,
    ) -> Option<PlacementResult> {
        let previous = self.last();
        let result = self.resolve(trigger, overlay, request);
        (previous != Some(result)).then_some(result)
    }

    /// The most recent result, if any.
    #[must_use]
    pub fn last(&self) -> Option<PlacementResult> {
        self.last.map(|m| m.result)
    }

    /// Forgets the cached inputs and result.
    pub fn clear(&mut self) {
        self.last = None;
    }

    /// How many times the underlying algorithm actually ran.
    #[must_use]
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
