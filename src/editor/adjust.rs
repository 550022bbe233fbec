// SPDX-License-Identifier: MPL-2.0
//! Adjustment and stylistic filter layers.

use super::recipes::stylistic_ops;
use super::{EditState, Editor};
use crate::application::port::{EditorHost, ImageFetcher, Surface};
use crate::diagnostics::UserAction;
use crate::domain::editing::{AdjustmentKind, AdjustmentPercent, StylisticFilter};
use crate::media::filter::{FilterOp, FilterSlot, FilterStack};

/// Builds the whole filter stack for `state`.
///
/// Non-neutral adjustments come first, in brightness, contrast, saturation
/// order, followed by the stylistic filter's operations.
#[must_use]
pub fn compose_filter_stack(state: &EditState) -> FilterStack {
    let mut stack = FilterStack::new();
    for kind in AdjustmentKind::ALL {
        let percent = state.adjustment(*kind);
        if percent.is_neutral() {
            continue;
        }
        let amount = percent.as_fraction();
        let op = match kind {
            AdjustmentKind::Brightness => FilterOp::Brightness(amount),
            AdjustmentKind::Contrast => FilterOp::Contrast(amount),
            AdjustmentKind::Saturation => FilterOp::Saturation(amount),
        };
        stack.push(FilterSlot::Adjustment(*kind), op);
    }
    for op in stylistic_ops(state.filter) {
        stack.push(FilterSlot::Stylistic(state.filter), op.clone());
    }
    stack
}

impl<S, F, H> Editor<S, F, H>
where
    S: Surface,
    F: ImageFetcher,
    H: EditorHost,
{
    /// Sets one adjustment level (clamped to -100..=100) and rebuilds the stack.
    ///
    /// The selected stylistic filter stays on top of the new adjustments.
    pub fn set_adjustment(&mut self, kind: AdjustmentKind, value: i32) -> bool {
        if !self.has_image() {
            return false;
        }
        let percent = AdjustmentPercent::new(value);
        self.record(UserAction::SetAdjustment {
            kind,
            value: percent.value(),
        });
        self.state.set_adjustment(kind, percent);
        if !percent.is_neutral() {
            self.state.edited = true;
        }
        self.refresh_filters();
        true
    }

    /// Replaces the stylistic filter, keeping the current adjustments.
    pub fn set_stylistic_filter(&mut self, filter: StylisticFilter) -> bool {
        if !self.has_image() {
            return false;
        }
        self.record(UserAction::SetFilter { filter });
        self.state.filter = filter;
        if !filter.is_none() {
            self.state.edited = true;
        }
        self.refresh_filters();
        true
    }

    pub(super) fn refresh_filters(&mut self) {
        let stack = compose_filter_stack(&self.state);
        self.surface.apply_filter_stack(stack);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_state_composes_an_empty_stack() {
        assert!(compose_filter_stack(&EditState::default()).is_empty());
    }

    #[test]
    fn adjustments_precede_the_stylistic_filter() {
        let mut state = EditState::default();
        state.filter = StylisticFilter::Vivid;
        state.saturation = AdjustmentPercent::new(-20);
        state.brightness = AdjustmentPercent::new(40);

        let stack = compose_filter_stack(&state);
        let slots: Vec<_> = stack.layers().iter().map(|layer| layer.slot).collect();
        assert_eq!(
            slots,
            vec![
                FilterSlot::Adjustment(AdjustmentKind::Brightness),
                FilterSlot::Adjustment(AdjustmentKind::Saturation),
                FilterSlot::Stylistic(StylisticFilter::Vivid),
                FilterSlot::Stylistic(StylisticFilter::Vivid),
            ]
        );
        assert_eq!(
            stack.adjustment(AdjustmentKind::Brightness),
            Some(&FilterOp::Brightness(0.4))
        );
    }
}
