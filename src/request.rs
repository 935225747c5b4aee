//! Image requests derived from the viewport.
//!
//! A [`RequestDescriptor`] is the rectangle the rendering service should draw, in
//! virtual-space integer coordinates, plus a nonce that keeps the browser from
//! serving a cached image for a repeated rectangle.

#[cfg(test)]
use std::cell::Cell;
use std::fmt::Write as _;

use crate::config::RenderFormat;
use crate::state::ViewportState;

#[derive(Clone, Debug, PartialEq)]
pub struct RequestDescriptor {
    pub left: i64,
    pub top: i64,
    pub width: f64,
    pub height: f64,
    pub nonce: u64,
}

/// Source of cache-busting values. Uniqueness is best effort.
pub trait NonceSource {
    fn next_nonce(&self) -> u64;
}

/// `Math.random()` scaled to the 53-bit integer range.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNonce;

impl NonceSource for BrowserNonce {
    fn next_nonce(&self) -> u64 {
        (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
    }
}

/// Deterministic counter for host-side tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct SequenceNonce {
    next: Cell<u64>,
}

#[cfg(test)]
impl SequenceNonce {
    pub fn starting_at(first: u64) -> Self {
        Self { next: Cell::new(first) }
    }
}

#[cfg(test)]
impl NonceSource for SequenceNonce {
    fn next_nonce(&self) -> u64 {
        let n = self.next.get();
        self.next.set(n.wrapping_add(1));
        n
    }
}

/// Top-left corner is truncated toward zero, not floored: center -1.5 with
/// width 2 gives left -2 where floor would give -3.
pub fn build_request(state: &ViewportState, nonce: &dyn NonceSource) -> RequestDescriptor {
    let left = (state.center_x() - state.width() / 2.0).trunc() as i64;
    let top = (state.center_y() - state.height() / 2.0).trunc() as i64;
    RequestDescriptor {
        left,
        top,
        width: state.width(),
        height: state.height(),
        nonce: nonce.next_nonce(),
    }
}

impl RequestDescriptor {
    /// `{base}/{endpoint}?x=..&y=..&w=..&h=..&r=..`
    pub fn to_url(&self, base: &str, format: RenderFormat) -> String {
        let mut url = String::with_capacity(base.len() + 64);
        url.push_str(base.trim_end_matches('/'));
        url.push('/');
        url.push_str(format.endpoint());
        // Writing into a String cannot fail.
        let _ = write!(
            url,
            "?x={}&y={}&w={}&h={}&r={}",
            self.left, self.top, self.width, self.height, self.nonce
        );
        url
    }
}
