//! Viewport classification driving responsive page sizes.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Width (in CSS pixels) at or below which a viewport counts as mobile.
pub const DEFAULT_BREAKPOINT_PX: u32 = 700;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    #[default]
    Desktop,
    Mobile,
}

/// Source of the current viewport class, queried on every render.
pub trait ViewportClassifier {
    fn classify(&self) -> ViewportClass;
}

impl<F> ViewportClassifier for F
where
    F: Fn() -> ViewportClass,
{
    fn classify(&self) -> ViewportClass {
        self()
    }
}

/// Current viewport width, shared between the event source that observes
/// resizes and the classifiers that read it.
#[derive(Clone, Debug, Default)]
pub struct ViewportWidth(Rc<Cell<u32>>);

impl ViewportWidth {
    pub fn new(px: u32) -> Self {
        Self(Rc::new(Cell::new(px)))
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }

    pub fn set(&self, px: u32) {
        self.0.set(px);
    }
}

/// Classifies by comparing the shared width against a `max-width` breakpoint.
#[derive(Clone, Debug)]
pub struct BreakpointClassifier {
    breakpoint_px: u32,
    width: ViewportWidth,
}

impl BreakpointClassifier {
    pub fn new(breakpoint_px: u32, width: ViewportWidth) -> Self {
        Self {
            breakpoint_px,
            width,
        }
    }

    pub fn breakpoint_px(&self) -> u32 {
        self.breakpoint_px
    }
}

impl ViewportClassifier for BreakpointClassifier {
    fn classify(&self) -> ViewportClass {
        if self.width.get() <= self.breakpoint_px {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}
