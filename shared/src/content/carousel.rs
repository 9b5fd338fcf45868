//! Circular image carousel index

use serde::{Deserialize, Serialize};

/// Position within a fixed-length image list; moves wrap at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

/// Snapshot sent with a gallery so a client can render prev/next controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselView {
    pub current: usize,
    pub previous: usize,
    pub next: usize,
    pub total: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Start at `index`, wrapped into range
    pub fn at(len: usize, index: usize) -> Self {
        let index = if len == 0 { 0 } else { index % len };
        Self { index, len }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn previous_index(&self) -> usize {
        match self.index {
            _ if self.len == 0 => 0,
            0 => self.len - 1,
            i => i - 1,
        }
    }

    fn next_index(&self) -> usize {
        if self.len == 0 || self.index + 1 == self.len {
            0
        } else {
            self.index + 1
        }
    }

    pub fn previous(&mut self) -> usize {
        self.index = self.previous_index();
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.index = self.next_index();
        self.index
    }

    pub fn view(&self) -> CarouselView {
        CarouselView {
            current: self.index,
            previous: self.previous_index(),
            next: self.next_index(),
            total: self.len,
        }
    }
}
