//! Scene Module - Element table and hit grid
//!
//! A `Scene` is the hit-testing surface for a laid-out page: every element
//! is stored once and its rectangle is stamped into a `HitGrid`, so the
//! lookup for any cell is O(1). Elements added later cover earlier ones.

use crate::types::{Element, Point, Rect, Target, Viewport};

use super::classifier::HitTester;

// =============================================================================
// HIT GRID - O(1) Coordinate to Element Lookup
// =============================================================================

const EMPTY: usize = usize::MAX;

/// A grid for O(1) hit detection.
///
/// Each cell contains the index of the element that occupies that position,
/// or nothing.
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<usize>,
}

impl HitGrid {
    /// Create a new hit grid with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![EMPTY; size],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the grid, clearing all contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.resize(width as usize * height as usize, EMPTY);
        self.clear();
    }

    /// Clear all cells.
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Set a single cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, index: usize) {
        if let Some(offset) = self.offset(x, y) {
            self.cells[offset] = index;
        }
    }

    /// Fill a rectangle, clipped to the grid.
    pub fn fill_rect(&mut self, rect: Rect, index: usize) {
        let x_end = (rect.x as u32 + rect.width as u32).min(self.width as u32) as u16;
        let y_end = (rect.y as u32 + rect.height as u32).min(self.height as u32) as u16;

        for y in rect.y..y_end {
            let row = y as usize * self.width as usize;
            for x in rect.x..x_end {
                self.cells[row + x as usize] = index;
            }
        }
    }

    /// Get the element index at a position.
    pub fn get(&self, x: u16, y: u16) -> Option<usize> {
        let offset = self.offset(x, y)?;
        match self.cells[offset] {
            EMPTY => None,
            index => Some(index),
        }
    }
}

// =============================================================================
// SCENE
// =============================================================================

/// Laid-out elements plus their hit grid.
pub struct Scene {
    elements: Vec<(Element, Rect)>,
    grid: HitGrid,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            elements: Vec::new(),
            grid: HitGrid::new(viewport.width, viewport.height),
        }
    }

    /// Add an element covering `rect`. Returns its index.
    pub fn add(&mut self, element: Element, rect: Rect) -> usize {
        let index = self.elements.len();
        self.grid.fill_rect(rect, index);
        self.elements.push((element, rect));
        index
    }

    pub fn element(&self, index: usize) -> Option<&Element> {
        self.elements.get(index).map(|(element, _)| element)
    }

    pub fn rect(&self, index: usize) -> Option<Rect> {
        self.elements.get(index).map(|(_, rect)| *rect)
    }

    /// Topmost element at a point.
    pub fn element_at(&self, point: Point) -> Option<&Element> {
        self.grid
            .get(point.x, point.y)
            .and_then(|index| self.element(index))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Element, Rect)> {
        self.elements.iter()
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.grid.width(), self.grid.height())
    }

    /// Resize the grid and re-stamp every element in insertion order.
    pub fn resize(&mut self, viewport: Viewport) {
        self.grid.resize(viewport.width, viewport.height);
        for (index, (_, rect)) in self.elements.iter().enumerate() {
            self.grid.fill_rect(*rect, index);
        }
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.grid.clear();
    }
}

impl HitTester for Scene {
    fn hit_test(&self, point: Point) -> Option<Target> {
        self.element_at(point).map(Element::target)
    }
}

// =============================================================================
// TESTS
// =============================================================================
