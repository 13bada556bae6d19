use super::geom::{Rect, Size};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Insets {
    pub const fn all(v: u16) -> Self {
        Self::xy(v, v)
    }

    pub const fn xy(x: u16, y: u16) -> Self {
        Self {
            left: x,
            right: x,
            top: y,
            bottom: y,
        }
    }

    pub fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

impl Rect {
    pub fn inset(self, insets: Insets) -> Self {
        Rect::new(
            self.x.saturating_add(insets.left),
            self.y.saturating_add(insets.top),
            self.w.saturating_sub(insets.horizontal()),
            self.h.saturating_sub(insets.vertical()),
        )
    }

    pub fn intersect(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        Rect::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
    }

    pub fn split_left(self, w: u16) -> (Rect, Rect) {
        let w = w.min(self.w);
        (
            Rect::new(self.x, self.y, w, self.h),
            Rect::new(self.x.saturating_add(w), self.y, self.w - w, self.h),
        )
    }

    pub fn split_right(self, w: u16) -> (Rect, Rect) {
        let w = w.min(self.w);
        let rest = self.w - w;
        (
            Rect::new(self.x, self.y, rest, self.h),
            Rect::new(self.x.saturating_add(rest), self.y, w, self.h),
        )
    }

    pub fn centered(self, w: u16, h: u16) -> Rect {
        let w = w.min(self.w);
        let h = h.min(self.h);
        Rect::new(
            self.x.saturating_add((self.w - w) / 2),
            self.y.saturating_add((self.h - h) / 2),
            w,
            h,
        )
    }
}

/// Lays `widths` out left to right with `spacing` cells between them.
///
/// Every slot takes the full height of `area`; slots that run past the right
/// edge are truncated (possibly to zero width).
pub fn hstack(area: Rect, widths: &[u16], spacing: u16) -> Vec<Rect> {
    let mut out = Vec::with_capacity(widths.len());
    let mut rest = area;
    for (idx, &w) in widths.iter().enumerate() {
        if idx > 0 {
            let (_, after_gap) = rest.split_left(spacing);
            rest = after_gap;
        }
        let (slot, after) = rest.split_left(w);
        out.push(slot);
        rest = after;
    }
    out
}

/// Total size of an [`hstack`] row holding children of the given sizes.
pub fn hstack_size(children: &[Size], spacing: u16) -> Size {
    let gaps = spacing.saturating_mul(children.len().saturating_sub(1) as u16);
    let w = children
        .iter()
        .fold(gaps, |acc, child| acc.saturating_add(child.w));
    let h = children.iter().map(|c| c.h).max().unwrap_or(0);
    Size::new(w, h)
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/layout.rs"]
mod tests;
