//! Alignment and distribution over element sets.
//!
//! All functions are pure: they take a slice and return repositioned
//! clones, so callers decide when the result becomes an edit.

use crate::element::Element;

/// Alignment edge or axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Top,
    Bottom,
    /// Centers on the horizontal axis (aligns x centers).
    CenterHorizontal,
    /// Centers on the vertical axis (aligns y centers).
    CenterVertical,
}

/// Align elements to a shared edge or center line.
///
/// Edges align to the extreme edge among the inputs; centers align to the
/// mean of the input centers. Fewer than two elements come back unchanged.
pub fn align(elements: &[Element], alignment: Alignment) -> Vec<Element> {
    let mut out: Vec<Element> = elements.to_vec();
    if out.len() < 2 {
        return out;
    }

    match alignment {
        Alignment::Left => {
            let edge = fold_min(out.iter().map(|el| el.x));
            for el in &mut out {
                el.x = edge;
            }
        }
        Alignment::Right => {
            let edge = fold_max(out.iter().map(|el| el.x + el.width));
            for el in &mut out {
                el.x = edge - el.width;
            }
        }
        Alignment::Top => {
            let edge = fold_min(out.iter().map(|el| el.y));
            for el in &mut out {
                el.y = edge;
            }
        }
        Alignment::Bottom => {
            let edge = fold_max(out.iter().map(|el| el.y + el.height));
            for el in &mut out {
                el.y = edge - el.height;
            }
        }
        Alignment::CenterHorizontal => {
            let center = mean(out.iter().map(|el| el.x + el.width / 2.0));
            for el in &mut out {
                el.x = center - el.width / 2.0;
            }
        }
        Alignment::CenterVertical => {
            let center = mean(out.iter().map(|el| el.y + el.height / 2.0));
            for el in &mut out {
                el.y = center - el.height / 2.0;
            }
        }
    }
    out
}

/// Spread elements horizontally with uniform gaps.
///
/// Elements are ordered by left edge; the first and last keep their
/// positions and the gap is `(span - total width) / (n - 1)`. With large
/// elements the gap can be negative, which overlaps them evenly.
pub fn distribute_horizontal(elements: &[Element]) -> Vec<Element> {
    let mut out: Vec<Element> = elements.to_vec();
    if out.len() < 2 {
        return out;
    }
    out.sort_by(|a, b| a.x.total_cmp(&b.x));

    let min = out[0].x;
    let max = fold_max(out.iter().map(|el| el.x + el.width));
    let total: f64 = out.iter().map(|el| el.width).sum();
    let gap = (max - min - total) / (out.len() - 1) as f64;

    let mut cursor = min;
    for el in &mut out {
        el.x = cursor;
        cursor += el.width + gap;
    }
    out
}

/// Spread elements vertically with uniform gaps. See
/// [`distribute_horizontal`].
pub fn distribute_vertical(elements: &[Element]) -> Vec<Element> {
    let mut out: Vec<Element> = elements.to_vec();
    if out.len() < 2 {
        return out;
    }
    out.sort_by(|a, b| a.y.total_cmp(&b.y));

    let min = out[0].y;
    let max = fold_max(out.iter().map(|el| el.y + el.height));
    let total: f64 = out.iter().map(|el| el.height).sum();
    let gap = (max - min - total) / (out.len() - 1) as f64;

    let mut cursor = min;
    for el in &mut out {
        el.y = cursor;
        cursor += el.height + gap;
    }
    out
}

fn fold_min(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::INFINITY, f64::min)
}

fn fold_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    sum / count as f64
}
