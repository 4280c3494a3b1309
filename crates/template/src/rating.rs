use crate::context::RenderContext;
use vitae_idf::IRNode;
use vitae_style::stylesheet::names;

/// Number of cells in a rating bar.
pub const RATING_CELLS: usize = 5;

/// Which cells of the bar are filled for `level`.
///
/// Cell `i` is filled when `level > i`. Levels are not clamped: anything
/// above five fills every cell, zero or below fills none.
pub fn rating_cells(level: i32) -> [bool; RATING_CELLS] {
    std::array::from_fn(|i| i64::from(level) > i as i64)
}

/// A row of [`RATING_CELLS`] boxes with the first `level` ones filled.
pub fn render_rating(ctx: &RenderContext<'_>, level: i32) -> IRNode {
    let children = rating_cells(level)
        .into_iter()
        .map(|filled| {
            let classes: &[&str] = if filled {
                &[names::RATING_CELL, names::RATING_CELL_FILLED]
            } else {
                &[names::RATING_CELL]
            };
            IRNode::block(ctx.meta(classes), Vec::new())
        })
        .collect();

    IRNode::FlexContainer {
        meta: ctx.meta(&["rating"]),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RenderOptions;
    use vitae_schema::Document;

    fn filled_indices(node: &IRNode) -> Vec<usize> {
        node.children()
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.has_class(names::RATING_CELL_FILLED))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_rating_cells() {
        assert_eq!(rating_cells(3), [true, true, true, false, false]);
        assert_eq!(rating_cells(0), [false; 5]);
        assert_eq!(rating_cells(-2), [false; 5]);
        assert_eq!(rating_cells(7), [true; 5]);
    }

    #[test]
    fn test_render_rating_fills_leading_cells() {
        let document = Document::default();
        let options = RenderOptions::default();
        let ctx = RenderContext::new(&document, &options);

        let three = render_rating(&ctx, 3);
        assert_eq!(three.kind(), "flex-container");
        assert_eq!(three.children().len(), RATING_CELLS);
        assert!(three.children().iter().all(|c| c.has_class(names::RATING_CELL)));
        assert_eq!(filled_indices(&three), [0, 1, 2]);

        assert!(filled_indices(&render_rating(&ctx, 0)).is_empty());
        assert_eq!(filled_indices(&render_rating(&ctx, 7)), [0, 1, 2, 3, 4]);
    }
}
