/// Page-wise horizontal scrolling over a strip of fixed-width cards.
///
/// `offset` is the index of the leftmost visible card; `viewport` is how many
/// cards fit on screen. A scroll moves one full viewport width, matching the
/// arrow buttons on the original strip.
pub trait ScrollableRow {
    fn set_offset(&mut self, offset: usize);

    fn offset(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool;

    fn scroll_left(&mut self, viewport: usize) {
        if self.is_empty() || viewport == 0 {
            return;
        }
        self.set_offset(self.offset().saturating_sub(viewport));
    }

    fn scroll_right(&mut self, viewport: usize) {
        if self.is_empty() || viewport == 0 {
            return;
        }
        let max = self.len().saturating_sub(viewport);
        let next = self.offset().saturating_add(viewport).min(max);
        self.set_offset(next);
    }

    /// Clamp the offset after the strip shrinks, so the viewport never hangs
    /// past the last card.
    fn clamp_offset(&mut self, viewport: usize) {
        let max = self.len().saturating_sub(viewport);
        if self.offset() > max {
            self.set_offset(max);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct TestRow {
        cards: Vec<usize>,
        offset: usize,
    }

    impl TestRow {
        fn with_cards(n: usize) -> Self {
            Self {
                cards: (0..n).collect(),
                offset: 0,
            }
        }
    }

    impl ScrollableRow for TestRow {
        fn set_offset(&mut self, offset: usize) {
            self.offset = offset;
        }

        fn offset(&self) -> usize {
            self.offset
        }

        fn len(&self) -> usize {
            self.cards.len()
        }

        fn is_empty(&self) -> bool {
            self.cards.is_empty()
        }
    }

    #[test]
    fn test_scroll_right_empty() {
        let mut row = TestRow::default();
        row.scroll_right(3);
        assert_eq!(row.offset(), 0);
    }

    #[test]
    fn test_scroll_right_moves_one_viewport() {
        let mut row = TestRow::with_cards(10);
        row.scroll_right(3);
        assert_eq!(row.offset(), 3);
        row.scroll_right(3);
        assert_eq!(row.offset(), 6);
    }

    #[test]
    fn test_scroll_right_clamps_to_last_full_viewport() {
        let mut row = TestRow::with_cards(10);
        row.scroll_right(4);
        row.scroll_right(4);
        assert_eq!(row.offset(), 6);
        row.scroll_right(4);
        assert_eq!(row.offset(), 6);
    }

    #[test]
    fn test_scroll_right_fewer_cards_than_viewport() {
        let mut row = TestRow::with_cards(2);
        row.scroll_right(5);
        assert_eq!(row.offset(), 0);
    }

    #[test]
    fn test_scroll_left_empty() {
        let mut row = TestRow::default();
        row.scroll_left(3);
        assert_eq!(row.offset(), 0);
    }

    #[test]
    fn test_scroll_left_moves_one_viewport() {
        let mut row = TestRow::with_cards(10);
        row.set_offset(6);
        row.scroll_left(3);
        assert_eq!(row.offset(), 3);
        row.scroll_left(3);
        assert_eq!(row.offset(), 0);
    }

    #[test]
    fn test_scroll_left_saturates_at_start() {
        let mut row = TestRow::with_cards(10);
        row.set_offset(2);
        row.scroll_left(5);
        assert_eq!(row.offset(), 0);
        row.scroll_left(5);
        assert_eq!(row.offset(), 0);
    }

    #[test]
    fn test_zero_viewport_is_a_no_op() {
        let mut row = TestRow::with_cards(10);
        row.scroll_right(0);
        assert_eq!(row.offset(), 0);
    }

    #[test]
    fn test_clamp_offset_after_shrink() {
        let mut row = TestRow::with_cards(10);
        row.set_offset(8);
        row.cards.truncate(4);
        row.clamp_offset(3);
        assert_eq!(row.offset(), 1);
    }
}
