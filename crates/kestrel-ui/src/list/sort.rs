//! Row ordering.
//!
//! Rows compare by the value in the sort column, interpreted by the column's
//! [`DataType`]. Equal values fall back to the insertion sequence, so every
//! pair of distinct rows has a definite order. Descending is the exact
//! reverse of ascending, tie-break included.

use std::cmp::Ordering;

use super::column::DataType;
use super::row::ListRow;

/// Sort state of a list box.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Sorting {
    /// Header clicks do not sort.
    Unsupported,
    /// Insertion order.
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl Sorting {
    /// Next state when the sorted column's header is clicked again.
    pub fn cycled(self) -> Sorting {
        match self {
            Sorting::Unsupported => Sorting::Unsupported,
            Sorting::Unsorted => Sorting::Ascending,
            Sorting::Ascending => Sorting::Descending,
            Sorting::Descending => Sorting::Unsorted,
        }
    }

    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Sorting::Ascending | Sorting::Descending)
    }
}

pub fn compare_rows(a: &ListRow, b: &ListRow, col: usize, data_type: DataType, sorting: Sorting) -> Ordering {
    if !sorting.is_active() {
        return a.seq().cmp(&b.seq());
    }

    // rows without that cell come first, in insertion order
    let (x, y) = match (a.get(col), b.get(col)) {
        (Some(x), Some(y)) => (x, y),
        (None, Some(_)) => return Ordering::Less,
        (Some(_), None) => return Ordering::Greater,
        (None, None) => return a.seq().cmp(&b.seq()),
    };

    let by_value = match data_type {
        DataType::String => x.as_str().cmp(y.as_str()),
        DataType::CheckBox | DataType::Int => x.as_int().cmp(&y.as_int()),
        DataType::Double => x.as_double().total_cmp(&y.as_double()),
        DataType::Null => Ordering::Equal,
    };
    let ord = by_value.then_with(|| a.seq().cmp(&b.seq()));

    match sorting {
        Sorting::Descending => ord.reverse(),
        _ => ord,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::RefCon;
    use crate::list::ListItem;

    fn row(refcon: u64, seq: u32, items: Vec<ListItem>) -> ListRow {
        let mut r = ListRow::new(RefCon(refcon), items);
        r.set_seq(seq);
        r
    }

    fn order(rows: &mut [ListRow], col: usize, dt: DataType, s: Sorting) -> Vec<u64> {
        rows.sort_by(|a, b| compare_rows(a, b, col, dt, s));
        rows.iter().map(|r| r.refcon().0).collect()
    }

    #[test]
    fn ties_break_by_sequence_and_descending_is_strict_reverse() {
        let mut rows = vec![
            row(1, 1, vec![ListItem::from(5)]),
            row(2, 2, vec![ListItem::from(3)]),
            row(3, 3, vec![ListItem::from(5)]),
            row(4, 4, vec![ListItem::from(3)]),
        ];
        let asc = order(&mut rows, 0, DataType::Int, Sorting::Ascending);
        assert_eq!(asc, vec![2, 4, 1, 3]);
        let desc = order(&mut rows, 0, DataType::Int, Sorting::Descending);
        assert_eq!(desc, vec![3, 1, 4, 2]);
    }

    #[test]
    fn unsorted_is_insertion_order() {
        let mut rows = vec![row(9, 3, vec![]), row(8, 1, vec![]), row(7, 2, vec![])];
        assert_eq!(order(&mut rows, 0, DataType::String, Sorting::Unsorted), vec![8, 7, 9]);
        assert_eq!(order(&mut rows, 0, DataType::String, Sorting::Unsupported), vec![8, 7, 9]);
    }

    #[test]
    fn missing_cells_sort_first_in_both_directions() {
        let mut rows = vec![
            row(1, 1, vec![ListItem::from("b")]),
            row(2, 2, vec![]),
            row(3, 3, vec![ListItem::from("a")]),
        ];
        assert_eq!(order(&mut rows, 0, DataType::String, Sorting::Ascending), vec![2, 3, 1]);
        assert_eq!(order(&mut rows, 0, DataType::String, Sorting::Descending), vec![2, 1, 3]);
    }

    #[test]
    fn doubles_use_total_order_with_tie_break() {
        let mut rows = vec![
            row(1, 1, vec![ListItem::from(2.5)]),
            row(2, 2, vec![ListItem::from(-1.0)]),
            row(3, 3, vec![ListItem::from(2.5)]),
        ];
        assert_eq!(order(&mut rows, 0, DataType::Double, Sorting::Ascending), vec![2, 1, 3]);
    }

    #[test]
    fn header_cycle() {
        assert_eq!(Sorting::Unsorted.cycled(), Sorting::Ascending);
        assert_eq!(Sorting::Ascending.cycled(), Sorting::Descending);
        assert_eq!(Sorting::Descending.cycled(), Sorting::Unsorted);
        assert_eq!(Sorting::Unsupported.cycled(), Sorting::Unsupported);
    }
}
