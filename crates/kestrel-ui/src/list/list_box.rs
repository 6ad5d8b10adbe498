use kestrel_engine::coords::{Point, Rect};
use kestrel_engine::input::{Key, KeyEvent, MouseButton, MouseStatus};
use kestrel_engine::paint::Color;

use crate::cropped::crop_to_width;
use crate::event::{EventCtx, UiMessage};
use crate::focus::FocusChange;
use crate::ident::RefCon;
use crate::metrics::SharedMetrics;
use crate::painter::{checkbox_square, Painter, TextAlign};
use crate::theme::ThemeColor;
use crate::widget::{WidgetBase, WidgetColors};

use super::column::{ColumnDef, DataType};
use super::row::ListRow;
use super::sort::{compare_rows, Sorting};

/// Row height in percent of the font's line height.
pub const DEFAULT_LINE_HEIGHT_PCT: u32 = 200;

/// Character width assumed before metrics are bound.
const FALLBACK_CHAR_WIDTH: i32 = 8;

/// Multi-column list with one header row.
///
/// Rows are identified by their [`RefCon`]; [`ListBox::add_row`] inserts or
/// overwrites. Only the rows in the scroll window
/// (`first_visible .. first_visible + rows_visible`) are visited when
/// drawing or hit-testing.
///
/// ```rust,ignore
/// let mut list = ListBox::new()
///     .column(0, ColumnDef::new("Name", 120, DataType::String))
///     .column(1, ColumnDef::new("Pax", 40, DataType::Int));
/// list.add_row(ListRow::new(RefCon(1), [ListItem::from("Cessna"), ListItem::from(2)]));
/// list.set_sorting(1, Sorting::Ascending);
/// ```
#[derive(Debug, Clone)]
pub struct ListBox {
    cols: Vec<ColumnDef>,
    sorted_by: usize,
    sorting: Sorting,

    rows: Vec<ListRow>,
    /// Last sequence number handed out.
    last_seq: u32,

    /// Explicit line height percentage; the container's default otherwise.
    line_height_pct: Option<u32>,
    default_pct: u32,
    line_height: i32,

    selected: Option<RefCon>,
    first_visible: usize,
    rows_visible: usize,

    /// Cropped width per column id, from the last crop pass.
    col_widths: Vec<i32>,
    geometry: Option<Rect>,
    metrics: Option<SharedMetrics>,
}

impl ListBox {
    pub fn new() -> Self {
        Self {
            cols:            Vec::new(),
            sorted_by:       0,
            sorting:         Sorting::Unsorted,
            rows:            Vec::new(),
            last_seq:        0,
            line_height_pct: None,
            default_pct:     DEFAULT_LINE_HEIGHT_PCT,
            line_height:     15,
            selected:        None,
            first_visible:   0,
            rows_visible:    0,
            col_widths:      Vec::new(),
            geometry:        None,
            metrics:         None,
        }
    }

    /// Builder form of [`ListBox::add_col`].
    pub fn column(mut self, id: usize, def: ColumnDef) -> Self {
        self.add_col(id, def);
        self
    }

    /// Builder form of [`ListBox::set_sorting`].
    pub fn sorted(mut self, col: usize, sorting: Sorting) -> Self {
        self.set_sorting(col, sorting);
        self
    }

    // ── columns ───────────────────────────────────────────────────────────

    /// Adds or overwrites the column `id`. Gaps are filled with null columns.
    pub fn add_col(&mut self, id: usize, mut def: ColumnDef) {
        if id >= self.cols.len() {
            self.cols.resize_with(id + 1, ColumnDef::null);
        }
        if let Some(m) = &self.metrics {
            def.name.bind_metrics(m.clone());
        }
        self.cols[id] = def;
        self.crop_texts();
    }

    pub fn col(&self, id: usize) -> Option<&ColumnDef> {
        self.cols.get(id).filter(|c| !c.is_null())
    }

    /// Width and visibility changes take effect with the next geometry
    /// change; call [`ListBox::refresh_columns`] to apply them at once.
    pub fn col_mut(&mut self, id: usize) -> Option<&mut ColumnDef> {
        self.cols.get_mut(id).filter(|c| !c.is_null())
    }

    #[inline]
    pub fn columns(&self) -> &[ColumnDef] {
        &self.cols
    }

    pub fn refresh_columns(&mut self) {
        self.crop_texts();
    }

    // ── sorting ───────────────────────────────────────────────────────────

    /// Sets sort column and direction and re-sorts. Returns `false` for an
    /// unknown or null column. `Unsupported` disables header sorting.
    pub fn set_sorting(&mut self, col: usize, sorting: Sorting) -> bool {
        let col = if sorting == Sorting::Unsupported { 0 } else { col };
        if self.sorted_by == col && self.sorting == sorting {
            return true;
        }
        if sorting != Sorting::Unsupported && self.col(col).is_none() {
            return false;
        }
        log::debug!("list box: sort by column {col} ({sorting:?})");
        self.sorted_by = col;
        self.sorting = sorting;
        self.sort();
        true
    }

    #[inline]
    pub fn sort_column(&self) -> usize {
        self.sorted_by
    }

    #[inline]
    pub fn sorting(&self) -> Sorting {
        self.sorting
    }

    fn sort(&mut self) {
        let col = self.sorted_by;
        let data_type = self.cols.get(col).map_or(DataType::Null, |c| c.data_type);
        let sorting = self.sorting;
        self.rows.sort_by(|a, b| compare_rows(a, b, col, data_type, sorting));
        self.make_sel_visible();
    }

    // ── rows ──────────────────────────────────────────────────────────────

    /// Inserts `row`, or overwrites the row with the same refcon while
    /// keeping its sequence number. Re-sorts if a sort is active.
    pub fn add_row(&mut self, mut row: ListRow) -> &mut ListRow {
        self.fit_row(&mut row);
        let seq = match self.index_of(row.refcon()) {
            Some(i) => {
                let seq = self.rows[i].seq();
                row.set_seq(seq);
                self.rows[i] = row;
                seq
            }
            None => {
                self.last_seq += 1;
                row.set_seq(self.last_seq);
                self.rows.push(row);
                self.after_row_count_change();
                self.last_seq
            }
        };
        if self.sorting.is_active() {
            self.sort();
        }

        // sequence numbers are unique, and `rows` holds at least this row
        let idx = self.rows.iter().position(|r| r.seq() == seq).unwrap_or(self.rows.len() - 1);
        &mut self.rows[idx]
    }

    /// Row at display position `idx`. Positions change with every sort.
    pub fn row(&self, idx: usize) -> Option<&ListRow> {
        self.rows.get(idx)
    }

    pub fn row_mut(&mut self, idx: usize) -> Option<&mut ListRow> {
        self.rows.get_mut(idx)
    }

    #[inline]
    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn find_row(&self, refcon: RefCon) -> Option<&ListRow> {
        self.index_of(refcon).map(|i| &self.rows[i])
    }

    pub fn find_row_mut(&mut self, refcon: RefCon) -> Option<&mut ListRow> {
        self.index_of(refcon).map(|i| &mut self.rows[i])
    }

    pub fn index_of(&self, refcon: RefCon) -> Option<usize> {
        if refcon.is_null() {
            return None;
        }
        self.rows.iter().position(|r| r.refcon() == refcon)
    }

    pub fn remove_row(&mut self, refcon: RefCon) -> bool {
        let Some(i) = self.index_of(refcon) else { return false };
        if self.selected == Some(refcon) {
            self.selected = None;
        }
        self.rows.remove(i);
        self.after_row_count_change();
        true
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.rows.clear();
        self.after_row_count_change();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // ── selection ─────────────────────────────────────────────────────────

    /// Selects the row with `refcon` and scrolls it into view. An unknown
    /// refcon clears the selection and returns `false`.
    pub fn select_row(&mut self, refcon: RefCon) -> bool {
        match self.index_of(refcon) {
            Some(_) => {
                self.selected = Some(refcon);
                self.make_sel_visible();
                true
            }
            None => {
                self.selected = None;
                false
            }
        }
    }

    #[inline]
    pub fn selected(&self) -> Option<RefCon> {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&ListRow> {
        self.selected.and_then(|r| self.find_row(r))
    }

    fn select_idx(&mut self, idx: usize, ctx: &mut EventCtx) {
        let row = self.rows[idx].refcon();
        self.selected = Some(row);
        let id = ctx.source();
        ctx.post(UiMessage::ListSelectionChanged { id, row });
    }

    fn make_sel_visible(&mut self) {
        let Some(sel) = self.selected.and_then(|r| self.index_of(r)) else { return };
        if sel < self.first_visible {
            self.first_visible = sel;
        } else if self.rows_visible > 0 && sel >= self.first_visible + self.rows_visible {
            self.first_visible = sel + 1 - self.rows_visible;
        }
    }

    // ── scroll window ─────────────────────────────────────────────────────

    #[inline]
    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    /// Data rows that fit below the header.
    #[inline]
    pub fn rows_visible(&self) -> usize {
        self.rows_visible
    }

    /// Largest valid `first_visible`.
    #[inline]
    pub fn max_first_visible(&self) -> usize {
        self.rows.len().saturating_sub(self.rows_visible)
    }

    /// Scrolls by `delta` rows; positive moves toward later rows.
    pub fn scroll_by(&mut self, delta: i32) {
        let target = self.first_visible as i64 + i64::from(delta);
        self.first_visible = target.clamp(0, self.max_first_visible() as i64) as usize;
    }

    fn clamp_scroll(&mut self) {
        self.first_visible = self.first_visible.min(self.max_first_visible());
    }

    #[inline]
    fn has_scrollbar(&self) -> bool {
        self.rows.len() > self.rows_visible
    }

    /// Scrollbar thumb as (top, bottom), relative to the widget's top edge.
    pub fn scroll_thumb(&self) -> Option<(i32, i32)> {
        if !self.has_scrollbar() {
            return None;
        }
        let h = self.geometry?.height() - self.line_height;
        let n = self.rows.len() as i64;
        let at = |row: usize| -self.line_height - (i64::from(h) * row as i64 / n) as i32;
        Some((at(self.first_visible), at(self.first_visible + self.rows_visible)))
    }

    // ── geometry ──────────────────────────────────────────────────────────

    pub fn set_line_height_pct(&mut self, pct: u32) {
        self.line_height_pct = Some(pct.max(1));
        self.set_geometry(self.geometry);
    }

    #[inline]
    pub fn line_height_pct(&self) -> u32 {
        self.line_height_pct.unwrap_or(self.default_pct)
    }

    /// Resolved row height in pixels.
    #[inline]
    pub fn line_height(&self) -> i32 {
        self.line_height
    }

    fn char_width(&self) -> i32 {
        match self.metrics.as_ref().map(|m| m.char_width()) {
            Some(w) if w > 0 => w,
            _ => FALLBACK_CHAR_WIDTH,
        }
    }

    pub(crate) fn bind(&mut self, metrics: SharedMetrics, default_pct: u32) {
        for c in &mut self.cols {
            c.name.bind_metrics(metrics.clone());
        }
        for row in &mut self.rows {
            for item in row.items_mut() {
                item.cell_text_mut().bind_metrics(metrics.clone());
            }
        }
        self.metrics = Some(metrics);
        self.default_pct = default_pct.max(1);
        self.set_geometry(self.geometry);
    }

    pub(crate) fn set_geometry(&mut self, r: Option<Rect>) {
        self.geometry = r;
        let font = self.metrics.as_ref().map_or(10, |m| m.line_height());
        self.line_height = (font * self.line_height_pct() as i32 / 100).max(1);

        // one row goes to the header
        self.rows_visible = r.map_or(0, |r| (r.height() / self.line_height).max(0) as usize).saturating_sub(1);
        self.clamp_scroll();
        self.crop_texts();
        self.make_sel_visible();
    }

    fn after_row_count_change(&mut self) {
        self.clamp_scroll();
        // the scrollbar may have appeared or gone
        self.crop_texts();
    }

    /// Text width available to each column, left to right.
    fn crop_texts(&mut self) {
        let cw = self.char_width();
        let mut width = self.geometry.map_or(0, |r| r.width());
        if self.has_scrollbar() {
            width -= cw + 1;
        }

        self.col_widths.clear();
        let mut x = 0;
        let mut prev = DataType::Null;
        for def in &mut self.cols {
            let mut w = if !def.visible || x >= width { 0 } else { (width - x).min(def.width) };
            x += w;
            if def.visible {
                // left-aligned text right after right-aligned text keeps a gap
                if def.data_type == DataType::String && prev.is_right_aligned() {
                    w = (w - cw).max(0);
                }
                prev = def.data_type;
            }
            def.name.set_width(w);
            self.col_widths.push(w);
        }

        for row in &mut self.rows {
            for (item, &w) in row.items_mut().iter_mut().zip(&self.col_widths) {
                item.cell_text_mut().set_width(w);
            }
        }
    }

    /// Binds metrics and column widths to a row about to be stored.
    fn fit_row(&self, row: &mut ListRow) {
        for (col, item) in row.items_mut().iter_mut().enumerate() {
            let text = item.cell_text_mut();
            if let Some(m) = &self.metrics {
                text.bind_metrics(m.clone());
            }
            text.set_width(self.col_widths.get(col).copied().unwrap_or(0));
        }
    }

    // ── hit-testing ───────────────────────────────────────────────────────

    /// Row index at `y`, relative to the top edge (downward negative).
    /// `None` for the header and below the last row.
    pub fn find_row_idx(&self, y: i32) -> Option<usize> {
        if y > 0 {
            return None;
        }
        let hit = (-y / self.line_height) as usize;
        if hit == 0 {
            return None;
        }
        let idx = hit - 1 + self.first_visible;
        (idx < self.rows.len()).then_some(idx)
    }

    /// Column id at `x`, relative to the left edge. Clicks right of every
    /// column map to the last visible one.
    pub fn find_col_idx(&self, x: i32) -> Option<usize> {
        let mut right = 0;
        let mut last = None;
        for (id, def) in self.cols.iter().enumerate().filter(|(_, c)| c.visible) {
            right += def.width;
            last = Some(id);
            if x <= right {
                break;
            }
        }
        last
    }

    // ── input ─────────────────────────────────────────────────────────────

    pub(crate) fn focus_change(&mut self, change: FocusChange) -> bool {
        matches!(change, FocusChange::First | FocusChange::Last)
    }

    /// `p` is relative to the widget's top-left corner.
    pub(crate) fn mouse_click(&mut self, p: Point, button: MouseButton, status: MouseStatus, ctx: &mut EventCtx) {
        if button != MouseButton::Left || status != MouseStatus::Down {
            return;
        }
        let col = self.find_col_idx(p.x);

        if p.y >= -self.line_height {
            if let Some(col) = col.filter(|_| self.sorting != Sorting::Unsupported) {
                let next = if col == self.sorted_by { self.sorting.cycled() } else { Sorting::Ascending };
                self.set_sorting(col, next);
            }
            return;
        }

        let width = self.geometry.map_or(0, |r| r.width());
        if let Some((thumb_top, thumb_bottom)) = self.scroll_thumb().filter(|_| p.x >= width - self.char_width()) {
            let page = if self.rows_visible > 1 { self.rows_visible as i32 - 1 } else { 1 };
            if p.y >= thumb_top {
                self.scroll_by(-page);
            } else if p.y <= thumb_bottom {
                self.scroll_by(page);
            }
            return;
        }

        let Some(idx) = self.find_row_idx(p.y) else { return };
        if let Some(col) = col.filter(|&c| self.cols[c].data_type == DataType::CheckBox) {
            if let Some(item) = self.rows[idx].get_mut(col).filter(|i| i.is_enabled()) {
                let checked = item.is_checked();
                item.set_checked(!checked);
            }
        }
        self.select_idx(idx, ctx);
    }

    pub(crate) fn key(&mut self, ev: &KeyEvent, ctx: &mut EventCtx) {
        if self.rows.is_empty() || !ev.is_plain_down() {
            return;
        }
        let last = self.rows.len() - 1;
        let page = self.rows_visible.max(2) - 1;
        let cur = self.selected.and_then(|r| self.index_of(r));

        let next = match (ev.key, cur) {
            (Key::ArrowDown | Key::ArrowUp | Key::PageDown | Key::PageUp, None) => 0,
            (Key::ArrowDown, Some(i)) => (i + 1).min(last),
            (Key::ArrowUp, Some(i)) => i.saturating_sub(1),
            (Key::PageDown, Some(i)) => (i + page).min(last),
            (Key::PageUp, Some(i)) => i.saturating_sub(page),
            (Key::Home, _) => 0,
            (Key::End, _) => last,
            _ => return,
        };
        if cur != Some(next) {
            self.select_idx(next, ctx);
        }
        self.make_sel_visible();
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub(crate) fn draw(&self, base: &WidgetBase, colors: &WidgetColors, painter: &mut Painter, r: Rect, focused: bool) {
        painter.fill_rect(r, colors.bg);
        let text = colors.text(base.is_enabled());

        let lh = self.line_height;
        let mut row_rect = Rect::new(r.left(), r.top(), r.right(), r.top() - lh);
        if row_rect.bottom() < r.bottom() {
            return;
        }

        self.draw_header(painter, row_rect);

        if self.has_scrollbar() {
            row_rect.set_right(row_rect.right() - self.char_width() - 1);
        }
        row_rect -= Point::new(0, lh);

        let selection = painter.role(ThemeColor::Selection);
        let focus_border = painter.role(ThemeColor::FocusBorder);
        let alternate = painter.role(ThemeColor::AlternateRow);
        for (n, row) in self.rows.iter().skip(self.first_visible).enumerate() {
            if row_rect.bottom() < r.bottom() {
                break;
            }
            if self.selected == Some(row.refcon()) {
                painter.fill_rect(row_rect, selection);
                if focused {
                    painter.frame_rect(row_rect, focus_border);
                }
            } else if n % 2 == 1 {
                painter.fill_rect(row_rect, alternate);
            }
            self.draw_row(painter, row_rect, row, text);
            row_rect -= Point::new(0, lh);
        }

        if self.has_scrollbar() {
            self.draw_scrollbar(painter, r);
        }
    }

    /// Visible columns with their cells inside `row_rect`, the gap after
    /// right-aligned columns already applied.
    fn cells(&self, row_rect: Rect) -> Vec<(usize, &ColumnDef, Rect)> {
        let cw = self.char_width();
        let mut out = Vec::new();
        let mut x = row_rect.left();
        let mut prev = DataType::Null;
        for (id, def) in self.cols.iter().enumerate().filter(|(_, c)| c.visible) {
            if x >= row_rect.right() {
                break;
            }
            let mut left = x;
            if def.data_type == DataType::String && prev.is_right_aligned() {
                left += cw;
            }
            let right = (x + def.width).min(row_rect.right());
            out.push((id, def, Rect::new(left.min(right), row_rect.top(), right, row_rect.bottom())));
            x += def.width;
            prev = def.data_type;
        }
        out
    }

    fn draw_header(&self, painter: &mut Painter, row_rect: Rect) {
        let color = painter.role(ThemeColor::ColumnHeader);
        for (id, def, cell) in self.cells(row_rect) {
            let align = alignment(def.data_type);
            if id == self.sorted_by && self.sorting.is_active() {
                let mark = if self.sorting == Sorting::Descending { " v" } else { " ^" };
                let label = format!("{}{mark}", def.name.full());
                let shown = crop_to_width(painter.metrics(), &label, cell.width(), 0);
                painter.aligned_text(color, cell, align, shown);
            } else {
                painter.aligned_text(color, cell, align, def.name.cropped());
            }
        }
        let line = painter.role(ThemeColor::Line);
        painter.line(row_rect.bl(), row_rect.br(), line, 1.0);
    }

    fn draw_row(&self, painter: &mut Painter, row_rect: Rect, row: &ListRow, text: Color) {
        let disabled = painter.role(ThemeColor::StdFgDisabled);
        for (id, def, cell) in self.cells(row_rect) {
            let Some(item) = row.get(id) else { continue };
            let color = item.text_color().unwrap_or(text);
            if def.data_type == DataType::CheckBox {
                let cb = checkbox_square(cell).inset(3);
                let cb = cb + Point::new(cell.left() + (cell.width() - cb.width()) / 2 - cb.left(), 0);
                let color = if item.is_enabled() { color } else { disabled };
                painter.check_box(cb, color, item.is_checked(), false);
            } else {
                painter.aligned_text(color, cell, alignment(def.data_type), item.cropped());
            }
        }
    }

    fn draw_scrollbar(&self, painter: &mut Painter, r: Rect) {
        let Some((thumb_top, thumb_bottom)) = self.scroll_thumb() else { return };
        let bar = Rect::new(r.right() - self.char_width(), r.top() - self.line_height, r.right(), r.bottom());
        let (track, fill) = (painter.role(ThemeColor::ScrollbarBg), painter.role(ThemeColor::ScrollbarFg));
        painter.fill_rect(bar, track);

        let thumb = Rect::new(bar.left(), r.top() + thumb_top, bar.right(), r.top() + thumb_bottom).inset(1);
        painter.fill_rect(thumb, fill);
    }
}

impl Default for ListBox {
    fn default() -> Self {
        Self::new()
    }
}

fn alignment(data_type: DataType) -> TextAlign {
    match data_type {
        DataType::CheckBox => TextAlign::Center,
        t if t.is_right_aligned() => TextAlign::Right,
        _ => TextAlign::Left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::WidgetId;
    use crate::list::ListItem;
    use kestrel_engine::host::MemoryClipboard;
    use kestrel_engine::input::KeyState;
    use kestrel_engine::text::MonoMetrics;

    const ID: WidgetId = WidgetId(7);

    fn planes() -> ListBox {
        let mut list = ListBox::new()
            .column(0, ColumnDef::new("Name", 60, DataType::String))
            .column(1, ColumnDef::new("Pax", 40, DataType::Int));
        list.add_row(ListRow::new(RefCon(1), [ListItem::from("Cessna"), ListItem::from(2)]));
        list.add_row(ListRow::new(RefCon(2), [ListItem::from("Airbus"), ListItem::from(186)]));
        list.add_row(ListRow::new(RefCon(3), [ListItem::from("ATR"), ListItem::from(70)]));
        list
    }

    fn refcons(list: &ListBox) -> Vec<u64> {
        list.rows().iter().map(|r| r.refcon().0).collect()
    }

    /// Font line height 10 at 200 % → 20 px rows.
    fn bound(mut list: ListBox, height: i32) -> ListBox {
        list.bind(SharedMetrics::new(MonoMetrics::new(6, 10)), DEFAULT_LINE_HEIGHT_PCT);
        list.set_geometry(Some(Rect::new(0, 0, 200, -height)));
        list
    }

    fn click(list: &mut ListBox, p: Point) -> Vec<UiMessage> {
        let mut out = Vec::new();
        let mut clip = MemoryClipboard::default();
        let mut ctx = EventCtx::new(ID, &mut out, &mut clip);
        list.mouse_click(p, MouseButton::Left, MouseStatus::Down, &mut ctx);
        out
    }

    fn key(list: &mut ListBox, k: Key) -> Vec<UiMessage> {
        let mut out = Vec::new();
        let mut clip = MemoryClipboard::default();
        let mut ctx = EventCtx::new(ID, &mut out, &mut clip);
        list.key(&KeyEvent::pressed(k), &mut ctx);
        out
    }

    fn many(n: u64) -> ListBox {
        let mut list = ListBox::new().column(0, ColumnDef::new("N", 60, DataType::Int));
        for i in 1..=n {
            list.add_row(ListRow::new(RefCon(i), [ListItem::from(i as i64)]));
        }
        list
    }

    // ── upsert / sort ─────────────────────────────────────────────────────

    #[test]
    fn insert_and_sort_by_pax() {
        let mut list = planes();
        assert!(list.set_sorting(1, Sorting::Ascending));
        assert_eq!(refcons(&list), vec![1, 3, 2]);
        assert!(list.set_sorting(1, Sorting::Descending));
        assert_eq!(refcons(&list), vec![2, 3, 1]);
        assert!(list.set_sorting(0, Sorting::Ascending));
        assert_eq!(refcons(&list), vec![3, 2, 1]);
    }

    #[test]
    fn upsert_keeps_sequence_and_position() {
        let mut list = planes();
        let seq = list.find_row(RefCon(1)).map(ListRow::seq);
        for pax in [4, 6, 8] {
            let row = list.add_row(ListRow::new(RefCon(1), [ListItem::from("Cessna 172"), ListItem::from(pax)]));
            assert_eq!(Some(row.seq()), seq);
        }
        assert_eq!(list.len(), 3);
        assert!(list.set_sorting(1, Sorting::Descending));
        assert!(list.set_sorting(1, Sorting::Unsorted));
        assert_eq!(refcons(&list), vec![1, 2, 3]);
        assert_eq!(list.row(0).map(|r| r[1].as_int()), Some(8));
    }

    #[test]
    fn upsert_into_sorted_list_resorts() {
        let mut list = planes();
        list.set_sorting(1, Sorting::Ascending);
        let row = list.add_row(ListRow::new(RefCon(1), [ListItem::from("Cessna"), ListItem::from(500)]));
        assert_eq!(row.refcon(), RefCon(1));
        assert_eq!(refcons(&list), vec![3, 2, 1]);
    }

    #[test]
    fn sorting_unknown_or_null_column_is_refused() {
        let mut list = planes().column(4, ColumnDef::new("Fuel", 40, DataType::Double));
        assert!(!list.set_sorting(9, Sorting::Ascending));
        assert!(!list.set_sorting(3, Sorting::Ascending));
        assert_eq!(list.sorting(), Sorting::Unsorted);
        assert_eq!(list.columns().len(), 5);
        assert!(list.col(2).is_none());
    }

    #[test]
    fn remove_and_clear() {
        let mut list = planes();
        assert!(list.select_row(RefCon(2)));
        assert!(list.remove_row(RefCon(2)));
        assert!(!list.remove_row(RefCon(2)));
        assert_eq!(list.selected(), None);
        assert!(list.find_row(RefCon::NULL).is_none());
        list.clear();
        assert!(list.is_empty());
        // sequence numbers are never reused
        let row = list.add_row(ListRow::new(RefCon(5), [ListItem::from("x")]));
        assert_eq!(row.seq(), 4);
    }

    // ── scrolling ─────────────────────────────────────────────────────────

    #[test]
    fn rows_visible_excludes_header() {
        let list = bound(many(3), 100);
        assert_eq!(list.line_height(), 20);
        assert_eq!(list.rows_visible(), 4);
        assert_eq!(list.scroll_thumb(), None);
    }

    #[test]
    fn scroll_is_clamped_after_every_operation() {
        let mut list = bound(many(10), 100);
        let check = |l: &ListBox| {
            assert!(l.first_visible() <= l.len().saturating_sub(l.rows_visible()));
        };
        for delta in [3, 100, -2, -100, 7] {
            list.scroll_by(delta);
            check(&list);
        }
        assert_eq!(list.first_visible(), 6);

        list.set_geometry(Some(Rect::new(0, 0, 200, -160)));
        check(&list);
        assert_eq!(list.first_visible(), 3);

        for i in 1..=8 {
            list.remove_row(RefCon(i));
            check(&list);
        }
        assert_eq!(list.first_visible(), 0);
    }

    #[test]
    fn selecting_scrolls_row_into_view() {
        let mut list = bound(many(10), 100);
        assert!(list.select_row(RefCon(9)));
        assert_eq!(list.first_visible(), 5);
        assert!(list.select_row(RefCon(2)));
        assert_eq!(list.first_visible(), 1);
        assert!(!list.select_row(RefCon(42)));
        assert_eq!(list.selected(), None);
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn header_clicks_cycle_sorting() {
        let mut list = bound(planes(), 100);
        click(&mut list, Point::new(70, -5));
        assert_eq!((list.sort_column(), list.sorting()), (1, Sorting::Ascending));
        click(&mut list, Point::new(70, -5));
        assert_eq!(list.sorting(), Sorting::Descending);
        click(&mut list, Point::new(70, -5));
        assert_eq!(list.sorting(), Sorting::Unsorted);
        click(&mut list, Point::new(10, -5));
        assert_eq!((list.sort_column(), list.sorting()), (0, Sorting::Ascending));

        let mut fixed = bound(planes().sorted(0, Sorting::Unsupported), 100);
        click(&mut fixed, Point::new(70, -5));
        assert_eq!(fixed.sorting(), Sorting::Unsupported);
    }

    #[test]
    fn row_click_selects_and_notifies() {
        let mut list = bound(planes(), 100);
        let out = click(&mut list, Point::new(10, -45));
        assert_eq!(list.selected(), Some(RefCon(2)));
        assert_eq!(out, vec![UiMessage::ListSelectionChanged { id: ID, row: RefCon(2) }]);
        // below the last row
        assert!(click(&mut list, Point::new(10, -90)).is_empty());
    }

    #[test]
    fn checkbox_cell_toggles_when_enabled() {
        let mut list = ListBox::new()
            .column(0, ColumnDef::new("Name", 60, DataType::String))
            .column(1, ColumnDef::new("Boarded", 40, DataType::CheckBox));
        list.add_row(ListRow::new(RefCon(1), [ListItem::from("a"), ListItem::check(false)]));
        list.add_row(ListRow::new(RefCon(2), [ListItem::from("b"), ListItem::check(false).enabled(false)]));
        let mut list = bound(list, 100);

        click(&mut list, Point::new(80, -25));
        click(&mut list, Point::new(80, -45));
        assert!(list.find_row(RefCon(1)).is_some_and(|r| r[1].is_checked()));
        assert!(list.find_row(RefCon(2)).is_some_and(|r| !r[1].is_checked()));
        assert_eq!(list.selected(), Some(RefCon(2)));
    }

    #[test]
    fn scrollbar_click_pages() {
        let mut list = bound(many(20), 100);
        // thumb covers the first rows; below it pages down
        click(&mut list, Point::new(198, -95));
        assert_eq!(list.first_visible(), 3);
        click(&mut list, Point::new(198, -25));
        assert_eq!(list.first_visible(), 0);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn column_hit_test() {
        let list = planes().column(2, ColumnDef::new("Hidden", 30, DataType::String).hidden());
        assert_eq!(list.find_col_idx(0), Some(0));
        assert_eq!(list.find_col_idx(61), Some(1));
        assert_eq!(list.find_col_idx(500), Some(1));
        assert_eq!(ListBox::new().find_col_idx(0), None);
    }

    // ── keyboard ──────────────────────────────────────────────────────────

    #[test]
    fn arrow_keys_move_selection() {
        let mut list = bound(many(10), 100);
        let out = key(&mut list, Key::ArrowDown);
        assert_eq!(out, vec![UiMessage::ListSelectionChanged { id: ID, row: RefCon(1) }]);
        key(&mut list, Key::ArrowDown);
        assert_eq!(list.selected(), Some(RefCon(2)));
        key(&mut list, Key::End);
        assert_eq!(list.selected(), Some(RefCon(10)));
        assert_eq!(list.first_visible(), 6);
        assert!(key(&mut list, Key::ArrowDown).is_empty());
        key(&mut list, Key::PageUp);
        assert_eq!(list.selected(), Some(RefCon(7)));
        key(&mut list, Key::Home);
        assert_eq!((list.selected(), list.first_visible()), (Some(RefCon(1)), 0));

        let mut out = Vec::new();
        let mut clip = MemoryClipboard::default();
        let mut ctx = EventCtx::new(ID, &mut out, &mut clip);
        let release = KeyEvent { state: KeyState::Released, ..KeyEvent::pressed(Key::ArrowDown) };
        list.key(&release, &mut ctx);
        assert!(out.is_empty());
    }

    // ── cropping ──────────────────────────────────────────────────────────

    #[test]
    fn cells_crop_to_column_width() {
        let mut list = ListBox::new()
            .column(0, ColumnDef::new("Pax", 30, DataType::Int))
            .column(1, ColumnDef::new("Name", 40, DataType::String));
        list.add_row(ListRow::new(RefCon(1), [ListItem::from(123456), ListItem::from("Lockheed")]));
        let list = bound(list, 100);

        let row = list.find_row(RefCon(1)).map(|r| (r[0].cropped().to_owned(), r[1].cropped().to_owned()));
        // 30 px → 5 chars; 40 px minus one char gap → 5 chars
        assert_eq!(row, Some(("12345".to_owned(), "Lockh".to_owned())));
        assert_eq!(list.columns()[1].name().cropped(), "Name");
    }
}
