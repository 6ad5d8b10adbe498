//! Headless walkthrough of a Kestrel window.
//!
//! Builds the flight board window, feeds it a scripted stream of host events
//! and logs what the widgets report back.
//!
//! Usage: `kestrel-studio [settings.toml] [font.ttf]`. Without a font the
//! window measures text with fixed-width metrics.

use anyhow::Context;
use kestrel_engine::logging::{init_logging, LoggingConfig};
use kestrel_ui::prelude::*;

/// Widgets the script talks to after building the window.
struct Board {
    flights: WidgetId,
    name: WidgetId,
    password: WidgetId,
    options: WidgetId,
    units: WidgetId,
    ok: WidgetId,
    delete_all: WidgetId,
}

const COL_NAME: usize = 0;
const COL_LOCATION: usize = 1;
const COL_BOARDED: usize = 2;
const COL_PAX: usize = 3;
const COL_FUEL: usize = 4;
const COL_TYPE: usize = 5;

const FONT_SIZE: f32 = 12.0;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => UiConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => UiConfig::default(),
    };
    let metrics = match args.next() {
        Some(path) => {
            let bytes = std::fs::read(&path).with_context(|| format!("reading {path}"))?;
            let font = FontdueMetrics::from_bytes(&bytes, FONT_SIZE).with_context(|| format!("loading {path}"))?;
            SharedMetrics::new(font)
        }
        None => SharedMetrics::new(MonoMetrics::default()),
    };

    let surface = Box::new(HeadlessSurface::new(Rect::new(100, 400, 650, 100)));
    let mut window = Container::new("TFWidget Example", surface, metrics)
        .with_config(config)
        .with_clipboard(open_clipboard());

    let board = build(&mut window)?;
    fill_flights(&mut window, board.flights)?;

    let mut frame = DrawList::new();
    window.draw(&mut frame);
    log::info!("first frame: {} draw commands", frame.len());

    run_script(&mut window, &board)?;
    Ok(())
}

/// The OS clipboard, or an in-process one where there is none (CI, SSH).
fn open_clipboard() -> Box<dyn Clipboard> {
    match SystemClipboard::open() {
        Ok(cb) => Box::new(cb),
        Err(e) => {
            log::warn!("{e}; falling back to an in-process clipboard");
            Box::new(MemoryClipboard::default())
        }
    }
}

// ── window ────────────────────────────────────────────────────────────────

fn build(window: &mut Container) -> anyhow::Result<Board> {
    let right_column = |top: EdgeRule, offset: i32, height: i32| {
        Placement::new()
            .left(EdgeRule::Percent, 62)
            .top(top, offset)
            .right(EdgeRule::FromOpposite, 0)
            .bottom(EdgeRule::FixedLen, height)
    };

    window.add(
        Placement::new().right(EdgeRule::Percent, 60),
        Widget::bold_label("Flights"),
    )?;

    let list = ListBox::new()
        .column(COL_NAME, ColumnDef::new("Name", 60, DataType::String))
        .column(COL_LOCATION, ColumnDef::new("Location", 60, DataType::String))
        .column(COL_BOARDED, ColumnDef::new("Boarded", 30, DataType::CheckBox))
        .column(COL_PAX, ColumnDef::new("Pax", 30, DataType::Int))
        .column(COL_FUEL, ColumnDef::new("Fuel", 50, DataType::Double))
        .column(COL_TYPE, ColumnDef::new("Type", 60, DataType::String))
        .sorted(COL_NAME, Sorting::Ascending);
    let flights = window.add(
        Placement::new()
            .top(EdgeRule::AfterPrev, -5)
            .right(EdgeRule::Percent, 60)
            .bottom(EdgeRule::FromOpposite, 30),
        Widget::list_box(list),
    )?;

    window.add(right_column(EdgeRule::Absolute, 0, 15), Widget::label("Name"))?;
    let name = window.add(
        right_column(EdgeRule::AfterPrev, -2, 15),
        Widget::edit_field("", EditField::new(20)),
    )?;
    window.add(right_column(EdgeRule::AfterPrev, -5, 15), Widget::label("Password"))?;
    let password = window.add(
        right_column(EdgeRule::AfterPrev, -2, 15),
        Widget::edit_field("", EditField::new(16).password(true)),
    )?;
    window.add(right_column(EdgeRule::AfterPrev, -5, 3), Widget::line())?;

    let options = ButtonArray::new(ArrayStyle::CheckBoxes, Orientation::Vertical)
        .with(ButtonElem::new(RefCon(1), "Show arrivals").selected(true))
        .with(ButtonElem::new(RefCon(2), "Show departures"))
        .with(ButtonElem::new(RefCon(3), "Highlight delays"));
    let options = window.add(
        right_column(EdgeRule::AfterPrev, -5, 45),
        Widget::new("", WidgetKind::ButtonArray(options)),
    )?;

    let units = ButtonArray::new(ArrayStyle::Radio, Orientation::Horizontal)
        .with(ButtonElem::new(RefCon(1), "kg").selected(true))
        .with(ButtonElem::new(RefCon(2), "lb"));
    let units = window.add(
        right_column(EdgeRule::AfterPrev, -5, 15),
        Widget::new("", WidgetKind::ButtonArray(units)),
    )?;

    let button_row = |left: EdgeRule, offset: i32, width: i32| {
        Placement::new()
            .left(left, offset)
            .top(EdgeRule::FromOpposite, 20)
            .right(EdgeRule::FixedLen, width)
            .bottom(EdgeRule::FixedLen, 15)
    };
    let ok = window.add(button_row(EdgeRule::Absolute, 0, 80), Widget::button("OK"))?;
    let delete_all = window.add(button_row(EdgeRule::AfterPrev, 10, 80), Widget::button("Delete All"))?;
    window.add(
        button_row(EdgeRule::AfterPrev, 10, 60),
        Widget::button("Disabled & too long").enabled(false),
    )?;

    window.set_default_button(ok)?;
    Ok(Board { flights, name, password, options, units, ok, delete_all })
}

fn fill_flights(window: &mut Container, id: WidgetId) -> anyhow::Result<()> {
    let list = window.list_box_mut(id)?;
    let flights: [(u64, &str, &str, bool, i32, f64, &str); 5] = [
        (1, "N123AB", "EDDF", true, 4, 212.5, "C172"),
        (2, "D-EKLM", "EDDM", false, 2, 88.0, "PA28"),
        (3, "G-OBOE", "EGLL", true, 180, 9650.25, "A320"),
        (4, "F-HBXA", "LFPG", false, 6, 1320.0, "PC12"),
        (5, "HB-LQA", "LSZH", true, 1, 45.75, "DR40"),
    ];
    for (refcon, name, location, boarded, pax, fuel, kind) in flights {
        let row = ListRow::new(
            RefCon(refcon),
            [
                ListItem::from(name),
                ListItem::from(location),
                ListItem::check(boarded).enabled(refcon != 3),
                ListItem::from(pax),
                ListItem::double(fuel, 1),
                ListItem::from(kind),
            ],
        );
        list.add_row(row);
    }
    let first = list.row(0).and_then(|r| r.get(COL_NAME)).map_or("", ListItem::as_str);
    log::info!("flight board: {} rows, first is {first}", list.len());
    Ok(())
}

// ── script ────────────────────────────────────────────────────────────────

/// Absolute position of a point given in usable-area coordinates.
fn to_screen(window: &Container, local: Point) -> Point {
    let frame = window.config().frame_thickness;
    window.surface().geometry().tl() + Point::new(frame + local.x, local.y - frame)
}

fn click(window: &mut Container, at: Point) {
    window.mouse_click(at, MouseButton::Left, MouseStatus::Down);
    window.mouse_click(at, MouseButton::Left, MouseStatus::Up);
}

fn type_text(window: &mut Container, text: &str) {
    for ch in text.chars() {
        window.key(&KeyEvent::typed(ch));
    }
}

fn run_script(window: &mut Container, board: &Board) -> anyhow::Result<()> {
    // Tab into the name field, type, and leave it.
    window.key(&KeyEvent::pressed(Key::Tab));
    window.key(&KeyEvent::pressed(Key::Tab));
    if window.focus_widget() == Some(board.name) {
        type_text(window, "Kestrel");
        // copy the name and paste it back once through the clipboard
        let ctrl = |c: char| KeyEvent::typed(c).with_modifiers(Modifiers::CTRL);
        window.key(&ctrl('c'));
        type_text(window, " ");
        window.key(&ctrl('v'));
    }
    window.key(&KeyEvent::pressed(Key::Tab));
    type_text(window, "hunter2");
    report(window, board, "typing")?;

    // Sort by fuel via the header, then pick the second visible row.
    let list_rect = window.bounds(board.flights).context("flight list has no bounds")?;
    let line = window.list_box(board.flights)?.line_height();
    let fuel_x = 60 + 60 + 30 + 30 + 10;
    let header = to_screen(window, Point::new(list_rect.left() + fuel_x, list_rect.top() - line / 2));
    let second_row = to_screen(window, Point::new(list_rect.left() + 5, list_rect.top() - line * 2 - line / 2));
    click(window, header);
    click(window, second_row);
    window.key(&KeyEvent::pressed(Key::ArrowDown));
    let middle = to_screen(window, list_rect.center());
    window.mouse_wheel(middle, 1);
    report(window, board, "list")?;

    window.click_button_elem(board.units, RefCon(2))?;
    window.click_button_elem(board.options, RefCon(2))?;
    report(window, board, "options")?;

    let ok_rect = window.bounds(board.ok).context("OK button has no bounds")?;
    let ok_at = to_screen(window, ok_rect.center());
    click(window, ok_at);
    window.key(&KeyEvent::pressed(Key::Escape));
    window.key(&KeyEvent::pressed(Key::Return));
    report(window, board, "buttons")?;

    let delete_rect = window.bounds(board.delete_all).context("Delete All has no bounds")?;
    let delete_at = to_screen(window, delete_rect.center());
    click(window, delete_at);
    report(window, board, "delete")?;

    for _ in 0..3 {
        let next = window.on_timer();
        log::debug!("timer tick, next in {next}s");
    }

    let mut frame = DrawList::new();
    window.draw(&mut frame);
    let texts: Vec<&str> = frame.texts().collect();
    log::info!("last frame: {} draw commands, texts {:?}", frame.len(), texts);
    Ok(())
}

/// Logs and reacts to everything the window posted since the last call.
fn report(window: &mut Container, board: &Board, step: &str) -> anyhow::Result<()> {
    for msg in window.drain_messages() {
        log::info!("[{step}] {msg:?}");
        match msg {
            UiMessage::ButtonClicked { id } if id == board.ok => {
                let name = window.edit_field_mut(board.name)?.text().to_owned();
                let pw_len = window.edit_field_mut(board.password)?.text().chars().count();
                log::info!("[{step}] OK: name {name:?}, password of {pw_len} chars");
            }
            UiMessage::ButtonClicked { id } if id == board.delete_all => {
                window.list_box_mut(board.flights)?.clear();
                log::info!("[{step}] flight board cleared");
            }
            UiMessage::ListSelectionChanged { row, .. } => {
                let list = window.list_box(board.flights)?;
                if let Some(r) = list.find_row(row) {
                    let cell = |col| r.get(col).map_or("", ListItem::as_str);
                    log::info!("[{step}] selected {} at {}", cell(COL_NAME), cell(COL_LOCATION));
                }
            }
            UiMessage::ButtonArrayClicked { id, elem, selected } if id == board.units => {
                log::info!("[{step}] units {} ({selected})", if elem == RefCon(1) { "kg" } else { "lb" });
            }
            _ => {}
        }
    }

    let list = window.list_box(board.flights)?;
    log::debug!(
        "[{step}] list: sort col {} {:?}, first visible {}, selected {:?}, types {:?}",
        list.sort_column(),
        list.sorting(),
        list.first_visible(),
        list.selected(),
        list.rows().iter().filter_map(|r| r.get(COL_TYPE)).map(ListItem::as_str).collect::<Vec<_>>(),
    );
    Ok(())
}
