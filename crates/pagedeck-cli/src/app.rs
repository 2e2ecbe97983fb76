//! Terminal lifecycle and the interaction loop gluing the pager host to
//! the navigator.

use std::io;
use std::rc::Rc;

use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyCode, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};

use pagedeck_core::{DeckConfig, PageNavigator, SettleObserver};
use pagedeck_tui::{
    event::{AppEvent, EventHandler},
    widgets::{BottomLineWidget, IndicatorWidget, PagerView, TitleBarWidget},
    PagerEvent, TerminalPager,
};

use crate::pages::{self, DemoPage};

/// Logs every completed navigation.
struct LoggingObserver;

impl SettleObserver<DemoPage> for LoggingObserver {
    fn page_settled(&self, page: &DemoPage, index: usize) {
        tracing::info!(index, title = ?pagedeck_core::Page::title(page), "page settled");
    }
}

pub fn run(config: DeckConfig, page_count: usize) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config, page_count);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: DeckConfig,
    page_count: usize,
) -> Result<()> {
    let width = terminal.size()?.width;
    let pager = TerminalPager::new(config.slide.clone(), width);

    let mut navigator = PageNavigator::new(pager, config.navigator.clone());
    // Weak reference: dropping the observer would silently stop the
    // notifications, so keep it alive for the whole loop.
    let observer: Rc<dyn SettleObserver<DemoPage>> = Rc::new(LoggingObserver);
    navigator.set_delegate(Rc::downgrade(&observer));

    navigator.add(pages::build_deck(page_count));
    navigator.host_mut().set_page_count(page_count);
    navigator.start();

    let events = EventHandler::new(navigator.host().tick_duration());

    loop {
        match events.next()? {
            Some(AppEvent::Key(key)) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Left | KeyCode::Char('h') => navigator.move_back(),
                KeyCode::Right | KeyCode::Char('l') => navigator.move_forward(),
                KeyCode::Char('s') => {
                    let enabled = navigator.config().enable_swipe;
                    navigator.set_swipe_enabled(!enabled);
                }
                KeyCode::Char(c @ '1'..='9') => {
                    navigator.go_to(c as usize - '1' as usize);
                }
                _ => {}
            },
            Some(AppEvent::Mouse(mouse)) => handle_mouse(&mut navigator, mouse),
            Some(AppEvent::Resize(w, _)) => navigator.host_mut().set_visible_width(w),
            Some(AppEvent::Tick) | None => {}
        }

        if let Some(PagerEvent::Settled { index }) = navigator.host_mut().advance() {
            if let Some(id) = navigator.registry().id_at(index) {
                navigator.handle_settle(id);
            }
        }
        navigator.update_page_progresses();

        terminal.draw(|frame| draw(frame, &mut navigator))?;
    }

    Ok(())
}

fn handle_mouse(navigator: &mut PageNavigator<DemoPage, TerminalPager>, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            navigator.host_mut().begin_drag(mouse.column);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            navigator.host_mut().drag_to(mouse.column);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            navigator.host_mut().end_drag();
        }
        _ => {}
    }
}

fn draw(frame: &mut Frame, navigator: &mut PageNavigator<DemoPage, TerminalPager>) {
    let [title_area, pager_area, dots_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    navigator.host_mut().set_visible_width(pager_area.width);

    TitleBarWidget::render(frame, title_area, navigator.host().title());
    render_pager(frame, pager_area, navigator);
    let (current, count) = navigator.host().indicator();
    IndicatorWidget::render(frame, dots_area, current, count);
}

fn render_pager(
    frame: &mut Frame,
    area: Rect,
    navigator: &mut PageNavigator<DemoPage, TerminalPager>,
) {
    PagerView::render(frame, area, navigator);
    BottomLineWidget::render(frame, area, navigator.host().bottom_line_visible());
}
