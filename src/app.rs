use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::trace;

use crate::filter::HistoryFilter;
use crate::history::HistoryViewModel;
use crate::runtime::{HistoryEvent, HistoryEventSource, Runner, Ticker};

const PAGE_SIZE: usize = 3;

/// What the event loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// The history screen: view model plus list scroll position
#[derive(Debug)]
pub struct App {
    pub view: HistoryViewModel,
    pub scroll_offset: usize,
}

impl App {
    pub fn new(view: HistoryViewModel) -> Self {
        Self {
            view,
            scroll_offset: 0,
        }
    }

    pub fn select_filter(&mut self, filter: HistoryFilter) {
        if filter != self.view.selected_filter() {
            self.view.select_filter(filter);
            self.scroll_offset = 0;
        }
    }

    fn max_scroll(&self) -> usize {
        self.view.visible_sessions().len().saturating_sub(1)
    }

    fn scroll_by(&mut self, delta: isize) {
        let next = self.scroll_offset.saturating_add_signed(delta);
        self.scroll_offset = next.min(self.max_scroll());
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Control::Quit;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Control::Quit,
            KeyCode::Right | KeyCode::Tab => {
                self.select_filter(self.view.selected_filter().next());
            }
            KeyCode::Left | KeyCode::BackTab => {
                self.select_filter(self.view.selected_filter().previous());
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.select_filter(HistoryFilter::ALL[idx]);
            }
            KeyCode::Down => self.scroll_by(1),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(PAGE_SIZE as isize),
            KeyCode::PageUp => self.scroll_by(-(PAGE_SIZE as isize)),
            KeyCode::Home => self.scroll_offset = 0,
            KeyCode::End => self.scroll_offset = self.max_scroll(),
            _ => {}
        }

        Control::Continue
    }

    /// Draw, then redraw after every key or resize until a quit key arrives
    pub fn run<B, E, T>(
        &mut self,
        terminal: &mut Terminal<B>,
        runner: &Runner<E, T>,
    ) -> io::Result<()>
    where
        B: Backend,
        E: HistoryEventSource,
        T: Ticker,
    {
        terminal.draw(|f| f.render_widget(&*self, f.area()))?;

        loop {
            match runner.step()? {
                HistoryEvent::Tick => {}
                HistoryEvent::Resize => {
                    terminal.draw(|f| f.render_widget(&*self, f.area()))?;
                }
                HistoryEvent::Key(key) => {
                    trace!(?key, "key");
                    if self.on_key(key) == Control::Quit {
                        break;
                    }
                    terminal.draw(|f| f.render_widget(&*self, f.area()))?;
                }
            }
        }

        Ok(())
    }
}
