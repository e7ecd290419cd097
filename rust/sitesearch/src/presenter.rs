//! Plain-text rendering of the suggestion list.

use std::io::Write;

use log::error;
use sitesearch_core::{Presenter, Record};

/// Renders suggestions as numbered lines; the active row is marked `>`.
#[derive(Debug)]
pub struct TextPresenter<W> {
    out: W,
    rows: Vec<Record>,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, active: Option<usize>) {
        let mut text = String::new();
        for (i, record) in self.rows.iter().enumerate() {
            let marker = if Some(i) == active { '>' } else { ' ' };
            text.push_str(&format!("{} {}. {} ({})\n", marker, i + 1, record.name, record.domain));
        }
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            error!("Failed to render suggestions: {}", e);
        }
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn show(&mut self, matches: &[Record]) {
        self.rows = matches.to_vec();
        self.render(None);
    }

    fn select(&mut self, active: Option<usize>) {
        self.render(active);
    }

    fn hide(&mut self) {
        self.rows.clear();
    }
}
