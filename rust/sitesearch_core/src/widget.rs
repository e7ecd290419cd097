//! The search box: event handlers tying the live snapshot, the suggestion
//! session and the presentation/navigation collaborators together.

use std::sync::Arc;
use std::time::Instant;

use log::debug;

use crate::config::WidgetConfig;
use crate::record::Record;
use crate::resolve::{domain_url, resolve_url};
use crate::session::{Phase, QuerySession};
use crate::snapshot::SharedSnapshot;

/// Renders suggestions.
pub trait Presenter {
    /// Show these matches, replacing whatever was shown.
    fn show(&mut self, matches: &[Record]);
    /// Highlight row `active`, or none.
    fn select(&mut self, active: Option<usize>);
    /// Hide the suggestion surface.
    fn hide(&mut self);
}

/// Opens a resolved URL in a new, non-opener-linked browsing context.
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

/// One search box bound to a shared snapshot.
pub struct SearchBox<P, N> {
    snapshot: Arc<SharedSnapshot>,
    config: WidgetConfig,
    session: QuerySession,
    text: String,
    presenter: P,
    navigator: N,
}

impl<P: Presenter, N: Navigator> SearchBox<P, N> {
    pub fn new(snapshot: Arc<SharedSnapshot>, config: WidgetConfig, presenter: P, navigator: N) -> Self {
        SearchBox {
            snapshot,
            config,
            session: QuerySession::new(),
            text: String::new(),
            presenter,
            navigator,
        }
    }

    /// The input text changed.
    pub fn input(&mut self, text: &str) {
        self.text = text.to_string();
        let prefix = text.trim();
        if prefix.is_empty() {
            self.close();
            return;
        }

        let snapshot = self.snapshot.current();
        let matches: Vec<Record> = snapshot
            .query(prefix, self.config.max_suggestions)
            .into_iter()
            .cloned()
            .collect();
        debug!("query {:?}: {} matches", prefix, matches.len());

        if matches.is_empty() {
            self.close();
            return;
        }
        self.presenter.show(&matches);
        self.session.set_matches(matches);
    }

    /// Arrow-key style selection move. Wraps at both ends.
    pub fn move_selection(&mut self, delta: isize) {
        if self.session.phase() == Phase::Idle {
            return;
        }
        let active = self.session.move_selection(delta);
        self.presenter.select(active);
    }

    /// Explicit dismissal (Escape).
    pub fn dismiss(&mut self) {
        self.close();
    }

    /// Input lost focus at `now`. Suggestions stay up for the grace window.
    pub fn blur(&mut self, now: Instant) {
        self.session.begin_blur(now + self.config.blur_grace());
    }

    /// Input regained focus.
    pub fn focus(&mut self) {
        self.session.cancel_blur();
    }

    /// Timer tick: closes the suggestions once a blur's grace window is over.
    pub fn tick(&mut self, now: Instant) {
        if self.session.blur_expired(now) {
            self.close();
        }
    }

    /// Pointer pick of row `index`. Commits that match.
    pub fn pick(&mut self, index: usize) -> Option<String> {
        let record = self.session.matches().get(index)?;
        let url = domain_url(&record.domain);
        self.commit(url)
    }

    /// Submit: the active match if any, else the typed text.
    pub fn submit(&mut self) -> Option<String> {
        let url = match self.session.active_record() {
            Some(record) => Some(domain_url(&record.domain)),
            None => resolve_url(&self.text, self.snapshot.current().store()),
        };
        match url {
            Some(url) => self.commit(url),
            None => {
                self.close();
                None
            }
        }
    }

    fn commit(&mut self, url: String) -> Option<String> {
        debug!("navigating to {}", url);
        self.navigator.navigate(&url);
        self.close();
        Some(url)
    }

    fn close(&mut self) {
        if self.session.phase() != Phase::Idle {
            self.presenter.hide();
        }
        self.session.reset();
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn session(&self) -> &QuerySession {
        &self.session
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;
    use serde_json::json;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct Recorder {
        shown: Vec<Vec<String>>,
        selected: Vec<Option<usize>>,
        hides: usize,
    }

    impl Presenter for Recorder {
        fn show(&mut self, matches: &[Record]) {
            self.shown.push(matches.iter().map(|r| r.name.clone()).collect());
        }
        fn select(&mut self, active: Option<usize>) {
            self.selected.push(active);
        }
        fn hide(&mut self) {
            self.hides += 1;
        }
    }

    #[derive(Debug, Default)]
    struct Visits(Vec<String>);

    impl Navigator for Visits {
        fn navigate(&mut self, url: &str) {
            self.0.push(url.to_string());
        }
    }

    fn search_box() -> SearchBox<Recorder, Visits> {
        SearchBox::new(
            Arc::new(SharedSnapshot::default()),
            WidgetConfig::default(),
            Recorder::default(),
            Visits::default(),
        )
    }

    #[test]
    fn typing_shows_matches() {
        let mut sb = search_box();
        sb.input("g");
        assert_eq!(sb.phase(), Phase::MatchesShown);
        assert_eq!(sb.presenter().shown, vec![vec!["github", "google"]]);
    }

    #[test]
    fn no_matches_hides() {
        let mut sb = search_box();
        sb.input("g");
        sb.input("gz");
        assert_eq!(sb.phase(), Phase::Idle);
        assert_eq!(sb.presenter().hides, 1);
    }

    #[test]
    fn clearing_text_goes_idle() {
        let mut sb = search_box();
        sb.input("a");
        sb.input("   ");
        assert_eq!(sb.phase(), Phase::Idle);
    }

    #[test]
    fn arrow_then_submit_uses_selection() {
        let mut sb = search_box();
        sb.input("g");
        sb.move_selection(1);
        sb.move_selection(1);
        assert_eq!(sb.presenter().selected, vec![Some(0), Some(1)]);
        assert_eq!(sb.submit().as_deref(), Some("https://google.com"));
        assert_eq!(sb.navigator().0, vec!["https://google.com"]);
        assert_eq!(sb.phase(), Phase::Idle);
    }

    #[test]
    fn move_selection_when_idle_is_ignored() {
        let mut sb = search_box();
        sb.move_selection(1);
        assert!(sb.presenter().selected.is_empty());
    }

    #[test]
    fn submit_typed_name() {
        let mut sb = search_box();
        sb.input("GitHub");
        assert_eq!(sb.submit().as_deref(), Some("https://github.com"));
    }

    #[test]
    fn submit_blank_does_not_navigate() {
        let mut sb = search_box();
        sb.input("  ");
        assert_eq!(sb.submit(), None);
        assert!(sb.navigator().0.is_empty());
    }

    #[test]
    fn submit_free_text() {
        let mut sb = search_box();
        sb.input("example.org");
        assert_eq!(sb.submit().as_deref(), Some("https://example.org"));
        sb.input("http://example.org");
        assert_eq!(sb.submit().as_deref(), Some("http://example.org"));
    }

    #[test]
    fn escape_dismisses() {
        let mut sb = search_box();
        sb.input("a");
        sb.move_selection(-1);
        sb.dismiss();
        assert_eq!(sb.phase(), Phase::Idle);
        assert_eq!(sb.session().active(), None);
    }

    #[test]
    fn pick_inside_blur_grace_commits() {
        let mut sb = search_box();
        let now = Instant::now();
        sb.input("y");
        sb.blur(now);
        sb.tick(now + Duration::from_millis(10));
        assert_eq!(sb.phase(), Phase::MatchesShown);
        assert_eq!(sb.pick(0).as_deref(), Some("https://youtube.com"));
        assert_eq!(sb.phase(), Phase::Idle);
    }

    #[test]
    fn blur_closes_after_grace() {
        let mut sb = search_box();
        let now = Instant::now();
        sb.input("y");
        sb.blur(now);
        sb.tick(now + Duration::from_millis(150));
        assert_eq!(sb.phase(), Phase::Idle);
        assert_eq!(sb.pick(0), None);
    }

    #[test]
    fn refocus_cancels_blur() {
        let mut sb = search_box();
        let now = Instant::now();
        sb.input("y");
        sb.blur(now);
        sb.focus();
        sb.tick(now + Duration::from_secs(1));
        assert_eq!(sb.phase(), Phase::MatchesShown);
    }

    #[test]
    fn respects_max_suggestions() {
        let shared = Arc::new(SharedSnapshot::default());
        let config = WidgetConfig {
            max_suggestions: 2,
            ..WidgetConfig::default()
        };
        let mut sb = SearchBox::new(shared, config, Recorder::default(), Visits::default());
        sb.input("a");
        assert_eq!(sb.presenter().shown, vec![vec!["airbnb", "amazon"]]);
    }

    #[test]
    fn installed_snapshot_is_used_for_next_query() {
        let shared = Arc::new(SharedSnapshot::default());
        let mut sb = SearchBox::new(
            Arc::clone(&shared),
            WidgetConfig::default(),
            Recorder::default(),
            Visits::default(),
        );
        sb.input("git");
        shared.install(RecordStore::from_json(&json!([
            {"name": "gitea", "domain": "gitea.io"}
        ])));
        // Shown matches survive the swap until the next keystroke.
        assert_eq!(sb.session().matches()[0].name, "github");
        sb.input("gite");
        assert_eq!(sb.session().matches()[0].domain, "gitea.io");
    }
}
